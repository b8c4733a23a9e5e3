//! Wire records for the activities API, validated at the network boundary.
//!
//! DESIGN
//! ======
//! The backend returns the catalog as one JSON object keyed by activity name.
//! `Catalog` keeps the backend's key order because that order is what the
//! board shows when no sort applies. Anything that does not fit these shapes
//! is reported as `ApiError::Malformed` instead of leaking half-parsed values
//! into rendering.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One activity as returned by `GET /activities`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Participant emails in sign-up order. Duplicates are passed through.
    pub participants: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Free-form start time, parsed only for sorting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl Activity {
    /// Remaining capacity. Negative when the backend over-fills an activity.
    pub fn spots_left(&self) -> i64 {
        let taken = i64::try_from(self.participants.len()).unwrap_or(i64::MAX);
        i64::from(self.max_participants) - taken
    }
}

/// Full activity catalog, in backend order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<(String, Activity)>,
}

impl Catalog {
    /// Build a catalog from `(name, activity)` pairs.
    ///
    /// A repeated name replaces the earlier activity but keeps its position.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, Activity)>) -> Self {
        let mut catalog = Self::default();
        for (name, activity) in entries {
            catalog.insert(name, activity);
        }
        catalog
    }

    /// Parse a `GET /activities` response body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Malformed` if the body is not an object of activity records.
    pub fn parse(body: &str) -> Result<Self, ApiError> {
        serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))
    }

    pub fn insert(&mut self, name: String, activity: Activity) {
        if let Some(slot) = self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            slot.1 = activity;
        } else {
            self.entries.push((name, activity));
        }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, activity)| activity)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.entries
            .iter_mut()
            .find(|(existing, _)| existing == name)
            .map(|(_, activity)| activity)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(name, activity)| (name.as_str(), activity))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = Catalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping activity names to activity records")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Catalog, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut catalog = Catalog::default();
                while let Some((name, activity)) = access.next_entry::<String, Activity>()? {
                    catalog.insert(name, activity);
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

impl Serialize for Catalog {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, activity) in &self.entries {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

/// Interpreted result of a sign-up or unregister request that reached the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// 2xx with the server's confirmation text.
    Accepted { message: String },
    /// Non-2xx. `detail` is the server's explanation when the body carried one.
    Rejected { status: u16, detail: Option<String> },
}

/// Failures that prevent a request from producing a usable response.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (transport error, unreadable body).
    #[error("request failed: {0}")]
    Network(String),

    /// The catalog endpoint answered with a non-2xx status.
    #[error("unexpected status {status}")]
    Status { status: u16 },

    /// The body did not match the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// HTTP is only wired up in the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}
