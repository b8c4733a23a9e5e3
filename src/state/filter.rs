//! Search, category filter, and sort over the in-memory catalog.
//!
//! DESIGN
//! ======
//! Everything here is a pure function of `Catalog` + `FilterState`, so the
//! list re-renders on every keystroke without touching the network.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use std::cmp::Ordering;

use crate::net::types::{Activity, Catalog};
use crate::util::activity_time::parse_activity_time;

/// Ordering applied to the visible activities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortMode {
    #[default]
    NameAsc,
    NameDesc,
    /// Most remaining spots first.
    SpotsMost,
    /// Fewest remaining spots first.
    SpotsLeast,
    /// Earliest parsed `time` first.
    Time,
    /// Unknown select value; keeps catalog order.
    Unsorted,
}

impl SortMode {
    /// Options offered by the sort dropdown, as `(mode, label)`.
    pub const OPTIONS: [(SortMode, &'static str); 5] = [
        (SortMode::NameAsc, "Name (A-Z)"),
        (SortMode::NameDesc, "Name (Z-A)"),
        (SortMode::SpotsMost, "Most spots available"),
        (SortMode::SpotsLeast, "Fewest spots available"),
        (SortMode::Time, "Start time"),
    ];

    /// Map a `<select>` value to a mode. `name` is accepted as `name-asc`.
    pub fn from_value(value: &str) -> Self {
        match value {
            "name-asc" | "name" => Self::NameAsc,
            "name-desc" => Self::NameDesc,
            "spots-most" => Self::SpotsMost,
            "spots-least" => Self::SpotsLeast,
            "time" => Self::Time,
            _ => Self::Unsorted,
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
            Self::SpotsMost => "spots-most",
            Self::SpotsLeast => "spots-least",
            Self::Time => "time",
            Self::Unsorted => "",
        }
    }
}

/// Current search/sort/category selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub sort: SortMode,
    /// Exact category to keep; `None` shows every category.
    pub category: Option<String>,
}

impl FilterState {
    /// Whether the search box holds any text (drives the `has-text` class).
    pub fn has_search_text(&self) -> bool {
        !self.search.is_empty()
    }

    /// Search and category predicate for a single activity.
    pub fn matches(&self, name: &str, activity: &Activity) -> bool {
        search_matches(&self.search.to_lowercase(), name, activity) && self.category_matches(activity)
    }

    fn category_matches(&self, activity: &Activity) -> bool {
        match &self.category {
            None => true,
            Some(wanted) => activity.category.as_deref() == Some(wanted.as_str()),
        }
    }
}

fn search_matches(needle_lower: &str, name: &str, activity: &Activity) -> bool {
    needle_lower.is_empty()
        || name.to_lowercase().contains(needle_lower)
        || activity.description.to_lowercase().contains(needle_lower)
        || activity.schedule.to_lowercase().contains(needle_lower)
}

/// Case-insensitive name ordering; names equal ignoring case put the
/// lowercase form first (`"apple"` before `"Apple"`).
///
/// Accented letters compare by code point, so `"Élan"` sorts after `"Zumba"`.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

fn compare_times(a: &Activity, b: &Activity) -> Ordering {
    let a_time = a.time.as_deref().and_then(parse_activity_time);
    let b_time = b.time.as_deref().and_then(parse_activity_time);
    match (a_time, b_time) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Comparator for two catalog entries under `sort`.
pub fn compare(sort: SortMode, a: (&str, &Activity), b: (&str, &Activity)) -> Ordering {
    let (a_name, a_activity) = a;
    let (b_name, b_activity) = b;
    match sort {
        SortMode::NameAsc => locale_compare(a_name, b_name),
        SortMode::NameDesc => locale_compare(b_name, a_name),
        SortMode::SpotsMost => b_activity.spots_left().cmp(&a_activity.spots_left()),
        SortMode::SpotsLeast => a_activity.spots_left().cmp(&b_activity.spots_left()),
        SortMode::Time => compare_times(a_activity, b_activity),
        SortMode::Unsorted => Ordering::Equal,
    }
}

/// Filtered and sorted `(name, activity)` pairs to render.
///
/// The sort is stable, so ties keep catalog order.
pub fn visible_activities<'a>(catalog: &'a Catalog, filter: &FilterState) -> Vec<(&'a str, &'a Activity)> {
    let needle = filter.search.to_lowercase();
    let mut visible: Vec<(&str, &Activity)> = catalog
        .iter()
        .filter(|(name, activity)| search_matches(&needle, name, activity) && filter.category_matches(activity))
        .collect();
    visible.sort_by(|a, b| compare(filter.sort, *a, *b));
    visible
}

/// Distinct categories present in the catalog, sorted by name.
pub fn category_options(catalog: &Catalog) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for (_, activity) in catalog.iter() {
        if let Some(category) = &activity.category {
            if !categories.contains(category) {
                categories.push(category.clone());
            }
        }
    }
    categories.sort_by(|a, b| locale_compare(a, b));
    categories
}
