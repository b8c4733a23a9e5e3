//! Application state for the activity board and its event reducer.
//!
//! DESIGN
//! ======
//! One owned `BoardState` lives in a single `RwSignal`. UI handlers translate
//! DOM events into `BoardEvent`s and call `apply`; components render from the
//! resulting state (`list_view`, `activity_options`, `feedback`), so no view
//! code mutates the board directly.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use super::feedback::{FeedbackMessage, FeedbackState};
use super::filter::{FilterState, SortMode, visible_activities};
use crate::net::types::Catalog;

pub const LOADING_MESSAGE: &str = "Loading activities...";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load activities. Please try again later.";
pub const NO_MATCHES_MESSAGE: &str = "No activities match your criteria.";
pub const INCOMPLETE_SIGNUP_MESSAGE: &str = "Please choose an activity and enter an email.";

/// Where the catalog is in its fetch lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CatalogStatus {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// Draft values of the sign-up form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    /// Selected activity name; empty while the placeholder is selected.
    pub activity: String,
}

impl SignupForm {
    /// Validated `(activity, email)` ready to submit.
    ///
    /// # Errors
    ///
    /// Returns the message to show when either field is blank.
    pub fn submission(&self) -> Result<(String, String), &'static str> {
        let email = self.email.trim();
        if self.activity.is_empty() || email.is_empty() {
            return Err(INCOMPLETE_SIGNUP_MESSAGE);
        }
        Ok((self.activity.clone(), email.to_owned()))
    }
}

/// Render model for one activity card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub category: Option<String>,
    pub time: Option<String>,
    pub spots_left: i64,
    pub participants: Vec<String>,
}

impl CardView {
    pub fn availability(&self) -> String {
        format!("{} spots left", self.spots_left)
    }
}

/// Render model for the activities list region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Failed,
    NoMatches,
    Cards(Vec<CardView>),
}

/// Input events the board reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardEvent {
    CatalogLoaded(Catalog),
    CatalogFailed,
    SearchChanged(String),
    SearchCleared,
    /// Raw value of the sort `<select>`.
    SortChanged(String),
    /// Raw value of the category `<select>`; empty means all categories.
    CategoryChanged(String),
    EmailChanged(String),
    ActivitySelected(String),
    FeedbackShown(FeedbackMessage),
    FeedbackHidden,
    SignupFormReset,
}

impl BoardEvent {
    /// Whether the event edits search, sort, or category.
    pub fn changes_filter(&self) -> bool {
        matches!(
            self,
            Self::SearchChanged(_) | Self::SearchCleared | Self::SortChanged(_) | Self::CategoryChanged(_)
        )
    }
}

/// Full client state: catalog, filters, feedback, and sign-up form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardState {
    pub catalog: Catalog,
    pub status: CatalogStatus,
    pub filter: FilterState,
    pub feedback: FeedbackState,
    /// Sign-up dropdown entries after the placeholder. Grows as activities are
    /// displayed and is only reset by a catalog load, so names filtered out
    /// later stay selectable.
    pub activity_options: Vec<String>,
    pub signup: SignupForm,
    /// Set once any catalog load succeeded; a later failed reload keeps the
    /// previous catalog in memory.
    pub catalog_loaded: bool,
}

impl BoardState {
    pub fn apply(&mut self, event: BoardEvent) {
        match event {
            BoardEvent::CatalogLoaded(catalog) => {
                self.catalog = catalog;
                self.status = CatalogStatus::Ready;
                self.catalog_loaded = true;
                self.activity_options.clear();
                self.sync_activity_options();
            }
            BoardEvent::CatalogFailed => {
                self.status = CatalogStatus::Failed;
            }
            BoardEvent::SearchChanged(search) => {
                self.filter.search = search;
                self.rerender_from_memory();
            }
            BoardEvent::SearchCleared => {
                self.filter.search.clear();
                self.rerender_from_memory();
            }
            BoardEvent::SortChanged(value) => {
                self.filter.sort = SortMode::from_value(&value);
                self.rerender_from_memory();
            }
            BoardEvent::CategoryChanged(value) => {
                self.filter.category = if value.is_empty() { None } else { Some(value) };
                self.rerender_from_memory();
            }
            BoardEvent::EmailChanged(email) => self.signup.email = email,
            BoardEvent::ActivitySelected(activity) => self.signup.activity = activity,
            BoardEvent::FeedbackShown(message) => self.feedback.show(message),
            BoardEvent::FeedbackHidden => self.feedback.hide(),
            BoardEvent::SignupFormReset => self.signup = SignupForm::default(),
        }
    }

    /// Filter changes render from the in-memory catalog. A failed reload only
    /// replaces the list until the next filter change, as long as an earlier
    /// load succeeded.
    fn rerender_from_memory(&mut self) {
        if self.status == CatalogStatus::Failed && self.catalog_loaded {
            self.status = CatalogStatus::Ready;
        }
        self.sync_activity_options();
    }

    /// Append any displayed activity that the dropdown does not offer yet.
    fn sync_activity_options(&mut self) {
        if self.status != CatalogStatus::Ready {
            return;
        }
        for (name, _) in visible_activities(&self.catalog, &self.filter) {
            if !self.activity_options.iter().any(|existing| existing == name) {
                self.activity_options.push(name.to_owned());
            }
        }
    }

    pub fn list_view(&self) -> ListView {
        match self.status {
            CatalogStatus::Loading => ListView::Loading,
            CatalogStatus::Failed => ListView::Failed,
            CatalogStatus::Ready => {
                let cards: Vec<CardView> = visible_activities(&self.catalog, &self.filter)
                    .into_iter()
                    .map(|(name, activity)| CardView {
                        name: name.to_owned(),
                        description: activity.description.clone(),
                        schedule: activity.schedule.clone(),
                        category: activity.category.clone(),
                        time: activity.time.clone(),
                        spots_left: activity.spots_left(),
                        participants: activity.participants.clone(),
                    })
                    .collect();
                if cards.is_empty() { ListView::NoMatches } else { ListView::Cards(cards) }
            }
        }
    }
}
