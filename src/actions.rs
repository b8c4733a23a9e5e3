//! Catalog loading and sign-up/unregister orchestration.
//!
//! ARCHITECTURE
//! ============
//! These functions sit between `net::api::ActivityApi` and `BoardState`: they
//! await the backend, turn every outcome into `BoardEvent`s, and hand those to
//! the caller's `apply` closure. Components pass a closure that updates the
//! board signal; tests pass one that mutates a plain `BoardState`.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here returns an error. Transport and shape failures become the
//! fixed client-side messages and are logged; rejections surface the
//! server's `detail`. No request is retried.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use crate::net::api::ActivityApi;
use crate::net::types::{ActionOutcome, ApiError};
use crate::state::board::BoardEvent;
use crate::state::feedback::{FeedbackMessage, GENERIC_ERROR, SIGNUP_FAILED, UNREGISTER_FAILED};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Signup,
    Unregister,
}

impl ActionKind {
    fn failure_text(self) -> &'static str {
        match self {
            Self::Signup => SIGNUP_FAILED,
            Self::Unregister => UNREGISTER_FAILED,
        }
    }

    fn log_label(self) -> &'static str {
        match self {
            Self::Signup => "Error signing up",
            Self::Unregister => "Error unregistering",
        }
    }
}

/// A mutating request against one activity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionRequest {
    pub kind: ActionKind,
    pub activity: String,
    pub email: String,
}

impl ActionRequest {
    pub fn signup(activity: impl Into<String>, email: impl Into<String>) -> Self {
        Self { kind: ActionKind::Signup, activity: activity.into(), email: email.into() }
    }

    pub fn unregister(activity: impl Into<String>, email: impl Into<String>) -> Self {
        Self { kind: ActionKind::Unregister, activity: activity.into(), email: email.into() }
    }
}

/// What the UI should do after an action completes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionReport {
    pub feedback: FeedbackMessage,
    /// Re-fetch the catalog (only after the server accepted the change).
    pub refresh: bool,
    /// Clear the sign-up form (only after an accepted sign-up).
    pub reset_form: bool,
}

/// Map a backend result to the feedback and follow-ups for `kind`.
pub fn report_for(kind: ActionKind, result: Result<ActionOutcome, ApiError>) -> ActionReport {
    match result {
        Ok(ActionOutcome::Accepted { message }) => ActionReport {
            feedback: FeedbackMessage::success(message),
            refresh: true,
            reset_form: kind == ActionKind::Signup,
        },
        Ok(ActionOutcome::Rejected { detail, .. }) => ActionReport {
            feedback: FeedbackMessage::error(detail.unwrap_or_else(|| GENERIC_ERROR.to_owned())),
            refresh: false,
            reset_form: false,
        },
        Err(e) => {
            leptos::logging::error!("{}: {e}", kind.log_label());
            ActionReport {
                feedback: FeedbackMessage::error(kind.failure_text()),
                refresh: false,
                reset_form: false,
            }
        }
    }
}

/// Fetch the catalog and translate the result into a board event.
pub async fn load_catalog<A: ActivityApi>(api: &A) -> BoardEvent {
    match api.fetch_activities().await {
        Ok(catalog) => BoardEvent::CatalogLoaded(catalog),
        Err(e) => {
            leptos::logging::error!("Error fetching activities: {e}");
            BoardEvent::CatalogFailed
        }
    }
}

/// Send `request` without touching any state.
pub async fn submit_action<A: ActivityApi>(api: &A, request: &ActionRequest) -> ActionReport {
    let result = match request.kind {
        ActionKind::Signup => api.signup(&request.activity, &request.email).await,
        ActionKind::Unregister => api.unregister(&request.activity, &request.email).await,
    };
    report_for(request.kind, result)
}

/// Send `request`, show its feedback, and reload the catalog when accepted.
///
/// The reload starts only after the action's own response arrived. Hiding the
/// feedback is left to the caller.
pub async fn run_action<A, F>(api: &A, request: &ActionRequest, mut apply: F) -> ActionReport
where
    A: ActivityApi,
    F: FnMut(BoardEvent),
{
    let report = submit_action(api, request).await;
    apply(BoardEvent::FeedbackShown(report.feedback.clone()));
    if report.reset_form {
        apply(BoardEvent::SignupFormReset);
    }
    if report.refresh {
        apply(load_catalog(api).await);
    }
    report
}
