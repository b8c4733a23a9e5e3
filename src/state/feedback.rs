//! Transient success/error banner shown after sign-up and unregister.
//!
//! TRADE-OFFS
//! ==========
//! Hiding is scheduled per message and never cancelled. A hide timer started
//! for an older message still fires after a newer one replaced it, so the
//! newer message can disappear early.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

/// Default auto-hide delay in milliseconds.
pub const DEFAULT_MESSAGE_TIMEOUT_MS: u32 = 5000;

pub const GENERIC_ERROR: &str = "An error occurred";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FAILED: &str = "Failed to unregister. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

impl FeedbackKind {
    /// CSS class applied to the message region.
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackMessage {
    pub text: String,
    pub kind: FeedbackKind,
}

impl FeedbackMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: FeedbackKind::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: FeedbackKind::Error }
    }
}

/// Message region state. The last message stays in place while hidden.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedbackState {
    pub message: Option<FeedbackMessage>,
    pub visible: bool,
}

impl FeedbackState {
    /// Replace the current message and unhide the region.
    pub fn show(&mut self, message: FeedbackMessage) {
        self.message = Some(message);
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Class list for the message region, e.g. `"success"` or `"error hidden"`.
    pub fn class(&self) -> String {
        let kind = self.message.as_ref().map_or("", |m| m.kind.class());
        match (kind.is_empty(), self.visible) {
            (_, true) => kind.to_owned(),
            (true, false) => "hidden".to_owned(),
            (false, false) => format!("{kind} hidden"),
        }
    }

    pub fn text(&self) -> &str {
        self.message.as_ref().map_or("", |m| m.text.as_str())
    }
}
