use super::*;

#[test]
fn feedback_starts_hidden_and_empty() {
    let state = FeedbackState::default();
    assert!(!state.visible);
    assert_eq!(state.text(), "");
    assert_eq!(state.class(), "hidden");
}

#[test]
fn show_sets_text_kind_and_visibility() {
    let mut state = FeedbackState::default();
    state.show(FeedbackMessage::success("Signed up b@x.com for Chess Club"));
    assert!(state.visible);
    assert_eq!(state.text(), "Signed up b@x.com for Chess Club");
    assert_eq!(state.class(), "success");
}

#[test]
fn hide_keeps_message_but_adds_hidden_class() {
    let mut state = FeedbackState::default();
    state.show(FeedbackMessage::error("Already signed up"));
    state.hide();
    assert!(!state.visible);
    assert_eq!(state.text(), "Already signed up");
    assert_eq!(state.class(), "error hidden");
}

#[test]
fn show_replaces_previous_message() {
    let mut state = FeedbackState::default();
    state.show(FeedbackMessage::error("first"));
    state.hide();
    state.show(FeedbackMessage::success("second"));
    assert_eq!(state.message, Some(FeedbackMessage::success("second")));
    assert!(state.visible);
}

#[test]
fn kind_classes_match_stylesheet() {
    assert_eq!(FeedbackKind::Success.class(), "success");
    assert_eq!(FeedbackKind::Error.class(), "error");
}

#[test]
fn default_timeout_is_five_seconds() {
    assert_eq!(DEFAULT_MESSAGE_TIMEOUT_MS, 5000);
}
