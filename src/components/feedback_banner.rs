//! Message region for sign-up/unregister feedback.

use leptos::prelude::*;

use crate::state::board::BoardState;

#[component]
pub fn FeedbackBanner() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();

    view! {
        <div
            id="message"
            class=move || board.with(|s| s.feedback.class())
            role="status"
        >
            {move || board.with(|s| s.feedback.text().to_owned())}
        </div>
    }
}
