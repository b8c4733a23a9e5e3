//! Sign-up form: student email plus the accumulated activity dropdown.
//!
//! SYSTEM CONTEXT
//! ==============
//! Draft values live in `BoardState::signup` so an accepted sign-up can reset
//! the form through the reducer. The feedback banner sits under the form.

use leptos::prelude::*;

use crate::actions::ActionRequest;
use crate::app::{dispatch, perform_action, show_feedback};
use crate::components::feedback_banner::FeedbackBanner;
use crate::config::ClientConfig;
use crate::state::board::{BoardEvent, BoardState};
use crate::state::feedback::FeedbackMessage;

#[component]
pub fn SignupPanel() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let config = expect_context::<StoredValue<ClientConfig>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match board.with_untracked(|s| s.signup.submission()) {
            Ok((activity, email)) => perform_action(board, config, ActionRequest::signup(activity, email)),
            Err(message) => show_feedback(board, config, FeedbackMessage::error(message)),
        }
    };

    view! {
        <section id="signup-container">
            <h3>"Sign Up for an Activity"</h3>
            <form id="signup-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="email">"Student Email:"</label>
                    <input
                        type="email"
                        id="email"
                        required=true
                        placeholder="your-email@mergington.edu"
                        prop:value=move || board.with(|s| s.signup.email.clone())
                        on:input=move |ev| dispatch(board, config, BoardEvent::EmailChanged(event_target_value(&ev)))
                    />
                </div>
                <div class="form-group">
                    <label for="activity">"Select Activity:"</label>
                    <select
                        id="activity"
                        required=true
                        prop:value=move || board.with(|s| s.signup.activity.clone())
                        on:change=move |ev| {
                            dispatch(board, config, BoardEvent::ActivitySelected(event_target_value(&ev)));
                        }
                    >
                        <option value="">"-- Select an activity --"</option>
                        {move || {
                            board
                                .with(|s| s.activity_options.clone())
                                .into_iter()
                                .map(|name| {
                                    let label = name.clone();
                                    view! { <option value=name>{label}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </div>
                <button type="submit">"Sign Up"</button>
            </form>
            <FeedbackBanner/>
        </section>
    }
}
