//! Root application component, context providers, and UI dispatch helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the single `RwSignal<BoardState>` and a `StoredValue` holding
//! the `ClientConfig`; both are provided as context. Components route every
//! UI event through `dispatch`, `perform_action`, or `show_feedback` so board
//! mutation and network follow-ups live in one place.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::actions::ActionRequest;
use crate::components::{activity_list::ActivityList, signup_panel::SignupPanel, toolbar::FilterToolbar};
use crate::config::ClientConfig;
use crate::state::board::{BoardEvent, BoardState};
use crate::state::feedback::FeedbackMessage;

/// Root application component.
///
/// Provides the board state and config, then starts the initial catalog load.
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    provide_meta_context();

    let title = config.title.clone();
    let board = RwSignal::new(BoardState::default());
    let config = StoredValue::new(config);
    provide_context(board);
    provide_context(config);

    reload_catalog(board, config);

    view! {
        <Stylesheet id="activity-board" href="/styles.css"/>
        <Title text=title.clone()/>

        <header>
            <h1>{title}</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>

        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <FilterToolbar/>
                <ActivityList/>
            </section>
            <SignupPanel/>
        </main>
    }
}

/// Apply a UI event, re-fetching afterwards when filter changes are
/// configured to hit the backend.
pub(crate) fn dispatch(board: RwSignal<BoardState>, config: StoredValue<ClientConfig>, event: BoardEvent) {
    let refetch = event.changes_filter() && config.with_value(|c| c.refetch_on_filter);
    board.update(|s| s.apply(event));
    if refetch {
        reload_catalog(board, config);
    }
}

/// Fetch the catalog in the background and apply the result.
pub(crate) fn reload_catalog(board: RwSignal<BoardState>, config: StoredValue<ClientConfig>) {
    #[cfg(feature = "csr")]
    {
        let api = crate::net::api::HttpApi::new(config.with_value(|c| c.api_base.clone()));
        leptos::task::spawn_local(async move {
            let event = crate::actions::load_catalog(&api).await;
            board.update(|s| s.apply(event));
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (board, config);
    }
}

/// Send a sign-up/unregister request; feedback and the follow-up reload are
/// applied as they arrive.
pub(crate) fn perform_action(board: RwSignal<BoardState>, config: StoredValue<ClientConfig>, request: ActionRequest) {
    #[cfg(feature = "csr")]
    {
        let api = crate::net::api::HttpApi::new(config.with_value(|c| c.api_base.clone()));
        leptos::task::spawn_local(async move {
            crate::actions::run_action(&api, &request, |event| {
                let shown = matches!(event, BoardEvent::FeedbackShown(_));
                board.update(|s| s.apply(event));
                if shown {
                    schedule_hide(board, config);
                }
            })
            .await;
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (board, config, request);
    }
}

/// Show a message and schedule it to hide after the configured timeout.
pub(crate) fn show_feedback(board: RwSignal<BoardState>, config: StoredValue<ClientConfig>, message: FeedbackMessage) {
    board.update(|s| s.apply(BoardEvent::FeedbackShown(message)));
    schedule_hide(board, config);
}

/// Hide the message region once the timeout elapses. Earlier timers are not
/// cancelled, so they may hide a message shown after them.
fn schedule_hide(board: RwSignal<BoardState>, config: StoredValue<ClientConfig>) {
    #[cfg(feature = "csr")]
    {
        let timeout = config.with_value(ClientConfig::message_timeout);
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(timeout).await;
            board.update(|s| s.apply(BoardEvent::FeedbackHidden));
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (board, config);
    }
}
