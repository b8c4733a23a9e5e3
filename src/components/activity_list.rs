//! Activities list region: loading, failure, no-match, or one card per activity.

use leptos::prelude::*;

use crate::components::activity_card::ActivityCard;
use crate::state::board::{BoardState, LOAD_FAILED_MESSAGE, LOADING_MESSAGE, ListView, NO_MATCHES_MESSAGE};

#[component]
pub fn ActivityList() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();

    view! {
        <div id="activities-list">
            {move || match board.with(BoardState::list_view) {
                ListView::Loading => view! { <p>{LOADING_MESSAGE}</p> }.into_any(),
                ListView::Failed => view! { <p>{LOAD_FAILED_MESSAGE}</p> }.into_any(),
                ListView::NoMatches => view! { <p>{NO_MATCHES_MESSAGE}</p> }.into_any(),
                ListView::Cards(cards) => cards
                    .into_iter()
                    .map(|card| view! { <ActivityCard card=card/> })
                    .collect::<Vec<_>>()
                    .into_any(),
            }}
        </div>
    }
}
