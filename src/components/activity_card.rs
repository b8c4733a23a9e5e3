//! Card for a single activity with its participant list.
//!
//! DESIGN
//! ======
//! Cards render from a `CardView` snapshot; the only interaction is the
//! per-participant unregister button, which goes through `perform_action`.

#[cfg(test)]
#[path = "activity_card_test.rs"]
mod activity_card_test;

use leptos::prelude::*;

use crate::actions::ActionRequest;
use crate::app::perform_action;
use crate::config::ClientConfig;
use crate::state::board::{BoardState, CardView};

fn unregister_label(email: &str) -> String {
    format!("Unregister {email}")
}

#[component]
pub fn ActivityCard(card: CardView) -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let config = expect_context::<StoredValue<ClientConfig>>();

    let availability = card.availability();
    let CardView { name, description, schedule, category, time, participants, .. } = card;

    let participants_view = if participants.is_empty() {
        view! {
            <p>
                <em>"No participants yet"</em>
            </p>
        }
        .into_any()
    } else {
        let rows = participants
            .into_iter()
            .map(|email| {
                let request = ActionRequest::unregister(name.clone(), email.clone());
                let label = unregister_label(&email);
                view! {
                    <li>
                        <span class="participant-email">{email}</span>
                        <button
                            class="delete-btn"
                            title=label.clone()
                            aria-label=label
                            on:click=move |_| perform_action(board, config, request.clone())
                        >
                            "❌"
                        </button>
                    </li>
                }
            })
            .collect::<Vec<_>>();
        view! {
            <div class="participants-section">
                <h5>"Participants:"</h5>
                <ul class="participants-list">{rows}</ul>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="activity-card">
            <h4>{name}</h4>
            <p>{description}</p>
            <p>
                <strong>"Schedule:"</strong>
                " "
                {schedule}
            </p>
            {category.map(|category| {
                view! {
                    <p>
                        <strong>"Category:"</strong>
                        " "
                        {category}
                    </p>
                }
            })}
            {time.map(|time| {
                view! {
                    <p>
                        <strong>"Time:"</strong>
                        " "
                        {time}
                    </p>
                }
            })}
            <p>
                <strong>"Availability:"</strong>
                " "
                {availability}
            </p>
            <div class="participants-container">{participants_view}</div>
        </div>
    }
}
