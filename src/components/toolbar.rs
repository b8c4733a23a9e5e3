//! Search box, sort dropdown, and category filter above the activities list.

#[cfg(test)]
#[path = "toolbar_test.rs"]
mod toolbar_test;

use leptos::prelude::*;

use crate::app::dispatch;
use crate::config::ClientConfig;
use crate::state::board::{BoardEvent, BoardState};
use crate::state::filter::{SortMode, category_options};

/// `(value, label)` pairs for the category dropdown, "all" first.
fn category_choices(categories: Vec<String>) -> Vec<(String, String)> {
    std::iter::once((String::new(), "All categories".to_owned()))
        .chain(categories.into_iter().map(|c| (c.clone(), c)))
        .collect()
}

#[component]
pub fn FilterToolbar() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let config = expect_context::<StoredValue<ClientConfig>>();

    let choices = move || board.with(|s| category_choices(category_options(&s.catalog)));

    view! {
        <div id="toolbar" class="filter-toolbar">
            <div
                class="search-container"
                class:has-text=move || board.with(|s| s.filter.has_search_text())
            >
                <input
                    type="text"
                    id="search-activities"
                    placeholder="Search activities..."
                    prop:value=move || board.with(|s| s.filter.search.clone())
                    on:input=move |ev| dispatch(board, config, BoardEvent::SearchChanged(event_target_value(&ev)))
                />
                <button
                    type="button"
                    id="clear-search"
                    title="Clear search"
                    aria-label="Clear search"
                    on:click=move |_| dispatch(board, config, BoardEvent::SearchCleared)
                >
                    "✕"
                </button>
            </div>

            <label class="filter-toolbar__field">
                "Sort by: "
                <select
                    id="sort-activities"
                    prop:value=move || board.with(|s| s.filter.sort.value())
                    on:change=move |ev| dispatch(board, config, BoardEvent::SortChanged(event_target_value(&ev)))
                >
                    {SortMode::OPTIONS
                        .into_iter()
                        .map(|(mode, label)| view! { <option value=mode.value()>{label}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>

            <label class="filter-toolbar__field">
                "Category: "
                <select
                    id="category-filter"
                    prop:value=move || board.with(|s| s.filter.category.clone().unwrap_or_default())
                    on:change=move |ev| {
                        dispatch(board, config, BoardEvent::CategoryChanged(event_target_value(&ev)));
                    }
                >
                    {move || {
                        choices()
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </label>
        </div>
    }
}
