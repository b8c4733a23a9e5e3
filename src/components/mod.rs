//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the board from the shared `RwSignal<BoardState>` context
//! and report user input back through the dispatch helpers in `app`.

pub mod activity_card;
pub mod activity_list;
pub mod feedback_banner;
pub mod signup_panel;
pub mod toolbar;
