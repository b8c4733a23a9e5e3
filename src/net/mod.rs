//! Networking modules for the activities REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues HTTP calls and interprets responses, `types` defines the
//! validated wire records shared with state and components.

pub mod api;
pub mod types;
