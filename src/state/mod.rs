//! Client-side application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `board` owns the single `BoardState` and its reducer; `filter` and
//! `feedback` hold the pure pieces it is built from.

pub mod board;
pub mod feedback;
pub mod filter;
