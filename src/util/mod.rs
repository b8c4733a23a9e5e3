//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules hold small pure helpers (URL component encoding, activity
//! time parsing) so networking and filtering code stays free of string glue.

pub mod activity_time;
pub mod encode;
