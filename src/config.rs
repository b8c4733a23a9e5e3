//! Client configuration baked in at build time.
//!
//! Values come from environment variables captured with `option_env!` when
//! the WASM bundle is compiled:
//! - `ACTIVITY_BOARD_API_BASE`: endpoint prefix, default same-origin
//! - `ACTIVITY_BOARD_MESSAGE_TIMEOUT_MS`: feedback auto-hide delay, default 5000
//! - `ACTIVITY_BOARD_REFETCH_ON_FILTER`: re-fetch the catalog on every
//!   search/sort/category change, default `false`
//! - `ACTIVITY_BOARD_TITLE`: page heading

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::state::feedback::DEFAULT_MESSAGE_TIMEOUT_MS;

pub const DEFAULT_TITLE: &str = "Mergington High School Activities";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?} is not a positive number of milliseconds")]
    InvalidTimeout { key: &'static str, value: String },

    #[error("invalid {key}: {value:?} (expected true/false)")]
    InvalidFlag { key: &'static str, value: String },
}

/// Raw build-time values, before validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawConfig<'a> {
    pub api_base: Option<&'a str>,
    pub message_timeout_ms: Option<&'a str>,
    pub refetch_on_filter: Option<&'a str>,
    pub title: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Endpoint prefix without a trailing `/`; empty for same-origin.
    pub api_base: String,
    pub message_timeout_ms: u32,
    pub refetch_on_filter: bool,
    pub title: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            message_timeout_ms: DEFAULT_MESSAGE_TIMEOUT_MS,
            refetch_on_filter: false,
            title: DEFAULT_TITLE.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build config from the variables present when the crate was compiled.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when a set variable has an invalid value.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::parse(RawConfig {
            api_base: option_env!("ACTIVITY_BOARD_API_BASE"),
            message_timeout_ms: option_env!("ACTIVITY_BOARD_MESSAGE_TIMEOUT_MS"),
            refetch_on_filter: option_env!("ACTIVITY_BOARD_REFETCH_ON_FILTER"),
            title: option_env!("ACTIVITY_BOARD_TITLE"),
        })
    }

    /// Validate raw values, applying defaults for unset or blank ones.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for a non-numeric or zero timeout, or a flag
    /// that is not a boolean.
    pub fn parse(raw: RawConfig<'_>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let api_base = non_blank(raw.api_base)
            .map(|base| base.trim_end_matches('/').to_owned())
            .unwrap_or(defaults.api_base);
        let message_timeout_ms = match non_blank(raw.message_timeout_ms) {
            None => defaults.message_timeout_ms,
            Some(value) => parse_timeout(value)?,
        };
        let refetch_on_filter = match non_blank(raw.refetch_on_filter) {
            None => defaults.refetch_on_filter,
            Some(value) => parse_flag(value)?,
        };
        let title = non_blank(raw.title).map_or(defaults.title, str::to_owned);

        Ok(Self { api_base, message_timeout_ms, refetch_on_filter, title })
    }

    pub fn message_timeout(&self) -> Duration {
        Duration::from_millis(u64::from(self.message_timeout_ms))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_timeout(value: &str) -> Result<u32, ConfigError> {
    match value.parse::<u32>() {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(ConfigError::InvalidTimeout {
            key: "ACTIVITY_BOARD_MESSAGE_TIMEOUT_MS",
            value: value.to_owned(),
        }),
    }
}

fn parse_flag(value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key: "ACTIVITY_BOARD_REFETCH_ON_FILTER",
            value: value.to_owned(),
        }),
    }
}
