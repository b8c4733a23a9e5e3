//! REST API client for the activities backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds and tests: `HttpApi` returns `ApiError::Unavailable`, and the
//! `ActivityApi` trait lets tests drive the orchestration against an
//! in-memory backend instead.
//!
//! ERROR HANDLING
//! ==============
//! Response bodies are read as text first and interpreted by pure helpers, so
//! status handling and body validation are covered without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::types::{ActionOutcome, ApiError, Catalog};
use crate::util::encode::encode_component;

/// Operations the board needs from the activities backend.
#[allow(async_fn_in_trait)]
pub trait ActivityApi {
    /// `GET /activities`.
    async fn fetch_activities(&self) -> Result<Catalog, ApiError>;

    /// `POST /activities/{activity}/signup?email={email}`.
    async fn signup(&self, activity: &str, email: &str) -> Result<ActionOutcome, ApiError>;

    /// `DELETE /activities/{activity}/unregister?email={email}`.
    async fn unregister(&self, activity: &str, email: &str) -> Result<ActionOutcome, ApiError>;
}

/// `ActivityApi` over HTTP, rooted at `base` (empty for same-origin).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

pub fn activities_endpoint(base: &str) -> String {
    format!("{base}/activities")
}

pub fn signup_endpoint(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{base}/activities/{}/signup?email={}",
        encode_component(activity),
        encode_component(email)
    )
}

pub fn unregister_endpoint(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{base}/activities/{}/unregister?email={}",
        encode_component(activity),
        encode_component(email)
    )
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Interpret a `GET /activities` response.
///
/// # Errors
///
/// `ApiError::Status` for non-2xx responses, `ApiError::Malformed` when the
/// body is not a valid catalog.
pub fn parse_catalog_response(status: u16, body: &str) -> Result<Catalog, ApiError> {
    if !is_success(status) {
        return Err(ApiError::Status { status });
    }
    Catalog::parse(body)
}

/// Interpret a sign-up/unregister response.
///
/// A JSON body without a string `detail` on a non-2xx status yields
/// `Rejected { detail: None }`.
///
/// # Errors
///
/// `ApiError::Malformed` when the body is not JSON (any status) or a 2xx
/// body has no string `message`.
pub fn parse_action_response(status: u16, body: &str) -> Result<ActionOutcome, ApiError> {
    let parsed = serde_json::from_str::<Value>(body).map_err(|e| ApiError::Malformed(e.to_string()))?;
    let field = |key: &str| -> Option<String> { parsed.get(key).and_then(Value::as_str).map(str::to_owned) };

    if is_success(status) {
        let message = field("message")
            .ok_or_else(|| ApiError::Malformed("success body has no `message`".to_owned()))?;
        Ok(ActionOutcome::Accepted { message })
    } else {
        Ok(ActionOutcome::Rejected { status, detail: field("detail") })
    }
}

#[cfg(feature = "csr")]
async fn send(request: gloo_net::http::RequestBuilder) -> Result<(u16, String), ApiError> {
    let resp = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    Ok((status, body))
}

impl ActivityApi for HttpApi {
    async fn fetch_activities(&self) -> Result<Catalog, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = activities_endpoint(&self.base);
            let (status, body) = send(gloo_net::http::Request::get(&url)).await?;
            parse_catalog_response(status, &body)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<ActionOutcome, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = signup_endpoint(&self.base, activity, email);
            let (status, body) = send(gloo_net::http::Request::post(&url)).await?;
            parse_action_response(status, &body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (activity, email);
            Err(ApiError::Unavailable)
        }
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<ActionOutcome, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = unregister_endpoint(&self.base, activity, email);
            let (status, body) = send(gloo_net::http::Request::delete(&url)).await?;
            parse_action_response(status, &body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (activity, email);
            Err(ApiError::Unavailable)
        }
    }
}
