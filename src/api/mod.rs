//! REST API Client
//!
//! Frontend bindings to the Goal Getter backend, organized by domain.
//! Reads that feed whole-page lists degrade to safe defaults so the UI
//! renders empty state instead of crashing when the backend is down;
//! writes and the single-goal read propagate their errors to the caller.

mod categories;
mod goals;
mod summary;
mod tasks;

pub use goals::{GoalPatch, NewGoal};
pub use tasks::{NewTask, TaskPatch};

use reqwest::StatusCode;
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Failure surfaced by a propagating API call. One request attempt per
/// call; no retry, backoff, or timeout.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP error! status: {0}")]
    Status(StatusCode),
}

/// Typed client for the goal backend. Cloneable; provided to components
/// through Leptos context.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Base URL comes from `GOAL_API_BASE_URL` at compile time, with a
    /// localhost default for development.
    pub fn from_env() -> Self {
        Self::new(option_env!("GOAL_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

/// Map a response to `()` or `ApiError::Status` for write endpoints.
pub(crate) fn check_status(response: &reqwest::Response) -> Result<(), ApiError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(ApiError::Status(response.status()))
    }
}

/// Console on wasm, stderr in native tests.
pub(crate) fn log_error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&format!("[API] {message}").into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("[API] {message}");
}
