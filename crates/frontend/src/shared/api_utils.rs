//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use once_cell::sync::Lazy;

/// Base URL of the backend, resolved once at startup. `API_BASE_URL` is
/// injected at build time; without it the local dev backend is assumed.
static API_BASE: Lazy<String> = Lazy::new(|| {
    option_env!("API_BASE_URL")
        .map(|s| s.trim_end_matches('/').to_string())
        .unwrap_or_else(|| "http://localhost:8000".to_string())
});

pub fn api_base() -> &'static str {
    &API_BASE
}

/// Build a full API URL from a path relative to the base.
///
/// # Example
/// ```rust
/// # use frontend::shared::api_utils::api_url;
/// let url = api_url("/products");
/// assert!(url.ends_with("/products"));
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_base_and_path() {
        assert!(api_url("/jobs").ends_with("/jobs"));
        assert!(api_url("/jobs").starts_with("http"));
    }
}
