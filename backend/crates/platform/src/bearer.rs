//! Bearer token extraction
//!
//! Session tokens travel in the `Authorization` header.

use axum::http::{HeaderMap, header};

const BEARER_PREFIX: &str = "Bearer ";

/// Extract the token from an `Authorization` header
///
/// A value without the `Bearer ` prefix is taken as the raw token. Missing,
/// non-ASCII, or blank values yield `None`.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix(BEARER_PREFIX).unwrap_or(value).trim();

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
