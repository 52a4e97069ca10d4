//! Handler for short link redirects.

use std::borrow::Cow;

use axum::{
    extract::State,
    http::{HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short link to its long link.
///
/// # Endpoint
///
/// Router fallback: every path not claimed by another route, any method,
/// including `/`.
///
/// # Request Flow
///
/// 1. Percent-decode the path and strip the leading `/`
/// 2. Under 8 bytes: 302 to the fallback URL without touching the store
/// 3. Otherwise look the remainder up by exact match
/// 4. Return 302 Found with the stored long link
///
/// # Errors
///
/// Returns 404 Not Found if the short link doesn't exist or the lookup fails.
pub async fn redirect_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Response, AppError> {
    let raw = uri.path();
    let path = urlencoding::decode(raw).unwrap_or_else(|_| raw.into());
    let short_link = path.strip_prefix('/').unwrap_or(&*path);

    let resolution = state.link_service.resolve(short_link).await?;

    Ok(found(resolution.target()))
}

/// Builds a `302 Found` response pointing at `location`.
fn found(location: &str) -> Response {
    match HeaderValue::from_str(&escape_non_ascii(location)) {
        Ok(value) => (StatusCode::FOUND, [(header::LOCATION, value)]).into_response(),
        Err(_) => AppError::internal("Invalid redirect target").into_response(),
    }
}

/// Percent-encodes bytes outside ASCII so the value fits in a header.
fn escape_non_ascii(location: &str) -> Cow<'_, str> {
    if location.is_ascii() {
        return Cow::Borrowed(location);
    }

    let mut escaped = String::with_capacity(location.len() * 3);
    for byte in location.bytes() {
        if byte.is_ascii() {
            escaped.push(byte as char);
        } else {
            escaped.push_str(&format!("%{byte:02X}"));
        }
    }
    Cow::Owned(escaped)
}
