//! Handler for the link creation endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::link::LinkResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for `https://{domain}/{path...}`.
///
/// # Endpoint
///
/// `GET|POST /add/{domain}/{path...}`
///
/// The domain must be allow-listed. If one of the path segments is a
/// 64-character hex process ID the short link is derived from it and repeats
/// for the same ID; otherwise it is random.
///
/// # Response
///
/// ```json
/// { "link": "A2CtXk8k" }
/// ```
///
/// # Errors
///
/// - 400 `Invalid request` / `Domain not allowed`
/// - 500 `Error saving to database`
pub async fn create_link_handler(
    State(state): State<AppState>,
    Path(rest): Path<String>,
) -> Result<Json<LinkResponse>, AppError> {
    create(&state, &format!("/add/{rest}")).await
}

/// Handles `/add/` with nothing after it.
///
/// The domain is the empty string, which is rejected unless the allow-list
/// contains an empty entry.
pub async fn create_root_handler(
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    create(&state, "/add/").await
}

async fn create(state: &AppState, path: &str) -> Result<Json<LinkResponse>, AppError> {
    let created = state.link_service.create_from_path(path).await?;

    Ok(Json(LinkResponse {
        link: created.mapping.short_link,
    }))
}
