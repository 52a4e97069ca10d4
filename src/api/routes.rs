//! API route configuration.

use crate::api::handlers::{create_link_handler, create_root_handler, redirect_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All public routes.
///
/// # Endpoints
///
/// - `GET|POST /add/{domain}/{path...}` - Create a short link
/// - anything else                      - Redirect by short link (fallback)
///
/// The `/add/{*rest}` wildcard does not match an empty remainder, so `/add/`
/// gets its own route.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/add/",
            get(create_root_handler).post(create_root_handler),
        )
        .route(
            "/add/{*rest}",
            get(create_link_handler).post(create_link_handler),
        )
        .fallback(redirect_handler)
}
