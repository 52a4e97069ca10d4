//! DTOs for the link creation endpoint.

use serde::Serialize;

/// Body returned after a link is created.
///
/// ```json
/// { "link": "A2CtXk8k" }
/// ```
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub link: String,
}
