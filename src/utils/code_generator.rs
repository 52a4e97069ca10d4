//! Short link derivation.
//!
//! Two strategies, picked per request:
//!
//! - **Process ID**: the creation path carries a 32-byte identifier encoded as
//!   64 hex characters. The short link is the first 8 characters of the
//!   standard base64 encoding of its BLAKE3 digest, so the same identifier
//!   always yields the same short link. Truncating to 8 characters leaves a
//!   collision probability of roughly 0.0018% over 100,000 identifiers and
//!   0.177% over 1,000,000.
//! - **UUID**: otherwise, the first 8 characters of a random v4 UUID.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use std::fmt;
use uuid::Uuid;

/// Length of every generated short link.
pub const SHORT_LINK_LEN: usize = 8;

/// Length of a hex-encoded process identifier.
const PROCESS_ID_HEX_LEN: usize = 64;

/// Strategy used to produce a short link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortLinkKind {
    ProcessId,
    Uuid,
}

impl ShortLinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProcessId => "processID",
            Self::Uuid => "uuid",
        }
    }
}

impl fmt::Display for ShortLinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the decoded bytes of the first segment that is exactly 64
/// characters long and valid hex.
///
/// Segments of the right length that fail to decode are skipped and the scan
/// continues.
pub fn find_process_id<'a, I>(segments: I) -> Option<Vec<u8>>
where
    I: IntoIterator<Item = &'a str>,
{
    segments
        .into_iter()
        .filter(|segment| segment.len() == PROCESS_ID_HEX_LEN)
        .find_map(|segment| hex::decode(segment).ok())
}

/// Derives the deterministic short link for a process identifier.
pub fn short_link_from_process_id(process_id: &[u8]) -> String {
    let digest = blake3::hash(process_id);
    let mut encoded = STANDARD.encode(digest.as_bytes());
    encoded.truncate(SHORT_LINK_LEN);
    encoded
}

/// Generates a random short link from a v4 UUID.
///
/// The hyphenated form starts with 8 hex digits, so the result is always
/// lowercase hex.
pub fn random_short_link() -> String {
    let mut id = Uuid::new_v4().to_string();
    id.truncate(SHORT_LINK_LEN);
    id
}

/// Picks a strategy for the given path segments and produces the short link.
pub fn derive_short_link<'a, I>(segments: I) -> (String, ShortLinkKind)
where
    I: IntoIterator<Item = &'a str>,
{
    match find_process_id(segments) {
        Some(process_id) => (
            short_link_from_process_id(&process_id),
            ShortLinkKind::ProcessId,
        ),
        None => (random_short_link(), ShortLinkKind::Uuid),
    }
}
