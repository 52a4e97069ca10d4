//! Link creation and resolution service.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::domain::allowed_domains::AllowedDomains;
use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{MappingRepository, StoreError};
use crate::error::AppError;
use crate::utils::code_generator::{SHORT_LINK_LEN, ShortLinkKind, derive_short_link};
use crate::utils::creation_path::CreationPath;

/// Where paths too short to be a short link are sent.
pub const FALLBACK_URL: &str = "https://farcaster.vote";

/// A mapping that was just stored, with the strategy that produced its key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedLink {
    pub mapping: UrlMapping,
    pub kind: ShortLinkKind,
}

/// Outcome of resolving a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The path was shorter than a short link; the store was not queried.
    Fallback,
    Found(UrlMapping),
}

impl Resolution {
    /// The URL to redirect to.
    pub fn target(&self) -> &str {
        match self {
            Resolution::Fallback => FALLBACK_URL,
            Resolution::Found(mapping) => &mapping.long_link,
        }
    }
}

/// Service for creating and resolving short links.
///
/// Holds no per-request state. The allow-list is fixed at construction and the
/// store is the only shared mutable resource, so the service is shared across
/// requests behind an `Arc`.
pub struct LinkService {
    repository: Arc<dyn MappingRepository>,
    allowed_domains: Arc<AllowedDomains>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(repository: Arc<dyn MappingRepository>, allowed_domains: AllowedDomains) -> Self {
        Self {
            repository,
            allowed_domains: Arc::new(allowed_domains),
        }
    }

    pub fn allowed_domains(&self) -> &AllowedDomains {
        &self.allowed_domains
    }

    /// Creates a short link from a `/add/<domain>/<path...>` request path.
    ///
    /// The target is `https://<domain>/<path...>`. The short link is derived
    /// from the first 64-character hex segment of the path when there is one,
    /// and is random otherwise. The mapping is inserted without checking for
    /// an existing one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidRequest`] if the path has too few segments,
    /// [`AppError::DomainNotAllowed`] if the domain is not allow-listed, and
    /// [`AppError::Storage`] if the insert fails for any reason, including a
    /// duplicate short link.
    pub async fn create_from_path(&self, path: &str) -> Result<CreatedLink, AppError> {
        info!(path, "Creation request");

        let request = CreationPath::parse(path)?;

        if !self.allowed_domains.contains(request.domain) {
            warn!(domain = request.domain, "Domain not allowed");
            return Err(AppError::DomainNotAllowed {
                domain: request.domain.to_string(),
            });
        }

        let (short_link, kind) = derive_short_link(request.segments.iter().copied());
        let mapping = UrlMapping::new(short_link, request.long_link());

        if let Err(e) = self.repository.insert(mapping.clone()).await {
            match &e {
                StoreError::DuplicateKey(short_link) => {
                    warn!(short_link = %short_link, kind = %kind, "Short link collision: {}", e)
                }
                _ => error!(short_link = %mapping.short_link, "Failed to save link: {}", e),
            }
            return Err(AppError::Storage(e));
        }

        info!(
            kind = %kind,
            short_link = %mapping.short_link,
            long_link = %mapping.long_link,
            "New link"
        );

        Ok(CreatedLink { mapping, kind })
    }

    /// Resolves a request path, with its leading slash already stripped.
    ///
    /// Paths shorter than a short link resolve to [`FALLBACK_URL`] without a
    /// store lookup. Anything else must match a stored short link byte for
    /// byte.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping exists or the lookup
    /// fails.
    pub async fn resolve(&self, short_link: &str) -> Result<Resolution, AppError> {
        if short_link.len() < SHORT_LINK_LEN {
            return Ok(Resolution::Fallback);
        }

        let found = self
            .repository
            .find_by_short_link(short_link)
            .await
            .unwrap_or_else(|e| {
                error!(short_link, "Failed to look up link: {}", e);
                None
            });

        found
            .map(Resolution::Found)
            .ok_or_else(|| AppError::NotFound {
                short_link: short_link.to_string(),
            })
    }
}
