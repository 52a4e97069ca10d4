use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::allowed_domains::AllowedDomains;
use crate::domain::repositories::MappingRepository;

/// Shared state injected into every handler.
///
/// Built once at startup; handlers only read from it.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    pub fn new(repository: Arc<dyn MappingRepository>, allowed_domains: AllowedDomains) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(repository, allowed_domains)),
        }
    }
}
