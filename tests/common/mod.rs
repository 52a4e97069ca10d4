#![allow(dead_code)]

use axum_test::TestServer;
use std::sync::Arc;
use shortlink::domain::allowed_domains::AllowedDomains;
use shortlink::domain::entities::UrlMapping;
use shortlink::domain::repositories::MappingRepository;
use shortlink::infrastructure::persistence::InMemoryMappingRepository;
use shortlink::routes::app_router;
use shortlink::state::AppState;

pub const ALLOWED_DOMAINS: &str = "example.com,vocdoni.app";

/// 32 bytes of `0xaa`, hex-encoded.
pub const PROCESS_ID: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

/// Short link derived from [`PROCESS_ID`].
pub const PROCESS_ID_LINK: &str = "A2CtXk8k";

pub fn create_test_state(repo: Arc<InMemoryMappingRepository>) -> AppState {
    AppState::new(repo, AllowedDomains::from_csv(ALLOWED_DOMAINS))
}

pub fn create_test_server(repo: Arc<InMemoryMappingRepository>) -> TestServer {
    TestServer::new(app_router(create_test_state(repo))).unwrap()
}

pub async fn create_test_link(repo: &InMemoryMappingRepository, short_link: &str, long_link: &str) {
    repo.insert(UrlMapping::new(short_link, long_link))
        .await
        .unwrap();
}
