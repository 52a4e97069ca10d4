mod common;

use std::sync::Arc;

use shortlink::application::services::FALLBACK_URL;
use shortlink::infrastructure::persistence::InMemoryMappingRepository;

#[tokio::test]
async fn test_redirect_success() {
    let repo = Arc::new(InMemoryMappingRepository::new());
    common::create_test_link(&repo, "redirect1", "https://example.com/target").await;
    let server = common::create_test_server(repo);

    let response = server.get("/redirect1").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let repo = Arc::new(InMemoryMappingRepository::new());
    let server = common::create_test_server(repo);

    let response = server.get("/notfound").await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "Link not found\n");
}

#[tokio::test]
async fn test_redirect_root_uses_fallback() {
    let repo = Arc::new(InMemoryMappingRepository::new());
    let server = common::create_test_server(repo);

    let response = server.get("/").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), FALLBACK_URL);
}

#[tokio::test]
async fn test_redirect_short_path_uses_fallback_even_if_stored() {
    let repo = Arc::new(InMemoryMappingRepository::new());
    common::create_test_link(&repo, "abc", "https://example.com/stored").await;
    let server = common::create_test_server(repo);

    for path in ["/abc", "/a", "/abcdefg", "/add"] {
        let response = server.get(path).await;
        assert_eq!(response.status_code(), 302, "path {path}");
        assert_eq!(response.header("location"), "https://farcaster.vote");
    }
}

#[tokio::test]
async fn test_redirect_is_exact_match() {
    let repo = Arc::new(InMemoryMappingRepository::new());
    common::create_test_link(&repo, "abcd1234", "https://example.com/target").await;
    let server = common::create_test_server(repo);

    server.get("/ABCD1234").await.assert_status_not_found();
    server.get("/abcd1234/").await.assert_status_not_found();
    server.get("/abcd12345").await.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_short_link_with_slash() {
    let repo = Arc::new(InMemoryMappingRepository::new());
    common::create_test_link(&repo, "ab/c+d12", "https://example.com/base64").await;
    let server = common::create_test_server(repo);

    let response = server.get("/ab/c+d12").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/base64");
}

#[tokio::test]
async fn test_create_then_redirect_round_trip() {
    let repo = Arc::new(InMemoryMappingRepository::new());
    let server = common::create_test_server(repo);

    let created = server
        .get("/add/example.com/foo/bar?ignored")
        .await
        .json::<serde_json::Value>();
    let link = created["link"].as_str().unwrap();

    let response = server.get(&format!("/{link}")).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/foo/bar");
}

#[tokio::test]
async fn test_create_then_redirect_process_id() {
    let repo = Arc::new(InMemoryMappingRepository::new());
    let server = common::create_test_server(repo);
    let long_link = format!("https://vocdoni.app/processes/{}", common::PROCESS_ID);

    server
        .get(&format!("/add/vocdoni.app/processes/{}", common::PROCESS_ID))
        .await
        .assert_status_ok();

    let response = server.get(&format!("/{}", common::PROCESS_ID_LINK)).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), long_link.as_str());
}
