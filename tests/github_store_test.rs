//! GitHub remote store against a local HTTP server.
//!
//! Exercises the real reqwest client so headers, methods, paths and payloads
//! are checked on the wire.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gist::adapters::{GitHubStore, ReqwestHttpClient};
use gist::error::GistError;
use gist::models::{Gist, GistId};
use gist::traits::RemoteStore;

const TOKEN: &str = "ghp_test_token";

fn store(server: &MockServer) -> GitHubStore {
    GitHubStore::new(
        Arc::new(ReqwestHttpClient::new()),
        server.uri(),
        TOKEN,
        "octocat",
    )
}

fn gist_json(id: &str, public: bool) -> serde_json::Value {
    json!({
        "id": id,
        "description": null,
        "public": public,
        "html_url": format!("https://gist.github.com/{}", id),
        "files": {
            "hello.py": {
                "filename": "hello.py",
                "size": 14,
                "language": "Python",
                "content": "print('hi')\n"
            }
        },
        "created_at": "2024-03-01T10:00:00Z",
        "updated_at": "2024-03-02T10:00:00Z"
    })
}

#[tokio::test]
async fn test_fetch_all_walks_pages_with_auth_headers() {
    let server = MockServer::start().await;
    let full_page: Vec<_> = (0..100).map(|i| gist_json(&format!("g{:03}", i), true)).collect();

    Mock::given(method("GET"))
        .and(path("/gists"))
        .and(query_param("per_page", "100"))
        .and(query_param("page", "1"))
        .and(header("Authorization", format!("Bearer {}", TOKEN).as_str()))
        .and(header("Accept", "application/vnd.github.v3+json"))
        .and(header("User-Agent", "gist-cli"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(full_page)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/gists"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([gist_json("last", false)])))
        .expect(1)
        .mount(&server)
        .await;

    let gists = store(&server).fetch_all().await.unwrap();

    assert_eq!(gists.len(), 101);
    assert_eq!(gists[100].id.as_str(), "last");
    assert_eq!(gists[0].description, "");
}

#[tokio::test]
async fn test_fetch_all_server_error_is_remote_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gists"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = store(&server).fetch_all().await.unwrap_err();

    assert_eq!(
        err,
        GistError::RemoteUnavailable {
            status: Some(500),
            message: "boom".to_string()
        }
    );
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_fetch_by_id_returns_content() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gists/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gist_json("abc123", false)))
        .mount(&server)
        .await;

    let gist = store(&server)
        .fetch_by_id(&GistId::from("abc123"))
        .await
        .unwrap();

    assert!(!gist.public);
    let file = &gist.files["hello.py"];
    assert_eq!(file.content.as_deref(), Some("print('hi')\n"));
    assert_eq!(file.language.as_deref(), Some("Python"));
}

#[tokio::test]
async fn test_fetch_by_id_missing_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gists/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
        .mount(&server)
        .await;

    let err = store(&server)
        .fetch_by_id(&GistId::from("nope"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        GistError::GistNotFound {
            id: "nope".to_string()
        }
    );
}

#[tokio::test]
async fn test_create_posts_payload_and_copies_remote_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/gists"))
        .and(header("Content-Type", "application/json"))
        .and(body_partial_json(json!({
            "description": "Helpers #python",
            "public": false,
            "files": {"hello.py": {"content": "print('hi')\n"}}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(gist_json("new42", false)))
        .expect(1)
        .mount(&server)
        .await;

    let mut gist = Gist::new_local("Helpers #python", false);
    gist.add_file("hello.py", "print('hi')\n");
    store(&server).create(&mut gist).await.unwrap();

    assert_eq!(gist.id.as_str(), "new42");
    assert_eq!(gist.html_url, "https://gist.github.com/new42");
    assert_eq!(gist.created_at.to_rfc3339(), "2024-03-01T10:00:00+00:00");
}

#[tokio::test]
async fn test_update_patches_when_visibility_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gists/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gist_json("abc123", true)))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/gists/abc123"))
        .and(body_partial_json(json!({"description": "renamed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(gist_json("abc123", true)))
        .expect(1)
        .mount(&server)
        .await;

    let mut gist = Gist::new_local("renamed", true);
    gist.id = GistId::from("abc123");
    store(&server).update(&gist).await.unwrap();
}

#[tokio::test]
async fn test_update_visibility_change_is_rejected_before_patch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gists/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gist_json("abc123", false)))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut gist = Gist::new_local("", true);
    gist.id = GistId::from("abc123");
    let err = store(&server).update(&gist).await.unwrap_err();

    assert!(matches!(
        err,
        GistError::RemoteUnavailable {
            status: Some(422),
            ..
        }
    ));
    assert!(err.to_string().contains("visibility"));
}

#[tokio::test]
async fn test_connection_failure_has_no_status() {
    let store = GitHubStore::new(
        Arc::new(ReqwestHttpClient::new()),
        "http://127.0.0.1:1",
        TOKEN,
        "octocat",
    );

    let err = store.fetch_all().await.unwrap_err();

    assert!(matches!(err, GistError::RemoteUnavailable { status: None, .. }));
}
