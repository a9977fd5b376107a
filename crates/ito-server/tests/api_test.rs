//! ルーター経由のAPIテスト
//!
//! tower の `oneshot` でルーターに直接リクエストを流します。
//! 実際のTCPバインドは不要です。

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use ito_core::{LinkStore, NewLink};
use ito_server::build_router;
use tower::ServiceExt;

fn test_app() -> (Router, LinkStore) {
    let store = LinkStore::open_in_memory().unwrap();
    let app = build_router(store.clone()).unwrap();
    (app, store)
}

fn seed(store: &LinkStore, alias: &str, target: &str) {
    store.create(NewLink::parse(alias, target).unwrap()).unwrap();
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn form_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/links")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_dashboard_lists_links() {
    let (app, store) = test_app();
    seed(&store, "docs", "https://example.com/docs");
    seed(&store, "blog", "https://example.com/blog");

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("docs"));
    assert!(html.contains("blog"));
    assert!(html.contains("https://example.com/docs"));
}

#[tokio::test]
async fn test_create_link_redirects_to_dashboard() {
    let (app, store) = test_app();

    let response = app
        .oneshot(form_request(
            "alias=docs&target_url=https%3A%2F%2Fexample.com%2Fdocs",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");

    // ストアに反映されている
    let target = store.resolve("docs").unwrap();
    assert_eq!(target.as_str(), "https://example.com/docs");
}

#[tokio::test]
async fn test_create_link_duplicate_alias_is_bad_request() {
    let (app, store) = test_app();
    seed(&store, "docs", "https://example.com/a");

    let response = app
        .oneshot(form_request(
            "alias=docs&target_url=https%3A%2F%2Fexample.com%2Fb",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_string(response).await;
    assert!(body.starts_with("Error: "));
}

#[tokio::test]
async fn test_create_link_invalid_url_is_bad_request() {
    let (app, _store) = test_app();

    let response = app
        .oneshot(form_request("alias=docs&target_url=not-a-url"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_link_reserved_alias_is_bad_request() {
    let (app, _store) = test_app();

    let response = app
        .oneshot(form_request(
            "alias=links&target_url=https%3A%2F%2Fexample.com",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_redirect_to_target() {
    let (app, store) = test_app();
    seed(&store, "docs", "https://example.com/docs");

    let response = app
        .oneshot(Request::builder().uri("/docs").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[header::LOCATION],
        "https://example.com/docs"
    );
}

#[tokio::test]
async fn test_redirect_unknown_alias_is_not_found() {
    let (app, _store) = test_app();

    let response = app
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_link() {
    let (app, store) = test_app();
    seed(&store, "docs", "https://example.com/docs");
    let id = store.list().unwrap()[0].id;

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/links/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(store.list().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_unknown_link_is_not_found() {
    let (app, _store) = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/links/42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_favicon_is_no_content() {
    let (app, _store) = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/favicon.ico")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
