mod common;

use std::time::{Duration, Instant};

use api::{ApiError, CancellationToken, Credentials};
use reqwest::header::AUTHORIZATION;
use reqwest::Method;
use serde_json::json;

use common::{MockServer, Reply};

#[tokio::test]
async fn test_bearer_token_reaches_backend() {
    let server = MockServer::start(vec![Reply::json(
        200,
        json!({ "user": { "username": "ann", "email": "ann@x.io", "token": "T" } }),
    )]);
    let client = server.client(Some("T"));

    let user = client.current_user(None).await.unwrap();

    assert_eq!(user.email, "ann@x.io");
    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/api/user");
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer T"));
}

#[tokio::test]
async fn test_preset_authorization_is_kept() {
    let server = MockServer::start(vec![Reply::empty(200)]);
    let client = server.client(Some("T"));

    let builder = client
        .request(Method::GET, &["api", "ping"])
        .unwrap()
        .header(AUTHORIZATION, "Basic abc");
    client.send(builder, None).await.unwrap();

    assert_eq!(
        server.requests()[0].authorization.as_deref(),
        Some("Basic abc")
    );
}

#[tokio::test]
async fn test_public_client_sends_no_authorization() {
    let server = MockServer::start(vec![Reply::json(
        200,
        json!({ "user": { "username": "ann", "email": "ann@x.io", "token": "T" } }),
    )]);
    let credentials = Credentials {
        email: "ann@x.io".to_string(),
        password: "secret".to_string(),
    };

    let user = server.public_client().login(&credentials).await.unwrap();

    assert_eq!(user.token.as_deref(), Some("T"));
    let request = &server.requests()[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/api/login");
    assert!(request.authorization.is_none());
    let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(body, json!({ "email": "ann@x.io", "password": "secret" }));
}

#[tokio::test]
async fn test_rejection_carries_backend_message() {
    let server = MockServer::start(vec![Reply::json(
        422,
        json!({ "message": "Email already taken" }),
    )]);

    let err = server
        .client(Some("T"))
        .delete_user("ann@x.io")
        .await
        .unwrap_err();

    match err {
        ApiError::Rejected { status, message } => {
            assert_eq!(status, 422);
            assert_eq!(message.as_deref(), Some("Email already taken"));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_maps_to_status() {
    let server = MockServer::start(vec![Reply::empty(500)]);

    let err = server.client(Some("T")).list_users(None).await.unwrap_err();

    assert!(matches!(err, ApiError::Status(500)));
}

#[tokio::test]
async fn test_unexpected_shape_names_endpoint() {
    let server = MockServer::start(vec![Reply::json(200, json!({ "articles": "nope" }))]);

    let err = server
        .client(Some("T"))
        .list_articles(None)
        .await
        .unwrap_err();

    match err {
        ApiError::UnexpectedResponse { endpoint, .. } => assert_eq!(endpoint, "/api/articles"),
        other => panic!("expected unexpected response, got {other:?}"),
    }
}

#[tokio::test]
async fn test_email_is_percent_encoded_in_path() {
    let server = MockServer::start(vec![Reply::empty(200)]);

    server
        .client(Some("T"))
        .delete_user("a b@x.io")
        .await
        .unwrap();

    let request = &server.requests()[0];
    assert_eq!(request.method, "DELETE");
    assert_eq!(request.path, "/api/users/a%20b@x.io");
}

#[tokio::test]
async fn test_cancel_aborts_in_flight_request() {
    let server = MockServer::start(vec![
        Reply::json(200, json!([])).delayed(Duration::from_secs(2))
    ]);
    let client = server.client(Some("T"));
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    let started = Instant::now();
    let err = client.list_users(Some(&cancel)).await.unwrap_err();

    assert!(err.is_cancelled());
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn test_cancelled_token_skips_request() {
    let server = MockServer::start(vec![Reply::json(200, json!([]))]);
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = server
        .client(Some("T"))
        .list_users(Some(&cancel))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Cancelled));
    assert!(server.requests().is_empty());
}
