mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use common::TestApp;
use serde_json::json;
use shared::{model::UserRole, service::TransitionPolicy};
use tower::ServiceExt;

fn jane() -> serde_json::Value {
    json!({ "name": "Jane Doe", "email": "jane@example.com", "password": "secret123" })
}

#[tokio::test]
async fn register_twice_reports_existing_user() {
    let app = TestApp::new(TransitionPolicy::Unconstrained).await;

    let (status, body) = app.send("POST", "/api/auth/register", None, Some(jane())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User created successfully");
    assert!(body["data"].get("password").is_none());

    let (status, body) = app.send("POST", "/api/auth/register", None, Some(jane())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User already exists");
}

#[tokio::test]
async fn login_sets_cookie_that_authenticates_me() {
    let app = TestApp::new(TransitionPolicy::Unconstrained).await;
    app.send("POST", "/api/auth/register", None, Some(jane())).await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "email": "jane@example.com", "password": "secret123" }).to_string(),
        ))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("token="));
    assert!(cookie.contains("HttpOnly"));

    let token_pair = cookie.split(';').next().unwrap();
    let me = Request::builder()
        .uri("/api/auth/me")
        .header(header::COOKIE, token_pair)
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(me).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn wrong_password_and_unknown_email_look_the_same() {
    let app = TestApp::new(TransitionPolicy::Unconstrained).await;
    app.send("POST", "/api/auth/register", None, Some(jane())).await;

    let (wrong_status, wrong_body) = app
        .send(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": "jane@example.com", "password": "nope" })),
        )
        .await;
    let (ghost_status, ghost_body) = app
        .send(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": "ghost@example.com", "password": "nope" })),
        )
        .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body["message"], "Invalid credentials");
    assert_eq!(ghost_status, wrong_status);
    assert_eq!(ghost_body, wrong_body);
}

#[tokio::test]
async fn me_without_token_is_unauthorized() {
    let app = TestApp::new(TransitionPolicy::Unconstrained).await;

    let (status, body) = app.send("GET", "/api/auth/me", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn stale_cookie_does_not_hide_valid_bearer() {
    let app = TestApp::new(TransitionPolicy::Unconstrained).await;
    let admin = app.token(UserRole::Admin);

    let request = |bearer: Option<&str>| {
        let mut builder = Request::builder()
            .uri("/api/users")
            .header(header::COOKIE, "token=expired-or-forged");
        if let Some(token) = bearer {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::empty()).unwrap()
    };

    let with_bearer = app.router.clone().oneshot(request(Some(&admin))).await.unwrap();
    assert_eq!(with_bearer.status(), StatusCode::OK);

    let cookie_only = app.router.clone().oneshot(request(None)).await.unwrap();
    assert_eq!(cookie_only.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn health_and_metrics_are_served() {
    let app = TestApp::new(TransitionPolicy::Unconstrained).await;

    let (status, body) = app.send("GET", "/api/healthchecker", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");

    app.send("GET", "/api/products", None, None).await;

    let response = app
        .router
        .clone()
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
