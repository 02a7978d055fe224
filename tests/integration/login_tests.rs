//! Integration tests for the login flow.
//!
//! Tests verify:
//! - Login form rendering on both public paths
//! - Login submission sets a cookie and redirects to the protected page
//! - The full login -> secrets flow with cookie replay
//! - Idempotence of reads on the protected page

use axum::http::StatusCode;
use tower::ServiceExt;

use super::test_utils::{
    body_string, get, get_with_cookie, location, login_request, login_request_with_cookie,
    session_cookie, test_router, TEST_COOKIE_NAME,
};

// =============================================================================
// Login Form Rendering
// =============================================================================

#[tokio::test]
async fn test_root_renders_login_form() {
    let router = test_router();

    let response = router.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains(r#"<form method="post" action="/sessions">"#));
    assert!(body.contains(r#"name="user_id""#));
}

#[tokio::test]
async fn test_sessions_new_renders_login_form() {
    let router = test_router();

    let response = router.oneshot(get("/sessions/new")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains(r#"name="user_id""#));
}

#[tokio::test]
async fn test_login_form_sets_no_cookie() {
    let router = test_router();

    let response = router.oneshot(get("/sessions/new")).await.unwrap();
    assert!(session_cookie(&response).is_none());
}

// =============================================================================
// Login Submission
// =============================================================================

#[tokio::test]
async fn test_login_redirects_to_secrets() {
    let router = test_router();

    let response = router.oneshot(login_request("alice")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some("/secrets"));
}

#[tokio::test]
async fn test_login_sets_session_cookie() {
    let router = test_router();

    let response = router.oneshot(login_request("alice")).await.unwrap();

    let cookie = session_cookie(&response).expect("login should set a session cookie");
    assert!(cookie.starts_with(&format!("{}=", TEST_COOKIE_NAME)));

    // Cookie attributes
    let set_cookie = response
        .headers()
        .get("set-cookie")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("Path=/"));
}

// =============================================================================
// Login -> Secrets Flow
// =============================================================================

#[tokio::test]
async fn test_login_then_secrets_succeeds() {
    let router = test_router();

    let login = router.clone().oneshot(login_request("alice")).await.unwrap();
    let cookie = session_cookie(&login).unwrap();

    let response = router
        .oneshot(get_with_cookie("/secrets", &cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Secret page"));
    assert!(body.contains("alice"));
}

#[tokio::test]
async fn test_secrets_is_idempotent() {
    let router = test_router();

    let login = router.clone().oneshot(login_request("alice")).await.unwrap();
    let cookie = session_cookie(&login).unwrap();

    let first = router
        .clone()
        .oneshot(get_with_cookie("/secrets", &cookie))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    let first_body = body_string(first).await;

    let second = router
        .oneshot(get_with_cookie("/secrets", &cookie))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::OK);
    let second_body = body_string(second).await;

    assert_eq!(first_body, second_body);
}

#[tokio::test]
async fn test_relogin_reuses_session_and_overwrites_user_id() {
    let router = test_router();

    let first_login = router.clone().oneshot(login_request("alice")).await.unwrap();
    let cookie = session_cookie(&first_login).unwrap();

    // Log in again with the same cookie under a different user id
    let second_login = router
        .clone()
        .oneshot(login_request_with_cookie("bob", &cookie))
        .await
        .unwrap();
    assert_eq!(second_login.status(), StatusCode::SEE_OTHER);
    let cookie_after = session_cookie(&second_login).unwrap();
    assert_eq!(cookie, cookie_after, "existing session should be reused");

    let response = router
        .oneshot(get_with_cookie("/secrets", &cookie))
        .await
        .unwrap();
    let body = body_string(response).await;
    assert!(body.contains("bob"));
    assert!(!body.contains("alice"));
}

#[tokio::test]
async fn test_secret_page_escapes_user_id() {
    let router = test_router();

    // Form-encoded payload; %3C and %3E decode to angle brackets
    let login = router
        .clone()
        .oneshot(login_request("%3Cscript%3E"))
        .await
        .unwrap();
    let cookie = session_cookie(&login).unwrap();

    let response = router
        .oneshot(get_with_cookie("/secrets", &cookie))
        .await
        .unwrap();
    let body = body_string(response).await;
    assert!(!body.contains("<script>"));
    assert!(body.contains("&lt;script&gt;"));
}

// =============================================================================
// Health Endpoint
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let router = test_router();

    let response = router.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    let health: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(health["status"], "healthy");
    assert!(health["version"].is_string());
}
