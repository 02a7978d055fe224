//! Integration tests for the session guard.
//!
//! Tests verify:
//! - Unauthenticated requests to /secrets redirect to the login form
//! - Tampered and malformed cookies behave like absent cookies
//! - Expired sessions behave like absent sessions
//! - The empty user id boundary: stored verbatim, never authenticates

use std::time::Duration;

use axum::http::StatusCode;
use tower::ServiceExt;

use super::test_utils::{
    get, get_with_cookie, location, login_request, session_cookie, test_router,
    test_router_with_ttl, TEST_COOKIE_NAME,
};

// =============================================================================
// Missing Cookie
// =============================================================================

#[tokio::test]
async fn test_secrets_without_cookie_redirects_to_login() {
    let router = test_router();

    let response = router.oneshot(get("/secrets")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some("/sessions/new"));
}

#[tokio::test]
async fn test_redirect_repeats_without_login() {
    let router = test_router();

    // The guard has no state; every unauthenticated request redirects
    for _ in 0..3 {
        let response = router.clone().oneshot(get("/secrets")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }
}

// =============================================================================
// Bad Cookies
// =============================================================================

#[tokio::test]
async fn test_malformed_cookie_redirects_to_login() {
    let router = test_router();

    let cookie = format!("{}=not-a-valid-value", TEST_COOKIE_NAME);
    let response = router
        .oneshot(get_with_cookie("/secrets", &cookie))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some("/sessions/new"));
}

#[tokio::test]
async fn test_tampered_cookie_redirects_to_login() {
    let router = test_router();

    let login = router.clone().oneshot(login_request("alice")).await.unwrap();
    let mut cookie = session_cookie(&login).unwrap();

    // Flip the last hex digit of the signature
    let last = cookie.pop().unwrap();
    cookie.push(if last == '0' { '1' } else { '0' });

    let response = router
        .oneshot(get_with_cookie("/secrets", &cookie))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some("/sessions/new"));
}

#[tokio::test]
async fn test_cookie_for_unknown_token_redirects_to_login() {
    let router_a = test_router();
    let router_b = test_router();

    // A cookie signed with the shared test secret, but whose session lives
    // in a different store
    let login = router_a.oneshot(login_request("alice")).await.unwrap();
    let cookie = session_cookie(&login).unwrap();

    let response = router_b
        .oneshot(get_with_cookie("/secrets", &cookie))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

// =============================================================================
// Expired Sessions
// =============================================================================

#[tokio::test]
async fn test_expired_session_redirects_to_login() {
    let router = test_router_with_ttl(Duration::ZERO);

    let login = router.clone().oneshot(login_request("alice")).await.unwrap();
    let cookie = session_cookie(&login).unwrap();

    tokio::time::sleep(Duration::from_millis(5)).await;

    let response = router
        .oneshot(get_with_cookie("/secrets", &cookie))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some("/sessions/new"));
}

// =============================================================================
// Empty User ID Boundary
// =============================================================================

#[tokio::test]
async fn test_empty_user_id_login_still_redirects() {
    let router = test_router();

    // The submission itself is accepted as-is
    let response = router.oneshot(login_request("")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some("/secrets"));
    assert!(session_cookie(&response).is_some());
}

#[tokio::test]
async fn test_empty_user_id_does_not_authenticate() {
    let router = test_router();

    let login = router.clone().oneshot(login_request("")).await.unwrap();
    let cookie = session_cookie(&login).unwrap();

    // The session exists but holds an empty user id, so the guard bounces
    let response = router
        .oneshot(get_with_cookie("/secrets", &cookie))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some("/sessions/new"));
}

#[tokio::test]
async fn test_missing_user_id_field_does_not_authenticate() {
    let router = test_router();

    // POST with an empty form body: no user_id field at all
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/sessions")
        .header(
            axum::http::header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(axum::body::Body::empty())
        .unwrap();

    let login = router.clone().oneshot(request).await.unwrap();
    assert_eq!(login.status(), StatusCode::SEE_OTHER);
    let cookie = session_cookie(&login).unwrap();

    let response = router
        .oneshot(get_with_cookie("/secrets", &cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}
