mod common;

use std::sync::Arc;

use common::Harness;
use serde_json::json;
use tempfile::TempDir;
use visa_intake::api::AuthService;
use visa_intake::errors::{ApiError, IntakeError};
use visa_intake::routes::Route;
use visa_intake::session::{JsonSessionStore, SessionContext, SessionStore};
use visa_intake::ui::NoticeKind;

fn file_backed(dir: &TempDir) -> (Harness, JsonSessionStore) {
    let path = dir.path().join("session.json");
    let session = Arc::new(SessionContext::new(Box::new(JsonSessionStore::new(
        path.clone(),
    ))));
    (Harness::with_session(session), JsonSessionStore::new(path))
}

#[test]
fn login_persists_token_and_opens_the_dashboard() {
    let dir = TempDir::new().unwrap();
    let (harness, store) = file_backed(&dir);
    harness.transport.push_json(200, json!({ "token": "abc" }));

    AuthService::new(&harness.client, &harness.ui)
        .login(" admin@example.com ", "secret")
        .unwrap();

    let request = &harness.transport.requests()[0];
    assert!(request.url.ends_with("/login"));
    assert_eq!(
        request.json(),
        Some(&json!({ "email": "admin@example.com", "password": "secret" }))
    );

    let stored = store.load().unwrap();
    assert_eq!(stored.token.as_deref(), Some("abc"));
    assert_eq!(stored.email.as_deref(), Some("admin@example.com"));
    assert_eq!(harness.navigator.last_route(), Some(Route::Dashboard));
    assert_eq!(
        harness.notifier.messages(NoticeKind::Success),
        vec!["Login successful!".to_string()]
    );
    assert_eq!(AuthService::entry_route(&harness.session), Route::Dashboard);
}

#[test]
fn login_without_token_in_reply_stays_signed_out() {
    let harness = Harness::new();
    harness.transport.push_json(200, json!({ "message": "ok" }));

    let result = AuthService::new(&harness.client, &harness.ui).login("a@b.co", "pw");

    assert!(matches!(result, Err(IntakeError::Api(ApiError::Decode(_)))));
    assert!(!harness.session.is_authenticated());
    assert_eq!(
        harness.notifier.messages(NoticeKind::Error),
        vec!["Login failed. Please check your credentials.".to_string()]
    );
    assert_eq!(AuthService::entry_route(&harness.session), Route::Login);
}

#[test]
fn login_requires_both_fields_before_calling_out() {
    let harness = Harness::new();
    let result = AuthService::new(&harness.client, &harness.ui).login("  ", "pw");
    assert!(matches!(result, Err(IntakeError::InvalidInput(_))));
    assert_eq!(harness.transport.request_count(), 0);
}

#[test]
fn logout_clears_the_session_even_when_the_server_fails() {
    let dir = TempDir::new().unwrap();
    let (harness, store) = file_backed(&dir);
    harness.session.sign_in("abc", "admin@example.com").unwrap();
    harness.transport.push_status(500);

    AuthService::new(&harness.client, &harness.ui).logout();

    assert_eq!(harness.transport.request_count(), 1);
    assert!(!harness.session.is_authenticated());
    assert!(store.load().unwrap().token.is_none());
    assert_eq!(harness.navigator.last_route(), Some(Route::Login));
}

#[test]
fn token_check_reports_missing_token_without_a_request() {
    let harness = Harness::new();
    let result = AuthService::new(&harness.client, &harness.ui).check_token();
    assert!(matches!(result, Err(ApiError::NotAuthenticated)));
    assert_eq!(harness.transport.request_count(), 0);
}

#[test]
fn token_check_with_expired_token_forces_login() {
    let harness = Harness::signed_in();
    harness.transport.push_status(401);

    let result = AuthService::new(&harness.client, &harness.ui).check_token();

    assert!(matches!(result, Err(ApiError::SessionExpired)));
    assert!(!harness.session.is_authenticated());
    assert_eq!(harness.navigator.last_route(), Some(Route::Login));
    assert_eq!(
        harness.notifier.messages(NoticeKind::Error),
        vec!["Authentication failed".to_string()]
    );
}
