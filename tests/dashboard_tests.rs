mod common;

use common::Harness;
use serde_json::{json, Value};
use visa_intake::api::Method;
use visa_intake::dashboard::{
    Dashboard, DeleteOutcome, DELETED, DELETE_FAILED, LOAD_FAILED, LOGIN_REQUIRED,
};
use visa_intake::errors::ApiError;
use visa_intake::routes::Route;
use visa_intake::ui::{NoticeKind, ScriptedConfirm};

fn records(ids: &[u64]) -> Value {
    Value::Array(
        ids.iter()
            .map(|id| {
                json!({
                    "id": id,
                    "name": format!("Applicant {id}"),
                    "type": "ten_years",
                    "passport": format!("visa/{id}/passport.pdf"),
                    "created_at": "2024-03-05T10:15:00Z"
                })
            })
            .collect(),
    )
}

fn visible_ids(dashboard: &Dashboard) -> Vec<u64> {
    dashboard.visible().iter().map(|app| app.id).collect()
}

fn all_ids(dashboard: &Dashboard) -> Vec<u64> {
    dashboard.applications().iter().map(|app| app.id).collect()
}

#[test]
fn opening_without_a_token_redirects_without_a_request() {
    let harness = Harness::new();
    let mut dashboard = Dashboard::new(3);

    let result = dashboard.open(&harness.client, &harness.ui);

    assert!(matches!(result, Err(ApiError::NotAuthenticated)));
    assert_eq!(harness.transport.request_count(), 0);
    assert_eq!(
        harness.notifier.messages(NoticeKind::Error),
        vec![LOGIN_REQUIRED.to_string()]
    );
    assert_eq!(harness.navigator.last_route(), Some(Route::Login));
}

#[test]
fn unauthorized_listing_clears_the_session_and_renders_nothing() {
    let harness = Harness::signed_in();
    harness.transport.push_status(401);
    let mut dashboard = Dashboard::new(3);

    let result = dashboard.open(&harness.client, &harness.ui);

    assert!(matches!(result, Err(ApiError::SessionExpired)));
    assert!(!harness.session.is_authenticated());
    assert!(harness.session.email().is_none());
    assert_eq!(harness.navigator.last_route(), Some(Route::Login));
    assert!(dashboard.applications().is_empty());
    assert!(!dashboard.is_loaded());

    let request = &harness.transport.requests()[0];
    assert_eq!(
        request.header("Authorization"),
        Some(format!("Bearer {}", common::TOKEN).as_str())
    );
}

#[test]
fn server_error_empties_the_list_and_notifies() {
    let harness = Harness::signed_in();
    harness.transport.push_status(503);
    let mut dashboard = Dashboard::new(3);

    assert!(dashboard.open(&harness.client, &harness.ui).is_err());
    assert!(dashboard.applications().is_empty());
    assert_eq!(
        harness.notifier.messages(NoticeKind::Error),
        vec![LOAD_FAILED.to_string()]
    );
    assert!(harness.session.is_authenticated());
}

#[test]
fn paginates_three_per_page_locally() {
    let harness = Harness::signed_in();
    harness
        .transport
        .push_json(200, json!({ "data": records(&[1, 2, 3, 4, 5, 6, 7]) }));
    let mut dashboard = Dashboard::new(3);
    dashboard.open(&harness.client, &harness.ui).unwrap();

    assert_eq!(visible_ids(&dashboard), vec![1, 2, 3]);
    let page = dashboard.page_info();
    assert_eq!((page.current_page, page.last_page, page.total), (1, 3, 7));
    assert_eq!((page.from, page.to), (1, 3));

    assert!(dashboard.go_to(3));
    assert_eq!(visible_ids(&dashboard), vec![7]);
    assert!(!dashboard.go_to(9));
    assert_eq!(dashboard.page_info().current_page, 3);
    assert_eq!(harness.transport.request_count(), 1);
}

#[test]
fn declined_confirmation_sends_nothing() {
    let harness = Harness::signed_in();
    harness.transport.push_json(200, records(&[41, 42]));
    let mut dashboard = Dashboard::new(3);
    dashboard.open(&harness.client, &harness.ui).unwrap();
    let confirm = ScriptedConfirm::new(false);

    let outcome = dashboard.delete(42, &harness.client, &confirm, &harness.ui);

    assert!(matches!(outcome, DeleteOutcome::Cancelled));
    assert_eq!(
        confirm.prompts(),
        vec!["Are you sure you want to delete Application #42? This action cannot be undone."]
    );
    assert_eq!(all_ids(&dashboard), vec![41, 42]);
    assert_eq!(harness.transport.request_count(), 1);
}

#[test]
fn failed_delete_refetches_and_the_record_reappears() {
    let harness = Harness::signed_in();
    harness.transport.push_json(200, records(&[41, 42, 43]));
    harness.transport.push_status(500);
    harness.transport.push_json(200, records(&[41, 42, 43]));
    let mut dashboard = Dashboard::new(3);
    dashboard.open(&harness.client, &harness.ui).unwrap();

    let outcome = dashboard.delete(42, &harness.client, &ScriptedConfirm::new(true), &harness.ui);

    assert!(matches!(
        outcome,
        DeleteOutcome::Failed(ApiError::Http { status: 500 })
    ));
    assert_eq!(all_ids(&dashboard), vec![41, 42, 43]);
    assert_eq!(
        harness.notifier.messages(NoticeKind::Error),
        vec![DELETE_FAILED.to_string()]
    );

    let requests = harness.transport.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[1].method, Method::Post);
    assert!(requests[1].url.ends_with("/visa-requests/delete"));
    assert_eq!(requests[1].json(), Some(&json!({ "id": 42 })));
    assert_eq!(requests[2].method, Method::Get);
}

#[test]
fn successful_delete_removes_the_record_and_clamps_the_page() {
    let harness = Harness::signed_in();
    harness.transport.push_json(200, records(&[1, 2, 3, 4]));
    harness.transport.push_json(200, json!({ "message": "deleted" }));
    harness.transport.push_json(200, records(&[1, 2, 3]));
    let mut dashboard = Dashboard::new(3);
    dashboard.open(&harness.client, &harness.ui).unwrap();
    dashboard.go_to(2);
    assert_eq!(visible_ids(&dashboard), vec![4]);

    let outcome = dashboard.delete(4, &harness.client, &ScriptedConfirm::new(true), &harness.ui);

    assert!(matches!(outcome, DeleteOutcome::Deleted));
    assert_eq!(dashboard.page_info().current_page, 1);
    assert_eq!(visible_ids(&dashboard), vec![1, 2, 3]);
    assert_eq!(
        harness.notifier.messages(NoticeKind::Success),
        vec![DELETED.to_string()]
    );
}

#[test]
fn unauthorized_delete_does_not_refetch() {
    let harness = Harness::signed_in();
    harness.transport.push_json(200, records(&[7]));
    harness.transport.push_status(401);
    let mut dashboard = Dashboard::new(3);
    dashboard.open(&harness.client, &harness.ui).unwrap();

    let outcome = dashboard.delete(7, &harness.client, &ScriptedConfirm::new(true), &harness.ui);

    assert!(matches!(outcome, DeleteOutcome::Failed(ApiError::SessionExpired)));
    assert_eq!(harness.transport.request_count(), 2);
    assert!(dashboard.applications().is_empty());
    assert!(!harness.session.is_authenticated());
}

#[test]
fn records_expose_dates_and_documents() {
    let harness = Harness::signed_in();
    harness.transport.push_json(
        200,
        json!({ "applications": [{
            "id": "12",
            "type": "family",
            "people_count": "2",
            "people": ["husband", "children"],
            "passport": "visa/12/passport.pdf",
            "studio_photo": "visa/12/photo.png",
            "created_at": "2024-03-05 10:15:00"
        }]}),
    );
    let mut dashboard = Dashboard::new(3);
    dashboard.open(&harness.client, &harness.ui).unwrap();

    let app = dashboard.find(12).expect("record 12");
    assert_eq!(app.people_count, Some(2));
    assert_eq!(app.kind_label(), "Dependent Visa");
    assert_eq!(app.submitted_label(), "March 5, 2024 10:15");
    let slots: Vec<_> = app.documents().map(|(slot, _)| slot.key()).collect();
    assert_eq!(slots, vec!["passportCopy", "studioPhoto"]);
}
