mod common;

use common::Harness;
use serde_json::json;
use visa_intake::domain::phone;
use visa_intake::form::validation::phone_error;
use visa_intake::reference::CountryDirectory;
use visa_intake::ui::NoticeKind;

#[test]
fn search_sends_term_and_reads_either_shape() {
    let harness = Harness::new();
    harness
        .transport
        .push_json(200, json!([{"id": 1, "name": "South Africa"}, "South Korea"]));
    let mut directory = CountryDirectory::new();

    let names: Vec<String> = directory
        .search(&harness.client, "south", harness.notifier.as_ref())
        .into_iter()
        .map(|country| country.name.clone())
        .collect();

    assert_eq!(names, vec!["South Africa", "South Korea"]);
    let request = &harness.transport.requests()[0];
    assert!(request.url.ends_with("/countries?with_paginate=0&q=south"));
    assert_eq!(directory.find("South Korea").map(|c| c.id.as_str()), Some("South Korea"));
}

#[test]
fn empty_term_omits_the_query_parameter() {
    let harness = Harness::new();
    harness.transport.push_json(200, json!({"data": []}));
    let mut directory = CountryDirectory::new();
    directory.search(&harness.client, "  ", harness.notifier.as_ref());
    assert!(harness.transport.requests()[0]
        .url
        .ends_with("/countries?with_paginate=0"));
}

#[test]
fn failed_lookup_falls_back_to_an_empty_list() {
    let harness = Harness::new();
    harness.transport.push_failure("dns failure");
    let mut directory = CountryDirectory::new();

    let found = directory.search(&harness.client, "oman", harness.notifier.as_ref());

    assert!(found.is_empty());
    assert_eq!(
        harness.notifier.messages(NoticeKind::Error),
        vec!["Failed to load countries. Please refresh the page.".to_string()]
    );
}

#[test]
fn phone_prefix_follows_calling_code_changes() {
    let swapped = phone::swap_prefix("+971501234567", "+971", "+966");
    assert_eq!(swapped, "+966501234567");
    assert_eq!(phone_error("+966", &swapped), None);
    assert!(phone_error("+1", &phone::swap_prefix(&swapped, "+966", "+1")).is_some());
}
