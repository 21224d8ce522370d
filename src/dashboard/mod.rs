//! Admin view over submitted applications.
//!
//! The whole collection is fetched in one call and paginated locally. Deletes
//! are optimistic: the row disappears as soon as the admin confirms and the
//! list is refetched afterwards to converge on the server's state.

pub mod documents;
pub mod pagination;

use serde_json::{json, Value};

use crate::api::{endpoints, ApiClient};
use crate::domain::Application;
use crate::errors::ApiError;
use crate::routes::Route;
use crate::ui::{Confirm, UiContext};

pub use documents::{DocumentView, FILE_NOT_AVAILABLE};
pub use pagination::PageInfo;

pub const LOGIN_REQUIRED: &str = "Please login to access the dashboard";
pub const LOAD_FAILED: &str = "Failed to load your applications";
pub const DELETED: &str = "Application deleted successfully";
pub const DELETE_FAILED: &str = "Failed to delete application";

/// Keys tried, in order, when the collection arrives wrapped in an object.
const ENVELOPE_KEYS: [&str; 3] = ["data", "visa_requests", "applications"];

#[derive(Debug)]
pub enum DeleteOutcome {
    /// The admin declined the prompt; nothing was sent.
    Cancelled,
    Deleted,
    Failed(ApiError),
}

#[derive(Debug)]
pub struct Dashboard {
    applications: Vec<Application>,
    page: usize,
    per_page: usize,
    loaded: bool,
}

impl Dashboard {
    pub fn new(per_page: usize) -> Self {
        Self {
            applications: Vec::new(),
            page: 1,
            per_page: per_page.max(1),
            loaded: false,
        }
    }

    /// Entry point of the view. Without a token the visitor is sent to the
    /// login page and no request is made.
    pub fn open(&mut self, client: &ApiClient, ui: &UiContext) -> Result<(), ApiError> {
        if !client.session().is_authenticated() {
            ui.notifier.error(LOGIN_REQUIRED);
            ui.navigator.navigate(Route::Login);
            return Err(ApiError::NotAuthenticated);
        }
        self.refresh(client, ui)
    }

    /// Refetches the full collection. On failure the list is emptied.
    pub fn refresh(&mut self, client: &ApiClient, ui: &UiContext) -> Result<(), ApiError> {
        let result = client
            .get(endpoints::VISA_REQUESTS)
            .map(extract_applications);
        match result {
            Ok(applications) => {
                tracing::debug!(count = applications.len(), "applications loaded");
                self.applications = applications;
                self.loaded = true;
                self.clamp_page();
                Ok(())
            }
            Err(err) => {
                self.applications.clear();
                self.loaded = false;
                self.page = 1;
                if !err.is_fatal() {
                    tracing::warn!(error = %err, "failed to load applications");
                    ui.notifier.error(LOAD_FAILED);
                }
                Err(err)
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn find(&self, id: u64) -> Option<&Application> {
        self.applications.iter().find(|app| app.id == id)
    }

    pub fn page_info(&self) -> PageInfo {
        PageInfo::compute(self.applications.len(), self.per_page, self.page)
    }

    /// Applications on the current page.
    pub fn visible(&self) -> &[Application] {
        &self.applications[self.page_info().range()]
    }

    /// Moves to `page`; out-of-range requests are clamped. Returns whether
    /// the current page changed.
    pub fn go_to(&mut self, page: usize) -> bool {
        let target = PageInfo::compute(self.applications.len(), self.per_page, page).current_page;
        let changed = target != self.page;
        self.page = target;
        changed
    }

    /// Deletes one application after an explicit confirmation.
    pub fn delete(
        &mut self,
        id: u64,
        client: &ApiClient,
        confirm: &dyn Confirm,
        ui: &UiContext,
    ) -> DeleteOutcome {
        let prompt = format!(
            "Are you sure you want to delete Application #{}? This action cannot be undone.",
            id
        );
        if !confirm.confirm(&prompt) {
            return DeleteOutcome::Cancelled;
        }

        self.applications.retain(|app| app.id != id);
        self.clamp_page();

        match client.post(endpoints::DELETE_VISA_REQUEST, &json!({ "id": id })) {
            Ok(_) => {
                tracing::info!(id, "application deleted");
                ui.notifier.success(DELETED);
                if let Err(err) = self.refresh(client, ui) {
                    tracing::debug!(id, error = %err, "reload after delete failed");
                }
                DeleteOutcome::Deleted
            }
            Err(err) if err.is_fatal() => {
                self.applications.clear();
                self.loaded = false;
                DeleteOutcome::Failed(err)
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "delete failed; reloading applications");
                ui.notifier.error(DELETE_FAILED);
                if let Err(err) = self.refresh(client, ui) {
                    tracing::debug!(id, error = %err, "reload after failed delete failed");
                }
                DeleteOutcome::Failed(err)
            }
        }
    }

    fn clamp_page(&mut self) {
        self.page = self.page_info().current_page;
    }
}

/// Pulls the application list out of whatever shape the backend returned.
/// Records that fail to parse are skipped.
pub fn extract_applications(response: Value) -> Vec<Application> {
    let items = match response {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            let preferred = ENVELOPE_KEYS
                .iter()
                .find(|key| matches!(map.get(**key), Some(Value::Array(_))))
                .and_then(|key| map.remove(*key));
            match preferred {
                Some(Value::Array(items)) => items,
                _ => map
                    .into_iter()
                    .find_map(|(_, value)| match value {
                        Value::Array(items) => Some(items),
                        _ => None,
                    })
                    .unwrap_or_default(),
            }
        }
        _ => Vec::new(),
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Application>(item) {
            Ok(app) => Some(app),
            Err(err) => {
                tracing::warn!(error = %err, "skipping malformed application record");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(apps: &[Application]) -> Vec<u64> {
        apps.iter().map(|app| app.id).collect()
    }

    #[test]
    fn accepts_every_collection_shape() {
        let bare = extract_applications(json!([{"id": 1}]));
        assert_eq!(ids(&bare), vec![1]);

        let data = extract_applications(json!({"meta": {}, "data": [{"id": 2}]}));
        assert_eq!(ids(&data), vec![2]);

        let named = extract_applications(json!({"visa_requests": [{"id": "3"}]}));
        assert_eq!(ids(&named), vec![3]);

        let first_array = extract_applications(json!({
            "total": 2,
            "rows": [{"id": 4}, {"id": 5}],
            "other": [{"id": 6}]
        }));
        assert_eq!(ids(&first_array), vec![4, 5]);

        assert!(extract_applications(json!({"message": "ok"})).is_empty());
        assert!(extract_applications(Value::Null).is_empty());
    }

    #[test]
    fn loosely_shaped_fields_keep_the_record() {
        let apps = extract_applications(json!([
            {"id": 1, "people": ["husband"]},
            {"id": 2, "people": "[\"husband\",\"children\"]"},
            {"id": 3, "people": null},
            {"id": 4, "people": [{"relationship": "children"}]},
            {"id": 5, "name": "A", "phone": 971501234567u64},
            {"id": 6, "people": 3, "email": {"primary": "x@y.z"}}
        ]));
        assert_eq!(ids(&apps), vec![1, 2, 3, 4, 5, 6]);

        let people: Vec<Option<Vec<String>>> = apps.iter().map(|app| app.people.clone()).collect();
        assert_eq!(people[0], Some(vec!["husband".to_string()]));
        assert_eq!(
            people[1],
            Some(vec!["husband".to_string(), "children".to_string()])
        );
        assert_eq!(people[2], None);
        assert_eq!(people[3], Some(vec!["children".to_string()]));
        assert_eq!(apps[4].phone.as_deref(), Some("971501234567"));
        assert_eq!(apps[5].people, None);
        assert_eq!(apps[5].email, None);
        assert_eq!(apps[5].people_label(), "N/A");
    }

    #[test]
    fn malformed_records_are_skipped() {
        let apps = extract_applications(json!([{"id": 1}, {"name": "no id"}, {"id": 2}]));
        assert_eq!(ids(&apps), vec![1, 2]);
    }
}
