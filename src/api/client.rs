use std::sync::Arc;

use serde_json::Value;

use crate::errors::ApiError;
use crate::routes::Route;
use crate::session::SessionContext;
use crate::ui::Navigator;

use super::multipart::MultipartForm;
use super::transport::{ApiRequest, ApiResponse, Method, RequestBody, Transport};

/// Thin REST wrapper: attaches the bearer token, centralizes 401 handling and
/// maps failure statuses to [`ApiError`]. No retries and no timeouts.
pub struct ApiClient {
    base_url: String,
    transport: Box<dyn Transport>,
    session: Arc<SessionContext>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: Box<dyn Transport>,
        session: Arc<SessionContext>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
            session,
            navigator,
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.request(Method::Get, self.url(path), RequestBody::Empty)
    }

    /// GET with query parameters, URL-encoded.
    pub fn get_with_query(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, ApiError> {
        let url = reqwest::Url::parse_with_params(&self.url(path), query)
            .map_err(|err| ApiError::Transport(format!("invalid url: {}", err)))?;
        self.request(Method::Get, url.to_string(), RequestBody::Empty)
    }

    pub fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.request(Method::Post, self.url(path), RequestBody::Json(body.clone()))
    }

    pub fn put(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.request(Method::Put, self.url(path), RequestBody::Json(body.clone()))
    }

    pub fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.request(Method::Delete, self.url(path), RequestBody::Empty)
    }

    /// Multipart POST. Omits the JSON content type so the encoder can set the
    /// boundary; otherwise follows the same auth contract.
    pub fn upload(&self, path: &str, form: MultipartForm) -> Result<Value, ApiError> {
        self.request(Method::Post, self.url(path), RequestBody::Multipart(form))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, url: String, body: RequestBody) -> Result<Value, ApiError> {
        let mut headers = Vec::new();
        if !matches!(body, RequestBody::Multipart(_)) {
            headers.push(("Content-Type", "application/json".to_string()));
            headers.push(("Accept", "application/json".to_string()));
        }
        if let Some(token) = self.session.token() {
            headers.push(("Authorization", format!("Bearer {}", token)));
        }
        let request = ApiRequest {
            method,
            url,
            headers,
            body,
        };

        tracing::debug!(method = %request.method, url = %request.url, "sending request");
        let response = self.transport.send(&request).map_err(|err| {
            tracing::warn!(method = %request.method, url = %request.url, error = %err, "request failed");
            err
        })?;
        self.handle(&request, response)
    }

    fn handle(&self, request: &ApiRequest, response: ApiResponse) -> Result<Value, ApiError> {
        if response.status == 401 {
            tracing::warn!(url = %request.url, "unauthorized response; clearing session");
            self.session.invalidate();
            self.navigator.navigate(Route::Login);
            return Err(ApiError::SessionExpired);
        }
        if !response.is_success() {
            tracing::warn!(url = %request.url, status = response.status, "request rejected");
            return Err(ApiError::Http {
                status: response.status,
            });
        }
        if response.body.iter().all(|byte| byte.is_ascii_whitespace()) {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&response.body)?)
    }
}
