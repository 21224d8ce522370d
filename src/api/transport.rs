use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use reqwest::blocking::{multipart, Client};
use serde_json::Value;

use crate::errors::ApiError;

use super::multipart::{MultipartForm, PartValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    fn as_reqwest(&self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    Multipart(MultipartForm),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn multipart(&self) -> Option<&MultipartForm> {
        match &self.body {
            RequestBody::Multipart(form) => Some(form),
            _ => None,
        }
    }

    pub fn json(&self) -> Option<&Value> {
        match &self.body {
            RequestBody::Json(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn json(status: u16, value: &Value) -> Self {
        Self {
            status,
            body: value.to_string().into_bytes(),
        }
    }

    pub fn empty(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes one HTTP exchange. Returns `Err` only for transport failures;
/// any status code is a successful exchange at this layer.
pub trait Transport: Send + Sync {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Blocking `reqwest` transport. No timeout is configured: a hung request
/// blocks only its caller.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut builder = self
            .client
            .request(request.method.as_reqwest(), request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(*name, value.as_str());
        }
        builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.body(serde_json::to_vec(value)?),
            RequestBody::Multipart(form) => builder.multipart(encode_form(form)?),
        };
        let response = builder
            .send()
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|err| ApiError::Transport(err.to_string()))?
            .to_vec();
        Ok(ApiResponse { status, body })
    }
}

fn encode_form(form: &MultipartForm) -> Result<multipart::Form, ApiError> {
    let mut encoded = multipart::Form::new();
    for part in form.parts() {
        encoded = match &part.value {
            PartValue::Text(value) => encoded.text(part.name.clone(), value.clone()),
            PartValue::File(file) => {
                let bytes = file
                    .read_bytes()
                    .map_err(|err| ApiError::Transport(err.to_string()))?;
                let file_part = multipart::Part::bytes(bytes)
                    .file_name(file.file_name.clone())
                    .mime_str(file.content_type())
                    .map_err(|err| ApiError::Transport(err.to_string()))?;
                encoded.part(part.name.clone(), file_part)
            }
        };
    }
    Ok(encoded)
}

#[derive(Default)]
struct Script {
    replies: VecDeque<Result<ApiResponse, ApiError>>,
    requests: Vec<ApiRequest>,
}

/// In-memory transport that replays queued replies in order and records
/// every request. Clones share the same script.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Arc<Mutex<Script>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, reply: Result<ApiResponse, ApiError>) -> &Self {
        if let Ok(mut script) = self.script.lock() {
            script.replies.push_back(reply);
        }
        self
    }

    pub fn push_json(&self, status: u16, value: Value) -> &Self {
        self.push(Ok(ApiResponse::json(status, &value)))
    }

    pub fn push_status(&self, status: u16) -> &Self {
        self.push(Ok(ApiResponse::empty(status)))
    }

    pub fn push_failure(&self, message: &str) -> &Self {
        self.push(Err(ApiError::Transport(message.to_string())))
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.script
            .lock()
            .map(|script| script.requests.clone())
            .unwrap_or_default()
    }

    pub fn request_count(&self) -> usize {
        self.script
            .lock()
            .map(|script| script.requests.len())
            .unwrap_or_default()
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut script = self
            .script
            .lock()
            .map_err(|_| ApiError::Transport("script lock poisoned".into()))?;
        script.requests.push(request.clone());
        script.replies.pop_front().unwrap_or_else(|| {
            Err(ApiError::Transport(format!(
                "no scripted reply for {} {}",
                request.method, request.url
            )))
        })
    }
}
