pub mod auth;
pub mod client;
pub mod endpoints;
pub mod multipart;
pub mod transport;

pub use auth::AuthService;
pub use client::ApiClient;
pub use multipart::{FormPart, MultipartForm, PartValue};
pub use transport::{
    ApiRequest, ApiResponse, Method, ReqwestTransport, RequestBody, ScriptedTransport, Transport,
};
