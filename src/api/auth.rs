use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::{ApiError, IntakeError, Result};
use crate::routes::Route;
use crate::session::SessionContext;
use crate::ui::UiContext;

use super::{endpoints, ApiClient};

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
}

/// Admin sign-in, sign-out and token check.
pub struct AuthService<'a> {
    client: &'a ApiClient,
    ui: &'a UiContext,
}

impl<'a> AuthService<'a> {
    pub fn new(client: &'a ApiClient, ui: &'a UiContext) -> Self {
        Self { client, ui }
    }

    /// Where the login page should send the visitor: straight to the
    /// dashboard when a token is already held.
    pub fn entry_route(session: &SessionContext) -> Route {
        if session.is_authenticated() {
            Route::Dashboard
        } else {
            Route::Login
        }
    }

    pub fn login(&self, email: &str, password: &str) -> Result<()> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(IntakeError::InvalidInput(
                "Email and password are required".into(),
            ));
        }

        let outcome = self
            .client
            .post(endpoints::LOGIN, &json!({ "email": email, "password": password }))
            .and_then(|value| {
                serde_json::from_value::<LoginResponse>(value)
                    .map_err(ApiError::from)
                    .and_then(|body| {
                        body.token
                            .filter(|token| !token.is_empty())
                            .ok_or_else(|| ApiError::Decode("login response has no token".into()))
                    })
            });

        match outcome {
            Ok(token) => {
                self.client.session().sign_in(token, email)?;
                tracing::info!("admin signed in");
                self.ui.notifier.success("Login successful!");
                self.ui.navigator.navigate(Route::Dashboard);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "login failed");
                self.ui
                    .notifier
                    .error("Login failed. Please check your credentials.");
                Err(err.into())
            }
        }
    }

    /// Best-effort server logout; the local session is cleared regardless.
    pub fn logout(&self) {
        if self.client.session().is_authenticated() {
            if let Err(err) = self.client.post(endpoints::LOGOUT, &json!({})) {
                tracing::warn!(error = %err, "logout request failed; clearing local session anyway");
            }
        }
        self.client.session().invalidate();
        self.ui.notifier.success("Logged out successfully");
        self.ui.navigator.navigate(Route::Login);
    }

    /// Calls the user endpoint to check that the stored token is still valid.
    pub fn check_token(&self) -> std::result::Result<Value, ApiError> {
        if !self.client.session().is_authenticated() {
            self.ui.notifier.error("No token found");
            return Err(ApiError::NotAuthenticated);
        }
        match self.client.get(endpoints::USER) {
            Ok(user) => {
                self.ui.notifier.success("Authentication valid");
                Ok(user)
            }
            Err(err) => {
                self.ui.notifier.error("Authentication failed");
                Err(err)
            }
        }
    }
}
