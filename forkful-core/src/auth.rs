//! Hosted identity provider client.
//!
//! Authentication is fully delegated: the provider emails a single-use link,
//! and clicking it redirects back to the signed-in route carrying a session.
//! The core depends on exactly two operations - magic-link sign-in and
//! sign-out - plus the reaction to session-change events.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Route the application navigates to when a session appears.
pub const SIGNED_IN_ROUTE: &str = "/dashboard";

/// Route the application navigates to when the session ends.
pub const SIGNED_OUT_ROUTE: &str = "/";

#[derive(Debug, Error)]
pub enum AuthError {
    /// Network-level failure before the provider answered.
    #[error("auth request failed: {0}")]
    RequestFailed(String),

    /// The provider answered with an error; its own message is surfaced.
    #[error("{message}")]
    Provider { status: u16, message: String },
}

/// An authenticated session issued by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub email: String,
}

/// Session-change notification.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthEvent {
    SignedIn(Session),
    SignedOut,
}

/// Where the application navigates in reaction to a session change:
/// signed-in lands on the dashboard entry, signed-out on the landing page.
pub fn redirect_route(event: &AuthEvent) -> &'static str {
    match event {
        AuthEvent::SignedIn(_) => SIGNED_IN_ROUTE,
        AuthEvent::SignedOut => SIGNED_OUT_ROUTE,
    }
}

/// Client for the identity provider's passwordless endpoints.
#[derive(Debug, Clone)]
pub struct AuthClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct MagicLinkRequest<'a> {
    email: &'a str,
    redirect_to: &'a str,
}

/// Error body shape the provider returns; field names vary by endpoint.
#[derive(Debug, Deserialize)]
struct ProviderError {
    #[serde(alias = "msg", alias = "error_description")]
    message: String,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Request a single-use emailed sign-in link. On click the provider
    /// redirects to [`SIGNED_IN_ROUTE`] carrying a session.
    pub async fn sign_in_with_magic_link(&self, email: &str) -> Result<(), AuthError> {
        tracing::debug!(email, "requesting magic link");
        let response = self
            .client
            .post(format!("{}/otp", self.base_url))
            .header("apikey", &self.api_key)
            .json(&MagicLinkRequest {
                email,
                redirect_to: SIGNED_IN_ROUTE,
            })
            .send()
            .await
            .map_err(|e| AuthError::RequestFailed(e.to_string()))?;

        Self::check(response).await
    }

    /// Invalidate the given session with the provider.
    pub async fn sign_out(&self, session: &Session) -> Result<(), AuthError> {
        tracing::debug!(email = %session.email, "signing out");
        let response = self
            .client
            .post(format!("{}/logout", self.base_url))
            .header("apikey", &self.api_key)
            .bearer_auth(&session.access_token)
            .send()
            .await
            .map_err(|e| AuthError::RequestFailed(e.to_string()))?;

        Self::check(response).await
    }

    async fn check(response: reqwest::Response) -> Result<(), AuthError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // Surface the provider's own message when it sent one.
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ProviderError>(&body)
            .map(|e| e.message)
            .unwrap_or(body);

        Err(AuthError::Provider {
            status: status.as_u16(),
            message,
        })
    }
}
