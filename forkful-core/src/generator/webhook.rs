//! Webhook-backed recipe generator.

use async_trait::async_trait;
use serde_json::Value;

use super::{GenerateError, GenerateRequest, RecipeGenerator};
use crate::recipe::Recipe;

/// The fixed production generation endpoint.
pub const DEFAULT_WEBHOOK_URL: &str =
    "https://primary-production-03db.up.railway.app/webhook/rec";

/// Recipe generator backed by the external generation webhook.
#[derive(Debug, Clone)]
pub struct WebhookGenerator {
    url: String,
    client: reqwest::Client,
}

impl WebhookGenerator {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for WebhookGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_WEBHOOK_URL)
    }
}

#[async_trait]
impl RecipeGenerator for WebhookGenerator {
    async fn generate(&self, request: &GenerateRequest) -> Result<Recipe, GenerateError> {
        tracing::debug!(url = %self.url, "submitting generation request");

        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| GenerateError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = %status, "webhook returned non-success status");
            return Err(GenerateError::Failed);
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| GenerateError::InvalidResponse(e.to_string()))?;

        // No schema validation: a missing or malformed `recipe` field becomes
        // an empty recipe, which parses to empty sections downstream.
        let recipe = body
            .get("recipe")
            .map(Recipe::from_value)
            .unwrap_or_default();

        tracing::debug!(content_len = recipe.content.len(), "recipe generated");
        Ok(recipe)
    }
}
