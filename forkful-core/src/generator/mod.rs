//! Recipe generation over the external webhook.
//!
//! The webhook is an opaque POST endpoint: preferences in, free text out.
//! The generator is trait-based so the submission flow can be exercised in
//! tests against a deterministic fake instead of the network.

mod fake;
mod submit;
mod webhook;

pub use fake::FakeGenerator;
pub use submit::submit_request;
pub use webhook::{DEFAULT_WEBHOOK_URL, WebhookGenerator};

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::prefs::{FlavorProfile, Inputs, SkillLevel};
use crate::recipe::Recipe;

/// Message shown when submission is attempted with an empty request.
pub const EMPTY_REQUEST_MESSAGE: &str = "Please enter a recipe request";

/// Fallback shown when a failure carries no message of its own.
pub const API_ERROR_FALLBACK: &str = "API error - try again later";

#[derive(Debug, Error)]
pub enum GenerateError {
    /// The webhook answered with a non-success status. Individual status
    /// codes are not inspected or surfaced.
    #[error("Failed to generate recipe")]
    Failed,

    /// Network-level failure before any status was available.
    #[error("{0}")]
    Transport(String),

    /// The response body could not be read or decoded as JSON.
    #[error("{0}")]
    InvalidResponse(String),
}

impl GenerateError {
    /// The message surfaced to the user: the failure's own message, or the
    /// generic fallback when there is none.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            API_ERROR_FALLBACK.to_string()
        } else {
            message
        }
    }
}

/// Body of a generation request, serialized camelCase for the webhook. The
/// abbreviated entry point sends only `recipeRequest`; optional fields are
/// omitted from the JSON entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub recipe_request: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavor_profile: Option<FlavorProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_level: Option<SkillLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_available: Option<String>,
}

impl GenerateRequest {
    /// Full preference snapshot, as the finalize step submits it.
    pub fn full(recipe_request: &str, inputs: &Inputs) -> Self {
        Self {
            recipe_request: recipe_request.to_string(),
            cuisine: Some(inputs.cuisine.clone()),
            flavor_profile: Some(inputs.flavor_profile),
            serving_size: Some(inputs.serving_size),
            skill_level: Some(inputs.skill_level),
            time_available: Some(inputs.time_available.clone()),
        }
    }

    /// Abbreviated body carrying only the free-text request.
    pub fn quick(recipe_request: &str) -> Self {
        Self {
            recipe_request: recipe_request.to_string(),
            cuisine: None,
            flavor_profile: None,
            serving_size: None,
            skill_level: None,
            time_available: None,
        }
    }
}

/// Trait for recipe generators.
///
/// Implementations issue exactly one generation attempt per call: no retry,
/// no cancellation, no timeout beyond what the transport provides.
#[async_trait]
pub trait RecipeGenerator: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<Recipe, GenerateError>;
}
