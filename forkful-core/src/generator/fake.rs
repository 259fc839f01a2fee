//! Fake recipe generator for tests.
//!
//! Returns canned recipes or canned failures without network access, and
//! records every request it sees so tests can assert on request bodies.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{GenerateError, GenerateRequest, RecipeGenerator};
use crate::recipe::Recipe;

#[derive(Debug, Clone)]
enum FakeFailure {
    /// Mimics a non-success HTTP status.
    Status,
    /// Mimics a network-level failure with the given message.
    Transport(String),
}

/// A fake generator for testing the submission flow.
#[derive(Debug, Default)]
pub struct FakeGenerator {
    recipe: Option<Recipe>,
    failure: Option<FakeFailure>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl FakeGenerator {
    /// A generator that answers every request with an empty recipe.
    pub fn new() -> Self {
        Self::default()
    }

    /// A generator that answers every request with `recipe`.
    pub fn with_recipe(recipe: Recipe) -> Self {
        Self {
            recipe: Some(recipe),
            ..Self::default()
        }
    }

    /// A generator whose recipes carry only the given raw content.
    pub fn with_content(content: &str) -> Self {
        Self::with_recipe(Recipe {
            content: content.to_string(),
            ..Recipe::default()
        })
    }

    /// A generator that fails every request as a non-success status would.
    pub fn failing_with_status() -> Self {
        Self {
            failure: Some(FakeFailure::Status),
            ..Self::default()
        }
    }

    /// A generator that fails every request at the transport level.
    pub fn failing_with_transport(message: &str) -> Self {
        Self {
            failure: Some(FakeFailure::Transport(message.to_string())),
            ..Self::default()
        }
    }

    /// Requests seen so far, in order.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecipeGenerator for FakeGenerator {
    async fn generate(&self, request: &GenerateRequest) -> Result<Recipe, GenerateError> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(failure) = &self.failure {
            return Err(match failure {
                FakeFailure::Status => GenerateError::Failed,
                FakeFailure::Transport(message) => GenerateError::Transport(message.clone()),
            });
        }

        Ok(self.recipe.clone().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fake_returns_canned_recipe() {
        let generator = FakeGenerator::with_content("Intro:\nHi");
        let recipe = generator
            .generate(&GenerateRequest::quick("anything"))
            .await
            .unwrap();
        assert_eq!(recipe.content, "Intro:\nHi");
    }

    #[tokio::test]
    async fn test_fake_records_requests() {
        let generator = FakeGenerator::new();
        generator
            .generate(&GenerateRequest::quick("first"))
            .await
            .unwrap();
        generator
            .generate(&GenerateRequest::quick("second"))
            .await
            .unwrap();

        let requests = generator.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].recipe_request, "first");
        assert_eq!(requests[1].recipe_request, "second");
    }

    #[tokio::test]
    async fn test_fake_status_failure() {
        let generator = FakeGenerator::failing_with_status();
        let err = generator
            .generate(&GenerateRequest::quick("anything"))
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "Failed to generate recipe");
    }
}
