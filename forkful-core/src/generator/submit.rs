//! Submission orchestration.
//!
//! One network attempt per call, with a guaranteed-release loading flag:
//! `is_loading` is raised immediately before the request and unconditionally
//! lowered after the attempt settles, success or failure.

use super::{EMPTY_REQUEST_MESSAGE, GenerateRequest, RecipeGenerator};
use crate::prefs::PrefStore;

/// Submit the current preference snapshot through `generator`.
///
/// An empty free-text request is rejected before any network call and leaves
/// the loading flag untouched. On success the returned recipe is stored
/// verbatim; on failure the previous recipe is left in place and `error`
/// carries the failure's message. Returns whether a recipe was stored.
///
/// With `quick` set, only the free-text request is sent - the abbreviated
/// entry point's body.
pub async fn submit_request(
    store: &mut PrefStore,
    generator: &dyn RecipeGenerator,
    quick: bool,
) -> bool {
    if store.state().recipe_request.trim().is_empty() {
        store.set_error(Some(EMPTY_REQUEST_MESSAGE.to_string()));
        return false;
    }

    let request = if quick {
        GenerateRequest::quick(&store.state().recipe_request)
    } else {
        GenerateRequest::full(&store.state().recipe_request, &store.state().inputs)
    };

    store.set_is_loading(true);
    store.set_error(None);

    let stored = match generator.generate(&request).await {
        Ok(recipe) => {
            store.set_generated_recipe(Some(recipe));
            true
        }
        Err(err) => {
            tracing::debug!(error = %err, "generation failed");
            store.set_error(Some(err.user_message()));
            false
        }
    };

    store.set_is_loading(false);
    stored
}
