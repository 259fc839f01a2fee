//! End-to-end tests for the submission flow: store transitions, request
//! bodies, error surfacing, and the persisted snapshot.

use forkful_core::{
    EMPTY_REQUEST_MESSAGE, FakeGenerator, InputChange, PrefStore, Recipe, SkillLevel, StateStorage,
    parse_recipe, submit_request,
};

const FULL_RECIPE: &str = "Intro:\nHello\nUser-Centric Context:\nIngredients:\n- egg\n- milk\nInstructions:\n1. Crack egg\n2. Add milk\nFinal Message:\nEnjoy!";

fn store_with_request(request: &str) -> PrefStore {
    let mut store = PrefStore::new();
    store.set_recipe_request(request);
    store
}

#[tokio::test]
async fn successful_submission_stores_recipe_and_releases_loading() {
    let mut store = store_with_request("breakfast for two");
    let generator = FakeGenerator::with_content(FULL_RECIPE);

    let stored = submit_request(&mut store, &generator, false).await;

    assert!(stored);
    assert!(!store.state().is_loading);
    assert!(store.state().error.is_none());

    let recipe = store.state().generated_recipe.as_ref().unwrap();
    assert_eq!(recipe.content, FULL_RECIPE);

    // The results view parses on render, straight from the stored text.
    let sections = parse_recipe(&recipe.content);
    assert_eq!(sections.intro.as_deref(), Some("Hello"));
    assert_eq!(
        sections.ingredient_list,
        Some(vec!["egg".to_string(), "milk".to_string()])
    );
    assert_eq!(
        sections.instruction_steps,
        Some(vec!["Crack egg".to_string(), "Add milk".to_string()])
    );
    assert_eq!(sections.final_message.as_deref(), Some("Enjoy!"));
}

#[tokio::test]
async fn full_submission_sends_the_whole_snapshot() {
    let mut store = store_with_request("midweek dinner");
    store.handle_input_change(InputChange::Cuisine("Mediterranean".to_string()));
    store.handle_input_change(InputChange::ServingSize(4));
    store.handle_input_change(InputChange::SkillLevel(SkillLevel::Intermediate));
    store.handle_input_change(InputChange::TimeAvailable("45".to_string()));

    let generator = FakeGenerator::new();
    submit_request(&mut store, &generator, false).await;

    let requests = generator.requests();
    assert_eq!(requests.len(), 1);
    let body = serde_json::to_value(&requests[0]).unwrap();
    assert_eq!(body["recipeRequest"], "midweek dinner");
    assert_eq!(body["cuisine"], "Mediterranean");
    assert_eq!(body["servingSize"], 4);
    assert_eq!(body["skillLevel"], "intermediate");
    assert_eq!(body["timeAvailable"], "45");
    assert_eq!(body["flavorProfile"]["healthy"], 3);
}

#[tokio::test]
async fn quick_submission_sends_only_the_request_text() {
    let mut store = store_with_request("surprise me");
    let generator = FakeGenerator::new();

    submit_request(&mut store, &generator, true).await;

    let requests = generator.requests();
    assert_eq!(requests.len(), 1);
    let body = serde_json::to_value(&requests[0]).unwrap();
    assert_eq!(body["recipeRequest"], "surprise me");
    assert_eq!(body.as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn failed_submission_keeps_previous_recipe() {
    let mut store = store_with_request("second attempt");
    let previous = Recipe {
        content: "Intro:\nThe keeper".to_string(),
        ..Recipe::default()
    };
    store.set_generated_recipe(Some(previous.clone()));

    let generator = FakeGenerator::failing_with_status();
    let stored = submit_request(&mut store, &generator, false).await;

    assert!(!stored);
    assert_eq!(store.state().generated_recipe, Some(previous));
    assert_eq!(
        store.state().error.as_deref(),
        Some("Failed to generate recipe")
    );
    assert!(!store.state().is_loading);
}

#[tokio::test]
async fn transport_failure_surfaces_its_own_message() {
    let mut store = store_with_request("flaky network");
    let generator = FakeGenerator::failing_with_transport("connection reset by peer");

    submit_request(&mut store, &generator, false).await;

    assert_eq!(
        store.state().error.as_deref(),
        Some("connection reset by peer")
    );
    assert!(!store.state().is_loading);
}

#[tokio::test]
async fn empty_request_is_rejected_before_any_network_call() {
    let mut store = store_with_request("   ");
    let generator = FakeGenerator::with_content(FULL_RECIPE);

    let stored = submit_request(&mut store, &generator, false).await;

    assert!(!stored);
    assert!(generator.requests().is_empty());
    assert_eq!(store.state().error.as_deref(), Some(EMPTY_REQUEST_MESSAGE));
    assert!(!store.state().is_loading);
    assert!(store.state().generated_recipe.is_none());
}

#[tokio::test]
async fn next_submission_clears_a_previous_error() {
    let mut store = store_with_request("take two");

    let failing = FakeGenerator::failing_with_status();
    submit_request(&mut store, &failing, false).await;
    assert!(store.state().error.is_some());

    let working = FakeGenerator::with_content(FULL_RECIPE);
    submit_request(&mut store, &working, false).await;
    assert!(store.state().error.is_none());
    assert!(store.state().generated_recipe.is_some());
}

#[tokio::test]
async fn generated_recipe_survives_a_reload() {
    let dir = tempfile::tempdir().unwrap();
    let storage = StateStorage::new(dir.path());

    let mut store = PrefStore::from_state(storage.load());
    store.set_recipe_request("a keeper");
    let generator = FakeGenerator::with_content(FULL_RECIPE);
    submit_request(&mut store, &generator, false).await;
    storage.save(store.state()).unwrap();

    // A new store instance, as after a reload.
    let reloaded = PrefStore::from_state(storage.load());
    assert_eq!(reloaded.state().recipe_request, "a keeper");
    let recipe = reloaded.state().generated_recipe.as_ref().unwrap();
    assert_eq!(recipe.content, FULL_RECIPE);
}
