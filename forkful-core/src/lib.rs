pub mod auth;
pub mod config;
pub mod generator;
pub mod parse;
pub mod prefs;
pub mod recipe;
pub mod storage;

pub use auth::{AuthClient, AuthError, AuthEvent, Session, redirect_route};
pub use config::{Config, ConfigError};
pub use generator::{
    API_ERROR_FALLBACK, DEFAULT_WEBHOOK_URL, EMPTY_REQUEST_MESSAGE, FakeGenerator, GenerateError,
    GenerateRequest, RecipeGenerator, WebhookGenerator, submit_request,
};
pub use parse::{RecipeSections, parse_recipe};
pub use prefs::{
    CUISINES, FlavorProfile, InputChange, Inputs, PrefStore, PreferenceState, SkillLevel,
    TIME_OPTIONS,
};
pub use recipe::Recipe;
pub use storage::{STORAGE_KEY, StateStorage};
