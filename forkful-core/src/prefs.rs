//! Preference store for the recipe wizard.
//!
//! One store instance is created by the application shell at startup and
//! lives for the whole process. Mutations are total and deliberately
//! permissive: the store performs no range validation, so UI controls are
//! responsible for clamping values before they reach it. The store's only
//! invariant responsibility is its defaults.

use serde::{Deserialize, Serialize};

use crate::recipe::Recipe;

/// Cuisine labels offered by the preferences step. The store accepts any
/// string; this list is only the menu.
pub const CUISINES: &[&str] = &["Desi", "Western", "Asian", "Fusion", "Mediterranean"];

/// Cooking-time options in minutes, as the webhook expects them.
pub const TIME_OPTIONS: &[&str] = &["15", "30", "45", "60"];

/// Serving-size bounds enforced by the stepper controls (not by the store).
pub const MIN_SERVING_SIZE: i64 = 1;
pub const MAX_SERVING_SIZE: i64 = 9;

/// Flavor slider positions, each on a 1-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorProfile {
    pub spicy: i64,
    pub sweet: i64,
    pub healthy: i64,
}

impl Default for FlavorProfile {
    fn default() -> Self {
        Self {
            spicy: 3,
            sweet: 3,
            healthy: 3,
        }
    }
}

/// Chef skill level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Pro,
}

impl SkillLevel {
    /// All levels, in wizard display order.
    pub const ALL: &'static [SkillLevel] = &[
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Pro,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Pro => "pro",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "beginner" => Some(SkillLevel::Beginner),
            "intermediate" => Some(SkillLevel::Intermediate),
            "pro" => Some(SkillLevel::Pro),
            _ => None,
        }
    }
}

/// Structured preferences collected across the wizard steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inputs {
    /// Chosen cuisine label; empty when unset.
    pub cuisine: String,
    pub flavor_profile: FlavorProfile,
    pub serving_size: i64,
    pub skill_level: SkillLevel,
    /// Time budget in minutes, one of [`TIME_OPTIONS`].
    pub time_available: String,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            cuisine: String::new(),
            flavor_profile: FlavorProfile::default(),
            serving_size: 2,
            skill_level: SkillLevel::default(),
            time_available: "30".to_string(),
        }
    }
}

/// A single field change, the typed equivalent of writing `inputs[field]`.
///
/// A flavor-profile change replaces the whole profile; merging individual
/// slider values into the current profile is the caller's responsibility.
#[derive(Debug, Clone, PartialEq)]
pub enum InputChange {
    Cuisine(String),
    FlavorProfile(FlavorProfile),
    ServingSize(i64),
    SkillLevel(SkillLevel),
    TimeAvailable(String),
}

/// The full client-side state: wizard inputs plus the last generated recipe
/// and transient request status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceState {
    #[serde(default)]
    pub user_email: String,
    /// Free-text recipe description; empty string means unset.
    #[serde(default)]
    pub recipe_request: String,
    #[serde(default)]
    pub inputs: Inputs,
    #[serde(default)]
    pub generated_recipe: Option<Recipe>,
    /// True while a submission is in flight. Never persisted.
    #[serde(skip)]
    pub is_loading: bool,
    /// Message from the last failed attempt. Never persisted.
    #[serde(skip)]
    pub error: Option<String>,
}

/// The preference store: read access to the state plus total mutations.
#[derive(Debug, Default)]
pub struct PrefStore {
    state: PreferenceState,
}

impl PrefStore {
    /// Create a store holding the documented defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from previously persisted state.
    pub fn from_state(state: PreferenceState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &PreferenceState {
        &self.state
    }

    pub fn into_state(self) -> PreferenceState {
        self.state
    }

    pub fn set_user_email(&mut self, email: impl Into<String>) {
        self.state.user_email = email.into();
    }

    /// Replace the free-text request verbatim: no trimming, no validation.
    pub fn set_recipe_request(&mut self, request: impl Into<String>) {
        self.state.recipe_request = request.into();
    }

    /// Merge one field change into the inputs. Accepts any value, including
    /// values outside the documented ranges.
    pub fn handle_input_change(&mut self, change: InputChange) {
        match change {
            InputChange::Cuisine(cuisine) => self.state.inputs.cuisine = cuisine,
            InputChange::FlavorProfile(profile) => self.state.inputs.flavor_profile = profile,
            InputChange::ServingSize(size) => self.state.inputs.serving_size = size,
            InputChange::SkillLevel(level) => self.state.inputs.skill_level = level,
            InputChange::TimeAvailable(time) => self.state.inputs.time_available = time,
        }
    }

    pub fn set_generated_recipe(&mut self, recipe: Option<Recipe>) {
        self.state.generated_recipe = recipe;
    }

    pub fn set_is_loading(&mut self, loading: bool) {
        self.state.is_loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.state.error = error;
    }

    /// Reset the request, inputs, and generated recipe to their defaults.
    /// The signed-in email survives a reset.
    pub fn clear_all(&mut self) {
        self.state.recipe_request = String::new();
        self.state.inputs = Inputs::default();
        self.state.generated_recipe = None;
    }

    /// Serving-size stepper: no-op at the lower bound.
    pub fn decrement_serving_size(&mut self) {
        if self.state.inputs.serving_size > MIN_SERVING_SIZE {
            self.state.inputs.serving_size -= 1;
        }
    }

    /// Serving-size stepper: no-op at the displayed cap.
    pub fn increment_serving_size(&mut self) {
        if self.state.inputs.serving_size < MAX_SERVING_SIZE {
            self.state.inputs.serving_size += 1;
        }
    }
}
