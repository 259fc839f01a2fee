use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use forkful_core::{
    AuthEvent, CUISINES, Config, FlavorProfile, InputChange, PrefStore, Recipe, Session,
    SkillLevel, StateStorage, TIME_OPTIONS, WebhookGenerator, parse_recipe, redirect_route,
    submit_request,
};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "forkful")]
#[command(about = "Recipe generation client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Set the free-text recipe request (wizard step 1)
    Request {
        /// What you would like to cook, in your own words
        text: String,
    },
    /// Choose a cuisine (wizard step 2)
    Prefs {
        /// One of: Desi, Western, Asian, Fusion, Mediterranean
        #[arg(long)]
        cuisine: String,
    },
    /// Tune flavor sliders and serving size (wizard step 3)
    Details {
        /// Spice level, 1 (mild) to 5 (spicy)
        #[arg(long)]
        spicy: Option<i64>,
        /// Sweetness, 1 (savory) to 5 (sweet)
        #[arg(long)]
        sweet: Option<i64>,
        /// Healthiness, 1 (indulgent) to 5 (healthy)
        #[arg(long)]
        healthy: Option<i64>,
        /// Bump the serving size up (repeatable)
        #[arg(long, action = clap::ArgAction::Count)]
        more: u8,
        /// Bump the serving size down (repeatable)
        #[arg(long, action = clap::ArgAction::Count)]
        fewer: u8,
    },
    /// Pick skill level and time budget (wizard step 4)
    Finalize {
        /// One of: beginner, intermediate, pro
        #[arg(long)]
        skill: Option<String>,
        /// Cooking time in minutes: 15, 30, 45, or 60
        #[arg(long)]
        time: Option<String>,
    },
    /// Submit the accumulated preferences for generation
    Generate {
        /// Send only the free-text request
        #[arg(long)]
        quick: bool,
    },
    /// Render the most recently generated recipe
    Show,
    /// Reset preferences and the generated recipe
    Reset,
    /// Email a magic sign-in link
    Login { email: String },
    /// Sign out of the current session
    Logout {
        /// Session token from the magic-link redirect
        #[arg(long, env = "FORKFUL_SESSION_TOKEN")]
        token: String,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env();
    let storage = StateStorage::new(&config.data_dir);
    let mut store = PrefStore::from_state(storage.load());

    match cli.command {
        Commands::Request { text } => {
            store.set_recipe_request(text);
            storage.save(store.state())?;
            println!("Request saved. Next: forkful prefs --cuisine <name>");
        }
        Commands::Prefs { cuisine } => {
            if !CUISINES.contains(&cuisine.as_str()) {
                bail!(
                    "unknown cuisine {:?} - choose one of: {}",
                    cuisine,
                    CUISINES.join(", ")
                );
            }
            store.handle_input_change(InputChange::Cuisine(cuisine));
            storage.save(store.state())?;
            println!("Cuisine saved. Next: forkful details");
        }
        Commands::Details {
            spicy,
            sweet,
            healthy,
            more,
            fewer,
        } => {
            // Sliders replace the whole profile; unset flags keep the
            // current position.
            let current = store.state().inputs.flavor_profile;
            store.handle_input_change(InputChange::FlavorProfile(FlavorProfile {
                spicy: spicy.unwrap_or(current.spicy).clamp(1, 5),
                sweet: sweet.unwrap_or(current.sweet).clamp(1, 5),
                healthy: healthy.unwrap_or(current.healthy).clamp(1, 5),
            }));
            for _ in 0..more {
                store.increment_serving_size();
            }
            for _ in 0..fewer {
                store.decrement_serving_size();
            }
            storage.save(store.state())?;
            let inputs = &store.state().inputs;
            println!(
                "Flavor: spicy {}/5, sweet {}/5, healthy {}/5 - serves {}",
                inputs.flavor_profile.spicy,
                inputs.flavor_profile.sweet,
                inputs.flavor_profile.healthy,
                inputs.serving_size
            );
        }
        Commands::Finalize { skill, time } => {
            if let Some(skill) = skill {
                let Some(level) = SkillLevel::from_str(&skill) else {
                    bail!(
                        "unknown skill level {:?} - choose one of: beginner, intermediate, pro",
                        skill
                    );
                };
                store.handle_input_change(InputChange::SkillLevel(level));
            }
            if let Some(time) = time {
                if !TIME_OPTIONS.contains(&time.as_str()) {
                    bail!(
                        "unknown time budget {:?} - choose one of: {}",
                        time,
                        TIME_OPTIONS.join(", ")
                    );
                }
                store.handle_input_change(InputChange::TimeAvailable(time));
            }
            storage.save(store.state())?;
            println!("All set. Next: forkful generate");
        }
        Commands::Generate { quick } => {
            tracing::debug!(url = %config.webhook_url, "using generation endpoint");
            let generator = WebhookGenerator::new(&config.webhook_url);
            let stored = submit_request(&mut store, &generator, quick).await;
            storage.save(store.state())?;
            if stored {
                let recipe = store.state().generated_recipe.as_ref().unwrap();
                render_recipe(recipe);
            } else {
                let message = store
                    .state()
                    .error
                    .clone()
                    .unwrap_or_else(|| "Failed to generate recipe".to_string());
                bail!(message);
            }
        }
        Commands::Show => match &store.state().generated_recipe {
            Some(recipe) => render_recipe(recipe),
            None => println!("No recipe yet - run `forkful generate` first."),
        },
        Commands::Reset => {
            store.clear_all();
            storage.save(store.state())?;
            println!("Preferences and recipe cleared.");
        }
        Commands::Login { email } => {
            let auth = config.auth_client()?;
            auth.sign_in_with_magic_link(&email).await?;
            store.set_user_email(&email);
            storage.save(store.state())?;
            println!("Magic link sent to your email!");
        }
        Commands::Logout { token } => {
            let auth = config.auth_client()?;
            let session = Session {
                access_token: token,
                email: store.state().user_email.clone(),
            };
            auth.sign_out(&session).await?;
            println!("Logged out successfully!");
            println!("-> {}", redirect_route(&AuthEvent::SignedOut));
        }
    }

    Ok(())
}

/// Render the recipe the way the results view does: title, meta badges, then
/// the sections parsed from the raw text at render time.
fn render_recipe(recipe: &Recipe) {
    println!("{}", recipe.display_title());

    let mut badges = Vec::new();
    if let Some(skill) = &recipe.skill {
        badges.push(skill.clone());
    }
    if let Some(serving) = &recipe.serving {
        badges.push(format!("Serves: {serving}"));
    }
    if let Some(time) = &recipe.time {
        badges.push(format!("Time: {time} mins"));
    }
    if !badges.is_empty() {
        println!("{}", badges.join(" | "));
    }

    let sections = parse_recipe(&recipe.content);

    if let Some(intro) = &sections.intro {
        println!("\nAbout This Creation\n{intro}");
    }
    if let Some(ingredients) = &sections.ingredient_list {
        println!("\nIngredients ({} items)", ingredients.len());
        for item in ingredients {
            println!("  - {item}");
        }
    }
    if let Some(steps) = &sections.instruction_steps {
        println!("\nInstructions");
        for (i, step) in steps.iter().enumerate() {
            println!("  {}. {step}", i + 1);
        }
    }
    if let Some(message) = &sections.final_message {
        println!("\n{message}");
    }
}
