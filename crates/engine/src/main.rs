//! Charsheet Engine - command-line entry point.
//!
//! With no arguments, lists the stored characters. With a name, prints a
//! summary of that character's sheet.

use charsheet_domain::{Ability, TextField};
use charsheet_engine::config::load_dotenv_from_repo_root;
use charsheet_engine::{App, AppConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "charsheet_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    tracing::info!(db = %config.db_path, user = %config.username, "Starting Charsheet Engine");

    let app = App::connect(config).await?;
    let sheets = &app.use_cases.character_sheet;

    match std::env::args().nth(1) {
        Some(name) => {
            let character = sheets.load(&name).await?;
            println!(
                "{} - level {} {} {} (proficiency {:+})",
                character.name(),
                character.level(),
                character.text(TextField::Race),
                character.text(TextField::Class),
                character.proficiency_bonus(),
            );
            for ability in Ability::ALL {
                println!(
                    "  {} {:>3} ({})",
                    ability.abbreviation(),
                    character.score(ability),
                    character.formatted_modifier(ability),
                );
            }
        }
        None => {
            let names = sheets.list_names().await?;
            if names.is_empty() {
                println!("No saved characters in {}", app.config.db_path);
            }
            for name in names {
                println!("{name}");
            }
        }
    }

    Ok(())
}
