//! Charsheet Player - interactive text front end.
//!
//! Reads commands from stdin and draws the current screen after each one.
//! `help` lists the commands.

use std::io::{self, BufRead, Write};

use charsheet_engine::config::load_dotenv_from_repo_root;
use charsheet_engine::{App, AppConfig};
use charsheet_player::screens::{CHARACTER_SHEET_TOOL, ROSTER_TOOL};
use charsheet_player::{CharacterSheetScreen, RosterScreen, ScreenRouter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
Commands:
  show <screen>        switch screen (sheet, roster)
  view                 redraw the current screen
  set <field> <value>  edit a field (name, race, level, xp, ac, str, dex.sleight of hand, ...)
  save | load <name> | new | list | races
  pref <key> <value>   store a preference for the current screen
  refresh              reload the roster
  quit";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "charsheet_player=info,charsheet_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let app = App::connect(AppConfig::from_env()).await?;

    let mut router = ScreenRouter::new();
    router.register(Box::new(CharacterSheetScreen::for_app(&app)))?;
    router.register(Box::new(RosterScreen::for_app(&app)))?;
    router.show(CHARACTER_SHEET_TOOL).await?;

    println!("{HELP}");
    if let Some(view) = router.render() {
        println!("{view}");
    }

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        let (command, argument) = line.split_once(' ').unwrap_or((line, ""));

        let result = match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                println!("{HELP}");
                continue;
            }
            "view" => Ok(String::new()),
            "show" => {
                let screen = match argument.trim() {
                    "sheet" => CHARACTER_SHEET_TOOL,
                    "roster" => ROSTER_TOOL,
                    other => other,
                };
                router.show(screen).await.map(|()| String::new())
            }
            _ => match router.current_mut() {
                Some(screen) => screen.handle_command(command, argument).await,
                None => continue,
            },
        };

        match result {
            Ok(message) => {
                if !message.is_empty() {
                    println!("{message}");
                }
                if let Some(view) = router.render() {
                    println!("{view}");
                }
            }
            Err(e) => println!("error: {e}"),
        }
    }

    Ok(())
}
