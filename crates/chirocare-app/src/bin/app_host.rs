//! Host stub that boots the headless `AppCore` and replays a navigation
//! script, for exercising routes from the command line:
//!
//! ```text
//! chirocare-host --start forgot_password reset:login
//! chirocare-host chiro_list chiro_profile/3 booking/301 back --json
//! ```

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use chirocare_app::{logging, AppConfig, AppCore};
use chirocare_nav::{NavAction, Route};
use clap::Parser;

#[derive(Parser)]
#[command(name = "chirocare-host")]
#[command(about = "Replay navigation steps against the headless ChiroCare app", long_about = None)]
struct Cli {
    /// Navigation steps: `<path>` pushes, `reset:<path>` clears history, `back` pops
    steps: Vec<Step>,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the start route
    #[arg(short, long)]
    start: Option<String>,

    /// Print the final state as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Debug)]
enum Step {
    Push(Route),
    Reset(Route),
    Back,
}

impl FromStr for Step {
    type Err = chirocare_nav::NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "back" {
            return Ok(Step::Back);
        }
        match s.strip_prefix("reset:") {
            Some(path) => Ok(Step::Reset(path.parse()?)),
            None => Ok(Step::Push(s.parse()?)),
        }
    }
}

impl From<Step> for NavAction {
    fn from(step: Step) -> Self {
        match step {
            Step::Push(route) => NavAction::push(route),
            Step::Reset(route) => NavAction::Reset(route),
            Step::Back => NavAction::Back,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => AppConfig::default(),
    };
    config.merge_with_env()?;
    if let Some(start) = cli.start {
        config.start_route = start;
    }
    if cli.verbose {
        config.log_filter = "debug".to_string();
    }
    logging::init(&config.log_filter);

    let mut app = AppCore::new(config)?;
    for step in cli.steps {
        app.dispatch(step.into())?;
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&app.snapshot())?);
    } else {
        for (depth, path) in app.snapshot().stack.iter().enumerate() {
            println!("{depth}: {path}");
        }
        println!("current: {} ({})", app.current_route(), app.screen().title());
    }
    Ok(())
}
