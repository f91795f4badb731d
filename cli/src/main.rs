//! Configuration inspection tool - Application entry point
//!
//! Resolves a configuration profile the same way the web application does and
//! prints it.

mod args;
mod output;

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use args::{Cli, Commands};
use settings::{
    ConfigError, ConfigRegistry, ConfigResult, ProcessEnv, ProfileName, SettingValue,
};

fn main() {
    // Load environment variables before anything reads them
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        tracing::error!(code = e.code(), "Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Error raised by a command
#[derive(Error, Debug)]
enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

impl CommandError {
    fn code(&self) -> &'static str {
        match self {
            CommandError::Config(e) => e.code(),
            CommandError::Render(_) => "RENDER_ERROR",
        }
    }
}

fn run(command: Commands) -> Result<(), CommandError> {
    let registry = ConfigRegistry::global();
    tracing::debug!("Configuration loaded");

    match command {
        Commands::Show(args) => {
            let name = args.profile.resolve(&ProcessEnv)?;
            let out = output::render_profile(name, registry.get(name), args.format, args.reveal)?;
            print!("{}", out);
            if !out.ends_with('\n') {
                println!();
            }
        }
        Commands::Get(args) => {
            let value = lookup(registry, args.profile.resolve(&ProcessEnv)?, &args.key)?;
            println!("{}", value);
        }
        Commands::Profiles => print!("{}", output::render_profile_names()),
    }

    Ok(())
}

fn lookup(registry: &ConfigRegistry, name: ProfileName, key: &str) -> ConfigResult<SettingValue> {
    tracing::debug!(profile = %name, setting = key, "Looking up setting");
    registry.get(name).setting(key)
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
