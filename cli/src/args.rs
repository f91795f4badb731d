//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand, ValueEnum};
use settings::{ConfigResult, EnvSource, ProfileName};

/// Inspect the configuration profiles handed to the web application
#[derive(Parser, Debug)]
#[command(name = "app-config")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every setting of a profile
    Show(ShowArgs),

    /// Print the raw value of one setting
    Get(GetArgs),

    /// List available profile names
    Profiles,
}

/// Profile selection shared by commands
#[derive(Parser, Debug)]
pub struct ProfileArg {
    /// Profile to resolve (base or testing) [default: $APP_PROFILE, then base]
    #[arg(short, long)]
    pub profile: Option<String>,
}

impl ProfileArg {
    /// The selected profile, falling back to `APP_PROFILE` in `env`.
    ///
    /// Unknown names are reported as `UnknownProfile`, not as usage errors.
    pub fn resolve(&self, env: &dyn EnvSource) -> ConfigResult<ProfileName> {
        match &self.profile {
            Some(name) => name.parse(),
            None => ProfileName::from_env(env),
        }
    }
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub profile: ProfileArg,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print database URI and secret key instead of masking them
    #[arg(long)]
    pub reveal: bool,
}

/// Arguments for the get command
#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Setting name (e.g. SQLALCHEMY_DATABASE_URI)
    pub key: String,

    #[command(flatten)]
    pub profile: ProfileArg,
}

/// Output formats for the show command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `NAME=value` line per setting
    Text,
    /// A single JSON object
    Json,
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use settings::{ConfigError, ENV_APP_PROFILE};

    use super::*;

    fn no_env() -> HashMap<String, String> {
        HashMap::new()
    }

    #[test]
    fn test_show_defaults() {
        let cli = Cli::try_parse_from(["app-config", "show"]).unwrap();
        match cli.command {
            Commands::Show(args) => {
                assert_eq!(args.profile.profile, None);
                assert_eq!(args.profile.resolve(&no_env()), Ok(ProfileName::Base));
                assert_eq!(args.format, OutputFormat::Text);
                assert!(!args.reveal);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_get_with_profile() {
        let cli = Cli::try_parse_from(["app-config", "-v", "get", "SECRET_KEY", "-p", "Testing"])
            .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Get(args) => {
                assert_eq!(args.key, "SECRET_KEY");
                assert_eq!(args.profile.resolve(&no_env()), Ok(ProfileName::Testing));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_profile_is_config_error() {
        // Parsing succeeds so the failure goes through the command error path
        let cli = Cli::try_parse_from(["app-config", "show", "--profile", "production"]).unwrap();
        match cli.command {
            Commands::Show(args) => assert_eq!(
                args.profile.resolve(&no_env()),
                Err(ConfigError::UnknownProfile("production".to_string()))
            ),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_profile_from_environment() {
        let arg = ProfileArg { profile: None };

        let mut env = no_env();
        env.insert(ENV_APP_PROFILE.to_string(), "testing".to_string());
        assert_eq!(arg.resolve(&env), Ok(ProfileName::Testing));

        env.insert(ENV_APP_PROFILE.to_string(), "prod".to_string());
        assert_eq!(
            arg.resolve(&env),
            Err(ConfigError::UnknownProfile("prod".to_string()))
        );

        // Flag wins over the environment
        let arg = ProfileArg {
            profile: Some("base".to_string()),
        };
        assert_eq!(arg.resolve(&env), Ok(ProfileName::Base));
    }

    #[test]
    fn test_json_format() {
        let cli = Cli::try_parse_from([
            "app-config", "show", "-p", "testing", "--format", "json", "--reveal",
        ])
        .unwrap();
        match cli.command {
            Commands::Show(args) => {
                assert_eq!(args.format, OutputFormat::Json);
                assert!(args.reveal);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
