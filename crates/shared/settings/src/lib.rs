//! Configuration profiles for the web application.
//!
//! This crate provides:
//! - The `base` and `testing` configuration profiles
//! - A registry that resolves both from the environment
//! - Shared setting names and defaults
//!
//! Profiles only carry values. Connecting to the database, signing sessions
//! and toggling debug pages is left to the consuming framework.

pub mod constants;
pub mod env;
pub mod error;
pub mod profile;
pub mod registry;

pub use constants::*;
pub use env::{EnvSource, ProcessEnv};
pub use error::{ConfigError, ConfigResult};
pub use profile::{ConfigProfile, ProfileOverrides, SettingValue};
pub use registry::{resolve, resolve_base, resolve_testing, ConfigRegistry, ProfileName};
