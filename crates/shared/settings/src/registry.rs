//! Configuration registry.
//!
//! Resolves the two named profiles from the environment. The testing profile
//! is derived from the base profile by applying explicit overrides.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::constants::{
    DEFAULT_DATABASE_URL, ENV_APP_PROFILE, ENV_DATABASE_URL, TESTING_SECRET_KEY,
};
use crate::env::{EnvSource, ProcessEnv};
use crate::error::{ConfigError, ConfigResult};
use crate::profile::{ConfigProfile, ProfileOverrides};

/// Names of the available profiles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileName {
    #[default]
    Base,
    Testing,
}

impl ProfileName {
    pub const ALL: [ProfileName; 2] = [ProfileName::Base, ProfileName::Testing];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileName::Base => "base",
            ProfileName::Testing => "testing",
        }
    }

    /// Profile selected by `APP_PROFILE`, defaulting to `base` when unset.
    pub fn from_env(env: &dyn EnvSource) -> ConfigResult<Self> {
        match env.var(ENV_APP_PROFILE) {
            Some(name) => name.parse(),
            None => Ok(ProfileName::Base),
        }
    }
}

impl fmt::Display for ProfileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ProfileName::ALL
            .into_iter()
            .find(|profile| profile.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConfigError::unknown_profile(name))
    }
}

/// `DATABASE_URL` verbatim, or the shared default when it is unset.
fn database_uri(env: &dyn EnvSource) -> String {
    env.var(ENV_DATABASE_URL).unwrap_or_else(|| {
        tracing::debug!("{} not set, using default database URI", ENV_DATABASE_URL);
        DEFAULT_DATABASE_URL.to_string()
    })
}

/// Resolve the base profile.
pub fn resolve_base(env: &dyn EnvSource) -> ConfigProfile {
    ConfigProfile::new(false, false, database_uri(env))
}

/// Resolve the testing profile: base with debug on, the database URI read
/// again, and a fixed secret key.
pub fn resolve_testing(env: &dyn EnvSource) -> ConfigProfile {
    resolve_base(env).with_overrides(
        ProfileOverrides::default()
            .debug(true)
            .database_uri(database_uri(env))
            .secret_key(TESTING_SECRET_KEY),
    )
}

/// Resolve a profile by name.
pub fn resolve(name: ProfileName, env: &dyn EnvSource) -> ConfigProfile {
    match name {
        ProfileName::Base => resolve_base(env),
        ProfileName::Testing => resolve_testing(env),
    }
}

static GLOBAL: Lazy<ConfigRegistry> = Lazy::new(ConfigRegistry::from_env);

/// Both profiles, resolved once from the same environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigRegistry {
    base: ConfigProfile,
    testing: ConfigProfile,
}

impl ConfigRegistry {
    /// Resolve both profiles from `env`.
    pub fn load(env: &dyn EnvSource) -> Self {
        let registry = Self {
            base: resolve_base(env),
            testing: resolve_testing(env),
        };
        tracing::debug!("Configuration profiles resolved");
        registry
    }

    /// Resolve both profiles from the process environment.
    pub fn from_env() -> Self {
        Self::load(&ProcessEnv)
    }

    /// Process-wide registry, resolved on first access.
    ///
    /// Later changes to the environment are not observed.
    pub fn global() -> &'static ConfigRegistry {
        &GLOBAL
    }

    pub fn base(&self) -> &ConfigProfile {
        &self.base
    }

    pub fn testing(&self) -> &ConfigProfile {
        &self.testing
    }

    pub fn get(&self, name: ProfileName) -> &ConfigProfile {
        match name {
            ProfileName::Base => &self.base,
            ProfileName::Testing => &self.testing,
        }
    }

    /// Look up a profile by its textual name.
    pub fn select(&self, name: &str) -> ConfigResult<&ConfigProfile> {
        Ok(self.get(name.parse()?))
    }

    /// All profiles with their names
    pub fn profiles(&self) -> impl Iterator<Item = (ProfileName, &ConfigProfile)> {
        ProfileName::ALL.into_iter().map(move |name| (name, self.get(name)))
    }
}
