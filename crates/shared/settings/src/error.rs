//! Error types for profile and setting lookups.
//!
//! Resolving a profile never fails; only lookups by name do.

use thiserror::Error;

/// Configuration lookup errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown profile '{0}' (expected 'base' or 'testing')")]
    UnknownProfile(String),

    #[error("Unknown setting '{0}'")]
    UnknownSetting(String),
}

impl ConfigError {
    /// Get error code for callers that report errors as data
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::UnknownProfile(_) => "UNKNOWN_PROFILE",
            ConfigError::UnknownSetting(_) => "UNKNOWN_SETTING",
        }
    }
}

/// Convenience constructors
impl ConfigError {
    pub fn unknown_profile(name: impl Into<String>) -> Self {
        ConfigError::UnknownProfile(name.into())
    }

    pub fn unknown_setting(name: impl Into<String>) -> Self {
        ConfigError::UnknownSetting(name.into())
    }
}

/// Result type alias for configuration lookups
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigError::unknown_profile("production");
        assert_eq!(
            err.to_string(),
            "Unknown profile 'production' (expected 'base' or 'testing')"
        );
        assert_eq!(err.code(), "UNKNOWN_PROFILE");

        let err = ConfigError::unknown_setting("SECRET_KEY");
        assert_eq!(err.to_string(), "Unknown setting 'SECRET_KEY'");
        assert_eq!(err.code(), "UNKNOWN_SETTING");
    }
}
