//! Setting names, environment variable names and fallback values.
//!
//! Centralized location for the literals shared by both profiles.

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable holding the database connection URI
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";

/// Environment variable naming the profile to select at startup
pub const ENV_APP_PROFILE: &str = "APP_PROFILE";

// =============================================================================
// Setting Names
// =============================================================================

pub const SETTING_DEBUG: &str = "DEBUG";

pub const SETTING_TRACK_MODIFICATIONS: &str = "SQLALCHEMY_TRACK_MODIFICATIONS";

pub const SETTING_DATABASE_URI: &str = "SQLALCHEMY_DATABASE_URI";

pub const SETTING_SECRET_KEY: &str = "SECRET_KEY";

/// Settings whose values must not appear in logs or default output
pub const SENSITIVE_SETTINGS: &[&str] = &[SETTING_DATABASE_URI, SETTING_SECRET_KEY];

/// Check if a setting holds credentials or key material
pub fn is_sensitive(setting: &str) -> bool {
    SENSITIVE_SETTINGS.contains(&setting)
}

/// Placeholder printed in place of sensitive values
pub const REDACTED: &str = "[REDACTED]";

// =============================================================================
// Defaults
// =============================================================================

/// Database URI used when `DATABASE_URL` is not set
pub const DEFAULT_DATABASE_URL: &str = "postgresql://postgres:postgres@db:5432/mydb";

/// Session signing key of the testing profile
pub const TESTING_SECRET_KEY: &str = "somekey";
