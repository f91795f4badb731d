//! Configuration profile values.
//!
//! A profile is an immutable bundle of settings handed to the web framework
//! and its ORM layer. It is viewed either through typed accessors or as a flat
//! `setting name -> value` map keyed by the framework's setting names.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::constants::{
    is_sensitive, REDACTED, SETTING_DATABASE_URI, SETTING_DEBUG, SETTING_SECRET_KEY,
    SETTING_TRACK_MODIFICATIONS,
};
use crate::error::{ConfigError, ConfigResult};

/// A primitive setting value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Str(String),
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Bool(b) => write!(f, "{}", b),
            SettingValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Str(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::Str(value)
    }
}

/// Settings replaced or added when deriving one profile from another.
///
/// `None` keeps the parent's value.
#[derive(Clone, Default)]
pub struct ProfileOverrides {
    pub debug: Option<bool>,
    pub database_uri: Option<String>,
    pub secret_key: Option<String>,
}

impl fmt::Debug for ProfileOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileOverrides")
            .field("debug", &self.debug)
            .field("database_uri", &self.database_uri.as_ref().map(|_| REDACTED))
            .field("secret_key", &self.secret_key.as_ref().map(|_| REDACTED))
            .finish()
    }
}

impl ProfileOverrides {
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    pub fn database_uri(mut self, uri: impl Into<String>) -> Self {
        self.database_uri = Some(uri.into());
        self
    }

    pub fn secret_key(mut self, key: impl Into<String>) -> Self {
        self.secret_key = Some(key.into());
        self
    }
}

/// Immutable configuration profile
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct ConfigProfile {
    #[serde(rename = "DEBUG")]
    debug: bool,
    #[serde(rename = "SQLALCHEMY_TRACK_MODIFICATIONS")]
    track_modifications: bool,
    #[serde(rename = "SQLALCHEMY_DATABASE_URI")]
    database_uri: String,
    #[serde(rename = "SECRET_KEY", skip_serializing_if = "Option::is_none")]
    secret_key: Option<String>,
}

impl fmt::Debug for ConfigProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigProfile")
            .field("debug", &self.debug)
            .field("track_modifications", &self.track_modifications)
            .field("database_uri", &REDACTED)
            .field("secret_key", &self.secret_key.as_ref().map(|_| REDACTED))
            .finish()
    }
}

impl ConfigProfile {
    pub(crate) fn new(debug: bool, track_modifications: bool, database_uri: String) -> Self {
        Self {
            debug,
            track_modifications,
            database_uri,
            secret_key: None,
        }
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn track_modifications(&self) -> bool {
        self.track_modifications
    }

    /// Database connection URI. Opaque here; never parsed or connected to.
    pub fn database_uri(&self) -> &str {
        &self.database_uri
    }

    pub fn secret_key(&self) -> Option<&str> {
        self.secret_key.as_deref()
    }

    /// Copy this profile with `overrides` applied.
    pub fn with_overrides(&self, overrides: ProfileOverrides) -> Self {
        let ProfileOverrides {
            debug,
            database_uri,
            secret_key,
        } = overrides;

        Self {
            debug: debug.unwrap_or(self.debug),
            track_modifications: self.track_modifications,
            database_uri: database_uri.unwrap_or_else(|| self.database_uri.clone()),
            secret_key: secret_key.or_else(|| self.secret_key.clone()),
        }
    }

    /// Flat view of every setting this profile defines.
    pub fn settings(&self) -> BTreeMap<&'static str, SettingValue> {
        let mut settings = BTreeMap::new();
        settings.insert(SETTING_DEBUG, self.debug.into());
        settings.insert(SETTING_TRACK_MODIFICATIONS, self.track_modifications.into());
        settings.insert(SETTING_DATABASE_URI, self.database_uri.clone().into());
        if let Some(key) = &self.secret_key {
            settings.insert(SETTING_SECRET_KEY, key.clone().into());
        }
        settings
    }

    /// Same as [`settings`](Self::settings) with sensitive values masked.
    pub fn redacted_settings(&self) -> BTreeMap<&'static str, SettingValue> {
        self.settings()
            .into_iter()
            .map(|(name, value)| {
                if is_sensitive(name) {
                    (name, REDACTED.into())
                } else {
                    (name, value)
                }
            })
            .collect()
    }

    /// Look up one setting by its framework name.
    pub fn get(&self, name: &str) -> Option<SettingValue> {
        match name {
            SETTING_DEBUG => Some(self.debug.into()),
            SETTING_TRACK_MODIFICATIONS => Some(self.track_modifications.into()),
            SETTING_DATABASE_URI => Some(self.database_uri.as_str().into()),
            SETTING_SECRET_KEY => self.secret_key.as_deref().map(Into::into),
            _ => None,
        }
    }

    /// Like [`get`](Self::get) but reports a missing setting as an error.
    pub fn setting(&self, name: &str) -> ConfigResult<SettingValue> {
        self.get(name).ok_or_else(|| ConfigError::unknown_setting(name))
    }
}
