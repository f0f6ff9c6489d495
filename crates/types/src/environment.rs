//! Deployment environment selection

use serde::{Deserialize, Serialize};
use std::fmt;

/// Process environment variable carrying the deployment indicator
pub const ENVIRONMENT_VAR: &str = "PASTEBIN_ENV";

/// Deployment environment a configuration record belongs to
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Developer machine; also the fallback for unknown indicators
    #[default]
    Local,
    /// Pre-production deployment
    Staging,
    /// Production deployment
    Production,
}

impl Environment {
    /// Map an indicator value onto an environment.
    ///
    /// Only the exact values `"production"` and `"staging"` are recognised.
    /// Anything else, including a missing indicator, selects [`Environment::Local`].
    pub fn from_indicator(indicator: Option<&str>) -> Self {
        match indicator {
            Some("production") => Environment::Production,
            Some("staging") => Environment::Staging,
            _ => Environment::Local,
        }
    }

    /// Read the indicator from [`ENVIRONMENT_VAR`]
    pub fn from_process_env() -> Self {
        let indicator = std::env::var(ENVIRONMENT_VAR).ok();
        Self::from_indicator(indicator.as_deref())
    }

    /// Canonical indicator value
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    /// All environments, in record order
    pub fn all() -> [Environment; 3] {
        [Environment::Local, Environment::Staging, Environment::Production]
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
