//! Configuration loader implementation

use crate::schema::{ConfigRecord, ConfigRecords};
use figment::{
    providers::{Format, Yaml},
    Figment,
};
use std::path::Path;
use types::{ConfigError, Environment, Result};

/// Loads the per-environment records from YAML
pub struct ConfigLoader;

impl ConfigLoader {
    /// File name holding the record for `environment`, e.g. `staging.yaml`
    pub fn file_name(environment: Environment) -> String {
        format!("{}.yaml", environment.as_str())
    }

    /// Load `local.yaml`, `staging.yaml` and `production.yaml` from `dir`.
    ///
    /// A missing file yields an empty record.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<ConfigRecords> {
        let dir = dir.as_ref();

        if !dir.is_dir() {
            return Err(ConfigError::FileNotFound {
                path: dir.display().to_string(),
            }
            .into());
        }

        let load = |environment: Environment| -> Result<ConfigRecord> {
            let path = dir.join(Self::file_name(environment));
            // figment's Yaml::file searches parent directories for relative paths
            if !path.is_file() {
                tracing::debug!(path = %path.display(), "No record file, using empty record");
                return Ok(ConfigRecord::default());
            }
            Self::extract(Figment::new().merge(Yaml::file(&path)), environment)
        };

        Ok(ConfigRecords::new(
            load(Environment::Local)?,
            load(Environment::Staging)?,
            load(Environment::Production)?,
        ))
    }

    /// Load records from YAML strings (for testing and embedding)
    pub fn load_from_strs(local: &str, staging: &str, production: &str) -> Result<ConfigRecords> {
        let load = |yaml: &str, environment: Environment| {
            Self::extract(Figment::new().merge(Yaml::string(yaml)), environment)
        };

        Ok(ConfigRecords::new(
            load(local, Environment::Local)?,
            load(staging, Environment::Staging)?,
            load(production, Environment::Production)?,
        ))
    }

    /// Get the built-in records
    pub fn default_records() -> ConfigRecords {
        ConfigRecords::builtin()
    }

    /// Write the built-in records into `dir` as YAML files
    pub fn create_example<P: AsRef<Path>>(dir: P) -> Result<()> {
        let dir = dir.as_ref();
        let records = Self::default_records();

        std::fs::create_dir_all(dir)?;
        for environment in Environment::all() {
            let yaml = serde_yaml::to_string(records.record(environment)).map_err(|e| {
                ConfigError::ParseError(format!("failed to serialize {} record: {}", environment, e))
            })?;
            std::fs::write(dir.join(Self::file_name(environment)), yaml)?;
        }

        Ok(())
    }

    fn extract(figment: Figment, environment: Environment) -> Result<ConfigRecord> {
        figment.extract::<ConfigRecord>().map_err(|e| {
            ConfigError::ParseError(format!("{} record: {}", environment, e)).into()
        })
    }
}
