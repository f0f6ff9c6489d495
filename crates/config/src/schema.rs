//! Configuration record definitions

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use types::Environment;

/// Key under which the API base URL is conventionally stored
pub const API_BASE_URL_KEY: &str = "api_base_url";

/// Key of the constant field added to every resolved record
pub const SALUTATIONS_KEY: &str = "salutations";

/// Salutations merged into every resolved configuration
pub const SALUTATIONS: [&str; 3] = ["Mr", "Miss", "Mme"];

/// A single environment's settings.
///
/// The shape is owned by whoever supplies the record; this crate only moves
/// keys around and never interprets them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigRecord(Map<String, Value>);

impl ConfigRecord {
    pub fn new(values: Map<String, Value>) -> Self {
        Self(values)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// The three predefined configuration records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigRecords {
    pub local: ConfigRecord,
    pub staging: ConfigRecord,
    pub production: ConfigRecord,
}

impl ConfigRecords {
    pub fn new(local: ConfigRecord, staging: ConfigRecord, production: ConfigRecord) -> Self {
        Self {
            local,
            staging,
            production,
        }
    }

    /// Built-in records used when no configuration directory is supplied
    pub fn builtin() -> Self {
        Self::new(
            builtin_record("local", "http://localhost:8080"),
            builtin_record("staging", "https://staging.pastebin.example.com"),
            builtin_record("production", "https://pastebin.example.com"),
        )
    }

    /// Record predefined for an environment
    pub fn record(&self, environment: Environment) -> &ConfigRecord {
        match environment {
            Environment::Production => &self.production,
            Environment::Staging => &self.staging,
            Environment::Local => &self.local,
        }
    }
}

fn builtin_record(name: &str, api_base_url: &str) -> ConfigRecord {
    let mut values = Map::new();
    values.insert("name".to_string(), Value::from(name));
    values.insert(API_BASE_URL_KEY.to_string(), Value::from(api_base_url));
    ConfigRecord(values)
}

/// The configuration selected for this process, extended with [`SALUTATIONS`].
///
/// Built by [`ConfigRecords::resolve`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedConfig {
    #[serde(skip)]
    environment: Environment,
    #[serde(flatten)]
    values: Map<String, Value>,
}

impl ResolvedConfig {
    pub(crate) fn new(environment: Environment, values: Map<String, Value>) -> Self {
        Self { environment, values }
    }

    /// Environment whose record was selected
    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// String value of `key`, if present and a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// The constant salutations list
    pub fn salutations(&self) -> Vec<&str> {
        self.values
            .get(SALUTATIONS_KEY)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Configured API base URL, if the record defines one
    pub fn api_base_url(&self) -> Option<&str> {
        self.get_str(API_BASE_URL_KEY)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }

    pub fn to_json(&self) -> Value {
        Value::Object(self.values.clone())
    }
}
