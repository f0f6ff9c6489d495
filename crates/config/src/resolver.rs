//! Environment-based configuration resolution

use crate::schema::{ConfigRecords, ResolvedConfig, SALUTATIONS, SALUTATIONS_KEY};
use serde_json::Value;
use types::Environment;

impl ConfigRecords {
    /// Resolve the configuration for `environment`.
    ///
    /// The selected record is copied and `salutations` is set on the copy,
    /// replacing any value the record already carried under that key.
    pub fn resolve(&self, environment: Environment) -> ResolvedConfig {
        let mut values = self.record(environment).as_map().clone();
        values.insert(
            SALUTATIONS_KEY.to_string(),
            Value::from(SALUTATIONS.to_vec()),
        );

        tracing::debug!(
            environment = %environment,
            keys = values.len(),
            "Resolved configuration"
        );

        ResolvedConfig::new(environment, values)
    }

    /// Resolve against the process environment indicator
    pub fn resolve_from_env(&self) -> ResolvedConfig {
        self.resolve(Environment::from_process_env())
    }
}
