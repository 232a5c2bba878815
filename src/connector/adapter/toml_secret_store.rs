use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::application::SecretStore;
use crate::domain::DomainError;

/// The secrets file name used when none is given on the command line.
pub const DEFAULT_SECRETS_FILE: &str = "secrets.toml";

/// A [`SecretStore`] backed by a flat TOML file of `KEY = "value"` pairs.
///
/// Only top-level string values are exposed; tables and non-string values are
/// ignored.
#[derive(Debug, Default)]
pub struct TomlSecretStore {
    values: HashMap<String, String>,
}

impl TomlSecretStore {
    /// Load secrets from `path`.
    ///
    /// Returns:
    /// - an empty store if the file does not exist
    /// - `Err(...)` if the file exists but cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self, DomainError> {
        if !path.exists() {
            debug!("No secrets file at {}", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let store = Self::parse(&content).map_err(|e| {
            DomainError::configuration(format!("failed to parse {}: {}", path.display(), e))
        })?;

        debug!("Loaded {} secrets from {}", store.values.len(), path.display());
        Ok(store)
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        let table: toml::Table = toml::from_str(content)?;
        let values = table
            .into_iter()
            .filter_map(|(key, value)| match value {
                toml::Value::String(s) => Some((key, s)),
                _ => None,
            })
            .collect();

        Ok(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SecretStore for TomlSecretStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
