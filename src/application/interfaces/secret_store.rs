/// Read-only key-value lookup for secrets that are not in the environment.
pub trait SecretStore: Send + Sync {
    /// Return the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
}

impl SecretStore for std::collections::HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        std::collections::HashMap::get(self, key).cloned()
    }
}
