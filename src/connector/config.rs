//! Credential resolution.
//!
//! The API key is looked up once at startup: first in the process environment,
//! then in the secret store under the same name. The result is kept as an
//! explicit [`Credential`] value; the environment is never written back.

use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};

use crate::application::SecretStore;
use crate::domain::{Credential, CredentialSource, API_KEY_NAME};

/// Holds the credential resolved at startup.
pub struct ConfigLoader {
    credential: Credential,
}

impl ConfigLoader {
    /// Resolve the credential from the environment, falling back to the store.
    pub fn load_credential(secret_store: &dyn SecretStore) -> Self {
        Self::resolve(secret_store, std::env::var(API_KEY_NAME).ok())
    }

    /// Resolution given an already-read environment value.
    ///
    /// An empty environment value counts as absent. When neither source has a
    /// value the empty credential is kept; no error is raised.
    pub fn resolve(secret_store: &dyn SecretStore, env_value: Option<String>) -> Self {
        let credential = match env_value.filter(|v| !v.is_empty()) {
            Some(token) => Credential::new(token, CredentialSource::Environment),
            None => match secret_store.get(API_KEY_NAME) {
                Some(token) => Credential::new(token, CredentialSource::SecretStore),
                None => Credential::empty(),
            },
        };
        Self { credential }
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn is_configured(&self) -> bool {
        self.credential.is_configured()
    }

    pub fn into_credential(self) -> Credential {
        self.credential
    }
}

/// Load `KEY=value` pairs from a dotenv file into the process environment.
///
/// Variables already present in the environment are left untouched. Returns
/// whether the file was found and loaded. A missing file is normal; a file that
/// exists but cannot be read or parsed is logged at warn.
pub fn load_env_file(path: &Path) -> bool {
    match dotenv::from_path(path) {
        Ok(()) => {
            debug!("Loaded environment from {}", path.display());
            true
        }
        Err(dotenv::Error::Io(e)) if e.kind() == ErrorKind::NotFound => {
            debug!("No environment file at {}", path.display());
            false
        }
        Err(e) => {
            warn!("Ignoring environment file {}: {}", path.display(), e);
            false
        }
    }
}
