//! Service principal credentials loaded from a local JSON file
//!
//! The default location is `~/.azure/credentials.json`:
//!
//! ```json
//! {
//!   "clientID": "...",
//!   "clientSecret": "...",
//!   "tenantID": "...",
//!   "subscriptionID": "..."
//! }
//! ```
//!
//! A missing file, an unreadable file and invalid JSON each produce their own
//! [`RateCardError`] variant.

use serde::Deserialize;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{RateCardError, Result};

/// Credential file location relative to the home directory
pub const CREDENTIALS_PATH: &str = ".azure/credentials.json";

/// Service principal credentials
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    #[serde(rename = "clientID")]
    pub client_id: String,
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
    #[serde(rename = "tenantID")]
    pub tenant_id: String,
    #[serde(rename = "subscriptionID")]
    pub subscription_id: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("tenant_id", &self.tenant_id)
            .field("subscription_id", &self.subscription_id)
            .finish()
    }
}

impl Credentials {
    /// Default credential file path under the current user's home directory
    pub fn default_path() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(CREDENTIALS_PATH))
            .ok_or(RateCardError::HomeDirectory)
    }

    /// Load credentials from `path`
    pub async fn load(path: &Path) -> Result<Self> {
        debug!("Loading credentials from {}", path.display());

        let contents = tokio::fs::read(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => RateCardError::CredentialsNotFound {
                path: path.to_path_buf(),
            },
            _ => RateCardError::CredentialsUnreadable {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        serde_json::from_slice(&contents).map_err(|e| RateCardError::CredentialsInvalid {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const VALID: &str = r#"{
        "clientID": "app-id",
        "clientSecret": "s3cret",
        "tenantID": "tenant",
        "subscriptionID": "sub-123"
    }"#;

    #[test]
    fn test_load_valid_credentials() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("credentials.json");
        fs::write(&path, VALID).unwrap();

        let creds = tokio_test::block_on(Credentials::load(&path)).unwrap();
        assert_eq!(creds.client_id, "app-id");
        assert_eq!(creds.client_secret, "s3cret");
        assert_eq!(creds.tenant_id, "tenant");
        assert_eq!(creds.subscription_id, "sub-123");
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.json");

        let err = tokio_test::block_on(Credentials::load(&path)).unwrap_err();
        assert!(matches!(err, RateCardError::CredentialsNotFound { .. }));
    }

    #[test]
    fn test_directory_is_unreadable() {
        let dir = TempDir::new().unwrap();

        let err = tokio_test::block_on(Credentials::load(dir.path())).unwrap_err();
        assert!(matches!(err, RateCardError::CredentialsUnreadable { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("credentials.json");
        fs::write(&path, "{ not json").unwrap();

        let err = tokio_test::block_on(Credentials::load(&path)).unwrap_err();
        assert!(matches!(err, RateCardError::CredentialsInvalid { .. }));
        assert!(err.to_string().contains("contains invalid JSON"));
    }

    #[test]
    fn test_missing_field_is_invalid() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("credentials.json");
        fs::write(&path, r#"{"clientID": "a", "clientSecret": "b"}"#).unwrap();

        let err = tokio_test::block_on(Credentials::load(&path)).unwrap_err();
        assert!(matches!(err, RateCardError::CredentialsInvalid { .. }));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let creds: Credentials = serde_json::from_str(VALID).unwrap();
        let debug = format!("{creds:?}");
        assert!(!debug.contains("s3cret"));
        assert!(debug.contains("<redacted>"));
    }
}
