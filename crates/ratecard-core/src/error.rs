//! Error types for ratecard
//!
//! This module defines the error type used throughout the ratecard crates.
//! Every failure is terminal for the binary, so there is no retry
//! classification here; the variants only exist to give each failure a
//! descriptive message.
//!
//! # Example
//!
//! ```
//! use ratecard_core::error::{RateCardError, Result};
//!
//! fn example_function() -> Result<()> {
//!     // This will automatically convert serde_json::Error to RateCardError
//!     let _value: serde_json::Value = serde_json::from_str("{}")?;
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ratecard operations
#[derive(Error, Debug)]
pub enum RateCardError {
    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The current user's home directory could not be determined
    #[error("unable to determine the current user's home directory")]
    HomeDirectory,

    /// Credential file does not exist
    #[error("unable to open Azure credentials at {}", path.display())]
    CredentialsNotFound {
        /// Expected location of the credential file
        path: PathBuf,
    },

    /// Credential file exists but could not be read
    #[error("unable to read {}: {source}", path.display())]
    CredentialsUnreadable {
        /// Location of the credential file
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Credential file is not valid JSON
    #[error("{} contains invalid JSON: {source}", path.display())]
    CredentialsInvalid {
        /// Location of the credential file
        path: PathBuf,
        /// Underlying parse error
        source: serde_json::Error,
    },

    /// A RateCard query field was empty
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Token acquisition failed
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A remote service answered with a non-success status
    #[error("{service} returned status {status}: {body}")]
    Status {
        /// Name of the remote service
        service: &'static str,
        /// HTTP status code
        status: u16,
        /// Response body text, possibly empty
        body: String,
    },

    /// A meter passed every filter but carries no base ("0") pricing tier
    #[error("meter {meter_id} is missing the base pricing tier")]
    MissingBaseTier {
        /// Identifier of the offending meter
        meter_id: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results in ratecard
pub type Result<T> = std::result::Result<T, RateCardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = RateCardError::MissingBaseTier {
            meter_id: "abc".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "meter abc is missing the base pricing tier"
        );

        let error = RateCardError::Status {
            service: "RateCard",
            status: 403,
            body: "forbidden".to_string(),
        };
        assert_eq!(error.to_string(), "RateCard returned status 403: forbidden");
    }

    #[test]
    fn test_credential_error_mentions_path() {
        let error = RateCardError::CredentialsNotFound {
            path: PathBuf::from("/home/me/.azure/credentials.json"),
        };
        assert_eq!(
            error.to_string(),
            "unable to open Azure credentials at /home/me/.azure/credentials.json"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: RateCardError = json_error.into();
        assert!(matches!(error, RateCardError::Json(_)));
    }
}
