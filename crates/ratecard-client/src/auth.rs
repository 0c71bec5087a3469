//! Service principal token acquisition
//!
//! Exchanges [`Credentials`] for a bearer token using the client-credentials
//! grant against the tenant's token endpoint. The token is requested for the
//! management endpoint the other clients call.

use ratecard_core::credentials::Credentials;
use ratecard_core::error::{RateCardError, Result};
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use tracing::{debug, info};

use crate::{DEFAULT_LOGIN_ENDPOINT, DEFAULT_MANAGEMENT_ENDPOINT};

/// Token endpoint API version
const TOKEN_API_VERSION: &str = "1.0";

/// Bearer token attached to management API requests
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
}

/// Acquires tokens for a service principal
pub struct ServicePrincipalAuth {
    client: Client,
    login_endpoint: String,
    resource: String,
}

impl Default for ServicePrincipalAuth {
    fn default() -> Self {
        Self::new()
    }
}

impl ServicePrincipalAuth {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            login_endpoint: DEFAULT_LOGIN_ENDPOINT.to_string(),
            resource: format!("{DEFAULT_MANAGEMENT_ENDPOINT}/"),
        }
    }

    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn with_login_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.login_endpoint = endpoint.into();
        self
    }

    /// Set the resource the token is issued for
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = resource.into();
        self
    }

    /// Token endpoint for a tenant
    pub fn token_url(&self, tenant_id: &str) -> String {
        format!(
            "{}/{}/oauth2/token",
            self.login_endpoint.trim_end_matches('/'),
            tenant_id
        )
    }

    /// Exchange client credentials for a bearer token
    pub async fn acquire_token(&self, credentials: &Credentials) -> Result<AccessToken> {
        let url = self.token_url(&credentials.tenant_id);
        debug!("Requesting token from {}", url);

        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
            ("resource", self.resource.as_str()),
        ];

        let response = self
            .client
            .post(&url)
            .query(&[("api-version", TOKEN_API_VERSION)])
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(RateCardError::Auth(format!(
                "token endpoint returned {status}: {body}"
            )));
        }

        let token: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| RateCardError::Auth(format!("failed to parse token response: {e}")))?;

        info!(
            "Acquired {} token for tenant {}",
            token.token_type.as_deref().unwrap_or("bearer"),
            credentials.tenant_id
        );
        Ok(AccessToken(token.access_token))
    }
}
