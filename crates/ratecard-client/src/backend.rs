//! Backend trait for the remote services
//!
//! The report pipeline only sees this trait, so tests can substitute an
//! in-memory implementation and count which calls were made.

use async_trait::async_trait;
use ratecard_core::credentials::Credentials;
use ratecard_core::error::Result;
use ratecard_core::types::{RateCard, RateCardQuery, VmCapability};
use reqwest::Client;

use crate::auth::{AccessToken, ServicePrincipalAuth};
use crate::rate_card::RateCardClient;
use crate::vm_sizes::VmSizesClient;
use crate::{DEFAULT_LOGIN_ENDPOINT, DEFAULT_MANAGEMENT_ENDPOINT};

/// Remote services the pricing report depends on
#[async_trait]
pub trait Backend: Send + Sync {
    /// Exchange credentials for a bearer token
    async fn authorize(&self, credentials: &Credentials) -> Result<AccessToken>;

    /// Fetch the rate card selected by `query`
    async fn rate_card(
        &self,
        credentials: &Credentials,
        token: &AccessToken,
        query: &RateCardQuery,
    ) -> Result<RateCard>;

    /// List VM capacity metadata for one region code
    async fn vm_sizes(
        &self,
        credentials: &Credentials,
        token: &AccessToken,
        location: &str,
    ) -> Result<Vec<VmCapability>>;
}

/// Backend talking to Azure Resource Manager and Azure Active Directory
pub struct AzureBackend {
    client: Client,
    management_endpoint: String,
    login_endpoint: String,
    inspect: bool,
}

impl Default for AzureBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl AzureBackend {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            management_endpoint: DEFAULT_MANAGEMENT_ENDPOINT.to_string(),
            login_endpoint: DEFAULT_LOGIN_ENDPOINT.to_string(),
            inspect: false,
        }
    }

    pub fn with_management_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.management_endpoint = endpoint.into();
        self
    }

    pub fn with_login_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.login_endpoint = endpoint.into();
        self
    }

    pub fn with_inspection(mut self, inspect: bool) -> Self {
        self.inspect = inspect;
        self
    }

    fn resource(&self) -> String {
        format!("{}/", self.management_endpoint.trim_end_matches('/'))
    }
}

#[async_trait]
impl Backend for AzureBackend {
    async fn authorize(&self, credentials: &Credentials) -> Result<AccessToken> {
        ServicePrincipalAuth::new()
            .with_http_client(self.client.clone())
            .with_login_endpoint(&self.login_endpoint)
            .with_resource(self.resource())
            .acquire_token(credentials)
            .await
    }

    async fn rate_card(
        &self,
        credentials: &Credentials,
        token: &AccessToken,
        query: &RateCardQuery,
    ) -> Result<RateCard> {
        RateCardClient::new(&credentials.subscription_id)
            .with_http_client(self.client.clone())
            .with_base_uri(&self.management_endpoint)
            .with_token(token.clone())
            .with_inspection(self.inspect)
            .get(query)
            .await
    }

    async fn vm_sizes(
        &self,
        credentials: &Credentials,
        token: &AccessToken,
        location: &str,
    ) -> Result<Vec<VmCapability>> {
        VmSizesClient::new(&credentials.subscription_id)
            .with_http_client(self.client.clone())
            .with_base_uri(&self.management_endpoint)
            .with_token(token.clone())
            .with_inspection(self.inspect)
            .list(location)
            .await
    }
}
