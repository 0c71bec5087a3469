//! Compute VM size listing client

use ratecard_core::error::Result;
use ratecard_core::types::VmCapability;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::DEFAULT_MANAGEMENT_ENDPOINT;
use crate::auth::AccessToken;
use crate::http;

/// Compute API version used for size listings
pub const API_VERSION: &str = "2016-03-30";

const SERVICE: &str = "VirtualMachineSizes";

#[derive(Debug, Deserialize)]
struct VirtualMachineSizeListResult {
    #[serde(default)]
    value: Vec<VirtualMachineSize>,
}

#[derive(Debug, Deserialize)]
struct VirtualMachineSize {
    name: String,
    #[serde(rename = "numberOfCores")]
    number_of_cores: u32,
    #[serde(rename = "memoryInMB")]
    memory_in_mb: u64,
    #[serde(rename = "resourceDiskSizeInMB")]
    resource_disk_size_in_mb: u64,
}

/// Lists the VM sizes available in a location
pub struct VmSizesClient {
    client: Client,
    base_uri: String,
    subscription_id: String,
    token: Option<AccessToken>,
    inspect: bool,
}

impl VmSizesClient {
    pub fn new(subscription_id: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_uri: DEFAULT_MANAGEMENT_ENDPOINT.to_string(),
            subscription_id: subscription_id.into(),
            token: None,
            inspect: false,
        }
    }

    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn with_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = base_uri.into();
        self
    }

    pub fn with_token(mut self, token: AccessToken) -> Self {
        self.token = Some(token);
        self
    }

    pub fn with_inspection(mut self, inspect: bool) -> Self {
        self.inspect = inspect;
        self
    }

    /// List capacity metadata for every size offered in `location`
    ///
    /// Each returned row carries `location` as its region code.
    pub async fn list(&self, location: &str) -> Result<Vec<VmCapability>> {
        let url = http::resource_url(
            &self.base_uri,
            &[
                "subscriptions",
                &self.subscription_id,
                "providers",
                "Microsoft.Compute",
                "locations",
                location,
                "vmSizes",
            ],
        )?;

        let mut builder = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&[("api-version", API_VERSION)]);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token.as_str());
        }
        let request = builder.build()?;

        http::inspect_request(self.inspect, &request);
        let response = self.client.execute(request).await?;
        let result: VirtualMachineSizeListResult =
            http::decode(SERVICE, self.inspect, response).await?;

        debug!("{} VM sizes listed in {}", result.value.len(), location);
        Ok(result
            .value
            .into_iter()
            .map(|size| VmCapability {
                size: size.name,
                region: location.to_string(),
                cores: size.number_of_cores,
                memory_mb: size.memory_in_mb,
                resource_disk_mb: size.resource_disk_size_in_mb,
            })
            .collect())
    }
}
