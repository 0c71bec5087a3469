//! Commerce RateCard API client
//!
//! One call, [`RateCardClient::get`], issues a single GET and decodes the
//! response. The call is split the same way the request flows: [`prepare`]
//! builds the request without touching the network, [`send`] executes it and
//! [`respond`] checks the status and decodes the body.
//!
//! [`prepare`]: RateCardClient::prepare
//! [`send`]: RateCardClient::send
//! [`respond`]: RateCardClient::respond
//!
//! # Examples
//!
//! ```no_run
//! use ratecard_client::{AccessToken, RateCardClient};
//! use ratecard_core::types::RateCardQuery;
//!
//! # async fn example() -> ratecard_core::Result<()> {
//! let client = RateCardClient::new("00000000-0000-0000-0000-000000000000")
//!     .with_token(AccessToken::new("token"));
//!
//! let card = client.get(&RateCardQuery::default()).await?;
//! println!("{} meters", card.meters.len());
//! # Ok(())
//! # }
//! ```

use ratecard_core::error::Result;
use ratecard_core::types::{RateCard, RateCardQuery};
use reqwest::{Client, Request, Response};
use tracing::debug;

use crate::DEFAULT_MANAGEMENT_ENDPOINT;
use crate::auth::AccessToken;
use crate::http;

/// API version required by the RateCard endpoint
pub const API_VERSION: &str = "2015-06-01-preview";

const SERVICE: &str = "RateCard";

/// Client for the RateCard endpoint of one subscription
pub struct RateCardClient {
    client: Client,
    base_uri: String,
    subscription_id: String,
    token: Option<AccessToken>,
    inspect: bool,
}

impl RateCardClient {
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

    /// Log each request and response at info level
    pub fn with_inspection(mut self, inspect: bool) -> Self {
        self.inspect = inspect;
        self
    }

    /// Build the GET request for `query`
    pub fn prepare(&self, query: &RateCardQuery) -> Result<Request> {
        let url = http::resource_url(
            &self.base_uri,
            &[
                "subscriptions",
                &self.subscription_id,
                "providers",
                "Microsoft.Commerce",
                "RateCard",
            ],
        )?;

        let mut builder = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&[
                ("api-version", API_VERSION.to_string()),
                ("$filter", query.filter_expression()),
            ]);

        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token.as_str());
        }

        Ok(builder.build()?)
    }

    pub async fn send(&self, request: Request) -> Result<Response> {
        http::inspect_request(self.inspect, &request);
        Ok(self.client.execute(request).await?)
    }

    pub async fn respond(&self, response: Response) -> Result<RateCard> {
        http::decode(SERVICE, self.inspect, response).await
    }

    /// Fetch the rate card selected by `query`
    pub async fn get(&self, query: &RateCardQuery) -> Result<RateCard> {
        let request = self.prepare(query)?;
        let response = self.send(request).await?;
        let card = self.respond(response).await?;

        debug!("RateCard returned {} meters", card.meters.len());
        Ok(card)
    }
}
