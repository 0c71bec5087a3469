//! Request and response helpers shared by the management API clients

use ratecard_core::error::{RateCardError, Result};
use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

/// Append `segments` to `base`, percent-encoding each one
pub(crate) fn resource_url(base: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(base)
        .map_err(|e| RateCardError::Config(format!("invalid endpoint {base}: {e}")))?;

    url.path_segments_mut()
        .map_err(|_| RateCardError::Config(format!("endpoint {base} cannot take a path")))?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

/// Log an outgoing request when inspection is enabled
pub(crate) fn inspect_request(inspect: bool, request: &reqwest::Request) {
    if inspect {
        info!("Inspecting Request: {} {}", request.method(), request.url());
    } else {
        debug!("{} {}", request.method(), request.url());
    }
}

/// Body text of a failed response; a read failure leaves it empty
fn error_body(service: &str, body: reqwest::Result<String>) -> String {
    body.unwrap_or_else(|e| {
        debug!("Failed to read {service} error body: {e}");
        String::new()
    })
}

/// Require a 200 response and decode its JSON body
pub(crate) async fn decode<T: DeserializeOwned>(
    service: &'static str,
    inspect: bool,
    response: Response,
) -> Result<T> {
    let status = response.status();
    if inspect {
        info!("Inspecting Response: {} for {}", status, response.url());
    }

    if status != StatusCode::OK {
        let body = error_body(service, response.text().await);
        return Err(RateCardError::Status {
            service,
            status: status.as_u16(),
            body,
        });
    }

    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
