//! HTTP clients for ratecard
//!
//! This crate talks to the three remote services the pricing report needs:
//! the token endpoint ([`auth`]), the commerce RateCard API ([`rate_card`])
//! and the compute VM size listing ([`vm_sizes`]). [`backend`] bundles them
//! behind one trait so the report pipeline can be driven without a network.

pub mod auth;
pub mod backend;
mod http;
pub mod rate_card;
pub mod vm_sizes;

pub use auth::{AccessToken, ServicePrincipalAuth};
pub use backend::{AzureBackend, Backend};
pub use rate_card::RateCardClient;
pub use vm_sizes::VmSizesClient;

/// Default Azure Resource Manager endpoint
pub const DEFAULT_MANAGEMENT_ENDPOINT: &str = "https://management.azure.com";

/// Default Azure Active Directory endpoint
pub const DEFAULT_LOGIN_ENDPOINT: &str = "https://login.microsoftonline.com";
