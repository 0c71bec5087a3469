//! Core domain types for ratecard
//!
//! Wire types for the RateCard response ([`RateCard`], [`Meter`]), the query
//! that selects an offer ([`RateCardQuery`]), VM capacity metadata
//! ([`VmCapability`]) and the joined output row ([`Rate`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::{RateCardError, Result};

/// Pay-as-you-go offer identifier
pub const PAY_AS_YOU_GO_OFFER: &str = "MS-AZR-0003p";

/// Usage-tier key holding the base unit price
pub const BASE_TIER: &str = "0";

/// Treat an explicit JSON `null` like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Tier map with `null` prices dropped, so an unpriced tier reads as absent
fn priced_tiers<'de, D>(deserializer: D) -> std::result::Result<HashMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let tiers: Option<HashMap<String, Option<f64>>> = Option::deserialize(deserializer)?;
    Ok(tiers
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(tier, price)| price.map(|p| (tier, p)))
        .collect())
}

/// Parameters selecting which rate card the service returns
///
/// All four fields are required and non-empty; together they form the
/// server-side `$filter` expression.
///
/// # Examples
/// ```
/// use ratecard_core::types::RateCardQuery;
///
/// let query = RateCardQuery::default();
/// assert_eq!(
///     query.filter_expression(),
///     "OfferDurableId eq 'MS-AZR-0003p' and Currency eq 'USD' and Locale eq 'en-US' and RegionInfo eq 'US'"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateCardQuery {
    offer_durable_id: String,
    currency: String,
    locale: String,
    region_info: String,
}

impl RateCardQuery {
    /// Create a query, rejecting empty fields
    pub fn new(
        offer_durable_id: impl Into<String>,
        currency: impl Into<String>,
        locale: impl Into<String>,
        region_info: impl Into<String>,
    ) -> Result<Self> {
        let query = Self {
            offer_durable_id: offer_durable_id.into(),
            currency: currency.into(),
            locale: locale.into(),
            region_info: region_info.into(),
        };

        for (name, value) in [
            ("OfferDurableId", &query.offer_durable_id),
            ("Currency", &query.currency),
            ("Locale", &query.locale),
            ("RegionInfo", &query.region_info),
        ] {
            if value.trim().is_empty() {
                return Err(RateCardError::InvalidQuery(format!("{name} must not be empty")));
            }
        }

        Ok(query)
    }

    pub fn offer_durable_id(&self) -> &str {
        &self.offer_durable_id
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn region_info(&self) -> &str {
        &self.region_info
    }

    /// Build the `$filter` expression sent to the service
    pub fn filter_expression(&self) -> String {
        format!(
            "OfferDurableId eq '{}' and Currency eq '{}' and Locale eq '{}' and RegionInfo eq '{}'",
            self.offer_durable_id, self.currency, self.locale, self.region_info
        )
    }
}

impl Default for RateCardQuery {
    fn default() -> Self {
        Self {
            offer_durable_id: PAY_AS_YOU_GO_OFFER.to_string(),
            currency: "USD".to_string(),
            locale: "en-US".to_string(),
            region_info: "US".to_string(),
        }
    }
}

/// Billing category of a meter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MeterCategory {
    #[serde(rename = "Virtual Machines")]
    VirtualMachines,
    #[serde(rename = "Cloud Services")]
    CloudServices,
    #[serde(rename = "Networking")]
    Networking,
    #[serde(rename = "Storage")]
    Storage,
    #[serde(rename = "Data Services")]
    DataServices,
    /// Any category this crate does not name
    #[default]
    #[serde(other)]
    Other,
}

impl fmt::Display for MeterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeterCategory::VirtualMachines => write!(f, "Virtual Machines"),
            MeterCategory::CloudServices => write!(f, "Cloud Services"),
            MeterCategory::Networking => write!(f, "Networking"),
            MeterCategory::Storage => write!(f, "Storage"),
            MeterCategory::DataServices => write!(f, "Data Services"),
            MeterCategory::Other => write!(f, "Other"),
        }
    }
}

/// A priced billing unit as returned by the RateCard service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Meter {
    #[serde(deserialize_with = "null_as_default")]
    pub meter_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub meter_category: MeterCategory,
    /// Raw size label, e.g. `"Standard_D2 VM"`
    #[serde(deserialize_with = "null_as_default")]
    pub meter_sub_category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub unit: String,
    /// Human-readable region label, e.g. `"US East 2"`
    #[serde(deserialize_with = "null_as_default")]
    pub meter_region: String,
    /// Usage-tier key to unit price
    #[serde(deserialize_with = "priced_tiers")]
    pub meter_rates: HashMap<String, f64>,
    pub effective_date: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub included_quantity: f64,
}

impl Meter {
    /// Unit price of the base usage tier
    ///
    /// # Errors
    ///
    /// Returns [`RateCardError::MissingBaseTier`] when the `"0"` tier is absent.
    pub fn base_price(&self) -> Result<f64> {
        self.meter_rates
            .get(BASE_TIER)
            .copied()
            .ok_or_else(|| RateCardError::MissingBaseTier {
                meter_id: self.meter_id.clone(),
            })
    }

    /// Parsed effective date, if present and RFC 3339
    pub fn effective_at(&self) -> Option<DateTime<Utc>> {
        self.effective_date
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// RateCard response body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RateCard {
    #[serde(deserialize_with = "null_as_default")]
    pub offer_terms: Vec<serde_json::Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub meters: Vec<Meter>,
    pub currency: Option<String>,
    pub locale: Option<String>,
    pub is_tax_included: Option<bool>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

/// Capacity metadata for one VM size in one region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VmCapability {
    /// Backend size name, e.g. `"Standard_D2"`
    pub size: String,
    /// Region code, e.g. `"eastus2"`
    pub region: String,
    pub cores: u32,
    pub memory_mb: u64,
    pub resource_disk_mb: u64,
}

impl VmCapability {
    pub fn key(&self) -> RateKey {
        RateKey::new(self.region.clone(), self.size.clone())
    }
}

/// Composite identity joining pricing and capacity rows
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RateKey {
    pub region: String,
    pub size: String,
}

impl RateKey {
    pub fn new(region: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            size: size.into(),
        }
    }
}

impl fmt::Display for RateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.region, self.size)
    }
}

/// Capacity copied from a [`VmCapability`] onto a [`Rate`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Capacity {
    pub cores: u32,
    pub memory_gb: f64,
    pub disk_gb: u64,
}

impl From<&VmCapability> for Capacity {
    fn from(capability: &VmCapability) -> Self {
        Self {
            cores: capability.cores,
            memory_gb: capability.memory_mb as f64 / 1024.0,
            disk_gb: capability.resource_disk_mb / 1024,
        }
    }
}

/// One row of the pricing table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rate {
    pub size: String,
    pub region: String,
    pub price: f64,
    #[serde(flatten)]
    pub capacity: Option<Capacity>,
}

impl Rate {
    pub fn key(&self) -> RateKey {
        RateKey::new(self.region.clone(), self.size.clone())
    }
}
