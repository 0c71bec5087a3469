//! Common test utilities for ratecard integration tests
//!
//! Builders for meters and capability rows, a credential file helper, and an
//! in-memory [`Backend`] that records every call it receives.

#![allow(dead_code)]

use async_trait::async_trait;
use ratecard::{Credentials, Meter, MeterCategory, RateCard, RateCardQuery, Result, VmCapability};
use ratecard_client::{AccessToken, Backend};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;

/// Builder for RateCard meters
pub struct MeterBuilder {
    meter: Meter,
}

impl MeterBuilder {
    /// A Virtual Machines meter priced at 0.1 in the base tier
    pub fn new(sub_category: &str, region: &str) -> Self {
        Self {
            meter: Meter {
                meter_id: format!("{region}/{sub_category}"),
                meter_category: MeterCategory::VirtualMachines,
                meter_sub_category: sub_category.to_string(),
                unit: "Hours".to_string(),
                meter_region: region.to_string(),
                meter_rates: HashMap::from([("0".to_string(), 0.1)]),
                effective_date: None,
                included_quantity: 0.0,
            },
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.meter.meter_id = id.to_string();
        self
    }

    pub fn category(mut self, category: MeterCategory) -> Self {
        self.meter.meter_category = category;
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.meter.meter_rates.insert("0".to_string(), price);
        self
    }

    pub fn effective(mut self, date: &str) -> Self {
        self.meter.effective_date = Some(date.to_string());
        self
    }

    pub fn without_base_tier(mut self) -> Self {
        self.meter.meter_rates.remove("0");
        self
    }

    pub fn build(self) -> Meter {
        self.meter
    }
}

pub fn capability(region: &str, size: &str, cores: u32, memory_mb: u64, disk_mb: u64) -> VmCapability {
    VmCapability {
        size: size.to_string(),
        region: region.to_string(),
        cores,
        memory_mb,
        resource_disk_mb: disk_mb,
    }
}

/// Write a valid credential file into a fresh temp dir
pub fn credential_file() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("credentials.json");
    std::fs::write(
        &path,
        r#"{"clientID":"app","clientSecret":"secret","tenantID":"tenant","subscriptionID":"sub-1"}"#,
    )
    .unwrap();
    (dir, path)
}

/// In-memory backend recording each call
#[derive(Default)]
pub struct MockBackend {
    pub rate_card: RateCard,
    pub vm_sizes: HashMap<String, Vec<VmCapability>>,
    pub fail_vm_sizes_in: Option<String>,
    pub calls: Mutex<Vec<String>>,
}

impl MockBackend {
    pub fn new(meters: Vec<Meter>) -> Self {
        Self {
            rate_card: RateCard {
                meters,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn with_vm_sizes(mut self, location: &str, sizes: Vec<VmCapability>) -> Self {
        self.vm_sizes.insert(location.to_string(), sizes);
        self
    }

    pub fn failing_vm_sizes_in(mut self, location: &str) -> Self {
        self.fail_vm_sizes_in = Some(location.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn authorize(&self, credentials: &Credentials) -> Result<AccessToken> {
        self.record(format!("authorize:{}", credentials.tenant_id));
        Ok(AccessToken::new("mock-token"))
    }

    async fn rate_card(
        &self,
        credentials: &Credentials,
        _token: &AccessToken,
        query: &RateCardQuery,
    ) -> Result<RateCard> {
        self.record(format!(
            "rate_card:{}:{}",
            credentials.subscription_id,
            query.filter_expression()
        ));
        Ok(self.rate_card.clone())
    }

    async fn vm_sizes(
        &self,
        _credentials: &Credentials,
        _token: &AccessToken,
        location: &str,
    ) -> Result<Vec<VmCapability>> {
        self.record(format!("vm_sizes:{location}"));
        if self.fail_vm_sizes_in.as_deref() == Some(location) {
            return Err(ratecard::RateCardError::Status {
                service: "VirtualMachineSizes",
                status: 503,
                body: String::new(),
            });
        }
        Ok(self.vm_sizes.get(location).cloned().unwrap_or_default())
    }
}
