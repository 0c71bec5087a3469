//! Shared test utilities for unit tests
//!
//! Integration tests cannot see this module because it is `#[cfg(test)]`;
//! they carry their own builders in `tests/common/mod.rs`.

use crate::types::{Meter, MeterCategory};
use std::collections::HashMap;

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

    #[allow(dead_code)]
    pub fn price(mut self, price: f64) -> Self {
        self.meter.meter_rates.insert("0".to_string(), price);
        self
    }

    pub fn without_base_tier(mut self) -> Self {
        self.meter.meter_rates.clear();
        self
    }

    pub fn build(self) -> Meter {
        self.meter
    }
}
