//! Filter and join engine for rate card meters
//!
//! Turns the raw meter list into [`Rate`] rows keyed by [`RateKey`]:
//!
//! 1. keep only `Virtual Machines` meters,
//! 2. keep only meters whose sub-category is `"<known Linux size> VM"`,
//! 3. keep only meters whose region label is a known US region,
//! 4. read the price from the base usage tier.
//!
//! The resulting [`RateTable`] can then be enriched with VM capacity rows
//! sharing the same key.
//!
//! # Examples
//!
//! ```
//! use ratecard::engine::RateEngine;
//! use ratecard_core::types::{Meter, MeterCategory, VmCapability};
//! use std::collections::HashMap;
//!
//! let meter = Meter {
//!     meter_id: "m-1".to_string(),
//!     meter_category: MeterCategory::VirtualMachines,
//!     meter_sub_category: "Standard_D2 VM".to_string(),
//!     meter_region: "US East 2".to_string(),
//!     meter_rates: HashMap::from([("0".to_string(), 0.154)]),
//!     ..Default::default()
//! };
//!
//! let mut table = RateEngine::new().price_meters(&[meter])?;
//! table.enrich(&[VmCapability {
//!     size: "Standard_D2".to_string(),
//!     region: "eastus2".to_string(),
//!     cores: 2,
//!     memory_mb: 7168,
//!     resource_disk_mb: 102400,
//! }]);
//!
//! let rates = table.into_joined_rates();
//! assert_eq!(rates.len(), 1);
//! assert_eq!(rates[0].capacity.unwrap().disk_gb, 100);
//! # Ok::<(), ratecard_core::RateCardError>(())
//! ```

use ratecard_core::catalog::{Region, VmSize};
use ratecard_core::error::Result;
use ratecard_core::types::{Capacity, Meter, MeterCategory, Rate, RateKey, VmCapability};
use std::collections::HashMap;
use tracing::debug;

/// How meters sharing a [`RateKey`] are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// The meter processed last wins, in response order
    #[default]
    LastSeen,
    /// The meter with the latest effective date wins
    LatestEffective,
}

/// True for Virtual Machines meters labelled with a recognized Linux size
pub fn is_linux_vm_meter(meter: &Meter) -> bool {
    meter.meter_category == MeterCategory::VirtualMachines
        && VmSize::from_meter_label(&meter.meter_sub_category).is_some()
}

/// Resolve a meter to its size and region, or `None` if any filter drops it
pub fn classify(meter: &Meter) -> Option<(VmSize, Region)> {
    if !is_linux_vm_meter(meter) {
        return None;
    }
    let size = VmSize::from_meter_label(&meter.meter_sub_category)?;
    let region = Region::from_label(&meter.meter_region)?;
    Some((size, region))
}

/// Builds rate tables from meter lists
#[derive(Debug, Clone, Default)]
pub struct RateEngine {
    policy: DuplicatePolicy,
}

impl RateEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Filter meters and price each surviving (region, size)
    ///
    /// # Errors
    ///
    /// Returns [`ratecard_core::RateCardError::MissingBaseTier`] if a meter
    /// that passed every filter has no base tier price.
    pub fn price_meters(&self, meters: &[Meter]) -> Result<RateTable> {
        let mut candidates: Vec<(&Meter, VmSize, Region)> = meters
            .iter()
            .filter_map(|meter| classify(meter).map(|(size, region)| (meter, size, region)))
            .collect();

        if self.policy == DuplicatePolicy::LatestEffective {
            // Stable: undated meters first, ties keep response order.
            candidates.sort_by_key(|(meter, _, _)| meter.effective_at());
        }

        let mut table = RateTable::default();
        for (meter, size, region) in candidates {
            let price = meter.base_price()?;
            table.insert(Rate {
                size: size.backend_name().to_string(),
                region: region.code().to_string(),
                price,
                capacity: None,
            });
        }

        debug!(
            "{} of {} meters priced into {} rates",
            table.priced_meters,
            meters.len(),
            table.len()
        );
        Ok(table)
    }
}

/// Rates keyed by (region, size)
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    rates: HashMap<RateKey, Rate>,
    priced_meters: usize,
}

impl RateTable {
    /// Insert a rate, replacing any rate already stored under its key
    pub fn insert(&mut self, rate: Rate) -> Option<Rate> {
        self.priced_meters += 1;
        let key = rate.key();
        let previous = self.rates.insert(key, rate);
        if let Some(prev) = &previous {
            debug!("Duplicate meter for {}:{} replaced", prev.region, prev.size);
        }
        previous
    }

    pub fn get(&self, key: &RateKey) -> Option<&Rate> {
        self.rates.get(key)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Copy capacity onto rates sharing a key with `capabilities`
    ///
    /// Returns the number of rates enriched. Capability rows without a
    /// priced rate are skipped.
    pub fn enrich(&mut self, capabilities: &[VmCapability]) -> usize {
        let mut matched = 0;
        for capability in capabilities {
            match self.rates.get_mut(&capability.key()) {
                Some(rate) => {
                    rate.capacity = Some(Capacity::from(capability));
                    matched += 1;
                }
                None => debug!(
                    "{}:{} found in VM sizes but not in rate card",
                    capability.region, capability.size
                ),
            }
        }
        matched
    }

    /// Every priced rate, with or without capacity
    pub fn into_priced_rates(self) -> Vec<Rate> {
        self.rates.into_values().collect()
    }

    /// Only the rates that were joined with capacity data
    pub fn into_joined_rates(self) -> Vec<Rate> {
        self.rates
            .into_values()
            .filter(|rate| {
                if rate.capacity.is_none() {
                    debug!("{}:{} priced but has no VM size data", rate.region, rate.size);
                }
                rate.capacity.is_some()
            })
            .collect()
    }
}
