//! Core types, credentials, and catalog data for ratecard
//!
//! This crate provides the foundational types, error handling, the
//! credential loader, and the static Linux VM size / US region tables
//! used by the other ratecard crates.

pub mod catalog;
pub mod credentials;
pub mod error;
pub mod types;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use catalog::{Region, VmSize};
pub use credentials::Credentials;
pub use error::{RateCardError, Result};
pub use types::{
    Capacity, Meter, MeterCategory, Rate, RateCard, RateCardQuery, RateKey, VmCapability,
};
