//! ratecard - Linux VM pricing tables from the Azure RateCard API
//!
//! This library provides functionality to:
//! - Fetch a rate card for an offer, currency, locale and billing geography
//! - Filter its meters down to Linux VM sizes in US regions
//! - Join prices with VM core, memory and disk sizes per region
//! - Render the result as a table or JSON
//!
//! # Examples
//!
//! ```no_run
//! use ratecard::report::{self, ReportOptions};
//! use ratecard_client::AzureBackend;
//!
//! #[tokio::main]
//! async fn main() -> ratecard::Result<()> {
//!     let options = ReportOptions::new("/home/me/.azure/credentials.json");
//!     let rates = report::run(&options, &AzureBackend::new()).await?;
//!
//!     for rate in &rates {
//!         println!("{} {} {:.4}", rate.region, rate.size, rate.price);
//!     }
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod engine;
pub mod output;
pub mod report;

// Re-export commonly used types
pub use ratecard_core::{
    Capacity, Credentials, Meter, MeterCategory, Rate, RateCard, RateCardError, RateCardQuery,
    RateKey, Region, Result, VmCapability, VmSize,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
