//! Output formatting for pricing tables
//!
//! - Table format for human-readable terminal output
//! - JSON format for scripts
//!
//! Rates arrive in no particular order; both formatters sort them by region
//! and then size before rendering.
//!
//! # Examples
//!
//! ```
//! use ratecard::output::get_formatter;
//! use ratecard_core::types::{Capacity, Rate};
//!
//! let rates = vec![Rate {
//!     size: "Standard_D1".to_string(),
//!     region: "eastus".to_string(),
//!     price: 0.077,
//!     capacity: Some(Capacity { cores: 1, memory_gb: 3.5, disk_gb: 50 }),
//! }];
//!
//! let table = get_formatter(false, "USD").format_rates(&rates);
//! assert!(table.contains("Standard_D1"));
//!
//! let json = get_formatter(true, "USD").format_rates(&rates);
//! assert!(json.contains("\"cores\": 1"));
//! ```

use prettytable::{Table, format, row};
use ratecard_core::types::Rate;
use serde_json::json;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format a list of rates
    fn format_rates(&self, rates: &[Rate]) -> String;
}

fn sorted(rates: &[Rate]) -> Vec<&Rate> {
    let mut sorted: Vec<&Rate> = rates.iter().collect();
    sorted.sort_by(|a, b| {
        a.region
            .cmp(&b.region)
            .then_with(|| a.size.cmp(&b.size))
    });
    sorted
}

/// Table formatter for human-readable output
pub struct TableFormatter {
    /// Currency code shown in the price column header
    pub currency: String,
}

impl TableFormatter {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }

    fn format_price(price: f64) -> String {
        format!("{price:.4}")
    }
}

impl OutputFormatter for TableFormatter {
    fn format_rates(&self, rates: &[Rate]) -> String {
        if rates.is_empty() {
            return "No rates found\n".to_string();
        }

        let with_capacity = rates.iter().any(|r| r.capacity.is_some());

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

        let price_title = format!("Price ({}/h)", self.currency);
        if with_capacity {
            table.set_titles(row![
                b -> "Region",
                b -> "Size",
                b -> price_title,
                b -> "Cores",
                b -> "Memory (GB)",
                b -> "Disk (GB)"
            ]);
        } else {
            table.set_titles(row![b -> "Region", b -> "Size", b -> price_title]);
        }

        for rate in sorted(rates) {
            match (&rate.capacity, with_capacity) {
                (Some(capacity), true) => {
                    table.add_row(row![
                        rate.region,
                        rate.size,
                        r -> Self::format_price(rate.price),
                        r -> capacity.cores,
                        r -> format!("{:.2}", capacity.memory_gb),
                        r -> capacity.disk_gb
                    ]);
                }
                (None, true) => {
                    table.add_row(row![
                        rate.region,
                        rate.size,
                        r -> Self::format_price(rate.price),
                        r -> "-",
                        r -> "-",
                        r -> "-"
                    ]);
                }
                (_, false) => {
                    table.add_row(row![
                        rate.region,
                        rate.size,
                        r -> Self::format_price(rate.price)
                    ]);
                }
            }
        }

        format!("{table}\n{} rates\n", rates.len())
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    pub currency: String,
}

impl OutputFormatter for JsonFormatter {
    fn format_rates(&self, rates: &[Rate]) -> String {
        let output = json!({
            "currency": self.currency,
            "rates": sorted(rates),
        });

        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Pick the formatter for the requested output mode
pub fn get_formatter(json: bool, currency: &str) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter {
            currency: currency.to_string(),
        })
    } else {
        Box::new(TableFormatter::new(currency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratecard_core::types::Capacity;

    fn rate(region: &str, size: &str, price: f64, capacity: Option<Capacity>) -> Rate {
        Rate {
            size: size.to_string(),
            region: region.to_string(),
            price,
            capacity,
        }
    }

    #[test]
    fn test_table_sorted_by_region_then_size() {
        let rates = vec![
            rate("westus", "Standard_A1", 0.06, None),
            rate("eastus", "Standard_A2", 0.12, None),
            rate("eastus", "Standard_A1", 0.06, None),
        ];

        let output = TableFormatter::new("USD").format_rates(&rates);
        let east_a1 = output.find("eastus").unwrap();
        let west = output.find("westus").unwrap();
        assert!(east_a1 < west);
        assert!(output.find("Standard_A1").unwrap() < output.find("Standard_A2").unwrap());
        assert!(output.contains("Price (USD/h)"));
        assert!(output.contains("3 rates"));
        assert!(!output.contains("Cores"));
    }

    #[test]
    fn test_table_with_capacity() {
        let rates = vec![rate(
            "eastus2",
            "Standard_D2",
            0.154,
            Some(Capacity {
                cores: 2,
                memory_gb: 7.0,
                disk_gb: 100,
            }),
        )];

        let output = TableFormatter::new("USD").format_rates(&rates);
        assert!(output.contains("Cores"));
        assert!(output.contains("0.1540"));
        assert!(output.contains("7.00"));
        assert!(output.contains("100"));
    }

    #[test]
    fn test_empty_table() {
        let output = TableFormatter::new("USD").format_rates(&[]);
        assert_eq!(output, "No rates found\n");
    }

    #[test]
    fn test_json_output() {
        let rates = vec![
            rate(
                "westus",
                "Standard_F1",
                0.05,
                Some(Capacity {
                    cores: 1,
                    memory_gb: 2.0,
                    disk_gb: 16,
                }),
            ),
            rate("centralus", "Standard_F2", 0.1, None),
        ];

        let output = JsonFormatter {
            currency: "USD".to_string(),
        }
        .format_rates(&rates);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["currency"], "USD");
        assert_eq!(value["rates"][0]["region"], "centralus");
        assert!(value["rates"][0].get("cores").is_none());
        assert_eq!(value["rates"][1]["cores"], 1);
        assert_eq!(value["rates"][1]["memory_gb"], 2.0);
        assert_eq!(value["rates"][1]["disk_gb"], 16);
    }
}
