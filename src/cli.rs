//! CLI interface for ratecard
//!
//! # Example
//!
//! ```bash
//! # Linux VM prices joined with core/memory/disk, all US regions
//! ratecard
//!
//! # Prices only, as JSON, newest meter wins on duplicates
//! ratecard prices --json --latest
//!
//! # Different offer and currency, credentials from a custom path
//! ratecard --offer MS-AZR-0121p --currency EUR --credentials ./sp.json table
//! ```

use clap::{Parser, Subcommand};
use ratecard_client::{DEFAULT_LOGIN_ENDPOINT, DEFAULT_MANAGEMENT_ENDPOINT};
use ratecard_core::credentials::Credentials;
use ratecard_core::error::Result;
use ratecard_core::types::{PAY_AS_YOU_GO_OFFER, RateCardQuery};
use std::path::PathBuf;

use crate::engine::DuplicatePolicy;
use crate::report::{ReportKind, ReportOptions};

/// Build Linux VM pricing tables from the Azure RateCard API
#[derive(Parser, Debug, Clone)]
#[command(name = "ratecard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Show informational output (default only shows warnings and errors)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Log every HTTP request and response
    #[arg(long, global = true)]
    pub inspect: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Resolve duplicate meters by latest effective date instead of response order
    #[arg(long, global = true)]
    pub latest: bool,

    /// Credential file (defaults to ~/.azure/credentials.json)
    #[arg(long, env = "RATECARD_CREDENTIALS", global = true)]
    pub credentials: Option<PathBuf>,

    /// Offer durable identifier
    #[arg(long, default_value = PAY_AS_YOU_GO_OFFER, global = true)]
    pub offer: String,

    /// Currency code
    #[arg(long, default_value = "USD", global = true)]
    pub currency: String,

    /// Locale
    #[arg(long, default_value = "en-US", global = true)]
    pub locale: String,

    /// Region info (billing geography)
    #[arg(long, default_value = "US", global = true)]
    pub region_info: String,

    /// Resource Manager endpoint
    #[arg(
        long,
        env = "RATECARD_MANAGEMENT_ENDPOINT",
        default_value = DEFAULT_MANAGEMENT_ENDPOINT,
        global = true
    )]
    pub management_endpoint: String,

    /// Active Directory endpoint
    #[arg(
        long,
        env = "RATECARD_LOGIN_ENDPOINT",
        default_value = DEFAULT_LOGIN_ENDPOINT,
        global = true
    )]
    pub login_endpoint: String,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Report to produce
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// List priced Linux VM meters per region and size
    Prices,

    /// Join prices with VM core, memory, and disk sizes (default)
    Table,
}

impl Cli {
    /// Log filter used when `RUST_LOG` is unset
    pub fn log_directives(&self) -> &'static str {
        if self.verbose {
            "ratecard=info"
        } else if self.inspect {
            "ratecard=warn,ratecard_client=info"
        } else {
            "ratecard=warn"
        }
    }

    pub fn report_kind(&self) -> ReportKind {
        match self.command {
            Some(Command::Prices) => ReportKind::Prices,
            Some(Command::Table) | None => ReportKind::Table,
        }
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        if self.latest {
            DuplicatePolicy::LatestEffective
        } else {
            DuplicatePolicy::LastSeen
        }
    }

    /// Build report options, validating the query and resolving the credential path
    pub fn report_options(&self) -> Result<ReportOptions> {
        let query = RateCardQuery::new(
            &self.offer,
            &self.currency,
            &self.locale,
            &self.region_info,
        )?;

        let credentials_path = match &self.credentials {
            Some(path) => path.clone(),
            None => Credentials::default_path()?,
        };

        Ok(ReportOptions::new(credentials_path)
            .with_query(query)
            .with_kind(self.report_kind())
            .with_policy(self.duplicate_policy()))
    }
}
