//! Pricing report pipeline
//!
//! Runs the whole fetch sequentially: load credentials, acquire a token,
//! fetch the rate card, price the meters and, for the joined report, list VM
//! sizes region by region and enrich the table. Any failure aborts the run.

use ratecard_client::Backend;
use ratecard_core::catalog::Region;
use ratecard_core::credentials::Credentials;
use ratecard_core::error::Result;
use ratecard_core::types::{Rate, RateCardQuery};
use std::path::PathBuf;
use tracing::info;

use crate::engine::{DuplicatePolicy, RateEngine};

/// Which rows the report emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportKind {
    /// Every priced Linux VM meter, without capacity
    Prices,
    /// Priced rows joined with VM capacity
    #[default]
    Table,
}

/// Inputs to one report run
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub credentials_path: PathBuf,
    pub query: RateCardQuery,
    pub kind: ReportKind,
    pub policy: DuplicatePolicy,
}

impl ReportOptions {
    pub fn new(credentials_path: impl Into<PathBuf>) -> Self {
        Self {
            credentials_path: credentials_path.into(),
            query: RateCardQuery::default(),
            kind: ReportKind::default(),
            policy: DuplicatePolicy::default(),
        }
    }

    pub fn with_query(mut self, query: RateCardQuery) -> Self {
        self.query = query;
        self
    }

    pub fn with_kind(mut self, kind: ReportKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Run a report against `backend`
///
/// The credential file is read before any remote call, so a bad file never
/// reaches the network.
pub async fn run<B: Backend + ?Sized>(options: &ReportOptions, backend: &B) -> Result<Vec<Rate>> {
    let credentials = Credentials::load(&options.credentials_path).await?;
    info!(
        "Loaded credentials for subscription {}",
        credentials.subscription_id
    );

    let token = backend.authorize(&credentials).await?;

    let card = backend
        .rate_card(&credentials, &token, &options.query)
        .await?;
    info!("Fetched rate card with {} meters", card.meters.len());

    let mut table = RateEngine::new()
        .with_policy(options.policy)
        .price_meters(&card.meters)?;
    info!("{} Linux VM rates in recognized regions", table.len());

    if options.kind == ReportKind::Prices {
        return Ok(table.into_priced_rates());
    }

    for region in Region::ALL {
        let capabilities = backend
            .vm_sizes(&credentials, &token, region.code())
            .await?;
        let matched = table.enrich(&capabilities);
        info!(
            "{}: {} of {} VM sizes matched a rate",
            region.code(),
            matched,
            capabilities.len()
        );
    }

    Ok(table.into_joined_rates())
}
