//! ratecard - Linux VM pricing tables from the Azure RateCard API

use clap::Parser;
use ratecard::{RateCardError, cli::Cli, output::get_formatter, report};
use ratecard_client::AzureBackend;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Report a fatal error and terminate
fn error_exit(error: &RateCardError) -> ! {
    debug!("{error:?}");
    eprintln!("Error: {error}");
    std::process::exit(1)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins when set.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.log_directives()));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let options = match cli.report_options() {
        Ok(options) => options,
        Err(e) => error_exit(&e),
    };

    info!("Running {:?} report", options.kind);

    let backend = AzureBackend::new()
        .with_management_endpoint(&cli.management_endpoint)
        .with_login_endpoint(&cli.login_endpoint)
        .with_inspection(cli.inspect);

    match report::run(&options, &backend).await {
        Ok(rates) => {
            let formatter = get_formatter(cli.json, options.query.currency());
            print!("{}", formatter.format_rates(&rates));
            if cli.json {
                println!();
            }
        }
        Err(e) => error_exit(&e),
    }
}
