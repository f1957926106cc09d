use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use stockcast_core::ProductId;
use stockcast_infra::{EngineConfig, StoreSnapshot};

#[derive(Debug, Parser)]
#[command(
    name = "stockcast-report",
    about = "Forecast, seasonal trends and replenishment parameters for one product",
    version
)]
struct Cli {
    #[arg(help = "JSON snapshot of prediction records and seasonal patterns")]
    snapshot: PathBuf,

    #[arg(help = "Product id (UUID)")]
    product: ProductId,

    #[arg(
        long,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Months to forecast; defaults to STOCKCAST_DEFAULT_MONTHS_AHEAD or 3"
    )]
    months_ahead: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    stockcast_observability::init();

    let cli = Cli::parse();
    let config = EngineConfig::from_env()?;
    let store = StoreSnapshot::from_path(&cli.snapshot)
        .and_then(StoreSnapshot::into_store)
        .with_context(|| format!("loading {}", cli.snapshot.display()))?;

    tracing::info!(
        product = %cli.product,
        snapshot = %cli.snapshot.display(),
        "building planning report"
    );

    let report =
        stockcast_report::build_report(Arc::new(store), &config, cli.product, cli.months_ahead)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
