pub mod deposit;
pub mod example;
pub mod lp_tokens;
pub mod market;

use anyhow::{Context, Result, bail};
use lend_dash::config::DashboardConfig;
use lend_dash::effects::LoadingIndicator;
use lend_dash::model::MarketSnapshot;

use crate::cli::SourceArgs;

/// Resolved `--snapshot` / `--config` input.
pub enum Source {
    Snapshot(MarketSnapshot),
    Live(DashboardConfig),
}

pub fn load_source(args: &SourceArgs) -> Result<Source> {
    match (&args.snapshot, &args.config) {
        (Some(path), None) => {
            let mut snapshot = MarketSnapshot::load(path)?;
            if let Some(p) = args.eth_usd {
                snapshot.prices.eth_usd = p;
            }
            if let Some(p) = args.usdc_usd {
                snapshot.prices.usdc_usd = p;
            }
            Ok(Source::Snapshot(snapshot))
        }
        (None, Some(path)) => {
            let config = DashboardConfig::load(path)?.with_prices(args.eth_usd, args.usdc_usd);
            Ok(Source::Live(config))
        }
        _ => bail!("pass exactly one of --snapshot or --config"),
    }
}

/// Run a future on a fresh runtime, with the TLS provider the RPC client needs.
pub fn block_on<F: std::future::Future>(fut: F) -> Result<F::Output> {
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
    let rt = tokio::runtime::Runtime::new().context("creating tokio runtime")?;
    Ok(rt.block_on(fut))
}

/// Busy overlay for the terminal: a log line per open/close.
pub struct ConsoleIndicator;

impl LoadingIndicator for ConsoleIndicator {
    fn set_loading(&self, active: bool) {
        if active {
            tracing::info!("waiting on wallet...");
        } else {
            tracing::info!("done");
        }
    }
}
