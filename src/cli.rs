use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use lend_dash::model::AssetSymbol;
use rust_decimal::Decimal;

/// Lending market dashboard: market table, deposit checks and submission.
#[derive(Parser)]
#[command(name = "lend-dash", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Output the JSON schema of the market snapshot file
    Schema,

    /// Output an example market snapshot JSON to stdout
    Example,

    /// Print the lending market table
    Market {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Check a deposit amount for one asset, and optionally send it
    Deposit {
        /// Asset to deposit (eth or usdc)
        #[arg(long)]
        asset: AssetSymbol,

        /// Amount as typed into the deposit field (e.g. "1.5")
        #[arg(long)]
        amount: String,

        #[command(flatten)]
        source: SourceArgs,

        /// Submit the deposit on-chain (requires --config and LEND_DASH_PRIVATE_KEY)
        #[arg(long)]
        send: bool,
    },

    /// Print the LP tokens panel
    LpTokens,
}

/// Where pool and wallet state come from.
#[derive(Args)]
pub struct SourceArgs {
    /// Offline market snapshot JSON (see `lend-dash example`)
    #[arg(long, conflicts_with = "config", required_unless_present = "config")]
    pub snapshot: Option<PathBuf>,

    /// Live dashboard config JSON (rpc_url, pool_address, ...)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the ETH/USD price
    #[arg(long)]
    pub eth_usd: Option<Decimal>,

    /// Override the USDC/USD price
    #[arg(long)]
    pub usdc_usd: Option<Decimal>,
}
