use anyhow::Result;
use lend_dash::chain::EvmClient;
use lend_dash::effects::LogNotifier;
use lend_dash::market;
use lend_dash::model::asset;

use super::{Source, block_on, load_source};
use crate::cli::SourceArgs;

/// Entry point for the `market` command.
pub fn run(args: &SourceArgs) -> Result<()> {
    let rows = match load_source(args)? {
        Source::Snapshot(snapshot) => market::rows_from_snapshot(asset::registry(), &snapshot),
        Source::Live(config) => {
            let client = EvmClient::from_config(&config)?;
            let owner = config.owner()?;
            if owner.is_none() {
                println!("No wallet connected; wallet column shows 0.");
            }
            let assets = config.assets();
            block_on(market::load_rows(
                &client,
                &assets,
                owner.as_deref(),
                &config.prices,
                &LogNotifier,
            ))?
        }
    };

    print!("{}", market::render_table(&rows));
    Ok(())
}
