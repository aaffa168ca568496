//! Lending market table: one row per listed asset.

pub mod row;
pub mod table;

use futures::future::join_all;
use tracing::warn;

use crate::effects::{Fetch, NoticeKind, Notifier, WalletReader};
use crate::model::{AssetMetadata, BalanceSnapshot, MarketSnapshot, PoolSnapshot, PriceSet};

pub use row::{DialogRequest, MarketRow, MarketRowDisplay};
pub use table::render_table;

/// Read pool info (and the wallet balance, when `owner` is connected) for
/// every asset and compute the rows.
///
/// A failed read is reported through `notifier` and leaves that snapshot
/// absent, so the row shows zero figures instead of failing the table.
pub async fn load_rows<R: WalletReader + ?Sized>(
    reader: &R,
    assets: &[AssetMetadata],
    owner: Option<&str>,
    prices: &PriceSet,
    notifier: &dyn Notifier,
) -> Vec<MarketRow> {
    let reads = assets.iter().map(|asset| async move {
        let pool = read_pool(reader, asset, notifier);
        let balance = async {
            match owner {
                Some(owner) => Some(Fetch::from(
                    reader.fetch_balance(owner, asset.balance_token()).await,
                )),
                None => None,
            }
        };
        let (pool, balance) = futures::join!(pool, balance);
        (asset, pool, balance)
    });

    join_all(reads)
        .await
        .into_iter()
        .map(|(asset, pool, balance)| {
            let balance: Option<BalanceSnapshot> = match balance {
                Some(fetch) => {
                    if let Some(e) = fetch.error() {
                        warn!(asset = %asset.symbol, error = %e, "balance read failed");
                        notifier.notify(
                            NoticeKind::Error,
                            &format!("Failed to load {} balance.", asset.symbol.unit()),
                        );
                    }
                    fetch.into_option()
                }
                None => None,
            };
            MarketRow::compute(asset, pool.as_ref(), balance.as_ref(), prices)
        })
        .collect()
}

/// Pool info for one asset. A failed read is logged, reported through
/// `notifier`, and yields `None`.
pub async fn read_pool<R: WalletReader + ?Sized>(
    reader: &R,
    asset: &AssetMetadata,
    notifier: &dyn Notifier,
) -> Option<PoolSnapshot> {
    match reader.read_pool_info(&asset.contract_address).await {
        Ok(pool) => Some(pool),
        Err(e) => {
            warn!(asset = %asset.symbol, error = %e, "pool info read failed");
            notifier.notify(
                NoticeKind::Error,
                &format!("Failed to load {} pool info.", asset.symbol.unit()),
            );
            None
        }
    }
}

/// Rows for an offline snapshot. Assets missing from the snapshot render
/// with absent pool and balance.
pub fn rows_from_snapshot(assets: &[AssetMetadata], snapshot: &MarketSnapshot) -> Vec<MarketRow> {
    assets
        .iter()
        .map(|asset| {
            let entry = snapshot.asset(asset.symbol);
            MarketRow::compute(
                asset,
                entry.and_then(|e| e.pool.as_ref()),
                entry.and_then(|e| e.balance.as_ref()),
                &snapshot.prices,
            )
        })
        .collect()
}
