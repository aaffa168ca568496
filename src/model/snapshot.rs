use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::asset::AssetSymbol;
use super::balance::BalanceSnapshot;
use super::pool::PoolSnapshot;
use super::price::PriceSet;

/// A captured view of the whole market, used by the offline CLI commands.
///
/// In JSON:
/// `{"prices": {"eth_usd": "2000", "usdc_usd": "1"}, "assets": [{"symbol": "eth", "pool": {...}, "balance": null}]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MarketSnapshot {
    pub prices: PriceSet,
    pub assets: Vec<AssetSnapshot>,
}

/// Pool and wallet state for one asset. Either side may be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AssetSnapshot {
    pub symbol: AssetSymbol,
    /// `null` if the pool read hasn't completed or failed.
    #[serde(default)]
    pub pool: Option<PoolSnapshot>,
    /// `null` if no wallet is connected or the balance read failed.
    #[serde(default)]
    pub balance: Option<BalanceSnapshot>,
}

impl MarketSnapshot {
    /// Snapshot for `symbol`, if the file lists it.
    pub fn asset(&self, symbol: AssetSymbol) -> Option<&AssetSnapshot> {
        self.assets.iter().find(|a| a.symbol == symbol)
    }

    /// Load a snapshot from a JSON file.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading snapshot {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("parsing snapshot {}", path.display()))
    }

    /// A small but complete snapshot, printed by `lend-dash example`.
    pub fn example() -> Self {
        MarketSnapshot {
            prices: PriceSet::new(dec!(2000), dec!(1)),
            assets: vec![
                AssetSnapshot {
                    symbol: AssetSymbol::Eth,
                    pool: Some(PoolSnapshot {
                        total_amount: dec!(100),
                        borrow_amount: dec!(40),
                        ltv: dec!(80),
                        deposit_apy: dec!(1.19),
                        borrow_apy: dec!(3.5),
                    }),
                    balance: Some(BalanceSnapshot::new("2.89039", 18)),
                },
                AssetSnapshot {
                    symbol: AssetSymbol::Usdc,
                    pool: Some(PoolSnapshot {
                        total_amount: dec!(250000),
                        borrow_amount: dec!(120000),
                        ltv: dec!(85),
                        deposit_apy: dec!(2.4),
                        borrow_apy: dec!(4.1),
                    }),
                    balance: None,
                },
            ],
        }
    }
}
