use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::asset::AssetSymbol;

/// USD prices for the listed assets, refreshed outside this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PriceSet {
    pub eth_usd: Decimal,
    pub usdc_usd: Decimal,
}

impl PriceSet {
    pub fn new(eth_usd: Decimal, usdc_usd: Decimal) -> Self {
        PriceSet { eth_usd, usdc_usd }
    }

    /// USD price of one unit of `symbol`.
    pub fn price_of(&self, symbol: AssetSymbol) -> Decimal {
        match symbol {
            AssetSymbol::Eth => self.eth_usd,
            AssetSymbol::Usdc => self.usdc_usd,
        }
    }
}
