use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ── Asset symbol ─────────────────────────────────────────────────────

/// Assets listed in the lending market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum AssetSymbol {
    /// Native ether. Deposited through the pool as WETH.
    Eth,
    Usdc,
}

impl AssetSymbol {
    /// True for the chain's native asset, whose deposits carry a `value`.
    pub fn is_native(self) -> bool {
        matches!(self, AssetSymbol::Eth)
    }

    /// Token decimals used when no wallet balance has been read yet.
    pub fn default_decimals(self) -> u8 {
        match self {
            AssetSymbol::Eth => 18,
            AssetSymbol::Usdc => 6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AssetSymbol::Eth => "eth",
            AssetSymbol::Usdc => "usdc",
        }
    }

    /// Ticker shown next to amounts (`ETH`, `USDC`).
    pub fn unit(self) -> &'static str {
        match self {
            AssetSymbol::Eth => "ETH",
            AssetSymbol::Usdc => "USDC",
        }
    }
}

impl fmt::Display for AssetSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetSymbol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "eth" => Ok(AssetSymbol::Eth),
            "usdc" => Ok(AssetSymbol::Usdc),
            other => Err(format!("unknown asset '{other}', expected 'eth' or 'usdc'")),
        }
    }
}

// ── Asset metadata ───────────────────────────────────────────────────

/// Static description of a listed asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetMetadata {
    pub symbol: AssetSymbol,
    /// Display name (e.g. "Ethereum").
    pub name: String,
    /// Icon path served by the dashboard.
    pub img_src: String,
    /// 0x-prefixed ERC-20 contract the pool keys this asset by.
    pub contract_address: String,
}

impl AssetMetadata {
    /// Token to read the wallet balance of. `None` means the native balance.
    pub fn balance_token(&self) -> Option<&str> {
        if self.symbol.is_native() {
            None
        } else {
            Some(&self.contract_address)
        }
    }

    /// Token address passed to the pool's `deposit` call.
    pub fn deposit_token(&self) -> &str {
        &self.contract_address
    }

    /// Same asset with a different contract address (testnet deployments).
    pub fn with_contract_address(mut self, address: impl Into<String>) -> Self {
        self.contract_address = address.into();
        self
    }
}

// ── Registry ─────────────────────────────────────────────────────────

static ASSET_REGISTRY: LazyLock<Vec<AssetMetadata>> = LazyLock::new(|| {
    vec![
        AssetMetadata {
            symbol: AssetSymbol::Eth,
            name: "Ethereum".into(),
            img_src: "/assets/images/eth.png".into(),
            contract_address: "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2".into(),
        },
        AssetMetadata {
            symbol: AssetSymbol::Usdc,
            name: "USD Coin".into(),
            img_src: "/assets/images/usdc.png".into(),
            contract_address: "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48".into(),
        },
    ]
});

/// All listed assets, in table order.
pub fn registry() -> &'static [AssetMetadata] {
    &ASSET_REGISTRY
}

/// Metadata for one asset.
pub fn metadata(symbol: AssetSymbol) -> &'static AssetMetadata {
    match symbol {
        AssetSymbol::Eth => &ASSET_REGISTRY[0],
        AssetSymbol::Usdc => &ASSET_REGISTRY[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_is_uppercase_symbol() {
        for symbol in [AssetSymbol::Eth, AssetSymbol::Usdc] {
            assert_eq!(symbol.unit(), symbol.as_str().to_uppercase());
        }
        assert_eq!(metadata(AssetSymbol::Usdc).symbol.unit(), "USDC");
    }
}
