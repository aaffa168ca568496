use std::path::Path;

use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use anyhow::{Context, Result, anyhow, bail};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::asset;
use crate::model::{AssetMetadata, AssetSymbol, PriceSet};

/// Env var holding the hex signing key used for deposits.
pub const PRIVATE_KEY_ENV: &str = "LEND_DASH_PRIVATE_KEY";

/// Per-asset contract overrides, for deployments off mainnet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetAddresses {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usdc: Option<String>,
}

/// Live dashboard configuration, read from a JSON file.
///
/// ```json
/// {
///   "rpc_url": "https://eth.llamarpc.com",
///   "pool_address": "0x...",
///   "wallet_address": "0x...",
///   "assets": {"usdc": "0x..."},
///   "prices": {"eth_usd": "2000", "usdc_usd": "1"}
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub rpc_url: String,
    pub pool_address: String,
    /// Wallet to show balances for. Derived from the signing key when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
    #[serde(default)]
    pub assets: AssetAddresses,
    #[serde(default)]
    pub prices: PriceSet,
    #[serde(skip)]
    pub private_key: Option<String>,
}

impl DashboardConfig {
    /// Read the file, pick up the signing key from the environment and validate.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let mut config: DashboardConfig = serde_json::from_str(&contents)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.private_key = std::env::var(PRIVATE_KEY_ENV).ok().filter(|k| !k.is_empty());
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rpc_url.is_empty() {
            bail!("rpc_url must not be empty");
        }
        parse_address(&self.pool_address).context("pool_address")?;
        if let Some(addr) = &self.wallet_address {
            parse_address(addr).context("wallet_address")?;
        }
        for (symbol, addr) in [("eth", &self.assets.eth), ("usdc", &self.assets.usdc)] {
            if let Some(addr) = addr {
                parse_address(addr).with_context(|| format!("assets.{symbol}"))?;
            }
        }
        if let Some(key) = &self.private_key {
            key.parse::<PrivateKeySigner>()
                .map_err(|e| anyhow!("{PRIVATE_KEY_ENV} is not a valid private key: {e}"))?;
        }
        Ok(())
    }

    /// Registry assets with this deployment's contract overrides applied.
    pub fn assets(&self) -> Vec<AssetMetadata> {
        asset::registry()
            .iter()
            .map(|meta| {
                let override_addr = match meta.symbol {
                    AssetSymbol::Eth => self.assets.eth.as_ref(),
                    AssetSymbol::Usdc => self.assets.usdc.as_ref(),
                };
                match override_addr {
                    Some(addr) => meta.clone().with_contract_address(addr.clone()),
                    None => meta.clone(),
                }
            })
            .collect()
    }

    pub fn asset(&self, symbol: AssetSymbol) -> Option<AssetMetadata> {
        self.assets().into_iter().find(|a| a.symbol == symbol)
    }

    /// Connected wallet: the configured address, else the signer's address.
    pub fn owner(&self) -> Result<Option<String>> {
        if let Some(addr) = &self.wallet_address {
            return Ok(Some(addr.clone()));
        }
        match &self.private_key {
            Some(key) => {
                let signer: PrivateKeySigner = key
                    .parse()
                    .map_err(|e| anyhow!("Invalid private key: {e}"))?;
                Ok(Some(format!("{:?}", signer.address())))
            }
            None => Ok(None),
        }
    }

    /// Apply price overrides from the command line.
    pub fn with_prices(mut self, eth_usd: Option<Decimal>, usdc_usd: Option<Decimal>) -> Self {
        if let Some(p) = eth_usd {
            self.prices.eth_usd = p;
        }
        if let Some(p) = usdc_usd {
            self.prices.usdc_usd = p;
        }
        self
    }
}

pub fn parse_address(s: &str) -> Result<Address> {
    s.parse::<Address>()
        .map_err(|e| anyhow!("invalid address '{s}': {e}"))
}
