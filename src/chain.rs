//! Wallet and pool access over JSON-RPC.

use std::str::FromStr;

use alloy::primitives::utils::format_units;
use alloy::primitives::{Address, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::sol;
use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::config::DashboardConfig;
use crate::deposit::DepositRequest;
use crate::effects::{DepositSubmitter, WalletReader};
use crate::error::{FetchError, SubmitError};
use crate::model::{BalanceSnapshot, PoolSnapshot};

// ── Contract interfaces ─────────────────────────────────────────────

sol! {
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract ILendingPool {
        function getPoolInfo(address token) external view returns (
            uint256 totalAmount,
            uint256 borrowAmount,
            uint256 ltv,
            uint256 depositApy,
            uint256 borrowApy
        );
        function deposit(address token, uint256 amount) external payable;
    }
}

sol! {
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract IERC20 {
        function balanceOf(address account) external view returns (uint256);
        function decimals() external view returns (uint8);
    }
}

// ── Client ──────────────────────────────────────────────────────────

/// Reads balances and pool state, and sends deposits, through one RPC endpoint.
pub struct EvmClient {
    rpc_url: String,
    pool: Address,
    private_key: Option<String>,
}

impl EvmClient {
    pub fn new(rpc_url: &str, pool_address: &str, private_key: Option<String>) -> Result<Self> {
        Ok(EvmClient {
            rpc_url: rpc_url.to_string(),
            pool: crate::config::parse_address(pool_address)?,
            private_key,
        })
    }

    pub fn from_config(config: &DashboardConfig) -> Result<Self> {
        Self::new(&config.rpc_url, &config.pool_address, config.private_key.clone())
    }

    /// True when a signing key is available for deposits.
    pub fn can_write(&self) -> bool {
        self.private_key.is_some()
    }

    fn read_provider(&self) -> Result<impl Provider + Clone, FetchError> {
        let url = self
            .rpc_url
            .parse()
            .map_err(|e| FetchError::Rpc(format!("invalid rpc_url '{}': {e}", self.rpc_url)))?;
        Ok(ProviderBuilder::new().connect_http(url))
    }

    fn write_provider(&self) -> Result<impl Provider + Clone, SubmitError> {
        let key = self.private_key.as_deref().ok_or(SubmitError::MissingSigner)?;
        let signer: alloy::signers::local::PrivateKeySigner = key
            .parse()
            .map_err(|e| SubmitError::Rpc(format!("invalid key: {e}")))?;
        let wallet = alloy::network::EthereumWallet::from(signer);
        let url = self
            .rpc_url
            .parse()
            .map_err(|e| SubmitError::Rpc(format!("invalid rpc_url '{}': {e}", self.rpc_url)))?;
        Ok(ProviderBuilder::new().wallet(wallet).connect_http(url))
    }
}

#[async_trait]
impl WalletReader for EvmClient {
    async fn fetch_balance(
        &self,
        owner: &str,
        token: Option<&str>,
    ) -> Result<BalanceSnapshot, FetchError> {
        let owner = fetch_address(owner)?;
        let provider = self.read_provider()?;

        let (raw, decimals) = match token {
            None => {
                let wei = provider
                    .get_balance(owner)
                    .await
                    .map_err(|e| FetchError::Rpc(e.to_string()))?;
                (wei, 18u8)
            }
            Some(token) => {
                let erc20 = IERC20::new(fetch_address(token)?, &provider);
                let balance = erc20
                    .balanceOf(owner)
                    .call()
                    .await
                    .map_err(|e| FetchError::Rpc(format!("balanceOf: {e}")))?;
                let decimals = erc20
                    .decimals()
                    .call()
                    .await
                    .map_err(|e| FetchError::Rpc(format!("decimals: {e}")))?;
                (balance, decimals)
            }
        };

        let formatted = format_units(raw, decimals).map_err(|e| FetchError::Decode {
            what: "balance".into(),
            reason: e.to_string(),
        })?;
        Ok(BalanceSnapshot::new(trim_fraction(&formatted), decimals))
    }

    async fn read_pool_info(&self, asset_contract: &str) -> Result<PoolSnapshot, FetchError> {
        let token = fetch_address(asset_contract)?;
        let provider = self.read_provider()?;
        let pool = ILendingPool::new(self.pool, &provider);
        let info = pool
            .getPoolInfo(token)
            .call()
            .await
            .map_err(|e| FetchError::Rpc(format!("getPoolInfo: {e}")))?;

        Ok(PoolSnapshot {
            total_amount: to_decimal(info.totalAmount, "totalAmount")?,
            borrow_amount: to_decimal(info.borrowAmount, "borrowAmount")?,
            ltv: to_decimal(info.ltv, "LTV")?,
            deposit_apy: to_decimal(info.depositApy, "depositApy")?,
            borrow_apy: to_decimal(info.borrowApy, "borrowApy")?,
        })
    }
}

#[async_trait]
impl DepositSubmitter for EvmClient {
    async fn submit_deposit(&self, request: &DepositRequest) -> Result<String, SubmitError> {
        let token: Address = request
            .token_address
            .parse()
            .map_err(|_| SubmitError::InvalidAddress(request.token_address.clone()))?;
        let provider = self.write_provider()?;
        let pool = ILendingPool::new(self.pool, &provider);

        let pending = pool
            .deposit(token, U256::from(request.amount_scaled))
            .value(U256::from(request.native_value_wei))
            .send()
            .await
            .map_err(|e| SubmitError::Rpc(format!("deposit: {e}")))?;
        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| SubmitError::Rpc(format!("deposit receipt: {e}")))?;

        let tx_hash = format!("{:?}", receipt.transaction_hash);
        if !receipt.status() {
            return Err(SubmitError::Reverted { tx_hash });
        }
        tracing::info!(%tx_hash, gas_used = receipt.gas_used, "deposit tx mined");
        Ok(tx_hash)
    }
}

// ── Helpers ─────────────────────────────────────────────────────────

fn fetch_address(s: &str) -> Result<Address, FetchError> {
    s.parse().map_err(|_| FetchError::InvalidAddress(s.to_string()))
}

fn to_decimal(value: U256, field: &str) -> Result<Decimal, FetchError> {
    Decimal::from_str(&value.to_string()).map_err(|e| FetchError::Decode {
        what: field.to_string(),
        reason: e.to_string(),
    })
}

/// `"2.890390000000000000"` → `"2.89039"`, `"1.000"` → `"1"`.
fn trim_fraction(s: &str) -> String {
    if !s.contains('.') {
        return s.to_string();
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
