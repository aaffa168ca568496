use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format;
use crate::model::{AssetMetadata, AssetSymbol, BalanceSnapshot, PoolSnapshot, PriceSet};

/// Derived figures for one row of the lending market table.
///
/// A pure function of its inputs; the host recomputes it whenever the pool
/// snapshot, the balance snapshot or the prices change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketRow {
    pub symbol: AssetSymbol,
    pub name: String,
    pub unit_price_usd: Decimal,
    pub market_size_usd: Decimal,
    pub total_borrowed_usd: Decimal,
    pub wallet_value_usd: Decimal,

    // Pass-through pool fields, zero while the pool is absent.
    pub ltv: Decimal,
    pub deposit_apy: Decimal,
    pub borrow_apy: Decimal,
    pub total_amount: Decimal,
    pub borrow_amount: Decimal,

    /// Wallet balance as the wallet layer formatted it.
    pub wallet_formatted: Option<String>,
}

/// Emitted when a row is clicked: open the deposit dialog for `asset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogRequest {
    pub asset: AssetSymbol,
}

impl MarketRow {
    pub fn compute(
        asset: &AssetMetadata,
        pool: Option<&PoolSnapshot>,
        balance: Option<&BalanceSnapshot>,
        prices: &PriceSet,
    ) -> Self {
        let unit_price_usd = prices.price_of(asset.symbol);
        let pool = pool.cloned().unwrap_or_default();
        let wallet_amount = balance.and_then(BalanceSnapshot::amount).unwrap_or(Decimal::ZERO);

        let row = MarketRow {
            symbol: asset.symbol,
            name: asset.name.clone(),
            unit_price_usd,
            market_size_usd: usd_value(pool.total_amount, unit_price_usd),
            total_borrowed_usd: usd_value(pool.borrow_amount, unit_price_usd),
            wallet_value_usd: usd_value(wallet_amount, unit_price_usd),
            ltv: pool.ltv,
            deposit_apy: pool.deposit_apy,
            borrow_apy: pool.borrow_apy,
            total_amount: pool.total_amount,
            borrow_amount: pool.borrow_amount,
            wallet_formatted: balance.map(|b| b.formatted.clone()),
        };

        tracing::debug!(
            asset = %row.symbol,
            market_size_usd = %row.market_size_usd,
            total_borrowed_usd = %row.total_borrowed_usd,
            wallet_value_usd = %row.wallet_value_usd,
            "recomputed market row"
        );
        row
    }

    /// Row click: ask the host to open the dialog for this asset.
    pub fn click(&self) -> DialogRequest {
        DialogRequest { asset: self.symbol }
    }

    /// Strings rendered in the table cells.
    pub fn display(&self) -> MarketRowDisplay {
        let unit = self.symbol.unit();
        let wallet_amount = self
            .wallet_formatted
            .as_deref()
            .filter(|s| !s.is_empty())
            .and_then(crate::model::amount::parse_amount)
            .map(|v| format::to_fixed(v, 4))
            .unwrap_or_else(|| "0".to_string());

        MarketRowDisplay {
            name: self.name.clone(),
            unit_price: format::usd(self.unit_price_usd),
            ltv: format::percent(self.ltv),
            deposit_apy: format::percent(self.deposit_apy),
            market_size: format!("{} {unit}", format::plain(self.total_amount)),
            market_size_usd: format::usd(self.market_size_usd),
            borrow_apy: format::percent(self.borrow_apy),
            total_borrowed: format!("{} {unit}", format::plain(self.borrow_amount)),
            total_borrowed_usd: format::usd(self.total_borrowed_usd),
            wallet: format!("{wallet_amount} {unit}"),
            wallet_usd: format::usd(self.wallet_value_usd),
        }
    }
}

/// `amount * price`, saturating instead of panicking on `Decimal` overflow.
fn usd_value(amount: Decimal, price: Decimal) -> Decimal {
    amount.checked_mul(price).unwrap_or(Decimal::MAX)
}

/// Cell text for one market row. USD figures carry 4 decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketRowDisplay {
    pub name: String,
    pub unit_price: String,
    pub ltv: String,
    pub deposit_apy: String,
    pub market_size: String,
    pub market_size_usd: String,
    pub borrow_apy: String,
    pub total_borrowed: String,
    pub total_borrowed_usd: String,
    pub wallet: String,
    pub wallet_usd: String,
}
