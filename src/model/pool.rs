use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Point-in-time read of one asset's pool state, as returned by `getPoolInfo`.
///
/// Values are passed through as the pool reports them; rates are in percent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PoolSnapshot {
    /// Total amount supplied to the pool, in asset units.
    pub total_amount: Decimal,
    /// Total amount currently borrowed, in asset units.
    pub borrow_amount: Decimal,
    /// Loan-to-value ratio, percent.
    #[serde(rename = "LTV")]
    pub ltv: Decimal,
    pub deposit_apy: Decimal,
    pub borrow_apy: Decimal,
}
