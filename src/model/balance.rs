use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::amount::parse_amount;

/// Wallet balance of one asset, already formatted to a decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BalanceSnapshot {
    /// Human-readable balance (e.g. "2.89039").
    pub formatted: String,
    /// Token decimals reported alongside the balance.
    pub decimals: u8,
}

impl BalanceSnapshot {
    pub fn new(formatted: impl Into<String>, decimals: u8) -> Self {
        BalanceSnapshot {
            formatted: formatted.into(),
            decimals,
        }
    }

    /// Parsed balance. `None` if the formatted string isn't a plain decimal.
    pub fn amount(&self) -> Option<Decimal> {
        parse_amount(&self.formatted)
    }
}
