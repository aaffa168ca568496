use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::wei;
use crate::error::DepositError;
use crate::format;
use crate::model::amount::{is_amount_literal, parse_amount};
use crate::model::{AssetMetadata, AssetSymbol, BalanceSnapshot, DepositAmount, PoolSnapshot};

// ── Pure rules ──────────────────────────────────────────────────────

/// Whether a keystroke's resulting text may replace the current amount.
pub fn accept_keystroke(candidate: &str) -> bool {
    is_amount_literal(candidate)
}

/// `0 < amount <= balance`. False when the balance is absent or either
/// side doesn't parse.
pub fn is_amount_valid(raw_amount: &str, balance: Option<&BalanceSnapshot>) -> bool {
    let Some(amount) = parse_amount(raw_amount) else {
        return false;
    };
    let Some(available) = balance.and_then(BalanceSnapshot::amount) else {
        return false;
    };
    amount > Decimal::ZERO && amount <= available
}

/// Submit is enabled only with a usable write and a valid amount.
pub fn can_submit(
    write_available: bool,
    raw_amount: &str,
    balance: Option<&BalanceSnapshot>,
) -> bool {
    write_available && is_amount_valid(raw_amount, balance)
}

/// Half the wallet balance, or `"0"` without one.
pub fn half(balance: Option<&BalanceSnapshot>) -> String {
    match balance.and_then(BalanceSnapshot::amount) {
        Some(v) => format::plain(v / Decimal::from(2)),
        None => "0".to_string(),
    }
}

/// The full wallet balance as formatted (trimmed), or `"0"` without one.
pub fn max(balance: Option<&BalanceSnapshot>) -> String {
    match balance {
        Some(b) if !b.formatted.trim().is_empty() && b.amount().is_some() => {
            b.formatted.trim().to_string()
        }
        _ => "0".to_string(),
    }
}

// ── Form state ──────────────────────────────────────────────────────

/// Where the amount field is in the deposit lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepositPhase {
    /// Keystrokes are validated; nothing external happens.
    Editing,
    /// A deposit write is in flight. Edits still apply but don't reach it.
    Submitted,
}

/// How an in-flight deposit ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Success { tx_hash: String },
    Failure(crate::error::SubmitError),
}

/// Arguments of the pool's `deposit` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositRequest {
    pub asset: AssetSymbol,
    /// ERC-20 the pool receives (WETH for native deposits).
    pub token_address: String,
    /// `amount` argument, scaled by the token decimals.
    pub amount_scaled: u128,
    /// Native `value` attached to the transaction.
    pub native_value_wei: u128,
}

/// A deposit that has left the form. Owns its request, so later edits to
/// the form never change what is being sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDeposit {
    pub request: DepositRequest,
    pub amount: String,
}

/// Info lines under the amount field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositSummary {
    /// `Max: <balance to 4dp> <SYMBOL>`.
    pub max_line: String,
    pub apy: String,
    pub wallet: String,
}

/// View-model of the deposit tab for one asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositForm {
    asset: AssetMetadata,
    amount: DepositAmount,
    phase: DepositPhase,
}

impl DepositForm {
    pub fn new(asset: AssetMetadata) -> Self {
        DepositForm {
            asset,
            amount: DepositAmount::default(),
            phase: DepositPhase::Editing,
        }
    }

    pub fn asset(&self) -> &AssetMetadata {
        &self.asset
    }

    pub fn amount(&self) -> &str {
        self.amount.as_str()
    }

    pub fn phase(&self) -> DepositPhase {
        self.phase
    }

    /// Apply a keystroke. Returns false, leaving the amount untouched, if rejected.
    pub fn edit(&mut self, candidate: &str) -> bool {
        self.amount.edit(candidate)
    }

    pub fn set_half(&mut self, balance: Option<&BalanceSnapshot>) {
        self.amount.fill(&half(balance));
    }

    pub fn set_max(&mut self, balance: Option<&BalanceSnapshot>) {
        self.amount.fill(&max(balance));
    }

    pub fn is_valid(&self, balance: Option<&BalanceSnapshot>) -> bool {
        is_amount_valid(self.amount.as_str(), balance)
    }

    pub fn can_submit(&self, write_available: bool, balance: Option<&BalanceSnapshot>) -> bool {
        self.phase == DepositPhase::Editing
            && can_submit(write_available, self.amount.as_str(), balance)
    }

    /// Build the deposit call for the current amount.
    ///
    /// Token amounts scale by the decimals the wallet reported, falling back
    /// to the asset's known decimals when no balance has been read.
    pub fn request(
        &self,
        balance: Option<&BalanceSnapshot>,
    ) -> Result<DepositRequest, DepositError> {
        let raw = self.amount.as_str();
        let decimals = balance
            .map(|b| b.decimals)
            .unwrap_or_else(|| self.asset.symbol.default_decimals());
        Ok(DepositRequest {
            asset: self.asset.symbol,
            token_address: self.asset.deposit_token().to_string(),
            amount_scaled: wei::scaled_amount(raw, decimals)?,
            native_value_wei: wei::native_value_wei(raw, self.asset.symbol)?,
        })
    }

    /// Move to `Submitted` and hand out the request to send.
    pub fn begin_submit(
        &mut self,
        write_available: bool,
        balance: Option<&BalanceSnapshot>,
    ) -> Result<PendingDeposit, DepositError> {
        if self.phase == DepositPhase::Submitted {
            return Err(DepositError::AlreadySubmitted);
        }
        if !write_available {
            return Err(DepositError::WriteUnavailable);
        }
        if !self.is_valid(balance) {
            return Err(DepositError::InvalidAmount);
        }
        let request = self.request(balance)?;
        if request.amount_scaled == 0 {
            return Err(DepositError::InvalidAmount);
        }
        self.phase = DepositPhase::Submitted;
        Ok(PendingDeposit {
            request,
            amount: self.amount.as_str().to_string(),
        })
    }

    /// Back to `Editing`. The amount is left as it is for either outcome.
    pub fn complete(&mut self, outcome: &SubmitOutcome) {
        tracing::debug!(asset = %self.asset.symbol, ?outcome, "deposit finished");
        self.phase = DepositPhase::Editing;
    }

    pub fn summary(
        &self,
        pool: Option<&PoolSnapshot>,
        balance: Option<&BalanceSnapshot>,
    ) -> DepositSummary {
        let unit = self.asset.symbol.unit();
        let available = balance.and_then(BalanceSnapshot::amount).unwrap_or(Decimal::ZERO);
        let apy = pool.map(|p| p.deposit_apy).unwrap_or(Decimal::ZERO);
        DepositSummary {
            max_line: format!("Max: {} {unit}", format::to_fixed(available, 4)),
            apy: format::percent(apy),
            wallet: format!("{} {unit}", format::plain(available)),
        }
    }
}
