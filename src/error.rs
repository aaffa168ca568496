use thiserror::Error;

/// A balance or pool read failed.
///
/// Reads that fail leave the affected snapshot absent; the row renders zeros.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("RPC request failed: {0}")]
    Rpc(String),

    #[error("could not decode {what}: {reason}")]
    Decode { what: String, reason: String },

    #[error("invalid address `{0}`")]
    InvalidAddress(String),
}

/// A deposit transaction could not be written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("RPC request failed: {0}")]
    Rpc(String),

    #[error("deposit tx reverted (tx: {tx_hash})")]
    Reverted { tx_hash: String },

    #[error("no signing key configured")]
    MissingSigner,

    #[error("invalid address `{0}`")]
    InvalidAddress(String),
}

/// Converting a decimal amount string to base units failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("`{0}` is not a decimal amount")]
    Invalid(String),

    #[error("`{amount}` does not fit in base units with {decimals} decimals")]
    Overflow { amount: String, decimals: u8 },
}

/// Why a deposit could not be started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DepositError {
    #[error("amount must be greater than zero and at most the wallet balance")]
    InvalidAmount,

    #[error("deposit write is not available (wallet not connected)")]
    WriteUnavailable,

    #[error("a deposit is already in flight")]
    AlreadySubmitted,

    #[error(transparent)]
    Amount(#[from] AmountError),
}
