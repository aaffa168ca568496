//! Interfaces to the wallet/contract layer and the hosting UI.
//!
//! View-models never call these directly; the loaders and the deposit
//! session do, and only consume the resolved pending/value/error states.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::deposit::DepositRequest;
use crate::error::{FetchError, SubmitError};
use crate::model::{BalanceSnapshot, PoolSnapshot};

// ── Resolved read state ─────────────────────────────────────────────

/// State of an external asynchronous read.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetch<T> {
    Pending,
    Ready(T),
    Failed(FetchError),
}

impl<T> Fetch<T> {
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Fetch::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// The value, if the read has resolved successfully.
    ///
    /// Pending and failed reads both count as absent.
    pub fn into_option(self) -> Option<T> {
        match self {
            Fetch::Ready(v) => Some(v),
            Fetch::Pending | Fetch::Failed(_) => None,
        }
    }
}

impl<T> From<Result<T, FetchError>> for Fetch<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(v) => Fetch::Ready(v),
            Err(e) => Fetch::Failed(e),
        }
    }
}

// ── Wallet / contract layer ─────────────────────────────────────────

/// Read access to wallet balances and pool state.
#[async_trait]
pub trait WalletReader: Send + Sync {
    /// Balance of `owner`. `token` is an ERC-20 address, `None` for the native asset.
    async fn fetch_balance(
        &self,
        owner: &str,
        token: Option<&str>,
    ) -> Result<BalanceSnapshot, FetchError>;

    /// Pool state for the asset keyed by `asset_contract`.
    async fn read_pool_info(&self, asset_contract: &str) -> Result<PoolSnapshot, FetchError>;
}

/// Write access to the pool's `deposit` call.
#[async_trait]
pub trait DepositSubmitter: Send + Sync {
    /// Send the deposit and wait for it to land. Returns the transaction hash.
    async fn submit_deposit(&self, request: &DepositRequest) -> Result<String, SubmitError>;
}

// ── Hosting UI ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// User-visible, non-blocking notifications (toasts).
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NoticeKind, message: &str);
}

/// The global busy overlay.
pub trait LoadingIndicator: Send + Sync {
    fn set_loading(&self, active: bool);
}

/// Notifier that only logs. Used by the CLI and when no UI is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Success => tracing::info!(notice = "success", "{message}"),
            NoticeKind::Error => tracing::warn!(notice = "error", "{message}"),
        }
    }
}
