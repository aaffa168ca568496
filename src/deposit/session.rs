use tracing::{info, warn};

use super::form::{DepositForm, PendingDeposit, SubmitOutcome};
use crate::effects::{DepositSubmitter, LoadingIndicator, NoticeKind, Notifier, WalletReader};
use crate::error::DepositError;
use crate::loading::{LoadSource, LoadingState};
use crate::model::{AssetMetadata, BalanceSnapshot};

/// Drives one deposit dialog against the wallet layer.
///
/// Owns the busy-overlay state for the dialog and reports every outcome
/// through the notifier. Nothing here is fatal: failures come back as
/// absent balances or `SubmitOutcome::Failure`.
pub struct DepositSession<'a> {
    notifier: &'a dyn Notifier,
    indicator: &'a dyn LoadingIndicator,
    loading: LoadingState,
}

impl<'a> DepositSession<'a> {
    pub fn new(notifier: &'a dyn Notifier, indicator: &'a dyn LoadingIndicator) -> Self {
        DepositSession {
            notifier,
            indicator,
            loading: LoadingState::default(),
        }
    }

    pub fn loading(&self) -> LoadingState {
        self.loading
    }

    /// Read the connected wallet's balance of `asset`.
    pub async fn load_balance<R: WalletReader + ?Sized>(
        &mut self,
        reader: &R,
        owner: &str,
        asset: &AssetMetadata,
    ) -> Option<BalanceSnapshot> {
        self.transition(self.loading.begin(LoadSource::Balance));
        let result = reader.fetch_balance(owner, asset.balance_token()).await;
        self.transition(self.loading.end(LoadSource::Balance));

        match result {
            Ok(balance) => Some(balance),
            Err(e) => {
                warn!(asset = %asset.symbol, error = %e, "balance read failed");
                self.notifier
                    .notify(NoticeKind::Error, "Failed to load wallet balance.");
                None
            }
        }
    }

    /// Submit the form's current amount and wait for the outcome.
    ///
    /// `submitter` is `None` while no wallet write is available. Errors are
    /// returned only when the deposit never started.
    pub async fn submit<S: DepositSubmitter + ?Sized>(
        &mut self,
        form: &mut DepositForm,
        balance: Option<&BalanceSnapshot>,
        submitter: Option<&S>,
    ) -> Result<SubmitOutcome, DepositError> {
        let Some(submitter) = submitter else {
            return Err(DepositError::WriteUnavailable);
        };
        let pending = form.begin_submit(true, balance)?;
        let outcome = self.send(submitter, &pending).await;
        form.complete(&outcome);
        Ok(outcome)
    }

    /// Send an already-started deposit. The form stays editable meanwhile;
    /// call [`DepositForm::complete`] with the result.
    pub async fn send<S: DepositSubmitter + ?Sized>(
        &mut self,
        submitter: &S,
        pending: &PendingDeposit,
    ) -> SubmitOutcome {
        info!(
            asset = %pending.request.asset,
            amount = %pending.amount,
            native_value_wei = pending.request.native_value_wei,
            "submitting deposit"
        );
        self.transition(self.loading.begin(LoadSource::Write));
        let result = submitter.submit_deposit(&pending.request).await;
        self.transition(self.loading.end(LoadSource::Write));

        match result {
            Ok(tx_hash) => {
                info!(%tx_hash, "deposit confirmed");
                self.notifier.notify(NoticeKind::Success, "Deposit success!");
                SubmitOutcome::Success { tx_hash }
            }
            Err(e) => {
                warn!(error = %e, "deposit failed");
                self.notifier
                    .notify(NoticeKind::Error, &format!("Deposit failed: {e}"));
                SubmitOutcome::Failure(e)
            }
        }
    }

    fn transition(&mut self, next: LoadingState) {
        self.loading = LoadingState::sync(self.loading, next, self.indicator);
    }
}
