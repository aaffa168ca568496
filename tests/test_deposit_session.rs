use std::sync::Mutex;

use async_trait::async_trait;

use lend_dash::deposit::{DepositForm, DepositPhase, DepositRequest, DepositSession, SubmitOutcome};
use lend_dash::effects::{DepositSubmitter, LoadingIndicator, NoticeKind, Notifier, WalletReader};
use lend_dash::error::{DepositError, FetchError, SubmitError};
use lend_dash::loading::LoadSource;
use lend_dash::model::asset::{self, AssetSymbol};
use lend_dash::model::{BalanceSnapshot, PoolSnapshot};

const OWNER: &str = "0x0000000000000000000000000000000000000001";

// ── Mocks ───────────────────────────────────────────────────────────

#[derive(Default)]
struct RecordingNotifier(Mutex<Vec<(NoticeKind, String)>>);

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        self.0.lock().unwrap().push((kind, message.to_string()));
    }
}

impl RecordingNotifier {
    fn notices(&self) -> Vec<(NoticeKind, String)> {
        self.0.lock().unwrap().clone()
    }
}

#[derive(Default)]
struct RecordingIndicator(Mutex<Vec<bool>>);

impl LoadingIndicator for RecordingIndicator {
    fn set_loading(&self, active: bool) {
        self.0.lock().unwrap().push(active);
    }
}

/// Submitter that records requests and answers with a canned result.
struct MockSubmitter {
    result: Result<String, SubmitError>,
    seen: Mutex<Vec<DepositRequest>>,
}

impl MockSubmitter {
    fn ok() -> Self {
        Self {
            result: Ok("0xfeed".into()),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn failing(err: SubmitError) -> Self {
        Self {
            result: Err(err),
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl DepositSubmitter for MockSubmitter {
    async fn submit_deposit(&self, request: &DepositRequest) -> Result<String, SubmitError> {
        self.seen.lock().unwrap().push(request.clone());
        self.result.clone()
    }
}

struct MockReader {
    balance: Result<BalanceSnapshot, FetchError>,
}

#[async_trait]
impl WalletReader for MockReader {
    async fn fetch_balance(
        &self,
        _owner: &str,
        _token: Option<&str>,
    ) -> Result<BalanceSnapshot, FetchError> {
        self.balance.clone()
    }

    async fn read_pool_info(&self, _asset_contract: &str) -> Result<PoolSnapshot, FetchError> {
        Ok(PoolSnapshot::default())
    }
}

fn eth_form(amount: &str) -> DepositForm {
    let mut form = DepositForm::new(asset::metadata(AssetSymbol::Eth).clone());
    assert!(form.edit(amount));
    form
}

// ── Balance loading ─────────────────────────────────────────────────

#[tokio::test]
async fn test_load_balance_toggles_overlay() {
    let notifier = RecordingNotifier::default();
    let indicator = RecordingIndicator::default();
    let mut session = DepositSession::new(&notifier, &indicator);
    let reader = MockReader {
        balance: Ok(BalanceSnapshot::new("2.89039", 18)),
    };

    let balance = session
        .load_balance(&reader, OWNER, asset::metadata(AssetSymbol::Eth))
        .await;

    assert_eq!(balance, Some(BalanceSnapshot::new("2.89039", 18)));
    assert_eq!(*indicator.0.lock().unwrap(), vec![true, false]);
    assert!(!session.loading().is_active());
    assert!(notifier.notices().is_empty());
}

#[tokio::test]
async fn test_load_balance_failure_notifies_and_returns_none() {
    let notifier = RecordingNotifier::default();
    let indicator = RecordingIndicator::default();
    let mut session = DepositSession::new(&notifier, &indicator);
    let reader = MockReader {
        balance: Err(FetchError::Rpc("connection refused".into())),
    };

    let balance = session
        .load_balance(&reader, OWNER, asset::metadata(AssetSymbol::Usdc))
        .await;

    assert_eq!(balance, None);
    assert!(!session.loading().is_busy(LoadSource::Balance));
    assert_eq!(
        notifier.notices(),
        vec![(NoticeKind::Error, "Failed to load wallet balance.".to_string())]
    );
}

// ── Submission ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_successful_deposit() {
    let notifier = RecordingNotifier::default();
    let indicator = RecordingIndicator::default();
    let mut session = DepositSession::new(&notifier, &indicator);
    let submitter = MockSubmitter::ok();
    let balance = BalanceSnapshot::new("2", 18);
    let mut form = eth_form("1.5");

    let outcome = session
        .submit(&mut form, Some(&balance), Some(&submitter))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        SubmitOutcome::Success {
            tx_hash: "0xfeed".into()
        }
    );
    assert_eq!(form.phase(), DepositPhase::Editing);
    assert_eq!(*indicator.0.lock().unwrap(), vec![true, false]);
    assert_eq!(
        notifier.notices(),
        vec![(NoticeKind::Success, "Deposit success!".to_string())]
    );

    let seen = submitter.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].native_value_wei, 1_500_000_000_000_000_000);
}

#[tokio::test]
async fn test_failed_deposit_allows_retry() {
    let notifier = RecordingNotifier::default();
    let indicator = RecordingIndicator::default();
    let mut session = DepositSession::new(&notifier, &indicator);
    let balance = BalanceSnapshot::new("2", 18);
    let mut form = eth_form("1");

    let failing = MockSubmitter::failing(SubmitError::Reverted {
        tx_hash: "0xdead".into(),
    });
    let outcome = session
        .submit(&mut form, Some(&balance), Some(&failing))
        .await
        .unwrap();

    assert!(matches!(outcome, SubmitOutcome::Failure(SubmitError::Reverted { .. })));
    assert_eq!(form.phase(), DepositPhase::Editing);
    assert_eq!(form.amount(), "1");
    assert!(!session.loading().is_active());
    let notices = notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].0, NoticeKind::Error);
    assert!(notices[0].1.starts_with("Deposit failed:"));

    // Immediate retry with the same amount.
    let ok = MockSubmitter::ok();
    let outcome = session
        .submit(&mut form, Some(&balance), Some(&ok))
        .await
        .unwrap();
    assert!(matches!(outcome, SubmitOutcome::Success { .. }));
}

#[tokio::test]
async fn test_submit_refused_without_write_or_valid_amount() {
    let notifier = RecordingNotifier::default();
    let indicator = RecordingIndicator::default();
    let mut session = DepositSession::new(&notifier, &indicator);
    let balance = BalanceSnapshot::new("1", 18);

    let mut form = eth_form("0.5");
    let err = session
        .submit::<MockSubmitter>(&mut form, Some(&balance), None)
        .await
        .unwrap_err();
    assert_eq!(err, DepositError::WriteUnavailable);

    let submitter = MockSubmitter::ok();
    let mut too_much = eth_form("5");
    let err = session
        .submit(&mut too_much, Some(&balance), Some(&submitter))
        .await
        .unwrap_err();
    assert_eq!(err, DepositError::InvalidAmount);

    let mut no_balance = eth_form("0.5");
    let err = session
        .submit(&mut no_balance, None, Some(&submitter))
        .await
        .unwrap_err();
    assert_eq!(err, DepositError::InvalidAmount);

    assert!(submitter.seen.lock().unwrap().is_empty());
    assert!(indicator.0.lock().unwrap().is_empty());
    assert!(notifier.notices().is_empty());
}

#[tokio::test]
async fn test_send_uses_request_captured_at_begin() {
    let notifier = RecordingNotifier::default();
    let indicator = RecordingIndicator::default();
    let mut session = DepositSession::new(&notifier, &indicator);
    let submitter = MockSubmitter::ok();
    let balance = BalanceSnapshot::new("1", 18);
    let mut form = eth_form("0.1");

    let pending = form.begin_submit(true, Some(&balance)).unwrap();
    form.edit("0.9");
    let outcome = session.send(&submitter, &pending).await;
    form.complete(&outcome);

    assert_eq!(
        submitter.seen.lock().unwrap()[0].native_value_wei,
        100_000_000_000_000_000
    );
    assert_eq!(form.amount(), "0.9");
    assert_eq!(form.phase(), DepositPhase::Editing);
}
