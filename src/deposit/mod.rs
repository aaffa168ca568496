//! Deposit tab of the asset dialog.

pub mod form;
pub mod session;
pub mod wei;

pub use form::{
    DepositForm, DepositPhase, DepositRequest, DepositSummary, PendingDeposit, SubmitOutcome,
    accept_keystroke, can_submit, half, is_amount_valid, max,
};
pub use session::DepositSession;
