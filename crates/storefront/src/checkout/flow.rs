//! Checkout flow state machine.
//!
//! One flow per signed-in user, covering the interval between "checkout
//! opened" and "order exists on the backend". Transitions are driven by route
//! handlers and by a single expiry watcher task owned by the flow; every exit
//! path must tear the watcher down, which `Drop` guarantees.
//!
//! ```text
//!            open                select (QR)            session issued
//!  (absent) ------> MethodSelection ------> SessionPending ------> SessionActive
//!                        ^                      |                   |        ^
//!                        +----- request failed -+            pay -> |        | <- pay failed
//!                        |                                          v        |
//!                        |                                        Submitting-+
//!                        |                                          |
//!  (absent) <--- close / refresh failure / non-QR handoff     201 Created -> (absent)
//! ```

use rust_decimal::Decimal;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use uuid::Uuid;

use sphaerostyle_core::{PaymentMethod, UserId};

use crate::commerce::types::OrderItem;

use super::CheckoutError;

/// A live QR payment session.
#[derive(Debug, Clone)]
pub struct PaymentSession {
    /// Method backing this session (currently always ABA PAY).
    pub method: PaymentMethod,
    /// QR image reference for the shopper to scan.
    pub qr_image: String,
    /// Gateway transaction identifier.
    pub tran_id: String,
    /// When the validity window runs out.
    pub deadline: Instant,
}

impl PaymentSession {
    /// Whole seconds left in the validity window, clamped at zero.
    #[must_use]
    pub fn remaining_secs(&self, now: Instant) -> u64 {
        self.deadline.saturating_duration_since(now).as_secs()
    }
}

/// Where a flow currently stands. Absence of a flow is the idle state.
#[derive(Debug)]
pub enum FlowState {
    /// Address chosen, total locked; the method chooser is open.
    MethodSelection,
    /// A QR session request is in flight at the gateway.
    SessionPending,
    /// A QR session is live and counting down.
    SessionActive(PaymentSession),
    /// Order submission is in flight; the session is parked so a failed
    /// submission can resume it.
    Submitting(PaymentSession),
}

impl FlowState {
    /// Wire name of the state for status responses.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MethodSelection => "method_selection",
            Self::SessionPending => "session_pending",
            Self::SessionActive(_) => "session_active",
            Self::Submitting(_) => "submitting",
        }
    }
}

/// A single user's checkout flow.
///
/// The address string, item snapshot and total are fixed when the flow opens;
/// cart edits made while the flow is open are deliberately not reflected.
pub struct CheckoutFlow {
    pub user_id: UserId,
    /// Bearer token captured at open; order submission requires it.
    pub access_token: String,
    /// Flattened delivery address: "name, phone, address, city, country".
    pub user_address: String,
    /// Item snapshot taken at open.
    pub items: Vec<OrderItem>,
    /// Locked total: subtotal at open plus the flat delivery fee.
    pub total: Decimal,
    /// Client-generated key so the backend can deduplicate a resubmission.
    pub idempotency_key: Uuid,
    /// Registry-unique generation; async completions compare against it
    /// before touching state, so work raced by a close cannot land.
    pub generation: u64,
    state: FlowState,
    watcher: Option<JoinHandle<()>>,
}

impl CheckoutFlow {
    /// Open a flow in `MethodSelection`.
    #[must_use]
    pub fn new(
        user_id: UserId,
        access_token: String,
        user_address: String,
        items: Vec<OrderItem>,
        total: Decimal,
        generation: u64,
    ) -> Self {
        Self {
            user_id,
            access_token,
            user_address,
            items,
            total,
            idempotency_key: Uuid::new_v4(),
            generation,
            state: FlowState::MethodSelection,
            watcher: None,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &FlowState {
        &self.state
    }

    /// Hand the flow its expiry watcher. Replacing an earlier watcher aborts
    /// it first.
    pub fn set_watcher(&mut self, handle: JoinHandle<()>) {
        if let Some(old) = self.watcher.replace(handle) {
            old.abort();
        }
    }

    /// `MethodSelection` -> `SessionPending`.
    ///
    /// # Errors
    ///
    /// Rejects when a session request is already in flight or a session is
    /// already live.
    pub fn begin_session_request(&mut self) -> Result<(), CheckoutError> {
        match self.state {
            FlowState::MethodSelection => {
                self.state = FlowState::SessionPending;
                Ok(())
            }
            FlowState::SessionPending => Err(CheckoutError::SessionPending),
            FlowState::SessionActive(_) | FlowState::Submitting(_) => {
                Err(CheckoutError::SessionAlreadyActive)
            }
        }
    }

    /// `SessionPending` -> `MethodSelection` after a failed session request.
    pub fn cancel_session_request(&mut self) {
        if matches!(self.state, FlowState::SessionPending) {
            self.state = FlowState::MethodSelection;
        }
    }

    /// `SessionPending` -> `SessionActive` with a fresh session.
    pub fn activate_session(&mut self, session: PaymentSession) {
        self.state = FlowState::SessionActive(session);
    }

    /// Replace the live session after an expiry refresh.
    ///
    /// Returns `false` without touching state when no session is live (e.g. a
    /// submission is in flight); the caller retries shortly.
    pub fn renew_session(&mut self, qr_image: String, tran_id: String, deadline: Instant) -> bool {
        match &mut self.state {
            FlowState::SessionActive(session) => {
                session.qr_image = qr_image;
                session.tran_id = tran_id;
                session.deadline = deadline;
                true
            }
            _ => false,
        }
    }

    /// `SessionActive` -> `Submitting`, returning a snapshot of the parked
    /// session for the submission call.
    ///
    /// # Errors
    ///
    /// Rejects a second pay while one is already in flight, and any pay
    /// without a live session.
    pub fn begin_submit(&mut self) -> Result<PaymentSession, CheckoutError> {
        match &self.state {
            FlowState::SessionActive(session) => {
                let session = session.clone();
                self.state = FlowState::Submitting(session.clone());
                Ok(session)
            }
            FlowState::Submitting(_) => Err(CheckoutError::AlreadySubmitting),
            FlowState::MethodSelection | FlowState::SessionPending => {
                Err(CheckoutError::NoPaymentSession)
            }
        }
    }

    /// `Submitting` -> `SessionActive` after a failed submission. The QR is
    /// left untouched.
    pub fn fail_submit(&mut self) {
        if let FlowState::Submitting(session) = &self.state {
            self.state = FlowState::SessionActive(session.clone());
        }
    }
}

impl Drop for CheckoutFlow {
    fn drop(&mut self) {
        // Every exit path funnels through removal from the registry, so this
        // is the single place the timer obligation is discharged.
        if let Some(watcher) = self.watcher.take() {
            watcher.abort();
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn flow() -> CheckoutFlow {
        CheckoutFlow::new(
            UserId::new(1),
            "tok".to_string(),
            "A, 1, X, Y, Cambodia".to_string(),
            vec![],
            Decimal::new(2000, 2),
            7,
        )
    }

    fn session(deadline: Instant) -> PaymentSession {
        PaymentSession {
            method: PaymentMethod::AbaPay,
            qr_image: "qr-1".to_string(),
            tran_id: "t-1".to_string(),
            deadline,
        }
    }

    #[tokio::test]
    async fn test_open_starts_in_method_selection() {
        let flow = flow();
        assert!(matches!(flow.state(), FlowState::MethodSelection));
    }

    #[tokio::test]
    async fn test_session_request_lifecycle() {
        let mut flow = flow();
        flow.begin_session_request().unwrap();
        assert!(matches!(flow.state(), FlowState::SessionPending));

        // A second request while one is in flight is rejected.
        assert!(matches!(
            flow.begin_session_request(),
            Err(CheckoutError::SessionPending)
        ));

        flow.cancel_session_request();
        assert!(matches!(flow.state(), FlowState::MethodSelection));
    }

    #[tokio::test]
    async fn test_activate_then_renew_resets_deadline() {
        let mut flow = flow();
        flow.begin_session_request().unwrap();
        let first_deadline = Instant::now() + Duration::from_secs(180);
        flow.activate_session(session(first_deadline));

        let renewed_deadline = first_deadline + Duration::from_secs(180);
        assert!(flow.renew_session("qr-2".to_string(), "t-2".to_string(), renewed_deadline));

        let FlowState::SessionActive(active) = flow.state() else {
            panic!("expected active session");
        };
        assert_eq!(active.qr_image, "qr-2");
        assert_eq!(active.tran_id, "t-2");
        assert_eq!(active.deadline, renewed_deadline);
    }

    #[tokio::test]
    async fn test_pay_without_session_is_rejected() {
        let mut flow = flow();
        assert!(matches!(
            flow.begin_submit(),
            Err(CheckoutError::NoPaymentSession)
        ));
    }

    #[tokio::test]
    async fn test_double_pay_is_rejected_while_submitting() {
        let mut flow = flow();
        flow.begin_session_request().unwrap();
        flow.activate_session(session(Instant::now() + Duration::from_secs(180)));

        flow.begin_submit().unwrap();
        assert!(matches!(
            flow.begin_submit(),
            Err(CheckoutError::AlreadySubmitting)
        ));
    }

    #[tokio::test]
    async fn test_failed_submit_resumes_session_with_same_qr() {
        let mut flow = flow();
        flow.begin_session_request().unwrap();
        flow.activate_session(session(Instant::now() + Duration::from_secs(180)));

        let parked = flow.begin_submit().unwrap();
        flow.fail_submit();

        let FlowState::SessionActive(resumed) = flow.state() else {
            panic!("expected session to resume");
        };
        assert_eq!(resumed.qr_image, parked.qr_image);
        assert_eq!(resumed.tran_id, parked.tran_id);
    }

    #[tokio::test]
    async fn test_renew_skipped_while_submitting() {
        let mut flow = flow();
        flow.begin_session_request().unwrap();
        flow.activate_session(session(Instant::now() + Duration::from_secs(180)));
        flow.begin_submit().unwrap();

        assert!(!flow.renew_session(
            "qr-late".to_string(),
            "t-late".to_string(),
            Instant::now() + Duration::from_secs(180),
        ));
    }

    #[tokio::test]
    async fn test_remaining_secs_clamps_at_zero() {
        let now = Instant::now();
        let expired = session(now);
        assert_eq!(expired.remaining_secs(now + Duration::from_secs(5)), 0);

        let live = session(now + Duration::from_secs(180));
        assert_eq!(live.remaining_secs(now), 180);
    }
}
