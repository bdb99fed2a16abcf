//! Checkout session controller.
//!
//! Orchestrates the interval between "user clicks checkout" and "order exists
//! on the backend": address guard, payment method chooser, QR session with a
//! validity countdown, expiry refresh, and final order submission.
//!
//! # Concurrency
//!
//! The registry holds at most one [`CheckoutFlow`] per user behind a single
//! async mutex. Gateway and order calls never run under the lock; each async
//! completion re-acquires it and compares the flow's generation before
//! touching state, so a slow refresh racing a user-initiated close is
//! discarded instead of resurrecting a closed session. The expiry watcher is
//! the flow's only timer and is aborted on every exit path.

mod flow;

pub use flow::{CheckoutFlow, FlowState, PaymentSession};

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{instrument, warn};

use sphaerostyle_core::{PaymentMethod, UserId, order_total};

use crate::commerce::types::{NewOrder, OrderItem};
use crate::commerce::{CommerceClient, CommerceError};
use crate::models::CurrentUser;

/// How long the watcher waits before re-checking a flow whose session is
/// parked behind an in-flight submission.
const SUBMIT_RECHECK: Duration = Duration::from_secs(1);

/// Errors surfaced by the checkout controller.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout attempted without a selected delivery address.
    #[error("Please select a delivery address before checkout.")]
    AddressRequired,

    /// Checkout attempted with an empty bag.
    #[error("Your bag is empty.")]
    EmptyBag,

    /// No flow is open for this user.
    #[error("No checkout in progress.")]
    NoCheckout,

    /// A QR session request is already in flight.
    #[error("A payment session request is already in progress.")]
    SessionPending,

    /// A QR session is already live for this flow.
    #[error("A payment session is already active.")]
    SessionAlreadyActive,

    /// Pay attempted without a live QR session.
    #[error("No payment session is active.")]
    NoPaymentSession,

    /// A second pay arrived while one was already in flight.
    #[error("Order submission is already in progress.")]
    AlreadySubmitting,

    /// The flow was closed or replaced while an async step was in flight.
    #[error("Checkout was closed before the operation completed.")]
    Superseded,

    /// A backend or gateway call failed.
    #[error(transparent)]
    Commerce(#[from] CommerceError),
}

// =============================================================================
// Views
// =============================================================================

/// One entry of the payment method chooser.
#[derive(Debug, Clone, Serialize)]
pub struct MethodView {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

impl From<PaymentMethod> for MethodView {
    fn from(method: PaymentMethod) -> Self {
        Self {
            value: method.tag(),
            label: method.label(),
            description: method.description(),
        }
    }
}

/// Response to opening a checkout: the locked total and the chooser entries.
#[derive(Debug, Serialize)]
pub struct CheckoutSummary {
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub delivery_fee: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub methods: Vec<MethodView>,
}

/// Result of choosing a payment method.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MethodOutcome {
    /// A QR session was issued; the countdown is running.
    QrSession {
        qr_image: String,
        tran_id: String,
        expires_in_secs: u64,
        #[serde(with = "rust_decimal::serde::float")]
        amount: Decimal,
    },
    /// The chooser closed and control passed to a method-specific handler
    /// outside this controller (card hosted page and wallet handlers).
    Handoff {
        method: &'static str,
        label: &'static str,
    },
}

/// Point-in-time view of a user's flow, for the countdown display.
#[derive(Debug, Serialize)]
pub struct CheckoutStatus {
    pub state: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_secs: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tran_id: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub total: Option<Decimal>,
}

impl CheckoutStatus {
    const fn idle() -> Self {
        Self {
            state: "idle",
            remaining_secs: None,
            qr_image: None,
            tran_id: None,
            total: None,
        }
    }
}

/// Successful order submission: where to send the shopper.
#[derive(Debug, Serialize)]
pub struct PaymentReceipt {
    pub redirect: &'static str,
}

const SUCCESS_REDIRECT: &str = "/successfully";

// =============================================================================
// Registry
// =============================================================================

type FlowMap = Arc<Mutex<HashMap<UserId, CheckoutFlow>>>;

/// Owner of every open checkout flow.
#[derive(Clone)]
pub struct CheckoutRegistry {
    flows: FlowMap,
    commerce: CommerceClient,
    window: Duration,
    generations: Arc<AtomicU64>,
}

impl CheckoutRegistry {
    /// Create a registry issuing sessions with the given validity window.
    #[must_use]
    pub fn new(commerce: CommerceClient, window: Duration) -> Self {
        Self {
            flows: Arc::new(Mutex::new(HashMap::new())),
            commerce,
            window,
            generations: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Open a checkout flow for a user, replacing (and tearing down) any
    /// existing one.
    ///
    /// The total is computed here, once, and stays locked for the life of the
    /// flow.
    ///
    /// # Errors
    ///
    /// Rejects an empty item snapshot.
    #[instrument(skip(self, user, user_address, items), fields(user_id = %user.user_id))]
    pub async fn open(
        &self,
        user: &CurrentUser,
        user_address: String,
        items: Vec<OrderItem>,
        subtotal: Decimal,
    ) -> Result<CheckoutSummary, CheckoutError> {
        if items.is_empty() {
            return Err(CheckoutError::EmptyBag);
        }

        let total = order_total(subtotal);
        let generation = self.generations.fetch_add(1, Ordering::Relaxed);
        let flow = CheckoutFlow::new(
            user.user_id,
            user.access_token.clone(),
            user_address,
            items,
            total,
            generation,
        );

        // Dropping a replaced flow aborts its watcher.
        self.flows.lock().await.insert(user.user_id, flow);

        Ok(CheckoutSummary {
            subtotal,
            delivery_fee: sphaerostyle_core::DELIVERY_FEE,
            total,
            methods: PaymentMethod::ALL.into_iter().map(MethodView::from).collect(),
        })
    }

    /// Choose a payment method.
    ///
    /// QR-backed methods request a session from the gateway and start the
    /// countdown. Every other method closes the chooser and hands off; the
    /// flow ends here for those.
    ///
    /// # Errors
    ///
    /// Propagates gateway declines and transport failures; the flow returns
    /// to `MethodSelection` on failure.
    #[instrument(skip(self), fields(user_id = %user_id, method = %method))]
    pub async fn select_method(
        &self,
        user_id: UserId,
        method: PaymentMethod,
    ) -> Result<MethodOutcome, CheckoutError> {
        if !method.is_qr_session() {
            let mut flows = self.flows.lock().await;
            let choosing = flows
                .get(&user_id)
                .map(|flow| matches!(flow.state(), FlowState::MethodSelection))
                .ok_or(CheckoutError::NoCheckout)?;
            if !choosing {
                return Err(CheckoutError::SessionAlreadyActive);
            }
            // The chooser closes and a method-specific handler takes over;
            // this controller's flow ends here.
            flows.remove(&user_id);
            return Ok(MethodOutcome::Handoff {
                method: method.tag(),
                label: method.label(),
            });
        }

        // Snapshot the request inputs under the lock, then call the gateway
        // without holding it.
        let (generation, amount) = {
            let mut flows = self.flows.lock().await;
            let flow = flows.get_mut(&user_id).ok_or(CheckoutError::NoCheckout)?;
            flow.begin_session_request()?;
            (flow.generation, flow.total)
        };

        let issued = self.commerce.purchase(user_id, amount, method).await;

        let mut flows = self.flows.lock().await;
        let Some(flow) = flows.get_mut(&user_id) else {
            return Err(CheckoutError::Superseded);
        };
        if flow.generation != generation {
            return Err(CheckoutError::Superseded);
        }

        match issued {
            Ok(qr) => {
                let deadline = Instant::now() + self.window;
                flow.activate_session(PaymentSession {
                    method,
                    qr_image: qr.qr_image.clone(),
                    tran_id: qr.tran_id.clone(),
                    deadline,
                });
                let watcher = self.spawn_expiry_watcher(user_id, generation, deadline);
                flow.set_watcher(watcher);

                Ok(MethodOutcome::QrSession {
                    qr_image: qr.qr_image,
                    tran_id: qr.tran_id,
                    expires_in_secs: self.window.as_secs(),
                    amount,
                })
            }
            Err(err) => {
                flow.cancel_session_request();
                Err(err.into())
            }
        }
    }

    /// Point-in-time view of the user's flow; `idle` when none is open.
    pub async fn status(&self, user_id: UserId) -> CheckoutStatus {
        let flows = self.flows.lock().await;
        let Some(flow) = flows.get(&user_id) else {
            return CheckoutStatus::idle();
        };

        let now = Instant::now();
        let (remaining, qr_image, tran_id) = match flow.state() {
            FlowState::SessionActive(s) | FlowState::Submitting(s) => (
                Some(s.remaining_secs(now)),
                Some(s.qr_image.clone()),
                Some(s.tran_id.clone()),
            ),
            FlowState::MethodSelection | FlowState::SessionPending => (None, None, None),
        };

        CheckoutStatus {
            state: flow.state().name(),
            remaining_secs: remaining,
            qr_image,
            tran_id,
            total: Some(flow.total),
        }
    }

    /// Submit the order for the live session.
    ///
    /// Success is exactly HTTP 201; the flow is torn down and the shopper is
    /// redirected. On failure the error is reported verbatim and the flow
    /// resumes `SessionActive` with the same QR.
    ///
    /// # Errors
    ///
    /// Rejects duplicate submissions and pays without a live session;
    /// propagates backend failures.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn pay(&self, user_id: UserId) -> Result<PaymentReceipt, CheckoutError> {
        let (generation, token, idempotency_key, order) = {
            let mut flows = self.flows.lock().await;
            let flow = flows.get_mut(&user_id).ok_or(CheckoutError::NoCheckout)?;
            let session = flow.begin_submit()?;
            (
                flow.generation,
                flow.access_token.clone(),
                flow.idempotency_key,
                NewOrder {
                    user_address: flow.user_address.clone(),
                    total: flow.total,
                    payment_method: session.method.label().to_string(),
                    items: flow.items.clone(),
                },
            )
        };

        let result = self
            .commerce
            .create_order(&token, idempotency_key, &order)
            .await;

        let mut flows = self.flows.lock().await;
        match result {
            Ok(()) => {
                if flows
                    .get(&user_id)
                    .is_some_and(|flow| flow.generation == generation)
                {
                    flows.remove(&user_id);
                }
                Ok(PaymentReceipt {
                    redirect: SUCCESS_REDIRECT,
                })
            }
            Err(err) => {
                if let Some(flow) = flows.get_mut(&user_id)
                    && flow.generation == generation
                {
                    flow.fail_submit();
                }
                Err(err.into())
            }
        }
    }

    /// Close the user's flow, discarding any live session.
    ///
    /// No cancellation is sent to the gateway; a stale session is left to
    /// expire on the gateway side.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn close(&self, user_id: UserId) {
        self.flows.lock().await.remove(&user_id);
    }

    /// Spawn the flow's expiry watcher.
    ///
    /// Sleeps until the session deadline, then re-issues the purchase call
    /// once. Success renews the session and the countdown; failure discards
    /// the flow entirely, after which no further tick can fire.
    fn spawn_expiry_watcher(
        &self,
        user_id: UserId,
        generation: u64,
        deadline: Instant,
    ) -> tokio::task::JoinHandle<()> {
        let flows = Arc::clone(&self.flows);
        let commerce = self.commerce.clone();
        let window = self.window;

        tokio::spawn(async move {
            let mut deadline = deadline;
            loop {
                tokio::time::sleep_until(deadline).await;

                // Decide under the lock whether a refresh is due.
                let amount = {
                    let flows = flows.lock().await;
                    let Some(flow) = flows.get(&user_id) else {
                        return;
                    };
                    if flow.generation != generation {
                        return;
                    }
                    match flow.state() {
                        FlowState::SessionActive(session) => {
                            let now = Instant::now();
                            if session.deadline > now {
                                // Deadline moved (e.g. a resumed submission);
                                // wait for the new one.
                                deadline = session.deadline;
                                None
                            } else {
                                Some(flow.total)
                            }
                        }
                        FlowState::Submitting(_) => {
                            deadline = Instant::now() + SUBMIT_RECHECK;
                            None
                        }
                        FlowState::MethodSelection | FlowState::SessionPending => return,
                    }
                };

                let Some(amount) = amount else { continue };

                let refreshed = commerce
                    .purchase(user_id, amount, PaymentMethod::AbaPay)
                    .await;

                let mut flows = flows.lock().await;
                let Some(flow) = flows.get_mut(&user_id) else {
                    return;
                };
                if flow.generation != generation {
                    return;
                }

                match refreshed {
                    Ok(qr) => {
                        let next = Instant::now() + window;
                        if flow.renew_session(qr.qr_image, qr.tran_id, next) {
                            deadline = next;
                        } else {
                            // A submission raced the refresh; check again soon.
                            deadline = Instant::now() + SUBMIT_RECHECK;
                        }
                    }
                    Err(err) => {
                        warn!(user_id = %user_id, error = %err, "payment session refresh failed; discarding checkout");
                        flows.remove(&user_id);
                        return;
                    }
                }
            }
        })
    }
}
