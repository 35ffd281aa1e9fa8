use crate::domain::content::{Language, OrderPageContent};
use crate::domain::form::{ContactForm, FormField};
use crate::domain::lifecycle::{LifecyclePhase, OrderView};
use crate::domain::notification::{NotificationKind, NotificationState};
use crate::domain::payload::{FieldMapping, OrderPayload, compose};
use crate::domain::ports::{
    CartProviderBox, ContentProviderBox, OrderListenerBox, SubmissionGatewayBox,
    SubmissionOutcome,
};
use crate::error::{OrderError, Result};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, error, info, warn};

static NEXT_FORM_ID: AtomicU64 = AtomicU64::new(1);

/// A submission that has entered `Submitting` and holds its composed payload.
///
/// Only [`OrderForm::begin_submit`] creates one and [`OrderForm::settle`]
/// consumes it. It is bound to the form and attempt that created it, so each
/// attempt is settled at most once and only by its own form.
#[derive(Debug)]
pub struct PendingSubmission {
    form_id: u64,
    attempt: u64,
    payload: OrderPayload,
}

impl PendingSubmission {
    pub fn payload(&self) -> &OrderPayload {
        &self.payload
    }
}

/// Drives one order form through its submission lifecycle.
///
/// Each `OrderForm` owns its contact details, phase and notification. The
/// cart provider is shared and only read; collaborators that want to clear it
/// do so from the order-accepted listener.
pub struct OrderForm {
    cart: CartProviderBox,
    gateway: SubmissionGatewayBox,
    listener: OrderListenerBox,
    content: ContentProviderBox,
    mapping: FieldMapping,
    language: Language,
    form: ContactForm,
    phase: LifecyclePhase,
    notification: NotificationState,
    id: u64,
    attempt: u64,
}

impl OrderForm {
    pub fn new(
        cart: CartProviderBox,
        gateway: SubmissionGatewayBox,
        listener: OrderListenerBox,
        content: ContentProviderBox,
        mapping: FieldMapping,
        language: Language,
    ) -> Self {
        Self {
            cart,
            gateway,
            listener,
            content,
            mapping,
            language,
            form: ContactForm::new(),
            phase: LifecyclePhase::Idle,
            notification: NotificationState::new(),
            id: NEXT_FORM_ID.fetch_add(1, Ordering::Relaxed),
            attempt: 0,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
        debug!(field = %field, "form field updated");
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    pub fn view(&self) -> OrderView {
        self.phase.view()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn content(&self) -> &OrderPageContent {
        self.content.content(self.language)
    }

    pub fn notification(&self) -> &NotificationState {
        &self.notification
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.phase.accepts_submit() && self.form.is_complete()
    }

    pub fn submit_label(&self) -> &str {
        if self.phase == LifecyclePhase::Submitting {
            self.language.sending_label()
        } else {
            self.content().confirm_order.as_str()
        }
    }

    /// Hides the notification. Never touches the phase or the form.
    pub fn dismiss_notification(&mut self) {
        self.notification.dismiss();
    }

    /// Enters `Submitting` and composes the payload from the current form and
    /// cart snapshot.
    ///
    /// Fails without changing any state if a submission is already in flight,
    /// the order is completed, or a required field is blank.
    pub async fn begin_submit(&mut self) -> Result<PendingSubmission> {
        if !self.phase.accepts_submit() {
            return Err(OrderError::SubmitUnavailable(self.phase));
        }
        let missing = self.form.missing_fields();
        if !missing.is_empty() {
            return Err(OrderError::MissingFields(missing));
        }

        self.phase = LifecyclePhase::Submitting;
        self.attempt += 1;
        // A previous error must not outlive the retry
        self.notification.dismiss();
        info!(attempt = self.attempt, "submitting order");

        let cart = self.cart.snapshot().await;
        let payload = compose(&self.form, &cart, &self.mapping);
        debug!(items = cart.items.len(), "order payload composed");

        Ok(PendingSubmission {
            form_id: self.id,
            attempt: self.attempt,
            payload,
        })
    }

    /// Applies the gateway outcome for a pending submission.
    ///
    /// Outcomes for another form, or for an attempt superseded by
    /// [`start_new_order`](Self::start_new_order), are ignored.
    pub fn settle(
        &mut self,
        pending: PendingSubmission,
        outcome: SubmissionOutcome,
    ) -> LifecyclePhase {
        if pending.form_id != self.id
            || pending.attempt != self.attempt
            || self.phase != LifecyclePhase::Submitting
        {
            warn!(
                phase = %self.phase,
                attempt = pending.attempt,
                "ignoring outcome for a stale submission"
            );
            return self.phase;
        }

        match outcome {
            SubmissionOutcome::Sent => {
                self.phase = LifecyclePhase::Completed;
                info!("order accepted");
                self.listener.order_accepted();
            }
            SubmissionOutcome::TransportError(reason) => {
                error!(error = %reason, "order submission failed");
                self.phase = LifecyclePhase::Failed;
                self.notification
                    .show(NotificationKind::Error, self.language.failure_message());
            }
        }
        self.phase
    }

    /// Runs a full submission: precondition check, compose, send once, settle.
    pub async fn submit(&mut self) -> Result<LifecyclePhase> {
        let pending = self.begin_submit().await?;
        let outcome = self.gateway.submit(pending.payload()).await;
        Ok(self.settle(pending, outcome))
    }

    /// Starts over with an empty form in `Idle`.
    ///
    /// Also recovers a form left in `Submitting` when a submit future was
    /// dropped; any pending submission from before the reset is then stale.
    pub fn start_new_order(&mut self) {
        if self.phase == LifecyclePhase::Submitting {
            warn!(attempt = self.attempt, "abandoning pending submission");
        }
        self.attempt += 1;
        self.form = ContactForm::new();
        self.phase = LifecyclePhase::Idle;
        self.notification = NotificationState::new();
        info!("new order started");
    }
}
