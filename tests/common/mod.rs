#![allow(dead_code)]

use async_trait::async_trait;
use order_capture::application::order_form::OrderForm;
use order_capture::domain::cart::{CartSnapshot, LineItem, Quantity};
use order_capture::domain::content::Language;
use order_capture::domain::form::FormField;
use order_capture::domain::payload::{FieldMapping, OrderPayload};
use order_capture::domain::ports::{SubmissionGateway, SubmissionOutcome};
use order_capture::infrastructure::in_memory::InMemoryCart;
use order_capture::infrastructure::static_content::StaticContent;
use rust_decimal_macros::dec;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Gateway double that records every payload it is handed.
#[derive(Clone)]
pub struct RecordingGateway {
    outcome: SubmissionOutcome,
    pub payloads: Arc<Mutex<Vec<OrderPayload>>>,
}

impl RecordingGateway {
    pub fn accepting() -> Self {
        Self::with_outcome(SubmissionOutcome::Sent)
    }

    pub fn failing(reason: &str) -> Self {
        Self::with_outcome(SubmissionOutcome::TransportError(reason.to_string()))
    }

    fn with_outcome(outcome: SubmissionOutcome) -> Self {
        Self {
            outcome,
            payloads: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> usize {
        self.payloads.lock().unwrap().len()
    }

    pub fn last_payload(&self) -> Option<OrderPayload> {
        self.payloads.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl SubmissionGateway for RecordingGateway {
    async fn submit(&self, payload: &OrderPayload) -> SubmissionOutcome {
        self.payloads.lock().unwrap().push(payload.clone());
        self.outcome.clone()
    }
}

pub fn latte_cart() -> CartSnapshot {
    CartSnapshot::new(
        vec![LineItem::new("Latte", Quantity::new(2).unwrap(), "50,000")],
        dec!(100000),
    )
}

pub struct Setup {
    pub order: OrderForm,
    pub gateway: RecordingGateway,
    pub cart: InMemoryCart,
    pub accepted: Arc<AtomicUsize>,
}

impl Setup {
    pub fn accepted_count(&self) -> usize {
        self.accepted.load(Ordering::SeqCst)
    }
}

/// Builds an order form whose listener counts calls and clears the cart.
pub fn setup(gateway: RecordingGateway, cart: CartSnapshot, language: Language) -> Setup {
    let cart = InMemoryCart::new(cart);
    let accepted = Arc::new(AtomicUsize::new(0));

    let hook_count = accepted.clone();
    let hook_cart = cart.clone();
    let order = OrderForm::new(
        Box::new(cart.clone()),
        Box::new(gateway.clone()),
        Box::new(move || {
            hook_count.fetch_add(1, Ordering::SeqCst);
            hook_cart.clear();
        }),
        Box::new(StaticContent::new()),
        FieldMapping::default(),
        language,
    );

    Setup {
        order,
        gateway,
        cart,
        accepted,
    }
}

pub fn fill_linh(order: &mut OrderForm) {
    order.set_field(FormField::Name, "Linh");
    order.set_field(FormField::Email, "a@b.com");
    order.set_field(FormField::Phone, "0901234567");
    order.set_field(FormField::Address, "123 Main St");
}
