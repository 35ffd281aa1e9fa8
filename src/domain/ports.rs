use super::cart::CartSnapshot;
use super::content::{Language, OrderPageContent};
use super::payload::OrderPayload;
use async_trait::async_trait;

/// Result of handing a payload to the order-intake endpoint.
///
/// The endpoint's reply is opaque, so there is no "rejected" case: a send that
/// did not raise a transport error counts as accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Sent,
    TransportError(String),
}

#[async_trait]
pub trait CartProvider: Send + Sync {
    async fn snapshot(&self) -> CartSnapshot;
}

#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    async fn submit(&self, payload: &OrderPayload) -> SubmissionOutcome;
}

/// Notified once per successfully submitted order.
pub trait OrderListener: Send + Sync {
    fn order_accepted(&self);
}

impl<F> OrderListener for F
where
    F: Fn() + Send + Sync,
{
    fn order_accepted(&self) {
        self()
    }
}

pub trait ContentProvider: Send + Sync {
    fn content(&self, language: Language) -> &OrderPageContent;
}

pub type CartProviderBox = Box<dyn CartProvider>;
pub type SubmissionGatewayBox = Box<dyn SubmissionGateway>;
pub type OrderListenerBox = Box<dyn OrderListener>;
pub type ContentProviderBox = Box<dyn ContentProvider>;
