use crate::domain::cart::CartSnapshot;
use crate::domain::ports::CartProvider;
use async_trait::async_trait;
use std::sync::{Arc, PoisonError, RwLock};

/// A shared in-memory cart.
///
/// Clones share the same contents, so one handle can be given to an
/// `OrderForm` as its cart provider while another clears the cart from the
/// order-accepted listener. The lock is never held across an await point.
#[derive(Default, Clone)]
pub struct InMemoryCart {
    snapshot: Arc<RwLock<CartSnapshot>>,
}

impl InMemoryCart {
    pub fn new(snapshot: CartSnapshot) -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(snapshot)),
        }
    }

    pub fn replace(&self, snapshot: CartSnapshot) {
        *self.snapshot.write().unwrap_or_else(PoisonError::into_inner) = snapshot;
    }

    pub fn clear(&self) {
        self.replace(CartSnapshot::default());
    }

    pub fn current(&self) -> CartSnapshot {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl CartProvider for InMemoryCart {
    async fn snapshot(&self) -> CartSnapshot {
        self.current()
    }
}
