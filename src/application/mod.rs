//! Application layer containing the order submission orchestration.
//!
//! This module defines the `OrderForm`, which owns the buyer's contact details,
//! the lifecycle phase and the notification state, and drives the submission
//! gateway on behalf of the buyer.

pub mod order_form;
