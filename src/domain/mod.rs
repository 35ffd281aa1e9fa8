//! Domain layer: order form types, pure rules and the ports the application
//! layer drives.

pub mod cart;
pub mod content;
pub mod form;
pub mod lifecycle;
pub mod notification;
pub mod payload;
pub mod ports;
