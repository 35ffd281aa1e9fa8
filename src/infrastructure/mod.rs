//! Adapters behind the domain ports.

pub mod http_gateway;
pub mod in_memory;
pub mod static_content;
