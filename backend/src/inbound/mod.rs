//! Inbound adapters: protocol-specific entry points driving the domain.

pub mod http;
