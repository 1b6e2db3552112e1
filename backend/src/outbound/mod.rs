//! Outbound adapters: implementations of domain ports against external
//! systems.

pub mod persistence;
