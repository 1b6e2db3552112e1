//! Administrative backend for library users and loan reporting.
//!
//! The crate is arranged as ports and adapters: `domain` holds the model,
//! validation, ports, and the CSV import service; `inbound::http` exposes
//! the REST surface; `outbound::persistence` implements the ports against
//! PostgreSQL; `server` wires everything together.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
