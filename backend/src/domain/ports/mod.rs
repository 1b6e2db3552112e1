//! Domain ports: traits the inbound adapters drive and the outbound
//! adapters implement.

mod import_runner;
mod user_repository;

pub use import_runner::ImportRunner;
pub use user_repository::{UserPersistenceError, UserRepository};
