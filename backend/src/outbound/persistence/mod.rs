//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain ports, backed by PostgreSQL via
//! `diesel-async` with `bb8` connection pooling. Row structs and schema
//! definitions are internal; only the adapters and the pool are exported.

mod csv_import_runner;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use csv_import_runner::CsvImportRunner;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
