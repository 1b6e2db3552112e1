//! Shared HTTP adapter state.
//!
//! Handlers receive this bundle via `actix_web::web::Data` so they depend
//! only on domain ports and stay testable without a database or
//! filesystem.

use std::sync::Arc;

use crate::domain::ImportJobs;
use crate::domain::ports::{ImportRunner, UserRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Users table persistence.
    pub users: Arc<dyn UserRepository>,
    /// Bulk import execution.
    pub importer: Arc<dyn ImportRunner>,
    /// Registry of background import runs.
    pub import_jobs: Arc<ImportJobs>,
}

impl HttpState {
    /// Bundle the given port implementations.
    pub fn new(users: Arc<dyn UserRepository>, importer: Arc<dyn ImportRunner>) -> Self {
        Self {
            users,
            importer,
            import_jobs: Arc::new(ImportJobs::new()),
        }
    }
}
