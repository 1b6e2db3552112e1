//! Registry of background import runs.
//!
//! The CSV trigger endpoint answers before the import finishes, so every
//! run is registered here under a generated identifier the caller can poll.
//! The registry is process-local; nothing here survives a restart, and
//! nothing prevents two imports from running at the same time.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::import::ImportSummary;

/// Lifecycle of one registered import run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportJobState {
    /// The background task is still working through the resource.
    Running { started_at: DateTime<Utc> },
    /// The run finished; per-row outcomes are in the summary.
    Completed {
        finished_at: DateTime<Utc>,
        summary: ImportSummary,
    },
    /// The run could not proceed at all.
    Failed {
        finished_at: DateTime<Utc>,
        message: String,
    },
}

/// Process-wide registry of import runs.
///
/// Interior mutability keeps the registry shareable behind an `Arc` from
/// both the HTTP handlers and the spawned import tasks.
#[derive(Debug, Default)]
pub struct ImportJobs {
    jobs: RwLock<HashMap<Uuid, ImportJobState>>,
}

impl ImportJobs {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new run and return its identifier.
    pub fn start(&self) -> Uuid {
        let id = Uuid::new_v4();
        let mut jobs = self.jobs.write().unwrap_or_else(|e| e.into_inner());
        jobs.insert(
            id,
            ImportJobState::Running {
                started_at: Utc::now(),
            },
        );
        id
    }

    /// Record a successful completion.
    pub fn complete(&self, id: Uuid, summary: ImportSummary) {
        let mut jobs = self.jobs.write().unwrap_or_else(|e| e.into_inner());
        jobs.insert(
            id,
            ImportJobState::Completed {
                finished_at: Utc::now(),
                summary,
            },
        );
    }

    /// Record a whole-run failure.
    pub fn fail(&self, id: Uuid, message: impl Into<String>) {
        let mut jobs = self.jobs.write().unwrap_or_else(|e| e.into_inner());
        jobs.insert(
            id,
            ImportJobState::Failed {
                finished_at: Utc::now(),
                message: message.into(),
            },
        );
    }

    /// Look up the state of a run.
    pub fn get(&self, id: Uuid) -> Option<ImportJobState> {
        let jobs = self.jobs.read().unwrap_or_else(|e| e.into_inner());
        jobs.get(&id).cloned()
    }
}
