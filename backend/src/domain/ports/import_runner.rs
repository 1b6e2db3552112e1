//! Driving port for launching a bulk user import.
//!
//! The HTTP trigger endpoint only needs "run one import to completion";
//! production backs this with a CSV-over-PostgreSQL runner, tests with a
//! canned implementation.

use async_trait::async_trait;

use crate::domain::import::{ImportError, ImportSummary};

/// Execute one complete import run.
#[async_trait]
pub trait ImportRunner: Send + Sync {
    /// Run the import to completion and report the accumulated outcome.
    ///
    /// Per-row problems are part of the [`ImportSummary`]; an `Err` means
    /// the run as a whole could not proceed (unreadable resource, missing
    /// header columns).
    async fn run(&self) -> Result<ImportSummary, ImportError>;
}
