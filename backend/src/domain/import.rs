//! Bulk user ingestion from a CSV resource.
//!
//! The import is best-effort by contract: structurally incomplete rows are
//! skipped with a warning, duplicate id documents are ignored by the
//! storage layer, and a failure inserting one row never aborts the rows
//! after it. The whole run is summarised in an [`ImportSummary`] so the
//! caller is not left guessing what a background import actually did.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::domain::ports::UserRepository;
use crate::domain::user::UserFields;

/// Header columns the CSV resource must carry, in any order.
pub const CSV_COLUMNS: [&str; 6] = [
    "full_name",
    "id_document",
    "address",
    "city",
    "phone_number",
    "email",
];

/// Failures that prevent an import run from starting at all.
///
/// Anything that happens after the header is parsed is per-row and lands in
/// the [`ImportSummary`] instead.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The CSV resource could not be opened.
    #[error("failed to open csv resource {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The header row could not be read.
    #[error("failed to read csv header: {0}")]
    Header(#[source] csv::Error),

    /// A required column is absent from the header row.
    #[error("csv resource is missing required column {0}")]
    MissingColumn(&'static str),

    /// Storage for the run could not be prepared.
    #[error("failed to prepare import storage: {message}")]
    Storage { message: String },
}

/// A problem encountered on one data row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RowIssue {
    /// 1-based line number in the CSV resource (the header is line 1).
    pub line: u64,
    /// Human-readable reason the row was not inserted.
    pub reason: String,
}

/// Accumulated outcome of one import run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ImportSummary {
    /// Rows inserted as new users.
    pub inserted: u64,
    /// Rows ignored because a user with the same id document already exists.
    pub duplicates: u64,
    /// Rows discarded before insertion for missing or empty fields.
    pub skipped: u64,
    /// Rows whose insert attempt failed.
    pub failed: u64,
    /// Per-row detail for everything that was not inserted cleanly.
    pub issues: Vec<RowIssue>,
}

/// Positions of the required columns within the header row.
struct ColumnIndices {
    full_name: usize,
    id_document: usize,
    address: usize,
    city: usize,
    phone_number: usize,
    email: usize,
}

impl ColumnIndices {
    fn from_headers(headers: &StringRecord) -> Result<Self, ImportError> {
        let position = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(ImportError::MissingColumn(name))
        };
        Ok(Self {
            full_name: position("full_name")?,
            id_document: position("id_document")?,
            address: position("address")?,
            city: position("city")?,
            phone_number: position("phone_number")?,
            email: position("email")?,
        })
    }

    /// Extract the six fields, trimmed. `None` when any is missing or empty.
    fn extract(&self, record: &StringRecord) -> Option<UserFields> {
        let cell = |index: usize| {
            record
                .get(index)
                .map(str::trim)
                .filter(|value| !value.is_empty())
        };
        Some(UserFields::normalised(
            cell(self.full_name)?,
            cell(self.id_document)?,
            cell(self.address)?,
            cell(self.city)?,
            cell(self.phone_number)?,
            cell(self.email)?,
        ))
    }
}

/// Read `path` once, front to back, inserting every structurally complete
/// row through `repository`. The header must carry every name in
/// [`CSV_COLUMNS`], in any order.
///
/// Rows are inserted independently; see [`ImportSummary`] for how each kind
/// of outcome is counted. Field validation beyond presence is deliberately
/// not applied here: the import mirrors whatever the resource holds, and
/// storage constraints are the safety net.
pub async fn import_users_from_csv(
    repository: &dyn UserRepository,
    path: &Path,
) -> Result<ImportSummary, ImportError> {
    let file = File::open(path).map_err(|source| ImportError::Open {
        path: path.display().to_string(),
        source,
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers = reader.headers().map_err(ImportError::Header)?.clone();
    let columns = ColumnIndices::from_headers(&headers)?;

    let mut summary = ImportSummary::default();
    for (index, result) in reader.records().enumerate() {
        // Data starts on line 2; the header occupies line 1.
        let line = index as u64 + 2;
        let record = match result {
            Ok(record) => record,
            Err(error) => {
                warn!(line, %error, "unreadable csv row, continuing");
                summary.failed += 1;
                summary.issues.push(RowIssue {
                    line,
                    reason: format!("unreadable row: {error}"),
                });
                continue;
            }
        };

        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }

        let Some(fields) = columns.extract(&record) else {
            warn!(line, "row discarded: missing required field");
            summary.skipped += 1;
            summary.issues.push(RowIssue {
                line,
                reason: "missing required field".to_owned(),
            });
            continue;
        };

        match repository.insert(&fields).await {
            Ok(Some(_)) => summary.inserted += 1,
            Ok(None) => summary.duplicates += 1,
            Err(error) => {
                warn!(line, %error, "row insert failed, continuing");
                summary.failed += 1;
                summary.issues.push(RowIssue {
                    line,
                    reason: error.to_string(),
                });
            }
        }
    }

    info!(
        inserted = summary.inserted,
        duplicates = summary.duplicates,
        skipped = summary.skipped,
        failed = summary.failed,
        "csv import finished"
    );
    Ok(summary)
}
