//! Loan aggregates.
//!
//! Loans are read-only in this system; the only view the domain exposes is
//! the per-user count behind the books-by-user report.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of the loans-per-user report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LoanTally {
    /// Identifier of the user the loans belong to.
    #[schema(example = 1)]
    pub user_id: i32,
    /// The user's full name.
    #[schema(example = "Ada Lovelace")]
    pub full_name: String,
    /// Number of loans recorded for the user; zero when none exist.
    #[schema(example = 3)]
    pub total_loans: i64,
}
