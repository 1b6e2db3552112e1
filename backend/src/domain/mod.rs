//! Transport-agnostic core: data model, validation, errors, ports, and the
//! bulk import service.

pub mod error;
pub mod import;
pub mod import_jobs;
pub mod loans;
pub mod ports;
pub mod user;

pub use self::error::{Error, ErrorCode};
pub use self::import::{ImportError, ImportSummary, RowIssue};
pub use self::import_jobs::{ImportJobState, ImportJobs};
pub use self::loans::LoanTally;
pub use self::user::{User, UserFields, UserId, UserValidationError};
