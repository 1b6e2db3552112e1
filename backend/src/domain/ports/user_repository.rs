//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::loans::LoanTally;
use crate::domain::user::{User, UserFields, UserId};

/// Persistence errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserPersistenceError {
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },

    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query { message: String },
}

impl UserPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Persistence port for the users table and its loan report.
///
/// Every statement behind this port is parameterised; adapters never build
/// SQL from request strings. Inserts use "do nothing on conflict" semantics
/// over the unique `id_document` key, surfaced as `None`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user, ignoring the write when a record with the same
    /// `id_document` already exists. Returns the stored row, or `None` when
    /// the conflict branch left zero rows affected.
    async fn insert(&self, fields: &UserFields) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch all users, ordered by identifier.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Replace every field of an existing record. Returns `false` when the
    /// identifier matched no row.
    async fn update(&self, id: UserId, fields: &UserFields)
    -> Result<bool, UserPersistenceError>;

    /// Delete a user by identifier. Returns `false` when the identifier
    /// matched no row.
    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError>;

    /// Count loans per user via an outer join, so users without loans appear
    /// with a zero count. Ordered by count, descending.
    async fn loans_per_user(&self) -> Result<Vec<LoanTally>, UserPersistenceError>;
}
