//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! A thin adapter: translates between Diesel rows and domain types, maps
//! database errors to the persistence port error, and nothing else. Every
//! statement is parameterised through the query builder.

use async_trait::async_trait;
use diesel::dsl::count;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::loans::LoanTally;
use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::user::{User, UserFields, UserId};

use super::models::{NewUserRow, UserChangeset, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{loans, users};

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to the persistence port error.
fn map_pool_error(error: PoolError) -> UserPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UserPersistenceError::connection(message)
        }
    }
}

/// Map Diesel errors to the persistence port error.
fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserPersistenceError::connection("database connection error")
        }
        DieselError::DatabaseError(_, _) => UserPersistenceError::query("database error"),
        _ => UserPersistenceError::query("database error"),
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, fields: &UserFields) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let inserted: Option<UserRow> = diesel::insert_into(users::table)
            .values(&NewUserRow::from(fields))
            .on_conflict(users::id_document)
            .do_nothing()
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(inserted.map(User::from))
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = users::table
            .order_by(users::id.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .find(id.get())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(User::from))
    }

    async fn update(
        &self,
        id: UserId,
        fields: &UserFields,
    ) -> Result<bool, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::update(users::table.find(id.get()))
            .set(&UserChangeset::from(fields))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(affected > 0)
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(users::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(affected > 0)
    }

    async fn loans_per_user(&self) -> Result<Vec<LoanTally>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // COUNT over the nullable joined key so zero-loan users tally 0.
        let total_loans = count(loans::id.nullable());
        let rows: Vec<(i32, String, i64)> = users::table
            .left_join(loans::table)
            .group_by((users::id, users::full_name))
            .select((users::id, users::full_name, total_loans))
            .order_by(total_loans.desc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows
            .into_iter()
            .map(|(user_id, full_name, total_loans)| LoanTally {
                user_id,
                full_name,
                total_loans,
            })
            .collect())
    }
}
