//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::user::{User, UserFields};

use super::schema::users;

/// Row struct for reading from the users table.
///
/// Audit timestamps are deliberately not selected; the wire model does not
/// expose them.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub full_name: String,
    pub id_document: String,
    pub address: String,
    pub city: String,
    pub phone_number: String,
    pub email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            full_name: row.full_name,
            id_document: row.id_document,
            address: row.address,
            city: row.city,
            phone_number: row.phone_number,
            email: row.email,
        }
    }
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub full_name: &'a str,
    pub id_document: &'a str,
    pub address: &'a str,
    pub city: &'a str,
    pub phone_number: &'a str,
    pub email: &'a str,
}

impl<'a> From<&'a UserFields> for NewUserRow<'a> {
    fn from(fields: &'a UserFields) -> Self {
        Self {
            full_name: &fields.full_name,
            id_document: &fields.id_document,
            address: &fields.address,
            city: &fields.city,
            phone_number: &fields.phone_number,
            email: &fields.email,
        }
    }
}

/// Changeset struct for full-record replacement of existing users.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserChangeset<'a> {
    pub full_name: &'a str,
    pub id_document: &'a str,
    pub address: &'a str,
    pub city: &'a str,
    pub phone_number: &'a str,
    pub email: &'a str,
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a UserFields> for UserChangeset<'a> {
    fn from(fields: &'a UserFields) -> Self {
        Self {
            full_name: &fields.full_name,
            id_document: &fields.id_document,
            address: &fields.address,
            city: &fields.city,
            phone_number: &fields.phone_number,
            email: &fields.email,
            updated_at: Utc::now(),
        }
    }
}
