//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations exactly; `diesel
//! print-schema` can regenerate them from a live database when the
//! migrations change.

diesel::table! {
    /// Registered library users.
    ///
    /// `id_document` carries the unique business-key constraint both write
    /// paths rely on for their conflict handling.
    users (id) {
        /// Primary key, generated identity.
        id -> Int4,
        /// Full display name.
        full_name -> Varchar,
        /// Unique business key.
        id_document -> Varchar,
        /// Postal address.
        address -> Varchar,
        /// City of residence.
        city -> Varchar,
        /// Contact phone number.
        phone_number -> Varchar,
        /// Contact email, stored lower-cased.
        email -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Book loans, read-only in this system.
    loans (id) {
        /// Primary key, generated identity.
        id -> Int4,
        /// Borrowing user.
        user_id -> Int4,
        /// Title of the borrowed book.
        book_title -> Varchar,
        /// When the loan was taken out.
        loaned_at -> Timestamptz,
    }
}

diesel::joinable!(loans -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(loans, users);
