//! User data model and field validation.
//!
//! Validation is expressed as pure, deterministic checks over already
//! normalised strings. Callers are expected to trim every field and
//! lower-case the email before handing values to [`UserFields`]; the
//! [`UserFields::normalised`] constructor does exactly that.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Minimum length for a full name.
pub const NAME_MIN: usize = 2;
/// Minimum length of an identity document once internal whitespace is removed.
pub const ID_DOCUMENT_MIN: usize = 5;
/// Minimum length for an address.
pub const ADDRESS_MIN: usize = 5;
/// Minimum length for a phone number.
pub const PHONE_MIN: usize = 7;

/// Validation errors raised by the field checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    NameTooShort { min: usize },
    NameInvalidCharacters,
    IdDocumentTooShort { min: usize },
    IdDocumentInvalidCharacters,
    AddressTooShort { min: usize },
    EmptyCity,
    PhoneTooShort { min: usize },
    PhoneInvalidCharacters,
    InvalidEmail,
    NonPositiveId,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameTooShort { min } => {
                write!(f, "full name must be at least {min} characters")
            }
            Self::NameInvalidCharacters => {
                write!(f, "full name may only contain letters and spaces")
            }
            Self::IdDocumentTooShort { min } => {
                write!(f, "id document must be at least {min} characters")
            }
            Self::IdDocumentInvalidCharacters => {
                write!(f, "id document may only contain letters and digits")
            }
            Self::AddressTooShort { min } => {
                write!(f, "address must be at least {min} characters")
            }
            Self::EmptyCity => write!(f, "city must not be empty"),
            Self::PhoneTooShort { min } => {
                write!(f, "phone number must be at least {min} characters")
            }
            Self::PhoneInvalidCharacters => write!(
                f,
                "phone number may only contain digits, spaces, parentheses, '+' or '-'",
            ),
            Self::InvalidEmail => write!(f, "email must look like local@domain.tld"),
            Self::NonPositiveId => write!(f, "user id must be a positive integer"),
        }
    }
}

impl std::error::Error for UserValidationError {}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Deliberately permissive: one local part, one domain, at least one
        // dot after the '@', no whitespace anywhere.
        let pattern = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Check a full name: at least [`NAME_MIN`] characters, letters and spaces
/// only. Accented Latin letters count as letters.
pub fn validate_name(value: &str) -> Result<(), UserValidationError> {
    if value.chars().count() < NAME_MIN {
        return Err(UserValidationError::NameTooShort { min: NAME_MIN });
    }
    if !value.chars().all(|c| c.is_alphabetic() || c == ' ') {
        return Err(UserValidationError::NameInvalidCharacters);
    }
    Ok(())
}

/// Check an identity document: internal whitespace is stripped before the
/// length and character checks, so `"ab 3d5"` and `"ab3d5"` are equivalent.
pub fn validate_id_document(value: &str) -> Result<(), UserValidationError> {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.chars().count() < ID_DOCUMENT_MIN {
        return Err(UserValidationError::IdDocumentTooShort {
            min: ID_DOCUMENT_MIN,
        });
    }
    if !compact.chars().all(char::is_alphanumeric) {
        return Err(UserValidationError::IdDocumentInvalidCharacters);
    }
    Ok(())
}

/// Check an address: length only, no character-class restriction.
pub fn validate_address(value: &str) -> Result<(), UserValidationError> {
    if value.chars().count() < ADDRESS_MIN {
        return Err(UserValidationError::AddressTooShort { min: ADDRESS_MIN });
    }
    Ok(())
}

/// Check a city: presence only.
pub fn validate_city(value: &str) -> Result<(), UserValidationError> {
    if value.is_empty() {
        return Err(UserValidationError::EmptyCity);
    }
    Ok(())
}

/// Check a phone number: at least [`PHONE_MIN`] characters drawn from
/// digits, spaces, parentheses, `+` and `-`.
pub fn validate_phone(value: &str) -> Result<(), UserValidationError> {
    if value.chars().count() < PHONE_MIN {
        return Err(UserValidationError::PhoneTooShort { min: PHONE_MIN });
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'))
    {
        return Err(UserValidationError::PhoneInvalidCharacters);
    }
    Ok(())
}

/// Check an email address against the permissive `local@domain.tld` shape.
pub fn validate_email(value: &str) -> Result<(), UserValidationError> {
    if !email_regex().is_match(value) {
        return Err(UserValidationError::InvalidEmail);
    }
    Ok(())
}

/// Positive identifier of a stored user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(i32);

impl UserId {
    /// Validate and construct a [`UserId`] from a raw integer.
    pub fn new(raw: i32) -> Result<Self, UserValidationError> {
        if raw < 1 {
            return Err(UserValidationError::NonPositiveId);
        }
        Ok(Self(raw))
    }

    /// Access the underlying integer.
    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Candidate user fields, normalised but not necessarily valid.
///
/// The manual write path runs [`UserFields::validate`] before any storage
/// call; the bulk importer only checks presence, mirroring the best-effort
/// ingestion contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFields {
    pub full_name: String,
    pub id_document: String,
    pub address: String,
    pub city: String,
    pub phone_number: String,
    pub email: String,
}

impl UserFields {
    /// Build normalised fields: every value trimmed, the email lower-cased.
    pub fn normalised(
        full_name: &str,
        id_document: &str,
        address: &str,
        city: &str,
        phone_number: &str,
        email: &str,
    ) -> Self {
        Self {
            full_name: full_name.trim().to_owned(),
            id_document: id_document.trim().to_owned(),
            address: address.trim().to_owned(),
            city: city.trim().to_owned(),
            phone_number: phone_number.trim().to_owned(),
            email: email.trim().to_lowercase(),
        }
    }

    /// Run every field check, stopping at the first failure.
    ///
    /// Checks run in declaration order so adapters can report the first
    /// offending field.
    pub fn validate(&self) -> Result<(), UserValidationError> {
        validate_name(&self.full_name)?;
        validate_id_document(&self.id_document)?;
        validate_address(&self.address)?;
        validate_city(&self.city)?;
        validate_phone(&self.phone_number)?;
        validate_email(&self.email)?;
        Ok(())
    }
}

/// Stored application user.
///
/// ## Invariants
/// - `id` is generated by storage and positive.
/// - Field values are stored exactly as normalised by the write path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Generated primary key.
    #[schema(example = 1)]
    pub id: i32,
    /// Full display name.
    #[schema(example = "Ada Lovelace")]
    pub full_name: String,
    /// Unique business key.
    #[schema(example = "CC10203040")]
    pub id_document: String,
    /// Postal address.
    pub address: String,
    /// City of residence.
    pub city: String,
    /// Contact phone number.
    #[schema(example = "+44 20 7946 0958")]
    pub phone_number: String,
    /// Contact email, stored lower-cased.
    #[schema(example = "ada@example.com")]
    pub email: String,
}

#[cfg(test)]
mod tests {
    //! Case tables for the field validators and normalisation rules.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", false)]
    #[case("a", false)]
    #[case("ab", true)]
    #[case("Ada Lovelace", true)]
    #[case("José Núñez", true)]
    #[case("R2D2", false)]
    #[case("Ada-Lovelace", false)]
    fn name_rules(#[case] value: &str, #[case] valid: bool) {
        assert_eq!(validate_name(value).is_ok(), valid, "{value:?}");
    }

    #[rstest]
    #[case(" ab3d ", false)] // compacts to four characters
    #[case("ab3d5", true)]
    #[case("ab 3d5", true)] // internal whitespace is stripped
    #[case("ab-3d5", false)]
    #[case("", false)]
    fn id_document_rules(#[case] value: &str, #[case] valid: bool) {
        assert_eq!(validate_id_document(value).is_ok(), valid, "{value:?}");
    }

    #[rstest]
    #[case("1234", false)]
    #[case("12345", true)]
    #[case("5 Elm St.", true)]
    fn address_rules(#[case] value: &str, #[case] valid: bool) {
        assert_eq!(validate_address(value).is_ok(), valid, "{value:?}");
    }

    #[rstest]
    #[case("123456", false)]
    #[case("1234567", true)]
    #[case("+44 (20) 7946-0958", true)]
    #[case("12345x7", false)]
    fn phone_rules(#[case] value: &str, #[case] valid: bool) {
        assert_eq!(validate_phone(value).is_ok(), valid, "{value:?}");
    }

    #[rstest]
    #[case("a@b.c", true)]
    #[case("a@b", false)]
    #[case("a b@c.d", false)]
    #[case("a@b c.d", false)]
    #[case("ada.lovelace@example.co.uk", true)]
    #[case("@b.c", false)]
    #[case("a@b.", false)]
    fn email_rules(#[case] value: &str, #[case] valid: bool) {
        assert_eq!(validate_email(value).is_ok(), valid, "{value:?}");
    }

    #[test]
    fn normalised_trims_and_lowercases() {
        let fields = UserFields::normalised(
            "  Ada Lovelace  ",
            " CC10203040 ",
            " 12 Analytical Row ",
            " London ",
            " +44 20 7946 0958 ",
            " Ada@Example.COM ",
        );
        assert_eq!(fields.full_name, "Ada Lovelace");
        assert_eq!(fields.id_document, "CC10203040");
        assert_eq!(fields.email, "ada@example.com");
        assert!(fields.validate().is_ok());
    }

    #[test]
    fn validate_reports_first_failing_field() {
        let fields = UserFields::normalised("A", "bad", "x", "", "1", "nope");
        assert_eq!(
            fields.validate(),
            Err(UserValidationError::NameTooShort { min: NAME_MIN })
        );
    }

    #[rstest]
    #[case(0)]
    #[case(-3)]
    fn user_id_rejects_non_positive(#[case] raw: i32) {
        assert_eq!(
            UserId::new(raw),
            Err(UserValidationError::NonPositiveId)
        );
    }

    #[test]
    fn user_id_exposes_raw_value() {
        let id = UserId::new(7).expect("positive id");
        assert_eq!(id.get(), 7);
    }
}
