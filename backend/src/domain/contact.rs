//! Name and phone values shared by users and their records.
//!
//! Users and records carry the same pair of fields and the same duplicate
//! rule: two entries clash when both name and phone match. [`Contact`] holds
//! that pair so the rule lives in one place (its `PartialEq`).

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::Error;

/// Validation errors raised when building contact values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactValidationError {
    /// The name was empty or whitespace only.
    #[error("name must not be empty")]
    EmptyName,
    /// The phone was empty or whitespace only.
    #[error("phone must not be empty")]
    EmptyPhone,
}

impl ContactValidationError {
    /// Request field the error refers to.
    pub fn field(self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::EmptyPhone => "phone",
        }
    }

    /// Stable machine-readable code for the failure.
    pub fn code(self) -> &'static str {
        match self {
            Self::EmptyName => "empty_name",
            Self::EmptyPhone => "empty_phone",
        }
    }
}

impl From<ContactValidationError> for Error {
    fn from(value: ContactValidationError) -> Self {
        Error::invalid_request(value.to_string()).with_details(json!({
            "field": value.field(),
            "code": value.code(),
        }))
    }
}

macro_rules! non_empty_text {
    ($(#[$meta:meta])* $name:ident => $error:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validate and wrap the value. Surrounding whitespace is kept.
            ///
            /// # Errors
            #[doc = concat!("Returns [`ContactValidationError::", stringify!($error), "`] when the value is blank.")]
            pub fn new(value: impl Into<String>) -> Result<Self, ContactValidationError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(ContactValidationError::$error);
                }
                Ok(Self(value))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ContactValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

non_empty_text! {
    /// Contact name; never blank.
    ContactName => EmptyName
}

non_empty_text! {
    /// Phone number stored verbatim; never blank. Lookups compare it exactly.
    PhoneNumber => EmptyPhone
}

/// Validated name and phone pair.
///
/// Equality compares both fields, which is exactly the duplicate rule for
/// users and for records within one user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Contact {
    name: ContactName,
    phone: PhoneNumber,
}

impl Contact {
    /// Build a contact from validated parts.
    pub fn new(name: ContactName, phone: PhoneNumber) -> Self {
        Self { name, phone }
    }

    /// Validate raw strings into a contact. The name is checked first.
    ///
    /// # Errors
    /// Returns the first [`ContactValidationError`] encountered.
    ///
    /// # Examples
    /// ```
    /// use phonebook::domain::{Contact, ContactValidationError};
    ///
    /// let contact = Contact::try_from_parts("Alice", "555-0100").expect("valid contact");
    /// assert_eq!(contact.name().as_str(), "Alice");
    /// assert_eq!(
    ///     Contact::try_from_parts("Alice", " "),
    ///     Err(ContactValidationError::EmptyPhone)
    /// );
    /// ```
    pub fn try_from_parts(
        name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<Self, ContactValidationError> {
        Ok(Self::new(ContactName::new(name)?, PhoneNumber::new(phone)?))
    }

    /// Contact name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Phone number.
    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }
}

/// Partial update of a contact.
///
/// `None` leaves the field untouched; `Some` replaces it and must pass the
/// same validation as creation. An empty string is therefore a validation
/// failure, never "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    /// Replacement name, if any.
    pub name: Option<String>,
    /// Replacement phone, if any.
    pub phone: Option<String>,
}

impl ContactPatch {
    /// Build a patch from optional replacement values.
    pub fn new(name: Option<String>, phone: Option<String>) -> Self {
        Self { name, phone }
    }

    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none()
    }

    /// Produce the patched contact without touching `current`.
    ///
    /// Every supplied field is validated before any is applied, so a failed
    /// patch leaves the caller free to keep `current` as is.
    ///
    /// # Errors
    /// Returns the first [`ContactValidationError`] among supplied fields.
    pub fn apply_to(&self, current: &Contact) -> Result<Contact, ContactValidationError> {
        let name = match &self.name {
            Some(name) => ContactName::new(name.clone())?,
            None => current.name.clone(),
        };
        let phone = match &self.phone {
            Some(phone) => PhoneNumber::new(phone.clone())?,
            None => current.phone.clone(),
        };
        Ok(Contact::new(name, phone))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn alice() -> Contact {
        Contact::try_from_parts("Alice", "1").expect("valid contact")
    }

    #[rstest]
    #[case("", "1", ContactValidationError::EmptyName)]
    #[case("   ", "1", ContactValidationError::EmptyName)]
    #[case("Alice", "", ContactValidationError::EmptyPhone)]
    #[case("", "", ContactValidationError::EmptyName)]
    fn blank_values_are_rejected(
        #[case] name: &str,
        #[case] phone: &str,
        #[case] expected: ContactValidationError,
    ) {
        assert_eq!(Contact::try_from_parts(name, phone), Err(expected));
    }

    #[rstest]
    fn values_are_stored_verbatim() {
        let contact = Contact::try_from_parts(" Bob ", "+44 20").expect("valid contact");
        assert_eq!(contact.name().as_str(), " Bob ");
        assert_eq!(contact.phone().as_str(), "+44 20");
    }

    #[rstest]
    fn equality_compares_name_and_phone(alice: Contact) {
        let same = Contact::try_from_parts("Alice", "1").expect("valid contact");
        let other_phone = Contact::try_from_parts("Alice", "2").expect("valid contact");
        assert_eq!(alice, same);
        assert_ne!(alice, other_phone);
    }

    #[rstest]
    fn patch_replaces_only_supplied_fields(alice: Contact) {
        let patched = ContactPatch::new(Some("new".to_owned()), None)
            .apply_to(&alice)
            .expect("valid patch");
        assert_eq!(patched.name().as_str(), "new");
        assert_eq!(patched.phone().as_str(), "1");
    }

    #[rstest]
    fn empty_patch_is_identity(alice: Contact) {
        let patch = ContactPatch::default();
        assert!(patch.is_empty());
        assert_eq!(patch.apply_to(&alice), Ok(alice));
    }

    #[rstest]
    fn patch_with_blank_value_fails(alice: Contact) {
        let patch = ContactPatch::new(Some("ok".to_owned()), Some(String::new()));
        assert_eq!(patch.apply_to(&alice), Err(ContactValidationError::EmptyPhone));
    }

    #[rstest]
    fn errors_describe_field_and_code() {
        let err = ContactValidationError::EmptyPhone;
        assert_eq!(err.field(), "phone");
        assert_eq!(err.code(), "empty_phone");
        assert_eq!(err.to_string(), "phone must not be empty");
    }

    #[rstest]
    fn validation_errors_become_invalid_requests() {
        let err = Error::from(ContactValidationError::EmptyName);
        assert_eq!(err.code(), crate::domain::ErrorCode::InvalidRequest);
        assert_eq!(
            err.details(),
            Some(&json!({ "field": "name", "code": "empty_name" }))
        );
    }
}
