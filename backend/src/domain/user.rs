//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::contact::{Contact, ContactName, ContactValidationError, PhoneNumber};
use super::store::StoreKey;

/// Store-assigned user identifier.
///
/// Issued once by the user store and never reused, even after the user is
/// deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw identifier, e.g. one parsed from a request path.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl StoreKey for UserId {
    fn from_sequence(value: u64) -> Self {
        Self(value)
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Phonebook user as exposed to callers.
///
/// The user's records are owned by the directory, not by this snapshot.
///
/// ## Invariants
/// - `name` and `phone` are non-blank.
///
/// Serialises as `{"id": 1, "name": "Alice", "phone": "555"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    id: UserId,
    contact: Contact,
}

impl User {
    /// Build a user from validated components.
    pub fn new(id: UserId, contact: Contact) -> Self {
        Self { id, contact }
    }

    /// Fallible constructor for raw inputs.
    ///
    /// # Errors
    /// Returns [`ContactValidationError`] when name or phone is blank.
    pub fn try_from_parts(
        id: u64,
        name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<Self, ContactValidationError> {
        Ok(Self::new(UserId::new(id), Contact::try_from_parts(name, phone)?))
    }

    /// Stable identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Name and phone pair.
    pub fn contact(&self) -> &Contact {
        &self.contact
    }

    /// User name.
    pub fn name(&self) -> &ContactName {
        self.contact.name()
    }

    /// User phone.
    pub fn phone(&self) -> &PhoneNumber {
        self.contact.phone()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct UserDto {
    id: u64,
    name: String,
    phone: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User { id, contact } = value;
        Self {
            id: id.get(),
            name: contact.name().as_str().to_owned(),
            phone: contact.phone().as_str().to_owned(),
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = ContactValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        User::try_from_parts(value.id, value.name, value.phone)
    }
}
