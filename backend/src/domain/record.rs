//! Contact record owned by a single user.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::contact::{Contact, ContactName, ContactValidationError, PhoneNumber};
use super::store::StoreKey;

/// Record identifier, unique only within the owning user's records.
///
/// Two users may each hold a record with id `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// Wrap a raw identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl StoreKey for RecordId {
    fn from_sequence(value: u64) -> Self {
        Self(value)
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A name and phone entry in a user's phonebook.
///
/// Serialises as `{"id": 1, "name": "Bob", "phone": "2"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordDto", into = "RecordDto")]
pub struct Record {
    id: RecordId,
    contact: Contact,
}

impl Record {
    /// Build a record from validated components.
    pub fn new(id: RecordId, contact: Contact) -> Self {
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
        Ok(Self::new(
            RecordId::new(id),
            Contact::try_from_parts(name, phone)?,
        ))
    }

    /// Identifier within the owning user.
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Name and phone pair.
    pub fn contact(&self) -> &Contact {
        &self.contact
    }

    /// Record name.
    pub fn name(&self) -> &ContactName {
        self.contact.name()
    }

    /// Record phone.
    pub fn phone(&self) -> &PhoneNumber {
        self.contact.phone()
    }

    pub(crate) fn set_contact(&mut self, contact: Contact) {
        self.contact = contact;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RecordDto {
    id: u64,
    name: String,
    phone: String,
}

impl From<Record> for RecordDto {
    fn from(value: Record) -> Self {
        let Record { id, contact } = value;
        Self {
            id: id.get(),
            name: contact.name().as_str().to_owned(),
            phone: contact.phone().as_str().to_owned(),
        }
    }
}

impl TryFrom<RecordDto> for Record {
    type Error = ContactValidationError;

    fn try_from(value: RecordDto) -> Result<Self, Self::Error> {
        Record::try_from_parts(value.id, value.name, value.phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialises_flat_id_name_phone() {
        let record = Record::try_from_parts(1, "Bob", "2").expect("valid record");
        let value = serde_json::to_value(&record).expect("serialise record");
        assert_eq!(value, json!({ "id": 1, "name": "Bob", "phone": "2" }));
    }

    #[test]
    fn set_contact_keeps_identifier() {
        let mut record = Record::try_from_parts(4, "Bob", "2").expect("valid record");
        let contact = Contact::try_from_parts("Bobby", "3").expect("valid contact");
        record.set_contact(contact.clone());
        assert_eq!(record.id(), RecordId::new(4));
        assert_eq!(record.contact(), &contact);
    }
}
