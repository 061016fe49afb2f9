//! User store with nested per-user record stores.
//!
//! [`Directory`] composes the generic [`Store`] twice: one store of users,
//! and inside every user entry a store of that user's records. Removing a
//! user drops its record store with it. Duplicate checks and id assignment
//! happen under one `&mut` borrow, so wrapping the directory in a lock
//! ([`SharedDirectory`]) makes them atomic for concurrent callers.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::json;
use tracing::error;

use super::ports::define_port_error;
use super::store::{IdsExhausted, Store};
use super::{Contact, Error, Record, RecordId, User, UserId};

define_port_error! {
    /// Failures raised by directory operations.
    pub enum DirectoryError {
        /// No user has the requested identifier.
        UserNotFound { user_id: u64 } => "user {user_id} not found",
        /// The user exists but has no record with the requested identifier.
        RecordNotFound { user_id: u64, record_id: u64 } =>
            "record {record_id} not found for user {user_id}",
        /// The user exists but none of its records has the requested phone.
        PhoneNotFound { user_id: u64, phone: String } =>
            "no record with phone {phone} for user {user_id}",
        /// Another user already has the same name and phone.
        DuplicateUser => "a user with the same name and phone already exists",
        /// The user already has a record with the same name and phone.
        DuplicateRecord { user_id: u64 } =>
            "user {user_id} already has a record with the same name and phone",
        /// Every identifier in a store has been issued.
        IdsExhausted { store: String } => "{store} identifiers exhausted",
        /// A thread panicked while holding the directory lock.
        Poisoned => "directory lock poisoned",
    }
}

impl From<DirectoryError> for Error {
    fn from(value: DirectoryError) -> Self {
        let code = value.code();
        match &value {
            DirectoryError::UserNotFound { user_id } => Error::not_found(value.to_string())
                .with_details(json!({ "userId": user_id, "code": code })),
            DirectoryError::RecordNotFound { user_id, record_id } => {
                Error::not_found(value.to_string()).with_details(json!({
                    "userId": user_id,
                    "recordId": record_id,
                    "code": code,
                }))
            }
            DirectoryError::PhoneNotFound { user_id, phone } => Error::not_found(value.to_string())
                .with_details(json!({ "userId": user_id, "phone": phone, "code": code })),
            DirectoryError::DuplicateUser => {
                Error::duplicate(value.to_string()).with_details(json!({ "code": code }))
            }
            DirectoryError::DuplicateRecord { user_id } => Error::duplicate(value.to_string())
                .with_details(json!({ "userId": user_id, "code": code })),
            DirectoryError::IdsExhausted { .. } | DirectoryError::Poisoned => {
                error!(error = %value, "directory failure");
                Error::internal(value.to_string())
            }
        }
    }
}

/// A user together with the records it owns.
#[derive(Debug)]
pub struct UserEntry {
    user: User,
    records: Store<RecordId, Record>,
}

impl UserEntry {
    fn new(user: User) -> Self {
        Self {
            user,
            records: Store::new(),
        }
    }

    /// The user's public fields.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Records in ascending id order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Number of records the user owns.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Look up one record.
    ///
    /// # Errors
    /// [`DirectoryError::RecordNotFound`] if absent.
    pub fn record(&self, record_id: RecordId) -> Result<&Record, DirectoryError> {
        self.records
            .get(&record_id)
            .ok_or_else(|| self.record_not_found(record_id))
    }

    /// First record, in id order, whose phone equals `phone` exactly.
    ///
    /// # Errors
    /// [`DirectoryError::PhoneNotFound`] if no record matches.
    pub fn record_by_phone(&self, phone: &str) -> Result<&Record, DirectoryError> {
        self.records()
            .find(|record| record.phone().as_str() == phone)
            .ok_or_else(|| DirectoryError::phone_not_found(self.user.id().get(), phone))
    }

    /// Add a record unless one with the same name and phone exists.
    ///
    /// # Errors
    /// [`DirectoryError::DuplicateRecord`] or [`DirectoryError::IdsExhausted`].
    pub fn add_record(&mut self, contact: Contact) -> Result<Record, DirectoryError> {
        if self.records().any(|record| record.contact() == &contact) {
            return Err(DirectoryError::duplicate_record(self.user.id().get()));
        }
        self.records
            .insert_with(|id| Record::new(id, contact))
            .cloned()
            .map_err(|IdsExhausted| DirectoryError::ids_exhausted("record"))
    }

    /// Replace a record's name and phone. Uniqueness is not re-checked.
    ///
    /// # Errors
    /// [`DirectoryError::RecordNotFound`] if absent.
    pub fn update_record(
        &mut self,
        record_id: RecordId,
        contact: Contact,
    ) -> Result<Record, DirectoryError> {
        let not_found = self.record_not_found(record_id);
        let record = self.records.get_mut(&record_id).ok_or(not_found)?;
        record.set_contact(contact);
        Ok(record.clone())
    }

    /// Remove a record permanently.
    ///
    /// # Errors
    /// [`DirectoryError::RecordNotFound`] if absent.
    pub fn remove_record(&mut self, record_id: RecordId) -> Result<Record, DirectoryError> {
        let not_found = self.record_not_found(record_id);
        self.records.remove(&record_id).ok_or(not_found)
    }

    fn record_not_found(&self, record_id: RecordId) -> DirectoryError {
        DirectoryError::record_not_found(self.user.id().get(), record_id.get())
    }
}

/// All users and, through them, all records.
#[derive(Debug, Default)]
pub struct Directory {
    users: Store<UserId, UserEntry>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Users in ascending id order.
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values().map(UserEntry::user)
    }

    /// Number of users.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Look up a user entry.
    ///
    /// # Errors
    /// [`DirectoryError::UserNotFound`] if absent.
    pub fn entry(&self, user_id: UserId) -> Result<&UserEntry, DirectoryError> {
        self.users
            .get(&user_id)
            .ok_or_else(|| DirectoryError::user_not_found(user_id.get()))
    }

    /// Look up a user entry for mutation.
    ///
    /// # Errors
    /// [`DirectoryError::UserNotFound`] if absent.
    pub fn entry_mut(&mut self, user_id: UserId) -> Result<&mut UserEntry, DirectoryError> {
        self.users
            .get_mut(&user_id)
            .ok_or_else(|| DirectoryError::user_not_found(user_id.get()))
    }

    /// Add a user unless one with the same name and phone exists.
    ///
    /// # Errors
    /// [`DirectoryError::DuplicateUser`] or [`DirectoryError::IdsExhausted`].
    pub fn add_user(&mut self, contact: Contact) -> Result<User, DirectoryError> {
        if self.users().any(|user| user.contact() == &contact) {
            return Err(DirectoryError::duplicate_user());
        }
        self.users
            .insert_with(|id| UserEntry::new(User::new(id, contact)))
            .map(|entry| entry.user.clone())
            .map_err(|IdsExhausted| DirectoryError::ids_exhausted("user"))
    }

    /// Replace a user's name and phone. Uniqueness is not re-checked.
    ///
    /// # Errors
    /// [`DirectoryError::UserNotFound`] if absent.
    pub fn update_user(
        &mut self,
        user_id: UserId,
        contact: Contact,
    ) -> Result<User, DirectoryError> {
        let entry = self.entry_mut(user_id)?;
        entry.user = User::new(user_id, contact);
        Ok(entry.user.clone())
    }

    /// Remove a user and every record it owns.
    ///
    /// # Errors
    /// [`DirectoryError::UserNotFound`] if absent.
    pub fn remove_user(&mut self, user_id: UserId) -> Result<User, DirectoryError> {
        self.users
            .remove(&user_id)
            .map(|entry| entry.user)
            .ok_or_else(|| DirectoryError::user_not_found(user_id.get()))
    }
}

/// Thread-safe handle to one [`Directory`] shared by both services.
///
/// Reads take the shared lock and mutations the exclusive lock. A poisoned
/// lock is reported as [`DirectoryError::Poisoned`] rather than a panic.
#[derive(Debug, Clone, Default)]
pub struct SharedDirectory {
    inner: Arc<RwLock<Directory>>,
}

impl SharedDirectory {
    /// Wrap an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire shared read access.
    ///
    /// # Errors
    /// [`DirectoryError::Poisoned`] if a writer panicked.
    pub fn read(&self) -> Result<RwLockReadGuard<'_, Directory>, DirectoryError> {
        self.inner.read().map_err(|_| DirectoryError::poisoned())
    }

    /// Acquire exclusive write access.
    ///
    /// # Errors
    /// [`DirectoryError::Poisoned`] if a writer panicked.
    pub fn write(&self) -> Result<RwLockWriteGuard<'_, Directory>, DirectoryError> {
        self.inner.write().map_err(|_| DirectoryError::poisoned())
    }

    /// Whether the lock is still usable.
    pub fn is_healthy(&self) -> bool {
        !self.inner.is_poisoned()
    }
}
