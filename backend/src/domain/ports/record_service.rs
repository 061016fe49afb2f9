//! Driving port for operations on one user's records.

use pagination::PageRequest;

use crate::domain::{ContactPatch, Error, Record, RecordId, UserId};

/// Domain use-case port for managing the records of a user.
///
/// Every operation first resolves `user_id`; an unknown user is reported as
/// not found before any other validation runs.
#[cfg_attr(test, mockall::automock)]
pub trait RecordService: Send + Sync {
    /// One page of the user's records in ascending id order.
    fn find_all_records(&self, user_id: UserId, page: &PageRequest)
    -> Result<Vec<Record>, Error>;

    /// Add a record unless the user already has one with the same name and
    /// phone.
    fn create_record(&self, user_id: UserId, name: &str, phone: &str) -> Result<Record, Error>;

    /// Fetch one record.
    fn find_record_by_id(&self, user_id: UserId, record_id: RecordId) -> Result<Record, Error>;

    /// First record, by id, whose phone equals `phone` exactly.
    fn find_record_by_phone(&self, user_id: UserId, phone: &str) -> Result<Record, Error>;

    /// Delete one record, returning it.
    fn delete_record(&self, user_id: UserId, record_id: RecordId) -> Result<Record, Error>;

    /// Replace the supplied fields of a record.
    fn update_record(
        &self,
        user_id: UserId,
        record_id: RecordId,
        patch: ContactPatch,
    ) -> Result<Record, Error>;
}
