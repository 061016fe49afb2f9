//! Record domain service.
//!
//! Records live inside their owning user's entry, so every operation resolves
//! the user before touching a record. An unknown user therefore wins over any
//! other failure, including invalid input.

use pagination::PageRequest;
use tracing::{debug, info};

use crate::domain::ports::RecordService;
use crate::domain::{Contact, ContactPatch, Error, Record, RecordId, SharedDirectory, UserId};

/// Record service backed by the in-memory directory.
#[derive(Debug, Clone, Default)]
pub struct DirectoryRecordService {
    directory: SharedDirectory,
}

impl DirectoryRecordService {
    /// Create a service over `directory`.
    ///
    /// Pass the same handle given to the user service so deleting a user also
    /// removes the records visible here.
    pub fn new(directory: SharedDirectory) -> Self {
        Self { directory }
    }
}

impl RecordService for DirectoryRecordService {
    fn find_all_records(&self, user_id: UserId, page: &PageRequest) -> Result<Vec<Record>, Error> {
        let directory = self.directory.read()?;
        let entry = directory.entry(user_id)?;
        Ok(page.window(entry.records().cloned()))
    }

    fn create_record(&self, user_id: UserId, name: &str, phone: &str) -> Result<Record, Error> {
        let mut directory = self.directory.write()?;
        let entry = directory.entry_mut(user_id)?;
        let record = entry.add_record(Contact::try_from_parts(name, phone)?)?;
        info!(%user_id, record_id = %record.id(), "record created");
        Ok(record)
    }

    fn find_record_by_id(&self, user_id: UserId, record_id: RecordId) -> Result<Record, Error> {
        let directory = self.directory.read()?;
        Ok(directory.entry(user_id)?.record(record_id)?.clone())
    }

    fn find_record_by_phone(&self, user_id: UserId, phone: &str) -> Result<Record, Error> {
        debug!(%user_id, phone, "looking up record by phone");
        let directory = self.directory.read()?;
        Ok(directory.entry(user_id)?.record_by_phone(phone)?.clone())
    }

    fn delete_record(&self, user_id: UserId, record_id: RecordId) -> Result<Record, Error> {
        let mut directory = self.directory.write()?;
        let record = directory.entry_mut(user_id)?.remove_record(record_id)?;
        info!(%user_id, %record_id, "record deleted");
        Ok(record)
    }

    fn update_record(
        &self,
        user_id: UserId,
        record_id: RecordId,
        patch: ContactPatch,
    ) -> Result<Record, Error> {
        let mut directory = self.directory.write()?;
        let entry = directory.entry_mut(user_id)?;
        let contact = patch.apply_to(entry.record(record_id)?.contact())?;
        let record = entry.update_record(record_id, contact)?;
        info!(%user_id, %record_id, "record updated");
        Ok(record)
    }
}

#[cfg(test)]
#[path = "record_service_tests.rs"]
mod tests;
