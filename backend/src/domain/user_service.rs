//! User domain service.
//!
//! Implements [`UserService`] on top of the shared [`Directory`]. Every call
//! takes the directory lock once, so a duplicate check and the insert that
//! follows it cannot interleave with another request.
//!
//! [`Directory`]: super::Directory

use pagination::PageRequest;
use tracing::{debug, info};

use crate::domain::ports::UserService;
use crate::domain::{Contact, ContactPatch, Error, SharedDirectory, User, UserId};

/// User service backed by the in-memory directory.
#[derive(Debug, Clone, Default)]
pub struct DirectoryUserService {
    directory: SharedDirectory,
}

impl DirectoryUserService {
    /// Create a service over `directory`.
    pub fn new(directory: SharedDirectory) -> Self {
        Self { directory }
    }
}

impl UserService for DirectoryUserService {
    fn find_all_users(&self, page: &PageRequest) -> Result<Vec<User>, Error> {
        let directory = self.directory.read()?;
        Ok(page.window(directory.users().cloned()))
    }

    fn find_users_by_name(
        &self,
        name_part: &str,
        page: &PageRequest,
    ) -> Result<Vec<User>, Error> {
        debug!(name_part, "searching users by name");
        let directory = self.directory.read()?;
        let matches = directory
            .users()
            .filter(|user| user.name().as_str().contains(name_part))
            .cloned();
        Ok(page.window(matches))
    }

    fn create_user(&self, name: &str, phone: &str) -> Result<User, Error> {
        let contact = Contact::try_from_parts(name, phone)?;
        let user = self.directory.write()?.add_user(contact)?;
        info!(user_id = %user.id(), "user created");
        Ok(user)
    }

    fn find_user_by_id(&self, user_id: UserId) -> Result<User, Error> {
        let directory = self.directory.read()?;
        Ok(directory.entry(user_id)?.user().clone())
    }

    fn delete_user(&self, user_id: UserId) -> Result<User, Error> {
        let user = self.directory.write()?.remove_user(user_id)?;
        info!(%user_id, "user deleted");
        Ok(user)
    }

    fn update_user(&self, user_id: UserId, patch: ContactPatch) -> Result<User, Error> {
        let mut directory = self.directory.write()?;
        let contact = patch.apply_to(directory.entry(user_id)?.user().contact())?;
        let user = directory.update_user(user_id, contact)?;
        info!(%user_id, "user updated");
        Ok(user)
    }
}
