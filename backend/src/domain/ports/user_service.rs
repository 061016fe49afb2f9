//! Driving port for user operations.
//!
//! HTTP handlers depend on this trait rather than on the directory, so the
//! adapter can be exercised against a mock and the domain can swap its
//! storage without touching the inbound layer.

use pagination::PageRequest;

use crate::domain::{ContactPatch, Error, User, UserId};

/// Domain use-case port for managing users.
#[cfg_attr(test, mockall::automock)]
pub trait UserService: Send + Sync {
    /// One page of all users in ascending id order.
    fn find_all_users(&self, page: &PageRequest) -> Result<Vec<User>, Error>;

    /// One page of users whose name contains `name_part`.
    ///
    /// Matching is a case-sensitive substring test.
    fn find_users_by_name(&self, name_part: &str, page: &PageRequest)
    -> Result<Vec<User>, Error>;

    /// Create a user unless another one has the same name and phone.
    fn create_user(&self, name: &str, phone: &str) -> Result<User, Error>;

    /// Fetch one user.
    fn find_user_by_id(&self, user_id: UserId) -> Result<User, Error>;

    /// Delete a user together with all of its records, returning the user.
    fn delete_user(&self, user_id: UserId) -> Result<User, Error>;

    /// Replace the supplied fields of a user.
    fn update_user(&self, user_id: UserId, patch: ContactPatch) -> Result<User, Error>;
}
