//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable with mocks.

use std::sync::Arc;

use crate::domain::ports::{RecordService, UserService};
use crate::domain::{DirectoryRecordService, DirectoryUserService, SharedDirectory};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserService>,
    pub records: Arc<dyn RecordService>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use phonebook::domain::{DirectoryRecordService, DirectoryUserService, SharedDirectory};
    /// use phonebook::inbound::http::state::HttpState;
    ///
    /// let directory = SharedDirectory::new();
    /// let state = HttpState::new(
    ///     Arc::new(DirectoryUserService::new(directory.clone())),
    ///     Arc::new(DirectoryRecordService::new(directory)),
    /// );
    /// let _users = state.users.clone();
    /// ```
    pub fn new(users: Arc<dyn UserService>, records: Arc<dyn RecordService>) -> Self {
        Self { users, records }
    }

    /// Wire both services to one shared directory.
    pub fn from_directory(directory: SharedDirectory) -> Self {
        Self::new(
            Arc::new(DirectoryUserService::new(directory.clone())),
            Arc::new(DirectoryRecordService::new(directory)),
        )
    }
}
