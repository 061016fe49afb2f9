//! Domain primitives, storage and services.
//!
//! Purpose: model phonebook users and their records, enforce the duplicate
//! and validation rules, and expose the use cases as driving ports. Nothing in
//! here depends on the HTTP framework.
//!
//! Public surface:
//! - User, Record (with UserId, RecordId): entities returned to callers.
//! - Contact, ContactPatch: the name and phone pair and partial updates.
//! - Directory, SharedDirectory: nested in-memory stores behind one lock.
//! - DirectoryUserService, DirectoryRecordService: port implementations.
//! - Error, ErrorCode: transport-agnostic failure payload.

pub mod contact;
pub mod directory;
pub mod error;
pub mod ports;
pub mod record;
mod record_service;
pub mod store;
pub mod trace_id;
pub mod user;
mod user_service;

pub use self::contact::{Contact, ContactName, ContactPatch, ContactValidationError, PhoneNumber};
pub use self::directory::{Directory, DirectoryError, SharedDirectory, UserEntry};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::record::{Record, RecordId};
pub use self::record_service::DirectoryRecordService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserId};
pub use self::user_service::DirectoryUserService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use phonebook::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<u64> {
///     Err(Error::not_found("user 7 not found"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
