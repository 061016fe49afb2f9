//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod record_service;
mod user_service;

#[cfg(test)]
pub use record_service::MockRecordService;
pub use record_service::RecordService;
#[cfg(test)]
pub use user_service::MockUserService;
pub use user_service::UserService;
