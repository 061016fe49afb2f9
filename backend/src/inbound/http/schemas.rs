//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror the wire shape of their domain counterparts and are
//! registered under the domain type's name.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// A required value is missing, empty, or malformed.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Another entry in the same scope has the same name and phone.
    #[schema(rename = "duplicate")]
    Duplicate,
    /// The referenced user or record does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "user 7 not found")]
    message: String,
    /// Correlation identifier, also sent in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Field, code and identifiers describing the failure.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Store-assigned identifier, starting at 1.
    #[schema(example = 1)]
    id: u64,
    /// Non-blank user name.
    #[schema(example = "Alice")]
    name: String,
    /// Non-blank phone number.
    #[schema(example = "+44 20 7946 0000")]
    phone: String,
}

/// OpenAPI schema for [`crate::domain::Record`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Record)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct RecordSchema {
    /// Identifier within the owning user, starting at 1.
    #[schema(example = 1)]
    id: u64,
    /// Non-blank contact name.
    #[schema(example = "Mum")]
    name: String,
    /// Non-blank phone number.
    #[schema(example = "+44 20 7946 0001")]
    phone: String,
}
