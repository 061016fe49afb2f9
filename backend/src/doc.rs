//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every handler in the inbound layer together with the
//! schema wrappers from [`crate::inbound::http::schemas`], so domain types
//! stay free of utoipa derives.
//!
//! The generated document is served by Swagger UI in debug builds and printed
//! by `cargo run --bin openapi-dump`.

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, RecordSchema, UserSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Phonebook API",
        description = "Users and their contact records, with paging and phone lookup."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::find_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::find_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::records::find_records,
        crate::inbound::http::records::create_record,
        crate::inbound::http::records::find_record_by_phone,
        crate::inbound::http::records::find_record,
        crate::inbound::http::records::update_record,
        crate::inbound::http::records::delete_record,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserSchema, RecordSchema, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "users", description = "Create, find, update and delete users"),
        (name = "records", description = "Contact records owned by a user"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
