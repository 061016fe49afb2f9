//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod params;
pub mod records;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register the users and records endpoints.
///
/// Query and path extraction failures are answered with the same JSON error
/// body as domain failures. `by_phone` is registered ahead of `{rid}` so it
/// is never parsed as a record identifier.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use phonebook::domain::SharedDirectory;
/// use phonebook::inbound::http::{configure, state::HttpState};
///
/// let state = HttpState::from_directory(SharedDirectory::new());
/// let _app = App::new()
///     .app_data(web::Data::new(state))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| validation::malformed_query_error(err).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| validation::malformed_path_error(err).into()),
    )
    .service(users::find_users)
    .service(users::create_user)
    .service(users::find_user)
    .service(users::update_user)
    .service(users::delete_user)
    .service(records::find_records)
    .service(records::create_record)
    .service(records::find_record_by_phone)
    .service(records::find_record)
    .service(records::update_record)
    .service(records::delete_record);
}
