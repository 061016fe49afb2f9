//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use serde_json::Value;

use super::configure;
use super::state::HttpState;
use crate::Trace;
use crate::domain::ports::{MockRecordService, MockUserService};

/// Build state from port mocks.
pub fn mock_state(users: MockUserService, records: MockRecordService) -> HttpState {
    HttpState::new(Arc::new(users), Arc::new(records))
}

/// Build the API app around `state`, traced like production.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(configure)
}

/// Read `details.<key>` from an error body.
pub fn detail<'a>(body: &'a Value, key: &str) -> Option<&'a str> {
    body.get("details")
        .and_then(|details| details.get(key))
        .and_then(Value::as_str)
}
