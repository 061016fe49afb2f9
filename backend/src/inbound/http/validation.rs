//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every failure here is an `invalid_request` whose `details` name the
//! offending field and a stable `code`.

use std::fmt;

use pagination::{PageParams, PageRequest, PageRequestError};
use serde_json::json;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    MalformedQuery,
    MalformedPath,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::MalformedQuery => "malformed_query",
            ErrorCode::MalformedPath => "malformed_path",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

pub(crate) const NAME: FieldName = FieldName::new("name");
pub(crate) const PHONE: FieldName = FieldName::new("phone");

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": ErrorCode::MissingField.as_str(),
    }))
}

/// Unwrap a required query parameter.
///
/// Presence is all that is checked; blank values are left to the domain so
/// they surface with the domain's own error code.
pub(crate) fn require(value: Option<String>, field: FieldName) -> Result<String, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

/// Validate raw paging parameters, applying the defaults.
pub(crate) fn page_request(params: PageParams) -> Result<PageRequest, Error> {
    PageRequest::try_from(params).map_err(page_request_error)
}

fn page_request_error(err: PageRequestError) -> Error {
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": err.field(),
        "value": err.value(),
        "code": err.code(),
    }))
}

pub(crate) fn malformed_query_error(err: impl fmt::Display) -> Error {
    Error::invalid_request(format!("malformed query string: {err}"))
        .with_details(json!({ "code": ErrorCode::MalformedQuery.as_str() }))
}

pub(crate) fn malformed_path_error(err: impl fmt::Display) -> Error {
    Error::invalid_request(format!("malformed path parameter: {err}"))
        .with_details(json!({ "code": ErrorCode::MalformedPath.as_str() }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode as DomainCode;
    use rstest::rstest;

    #[rstest]
    fn missing_field_names_the_field() {
        let err = require(None, PHONE).expect_err("missing");
        assert_eq!(err.code(), DomainCode::InvalidRequest);
        assert_eq!(
            err.details(),
            Some(&json!({ "field": "phone", "code": "missing_field" }))
        );
    }

    #[rstest]
    #[case(Some(String::new()))]
    #[case(Some("Alice".to_owned()))]
    fn present_values_pass_through(#[case] value: Option<String>) {
        assert_eq!(require(value.clone(), NAME).ok(), value);
    }

    #[rstest]
    fn omitted_paging_uses_defaults() {
        let page = page_request(PageParams::default()).expect("defaults are valid");
        assert_eq!((page.page_number(), page.page_size()), (0, 3));
    }

    #[rstest]
    #[case(PageParams { page_number: Some(-1), page_size: None }, "pageNumber", -1)]
    #[case(PageParams { page_number: None, page_size: Some(0) }, "pageSize", 0)]
    fn invalid_paging_is_rejected(
        #[case] params: PageParams,
        #[case] field: &str,
        #[case] value: i64,
    ) {
        let err = page_request(params).expect_err("invalid");
        let details = err.details().expect("details");
        assert_eq!(details["field"], json!(field));
        assert_eq!(details["value"], json!(value));
    }
}
