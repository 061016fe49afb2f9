//! Query-string parameter shapes shared by the users and records handlers.
//!
//! Every field is optional at the serde level so a missing value reaches the
//! handler, which decides between a default and a `missing_field` error.

use pagination::PageParams;
use serde::Deserialize;
use utoipa::IntoParams;

/// `pageNumber` and `pageSize`.
#[derive(Debug, Default, Clone, Copy, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PagingQuery {
    /// Zero-based page index. Defaults to 0.
    #[param(example = 0)]
    pub page_number: Option<i64>,
    /// Items per page. Defaults to 3.
    #[param(example = 3)]
    pub page_size: Option<i64>,
}

impl From<PagingQuery> for PageParams {
    fn from(value: PagingQuery) -> Self {
        Self {
            page_number: value.page_number,
            page_size: value.page_size,
        }
    }
}

/// Optional name filter for listing users.
#[derive(Debug, Default, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NameQuery {
    /// Case-sensitive substring of the name. Blank means no filter.
    pub name: Option<String>,
}

/// Name and phone for creation (both required) or patching (both optional).
#[derive(Debug, Default, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ContactQuery {
    /// Contact name.
    pub name: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
}

/// Exact phone to look up.
#[derive(Debug, Default, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PhoneQuery {
    /// Phone number, matched exactly.
    pub phone: Option<String>,
}
