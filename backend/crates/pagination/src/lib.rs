//! Zero-indexed page windows over ordered listings.
//!
//! Listing endpoints accept a `pageNumber` and a `pageSize` and return the
//! slice of results starting at `pageNumber * pageSize`. This crate owns the
//! validation of those parameters and the windowing itself so every listing
//! applies identical rules:
//!
//! - pages are zero-indexed;
//! - a page past the end of the listing is empty, not an error;
//! - a negative page number or a page size below one is rejected.
//!
//! # Examples
//! ```
//! use pagination::PageRequest;
//!
//! let page = PageRequest::new(1, 3).expect("valid page");
//! let window = page.window(1..=5);
//! assert_eq!(window, vec![4, 5]);
//! ```

use std::num::NonZeroUsize;

use serde::Deserialize;
use thiserror::Error;

/// Page number applied when a caller omits `pageNumber`.
pub const DEFAULT_PAGE_NUMBER: i64 = 0;

/// Page size applied when a caller omits `pageSize`.
pub const DEFAULT_PAGE_SIZE: i64 = 3;

const DEFAULT_PAGE_SIZE_NONZERO: NonZeroUsize = NonZeroUsize::MIN.saturating_add(2);

/// Reasons a page request is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// The page number was below zero.
    #[error("pageNumber must not be negative (got {value})")]
    NegativePageNumber {
        /// Value supplied by the caller.
        value: i64,
    },
    /// The page size was zero or below.
    #[error("pageSize must be at least 1 (got {value})")]
    NonPositivePageSize {
        /// Value supplied by the caller.
        value: i64,
    },
}

impl PageRequestError {
    /// Name of the offending request parameter.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::NegativePageNumber { .. } => "pageNumber",
            Self::NonPositivePageSize { .. } => "pageSize",
        }
    }

    /// Stable machine-readable code for the failure.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NegativePageNumber { .. } => "negative_page_number",
            Self::NonPositivePageSize { .. } => "non_positive_page_size",
        }
    }

    /// Value the caller supplied.
    #[must_use]
    pub const fn value(&self) -> i64 {
        match self {
            Self::NegativePageNumber { value } | Self::NonPositivePageSize { value } => *value,
        }
    }
}

/// Validated, zero-indexed page window.
///
/// ## Invariants
/// - `page_size` is at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: usize,
    page_size: NonZeroUsize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: 0,
            page_size: DEFAULT_PAGE_SIZE_NONZERO,
        }
    }
}

impl PageRequest {
    /// Validate caller-supplied paging parameters.
    ///
    /// Values larger than the platform can address saturate; such pages are
    /// simply empty.
    ///
    /// # Errors
    /// Returns [`PageRequestError::NegativePageNumber`] when `page_number < 0`
    /// and [`PageRequestError::NonPositivePageSize`] when `page_size < 1`.
    pub fn new(page_number: i64, page_size: i64) -> Result<Self, PageRequestError> {
        if page_number < 0 {
            return Err(PageRequestError::NegativePageNumber { value: page_number });
        }
        let size = usize::try_from(page_size)
            .map_or_else(|_| (page_size > 0).then_some(usize::MAX), Some)
            .and_then(NonZeroUsize::new)
            .ok_or(PageRequestError::NonPositivePageSize { value: page_size })?;

        Ok(Self {
            page_number: usize::try_from(page_number).unwrap_or(usize::MAX),
            page_size: size,
        })
    }

    /// Zero-based page index.
    #[must_use]
    pub const fn page_number(&self) -> usize {
        self.page_number
    }

    /// Maximum number of items on the page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// Index of the first item on the page, or `None` if it overflows.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        self.page_number.checked_mul(self.page_size.get())
    }

    /// Collect the items that fall on this page.
    ///
    /// # Examples
    /// ```
    /// use pagination::PageRequest;
    ///
    /// let page = PageRequest::new(4, 3).expect("valid page");
    /// assert!(page.window(["a", "b"]).is_empty());
    /// ```
    #[must_use]
    pub fn window<I>(&self, items: I) -> Vec<I::Item>
    where
        I: IntoIterator,
    {
        let Some(offset) = self.offset() else {
            return Vec::new();
        };
        items
            .into_iter()
            .skip(offset)
            .take(self.page_size())
            .collect()
    }
}

/// Raw `pageNumber`/`pageSize` query parameters.
///
/// Both values are optional; omitted values fall back to
/// [`DEFAULT_PAGE_NUMBER`] and [`DEFAULT_PAGE_SIZE`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    /// Requested zero-based page index.
    pub page_number: Option<i64>,
    /// Requested page size.
    pub page_size: Option<i64>,
}

impl TryFrom<PageParams> for PageRequest {
    type Error = PageRequestError;

    fn try_from(value: PageParams) -> Result<Self, Self::Error> {
        Self::new(
            value.page_number.unwrap_or(DEFAULT_PAGE_NUMBER),
            value.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}

#[cfg(test)]
mod tests {
    //! Unit coverage for page validation and windowing.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 3, vec![1, 2, 3])]
    #[case(1, 3, vec![4, 5])]
    #[case(2, 3, vec![])]
    #[case(0, 10, vec![1, 2, 3, 4, 5])]
    #[case(4, 1, vec![5])]
    fn window_selects_expected_items(
        #[case] page_number: i64,
        #[case] page_size: i64,
        #[case] expected: Vec<u32>,
    ) {
        let page = PageRequest::new(page_number, page_size).expect("valid page");
        assert_eq!(page.window(1..=5_u32), expected);
    }

    #[rstest]
    #[case(-1, 3, PageRequestError::NegativePageNumber { value: -1 })]
    #[case(0, 0, PageRequestError::NonPositivePageSize { value: 0 })]
    #[case(0, -4, PageRequestError::NonPositivePageSize { value: -4 })]
    fn invalid_parameters_are_rejected(
        #[case] page_number: i64,
        #[case] page_size: i64,
        #[case] expected: PageRequestError,
    ) {
        assert_eq!(PageRequest::new(page_number, page_size), Err(expected));
    }

    #[rstest]
    fn errors_name_the_offending_field() {
        let err = PageRequest::new(0, 0).expect_err("zero page size");
        assert_eq!(err.field(), "pageSize");
        assert_eq!(err.code(), "non_positive_page_size");
        assert_eq!(err.value(), 0);
        assert_eq!(err.to_string(), "pageSize must be at least 1 (got 0)");
    }

    #[rstest]
    fn huge_pages_are_empty_rather_than_overflowing() {
        let page = PageRequest::new(i64::MAX, i64::MAX).expect("valid page");
        assert!(page.offset().is_none());
        assert!(page.window(0..10).is_empty());
    }

    #[rstest]
    fn default_matches_documented_defaults() {
        let page = PageRequest::default();
        assert_eq!(page.page_number(), 0);
        assert_eq!(page.page_size(), 3);
        assert_eq!(
            PageRequest::try_from(PageParams::default()),
            Ok(PageRequest::default())
        );
    }

    #[rstest]
    fn params_deserialise_from_camel_case() {
        let params: PageParams =
            serde_json::from_str(r#"{"pageNumber":2,"pageSize":5}"#).expect("params");
        let page = PageRequest::try_from(params).expect("valid page");
        assert_eq!(page.page_number(), 2);
        assert_eq!(page.page_size(), 5);
        assert_eq!(page.offset(), Some(10));
    }
}
