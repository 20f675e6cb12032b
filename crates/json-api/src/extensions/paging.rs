//! Page request parsing helpers.

use salvo::prelude::{Request, StatusError};

use patron_app::domain::pagination::{DEFAULT_PAGE_SIZE, PageRequest};

use crate::extensions::*;

pub(crate) trait PagingExt {
    /// Read a zero-based page and a page size from the named query parameters.
    ///
    /// Missing values fall back to page `0` and [`DEFAULT_PAGE_SIZE`]. A value
    /// that is present but not a non-negative integer is a 400.
    fn page_request_or_400(&self, page_key: &str, size_key: &str)
    -> Result<PageRequest, StatusError>;
}

impl PagingExt for Request {
    fn page_request_or_400(
        &self,
        page_key: &str,
        size_key: &str,
    ) -> Result<PageRequest, StatusError> {
        let page = self.u32_query_or_400(page_key)?.unwrap_or(0);
        let size = self.u32_query_or_400(size_key)?.unwrap_or(DEFAULT_PAGE_SIZE);

        PageRequest::new(page, size).or_400("invalid page request")
    }
}

trait U32QueryExt {
    fn u32_query_or_400(&self, key: &str) -> Result<Option<u32>, StatusError>;
}

impl U32QueryExt for Request {
    fn u32_query_or_400(&self, key: &str) -> Result<Option<u32>, StatusError> {
        self.queries()
            .get(key)
            .map(|raw| raw.parse::<u32>())
            .transpose()
            .or_400("invalid page request")
    }
}
