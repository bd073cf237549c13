//! Pagination primitives shared by paged listing endpoints.
//!
//! A [`PageRequest`] carries the validated paging window, and [`Page`] is
//! the response envelope. The envelope math (total pages, last-page flag)
//! lives here so it can be tested without touching the database; the
//! actual sorting and windowing is done by the store query.

use serde::Serialize;
use utoipa::ToSchema;

use crate::utils::errors::AppError;

/// Sort direction. Anything that is not `asc` (case-insensitive) is
/// treated as descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("asc") {
            Self::Asc
        } else {
            Self::Desc
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// A validated paging window: zero-based page number and positive page size.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    page_no: i64,
    page_size: i64,
}

impl PageRequest {
    pub fn new(page_no: i64, page_size: i64) -> Result<Self, AppError> {
        if page_no < 0 {
            return Err(AppError::bad_request("Page number must not be negative"));
        }
        if page_size <= 0 {
            return Err(AppError::bad_request("Page size must be greater than zero"));
        }
        Ok(Self { page_no, page_size })
    }

    pub fn page_no(&self) -> i64 {
        self.page_no
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    pub fn offset(&self) -> i64 {
        self.page_no * self.page_size
    }
}

/// One page of results plus the paging metadata the client needs to walk
/// the full result set.
#[derive(Debug, Serialize, ToSchema)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page_no: i64,
    pub page_size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
    pub last: bool,
}

impl<T> Page<T> {
    /// Assembles the envelope for an already-windowed `content` slice.
    ///
    /// `total_elements` is the unwindowed count. An empty result set or a
    /// page number at or past the final page is marked `last`.
    pub fn assemble(content: Vec<T>, request: &PageRequest, total_elements: i64) -> Self {
        let total_pages = if total_elements == 0 {
            0
        } else {
            // Ceiling division; `i64::div_ceil` is not yet stable.
            total_elements / request.page_size
                + (total_elements % request.page_size > 0) as i64
        };
        let last = total_elements == 0 || request.page_no >= total_pages - 1;

        Self {
            content,
            page_no: request.page_no,
            page_size: request.page_size,
            total_elements,
            total_pages,
            last,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page_no: self.page_no,
            page_size: self.page_size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            last: self.last,
        }
    }
}
