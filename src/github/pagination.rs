//! Page addressing for GitHub listing endpoints.
//!
//! GitHub's REST listings are 1-based and accept at most 100 items per page.
//! [`PageRequest`] keeps both values valid and advances from one page to the
//! next.

use super::error::HarvestError;

/// Largest `per_page` value GitHub honours.
pub const MAX_PER_PAGE: u8 = 100;

/// One page of a paginated listing request.
///
/// # Example
///
/// ```
/// use gleaner::github::pagination::PageRequest;
///
/// let first = PageRequest::first(100).expect("100 is a valid page size");
/// let second = first.next().expect("page 2 exists");
/// assert_eq!(second.page(), 2);
/// assert_eq!(second.per_page(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u8,
}

impl PageRequest {
    /// Creates a request for an arbitrary page.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError::InvalidPagination`] when `page` is zero or
    /// `per_page` is outside `1..=100`.
    pub fn new(page: u32, per_page: u8) -> Result<Self, HarvestError> {
        if page == 0 {
            return Err(HarvestError::InvalidPagination {
                message: "page must be at least 1".to_owned(),
            });
        }

        if per_page == 0 {
            return Err(HarvestError::InvalidPagination {
                message: "per_page must be at least 1".to_owned(),
            });
        }

        if per_page > MAX_PER_PAGE {
            return Err(HarvestError::InvalidPagination {
                message: format!("per_page must not exceed {MAX_PER_PAGE}"),
            });
        }

        Ok(Self { page, per_page })
    }

    /// Creates a request for page 1.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError::InvalidPagination`] for an invalid `per_page`.
    pub fn first(per_page: u8) -> Result<Self, HarvestError> {
        Self::new(1, per_page)
    }

    /// Returns the request for the following page.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError::InvalidPagination`] if the page counter would
    /// overflow.
    pub fn next(self) -> Result<Self, HarvestError> {
        let page = self
            .page
            .checked_add(1)
            .ok_or_else(|| HarvestError::InvalidPagination {
                message: "page counter overflowed".to_owned(),
            })?;
        Ok(Self { page, ..self })
    }

    /// Current page number (1-based).
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Items requested per page.
    #[must_use]
    pub const fn per_page(&self) -> u8 {
        self.per_page
    }

    /// Query string fragment addressing this page.
    #[must_use]
    pub fn query(&self) -> String {
        format!("per_page={}&page={}", self.per_page, self.page)
    }
}
