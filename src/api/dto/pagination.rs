//! Pagination query parameters.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};
use std::num::NonZeroU32;

use crate::domain::entities::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, is_page_size_option};

/// Pagination query parameters.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_size: Option<u32>,
}

impl PaginationParams {
    /// Validates pagination parameters.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `page_size`: 10
    ///
    /// # Validation
    ///
    /// - Page must be > 0
    /// - Page size must be one of 10, 20, 30, 40, 50
    ///
    /// # Returns
    ///
    /// `(page, page_size)` ready for [`crate::application::services::paginate`].
    pub fn validate(&self) -> Result<(NonZeroU32, NonZeroU32), String> {
        let page = NonZeroU32::new(self.page.unwrap_or(1))
            .ok_or_else(|| "Page must be greater than 0".to_string())?;

        let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if !is_page_size_option(page_size) {
            return Err(format!(
                "Page size must be one of {PAGE_SIZE_OPTIONS:?}, got {page_size}"
            ));
        }
        let page_size = NonZeroU32::new(page_size)
            .ok_or_else(|| "Page size must be greater than 0".to_string())?;

        Ok((page, page_size))
    }
}
