//! One page of records plus the metadata needed for pagination controls.

use std::num::NonZeroU32;

use crate::domain::entities::ToolRecord;

/// Page sizes offered by the rows-per-page selector.
pub const PAGE_SIZE_OPTIONS: [u32; 5] = [10, 20, 30, 40, 50];

/// Page size used before the user picks one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// A slice of the collection for a single page.
///
/// Built fresh by [`crate::application::services::paginate`] on every fetch or
/// control change and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<T = ToolRecord> {
    pub records: Vec<T>,
    pub page_index: NonZeroU32,
    pub page_size: NonZeroU32,
    pub total_count: usize,
}

impl<T> PageView<T> {
    /// Total number of pages, never less than one.
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_count, self.page_size)
    }

    pub fn is_first_page(&self) -> bool {
        self.page_index.get() == 1
    }

    pub fn is_last_page(&self) -> bool {
        self.page_index.get() >= self.total_pages()
    }
}

/// `ceil(total_count / page_size)` with a floor of one.
pub fn total_pages(total_count: usize, page_size: NonZeroU32) -> u32 {
    let pages = total_count.div_ceil(page_size.get() as usize).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Returns true if `size` is one of [`PAGE_SIZE_OPTIONS`].
pub fn is_page_size_option(size: u32) -> bool {
    PAGE_SIZE_OPTIONS.contains(&size)
}
