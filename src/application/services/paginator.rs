//! Client-side pagination over the full collection.

use std::num::NonZeroU32;

use crate::domain::entities::PageView;

/// Slices out one page of `records`.
///
/// The window is `[(page_index - 1) * page_size, page_index * page_size)`,
/// clamped to the collection. A page past the end yields an empty slice and
/// the final page may be short. Source order is preserved.
pub fn paginate<T: Clone>(
    records: &[T],
    page_index: NonZeroU32,
    page_size: NonZeroU32,
) -> PageView<T> {
    let size = page_size.get() as usize;
    let from = (page_index.get() as usize - 1).saturating_mul(size);

    let page = records
        .get(from..)
        .map(|rest| &rest[..rest.len().min(size)])
        .unwrap_or_default();

    PageView {
        records: page.to_vec(),
        page_index,
        page_size,
        total_count: records.len(),
    }
}
