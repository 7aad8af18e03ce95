use crate::domain::entities::query::{total_pages, Page};

/// Slices one page out of an ordered collection. A page past the end yields
/// no items rather than an error.
pub fn paginate<R: Clone>(ordered: &[R], page: usize, page_size: usize) -> Page<R> {
    let page_size = page_size.max(1);
    let page = page.max(1);
    let total_count = ordered.len();

    let start = (page - 1).saturating_mul(page_size);
    let items = if start >= total_count {
        Vec::new()
    } else {
        let end = start.saturating_add(page_size).min(total_count);
        ordered[start..end].to_vec()
    };

    Page {
        items,
        page,
        page_size,
        total_pages: total_pages(total_count, page_size),
        total_count,
    }
}
