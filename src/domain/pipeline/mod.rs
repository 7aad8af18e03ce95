//! Client-side list processing: filter, then sort, then paginate.
//!
//! Every stage is pure. The same records and descriptor always produce the
//! same page.

mod filter;
mod paginate;
mod sort;

pub use filter::{filter, filtered_count};
pub use paginate::paginate;
pub use sort::sort;

use crate::domain::entities::query::{Page, QueryDescriptor};
use crate::domain::entities::record::TableRecord;

pub fn run<R: TableRecord>(records: &[R], descriptor: &QueryDescriptor<R::Field>) -> Page<R> {
    let filtered = filter(records, descriptor);
    let ordered = sort(filtered, descriptor.sort_field, descriptor.sort_direction);
    paginate(&ordered, descriptor.page, descriptor.page_size)
}
