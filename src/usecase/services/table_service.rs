use chrono::NaiveDate;

use crate::domain::entities::query::{
    total_pages, Page, QueryDescriptor, SortDirection, StatusFilter,
};
use crate::domain::entities::record::TableRecord;
use crate::domain::pipeline;

/// Records of one view together with the user's current query.
///
/// Every setter is a synchronous state transition. Setters other than
/// [`TableState::set_page`] send the view back to page 1 when the current page
/// would fall past the end of the new result set.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState<R: TableRecord> {
    records: Vec<R>,
    descriptor: QueryDescriptor<R::Field>,
}

impl<R: TableRecord> TableState<R> {
    pub fn new(records: Vec<R>, page_size: usize) -> Self {
        Self {
            records,
            descriptor: QueryDescriptor::new(
                R::DEFAULT_SORT_FIELD,
                R::DEFAULT_SORT_DIRECTION,
                page_size,
            ),
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn descriptor(&self) -> &QueryDescriptor<R::Field> {
        &self.descriptor
    }

    pub fn current_page(&self) -> Page<R> {
        pipeline::run(&self.records, &self.descriptor)
    }

    pub fn filtered_count(&self) -> usize {
        pipeline::filtered_count(&self.records, &self.descriptor)
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_count(), self.descriptor.page_size)
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.descriptor.search_text = text.into();
        self.reconcile_page();
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.descriptor.status_filter = filter;
        self.reconcile_page();
    }

    pub fn set_date_start(&mut self, start: Option<NaiveDate>) {
        self.descriptor.date_range.start = start;
        self.reconcile_page();
    }

    pub fn set_date_end(&mut self, end: Option<NaiveDate>) {
        self.descriptor.date_range.end = end;
        self.reconcile_page();
    }

    pub fn set_sort(&mut self, field: R::Field, direction: SortDirection) {
        self.descriptor.sort_field = field;
        self.descriptor.sort_direction = direction;
        self.reconcile_page();
    }

    /// Column-header click: the active column flips direction, any other
    /// column becomes active in ascending order.
    pub fn toggle_sort(&mut self, field: R::Field) {
        if self.descriptor.sort_field == field {
            let direction = self.descriptor.sort_direction.toggled();
            self.set_sort(field, direction);
        } else {
            self.set_sort(field, SortDirection::Asc);
        }
    }

    /// Moves to `page`, clamped to `[1, total_pages]`.
    pub fn set_page(&mut self, page: usize) {
        self.descriptor.page = page.clamp(1, self.total_pages());
    }

    /// Zero is not a valid page size and is treated as 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.descriptor.page_size = page_size.max(1);
        self.reconcile_page();
    }

    pub fn clear_filters(&mut self) {
        self.descriptor.clear_filters();
    }

    pub fn replace_records(&mut self, records: Vec<R>) {
        self.records = records;
        self.reconcile_page();
    }

    fn reconcile_page(&mut self) {
        if self.descriptor.page > self.total_pages() {
            self.descriptor.page = 1;
        }
    }
}
