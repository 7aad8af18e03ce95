use chrono::NaiveDate;

pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 25, 50];
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PAGE_WINDOW_WIDTH: usize = 5;
pub const STATUS_ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(String),
}

impl StatusFilter {
    /// Builds a filter from a select value; `"all"` and blank mean no filter.
    pub fn from_select_value(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(STATUS_ALL) {
            StatusFilter::All
        } else {
            StatusFilter::Only(trimmed.to_lowercase())
        }
    }

    pub fn select_value(&self) -> String {
        match self {
            StatusFilter::All => STATUS_ALL.to_string(),
            StatusFilter::Only(status) => status.clone(),
        }
    }

    pub fn matches(&self, status: &str) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(expected) => status.trim().to_lowercase() == expected.to_lowercase(),
        }
    }
}

/// Inclusive calendar-day bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// A missing date only passes when neither bound is set.
    pub fn contains(&self, date: Option<NaiveDate>) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(date) = date else {
            return false;
        };
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDescriptor<F> {
    pub search_text: String,
    pub status_filter: StatusFilter,
    pub date_range: DateRange,
    pub sort_field: F,
    pub sort_direction: SortDirection,
    pub page: usize,
    pub page_size: usize,
}

impl<F: Copy> QueryDescriptor<F> {
    pub fn new(sort_field: F, sort_direction: SortDirection, page_size: usize) -> Self {
        Self {
            search_text: String::new(),
            status_filter: StatusFilter::All,
            date_range: DateRange::default(),
            sort_field,
            sort_direction,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search_text.trim().is_empty()
            || self.status_filter != StatusFilter::All
            || !self.date_range.is_unbounded()
    }

    /// Resets search, status and date bounds and returns to the first page.
    /// Sorting and page size are kept.
    pub fn clear_filters(&mut self) {
        self.search_text.clear();
        self.status_filter = StatusFilter::All;
        self.date_range = DateRange::default();
        self.page = 1;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<R> {
    pub items: Vec<R>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

impl<R> Page<R> {
    /// 1-based number of the first row on this page, 0 when the page is empty.
    pub fn first_item_number(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page - 1) * self.page_size + 1
        }
    }

    pub fn last_item_number(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.first_item_number() + self.items.len() - 1
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Page numbers for the numbered pager: up to `width` consecutive pages,
    /// kept around the current page and inside `[1, total_pages]`.
    pub fn page_window(&self, width: usize) -> Vec<usize> {
        let width = width.min(self.total_pages);
        if width == 0 {
            return Vec::new();
        }
        let latest_start = self.total_pages - width + 1;
        let start = self.page.saturating_sub(width / 2).clamp(1, latest_start);
        (start..start + width).collect()
    }
}

pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    total_count.div_ceil(page_size.max(1)).max(1)
}
