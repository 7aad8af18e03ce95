use crate::domain::entities::query::QueryDescriptor;
use crate::domain::entities::record::TableRecord;

/// Returns the records that pass the status, search and date predicates,
/// in their original order.
pub fn filter<R: TableRecord>(records: &[R], descriptor: &QueryDescriptor<R::Field>) -> Vec<R> {
    let needle = search_needle(&descriptor.search_text);
    records
        .iter()
        .filter(|record| matches(*record, descriptor, needle.as_deref()))
        .cloned()
        .collect()
}

pub fn filtered_count<R: TableRecord>(records: &[R], descriptor: &QueryDescriptor<R::Field>) -> usize {
    let needle = search_needle(&descriptor.search_text);
    records
        .iter()
        .filter(|record| matches(*record, descriptor, needle.as_deref()))
        .count()
}

fn search_needle(search_text: &str) -> Option<String> {
    let trimmed = search_text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

fn matches<R: TableRecord>(
    record: &R,
    descriptor: &QueryDescriptor<R::Field>,
    needle: Option<&str>,
) -> bool {
    if !descriptor.status_filter.matches(record.status()) {
        return false;
    }

    if let Some(needle) = needle {
        let found = record
            .searchable_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle));
        if !found {
            return false;
        }
    }

    descriptor.date_range.contains(record.date())
}
