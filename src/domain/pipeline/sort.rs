use crate::domain::entities::query::SortDirection;
use crate::domain::entities::record::{SortKey, TableRecord};

/// Stable sort by one field. Keys are computed once per record.
pub fn sort<R: TableRecord>(records: Vec<R>, field: R::Field, direction: SortDirection) -> Vec<R> {
    let mut keyed: Vec<(SortKey, R)> = records
        .into_iter()
        .map(|record| (record.sort_key(field), record))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| a.compare(b, direction));

    keyed.into_iter().map(|(_, record)| record).collect()
}
