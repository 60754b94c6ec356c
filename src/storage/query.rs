use super::{record::Record, store::RecordStore, Result, StorageError};

/// All records in store order
pub fn list_all(store: &RecordStore) -> Vec<Record> {
    store.iter().copied().collect()
}

/// The record holding the highest grade.
///
/// When several records share the highest grade the one that comes last in
/// store order wins.
pub fn highest(store: &RecordStore) -> Result<Record> {
    store
        .iter()
        .copied()
        .reduce(|best, record| {
            if record.grade.value() >= best.grade.value() {
                record
            } else {
                best
            }
        })
        .ok_or(StorageError::EmptyStore)
}
