use std::collections::HashMap;

use super::record::{Grade, Record, StudentId};

/// In-memory grade book.
///
/// Keeps records in the order their identifiers were first inserted; inserting
/// an identifier that is already present overwrites its grade in place.
#[derive(Debug, Default, Clone)]
pub struct RecordStore {
    records: Vec<Record>,
    index: HashMap<StudentId, usize>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, returning the grade it replaced, if any.
    pub fn insert(&mut self, record: Record) -> Option<Grade> {
        match self.index.get(&record.id) {
            Some(&pos) => {
                let previous = self.records[pos].grade;
                self.records[pos].grade = record.grade;
                Some(previous)
            }
            None => {
                self.index.insert(record.id, self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    pub fn get(&self, id: StudentId) -> Option<Grade> {
        self.index.get(&id).map(|&pos| self.records[pos].grade)
    }

    pub fn contains(&self, id: StudentId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }
}

impl FromIterator<Record> for RecordStore {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        let mut store = Self::new();
        for record in iter {
            store.insert(record);
        }
        store
    }
}
