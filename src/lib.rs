mod repl;
mod storage;

pub use repl::*;
pub use storage::{codec, query, Grade, Record, RecordError, RecordStore, StorageError, StudentId};
