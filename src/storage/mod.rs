pub mod codec;
pub mod query;
pub mod record;
pub mod store;

use std::{io, path::PathBuf};

use thiserror::Error;

pub use record::{Grade, Record, RecordError, StudentId};
pub use store::RecordStore;

pub type Result<T> = std::result::Result<T, StorageError>;

/// Example line shown to the user whenever a grades file is rejected
pub const EXAMPLE_LINE: &str = "768654,89.5";

/// Failures of the grades file codec and of queries over a loaded store
#[derive(Debug, Error)]
pub enum StorageError {
    /// The file could not be opened, read or written
    #[error("the file {} could not be accessed: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    /// A line of the file does not follow the `<student id>,<grade>` layout.
    ///
    /// Loading never yields a partial store, so this is fatal for the session.
    #[error(
        "{} is not in the expected format: Student ID,Grade\n\
         Example: {example}\n\
         Line {line_number} reads `{line}`.\n\
         Please verify the format of the file contents and re-run the program.",
        .path.display(),
        example = EXAMPLE_LINE
    )]
    Format {
        path: PathBuf,
        line_number: usize,
        line: String,
    },
    /// No line of the file holds the requested student
    #[error("The student ID {0} does not exist in the grade book file.")]
    StudentNotFound(StudentId),
    /// The query needs at least one record
    #[error("The grade book is empty.")]
    EmptyStore,
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the error has to end the session
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::Format { .. })
    }
}
