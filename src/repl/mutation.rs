use std::{
    io::{BufRead, Write},
    path::Path,
};

use super::{Prompter, Result};
use crate::storage::{codec, Grade, Record, RecordStore, StorageError, StudentId};

pub const NEW_ID_QUESTION: &str = "Please enter the student's ID: ";
pub const EXISTING_ID_QUESTION: &str = "Please enter the student ID: ";
pub const GRADE_QUESTION: &str = "Please enter the student's grade: ";

/// Asks for a new student and appends them to the grades file.
///
/// `store` is only consulted for uniqueness; it is stale once this returns.
pub fn add_student<R: BufRead, W: Write>(
    store: &RecordStore,
    path: &Path,
    prompter: &mut Prompter<R, W>,
) -> Result<Record> {
    let id = prompter.ask_student_id(NEW_ID_QUESTION, StudentId::from_input, |id| {
        if store.contains(id) {
            Err(format!(
                "The student ID {id} already exists in the grade book."
            ))
        } else {
            Ok(())
        }
    })?;
    let grade = prompter.ask_grade(GRADE_QUESTION)?;

    let record = Record::new(id, grade);
    codec::append(path, &record)?;
    Ok(record)
}

/// Asks for an existing student and a new grade, then rewrites their line in
/// the grades file.
///
/// Returns the updated record along with the grade it had in `store`.
pub fn update_student<R: BufRead, W: Write>(
    store: &RecordStore,
    path: &Path,
    prompter: &mut Prompter<R, W>,
) -> Result<(Record, Grade)> {
    let id = prompter.ask_student_id(EXISTING_ID_QUESTION, StudentId::from_lookup, |id| {
        if store.contains(id) {
            Ok(())
        } else {
            Err(format!(
                "The student ID {id} does not exist in the grade book."
            ))
        }
    })?;
    let old_grade = store.get(id).ok_or(StorageError::StudentNotFound(id))?;
    let grade = prompter.ask_grade(GRADE_QUESTION)?;

    codec::replace(path, id, grade)?;
    Ok((Record::new(id, grade), old_grade))
}
