//! Reading and writing the grades file.
//!
//! The file holds one `<student id>,<grade>` record per line. There is no
//! header; blank lines are ignored. Every call opens, operates on and closes
//! the file, so the file stays the source of truth between calls.

use std::{
    fs::{self, File, OpenOptions},
    io::{BufRead, BufReader, Write},
    path::Path,
};

use log::{debug, info};

use super::{
    record::{fits_grade_width, Grade, Record, StudentId},
    store::RecordStore,
    Result, StorageError,
};

/// Builds a fresh [RecordStore] from the grades file at `path`.
///
/// Later lines override earlier lines with the same student ID. Any line that
/// is not a well formed record fails the whole load.
pub fn load<P: AsRef<Path>>(path: P) -> Result<RecordStore> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| StorageError::io(path, e))?;

    let mut store = RecordStore::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| StorageError::io(path, e))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let record = parse_line(trimmed).ok_or_else(|| StorageError::Format {
            path: path.to_path_buf(),
            line_number: idx + 1,
            line: trimmed.to_string(),
        })?;

        if let Some(previous) = store.insert(record) {
            debug!("line {} overrides {} (was {previous})", idx + 1, record.id);
        }
    }

    debug!("loaded {} records from {}", store.len(), path.display());
    Ok(store)
}

/// Parses a trimmed, non-empty line into a record.
///
/// A line is well formed when it splits on `,` into exactly two fields, the
/// first being six digits and the second at most four characters long once its
/// decimal points are dropped. Both fields must then parse as numbers.
pub fn parse_line(line: &str) -> Option<Record> {
    let (id_field, grade_field) = line.split_once(',')?;
    if grade_field.contains(',') || !fits_grade_width(grade_field) {
        return None;
    }

    let id = StudentId::from_field(id_field)?;
    let grade: Grade = grade_field.trim().parse().ok()?;
    Some(Record::new(id, grade))
}

/// Appends `record` to the end of the grades file as a new line.
///
/// Uniqueness of the student ID is not checked here.
pub fn append<P: AsRef<Path>>(path: P, record: &Record) -> Result<()> {
    let path = path.as_ref();
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| StorageError::io(path, e))?;

    write!(file, "\n{record}").map_err(|e| StorageError::io(path, e))?;
    info!("appended {record} to {}", path.display());
    Ok(())
}

/// Rewrites the grade of student `id` in the grades file.
///
/// Every line whose record belongs to `id` is replaced; all other lines,
/// including ones holding the same grade, are written back untouched.
/// Returns the number of lines rewritten.
pub fn replace<P: AsRef<Path>>(path: P, id: StudentId, grade: Grade) -> Result<usize> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| StorageError::io(path, e))?;

    let updated = Record::new(id, grade);
    let mut output = String::with_capacity(content.len());
    let mut replaced = 0;

    for segment in content.split_inclusive('\n') {
        let body = segment.trim_end_matches(['\n', '\r']);
        let ending = &segment[body.len()..];

        match parse_line(body.trim()) {
            Some(record) if record.id == id => {
                output.push_str(&updated.to_string());
                output.push_str(ending);
                replaced += 1;
            }
            _ => output.push_str(segment),
        }
    }

    if replaced == 0 {
        return Err(StorageError::StudentNotFound(id));
    }

    fs::write(path, output).map_err(|e| StorageError::io(path, e))?;
    info!(
        "rewrote {replaced} line(s) of {} as {updated}",
        path.display()
    );
    Ok(replaced)
}
