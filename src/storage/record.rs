use std::{fmt::Display, num::IntErrorKind, str::FromStr};

use thiserror::Error;

/// Number of digits in every student identifier
pub const STUDENT_ID_DIGITS: usize = 6;

/// Maximum number of characters a grade may take on disk once its decimal
/// point is removed
pub const GRADE_MAX_WIDTH: usize = 4;

const STUDENT_ID_MIN: u32 = 100_000;
const STUDENT_ID_MAX: u32 = 999_999;

/// Errors raised when a single token typed by the user is not usable as a
/// student identifier or grade.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("{0} is not a valid input. The student's ID should be six digits in length.")]
    InvalidStudentId(String),
    #[error("The student ID {0} should be six digits.")]
    StudentIdLength(String),
    #[error("{0} is not a valid input. Examples of a valid input are 67.1, 98.3, 100.0, etc.")]
    InvalidGrade(String),
    #[error("{0} is too long. A grade holds at most four characters besides the decimal point, e.g. 100.0 or 89.5.")]
    GradeTooWide(String),
    #[error("The student ID {0} does not exist in the grade book.")]
    UnknownStudentId(String),
}

/// Six digit student identifier.
///
/// Always rendered zero-padded so identifiers read from disk with leading
/// zeros are written back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudentId(u32);

impl StudentId {
    /// Parses the identifier column of a grades file line.
    ///
    /// Returns `None` unless `field` is exactly six ASCII digits.
    pub fn from_field(field: &str) -> Option<Self> {
        if field.len() != STUDENT_ID_DIGITS || !field.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        field.parse().ok().map(Self)
    }

    /// Parses an identifier typed at a prompt.
    ///
    /// The token must be an integer whose decimal form is six digits long.
    pub fn from_input(input: &str) -> Result<Self, RecordError> {
        let token = input.trim();
        let value = match token.parse::<i64>() {
            Ok(v) => v,
            Err(e) => {
                return match e.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        Err(RecordError::StudentIdLength(token.to_string()))
                    }
                    _ => Err(RecordError::InvalidStudentId(token.to_string())),
                }
            }
        };

        if value < STUDENT_ID_MIN as i64 || value > STUDENT_ID_MAX as i64 {
            return Err(RecordError::StudentIdLength(token.to_string()));
        }

        Ok(Self(value as u32))
    }

    /// Parses an identifier typed to pick an existing student.
    ///
    /// Any integer is accepted, so `012345` and `12345` both name the student
    /// stored as `012345`. Integers that no six digit field can hold are
    /// reported as unknown.
    pub fn from_lookup(input: &str) -> Result<Self, RecordError> {
        let token = input.trim();
        let value = match token.parse::<i64>() {
            Ok(v) => v,
            Err(e) => {
                return match e.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        Err(RecordError::UnknownStudentId(token.to_string()))
                    }
                    _ => Err(RecordError::InvalidStudentId(token.to_string())),
                }
            }
        };

        u32::try_from(value)
            .ok()
            .filter(|v| *v <= STUDENT_ID_MAX)
            .map(Self)
            .ok_or_else(|| RecordError::UnknownStudentId(token.to_string()))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:0width$}", self.0, width = STUDENT_ID_DIGITS)
    }
}

/// A finite decimal grade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grade(f64);

impl Grade {
    pub fn new(value: f64) -> Option<Self> {
        value.is_finite().then_some(Self(value))
    }

    /// Parses a grade typed at a prompt.
    ///
    /// Besides being a finite number, the grade must render to text that a
    /// grades file line can hold, otherwise the next reload would reject it.
    pub fn from_input(input: &str) -> Result<Self, RecordError> {
        let token = input.trim();
        let grade: Self = token
            .parse()
            .map_err(|_| RecordError::InvalidGrade(token.to_string()))?;

        if !fits_grade_width(&grade.to_string()) {
            return Err(RecordError::GradeTooWide(token.to_string()));
        }

        Ok(grade)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl FromStr for Grade {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<f64>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| RecordError::InvalidGrade(s.to_string()))
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Whole numbers keep one fractional digit: `88.0`, never `88`.
        if self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Checks the grade column width rule: at most [GRADE_MAX_WIDTH] characters
/// once every `.` is removed.
pub fn fits_grade_width(field: &str) -> bool {
    field.chars().filter(|c| *c != '.').count() <= GRADE_MAX_WIDTH
}

/// One student's grade book entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub id: StudentId,
    pub grade: Grade,
}

impl Record {
    pub fn new(id: StudentId, grade: Grade) -> Self {
        Self { id, grade }
    }
}

/// Renders the record exactly as it is stored on disk: `<id>,<grade>`
impl Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.id, self.grade)
    }
}
