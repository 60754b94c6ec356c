use std::{
    fmt::Display,
    fs::File,
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use log::{debug, warn};

use super::{Result, ShellError};
use crate::storage::{Grade, RecordError, StudentId};

pub const PATH_QUESTION: &str = "Please enter the path to the file grades.txt: ";

/// Line based dialogue with the user.
///
/// Every `ask_*` method re-prompts until it gets a valid answer; only a
/// terminal failure or the end of input stops it.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes one line of output
    pub fn say(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Shows `question` and returns the answer without surrounding whitespace
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(ShellError::InputClosed);
        }

        Ok(answer.trim().to_string())
    }

    fn retry(&mut self, reason: impl Display) -> Result<()> {
        debug!("rejected input: {reason}");
        self.say(format_args!("{reason} Please try again."))
    }

    /// Asks for a student ID until `parse` accepts it and it passes `check`.
    ///
    /// `check` returns the message explaining why an otherwise valid ID is
    /// refused.
    pub fn ask_student_id<F>(
        &mut self,
        question: &str,
        parse: fn(&str) -> std::result::Result<StudentId, RecordError>,
        check: F,
    ) -> Result<StudentId>
    where
        F: Fn(StudentId) -> std::result::Result<(), String>,
    {
        loop {
            let answer = self.ask(question)?;
            let verdict = parse(&answer)
                .map_err(|e| e.to_string())
                .and_then(|id| check(id).map(|()| id));

            match verdict {
                Ok(id) => return Ok(id),
                Err(reason) => self.retry(reason)?,
            }
        }
    }

    /// Asks for a grade until one parses
    pub fn ask_grade(&mut self, question: &str) -> Result<Grade> {
        loop {
            let answer = self.ask(question)?;
            match Grade::from_input(&answer) {
                Ok(grade) => return Ok(grade),
                Err(e) => self.retry(e)?,
            }
        }
    }

    /// Picks the grades file.
    ///
    /// `preset` is used when it can be opened; otherwise the user is asked for
    /// a path until one can be.
    pub fn choose_file(&mut self, preset: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = preset {
            if self.check_openable(&path)? {
                return Ok(path);
            }
        }

        loop {
            let path = PathBuf::from(self.ask(PATH_QUESTION)?);
            if self.check_openable(&path)? {
                return Ok(path);
            }
        }
    }

    fn check_openable(&mut self, path: &Path) -> Result<bool> {
        match File::open(path) {
            Ok(_) => Ok(true),
            Err(e) => {
                warn!("cannot open {}: {e}", path.display());
                self.say(format_args!(
                    "The file {} could not be opened. Please try again.",
                    path.display()
                ))?;
                Ok(false)
            }
        }
    }
}
