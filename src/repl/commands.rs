use std::{
    io::{BufRead, Write},
    path::Path,
};

use log::info;

use super::{mutation, Prompter, Result, ShellError};
use crate::storage::{query, RecordStore};

pub const ACTION_QUESTION: &str =
    "What action would you like to perform?\nPlease type the corresponding number: ";

/// Actions offered by the grade book menu, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// Print every student and grade
    Display,
    /// Print the student with the highest grade
    Highest,
    /// Append a new student to the grades file
    Add,
    /// Change the grade of an existing student
    Update,
    /// End the session
    Quit,
}

/// What the session does after a command ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 5] = [
        Self::Display,
        Self::Highest,
        Self::Add,
        Self::Update,
        Self::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Display => "Display the current grade book",
            Self::Highest => "Display the student with the highest grade",
            Self::Add => "Add a new student to the grade book",
            Self::Update => "Update the grade for an existing student",
            Self::Quit => "Quit",
        }
    }

    /// Prints the numbered menu
    pub fn render_menu<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<()> {
        for (num, command) in Self::ALL.iter().enumerate() {
            prompter.say(format_args!("[{}] {}", num + 1, command.label()))?;
        }
        Ok(())
    }

    /// Runs the command against a freshly loaded `store`.
    ///
    /// Errors that leave the grades file usable are reported to the user and
    /// the session continues; the rest are returned.
    pub fn execute<R: BufRead, W: Write>(
        &self,
        store: &RecordStore,
        path: &Path,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Flow> {
        if *self == Self::Quit {
            info!("quitting");
            return Ok(Flow::Quit);
        }

        prompter.say("\n")?;
        match self {
            Self::Display => {
                prompter.say("Student ID | Grade")?;
                for record in query::list_all(store) {
                    prompter.say(format_args!("{}       {}", record.id, record.grade))?;
                }
            }
            Self::Highest => match query::highest(store) {
                Ok(best) => prompter.say(format_args!(
                    "The student ID with the highest grade is {} with a grade of {}",
                    best.id, best.grade
                ))?,
                Err(e) => prompter.say(e)?,
            },
            Self::Add => {
                let record = mutation::add_student(store, path, prompter)?;
                prompter.say(format_args!(
                    "Added student ID {} with a grade of {}.",
                    record.id, record.grade
                ))?;
            }
            Self::Update => match mutation::update_student(store, path, prompter) {
                Ok((record, old)) => prompter.say(format_args!(
                    "Updated student ID {} from {} to {}.",
                    record.id, old, record.grade
                ))?,
                Err(ShellError::Storage(e)) if !e.is_fatal() => prompter.say(e)?,
                Err(e) => return Err(e),
            },
            Self::Quit => {}
        }
        prompter.say("\n")?;

        Ok(Flow::Continue)
    }
}

impl TryFrom<&str> for MenuCommand {
    type Error = String;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        // Only the exact menu numbers are accepted, so `01` or `+1` are not
        Self::ALL
            .iter()
            .enumerate()
            .find(|(idx, _)| (idx + 1).to_string() == value)
            .map(|(_, command)| *command)
            .ok_or_else(|| {
                format!("{value} is not a valid option. Please select one of the options below:")
            })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::storage::codec;
    use assert_fs::{prelude::*, NamedTempFile};

    #[test]
    fn parse_menu_selection() {
        assert_eq!(MenuCommand::try_from("1"), Ok(MenuCommand::Display));
        assert_eq!(MenuCommand::try_from("2"), Ok(MenuCommand::Highest));
        assert_eq!(MenuCommand::try_from("3"), Ok(MenuCommand::Add));
        assert_eq!(MenuCommand::try_from("4"), Ok(MenuCommand::Update));
        assert_eq!(MenuCommand::try_from("5"), Ok(MenuCommand::Quit));

        for bad in ["0", "6", "", "quit", "-1", "1.0", "+1", "01"] {
            assert_eq!(
                MenuCommand::try_from(bad),
                Err(format!(
                    "{bad} is not a valid option. Please select one of the options below:"
                ))
            );
        }
    }

    #[test]
    fn menu_lists_five_numbered_actions() {
        let mut prompter = Prompter::new("".as_bytes(), Vec::new());
        MenuCommand::render_menu(&mut prompter).unwrap();
        let out = String::from_utf8(prompter.into_output()).unwrap();

        assert_eq!(
            out,
            "[1] Display the current grade book\n\
             [2] Display the student with the highest grade\n\
             [3] Add a new student to the grade book\n\
             [4] Update the grade for an existing student\n\
             [5] Quit\n"
        );
    }

    fn run(command: MenuCommand, content: &str, input: &str) -> (Flow, String) {
        let file = NamedTempFile::new("grades.txt").unwrap();
        file.write_str(content).unwrap();
        let store = codec::load(file.path()).unwrap();
        let mut prompter = Prompter::new(input.as_bytes(), Vec::new());

        let flow = command.execute(&store, file.path(), &mut prompter).unwrap();
        (flow, String::from_utf8(prompter.into_output()).unwrap())
    }

    #[test]
    fn display_lists_records() {
        let (flow, out) = run(MenuCommand::Display, "768654,89.5\n100000,50.0", "");

        assert_eq!(flow, Flow::Continue);
        assert!(out.contains("Student ID | Grade\n768654       89.5\n100000       50.0\n"));
    }

    #[test]
    fn highest_reports_best_student() {
        let (_, out) = run(MenuCommand::Highest, "100000,50.0\n100001,99.9", "");

        assert!(out.contains("The student ID with the highest grade is 100001 with a grade of 99.9"));
    }

    #[test]
    fn highest_on_empty_grade_book() {
        let (flow, out) = run(MenuCommand::Highest, "", "");

        assert_eq!(flow, Flow::Continue);
        assert!(out.contains("The grade book is empty."));
    }

    #[test]
    fn quit_stops_the_session() {
        let (flow, out) = run(MenuCommand::Quit, "", "");

        assert_eq!(flow, Flow::Quit);
        assert_eq!(out, "");
    }
}
