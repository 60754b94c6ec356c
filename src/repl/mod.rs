pub mod commands;
pub mod mutation;
pub mod prompt;

pub use commands::{Flow, MenuCommand};
pub use prompt::Prompter;

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use log::{debug, info};
use thiserror::Error;

use crate::storage::{codec, StorageError};

pub type Result<T> = std::result::Result<T, ShellError>;

/// Errors that end a grade book session
#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to talk to the terminal: {0}")]
    Terminal(#[from] io::Error),
    /// Standard input reached its end
    #[error("no more input")]
    InputClosed,
}

/// Starts a grade book session on the process' standard input and output.
///
/// `file` is the grades file given on the command line, if any.
pub fn start_repl(file: Option<PathBuf>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    run(&mut prompter, file)
}

/// Runs a session until the user quits or input runs out.
///
/// The grades file is reloaded before every menu; a reload failure ends the
/// session with an error.
pub fn run<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    file: Option<PathBuf>,
) -> Result<()> {
    match session(prompter, file) {
        Err(ShellError::InputClosed) => {
            debug!("input closed; ending session");
            Ok(())
        }
        result => result,
    }
}

fn session<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    file: Option<PathBuf>,
) -> Result<()> {
    let path = prompter.choose_file(file)?;
    info!("using grades file {}", path.display());

    loop {
        let store = codec::load(&path)?;

        MenuCommand::render_menu(prompter)?;
        let selection = prompter.ask(commands::ACTION_QUESTION)?;

        let result: std::result::Result<MenuCommand, _> = selection.as_str().try_into();
        match result {
            Ok(command) => {
                debug!("executing {command:?}");
                if command.execute(&store, &path, prompter)? == Flow::Quit {
                    return Ok(());
                }
            }
            Err(message) => {
                prompter.say("\n")?;
                prompter.say(message)?;
                prompter.say("\n")?;
            }
        }
    }
}
