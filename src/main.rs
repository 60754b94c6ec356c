use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use gradebook::start_repl;
use log::error;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Optionally, sets the grades file to use instead of asking for it
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match start_repl(cli.file) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("session aborted: {e:?}");
            println!("\n{e}\n");
            ExitCode::FAILURE
        }
    }
}
