/*!
Tccmap assembles the 330 TCC travel destinations from Natural Earth source layers into a merged world map GeoJSON, classifies small features as point markers, and validates the result for completeness.
*/

use clap::Parser;

pub(crate) mod assembler;
pub(crate) mod boundary;
pub(crate) mod catalog;
pub mod commands;
pub(crate) mod errors;
pub(crate) mod features;
pub(crate) mod geometry;
pub(crate) mod markers;
pub(crate) mod progress;
pub(crate) mod registry;
pub(crate) mod utils;
pub(crate) mod validation;

use commands::Tccmap;
use errors::ProgramError;
use progress::ConsoleProgressBar;

/**
Runs Tccmap with arbitrary arguments. The first item in the arguments will be ignored. All output will be printed to Stdout or Stderr.
*/
pub fn run<Arg, Args>(args: &mut Args) -> Result<(),ProgramError>
where
    Arg: Clone + Into<std::ffi::OsString>,
    Args: Iterator<Item = Arg>
{
    let mut progress = ConsoleProgressBar::new();
    let command = Tccmap::try_parse_from(args)?;
    command.run(&mut progress)?;
    Ok(())
}

fn main() -> std::process::ExitCode {
    let mut args = std::env::args();
    // I could just return a Result<(),Box<dyn Error>> except the built-ins format that with debug instead of
    // display, so I don't get a good error message. At some point in the future, there's going to be a Report
    // trait that might be useful once it becomes stable. https://doc.rust-lang.org/stable/std/error/struct.Report.html#return-from-main
    match run(&mut args) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}",err);
            std::process::ExitCode::FAILURE
        }
    }
}
