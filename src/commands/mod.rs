use clap::Parser;
use clap::Subcommand;

use crate::errors::CommandError;
use crate::progress::ProgressObserver;
use crate::validation::ValidationReport;

mod build;
mod markers;
mod pipeline;
mod validate;

use build::Build;
use markers::Markers;
use pipeline::Pipeline;
use validate::Validate;

pub(crate) const MERGED_FILE: &str = "merged.geojson";
pub(crate) const MARKERS_FILE: &str = "merged-markers.geojson";
pub(crate) const POINTS_FILE: &str = "points.geojson";

pub(crate) trait Task {

    fn run<Progress: ProgressObserver>(self, progress: &mut Progress) -> Result<(),CommandError>;

}

#[macro_export]
macro_rules! command_def {
    ($struct_name: ident {$($command_name: ident),*}) => {

        #[derive(Subcommand)]
        pub(crate) enum $struct_name {
            $(
                $command_name($command_name)
            ),*
        }

        impl Task for $struct_name {

            fn run<Progress: ProgressObserver>(self, progress: &mut Progress) -> Result<(),CommandError> {
                match self {
                    $(Self::$command_name(a) => a.run(progress)),*
                }
            }

        }
    };
}

#[macro_export]
macro_rules! subcommand_def {
    ($(#[$attr: meta])* pub(crate) struct $struct_name: ident {$($body: tt)*}) => {

        $(#[$attr])*
        #[derive(Args)]
        pub(crate) struct $struct_name {
            $($body)*
        }
    };
}

command_def!{
    MainCommand {
        Build,
        Markers,
        Validate,
        Pipeline
    }
}

#[derive(Parser)]
#[command(author,version,about,long_about=None)]
pub struct Tccmap {

    #[command(subcommand)]
    command: MainCommand,

}

impl Tccmap {

    pub(crate) fn run<Progress: ProgressObserver>(self, progress: &mut Progress) -> Result<(),CommandError> {
        self.command.run(progress)
    }

}

// every violation is printed before the command fails, so a bad collection
// can be fixed in one pass
pub(crate) fn fail_on_violations<Progress: ProgressObserver>(report: &ValidationReport, progress: &mut Progress) -> Result<(),CommandError> {
    if report.is_complete() {
        progress.message(|| "All completeness checks passed.");
        Ok(())
    } else {
        for violation in report.violations() {
            progress.warning(|| violation.to_string())
        }
        Err(CommandError::CompletenessViolation(report.len()))
    }
}
