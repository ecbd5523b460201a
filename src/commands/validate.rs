use std::path::PathBuf;

use clap::Args;

use super::fail_on_violations;
use super::Task;
use crate::errors::CommandError;
use crate::features::FeatureCollection;
use crate::progress::ProgressObserver;
use crate::registry::Registry;
use crate::subcommand_def;
use crate::validation::validate;

subcommand_def!{
    /// Checks a written collection for completeness against the destination registry
    pub(crate) struct Validate {

        /// The GeoJSON file to check
        file: PathBuf,

        /// Expect marker flags and measured areas in the file
        #[arg(long)]
        markers: bool,

    }
}

impl Task for Validate {

    fn run<Progress: ProgressObserver>(self, progress: &mut Progress) -> Result<(),CommandError> {

        progress.announce("Validating destination collection.");

        let registry = Registry::standard()?;
        let collection = FeatureCollection::read(&self.file)?;

        let report = validate(&collection, &registry, self.markers, progress);
        fail_on_violations(&report, progress)

    }
}
