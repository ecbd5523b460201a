use std::path::PathBuf;

use clap::Args;

use super::fail_on_violations;
use super::Task;
use super::MERGED_FILE;
use crate::assembler::assemble;
use crate::catalog::SourceCatalog;
use crate::errors::CommandError;
use crate::features::PropertySchema;
use crate::progress::ProgressObserver;
use crate::registry::Registry;
use crate::subcommand_def;
use crate::validation::validate;

subcommand_def!{
    /// Assembles all destination features from the source layers and writes the merged file
    pub(crate) struct Build {

        /// The directory holding the source GeoJSON layers
        #[arg(long)]
        data: PathBuf,

        /// The directory to write the merged file into
        #[arg(long)]
        output: PathBuf,

    }
}

impl Task for Build {

    fn run<Progress: ProgressObserver>(self, progress: &mut Progress) -> Result<(),CommandError> {

        progress.announce("Building destination features.");

        let registry = Registry::standard()?;
        let catalog = SourceCatalog::load(&self.data, progress)?;

        let collection = assemble(&registry, &catalog, progress)?;

        let report = validate(&collection, &registry, false, progress);
        fail_on_violations(&report, progress)?;

        let target = self.output.join(MERGED_FILE);
        collection.write(&target, PropertySchema::Merged)?;
        progress.message(|| format!("Wrote {} features to {}.",collection.len(),target.display()));

        Ok(())

    }
}
