use std::path::PathBuf;

use clap::Args;

use super::fail_on_violations;
use super::Task;
use super::MARKERS_FILE;
use super::MERGED_FILE;
use super::POINTS_FILE;
use crate::assembler::assemble;
use crate::catalog::SourceCatalog;
use crate::errors::CommandError;
use crate::features::PropertySchema;
use crate::markers::classify;
use crate::markers::marker_points;
use crate::markers::MarkerSettings;
use crate::progress::ProgressObserver;
use crate::registry::Registry;
use crate::subcommand_def;
use crate::validation::validate;

subcommand_def!{
    /// Runs build, marker classification, and validation in one pass
    pub(crate) struct Pipeline {

        /// The directory holding the source GeoJSON layers
        #[arg(long)]
        data: PathBuf,

        /// The directory to write the output files into
        #[arg(long)]
        output: PathBuf,

        /// Features smaller than this area become point markers
        #[arg(long,default_value="1000")]
        threshold_km2: f64,

    }
}

impl Task for Pipeline {

    fn run<Progress: ProgressObserver>(self, progress: &mut Progress) -> Result<(),CommandError> {

        progress.announce("Running the full pipeline.");

        let registry = Registry::standard()?;
        let catalog = SourceCatalog::load(&self.data, progress)?;

        let collection = assemble(&registry, &catalog, progress)?;
        let report = validate(&collection, &registry, false, progress);
        fail_on_violations(&report, progress)?;
        collection.write(&self.output.join(MERGED_FILE), PropertySchema::Merged)?;

        let settings = MarkerSettings {
            threshold_km2: self.threshold_km2,
            ..MarkerSettings::default()
        };
        let classified = classify(collection, &settings, progress)?;
        let points = marker_points(&classified);
        classified.write(&self.output.join(MARKERS_FILE), PropertySchema::Markers)?;
        points.write(&self.output.join(POINTS_FILE), PropertySchema::Markers)?;

        let report = validate(&classified, &registry, true, progress);
        fail_on_violations(&report, progress)?;

        progress.message(|| format!("Pipeline complete, {} features, {} markers.",classified.len(),points.len()));

        Ok(())

    }
}
