use std::path::PathBuf;

use clap::Args;

use super::Task;
use super::MARKERS_FILE;
use super::POINTS_FILE;
use crate::errors::CommandError;
use crate::features::FeatureCollection;
use crate::features::PropertySchema;
use crate::geometry::AreaMeasure;
use crate::markers::classify;
use crate::markers::marker_points;
use crate::markers::MarkerSettings;
use crate::progress::ProgressObserver;
use crate::subcommand_def;

subcommand_def!{
    /// Measures feature areas and demotes small features to point markers
    pub(crate) struct Markers {

        /// The merged GeoJSON file to classify
        #[arg(long)]
        input: PathBuf,

        /// The directory to write the classified files into
        #[arg(long)]
        output: PathBuf,

        /// Features smaller than this area become point markers
        #[arg(long,default_value="1000")]
        threshold_km2: f64,

        /// Measure areas on the geodesic instead of the authalic sphere
        #[arg(long)]
        geodesic: bool,

    }
}

impl Task for Markers {

    fn run<Progress: ProgressObserver>(self, progress: &mut Progress) -> Result<(),CommandError> {

        progress.announce("Classifying marker features.");

        let collection = FeatureCollection::read(&self.input)?;

        let settings = MarkerSettings {
            threshold_km2: self.threshold_km2,
            measure: if self.geodesic {
                AreaMeasure::Geodesic
            } else {
                AreaMeasure::Spherical
            },
        };

        let classified = classify(collection, &settings, progress)?;
        let points = marker_points(&classified);

        let markers_target = self.output.join(MARKERS_FILE);
        classified.write(&markers_target, PropertySchema::Markers)?;
        let points_target = self.output.join(POINTS_FILE);
        points.write(&points_target, PropertySchema::Markers)?;

        progress.message(|| format!("Wrote {} features, {} of them markers.",classified.len(),points.len()));

        Ok(())

    }
}
