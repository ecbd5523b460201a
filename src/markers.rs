use crate::errors::CommandError;
use crate::features::AssembledFeature;
use crate::features::FeatureCollection;
use crate::features::FeatureGeometry;
use crate::geometry::AreaMeasure;
use crate::progress::ProgressObserver;
use crate::progress::WatchableIterator;
use crate::utils::round_to_tenth;

pub(crate) const DEFAULT_THRESHOLD_KM2: f64 = 1000.0;

#[derive(Clone, Copy, Debug)]
pub(crate) struct MarkerSettings {
    pub(crate) threshold_km2: f64,
    pub(crate) measure: AreaMeasure,
}

impl Default for MarkerSettings {

    fn default() -> Self {
        Self {
            threshold_km2: DEFAULT_THRESHOLD_KM2,
            measure: AreaMeasure::Spherical,
        }
    }

}

/// Stamps every areal feature with its rounded area and demotes those below
/// the threshold to centroid markers. Point placeholders pass through as
/// markers with no area.
pub(crate) fn classify<Progress: ProgressObserver>(collection: FeatureCollection, settings: &MarkerSettings, progress: &mut Progress) -> Result<FeatureCollection, CommandError> {

    let mut classified = Vec::with_capacity(collection.len());

    for mut feature in collection.into_features().into_iter().watch(progress, "Classifying markers.", "Markers classified.") {
        match &feature.geometry {
            FeatureGeometry::Areal(areal) => {
                let area = round_to_tenth(areal.area_km2(settings.measure));
                feature.area_km2 = Some(area);
                if area < settings.threshold_km2 {
                    let centroid = areal.centroid().ok_or(CommandError::GeometryEngineFailure {
                        index: feature.index,
                        detail: "non-empty geometry has no centroid".to_owned(),
                    })?;
                    feature.geometry = FeatureGeometry::Point(centroid);
                    feature.marker = true;
                }
            },
            FeatureGeometry::Point(_) => {
                // already a marker, no area to measure
                feature.marker = true;
                feature.area_km2 = None;
            },
        }
        classified.push(feature);
    }

    Ok(FeatureCollection::from_features(classified))
}

/// The marker subset, for the point-only companion file.
pub(crate) fn marker_points(collection: &FeatureCollection) -> FeatureCollection {
    let markers: Vec<AssembledFeature> = collection.features().iter().filter(|feature| feature.marker).cloned().collect();
    FeatureCollection::from_features(markers)
}

#[cfg(test)]
mod test {

    use geo_types::polygon;
    use geo_types::Point;

    use super::classify;
    use super::marker_points;
    use super::MarkerSettings;
    use crate::features::AssembledFeature;
    use crate::features::FeatureCollection;
    use crate::features::FeatureGeometry;
    use crate::geometry::ArealGeometry;
    use crate::registry::DestinationSpec;
    use crate::registry::FeatureKind;
    use crate::registry::Region;
    use crate::registry::Strategy;

    // a degree of longitude at the equator is about 111 km, so the side
    // length in degrees picks the area bracket
    fn square_feature(index: u16, side_degrees: f64) -> AssembledFeature {
        let spec = DestinationSpec {
            index,
            name: "Test Destination",
            region: Region::PacificOcean,
            iso_a2: None,
            iso_a3: None,
            iso_n3: None,
            sovereign: "Testland",
            kind: FeatureKind::Territory,
            strategy: Strategy::Direct { code: None, merge: &[] },
        };
        let square = geo_types::polygon![
            (x: 0.0, y: 0.0),
            (x: side_degrees, y: 0.0),
            (x: side_degrees, y: side_degrees),
            (x: 0.0, y: side_degrees),
            (x: 0.0, y: 0.0),
        ];
        AssembledFeature::from_spec(&spec, FeatureGeometry::Areal(ArealGeometry::Polygon(square)))
    }

    fn point_feature(index: u16) -> AssembledFeature {
        let spec = DestinationSpec {
            index,
            name: "Placeholder",
            region: Region::PacificOcean,
            iso_a2: None,
            iso_a3: None,
            iso_n3: None,
            sovereign: "Testland",
            kind: FeatureKind::Territory,
            strategy: Strategy::Point { lon: 166.92, lat: -0.53 },
        };
        AssembledFeature::from_spec(&spec, FeatureGeometry::Point(Point::new(166.92, -0.53)))
    }

    #[test]
    fn test_small_areas_become_centroid_markers() {

        // roughly 0.2 x 0.2 degrees, about 490 km2
        let collection = FeatureCollection::from_features(vec![square_feature(1, 0.2)]);
        let classified = classify(collection, &MarkerSettings::default(), &mut ()).expect("classification should have succeeded");

        let feature = &classified.features()[0];
        assert!(feature.marker);
        assert!(feature.area_km2.expect("area") < 1000.0);
        match &feature.geometry {
            FeatureGeometry::Point(point) => {
                assert!((point.x() - 0.1).abs() < 0.01);
                assert!((point.y() - 0.1).abs() < 0.01);
            },
            FeatureGeometry::Areal(_) => panic!("expected a centroid point"),
        }

    }

    #[test]
    fn test_large_areas_keep_their_geometry() {

        // 2 x 2 degrees, about 49000 km2
        let collection = FeatureCollection::from_features(vec![square_feature(1, 2.0)]);
        let classified = classify(collection, &MarkerSettings::default(), &mut ()).expect("classification should have succeeded");

        let feature = &classified.features()[0];
        assert!(!feature.marker);
        assert!(feature.area_km2.expect("area") > 1000.0);
        assert!(matches!(feature.geometry, FeatureGeometry::Areal(_)));

    }

    #[test]
    fn test_threshold_is_exclusive_at_the_boundary() {

        // about 12300 km2, the custom threshold decides the bracket
        let collection = FeatureCollection::from_features(vec![square_feature(1, 1.0), square_feature(2, 1.0)]);
        let classified = classify(collection, &MarkerSettings::default(), &mut ()).expect("classification should have succeeded");
        let area = classified.features()[0].area_km2.expect("area");

        let below = MarkerSettings { threshold_km2: area + 0.1, ..MarkerSettings::default() };
        let reclassified = classify(classified.clone(), &below, &mut ()).expect("classification should have succeeded");
        assert!(reclassified.features()[0].marker);

        let at = MarkerSettings { threshold_km2: area, ..MarkerSettings::default() };
        let reclassified = classify(classified, &at, &mut ()).expect("classification should have succeeded");
        assert!(!reclassified.features()[0].marker);

    }

    #[test]
    fn test_point_placeholders_stay_markers_without_area() {

        let collection = FeatureCollection::from_features(vec![point_feature(1), square_feature(2, 2.0)]);
        let classified = classify(collection, &MarkerSettings::default(), &mut ()).expect("classification should have succeeded");

        let placeholder = &classified.features()[0];
        assert!(placeholder.marker);
        assert!(placeholder.area_km2.is_none());

        let points = marker_points(&classified);
        assert_eq!(points.len(), 1);
        assert_eq!(points.features()[0].index, 1);

    }

}
