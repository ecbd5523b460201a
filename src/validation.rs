use core::fmt::Display;
use core::fmt::Formatter;

use indexmap::IndexMap;

use crate::features::AssembledFeature;
use crate::features::FeatureCollection;
use crate::features::FeatureGeometry;
use crate::geometry::AreaMeasure;
use crate::progress::ProgressObserver;
use crate::registry::Registry;
use crate::registry::Strategy;

/// Overlaps smaller than this are boolean-operation slivers along shared
/// borders, not assembly mistakes.
const OVERLAP_TOLERANCE_KM2: f64 = 1.0;

const FULL_CIRCLE_DEGREES: f64 = 360.0;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Violation {
    MissingIndex(u16),
    DuplicateIndex(u16),
    UnknownIndex(u16),
    RegionMismatch {
        index: u16,
        expected: String,
        found: String,
    },
    KindMismatch {
        index: u16,
        expected: String,
        found: String,
    },
    IsoMismatch {
        index: u16,
        field: &'static str,
        expected: Option<String>,
        found: Option<String>,
    },
    EmptyGeometry(u16),
    GeometryKindMismatch {
        index: u16,
        expected_point: bool,
    },
    MarkerFlagMismatch {
        index: u16,
        marker: bool,
    },
    MissingArea(u16),
    Overlap {
        first: u16,
        second: u16,
        area_km2: f64,
    },
    AntarcticCoverage {
        total_degrees: f64,
    },
    RegionCount {
        region: String,
        expected: usize,
        found: usize,
    },
}

impl Display for Violation {

    fn fmt(&self, f: &mut Formatter) -> core::fmt::Result {
        match self {
            Self::MissingIndex(index) => write!(f,"destination {} is missing from the collection",index),
            Self::DuplicateIndex(index) => write!(f,"destination {} appears more than once",index),
            Self::UnknownIndex(index) => write!(f,"index {} does not name a destination",index),
            Self::RegionMismatch{index,expected,found} => write!(f,"destination {} records region '{}', expected '{}'",index,found,expected),
            Self::KindMismatch{index,expected,found} => write!(f,"destination {} records type '{}', expected '{}'",index,found,expected),
            Self::IsoMismatch{index,field,expected,found} => write!(f,"destination {} records {} {:?}, expected {:?}",index,field,found,expected),
            Self::EmptyGeometry(index) => write!(f,"destination {} has empty geometry",index),
            Self::GeometryKindMismatch{index,expected_point} => if *expected_point {
                write!(f,"destination {} should be a point placeholder but carries areal geometry",index)
            } else {
                write!(f,"destination {} should carry areal geometry but is a point",index)
            },
            Self::MarkerFlagMismatch{index,marker} => if *marker {
                write!(f,"destination {} is flagged as a marker but does not carry point geometry",index)
            } else {
                write!(f,"destination {} carries point geometry but is not flagged as a marker",index)
            },
            Self::MissingArea(index) => write!(f,"destination {} carries areal geometry but records no area",index),
            Self::Overlap{first,second,area_km2} => write!(f,"destinations {} and {} overlap by {:.1} km2",first,second,area_km2),
            Self::AntarcticCoverage{total_degrees} => write!(f,"antarctic sectors cover {:.4} degrees of longitude instead of 360",total_degrees),
            Self::RegionCount{region,expected,found} => write!(f,"region '{}' holds {} destinations, expected {}",region,found,expected),
        }
    }

}

#[derive(Clone, Debug, Default)]
pub(crate) struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {

    pub(crate) fn is_complete(&self) -> bool {
        self.violations.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.violations.len()
    }

    pub(crate) fn violations(&self) -> &[Violation] {
        &self.violations
    }

    fn record(&mut self, violation: Violation) {
        self.violations.push(violation)
    }

}

impl Display for ValidationReport {

    fn fmt(&self, f: &mut Formatter) -> core::fmt::Result {
        for violation in &self.violations {
            writeln!(f,"{}",violation)?;
        }
        Ok(())
    }

}

/// Checks an assembled collection against the registry. With
/// `classified` set the collection is expected to carry marker flags and
/// measured areas; without it, point geometry is only allowed where the
/// registry places a point placeholder.
pub(crate) fn validate<Progress: ProgressObserver>(collection: &FeatureCollection, registry: &Registry, classified: bool, progress: &mut Progress) -> ValidationReport {

    let mut report = ValidationReport::default();

    progress.announce("Validating destination completeness.");

    let mut by_index: IndexMap<u16, &AssembledFeature> = IndexMap::new();
    for feature in collection.features() {
        if registry.get(feature.index).is_err() {
            report.record(Violation::UnknownIndex(feature.index));
            continue;
        }
        if by_index.insert(feature.index, feature).is_some() {
            report.record(Violation::DuplicateIndex(feature.index));
        }
    }

    let mut indices_complete = report.is_complete();
    for spec in registry.get_all() {
        let Some(&feature) = by_index.get(&spec.index) else {
            report.record(Violation::MissingIndex(spec.index));
            indices_complete = false;
            continue;
        };
        check_row(&mut report, spec, feature, classified);
    }

    // when the index set itself is wrong, per-region counts restate the
    // same problem, so they are only checked once the set is complete
    if indices_complete {
        check_region_counts(&mut report, registry, &by_index);
    }
    check_antarctic_coverage(&mut report, registry);
    check_overlaps(&mut report, &by_index, progress);

    report
}

fn check_row(report: &mut ValidationReport, spec: &crate::registry::DestinationSpec, feature: &AssembledFeature, classified: bool) {

    if feature.region != spec.region {
        report.record(Violation::RegionMismatch {
            index: spec.index,
            expected: spec.region.to_string(),
            found: feature.region.to_string(),
        });
    }

    if feature.kind != spec.kind {
        report.record(Violation::KindMismatch {
            index: spec.index,
            expected: spec.kind.to_string(),
            found: feature.kind.to_string(),
        });
    }

    check_iso(report, spec.index, "iso_a2", spec.iso_a2, feature.iso_a2.as_deref());
    check_iso(report, spec.index, "iso_a3", spec.iso_a3, feature.iso_a3.as_deref());
    if feature.iso_n3 != spec.iso_n3 {
        report.record(Violation::IsoMismatch {
            index: spec.index,
            field: "iso_n3",
            expected: spec.iso_n3.map(|n| n.to_string()),
            found: feature.iso_n3.map(|n| n.to_string()),
        });
    }

    match &feature.geometry {
        FeatureGeometry::Areal(areal) => {
            if areal.is_empty() {
                report.record(Violation::EmptyGeometry(spec.index));
            }
            if classified {
                if feature.marker {
                    report.record(Violation::MarkerFlagMismatch { index: spec.index, marker: true });
                }
                if feature.area_km2.is_none() {
                    report.record(Violation::MissingArea(spec.index));
                }
            } else if matches!(spec.strategy, Strategy::Point { .. }) {
                report.record(Violation::GeometryKindMismatch { index: spec.index, expected_point: true });
            }
        },
        FeatureGeometry::Point(_) => {
            if classified {
                if !feature.marker {
                    report.record(Violation::MarkerFlagMismatch { index: spec.index, marker: false });
                }
            } else if !matches!(spec.strategy, Strategy::Point { .. }) {
                report.record(Violation::GeometryKindMismatch { index: spec.index, expected_point: false });
            }
        },
    }

}

fn check_iso(report: &mut ValidationReport, index: u16, field: &'static str, expected: Option<&str>, found: Option<&str>) {
    if expected != found {
        report.record(Violation::IsoMismatch {
            index,
            field,
            expected: expected.map(str::to_owned),
            found: found.map(str::to_owned),
        });
    }
}

fn check_region_counts(report: &mut ValidationReport, registry: &Registry, by_index: &IndexMap<u16, &AssembledFeature>) {

    let mut expected: IndexMap<&'static str, usize> = IndexMap::new();
    for spec in registry.get_all() {
        *expected.entry(spec.region.as_str()).or_insert(0) += 1;
    }

    let mut found: IndexMap<&'static str, usize> = IndexMap::new();
    for feature in by_index.values() {
        *found.entry(feature.region.as_str()).or_insert(0) += 1;
    }

    for (region, expected_count) in expected {
        let found_count = found.get(region).copied().unwrap_or(0);
        if found_count != expected_count {
            report.record(Violation::RegionCount {
                region: region.to_owned(),
                expected: expected_count,
                found: found_count,
            });
        }
    }

}

// sector widths must tile the full circle; a sector with west > east
// crosses the antimeridian
fn check_antarctic_coverage(report: &mut ValidationReport, registry: &Registry) {

    let mut total = 0.0;
    let mut sectors_present = false;

    for spec in registry.get_all() {
        if let Strategy::Antarctic { sectors } = spec.strategy {
            sectors_present = true;
            for (west, east) in sectors {
                if east >= west {
                    total += east - west;
                } else {
                    total += (180.0 - west) + (east + 180.0);
                }
            }
        }
    }

    if sectors_present && (total - FULL_CIRCLE_DEGREES).abs() > 1e-6 {
        report.record(Violation::AntarcticCoverage { total_degrees: total });
    }

}

fn check_overlaps<Progress: ProgressObserver>(report: &mut ValidationReport, by_index: &IndexMap<u16, &AssembledFeature>, progress: &mut Progress) {

    struct Areal<'collection> {
        index: u16,
        geometry: &'collection crate::geometry::ArealGeometry,
        extent: crate::utils::extent::Extent,
    }

    let mut areals = Vec::new();
    for feature in by_index.values() {
        if let FeatureGeometry::Areal(areal) = &feature.geometry {
            if let Some(extent) = areal.extent() {
                areals.push(Areal {
                    index: feature.index,
                    geometry: areal,
                    extent,
                });
            }
        }
    }

    progress.start_known_endpoint(|| ("Checking destination overlaps.", areals.len()));

    for (position, first) in areals.iter().enumerate() {
        for second in areals.iter().skip(position + 1) {
            // bounding boxes dodge almost every pair before the expensive
            // intersection runs
            if !first.extent.overlaps(&second.extent) {
                continue;
            }
            if let Some(shared) = first.geometry.intersection_with(second.geometry) {
                let area = shared.area_km2(AreaMeasure::Spherical);
                if area > OVERLAP_TOLERANCE_KM2 {
                    report.record(Violation::Overlap {
                        first: first.index,
                        second: second.index,
                        area_km2: area,
                    });
                }
            }
        }
        progress.update(|| position + 1);
    }

    progress.finish(|| "Overlap check complete.");

}

#[cfg(test)]
mod test {

    use geo_types::polygon;

    use super::validate;
    use super::Violation;
    use crate::features::AssembledFeature;
    use crate::features::FeatureCollection;
    use crate::features::FeatureGeometry;
    use crate::geometry::ArealGeometry;
    use crate::registry::DestinationSpec;
    use crate::registry::FeatureKind;
    use crate::registry::Region;
    use crate::registry::Registry;
    use crate::registry::Strategy;

    fn spec(index: u16) -> DestinationSpec {
        DestinationSpec {
            index,
            name: "Test Destination",
            region: Region::PacificOcean,
            iso_a2: Some("TS"),
            iso_a3: Some("TST"),
            iso_n3: Some(999),
            sovereign: "Testland",
            kind: FeatureKind::Territory,
            strategy: Strategy::Direct { code: None, merge: &[] },
        }
    }

    fn square(index: u16, west: f64, south: f64, size: f64) -> AssembledFeature {
        let polygon = geo_types::polygon![
            (x: west, y: south),
            (x: west + size, y: south),
            (x: west + size, y: south + size),
            (x: west, y: south + size),
            (x: west, y: south),
        ];
        AssembledFeature::from_spec(&spec(index), FeatureGeometry::Areal(ArealGeometry::Polygon(polygon)))
    }

    #[test]
    fn test_complete_collection_passes() {

        let registry = Registry::for_testing(vec![spec(1), spec(2)]);
        let collection = FeatureCollection::from_features(vec![square(1, 0.0, 0.0, 5.0), square(2, 10.0, 0.0, 5.0)]);

        let report = validate(&collection, &registry, false, &mut ());
        assert!(report.is_complete(), "unexpected violations: {}", report);

    }

    #[test]
    fn test_missing_index_is_the_only_violation() {

        let registry = Registry::for_testing(vec![spec(1), spec(2), spec(3)]);
        let collection = FeatureCollection::from_features(vec![square(1, 0.0, 0.0, 5.0), square(3, 10.0, 0.0, 5.0)]);

        let report = validate(&collection, &registry, false, &mut ());
        assert_eq!(report.len(), 1);
        assert_eq!(report.violations()[0], Violation::MissingIndex(2));

    }

    #[test]
    fn test_misreported_region_throws_off_the_counts() {

        let registry = Registry::for_testing(vec![spec(1), spec(2)]);
        let mut feature = square(2, 10.0, 0.0, 5.0);
        feature.region = Region::NorthAmerica;
        let collection = FeatureCollection::from_features(vec![square(1, 0.0, 0.0, 5.0), feature]);

        let report = validate(&collection, &registry, false, &mut ());
        assert!(report.violations().iter().any(|v| matches!(v, Violation::RegionMismatch { index: 2, .. })));
        assert!(report.violations().contains(&Violation::RegionCount {
            region: "Pacific Ocean".to_owned(),
            expected: 2,
            found: 1,
        }));

    }

    #[test]
    fn test_unknown_and_duplicate_indices_are_reported() {

        let registry = Registry::for_testing(vec![spec(1)]);
        let collection = FeatureCollection::from_features(vec![square(1, 0.0, 0.0, 5.0), square(1, 0.0, 0.0, 5.0), square(7, 10.0, 0.0, 5.0)]);

        let report = validate(&collection, &registry, false, &mut ());
        assert!(report.violations().contains(&Violation::UnknownIndex(7)));
        assert!(report.violations().contains(&Violation::DuplicateIndex(1)));

    }

    #[test]
    fn test_iso_codes_must_match_the_registry() {

        let registry = Registry::for_testing(vec![spec(1)]);
        let mut feature = square(1, 0.0, 0.0, 5.0);
        feature.iso_a3 = Some("XXX".to_owned());
        let collection = FeatureCollection::from_features(vec![feature]);

        let report = validate(&collection, &registry, false, &mut ());
        assert_eq!(report.len(), 1);
        assert!(matches!(report.violations()[0], Violation::IsoMismatch { index: 1, field: "iso_a3", .. }));

    }

    #[test]
    fn test_substantial_overlap_is_reported() {

        let registry = Registry::for_testing(vec![spec(1), spec(2)]);
        // the second square covers half of the first
        let collection = FeatureCollection::from_features(vec![square(1, 0.0, 0.0, 4.0), square(2, 2.0, 0.0, 4.0)]);

        let report = validate(&collection, &registry, false, &mut ());
        assert_eq!(report.len(), 1);
        assert!(matches!(report.violations()[0], Violation::Overlap { first: 1, second: 2, .. }));

    }

    #[test]
    fn test_shared_borders_are_not_overlaps() {

        let registry = Registry::for_testing(vec![spec(1), spec(2)]);
        let collection = FeatureCollection::from_features(vec![square(1, 0.0, 0.0, 5.0), square(2, 5.0, 0.0, 5.0)]);

        let report = validate(&collection, &registry, false, &mut ());
        assert!(report.is_complete(), "unexpected violations: {}", report);

    }

    #[test]
    fn test_incomplete_antarctic_partition_is_reported() {

        let mut antarctic = spec(1);
        antarctic.kind = FeatureKind::Antarctic;
        antarctic.strategy = Strategy::Antarctic { sectors: &[(-90.0, -74.0)] };
        let registry = Registry::for_testing(vec![antarctic]);

        let wedge = crate::geometry::wedge(-90.0, -74.0, -60.0, -90.0);
        let feature = AssembledFeature::from_spec(&antarctic, FeatureGeometry::Areal(ArealGeometry::Polygon(wedge)));
        let collection = FeatureCollection::from_features(vec![feature]);

        let report = validate(&collection, &registry, false, &mut ());
        assert_eq!(report.len(), 1);
        assert!(matches!(report.violations()[0], Violation::AntarcticCoverage { .. }));

    }

    #[test]
    fn test_antimeridian_sector_width_wraps() {

        let mut western = spec(1);
        western.kind = FeatureKind::Antarctic;
        western.strategy = Strategy::Antarctic { sectors: &[(-90.0, 160.0)] };
        let mut crossing = spec(2);
        crossing.kind = FeatureKind::Antarctic;
        crossing.strategy = Strategy::Antarctic { sectors: &[(160.0, -90.0)] };
        let registry = Registry::for_testing(vec![western, crossing]);

        let features = vec![
            AssembledFeature::from_spec(&western, FeatureGeometry::Areal(ArealGeometry::Polygon(crate::geometry::wedge(-90.0, 160.0, -60.0, -90.0)))),
            AssembledFeature::from_spec(&crossing, FeatureGeometry::Areal(ArealGeometry::Polygon(crate::geometry::wedge(160.0, 180.0, -60.0, -90.0)))),
        ];
        let collection = FeatureCollection::from_features(features);

        let report = validate(&collection, &registry, false, &mut ());
        // the two sectors tile the circle, so no coverage violation
        assert!(!report.violations().iter().any(|v| matches!(v, Violation::AntarcticCoverage { .. })), "unexpected: {}", report);

    }

    #[test]
    fn test_classified_collections_require_consistent_marker_flags() {

        let registry = Registry::for_testing(vec![spec(1), spec(2)]);

        let mut flagged_areal = square(1, 0.0, 0.0, 5.0);
        flagged_areal.marker = true;
        flagged_areal.area_km2 = Some(100.0);

        let mut unflagged_point = AssembledFeature::from_spec(&spec(2), FeatureGeometry::Point(geo_types::Point::new(10.0, 0.0)));
        unflagged_point.marker = false;

        let collection = FeatureCollection::from_features(vec![flagged_areal, unflagged_point]);
        let report = validate(&collection, &registry, true, &mut ());

        assert!(report.violations().contains(&Violation::MarkerFlagMismatch { index: 1, marker: true }));
        assert!(report.violations().contains(&Violation::MarkerFlagMismatch { index: 2, marker: false }));

    }

}
