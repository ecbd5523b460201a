use geo::Centroid;
use geo_types::Point;
use geo_types::Polygon;
use indexmap::IndexMap;

use crate::boundary::ContinentalBoundary;
use crate::catalog::SourceCatalog;
use crate::errors::CommandError;
use crate::features::AssembledFeature;
use crate::features::FeatureCollection;
use crate::features::FeatureGeometry;
use crate::geometry::wedge;
use crate::geometry::ArealGeometry;
use crate::progress::ProgressObserver;
use crate::progress::WatchableIterator;
use crate::registry::ContinentSide;
use crate::registry::DestinationSpec;
use crate::registry::ParentRef;
use crate::registry::Registry;
use crate::registry::Strategy;
use crate::utils::extent::Extent;

const ANTARCTIC_LAT_NORTH: f64 = -60.0;
const ANTARCTIC_LAT_SOUTH: f64 = -90.0;

/// Drives every registry row through its strategy executor. Two passes:
/// group remainders subtract other destinations' assembled geometry, so
/// they wait until everything else is built. Any executor failure aborts
/// the build; a partial catalog is never worth publishing.
pub(crate) fn assemble<Progress: ProgressObserver>(registry: &Registry, catalog: &SourceCatalog, progress: &mut Progress) -> Result<FeatureCollection, CommandError> {

    let boundary = ContinentalBoundary::from_lines(catalog.boundary_lines());
    if boundary.is_empty() {
        progress.warning(|| "The continental boundary is empty; transcontinental splits will fail.");
    }

    let mut built: IndexMap<u16, ArealGeometry> = IndexMap::new();
    let mut features = Vec::with_capacity(registry.get_all().len());
    let mut deferred = Vec::new();

    for spec in registry.get_all().iter().watch(progress, "Assembling destinations.", "Destinations assembled.") {
        if matches!(spec.strategy, Strategy::GroupRemainder { .. }) {
            deferred.push(spec);
            continue;
        }
        let geometry = execute(spec, catalog, &boundary, &built)?;
        if let FeatureGeometry::Areal(areal) = &geometry {
            _ = built.insert(spec.index, areal.clone());
        }
        features.push(AssembledFeature::from_spec(spec, geometry));
    }

    for spec in deferred.into_iter().watch(progress, "Assembling group remainders.", "Group remainders assembled.") {
        let geometry = execute_group_remainder(spec, catalog, &built)?;
        features.push(AssembledFeature::from_spec(spec, geometry));
    }

    Ok(FeatureCollection::from_features(features))
}

fn execute(spec: &DestinationSpec, catalog: &SourceCatalog, boundary: &ContinentalBoundary, built: &IndexMap<u16, ArealGeometry>) -> Result<FeatureGeometry, CommandError> {

    let geometry = match &spec.strategy {

        Strategy::Direct { code, merge } => {
            let code = code.or(spec.iso_a3);
            let mut geometry = code.and_then(|code| catalog.select(code))
                .or_else(|| catalog.select_by_name(spec.name))
                .ok_or_else(|| source_not_found(spec, code.unwrap_or(spec.name)))?;
            for extra in *merge {
                if let Some(extra) = catalog.select(extra) {
                    geometry = merged(spec, geometry, &extra)?;
                }
            }
            geometry
        },

        Strategy::Subunit { su_a3 } => {
            catalog.subunit(su_a3, spec.name).ok_or_else(|| source_not_found(spec, su_a3))?
        },

        Strategy::Admin1 { adm0_a3, provinces } => {
            catalog.provinces_dissolved(adm0_a3, provinces)
                .filter(|geometry| !geometry.is_empty())
                .ok_or_else(|| empty_dissolve(spec))?
        },

        Strategy::Remainder { adm0_a3, subtract_admin1, subtract_disputed, merge_disputed } => {
            let mut geometry = catalog.country(adm0_a3).ok_or_else(|| source_not_found(spec, adm0_a3))?;
            if !subtract_admin1.is_empty() {
                if let Some(subtract) = catalog.provinces_dissolved(adm0_a3, subtract_admin1) {
                    geometry = geometry.difference_with(&subtract).ok_or_else(|| empty_dissolve(spec))?;
                }
            }
            for name in *subtract_disputed {
                if let Some(area) = catalog.disputed_area(name) {
                    geometry = geometry.difference_with(&area).ok_or_else(|| empty_dissolve(spec))?;
                }
            }
            for name in *merge_disputed {
                if let Some(area) = catalog.disputed_area(name) {
                    geometry = merged(spec, geometry, &area)?;
                }
            }
            geometry
        },

        Strategy::DisputedRemainder { adm0_a3, subtract_disputed } => {
            let mut geometry = catalog.country(adm0_a3).ok_or_else(|| source_not_found(spec, adm0_a3))?;
            for name in *subtract_disputed {
                if let Some(area) = catalog.disputed_area(name) {
                    geometry = geometry.difference_with(&area).ok_or_else(|| empty_dissolve(spec))?;
                }
            }
            geometry
        },

        Strategy::Clip { adm0_a3, side, absorb_lon, subtract_indices, subtract_su_a3 } => {
            let country = catalog.country(adm0_a3).ok_or_else(|| source_not_found(spec, adm0_a3))?;
            let mut geometry = boundary.clip(&country, *side).ok_or_else(|| clip_empty(spec))?;

            // reassign stray parts that landed on the wrong side of the
            // boundary within the given longitude range
            if let Some((west, east)) = *absorb_lon {
                geometry = match side {
                    ContinentSide::Europe => {
                        let opposite = country.difference_with(&geometry);
                        let strays = opposite.map(|o| o.components_in_longitudes(west, east)).unwrap_or_default();
                        let mut absorbed = geometry;
                        for stray in strays {
                            absorbed = merged(spec, absorbed, &ArealGeometry::Polygon(stray))?;
                        }
                        absorbed
                    },
                    ContinentSide::Asia => {
                        let kept: Vec<Polygon> = geometry.parts().iter().filter(|part| {
                            !part.centroid().is_some_and(|c| (west..=east).contains(&c.x()))
                        }).cloned().collect();
                        ArealGeometry::from_polygons(kept).unwrap_or(geometry)
                    },
                };
            }

            for index in *subtract_indices {
                let other = built.get(index).ok_or_else(|| CommandError::GeometryEngineFailure {
                    index: spec.index,
                    detail: format!("destination {} was referenced before it was assembled",index),
                })?;
                geometry = geometry.difference_with(other).ok_or_else(|| clip_empty(spec))?;
            }

            for su_a3 in *subtract_su_a3 {
                if let Some(subunit) = catalog.subunit_code(su_a3) {
                    geometry = geometry.difference_with(&subunit).ok_or_else(|| clip_empty(spec))?;
                }
            }

            geometry
        },

        Strategy::Disputed { name, also_merge, fallback } => {
            match catalog.disputed_area(name) {
                Some(mut geometry) => {
                    for extra in *also_merge {
                        if let Some(extra) = catalog.disputed_area(extra) {
                            geometry = merged(spec, geometry, &extra)?;
                        }
                    }
                    geometry
                },
                // the disputed layer always wins when it has the area; only
                // when it doesn't is the named admin-1 region cut out instead
                None => match fallback {
                    Some((adm0_a3, region)) => {
                        catalog.admin1_region(adm0_a3, region).ok_or_else(|| source_not_found(spec, name))?
                    },
                    None => return Err(source_not_found(spec, name)),
                },
            }
        },

        Strategy::IslandBbox { parent, bbox } => {
            let (parent_geometry, label) = match parent {
                ParentRef::Country(code) => (catalog.country(code), *code),
                ParentRef::Admin1(adm0_a3, region) => (catalog.admin1_region(adm0_a3, region), *region),
            };
            let parent_geometry = parent_geometry.ok_or_else(|| source_not_found(spec, label))?;
            let extent = Extent::new(bbox[0], bbox[1], bbox[2], bbox[3]);
            parent_geometry.components_in_extent(&extent).ok_or(CommandError::RingNotFound {
                index: spec.index,
                name: spec.name.to_owned(),
            })?
        },

        Strategy::Antarctic { sectors } => {
            let mut wedges = Vec::new();
            for (west, east) in *sectors {
                if west > east {
                    // crosses the antimeridian
                    wedges.push(wedge(*west, 180.0, ANTARCTIC_LAT_NORTH, ANTARCTIC_LAT_SOUTH));
                    wedges.push(wedge(-180.0, *east, ANTARCTIC_LAT_NORTH, ANTARCTIC_LAT_SOUTH));
                } else {
                    wedges.push(wedge(*west, *east, ANTARCTIC_LAT_NORTH, ANTARCTIC_LAT_SOUTH));
                }
            }
            ArealGeometry::from_polygons(wedges).ok_or_else(|| empty_dissolve(spec))?
        },

        Strategy::Point { lon, lat } => {
            return Ok(FeatureGeometry::Point(Point::new(*lon, *lat)));
        },

        Strategy::GroupRemainder { .. } => {
            // handled in the second pass
            return Err(CommandError::GeometryEngineFailure {
                index: spec.index,
                detail: "group remainder dispatched in the first pass".to_owned(),
            });
        },

    };

    Ok(FeatureGeometry::Areal(geometry))
}

fn execute_group_remainder(spec: &DestinationSpec, catalog: &SourceCatalog, built: &IndexMap<u16, ArealGeometry>) -> Result<FeatureGeometry, CommandError> {

    let Strategy::GroupRemainder { adm0_a3, subtract_indices } = spec.strategy else {
        return Err(CommandError::GeometryEngineFailure {
            index: spec.index,
            detail: "non-group strategy deferred to the second pass".to_owned(),
        });
    };

    let mut geometry = catalog.country(adm0_a3).ok_or_else(|| source_not_found(spec, adm0_a3))?;

    let mut others = Vec::new();
    for index in subtract_indices {
        let other = built.get(index).ok_or_else(|| CommandError::GeometryEngineFailure {
            index: spec.index,
            detail: format!("destination {} was referenced before it was assembled",index),
        })?;
        others.push(other.clone());
    }

    if let Some(subtract) = ArealGeometry::dissolve(others) {
        geometry = geometry.difference_with(&subtract).ok_or_else(|| empty_dissolve(spec))?;
    }

    Ok(FeatureGeometry::Areal(geometry))
}

// union results are only empty when both operands are, which loaded source
// geometry never is; an empty union is an engine failure, not a thin result
fn merged(spec: &DestinationSpec, geometry: ArealGeometry, other: &ArealGeometry) -> Result<ArealGeometry, CommandError> {
    geometry.union_with(other).ok_or(CommandError::GeometryEngineFailure {
        index: spec.index,
        detail: "union of non-empty geometries came back empty".to_owned(),
    })
}

fn source_not_found(spec: &DestinationSpec, code: &str) -> CommandError {
    CommandError::SourceNotFound {
        index: spec.index,
        name: spec.name.to_owned(),
        code: code.to_owned(),
    }
}

fn empty_dissolve(spec: &DestinationSpec) -> CommandError {
    CommandError::EmptyDissolve {
        index: spec.index,
        name: spec.name.to_owned(),
    }
}

fn clip_empty(spec: &DestinationSpec) -> CommandError {
    CommandError::ClipProducedNoGeometry {
        index: spec.index,
        name: spec.name.to_owned(),
    }
}

#[cfg(test)]
mod test {

    use geo_types::polygon;
    use geo_types::LineString;
    use indexmap::IndexMap;

    use super::assemble;
    use super::execute;
    use crate::boundary::ContinentalBoundary;
    use crate::catalog::test_support::square_feature;
    use crate::catalog::ProvinceLayer;
    use crate::catalog::SourceCatalog;
    use crate::catalog::SourceLayer;
    use crate::errors::CommandError;
    use crate::features::FeatureGeometry;
    use crate::geometry::ArealGeometry;
    use crate::registry::ContinentSide;
    use crate::registry::DestinationSpec;
    use crate::registry::FeatureKind;
    use crate::registry::ParentRef;
    use crate::registry::Region;
    use crate::registry::Registry;
    use crate::registry::Strategy;

    fn catalog() -> SourceCatalog {

        let mut mainland = square_feature("Testland", 0.0, 0.0, 10.0);
        mainland.su_a3 = Some("TSM".to_owned());
        mainland.adm0_a3 = Some("TST".to_owned());
        mainland.iso_a3 = Some("TST".to_owned());

        let mut dependency = square_feature("Outer Isle", 20.0, 0.0, 2.0);
        dependency.su_a3 = Some("TSI".to_owned());
        dependency.adm0_a3 = Some("TST".to_owned());

        let mut province = square_feature("North Province", 0.0, 5.0, 5.0);
        province.adm0_a3 = Some("TST".to_owned());

        let mut breakaway = square_feature("Stray Republic", 5.0, 0.0, 5.0);
        breakaway.brk_name = Some("Republic of Stray".to_owned());

        SourceCatalog::from_layers(
            SourceLayer::from_features(vec![mainland, dependency]),
            SourceLayer::from_features(Vec::new()),
            ProvinceLayer::from_features(vec![province]),
            SourceLayer::from_features(vec![breakaway]),
            vec![LineString::from(vec![(5.0, -80.0), (5.0, 80.0)])],
        )
    }

    fn spec(index: u16, strategy: Strategy) -> DestinationSpec {
        DestinationSpec {
            index,
            name: "Test Destination",
            region: Region::PacificOcean,
            iso_a2: None,
            iso_a3: None,
            iso_n3: None,
            sovereign: "Testland",
            kind: FeatureKind::Territory,
            strategy,
        }
    }

    fn run(strategy: Strategy) -> Result<FeatureGeometry, CommandError> {
        let catalog = catalog();
        let boundary = ContinentalBoundary::from_lines(catalog.boundary_lines());
        execute(&spec(1, strategy), &catalog, &boundary, &IndexMap::new())
    }

    fn areal(geometry: FeatureGeometry) -> ArealGeometry {
        match geometry {
            FeatureGeometry::Areal(areal) => areal,
            FeatureGeometry::Point(_) => panic!("expected areal geometry"),
        }
    }

    #[test]
    fn test_direct_merge_dissolves_extra_codes() {

        let merged = areal(run(Strategy::Direct { code: Some("TSM"), merge: &["TSI"] }).expect("direct should have succeeded"));
        assert_eq!(merged.parts().len(), 2);

        let error = run(Strategy::Direct { code: Some("XXX"), merge: &[] });
        assert!(matches!(error, Err(CommandError::SourceNotFound { index: 1, .. })));

    }

    #[test]
    fn test_empty_province_list_fails_with_empty_dissolve() {

        let error = run(Strategy::Admin1 { adm0_a3: "TST", provinces: &[] });
        assert!(matches!(error, Err(CommandError::EmptyDissolve { index: 1, .. })));

    }

    #[test]
    fn test_remainder_subtracts_provinces() {

        let remainder = areal(run(Strategy::Remainder { adm0_a3: "TST", subtract_admin1: &["North Province"], subtract_disputed: &[], merge_disputed: &[] }).expect("remainder should have succeeded"));

        // the north-west quarter is gone but the extent still spans both parts
        let full = areal(run(Strategy::Direct { code: Some("TST"), merge: &[] }).expect("direct"));
        assert!(remainder.area_km2(crate::geometry::AreaMeasure::Spherical) < full.area_km2(crate::geometry::AreaMeasure::Spherical));

    }

    #[test]
    fn test_disputed_prefers_layer_over_fallback() {

        let from_layer = areal(run(Strategy::Disputed { name: "Stray", also_merge: &[], fallback: Some(("TST", "North Province")) }).expect("disputed should have matched the layer"));
        let extent = from_layer.extent().expect("extent");
        assert_eq!(extent.west, 5.0);

        let from_fallback = areal(run(Strategy::Disputed { name: "No Such Area", also_merge: &[], fallback: Some(("TST", "North Province")) }).expect("fallback should have matched"));
        let extent = from_fallback.extent().expect("extent");
        assert_eq!(extent.south, 5.0);

        let error = run(Strategy::Disputed { name: "No Such Area", also_merge: &[], fallback: None });
        assert!(matches!(error, Err(CommandError::SourceNotFound { .. })));

    }

    #[test]
    fn test_island_bbox_extracts_the_dependency() {

        let isle = areal(run(Strategy::IslandBbox { parent: ParentRef::Country("TST"), bbox: [19.0, -1.0, 23.0, 3.0] }).expect("extraction should have succeeded"));
        assert_eq!(isle.parts().len(), 1);
        assert_eq!(isle.extent().expect("extent").west, 20.0);

        let error = run(Strategy::IslandBbox { parent: ParentRef::Country("TST"), bbox: [40.0, 40.0, 41.0, 41.0] });
        assert!(matches!(error, Err(CommandError::RingNotFound { index: 1, .. })));

    }

    #[test]
    fn test_clip_splits_and_subtracts() {

        let catalog = catalog();
        let boundary = ContinentalBoundary::from_lines(catalog.boundary_lines());

        let mut built = IndexMap::new();
        _ = built.insert(9, ArealGeometry::Polygon(geo_types::polygon![
            (x: 6.0, y: 6.0),
            (x: 10.0, y: 6.0),
            (x: 10.0, y: 10.0),
            (x: 6.0, y: 10.0),
            (x: 6.0, y: 6.0),
        ]));

        let strategy = Strategy::Clip { adm0_a3: "TST", side: ContinentSide::Asia, absorb_lon: None, subtract_indices: &[9], subtract_su_a3: &["TSI"] };
        let clipped = areal(execute(&spec(10, strategy), &catalog, &boundary, &built).expect("clip should have succeeded"));

        let extent = clipped.extent().expect("extent");
        assert!(extent.west >= 4.999);
        // the dependency subunit and the built square are both gone
        assert!(extent.east() <= 10.001);
        assert!(clipped.area_km2(crate::geometry::AreaMeasure::Spherical) > 0.0);

    }

    #[test]
    fn test_argentine_sector_is_one_closed_polygon() {

        let sector = areal(run(Strategy::Antarctic { sectors: &[(-74.0, -25.0)] }).expect("wedge should have succeeded"));

        assert!(matches!(sector, ArealGeometry::Polygon(_)));
        let extent = sector.extent().expect("extent");
        assert_eq!(extent.west, -74.0);
        assert_eq!(extent.east(), -25.0);
        assert_eq!(extent.south, -90.0);
        assert_eq!(extent.north(), -60.0);

    }

    #[test]
    fn test_antimeridian_sector_splits_in_two() {

        let sector = areal(run(Strategy::Antarctic { sectors: &[(160.0, -90.0)] }).expect("wedge should have succeeded"));
        assert_eq!(sector.parts().len(), 2);

    }

    #[test]
    fn test_point_placeholder_is_marker_from_the_start() {

        let catalog = catalog();
        let registry = Registry::for_testing(vec![
            spec(1, Strategy::Point { lon: 166.92, lat: -0.53 }),
        ]);

        let collection = assemble(&registry, &catalog, &mut ()).expect("assembly should have succeeded");
        let feature = &collection.features()[0];
        assert!(feature.marker);
        assert!(feature.area_km2.is_none());
        assert!(matches!(feature.geometry, FeatureGeometry::Point(_)));

    }

    #[test]
    fn test_group_remainder_runs_in_the_second_pass() {

        let catalog = catalog();
        // the group remainder comes first in the table but still sees the
        // later destination's assembled geometry
        let registry = Registry::for_testing(vec![
            spec(1, Strategy::GroupRemainder { adm0_a3: "TST", subtract_indices: &[2] }),
            spec(2, Strategy::Direct { code: Some("TSM"), merge: &[] }),
        ]);

        let collection = assemble(&registry, &catalog, &mut ()).expect("assembly should have succeeded");

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.features()[0].index, 1);

        // index 1 is the country minus the mainland: only the dependency remains
        let remainder = match &collection.features()[0].geometry {
            FeatureGeometry::Areal(areal) => areal,
            FeatureGeometry::Point(_) => panic!("expected areal geometry"),
        };
        assert_eq!(remainder.extent().expect("extent").west, 20.0);

    }

    #[test]
    fn test_assembly_is_deterministic() {

        let catalog = catalog();
        let registry = Registry::for_testing(vec![
            spec(1, Strategy::GroupRemainder { adm0_a3: "TST", subtract_indices: &[2] }),
            spec(2, Strategy::Direct { code: Some("TSM"), merge: &[] }),
            spec(3, Strategy::Admin1 { adm0_a3: "TST", provinces: &["North Province"] }),
        ]);

        let first = assemble(&registry, &catalog, &mut ()).expect("assembly should have succeeded");
        let second = assemble(&registry, &catalog, &mut ()).expect("assembly should have succeeded");
        assert_eq!(first, second);

    }

}
