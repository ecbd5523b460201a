use geo::BooleanOps;
use geo::BoundingRect;
use geo::Centroid;
use geo::ChamberlainDuquetteArea;
use geo::GeodesicArea;
use geo::Intersects;
use geo_types::MultiPolygon;
use geo_types::Point;
use geo_types::Polygon;

use crate::utils::extent::Extent;

/// How projected areas are measured for marker classification. Both are
/// equal-area measures from the geo crate; spherical is much faster and
/// well within tolerance for a 1000 km² threshold, geodesic is available
/// for anyone who wants to tune the threshold against ellipsoidal areas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AreaMeasure {
    Spherical,
    Geodesic,
}

/// A polygonal geometry that may be a single polygon or a multipolygon.
/// Boolean operations in geo always return multipolygons, so this type
/// re-normalizes single-part results back down to plain polygons, which
/// keeps the written GeoJSON the same shape the sources had.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum ArealGeometry {
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
}

impl ArealGeometry {

    /// Builds from a list of component polygons, dropping empty ones.
    /// Returns None if nothing remains.
    pub(crate) fn from_polygons(polygons: Vec<Polygon>) -> Option<Self> {
        let mut polygons: Vec<Polygon> = polygons.into_iter().filter(|p| !p.exterior().0.is_empty()).collect();
        match polygons.len() {
            0 => None,
            1 => Some(Self::Polygon(polygons.remove(0))),
            _ => Some(Self::MultiPolygon(MultiPolygon(polygons)))
        }
    }

    pub(crate) fn to_multi(&self) -> MultiPolygon {
        match self {
            Self::Polygon(polygon) => MultiPolygon(vec![polygon.clone()]),
            Self::MultiPolygon(multi) => multi.clone(),
        }
    }

    pub(crate) fn parts(&self) -> &[Polygon] {
        match self {
            Self::Polygon(polygon) => std::slice::from_ref(polygon),
            Self::MultiPolygon(multi) => &multi.0,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        match self {
            Self::Polygon(polygon) => polygon.exterior().0.is_empty(),
            Self::MultiPolygon(multi) => multi.0.iter().all(|p| p.exterior().0.is_empty()),
        }
    }

    pub(crate) fn union_with(&self, other: &Self) -> Option<Self> {
        let result = self.to_multi().union(&other.to_multi());
        Self::from_polygons(result.0)
    }

    pub(crate) fn difference_with(&self, other: &Self) -> Option<Self> {
        let result = self.to_multi().difference(&other.to_multi());
        Self::from_polygons(result.0)
    }

    pub(crate) fn intersection_with(&self, other: &Self) -> Option<Self> {
        let result = self.to_multi().intersection(&other.to_multi());
        Self::from_polygons(result.0)
    }

    /// Unions an arbitrary set of geometries into one. The equivalent of a
    /// GIS dissolve over a selection.
    pub(crate) fn dissolve<Geometries: IntoIterator<Item = Self>>(geometries: Geometries) -> Option<Self> {
        let mut iter = geometries.into_iter();
        let first = iter.next()?;
        iter.try_fold(first, |merged, next| merged.union_with(&next))
    }

    pub(crate) fn extent(&self) -> Option<Extent> {
        let rect = match self {
            Self::Polygon(polygon) => polygon.bounding_rect(),
            Self::MultiPolygon(multi) => multi.bounding_rect(),
        }?;
        Some(Extent::new(rect.min().x, rect.min().y, rect.max().x, rect.max().y))
    }

    pub(crate) fn centroid(&self) -> Option<Point> {
        match self {
            Self::Polygon(polygon) => polygon.centroid(),
            Self::MultiPolygon(multi) => multi.centroid(),
        }
    }

    pub(crate) fn area_km2(&self, measure: AreaMeasure) -> f64 {
        let multi = self.to_multi();
        let square_meters = match measure {
            AreaMeasure::Spherical => multi.chamberlain_duquette_unsigned_area(),
            AreaMeasure::Geodesic => multi.geodesic_area_unsigned(),
        };
        square_meters / 1_000_000.0
    }

    /// Isolates component polygons whose centroid falls within the extent.
    /// If no centroid is contained, falls back to plain intersection, which
    /// catches islands whose centroid lands outside a tight box.
    pub(crate) fn components_in_extent(&self, extent: &Extent) -> Option<Self> {
        let parts = self.parts();

        let mut matches: Vec<Polygon> = parts.iter().filter(|p| {
            p.centroid().is_some_and(|c| extent.contains(&c))
        }).cloned().collect();

        if matches.is_empty() {
            let boundary = extent.create_polygon();
            matches = parts.iter().filter(|p| boundary.intersects(*p)).cloned().collect();
        }

        Self::from_polygons(matches)
    }

    /// Component polygons whose centroid longitude falls within [west, east].
    pub(crate) fn components_in_longitudes(&self, west: f64, east: f64) -> Vec<Polygon> {
        self.parts().iter().filter(|p| {
            p.centroid().is_some_and(|c| (west..=east).contains(&c.x()))
        }).cloned().collect()
    }

}

impl From<Polygon> for ArealGeometry {

    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}

impl From<MultiPolygon> for ArealGeometry {

    fn from(value: MultiPolygon) -> Self {
        // a single-part multipolygon came from a source file; leave it alone
        // so the output geometry type matches the input.
        Self::MultiPolygon(value)
    }
}

/// Builds a sector wedge running from lat_south up to lat_north between two
/// longitudes, with the northern edge sampled so downstream simplification
/// has vertices to work with along the arc.
pub(crate) fn wedge(lon_west: f64, lon_east: f64, lat_north: f64, lat_south: f64) -> Polygon {
    const ARC_POINTS: usize = 60;

    let mut coords: Vec<(f64, f64)> = Vec::with_capacity(ARC_POINTS + 4);

    // northern arc from west to east
    for i in 0..=ARC_POINTS {
        let lon = lon_west + (lon_east - lon_west) * (i as f64) / (ARC_POINTS as f64);
        coords.push((lon, lat_north));
    }

    coords.push((lon_east, lat_south));
    coords.push((lon_west, lat_south));
    coords.push(coords[0]);

    Polygon::new(coords.into(), Vec::new())
}

#[cfg(test)]
mod test {

    use geo_types::polygon;

    use super::AreaMeasure;
    use super::ArealGeometry;
    use super::wedge;
    use crate::utils::extent::Extent;

    fn unit_square(west: f64, south: f64) -> ArealGeometry {
        ArealGeometry::Polygon(polygon![
            (x: west, y: south),
            (x: west + 1.0, y: south),
            (x: west + 1.0, y: south + 1.0),
            (x: west, y: south + 1.0),
            (x: west, y: south),
        ])
    }

    #[test]
    fn test_dissolve_adjacent_squares_makes_one_polygon() {

        let merged = ArealGeometry::dissolve([unit_square(0.0, 0.0), unit_square(1.0, 0.0)]).expect("union should not have been empty");

        assert!(matches!(merged, ArealGeometry::Polygon(_)));
        let extent = merged.extent().expect("merged geometry should have had an extent");
        assert_eq!(extent.east(), 2.0);
        assert_eq!(extent.north(), 1.0);

    }

    #[test]
    fn test_dissolve_disjoint_squares_makes_multipolygon() {

        let merged = ArealGeometry::dissolve([unit_square(0.0, 0.0), unit_square(5.0, 5.0)]).expect("union should not have been empty");

        assert!(matches!(merged, ArealGeometry::MultiPolygon(_)));
        assert_eq!(merged.parts().len(), 2);

    }

    #[test]
    fn test_difference_can_empty_a_geometry() {

        let square = unit_square(0.0, 0.0);
        let cover = unit_square(0.0, 0.0);

        assert!(square.difference_with(&cover).is_none());

    }

    #[test]
    fn test_components_in_extent_by_centroid() {

        let multi = ArealGeometry::dissolve([unit_square(0.0, 0.0), unit_square(10.0, 10.0)]).expect("union should not have been empty");

        let near = multi.components_in_extent(&Extent::new(-1.0, -1.0, 2.0, 2.0)).expect("one component should have matched");
        assert_eq!(near.parts().len(), 1);
        assert!(near.extent().expect("extent").east() <= 1.0);

    }

    #[test]
    fn test_wedge_bounding_box_matches_span() {

        // the Argentine Antarctica sector
        let wedge = ArealGeometry::Polygon(wedge(-74.0, -25.0, -60.0, -90.0));

        let extent = wedge.extent().expect("wedge should have had an extent");
        assert_eq!(extent.west, -74.0);
        assert_eq!(extent.east(), -25.0);
        assert_eq!(extent.south, -90.0);
        assert_eq!(extent.north(), -60.0);
        assert!(!wedge.is_empty());

    }

    #[test]
    fn test_spherical_area_of_equatorial_square() {

        // 1°x1° at the equator is roughly 111.32 km x 110.57 km
        let square = unit_square(0.0, 0.0);
        let area = square.area_km2(AreaMeasure::Spherical);

        assert!(area > 11_000.0 && area < 13_500.0, "area was {}", area);

    }

}
