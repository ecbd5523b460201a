use geo_types::Coord;
use geo_types::LineString;
use geo_types::Polygon;
use ordered_float::OrderedFloat;

use crate::geometry::ArealGeometry;
use crate::registry::ContinentSide;

// Segments further apart than this are treated as a break in the line
// rather than a gap to bridge.
const CHAIN_GAP_LIMIT: f64 = 5.0;

// The western closing edge never reaches past this longitude, so the clip
// polygon can't wrap the antimeridian and capture far-eastern territory.
const WEST_EDGE_LIMIT: f64 = -30.0;

/// The continental boundary, assembled from the source file's line segments
/// into a single path running south to north.
pub(crate) struct ContinentalBoundary {
    path: Vec<Coord>,
}

impl ContinentalBoundary {

    /// Chains loose segments into one ordered path. The source file stores
    /// the boundary as hundreds of segments with small gaps between them, in
    /// no particular order; they are chained greedily by nearest endpoint,
    /// starting from the southernmost segment.
    pub(crate) fn from_lines(lines: &[LineString]) -> Self {

        let mut lines: Vec<Vec<Coord>> = lines.iter().map(|line| line.0.clone()).filter(|coords| !coords.is_empty()).collect();

        if lines.is_empty() {
            return Self { path: Vec::new() };
        }

        lines.sort_by_key(|coords| {
            OrderedFloat(coords.iter().map(|c| c.y).fold(f64::INFINITY, f64::min))
        });

        let mut path = lines.remove(0);

        while !lines.is_empty() {
            let end = path[path.len() - 1];
            let mut best: Option<(usize, bool, f64)> = None;
            for (i, line) in lines.iter().enumerate() {
                let to_start = distance(&end, &line[0]);
                let to_end = distance(&end, &line[line.len() - 1]);
                if best.map_or(true, |(_, _, d)| to_start < d) {
                    best = Some((i, false, to_start));
                }
                if best.map_or(true, |(_, _, d)| to_end < d) {
                    best = Some((i, true, to_end));
                }
            }
            match best {
                Some((i, reverse, d)) if d < CHAIN_GAP_LIMIT => {
                    let mut coords = lines.remove(i);
                    if reverse {
                        coords.reverse();
                    }
                    path.extend(coords);
                },
                _ => break, // the rest are strays
            }
        }

        // path runs south to north
        if path[0].y > path[path.len() - 1].y {
            path.reverse();
        }

        Self { path }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Closes the boundary path into the polygon covering the European side,
    /// by running west from its endpoints to an edge just past the clipped
    /// geometry's extent.
    fn europe_polygon(&self, country: &ArealGeometry) -> Option<Polygon> {

        if self.path.len() < 2 {
            return None;
        }

        let west = country.extent().map_or(WEST_EDGE_LIMIT, |extent| extent.west - 10.0);
        let west_edge = west.max(WEST_EDGE_LIMIT);

        let first = self.path[0];
        let last = self.path[self.path.len() - 1];

        let mut coords = self.path.clone();
        coords.push(Coord { x: west_edge, y: last.y });
        coords.push(Coord { x: west_edge, y: first.y });
        coords.push(first);

        Some(Polygon::new(LineString(coords), Vec::new()))
    }

    /// Splits a country along the boundary and keeps the requested side.
    /// The European part is the intersection with the closed boundary
    /// polygon; the Asian part is the country minus the European part, which
    /// keeps the two sides exactly complementary. Returns None when the
    /// requested side is empty.
    pub(crate) fn clip(&self, country: &ArealGeometry, side: ContinentSide) -> Option<ArealGeometry> {

        let europe_polygon = ArealGeometry::Polygon(self.europe_polygon(country)?);
        let europe_part = country.intersection_with(&europe_polygon);

        match side {
            ContinentSide::Europe => europe_part,
            ContinentSide::Asia => match europe_part {
                Some(europe_part) => country.difference_with(&europe_part),
                // boundary missed the country entirely; it is all Asia
                None => Some(country.clone()),
            },
        }
    }

}

fn distance(a: &Coord, b: &Coord) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

#[cfg(test)]
mod test {

    use geo_types::polygon;
    use geo_types::LineString;

    use super::ContinentalBoundary;
    use crate::geometry::ArealGeometry;
    use crate::registry::ContinentSide;

    fn vertical_boundary() -> ContinentalBoundary {
        // three out-of-order segments along lon 5 with small gaps, the
        // middle one reversed
        ContinentalBoundary::from_lines(&[
            LineString::from(vec![(5.0, 20.0), (5.0, 60.0)]),
            LineString::from(vec![(5.0, -60.0), (5.0, -20.0)]),
            LineString::from(vec![(5.0, 19.0), (5.0, -19.0)]),
        ])
    }

    fn wide_country() -> ArealGeometry {
        ArealGeometry::Polygon(polygon![
            (x: 0.0, y: 0.0),
            (x: 10.0, y: 0.0),
            (x: 10.0, y: 10.0),
            (x: 0.0, y: 10.0),
            (x: 0.0, y: 0.0),
        ])
    }

    #[test]
    fn test_segments_chain_south_to_north() {

        let boundary = vertical_boundary();

        assert!(!boundary.is_empty());
        assert_eq!(boundary.path.len(), 6);
        assert!(boundary.path[0].y < boundary.path[5].y);

    }

    #[test]
    fn test_clip_keeps_the_requested_side() {

        let boundary = vertical_boundary();
        let country = wide_country();

        let europe = boundary.clip(&country, ContinentSide::Europe).expect("western side should not have been empty");
        let extent = europe.extent().expect("extent");
        assert!(extent.east() <= 5.001, "east was {}", extent.east());

        let asia = boundary.clip(&country, ContinentSide::Asia).expect("eastern side should not have been empty");
        let extent = asia.extent().expect("extent");
        assert!(extent.west >= 4.999, "west was {}", extent.west);

    }

    #[test]
    fn test_distant_boundary_leaves_everything_asian() {

        let boundary = vertical_boundary();
        // entirely east of the boundary line
        let country = ArealGeometry::Polygon(polygon![
            (x: 100.0, y: 0.0),
            (x: 110.0, y: 0.0),
            (x: 110.0, y: 10.0),
            (x: 100.0, y: 10.0),
            (x: 100.0, y: 0.0),
        ]);

        assert!(boundary.clip(&country, ContinentSide::Europe).is_none());

        let asia = boundary.clip(&country, ContinentSide::Asia).expect("everything should have been on the eastern side");
        assert_eq!(asia.extent(), country.extent());

    }

}
