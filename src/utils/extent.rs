use geo_types::Point;
use geo_types::Polygon;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Extent {
    pub(crate) height: f64,
    pub(crate) width: f64,
    pub(crate) south: f64,
    pub(crate) west: f64,
}

impl Extent {

    pub(crate) fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        let width = east - west;
        let height = north - south;
        Self {
            height,
            width,
            south,
            west
        }
    }

    pub(crate) fn contains(&self,point: &Point) -> bool {
        let x = point.x();
        let y = point.y();
        (x >= self.west) &&
           (x <= (self.west + self.width)) &&
           (y >= self.south) &&
           (y <= (self.south + self.height))

    }

    pub(crate) fn create_polygon(&self) -> Polygon {
        let vertices = vec![
            (self.west,self.south),
            (self.west,self.south+self.height),
            (self.west+self.width,self.south+self.height),
            (self.west+self.width,self.south),
            (self.west,self.south),
        ];
        Polygon::new(vertices.into(), Vec::new())
    }

    pub(crate) fn overlaps(&self, other: &Self) -> bool {
        (self.west <= other.east()) &&
           (other.west <= self.east()) &&
           (self.south <= other.north()) &&
           (other.south <= self.north())
    }

    pub(crate) fn east(&self) -> f64 {
        self.west + self.width
    }

    pub(crate) fn north(&self) -> f64 {
        self.south + self.height
    }

}

#[cfg(test)]
mod test {

    use geo_types::Point;

    use super::Extent;

    #[test]
    fn test_contains_is_inclusive_of_edges() {

        let extent = Extent::new(-10.0,-5.0,10.0,5.0);

        assert!(extent.contains(&Point::new(0.0,0.0)));
        assert!(extent.contains(&Point::new(-10.0,5.0)));
        assert!(!extent.contains(&Point::new(10.1,0.0)));

    }

    #[test]
    fn test_overlaps_requires_shared_area_or_edge() {

        let extent = Extent::new(0.0,0.0,10.0,10.0);

        assert!(extent.overlaps(&Extent::new(5.0,5.0,15.0,15.0)));
        assert!(extent.overlaps(&Extent::new(10.0,0.0,20.0,10.0)));
        assert!(!extent.overlaps(&Extent::new(10.1,0.0,20.0,10.0)));

    }

}
