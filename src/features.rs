use std::path::Path;

use geo_types::Geometry;
use geo_types::Point;
use geojson::GeoJson;
use geojson::JsonObject;
use serde_json::Value;

use crate::errors::CommandError;
use crate::geometry::ArealGeometry;
use crate::registry::DestinationSpec;
use crate::registry::FeatureKind;
use crate::registry::Region;

/// An output geometry: polygonal from assembly, or a point from the
/// placeholder strategy or marker demotion.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum FeatureGeometry {
    Areal(ArealGeometry),
    Point(Point),
}

/// Which property keys a written file carries. The merged file holds only
/// the shared schema; the markers file adds `marker` and `area_km2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PropertySchema {
    Merged,
    Markers,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct AssembledFeature {
    pub(crate) index: u16,
    pub(crate) name: String,
    pub(crate) region: Region,
    pub(crate) iso_a2: Option<String>,
    pub(crate) iso_a3: Option<String>,
    pub(crate) iso_n3: Option<u16>,
    pub(crate) sovereign: String,
    pub(crate) kind: FeatureKind,
    pub(crate) marker: bool,
    pub(crate) area_km2: Option<f64>,
    pub(crate) geometry: FeatureGeometry,
}

impl AssembledFeature {

    /// Stamps the standard property schema from a registry row onto a
    /// freshly assembled geometry. Point placeholders are markers from the
    /// start; everything else awaits classification.
    pub(crate) fn from_spec(spec: &DestinationSpec, geometry: FeatureGeometry) -> Self {
        let marker = matches!(geometry, FeatureGeometry::Point(_));
        Self {
            index: spec.index,
            name: spec.name.to_owned(),
            region: spec.region,
            iso_a2: spec.iso_a2.map(str::to_owned),
            iso_a3: spec.iso_a3.map(str::to_owned),
            iso_n3: spec.iso_n3,
            sovereign: spec.sovereign.to_owned(),
            kind: spec.kind,
            marker,
            area_km2: None,
            geometry,
        }
    }

    fn properties(&self, schema: PropertySchema) -> JsonObject {
        let mut properties = JsonObject::new();
        _ = properties.insert("tcc_index".to_owned(), self.index.into());
        _ = properties.insert("name".to_owned(), self.name.clone().into());
        _ = properties.insert("region".to_owned(), self.region.as_str().into());
        _ = properties.insert("iso_a2".to_owned(), self.iso_a2.clone().map_or(Value::Null, Value::from));
        _ = properties.insert("iso_a3".to_owned(), self.iso_a3.clone().map_or(Value::Null, Value::from));
        _ = properties.insert("iso_n3".to_owned(), self.iso_n3.map_or(Value::Null, Value::from));
        _ = properties.insert("sovereign".to_owned(), self.sovereign.clone().into());
        _ = properties.insert("type".to_owned(), self.kind.as_str().into());
        if matches!(schema, PropertySchema::Markers) {
            _ = properties.insert("marker".to_owned(), self.marker.into());
            _ = properties.insert("area_km2".to_owned(), self.area_km2.map_or(Value::Null, Value::from));
        }
        properties
    }

    fn to_geojson(&self, schema: PropertySchema) -> geojson::Feature {
        let value = match &self.geometry {
            FeatureGeometry::Areal(ArealGeometry::Polygon(polygon)) => geojson::Value::from(polygon),
            FeatureGeometry::Areal(ArealGeometry::MultiPolygon(multi)) => geojson::Value::from(multi),
            FeatureGeometry::Point(point) => geojson::Value::from(point),
        };
        geojson::Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::new(value)),
            id: None,
            properties: Some(self.properties(schema)),
            foreign_members: None,
        }
    }

    fn from_geojson(feature: geojson::Feature) -> Result<Self, CommandError> {
        let properties = feature.properties.ok_or_else(|| CommandError::MalformedCollection("feature without properties".to_owned()))?;

        let index = require_integer(&properties, "tcc_index")?;
        let name = require_string(&properties, "name")?;
        let region = require_string(&properties, "region")?;
        let region = Region::from_name(&region).ok_or_else(|| CommandError::MalformedCollection(format!("'{}' has unknown region '{}'",name,region)))?;
        let kind = require_string(&properties, "type")?;
        let kind = FeatureKind::from_name(&kind).ok_or_else(|| CommandError::MalformedCollection(format!("'{}' has unknown type '{}'",name,kind)))?;

        let geometry = feature.geometry.ok_or_else(|| CommandError::MalformedCollection(format!("'{}' has no geometry",name)))?;
        let geometry: Geometry = geometry.try_into().map_err(|e: geojson::Error| CommandError::MalformedCollection(format!("'{}': {}",name,e)))?;
        let geometry = match geometry {
            Geometry::Polygon(polygon) => FeatureGeometry::Areal(ArealGeometry::Polygon(polygon)),
            Geometry::MultiPolygon(multi) => FeatureGeometry::Areal(ArealGeometry::MultiPolygon(multi)),
            Geometry::Point(point) => FeatureGeometry::Point(point),
            _ => return Err(CommandError::MalformedCollection(format!("'{}' has a non-areal, non-point geometry",name))),
        };

        Ok(Self {
            index,
            iso_a2: optional_string(&properties, "iso_a2"),
            iso_a3: optional_string(&properties, "iso_a3"),
            iso_n3: optional_integer(&properties, "iso_n3"),
            sovereign: require_string(&properties, "sovereign")?,
            marker: properties.get("marker").and_then(Value::as_bool).unwrap_or(false),
            area_km2: properties.get("area_km2").and_then(Value::as_f64),
            name,
            region,
            kind,
            geometry,
        })
    }

}

fn require_string(properties: &JsonObject, key: &'static str) -> Result<String, CommandError> {
    optional_string(properties, key).ok_or_else(|| {
        let name = optional_string(properties, "name").unwrap_or_else(|| "?".to_owned());
        CommandError::MissingProperty(name, key)
    })
}

fn optional_string(properties: &JsonObject, key: &str) -> Option<String> {
    properties.get(key).and_then(Value::as_str).map(str::to_owned)
}

fn require_integer(properties: &JsonObject, key: &'static str) -> Result<u16, CommandError> {
    optional_integer(properties, key).ok_or_else(|| {
        let name = optional_string(properties, "name").unwrap_or_else(|| "?".to_owned());
        CommandError::MissingProperty(name, key)
    })
}

fn optional_integer(properties: &JsonObject, key: &str) -> Option<u16> {
    properties.get(key).and_then(Value::as_u64).and_then(|n| n.try_into().ok())
}

/// The assembled output, ordered by ascending destination index.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct FeatureCollection {
    features: Vec<AssembledFeature>,
}

impl FeatureCollection {

    pub(crate) fn from_features(mut features: Vec<AssembledFeature>) -> Self {
        features.sort_by_key(|feature| feature.index);
        Self { features }
    }

    pub(crate) fn features(&self) -> &[AssembledFeature] {
        &self.features
    }

    pub(crate) fn len(&self) -> usize {
        self.features.len()
    }

    pub(crate) fn into_features(self) -> Vec<AssembledFeature> {
        self.features
    }

    pub(crate) fn write(&self, path: &Path, schema: PropertySchema) -> Result<(), CommandError> {
        let collection = geojson::FeatureCollection {
            bbox: None,
            features: self.features.iter().map(|feature| feature.to_geojson(schema)).collect(),
            foreign_members: None,
        };
        let text = GeoJson::from(collection).to_string();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| CommandError::LayerFileWrite(path.to_path_buf(), e.to_string()))?;
        }
        std::fs::write(path, text).map_err(|e| CommandError::LayerFileWrite(path.to_path_buf(), e.to_string()))
    }

    pub(crate) fn read(path: &Path) -> Result<Self, CommandError> {
        let text = std::fs::read_to_string(path).map_err(|e| CommandError::LayerFileRead(path.to_path_buf(), e.to_string()))?;
        let geojson: GeoJson = text.parse().map_err(|e: geojson::Error| CommandError::LayerFileRead(path.to_path_buf(), e.to_string()))?;
        let collection = match geojson {
            GeoJson::FeatureCollection(collection) => collection,
            _ => return Err(CommandError::MalformedCollection(format!("'{}' is not a FeatureCollection",path.display()))),
        };
        let features = collection.features.into_iter().map(AssembledFeature::from_geojson).collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_features(features))
    }

}

#[cfg(test)]
mod test {

    use geo_types::polygon;
    use geo_types::Point;

    use super::AssembledFeature;
    use super::FeatureCollection;
    use super::FeatureGeometry;
    use super::PropertySchema;
    use crate::geometry::ArealGeometry;
    use crate::registry::FeatureKind;
    use crate::registry::Region;

    fn sample() -> FeatureCollection {
        FeatureCollection::from_features(vec![
            AssembledFeature {
                index: 19,
                name: "Nauru".to_owned(),
                region: Region::PacificOcean,
                iso_a2: Some("NR".to_owned()),
                iso_a3: Some("NRU".to_owned()),
                iso_n3: Some(520),
                sovereign: "Nauru".to_owned(),
                kind: FeatureKind::Country,
                marker: true,
                area_km2: Some(21.3),
                geometry: FeatureGeometry::Point(Point::new(166.92, -0.53)),
            },
            AssembledFeature {
                index: 2,
                name: "Australia".to_owned(),
                region: Region::PacificOcean,
                iso_a2: Some("AU".to_owned()),
                iso_a3: Some("AUS".to_owned()),
                iso_n3: Some(36),
                sovereign: "Australia".to_owned(),
                kind: FeatureKind::Country,
                marker: false,
                area_km2: None,
                geometry: FeatureGeometry::Areal(ArealGeometry::Polygon(polygon![
                    (x: 113.0, y: -39.0),
                    (x: 154.0, y: -39.0),
                    (x: 154.0, y: -11.0),
                    (x: 113.0, y: -11.0),
                    (x: 113.0, y: -39.0),
                ])),
            },
        ])
    }

    #[test]
    fn test_features_sort_by_index() {

        let collection = sample();

        assert_eq!(collection.features()[0].index, 2);
        assert_eq!(collection.features()[1].index, 19);

    }

    #[test]
    fn test_schema_controls_marker_keys() {

        let collection = sample();

        let merged = collection.features()[1].properties(PropertySchema::Merged);
        assert_eq!(merged.len(), 8);
        assert!(!merged.contains_key("marker"));

        let markers = collection.features()[1].properties(PropertySchema::Markers);
        assert_eq!(markers.len(), 10);
        assert_eq!(markers.get("marker").and_then(|v| v.as_bool()), Some(true));
        assert_eq!(markers.get("area_km2").and_then(|v| v.as_f64()), Some(21.3));
        assert_eq!(markers.get("tcc_index").and_then(|v| v.as_u64()), Some(19));

    }

    #[test]
    fn test_round_trip_through_file() {

        let collection = sample();
        let path = std::env::temp_dir().join("tccmap-features-round-trip.geojson");

        collection.write(&path, PropertySchema::Markers).expect("write should have succeeded");
        let read_back = FeatureCollection::read(&path).expect("read should have succeeded");
        _ = std::fs::remove_file(&path);

        assert_eq!(collection, read_back);
        for feature in read_back.features() {
            if feature.marker {
                assert!(matches!(feature.geometry, FeatureGeometry::Point(_)))
            } else {
                assert!(matches!(feature.geometry, FeatureGeometry::Areal(_)))
            }
        }

    }

}
