use std::path::Path;
use std::path::PathBuf;

use geo_types::Geometry;
use geo_types::LineString;
use geojson::GeoJson;
use geojson::JsonObject;
use indexmap::IndexMap;

use crate::errors::CommandError;
use crate::geometry::ArealGeometry;
use crate::progress::ProgressObserver;

pub(crate) const SUBUNITS_FILE: &str = "ne_10m_admin_0_map_subunits.geojson";
pub(crate) const UNITS_FILE: &str = "ne_10m_admin_0_map_units.geojson";
pub(crate) const PROVINCES_FILE: &str = "ne_10m_admin_1_states_provinces.geojson";
pub(crate) const DISPUTED_FILE: &str = "ne_10m_admin_0_disputed_areas.geojson";
pub(crate) const BOUNDARY_FILE: &str = "europe_asia_boundary.geojson";

/// The identity-code fields carried by the admin-0 layers. Lookups try
/// several of these in a defined order because the source schemas disagree
/// about which field holds the "real" code for subunits and dependencies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CodeField {
    SuA3,
    Adm0A3,
    IsoA3,
    GuA3,
}

// Direct selection prefers the subunit code so that, for example, China
// resolves to the mainland subunit rather than everything tagged CHN.
const SELECT_ORDER: [CodeField; 4] = [CodeField::SuA3, CodeField::Adm0A3, CodeField::IsoA3, CodeField::GuA3];

// Whole-country lookups prefer ADM0_A3, which covers every row belonging to
// the country regardless of how its subunits are coded.
const COUNTRY_ORDER: [CodeField; 4] = [CodeField::Adm0A3, CodeField::SuA3, CodeField::GuA3, CodeField::IsoA3];

/// One polygonal record from a source layer, reduced to the fields the
/// assembly strategies match on.
#[derive(Clone, Debug)]
pub(crate) struct SourceFeature {
    pub(crate) name: Option<String>,
    pub(crate) name_en: Option<String>,
    pub(crate) brk_name: Option<String>,
    pub(crate) name_long: Option<String>,
    pub(crate) admin: Option<String>,
    pub(crate) su_a3: Option<String>,
    pub(crate) adm0_a3: Option<String>,
    pub(crate) iso_a3: Option<String>,
    pub(crate) gu_a3: Option<String>,
    pub(crate) geometry: ArealGeometry,
}

impl SourceFeature {

    pub(crate) fn code(&self, field: CodeField) -> Option<&str> {
        match field {
            CodeField::SuA3 => self.su_a3.as_deref(),
            CodeField::Adm0A3 => self.adm0_a3.as_deref(),
            CodeField::IsoA3 => self.iso_a3.as_deref(),
            CodeField::GuA3 => self.gu_a3.as_deref(),
        }
    }

    fn name_matches(&self, lowercase: &str) -> bool {
        [&self.name, &self.name_en].into_iter().any(|field| {
            field.as_deref().is_some_and(|n| n.to_lowercase() == lowercase)
        })
    }

}

// The layer schemas disagree on key case (admin-0 layers carve codes in
// uppercase, admin-1 uses lowercase), so properties are fetched under both.
fn string_property(properties: &JsonObject, key: &str) -> Option<String> {
    for candidate in [key.to_uppercase(), key.to_lowercase()] {
        if let Some(text) = properties.get(&candidate).and_then(|v| v.as_str()) {
            // "-99" is the source's null sentinel
            if !text.is_empty() && text != "-99" {
                return Some(text.to_owned());
            }
        }
    }
    None
}

fn areal_from_feature(feature: geojson::Feature, layer: &str, index: usize) -> Result<(ArealGeometry, JsonObject), CommandError> {
    let properties = feature.properties.unwrap_or_default();
    let geometry = feature.geometry.ok_or_else(|| CommandError::MalformedSourceFeature(layer.to_owned(), index, "no geometry".to_owned()))?;
    let geometry: Geometry = geometry.try_into().map_err(|e: geojson::Error| CommandError::MalformedSourceFeature(layer.to_owned(), index, e.to_string()))?;
    let geometry = match geometry {
        Geometry::Polygon(polygon) => ArealGeometry::Polygon(polygon),
        Geometry::MultiPolygon(multi) => ArealGeometry::MultiPolygon(multi),
        other => return Err(CommandError::MalformedSourceFeature(layer.to_owned(), index, format!("unexpected geometry type {:?}", geo_type_name(&other)))),
    };
    Ok((geometry, properties))
}

fn geo_type_name(geometry: &Geometry) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}

fn read_collection(path: &Path) -> Result<Vec<geojson::Feature>, CommandError> {
    let text = std::fs::read_to_string(path).map_err(|e| CommandError::LayerFileRead(path.to_path_buf(), e.to_string()))?;
    let geojson: GeoJson = text.parse().map_err(|e: geojson::Error| CommandError::LayerFileRead(path.to_path_buf(), e.to_string()))?;
    match geojson {
        GeoJson::FeatureCollection(collection) => Ok(collection.features),
        _ => Err(CommandError::LayerFileRead(path.to_path_buf(), "not a FeatureCollection".to_owned())),
    }
}

/// An admin-0 style layer: polygonal features addressed by A3 identity codes.
pub(crate) struct SourceLayer {
    features: Vec<SourceFeature>,
}

impl SourceLayer {

    pub(crate) fn from_features(features: Vec<SourceFeature>) -> Self {
        Self { features }
    }

    fn load(path: PathBuf, layer: &str) -> Result<Self, CommandError> {
        let mut features = Vec::new();
        for (index, feature) in read_collection(&path)?.into_iter().enumerate() {
            let (geometry, properties) = areal_from_feature(feature, layer, index)?;
            features.push(SourceFeature {
                name: string_property(&properties, "name"),
                name_en: string_property(&properties, "name_en"),
                brk_name: string_property(&properties, "brk_name"),
                name_long: string_property(&properties, "name_long"),
                admin: string_property(&properties, "admin"),
                su_a3: string_property(&properties, "su_a3"),
                adm0_a3: string_property(&properties, "adm0_a3"),
                iso_a3: string_property(&properties, "iso_a3"),
                gu_a3: string_property(&properties, "gu_a3"),
                geometry,
            });
        }
        Ok(Self { features })
    }

    pub(crate) fn len(&self) -> usize {
        self.features.len()
    }

    fn dissolve_matching(&self, field: CodeField, code: &str) -> Option<ArealGeometry> {
        let matches = self.features.iter().filter(|feature| feature.code(field) == Some(code)).map(|feature| feature.geometry.clone());
        ArealGeometry::dissolve(matches)
    }

    fn dissolve_by_name(&self, name: &str) -> Option<ArealGeometry> {
        let lowercase = name.to_lowercase();
        let matches = self.features.iter().filter(|feature| feature.name_matches(&lowercase)).map(|feature| feature.geometry.clone());
        ArealGeometry::dissolve(matches)
    }

    /// Substring match across the disputed layer's four name fields, one
    /// field at a time so an exact-field hit isn't diluted by looser fields.
    fn dissolve_by_name_fragment(&self, fragment: &str) -> Option<ArealGeometry> {
        let fragment = fragment.to_lowercase();
        for accessor in [
            |f: &SourceFeature| f.name.clone(),
            |f: &SourceFeature| f.brk_name.clone(),
            |f: &SourceFeature| f.name_long.clone(),
            |f: &SourceFeature| f.admin.clone(),
        ] {
            let matches: Vec<ArealGeometry> = self.features.iter().filter(|feature| {
                accessor(feature).is_some_and(|n| n.to_lowercase().contains(&fragment))
            }).map(|feature| feature.geometry.clone()).collect();
            if !matches.is_empty() {
                return ArealGeometry::dissolve(matches);
            }
        }
        None
    }

}

/// The admin-1 layer, indexed by parent country code for province matching.
pub(crate) struct ProvinceLayer {
    features: Vec<SourceFeature>,
    by_country: IndexMap<String, Vec<usize>>,
}

impl ProvinceLayer {

    pub(crate) fn from_features(features: Vec<SourceFeature>) -> Self {
        let mut by_country: IndexMap<String, Vec<usize>> = IndexMap::new();
        for (index, feature) in features.iter().enumerate() {
            if let Some(adm0_a3) = &feature.adm0_a3 {
                by_country.entry(adm0_a3.clone()).or_default().push(index);
            }
        }
        Self { features, by_country }
    }

    fn load(path: PathBuf, layer: &str) -> Result<Self, CommandError> {
        let loaded = SourceLayer::load(path, layer)?;
        Ok(Self::from_features(loaded.features))
    }

    pub(crate) fn len(&self) -> usize {
        self.features.len()
    }

    fn in_country(&self, adm0_a3: &str) -> Vec<&SourceFeature> {
        self.by_country.get(adm0_a3).map(|indexes| {
            indexes.iter().map(|&i| &self.features[i]).collect()
        }).unwrap_or_default()
    }

    /// Matches provinces by name, case-insensitively: exact matches first,
    /// then a substring pass. Matches accumulate across the name and
    /// english-name fields so diacritic variants are found via whichever
    /// field stores the plain spelling.
    fn match_provinces(&self, adm0_a3: &str, names: &[&str]) -> Vec<&SourceFeature> {
        let candidates = self.in_country(adm0_a3);
        let lowercase: Vec<String> = names.iter().map(|n| n.to_lowercase()).collect();

        let exact: Vec<&SourceFeature> = candidates.iter().filter(|feature| {
            [&feature.name, &feature.name_en].into_iter().any(|field| {
                field.as_deref().is_some_and(|n| lowercase.contains(&n.to_lowercase()))
            })
        }).copied().collect();

        if !exact.is_empty() {
            return exact;
        }

        candidates.iter().filter(|feature| {
            [&feature.name, &feature.name_en].into_iter().any(|field| {
                field.as_deref().is_some_and(|n| {
                    let n = n.to_lowercase();
                    lowercase.iter().any(|want| n.contains(want.as_str()))
                })
            })
        }).copied().collect()
    }

    fn region_geometry(&self, adm0_a3: &str, name: &str) -> Option<ArealGeometry> {
        let lowercase = name.to_lowercase();
        let matches = self.in_country(adm0_a3).into_iter().filter(|feature| {
            feature.name_matches(&lowercase)
        }).map(|feature| feature.geometry.clone());
        ArealGeometry::dissolve(matches)
    }

}

/// Everything the assembler reads: the four converted source layers plus the
/// continental boundary line. Immutable once loaded.
pub(crate) struct SourceCatalog {
    subunits: SourceLayer,
    units: SourceLayer,
    provinces: ProvinceLayer,
    disputed: SourceLayer,
    boundary: Vec<LineString>,
}

impl SourceCatalog {

    pub(crate) fn load<Progress: ProgressObserver>(data_dir: &Path, progress: &mut Progress) -> Result<Self, CommandError> {

        progress.start_unknown_endpoint(|| "Loading source layers.");
        let subunits = SourceLayer::load(data_dir.join(SUBUNITS_FILE), "subunits")?;
        let units = SourceLayer::load(data_dir.join(UNITS_FILE), "units")?;
        let provinces = ProvinceLayer::load(data_dir.join(PROVINCES_FILE), "admin1")?;
        let disputed = SourceLayer::load(data_dir.join(DISPUTED_FILE), "disputed")?;
        let boundary = Self::load_boundary(data_dir.join(BOUNDARY_FILE))?;
        progress.finish(|| "Source layers loaded.");

        progress.message(|| format!("{} subunits, {} units, {} provinces, {} disputed areas", subunits.len(), units.len(), provinces.len(), disputed.len()));

        Ok(Self {
            subunits,
            units,
            provinces,
            disputed,
            boundary,
        })
    }

    fn load_boundary(path: PathBuf) -> Result<Vec<LineString>, CommandError> {
        let mut lines = Vec::new();
        for (index, feature) in read_collection(&path)?.into_iter().enumerate() {
            let Some(geometry) = feature.geometry else {
                continue;
            };
            let geometry: Geometry = geometry.try_into().map_err(|e: geojson::Error| CommandError::MalformedSourceFeature("boundary".to_owned(), index, e.to_string()))?;
            match geometry {
                Geometry::LineString(line) => lines.push(line),
                Geometry::MultiLineString(multi) => lines.extend(multi.0),
                _ => (), // the boundary file carries no other geometry worth keeping
            }
        }
        if lines.is_empty() {
            Err(CommandError::BoundaryLineEmpty(path))
        } else {
            Ok(lines)
        }
    }

    #[cfg(test)]
    pub(crate) fn from_layers(subunits: SourceLayer, units: SourceLayer, provinces: ProvinceLayer, disputed: SourceLayer, boundary: Vec<LineString>) -> Self {
        Self { subunits, units, provinces, disputed, boundary }
    }

    /// Direct selection by A3 code: subunits before units, subunit code
    /// before the broader codes, multi-row matches dissolved into one.
    pub(crate) fn select(&self, code: &str) -> Option<ArealGeometry> {
        for layer in [&self.subunits, &self.units] {
            for field in SELECT_ORDER {
                if let Some(geometry) = layer.dissolve_matching(field, code) {
                    return Some(geometry);
                }
            }
        }
        None
    }

    /// Whole-country lookup: like select, but the country-level code is
    /// preferred so dependent subunits dissolve in rather than shadowing.
    pub(crate) fn country(&self, adm0_a3: &str) -> Option<ArealGeometry> {
        for layer in [&self.subunits, &self.units] {
            for field in COUNTRY_ORDER {
                if let Some(geometry) = layer.dissolve_matching(field, adm0_a3) {
                    return Some(geometry);
                }
            }
        }
        None
    }

    /// Last-resort selection by exact name across both admin-0 layers.
    pub(crate) fn select_by_name(&self, name: &str) -> Option<ArealGeometry> {
        for layer in [&self.subunits, &self.units] {
            if let Some(geometry) = layer.dissolve_by_name(name) {
                return Some(geometry);
            }
        }
        None
    }

    pub(crate) fn subunit_code(&self, su_a3: &str) -> Option<ArealGeometry> {
        self.subunits.dissolve_matching(CodeField::SuA3, su_a3)
    }

    /// A subunit-layer-only lookup, with a name fallback for rows whose
    /// subunit code is missing from the layer.
    pub(crate) fn subunit(&self, su_a3: &str, name: &str) -> Option<ArealGeometry> {
        if let Some(geometry) = self.subunit_code(su_a3) {
            return Some(geometry);
        }
        self.subunits.dissolve_by_name(name)
    }

    pub(crate) fn provinces_dissolved(&self, adm0_a3: &str, names: &[&str]) -> Option<ArealGeometry> {
        let matched = self.provinces.match_provinces(adm0_a3, names);
        ArealGeometry::dissolve(matched.into_iter().map(|feature| feature.geometry.clone()))
    }

    pub(crate) fn admin1_region(&self, adm0_a3: &str, name: &str) -> Option<ArealGeometry> {
        self.provinces.region_geometry(adm0_a3, name)
    }

    pub(crate) fn disputed_area(&self, name: &str) -> Option<ArealGeometry> {
        self.disputed.dissolve_by_name_fragment(name)
    }

    pub(crate) fn boundary_lines(&self) -> &[LineString] {
        &self.boundary
    }

}

#[cfg(test)]
pub(crate) mod test_support {

    use geo_types::polygon;

    use super::SourceFeature;
    use crate::geometry::ArealGeometry;

    pub(crate) fn square_feature(name: &str, west: f64, south: f64, size: f64) -> SourceFeature {
        SourceFeature {
            name: Some(name.to_owned()),
            name_en: None,
            brk_name: None,
            name_long: None,
            admin: None,
            su_a3: None,
            adm0_a3: None,
            iso_a3: None,
            gu_a3: None,
            geometry: ArealGeometry::Polygon(polygon![
                (x: west, y: south),
                (x: west + size, y: south),
                (x: west + size, y: south + size),
                (x: west, y: south + size),
                (x: west, y: south),
            ]),
        }
    }

}

#[cfg(test)]
mod test {

    use super::test_support::square_feature;
    use super::ProvinceLayer;
    use super::SourceCatalog;
    use super::SourceLayer;

    fn catalog() -> SourceCatalog {

        let mut mainland = square_feature("Testland", 0.0, 0.0, 10.0);
        mainland.su_a3 = Some("TSM".to_owned());
        mainland.adm0_a3 = Some("TST".to_owned());
        mainland.iso_a3 = Some("TST".to_owned());

        let mut dependency = square_feature("Outer Isle", 20.0, 0.0, 2.0);
        dependency.su_a3 = Some("TSI".to_owned());
        dependency.adm0_a3 = Some("TST".to_owned());

        let mut north = square_feature("North Province", 0.0, 5.0, 5.0);
        north.adm0_a3 = Some("TST".to_owned());
        let mut saint = square_feature("Provincia de São Sul", 0.0, 0.0, 5.0);
        saint.name_en = Some("Sao Sul".to_owned());
        saint.adm0_a3 = Some("TST".to_owned());

        let mut breakaway = square_feature("Stray Republic", 5.0, 0.0, 5.0);
        breakaway.brk_name = Some("Republic of Stray".to_owned());

        SourceCatalog::from_layers(
            SourceLayer::from_features(vec![mainland, dependency]),
            SourceLayer::from_features(Vec::new()),
            ProvinceLayer::from_features(vec![north, saint]),
            SourceLayer::from_features(vec![breakaway]),
            vec![geo_types::LineString::from(vec![(5.0, -90.0), (5.0, 90.0)])],
        )
    }

    #[test]
    fn test_select_prefers_subunit_code() {

        let catalog = catalog();

        // TSM is only a subunit code; TST as a country covers both rows
        let mainland = catalog.select("TSM").expect("subunit code should have matched");
        assert_eq!(mainland.parts().len(), 1);

        let country = catalog.country("TST").expect("country code should have matched");
        assert_eq!(country.parts().len(), 2);

    }

    #[test]
    fn test_select_falls_back_to_name() {

        let catalog = catalog();

        assert!(catalog.select("XXX").is_none());
        assert!(catalog.select_by_name("outer isle").is_some());

    }

    #[test]
    fn test_province_match_exact_then_substring() {

        let catalog = catalog();

        // exact english-name match
        let exact = catalog.provinces_dissolved("TST", &["Sao Sul"]).expect("province should have matched");
        assert_eq!(exact.parts().len(), 1);

        // substring match
        let fragment = catalog.provinces_dissolved("TST", &["north"]).expect("province should have matched");
        assert_eq!(fragment.parts().len(), 1);

        assert!(catalog.provinces_dissolved("TST", &["nowhere"]).is_none());

    }

    #[test]
    fn test_disputed_fragment_match() {

        let catalog = catalog();

        assert!(catalog.disputed_area("stray").is_some());
        assert!(catalog.disputed_area("Republic of Stray").is_some());
        assert!(catalog.disputed_area("peaceful").is_none());

    }

}
