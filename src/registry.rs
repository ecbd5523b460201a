use std::fmt::Display;

use crate::errors::CommandError;

/// The twelve published region groupings. Every destination index falls in
/// exactly one region's contiguous band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Region {
    PacificOcean,
    NorthAmerica,
    CentralAmerica,
    SouthAmerica,
    Caribbean,
    AtlanticOcean,
    EuropeMediterranean,
    Antarctica,
    Africa,
    MiddleEast,
    IndianOcean,
    Asia,
}

impl Region {

    pub(crate) const ALL: [Self; 12] = [
        Self::PacificOcean,
        Self::NorthAmerica,
        Self::CentralAmerica,
        Self::SouthAmerica,
        Self::Caribbean,
        Self::AtlanticOcean,
        Self::EuropeMediterranean,
        Self::Antarctica,
        Self::Africa,
        Self::MiddleEast,
        Self::IndianOcean,
        Self::Asia,
    ];

    pub(crate) const fn as_str(&self) -> &'static str {
        match self {
            Self::PacificOcean => "Pacific Ocean",
            Self::NorthAmerica => "North America",
            Self::CentralAmerica => "Central America",
            Self::SouthAmerica => "South America",
            Self::Caribbean => "Caribbean",
            Self::AtlanticOcean => "Atlantic Ocean",
            Self::EuropeMediterranean => "Europe & Mediterranean",
            Self::Antarctica => "Antarctica",
            Self::Africa => "Africa",
            Self::MiddleEast => "Middle East",
            Self::IndianOcean => "Indian Ocean",
            Self::Asia => "Asia",
        }
    }

    pub(crate) fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|region| region.as_str() == name)
    }

    /// The region band a destination index belongs to.
    pub(crate) const fn for_index(index: u16) -> Option<Self> {
        match index {
            1..=40 => Some(Self::PacificOcean),
            41..=46 => Some(Self::NorthAmerica),
            47..=53 => Some(Self::CentralAmerica),
            54..=67 => Some(Self::SouthAmerica),
            68..=98 => Some(Self::Caribbean),
            99..=112 => Some(Self::AtlanticOcean),
            113..=180 => Some(Self::EuropeMediterranean),
            181..=187 => Some(Self::Antarctica),
            188..=242 => Some(Self::Africa),
            243..=263 => Some(Self::MiddleEast),
            264..=278 => Some(Self::IndianOcean),
            279..=330 => Some(Self::Asia),
            _ => None,
        }
    }

    /// The published destination count per region. These total 330.
    pub(crate) const fn published_count(&self) -> usize {
        match self {
            Self::PacificOcean => 40,
            Self::NorthAmerica => 6,
            Self::CentralAmerica => 7,
            Self::SouthAmerica => 14,
            Self::Caribbean => 31,
            Self::AtlanticOcean => 14,
            Self::EuropeMediterranean => 68,
            Self::Antarctica => 7,
            Self::Africa => 55,
            Self::MiddleEast => 21,
            Self::IndianOcean => 15,
            Self::Asia => 52,
        }
    }

}

impl Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,"{}",self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FeatureKind {
    Country,
    Territory,
    Disputed,
    Subnational,
    Antarctic,
}

impl FeatureKind {

    pub(crate) const fn as_str(&self) -> &'static str {
        match self {
            Self::Country => "country",
            Self::Territory => "territory",
            Self::Disputed => "disputed",
            Self::Subnational => "subnational",
            Self::Antarctic => "antarctic",
        }
    }

    pub(crate) fn from_name(name: &str) -> Option<Self> {
        [Self::Country, Self::Territory, Self::Disputed, Self::Subnational, Self::Antarctic].into_iter().find(|kind| kind.as_str() == name)
    }

}

impl Display for FeatureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,"{}",self.as_str())
    }
}

/// Which side of the continental boundary line a clip keeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ContinentSide {
    Europe,
    Asia,
}

/// The parent a ring extraction pulls component polygons from: a whole
/// country, or a single named admin-1 region of one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ParentRef {
    Country(&'static str),
    Admin1(&'static str, &'static str),
}

/// How a destination's geometry is assembled from the source layers. Each
/// variant carries only the parameters its executor needs; dispatch is an
/// exhaustive match so a new strategy can't be added without handling it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Strategy {
    /// Select by A3 code (the registry's ISO alpha-3 when `code` is None),
    /// optionally dissolving extra codes into the result.
    Direct {
        code: Option<&'static str>,
        merge: &'static [&'static str],
    },
    /// Select from the subunits layer only.
    Subunit {
        su_a3: &'static str,
    },
    /// Dissolve named admin-1 regions of one country.
    Admin1 {
        adm0_a3: &'static str,
        provinces: &'static [&'static str],
    },
    /// A country minus named admin-1 regions and/or disputed areas, with
    /// optional disputed areas dissolved back in.
    Remainder {
        adm0_a3: &'static str,
        subtract_admin1: &'static [&'static str],
        subtract_disputed: &'static [&'static str],
        merge_disputed: &'static [&'static str],
    },
    /// A country minus other destinations' already-assembled geometry.
    /// Assembled in a second pass, after every referenced index.
    GroupRemainder {
        adm0_a3: &'static str,
        subtract_indices: &'static [u16],
    },
    /// A country minus features from the disputed layer.
    DisputedRemainder {
        adm0_a3: &'static str,
        subtract_disputed: &'static [&'static str],
    },
    /// Transcontinental split along the boundary line.
    Clip {
        adm0_a3: &'static str,
        side: ContinentSide,
        absorb_lon: Option<(f64, f64)>,
        subtract_indices: &'static [u16],
        subtract_su_a3: &'static [&'static str],
    },
    /// Select from the disputed layer by name. When the layer has no match,
    /// the fallback names an admin-1 region to extract instead; direct
    /// disputed-layer data always wins over the fallback.
    Disputed {
        name: &'static str,
        also_merge: &'static [&'static str],
        fallback: Option<(&'static str, &'static str)>,
    },
    /// Isolate a parent's component polygons within a bounding box
    /// (west, south, east, north).
    IslandBbox {
        parent: ParentRef,
        bbox: [f64; 4],
    },
    /// Synthetic pole-to-60°S wedges. A sector whose west bound exceeds its
    /// east bound crosses the antimeridian.
    Antarctic {
        sectors: &'static [(f64, f64)],
    },
    /// A bare point at the given coordinates, marker from the start.
    Point {
        lon: f64,
        lat: f64,
    },
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct DestinationSpec {
    pub(crate) index: u16,
    pub(crate) name: &'static str,
    pub(crate) region: Region,
    pub(crate) iso_a2: Option<&'static str>,
    pub(crate) iso_a3: Option<&'static str>,
    pub(crate) iso_n3: Option<u16>,
    pub(crate) sovereign: &'static str,
    pub(crate) kind: FeatureKind,
    pub(crate) strategy: Strategy,
}

/// The validated destination table. Construction fails if the indices are
/// not exactly {1..330} in ascending order, or any region band or published
/// count disagrees with the rows.
pub(crate) struct Registry {
    specs: Vec<DestinationSpec>,
}

pub(crate) const DESTINATION_COUNT: usize = 330;

impl Registry {

    pub(crate) fn standard() -> Result<Self, CommandError> {
        Self::from_specs(DESTINATIONS.to_vec())
    }

    fn from_specs(specs: Vec<DestinationSpec>) -> Result<Self, CommandError> {

        if specs.len() != DESTINATION_COUNT {
            return Err(CommandError::RegistryInvariantViolation(format!("expected {} destinations, found {}",DESTINATION_COUNT,specs.len())));
        }

        for (position, spec) in specs.iter().enumerate() {
            let expected = (position + 1) as u16;
            if spec.index != expected {
                return Err(CommandError::RegistryInvariantViolation(format!("expected index {} at position {}, found {}",expected,position,spec.index)));
            }
            match Region::for_index(spec.index) {
                Some(region) if region == spec.region => (),
                _ => return Err(CommandError::RegistryInvariantViolation(format!("[{}] {} is tagged {} outside that region's index band",spec.index,spec.name,spec.region))),
            }
        }

        for region in Region::ALL {
            let count = specs.iter().filter(|spec| spec.region == region).count();
            if count != region.published_count() {
                return Err(CommandError::RegistryInvariantViolation(format!("{} has {} destinations, published total is {}",region,count,region.published_count())));
            }
        }

        Ok(Self { specs })
    }

    // tests substitute small synthetic tables, which skip the invariants
    #[cfg(test)]
    pub(crate) fn for_testing(specs: Vec<DestinationSpec>) -> Self {
        Self { specs }
    }

    pub(crate) fn get_all(&self) -> &[DestinationSpec] {
        &self.specs
    }

    pub(crate) fn get(&self, index: u16) -> Result<&DestinationSpec, CommandError> {
        self.specs.iter().find(|spec| spec.index == index).ok_or_else(|| {
            CommandError::RegistryInvariantViolation(format!("no destination with index {}",index))
        })
    }

}

static DESTINATIONS: [DestinationSpec; DESTINATION_COUNT] = [
    // Pacific Ocean
    DestinationSpec{index:1,name:"Austral Islands",region:Region::PacificOcean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"France",kind:FeatureKind::Territory,strategy:Strategy::IslandBbox{parent:ParentRef::Country("PYF"),bbox:[-155.0,-28.0,-144.0,-20.0]}},
    DestinationSpec{index:2,name:"Australia",region:Region::PacificOcean,iso_a2:Some("AU"),iso_a3:Some("AUS"),iso_n3:Some(36),sovereign:"Australia",kind:FeatureKind::Country,strategy:Strategy::Remainder{adm0_a3:"AUS",subtract_admin1:&["Tasmania"],subtract_disputed:&[],merge_disputed:&[]}},
    DestinationSpec{index:3,name:"Chatham Islands",region:Region::PacificOcean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"New Zealand",kind:FeatureKind::Territory,strategy:Strategy::IslandBbox{parent:ParentRef::Country("NZL"),bbox:[-177.5,-45.0,-175.0,-43.0]}},
    DestinationSpec{index:4,name:"Cook Islands",region:Region::PacificOcean,iso_a2:Some("CK"),iso_a3:Some("COK"),iso_n3:Some(184),sovereign:"Cook Islands",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:5,name:"Easter Island",region:Region::PacificOcean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Chile",kind:FeatureKind::Territory,strategy:Strategy::IslandBbox{parent:ParentRef::Country("CHL"),bbox:[-110.0,-28.0,-108.0,-26.0]}},
    DestinationSpec{index:6,name:"Fiji Islands",region:Region::PacificOcean,iso_a2:Some("FJ"),iso_a3:Some("FJI"),iso_n3:Some(242),sovereign:"Fiji",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:7,name:"French Polynesia",region:Region::PacificOcean,iso_a2:Some("PF"),iso_a3:Some("PYF"),iso_n3:Some(258),sovereign:"France",kind:FeatureKind::Territory,strategy:Strategy::GroupRemainder{adm0_a3:"PYF",subtract_indices:&[1,15]}},
    DestinationSpec{index:8,name:"Galapagos Islands",region:Region::PacificOcean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Ecuador",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"ECU",provinces:&["Galápagos"]}},
    DestinationSpec{index:9,name:"Guam",region:Region::PacificOcean,iso_a2:Some("GU"),iso_a3:Some("GUM"),iso_n3:Some(316),sovereign:"United States",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:10,name:"Hawaiian Islands",region:Region::PacificOcean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"United States",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"USA",provinces:&["Hawaii"]}},
    DestinationSpec{index:11,name:"Juan Fernandez Islands",region:Region::PacificOcean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Chile",kind:FeatureKind::Territory,strategy:Strategy::IslandBbox{parent:ParentRef::Country("CHL"),bbox:[-81.0,-35.0,-78.0,-32.0]}},
    DestinationSpec{index:12,name:"Kiribati",region:Region::PacificOcean,iso_a2:Some("KI"),iso_a3:Some("KIR"),iso_n3:Some(296),sovereign:"Kiribati",kind:FeatureKind::Country,strategy:Strategy::GroupRemainder{adm0_a3:"KIR",subtract_indices:&[13]}},
    DestinationSpec{index:13,name:"Line/Phoenix Islands",region:Region::PacificOcean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Kiribati",kind:FeatureKind::Territory,strategy:Strategy::IslandBbox{parent:ParentRef::Country("KIR"),bbox:[-175.0,-15.0,-148.0,7.0]}},
    DestinationSpec{index:14,name:"Lord Howe Island",region:Region::PacificOcean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Australia",kind:FeatureKind::Territory,strategy:Strategy::IslandBbox{parent:ParentRef::Country("AUS"),bbox:[158.0,-32.5,160.0,-31.0]}},
    DestinationSpec{index:15,name:"Marquesas Islands",region:Region::PacificOcean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"France",kind:FeatureKind::Territory,strategy:Strategy::IslandBbox{parent:ParentRef::Country("PYF"),bbox:[-141.0,-12.0,-138.0,-7.0]}},
    DestinationSpec{index:16,name:"Marshall Islands",region:Region::PacificOcean,iso_a2:Some("MH"),iso_a3:Some("MHL"),iso_n3:Some(584),sovereign:"Marshall Islands",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:17,name:"Micronesia",region:Region::PacificOcean,iso_a2:Some("FM"),iso_a3:Some("FSM"),iso_n3:Some(583),sovereign:"Micronesia",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:18,name:"Midway Island",region:Region::PacificOcean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"United States",kind:FeatureKind::Territory,strategy:Strategy::Subunit{su_a3:"MQI"}},
    DestinationSpec{index:19,name:"Nauru",region:Region::PacificOcean,iso_a2:Some("NR"),iso_a3:Some("NRU"),iso_n3:Some(520),sovereign:"Nauru",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:20,name:"New Caledonia & Dependencies",region:Region::PacificOcean,iso_a2:Some("NC"),iso_a3:Some("NCL"),iso_n3:Some(540),sovereign:"France",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:21,name:"New Zealand",region:Region::PacificOcean,iso_a2:Some("NZ"),iso_a3:Some("NZL"),iso_n3:Some(554),sovereign:"New Zealand",kind:FeatureKind::Country,strategy:Strategy::GroupRemainder{adm0_a3:"NZL",subtract_indices:&[3]}},
    DestinationSpec{index:22,name:"Niue",region:Region::PacificOcean,iso_a2:Some("NU"),iso_a3:Some("NIU"),iso_n3:Some(570),sovereign:"Niue",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:23,name:"Norfolk Island",region:Region::PacificOcean,iso_a2:Some("NF"),iso_a3:Some("NFK"),iso_n3:Some(574),sovereign:"Australia",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:24,name:"Northern Marianas",region:Region::PacificOcean,iso_a2:Some("MP"),iso_a3:Some("MNP"),iso_n3:Some(580),sovereign:"United States",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:25,name:"Ogasawara",region:Region::PacificOcean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Japan",kind:FeatureKind::Territory,strategy:Strategy::IslandBbox{parent:ParentRef::Country("JPN"),bbox:[141.0,24.0,143.0,28.0]}},
    DestinationSpec{index:26,name:"Palau",region:Region::PacificOcean,iso_a2:Some("PW"),iso_a3:Some("PLW"),iso_n3:Some(585),sovereign:"Palau",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:27,name:"Papua New Guinea",region:Region::PacificOcean,iso_a2:Some("PG"),iso_a3:Some("PNG"),iso_n3:Some(598),sovereign:"Papua New Guinea",kind:FeatureKind::Country,strategy:Strategy::GroupRemainder{adm0_a3:"PNG",subtract_indices:&[28]}},
    DestinationSpec{index:28,name:"Papua New Guinea – Islands Region",region:Region::PacificOcean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Papua New Guinea",kind:FeatureKind::Subnational,strategy:Strategy::IslandBbox{parent:ParentRef::Country("PNG"),bbox:[147.0,-8.0,160.0,-1.0]}},
    DestinationSpec{index:29,name:"Pitcairn Island",region:Region::PacificOcean,iso_a2:Some("PN"),iso_a3:Some("PCN"),iso_n3:Some(612),sovereign:"United Kingdom",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:30,name:"Ryukyu Islands",region:Region::PacificOcean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Japan",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"JPN",provinces:&["Okinawa"]}},
    DestinationSpec{index:31,name:"Samoa American",region:Region::PacificOcean,iso_a2:Some("AS"),iso_a3:Some("ASM"),iso_n3:Some(16),sovereign:"United States",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:32,name:"Samoa",region:Region::PacificOcean,iso_a2:Some("WS"),iso_a3:Some("WSM"),iso_n3:Some(882),sovereign:"Samoa",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:33,name:"Solomon Islands",region:Region::PacificOcean,iso_a2:Some("SB"),iso_a3:Some("SLB"),iso_n3:Some(90),sovereign:"Solomon Islands",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:34,name:"Tasmania",region:Region::PacificOcean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Australia",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"AUS",provinces:&["Tasmania"]}},
    DestinationSpec{index:35,name:"Tokelau Islands",region:Region::PacificOcean,iso_a2:Some("TK"),iso_a3:Some("TKL"),iso_n3:Some(772),sovereign:"New Zealand",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:36,name:"Tonga",region:Region::PacificOcean,iso_a2:Some("TO"),iso_a3:Some("TON"),iso_n3:Some(776),sovereign:"Tonga",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:37,name:"Tuvalu",region:Region::PacificOcean,iso_a2:Some("TV"),iso_a3:Some("TUV"),iso_n3:Some(798),sovereign:"Tuvalu",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:38,name:"Vanuatu",region:Region::PacificOcean,iso_a2:Some("VU"),iso_a3:Some("VUT"),iso_n3:Some(548),sovereign:"Vanuatu",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:39,name:"Wake Island",region:Region::PacificOcean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"United States",kind:FeatureKind::Territory,strategy:Strategy::Subunit{su_a3:"WQI"}},
    DestinationSpec{index:40,name:"Wallis & Futuna Islands",region:Region::PacificOcean,iso_a2:Some("WF"),iso_a3:Some("WLF"),iso_n3:Some(876),sovereign:"France",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},

    // North America
    DestinationSpec{index:41,name:"Alaska",region:Region::NorthAmerica,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"United States",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"USA",provinces:&["Alaska"]}},
    DestinationSpec{index:42,name:"Canada",region:Region::NorthAmerica,iso_a2:Some("CA"),iso_a3:Some("CAN"),iso_n3:Some(124),sovereign:"Canada",kind:FeatureKind::Country,strategy:Strategy::Remainder{adm0_a3:"CAN",subtract_admin1:&["Prince Edward Island"],subtract_disputed:&[],merge_disputed:&[]}},
    DestinationSpec{index:43,name:"Mexico",region:Region::NorthAmerica,iso_a2:Some("MX"),iso_a3:Some("MEX"),iso_n3:Some(484),sovereign:"Mexico",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:44,name:"Prince Edward Island",region:Region::NorthAmerica,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Canada",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"CAN",provinces:&["Prince Edward Island"]}},
    DestinationSpec{index:45,name:"St. Pierre & Miquelon",region:Region::NorthAmerica,iso_a2:Some("PM"),iso_a3:Some("SPM"),iso_n3:Some(666),sovereign:"France",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:46,name:"United States (Contiguous)",region:Region::NorthAmerica,iso_a2:Some("US"),iso_a3:Some("USA"),iso_n3:Some(840),sovereign:"United States",kind:FeatureKind::Country,strategy:Strategy::Remainder{adm0_a3:"USA",subtract_admin1:&["Alaska","Hawaii"],subtract_disputed:&[],merge_disputed:&[]}},

    // Central America
    DestinationSpec{index:47,name:"Belize",region:Region::CentralAmerica,iso_a2:Some("BZ"),iso_a3:Some("BLZ"),iso_n3:Some(84),sovereign:"Belize",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:48,name:"Costa Rica",region:Region::CentralAmerica,iso_a2:Some("CR"),iso_a3:Some("CRI"),iso_n3:Some(188),sovereign:"Costa Rica",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:49,name:"El Salvador",region:Region::CentralAmerica,iso_a2:Some("SV"),iso_a3:Some("SLV"),iso_n3:Some(222),sovereign:"El Salvador",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:50,name:"Guatemala",region:Region::CentralAmerica,iso_a2:Some("GT"),iso_a3:Some("GTM"),iso_n3:Some(320),sovereign:"Guatemala",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:51,name:"Honduras",region:Region::CentralAmerica,iso_a2:Some("HN"),iso_a3:Some("HND"),iso_n3:Some(340),sovereign:"Honduras",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:52,name:"Nicaragua",region:Region::CentralAmerica,iso_a2:Some("NI"),iso_a3:Some("NIC"),iso_n3:Some(558),sovereign:"Nicaragua",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:53,name:"Panama",region:Region::CentralAmerica,iso_a2:Some("PA"),iso_a3:Some("PAN"),iso_n3:Some(591),sovereign:"Panama",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},

    // South America
    DestinationSpec{index:54,name:"Argentina",region:Region::SouthAmerica,iso_a2:Some("AR"),iso_a3:Some("ARG"),iso_n3:Some(32),sovereign:"Argentina",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:55,name:"Bolivia",region:Region::SouthAmerica,iso_a2:Some("BO"),iso_a3:Some("BOL"),iso_n3:Some(68),sovereign:"Bolivia",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:56,name:"Brazil",region:Region::SouthAmerica,iso_a2:Some("BR"),iso_a3:Some("BRA"),iso_n3:Some(76),sovereign:"Brazil",kind:FeatureKind::Country,strategy:Strategy::GroupRemainder{adm0_a3:"BRA",subtract_indices:&[106]}},
    DestinationSpec{index:57,name:"Chile",region:Region::SouthAmerica,iso_a2:Some("CL"),iso_a3:Some("CHL"),iso_n3:Some(152),sovereign:"Chile",kind:FeatureKind::Country,strategy:Strategy::GroupRemainder{adm0_a3:"CHL",subtract_indices:&[5,11]}},
    DestinationSpec{index:58,name:"Colombia",region:Region::SouthAmerica,iso_a2:Some("CO"),iso_a3:Some("COL"),iso_n3:Some(170),sovereign:"Colombia",kind:FeatureKind::Country,strategy:Strategy::Remainder{adm0_a3:"COL",subtract_admin1:&["San Andrés y Providencia"],subtract_disputed:&[],merge_disputed:&[]}},
    DestinationSpec{index:59,name:"Ecuador",region:Region::SouthAmerica,iso_a2:Some("EC"),iso_a3:Some("ECU"),iso_n3:Some(218),sovereign:"Ecuador",kind:FeatureKind::Country,strategy:Strategy::Remainder{adm0_a3:"ECU",subtract_admin1:&["Galápagos"],subtract_disputed:&[],merge_disputed:&[]}},
    DestinationSpec{index:60,name:"French Guiana",region:Region::SouthAmerica,iso_a2:Some("GF"),iso_a3:Some("GUF"),iso_n3:Some(254),sovereign:"France",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:61,name:"Guyana",region:Region::SouthAmerica,iso_a2:Some("GY"),iso_a3:Some("GUY"),iso_n3:Some(328),sovereign:"Guyana",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:62,name:"Nueva Esparta",region:Region::SouthAmerica,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Venezuela",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"VEN",provinces:&["Nueva Esparta"]}},
    DestinationSpec{index:63,name:"Paraguay",region:Region::SouthAmerica,iso_a2:Some("PY"),iso_a3:Some("PRY"),iso_n3:Some(600),sovereign:"Paraguay",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:64,name:"Peru",region:Region::SouthAmerica,iso_a2:Some("PE"),iso_a3:Some("PER"),iso_n3:Some(604),sovereign:"Peru",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:65,name:"Suriname",region:Region::SouthAmerica,iso_a2:Some("SR"),iso_a3:Some("SUR"),iso_n3:Some(740),sovereign:"Suriname",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:66,name:"Uruguay",region:Region::SouthAmerica,iso_a2:Some("UY"),iso_a3:Some("URY"),iso_n3:Some(858),sovereign:"Uruguay",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:67,name:"Venezuela",region:Region::SouthAmerica,iso_a2:Some("VE"),iso_a3:Some("VEN"),iso_n3:Some(862),sovereign:"Venezuela",kind:FeatureKind::Country,strategy:Strategy::Remainder{adm0_a3:"VEN",subtract_admin1:&["Nueva Esparta"],subtract_disputed:&[],merge_disputed:&[]}},

    // Caribbean
    DestinationSpec{index:68,name:"Anguilla",region:Region::Caribbean,iso_a2:Some("AI"),iso_a3:Some("AIA"),iso_n3:Some(660),sovereign:"United Kingdom",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:69,name:"Antigua & Barbuda",region:Region::Caribbean,iso_a2:Some("AG"),iso_a3:Some("ATG"),iso_n3:Some(28),sovereign:"Antigua and Barbuda",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:70,name:"Aruba",region:Region::Caribbean,iso_a2:Some("AW"),iso_a3:Some("ABW"),iso_n3:Some(533),sovereign:"Netherlands",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:71,name:"Bahamas",region:Region::Caribbean,iso_a2:Some("BS"),iso_a3:Some("BHS"),iso_n3:Some(44),sovereign:"Bahamas",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:72,name:"Barbados",region:Region::Caribbean,iso_a2:Some("BB"),iso_a3:Some("BRB"),iso_n3:Some(52),sovereign:"Barbados",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:73,name:"Bonaire",region:Region::Caribbean,iso_a2:None,iso_a3:Some("BES"),iso_n3:None,sovereign:"Netherlands",kind:FeatureKind::Territory,strategy:Strategy::Admin1{adm0_a3:"NLD",provinces:&["Bonaire"]}},
    DestinationSpec{index:74,name:"Cayman Islands",region:Region::Caribbean,iso_a2:Some("KY"),iso_a3:Some("CYM"),iso_n3:Some(136),sovereign:"United Kingdom",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:75,name:"Cuba",region:Region::Caribbean,iso_a2:Some("CU"),iso_a3:Some("CUB"),iso_n3:Some(192),sovereign:"Cuba",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:76,name:"Curacao",region:Region::Caribbean,iso_a2:Some("CW"),iso_a3:Some("CUW"),iso_n3:Some(531),sovereign:"Netherlands",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:77,name:"Dominica",region:Region::Caribbean,iso_a2:Some("DM"),iso_a3:Some("DMA"),iso_n3:Some(212),sovereign:"Dominica",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:78,name:"Dominican Republic",region:Region::Caribbean,iso_a2:Some("DO"),iso_a3:Some("DOM"),iso_n3:Some(214),sovereign:"Dominican Republic",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:79,name:"Grenada & Dependencies",region:Region::Caribbean,iso_a2:Some("GD"),iso_a3:Some("GRD"),iso_n3:Some(308),sovereign:"Grenada",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:80,name:"Guadeloupe & Dependencies",region:Region::Caribbean,iso_a2:Some("GP"),iso_a3:Some("GLP"),iso_n3:Some(312),sovereign:"France",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:81,name:"Haiti",region:Region::Caribbean,iso_a2:Some("HT"),iso_a3:Some("HTI"),iso_n3:Some(332),sovereign:"Haiti",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:82,name:"Jamaica",region:Region::Caribbean,iso_a2:Some("JM"),iso_a3:Some("JAM"),iso_n3:Some(388),sovereign:"Jamaica",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:83,name:"Martinique",region:Region::Caribbean,iso_a2:Some("MQ"),iso_a3:Some("MTQ"),iso_n3:Some(474),sovereign:"France",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:84,name:"Montserrat",region:Region::Caribbean,iso_a2:Some("MS"),iso_a3:Some("MSR"),iso_n3:Some(500),sovereign:"United Kingdom",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:85,name:"Nevis",region:Region::Caribbean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Saint Kitts and Nevis",kind:FeatureKind::Subnational,strategy:Strategy::IslandBbox{parent:ParentRef::Country("KNA"),bbox:[-62.7,17.05,-62.4,17.25]}},
    DestinationSpec{index:86,name:"Puerto Rico",region:Region::Caribbean,iso_a2:Some("PR"),iso_a3:Some("PRI"),iso_n3:Some(630),sovereign:"United States",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:87,name:"Saba & Sint Eustatius",region:Region::Caribbean,iso_a2:None,iso_a3:Some("BES"),iso_n3:None,sovereign:"Netherlands",kind:FeatureKind::Territory,strategy:Strategy::Admin1{adm0_a3:"NLD",provinces:&["Saba","St. Eustatius"]}},
    DestinationSpec{index:88,name:"St. Barthélemy",region:Region::Caribbean,iso_a2:Some("BL"),iso_a3:Some("BLM"),iso_n3:Some(652),sovereign:"France",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:89,name:"St. Kitts",region:Region::Caribbean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Saint Kitts and Nevis",kind:FeatureKind::Subnational,strategy:Strategy::IslandBbox{parent:ParentRef::Country("KNA"),bbox:[-62.9,17.2,-62.5,17.45]}},
    DestinationSpec{index:90,name:"St. Lucia",region:Region::Caribbean,iso_a2:Some("LC"),iso_a3:Some("LCA"),iso_n3:Some(662),sovereign:"Saint Lucia",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:91,name:"St. Martin",region:Region::Caribbean,iso_a2:Some("MF"),iso_a3:Some("MAF"),iso_n3:Some(663),sovereign:"France",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:92,name:"St. Vincent & the Grenadines",region:Region::Caribbean,iso_a2:Some("VC"),iso_a3:Some("VCT"),iso_n3:Some(670),sovereign:"Saint Vincent and the Grenadines",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:93,name:"San Andres & Providencia",region:Region::Caribbean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Colombia",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"COL",provinces:&["San Andrés y Providencia"]}},
    DestinationSpec{index:94,name:"Sint Maarten",region:Region::Caribbean,iso_a2:Some("SX"),iso_a3:Some("SXM"),iso_n3:Some(534),sovereign:"Netherlands",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:95,name:"Trinidad & Tobago",region:Region::Caribbean,iso_a2:Some("TT"),iso_a3:Some("TTO"),iso_n3:Some(780),sovereign:"Trinidad and Tobago",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:96,name:"Turks & Caicos Islands",region:Region::Caribbean,iso_a2:Some("TC"),iso_a3:Some("TCA"),iso_n3:Some(796),sovereign:"United Kingdom",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:97,name:"Virgin Islands British",region:Region::Caribbean,iso_a2:Some("VG"),iso_a3:Some("VGB"),iso_n3:Some(92),sovereign:"United Kingdom",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:98,name:"Virgin Islands U.S.",region:Region::Caribbean,iso_a2:Some("VI"),iso_a3:Some("VIR"),iso_n3:Some(850),sovereign:"United States",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},

    // Atlantic Ocean
    DestinationSpec{index:99,name:"Ascension",region:Region::AtlanticOcean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"United Kingdom",kind:FeatureKind::Territory,strategy:Strategy::IslandBbox{parent:ParentRef::Country("SHN"),bbox:[-15.0,-8.5,-14.0,-7.0]}},
    DestinationSpec{index:100,name:"Azores Islands",region:Region::AtlanticOcean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Portugal",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"PRT",provinces:&["Azores"]}},
    DestinationSpec{index:101,name:"Bermuda",region:Region::AtlanticOcean,iso_a2:Some("BM"),iso_a3:Some("BMU"),iso_n3:Some(60),sovereign:"United Kingdom",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:102,name:"Canary Islands",region:Region::AtlanticOcean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Spain",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"ESP",provinces:&["Las Palmas","Santa Cruz de Tenerife"]}},
    DestinationSpec{index:103,name:"Cape Verde Islands",region:Region::AtlanticOcean,iso_a2:Some("CV"),iso_a3:Some("CPV"),iso_n3:Some(132),sovereign:"Cape Verde",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:104,name:"Falkland Islands",region:Region::AtlanticOcean,iso_a2:Some("FK"),iso_a3:Some("FLK"),iso_n3:Some(238),sovereign:"United Kingdom",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:105,name:"Faroe Islands",region:Region::AtlanticOcean,iso_a2:Some("FO"),iso_a3:Some("FRO"),iso_n3:Some(234),sovereign:"Denmark",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:106,name:"Fernando de Noronha",region:Region::AtlanticOcean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Brazil",kind:FeatureKind::Territory,strategy:Strategy::IslandBbox{parent:ParentRef::Country("BRA"),bbox:[-33.0,-4.5,-32.0,-3.0]}},
    DestinationSpec{index:107,name:"Greenland",region:Region::AtlanticOcean,iso_a2:Some("GL"),iso_a3:Some("GRL"),iso_n3:Some(304),sovereign:"Denmark",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:108,name:"Iceland",region:Region::AtlanticOcean,iso_a2:Some("IS"),iso_a3:Some("ISL"),iso_n3:Some(352),sovereign:"Iceland",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:109,name:"Madeira",region:Region::AtlanticOcean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Portugal",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"PRT",provinces:&["Madeira"]}},
    DestinationSpec{index:110,name:"South Georgia & the South Sandwich Islands",region:Region::AtlanticOcean,iso_a2:Some("GS"),iso_a3:Some("SGS"),iso_n3:Some(239),sovereign:"United Kingdom",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:111,name:"St. Helena",region:Region::AtlanticOcean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"United Kingdom",kind:FeatureKind::Territory,strategy:Strategy::IslandBbox{parent:ParentRef::Country("SHN"),bbox:[-6.5,-16.5,-5.0,-15.0]}},
    DestinationSpec{index:112,name:"Tristan da Cunha",region:Region::AtlanticOcean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"United Kingdom",kind:FeatureKind::Territory,strategy:Strategy::IslandBbox{parent:ParentRef::Country("SHN"),bbox:[-13.0,-38.0,-12.0,-36.5]}},

    // Europe & Mediterranean
    DestinationSpec{index:113,name:"Aland Islands",region:Region::EuropeMediterranean,iso_a2:Some("AX"),iso_a3:Some("ALA"),iso_n3:Some(248),sovereign:"Finland",kind:FeatureKind::Subnational,strategy:Strategy::Direct{code:Some("ALD"),merge:&[]}},
    DestinationSpec{index:114,name:"Albania",region:Region::EuropeMediterranean,iso_a2:Some("AL"),iso_a3:Some("ALB"),iso_n3:Some(8),sovereign:"Albania",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:115,name:"Andorra",region:Region::EuropeMediterranean,iso_a2:Some("AD"),iso_a3:Some("AND"),iso_n3:Some(20),sovereign:"Andorra",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:116,name:"Austria",region:Region::EuropeMediterranean,iso_a2:Some("AT"),iso_a3:Some("AUT"),iso_n3:Some(40),sovereign:"Austria",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:117,name:"Balearic Islands",region:Region::EuropeMediterranean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Spain",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"ESP",provinces:&["Baleares"]}},
    DestinationSpec{index:118,name:"Belarus",region:Region::EuropeMediterranean,iso_a2:Some("BY"),iso_a3:Some("BLR"),iso_n3:Some(112),sovereign:"Belarus",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:119,name:"Belgium",region:Region::EuropeMediterranean,iso_a2:Some("BE"),iso_a3:Some("BEL"),iso_n3:Some(56),sovereign:"Belgium",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:120,name:"Bosnia & Herzegovina",region:Region::EuropeMediterranean,iso_a2:Some("BA"),iso_a3:Some("BIH"),iso_n3:Some(70),sovereign:"Bosnia and Herzegovina",kind:FeatureKind::Country,strategy:Strategy::GroupRemainder{adm0_a3:"BIH",subtract_indices:&[173]}},
    DestinationSpec{index:121,name:"Bulgaria",region:Region::EuropeMediterranean,iso_a2:Some("BG"),iso_a3:Some("BGR"),iso_n3:Some(100),sovereign:"Bulgaria",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:122,name:"Corsica",region:Region::EuropeMediterranean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"France",kind:FeatureKind::Subnational,strategy:Strategy::Subunit{su_a3:"FXC"}},
    DestinationSpec{index:123,name:"Crete",region:Region::EuropeMediterranean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Greece",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"GRC",provinces:&["Kriti"]}},
    DestinationSpec{index:124,name:"Croatia",region:Region::EuropeMediterranean,iso_a2:Some("HR"),iso_a3:Some("HRV"),iso_n3:Some(191),sovereign:"Croatia",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:125,name:"Cyprus British Sovereign Base Areas",region:Region::EuropeMediterranean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"United Kingdom",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:Some("WSB"),merge:&[]}},
    DestinationSpec{index:126,name:"Cyprus Republic",region:Region::EuropeMediterranean,iso_a2:Some("CY"),iso_a3:Some("CYP"),iso_n3:Some(196),sovereign:"Cyprus",kind:FeatureKind::Country,strategy:Strategy::DisputedRemainder{adm0_a3:"CYP",subtract_disputed:&["N. Cyprus"]}},
    DestinationSpec{index:127,name:"Cyprus Turkish Fed. State",region:Region::EuropeMediterranean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Cyprus",kind:FeatureKind::Disputed,strategy:Strategy::Disputed{name:"N. Cyprus",also_merge:&[],fallback:None}},
    DestinationSpec{index:128,name:"Czech Republic",region:Region::EuropeMediterranean,iso_a2:Some("CZ"),iso_a3:Some("CZE"),iso_n3:Some(203),sovereign:"Czech Republic",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:129,name:"Denmark",region:Region::EuropeMediterranean,iso_a2:Some("DK"),iso_a3:Some("DNK"),iso_n3:Some(208),sovereign:"Denmark",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:130,name:"England",region:Region::EuropeMediterranean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"United Kingdom",kind:FeatureKind::Subnational,strategy:Strategy::Subunit{su_a3:"ENG"}},
    DestinationSpec{index:131,name:"Estonia",region:Region::EuropeMediterranean,iso_a2:Some("EE"),iso_a3:Some("EST"),iso_n3:Some(233),sovereign:"Estonia",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:132,name:"Finland",region:Region::EuropeMediterranean,iso_a2:Some("FI"),iso_a3:Some("FIN"),iso_n3:Some(246),sovereign:"Finland",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:133,name:"France",region:Region::EuropeMediterranean,iso_a2:Some("FR"),iso_a3:Some("FRA"),iso_n3:Some(250),sovereign:"France",kind:FeatureKind::Country,strategy:Strategy::Subunit{su_a3:"FXM"}},
    DestinationSpec{index:134,name:"Germany",region:Region::EuropeMediterranean,iso_a2:Some("DE"),iso_a3:Some("DEU"),iso_n3:Some(276),sovereign:"Germany",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:135,name:"Gibraltar",region:Region::EuropeMediterranean,iso_a2:Some("GI"),iso_a3:Some("GIB"),iso_n3:Some(292),sovereign:"United Kingdom",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:136,name:"Greece",region:Region::EuropeMediterranean,iso_a2:Some("GR"),iso_a3:Some("GRC"),iso_n3:Some(300),sovereign:"Greece",kind:FeatureKind::Country,strategy:Strategy::Remainder{adm0_a3:"GRC",subtract_admin1:&["Kriti","Ionioi Nisoi","Voreio Aigaio","Notio Aigaio"],subtract_disputed:&[],merge_disputed:&[]}},
    DestinationSpec{index:137,name:"Greek Aegean Islands",region:Region::EuropeMediterranean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Greece",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"GRC",provinces:&["Voreio Aigaio","Notio Aigaio"]}},
    DestinationSpec{index:138,name:"Guernsey & Dependencies",region:Region::EuropeMediterranean,iso_a2:Some("GG"),iso_a3:Some("GGY"),iso_n3:Some(831),sovereign:"United Kingdom",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:139,name:"Hungary",region:Region::EuropeMediterranean,iso_a2:Some("HU"),iso_a3:Some("HUN"),iso_n3:Some(348),sovereign:"Hungary",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:140,name:"Ionian Islands",region:Region::EuropeMediterranean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Greece",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"GRC",provinces:&["Ionioi Nisoi"]}},
    DestinationSpec{index:141,name:"Ireland",region:Region::EuropeMediterranean,iso_a2:Some("IE"),iso_a3:Some("IRL"),iso_n3:Some(372),sovereign:"Ireland",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:142,name:"Ireland Northern",region:Region::EuropeMediterranean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"United Kingdom",kind:FeatureKind::Subnational,strategy:Strategy::Subunit{su_a3:"NIR"}},
    DestinationSpec{index:143,name:"Isle of Man",region:Region::EuropeMediterranean,iso_a2:Some("IM"),iso_a3:Some("IMN"),iso_n3:Some(833),sovereign:"United Kingdom",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:144,name:"Italy",region:Region::EuropeMediterranean,iso_a2:Some("IT"),iso_a3:Some("ITA"),iso_n3:Some(380),sovereign:"Italy",kind:FeatureKind::Country,strategy:Strategy::Remainder{adm0_a3:"ITA",subtract_admin1:&["Cagliari","Carbonia-Iglesias","Medio Campidano","Nuoro","Ogliastra","Olbia-Tempio","Oristrano","Sassari","Agrigento","Caltanissetta","Catania","Enna","Messina","Palermo","Ragusa","Siracusa","Trapani"],subtract_disputed:&[],merge_disputed:&[]}},
    DestinationSpec{index:145,name:"Jersey",region:Region::EuropeMediterranean,iso_a2:Some("JE"),iso_a3:Some("JEY"),iso_n3:Some(832),sovereign:"United Kingdom",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:146,name:"Kaliningrad",region:Region::EuropeMediterranean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Russia",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"RUS",provinces:&["Kaliningrad"]}},
    DestinationSpec{index:147,name:"Kosovo",region:Region::EuropeMediterranean,iso_a2:Some("XK"),iso_a3:Some("XKX"),iso_n3:None,sovereign:"Kosovo",kind:FeatureKind::Disputed,strategy:Strategy::Direct{code:Some("KOS"),merge:&[]}},
    DestinationSpec{index:148,name:"Lampedusa",region:Region::EuropeMediterranean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Italy",kind:FeatureKind::Territory,strategy:Strategy::IslandBbox{parent:ParentRef::Admin1("ITA","Agrigento"),bbox:[12.0,35.0,13.0,36.0]}},
    DestinationSpec{index:149,name:"Latvia",region:Region::EuropeMediterranean,iso_a2:Some("LV"),iso_a3:Some("LVA"),iso_n3:Some(428),sovereign:"Latvia",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:150,name:"Liechtenstein",region:Region::EuropeMediterranean,iso_a2:Some("LI"),iso_a3:Some("LIE"),iso_n3:Some(438),sovereign:"Liechtenstein",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:151,name:"Lithuania",region:Region::EuropeMediterranean,iso_a2:Some("LT"),iso_a3:Some("LTU"),iso_n3:Some(440),sovereign:"Lithuania",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:152,name:"Luxembourg",region:Region::EuropeMediterranean,iso_a2:Some("LU"),iso_a3:Some("LUX"),iso_n3:Some(442),sovereign:"Luxembourg",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:153,name:"Malta",region:Region::EuropeMediterranean,iso_a2:Some("MT"),iso_a3:Some("MLT"),iso_n3:Some(470),sovereign:"Malta",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:154,name:"Moldova",region:Region::EuropeMediterranean,iso_a2:Some("MD"),iso_a3:Some("MDA"),iso_n3:Some(498),sovereign:"Moldova",kind:FeatureKind::Country,strategy:Strategy::DisputedRemainder{adm0_a3:"MDA",subtract_disputed:&["Transnistria"]}},
    DestinationSpec{index:155,name:"Monaco",region:Region::EuropeMediterranean,iso_a2:Some("MC"),iso_a3:Some("MCO"),iso_n3:Some(492),sovereign:"Monaco",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:156,name:"Montenegro",region:Region::EuropeMediterranean,iso_a2:Some("ME"),iso_a3:Some("MNE"),iso_n3:Some(499),sovereign:"Montenegro",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:157,name:"Netherlands",region:Region::EuropeMediterranean,iso_a2:Some("NL"),iso_a3:Some("NLD"),iso_n3:Some(528),sovereign:"Netherlands",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:158,name:"North Macedonia",region:Region::EuropeMediterranean,iso_a2:Some("MK"),iso_a3:Some("MKD"),iso_n3:Some(807),sovereign:"North Macedonia",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:159,name:"Norway",region:Region::EuropeMediterranean,iso_a2:Some("NO"),iso_a3:Some("NOR"),iso_n3:Some(578),sovereign:"Norway",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:160,name:"Poland",region:Region::EuropeMediterranean,iso_a2:Some("PL"),iso_a3:Some("POL"),iso_n3:Some(616),sovereign:"Poland",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:161,name:"Portugal",region:Region::EuropeMediterranean,iso_a2:Some("PT"),iso_a3:Some("PRT"),iso_n3:Some(620),sovereign:"Portugal",kind:FeatureKind::Country,strategy:Strategy::Remainder{adm0_a3:"PRT",subtract_admin1:&["Madeira","Azores"],subtract_disputed:&[],merge_disputed:&[]}},
    DestinationSpec{index:162,name:"Romania",region:Region::EuropeMediterranean,iso_a2:Some("RO"),iso_a3:Some("ROU"),iso_n3:Some(642),sovereign:"Romania",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:163,name:"Russia",region:Region::EuropeMediterranean,iso_a2:Some("RU"),iso_a3:Some("RUS"),iso_n3:Some(643),sovereign:"Russia",kind:FeatureKind::Country,strategy:Strategy::Clip{adm0_a3:"RUS",side:ContinentSide::Europe,absorb_lon:Some((30.0,59.0)),subtract_indices:&[146],subtract_su_a3:&["RUC"]}},
    DestinationSpec{index:164,name:"San Marino",region:Region::EuropeMediterranean,iso_a2:Some("SM"),iso_a3:Some("SMR"),iso_n3:Some(674),sovereign:"San Marino",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:165,name:"Sardinia",region:Region::EuropeMediterranean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Italy",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"ITA",provinces:&["Cagliari","Carbonia-Iglesias","Medio Campidano","Nuoro","Ogliastra","Olbia-Tempio","Oristrano","Sassari"]}},
    DestinationSpec{index:166,name:"Scotland",region:Region::EuropeMediterranean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"United Kingdom",kind:FeatureKind::Subnational,strategy:Strategy::Subunit{su_a3:"SCT"}},
    DestinationSpec{index:167,name:"Serbia",region:Region::EuropeMediterranean,iso_a2:Some("RS"),iso_a3:Some("SRB"),iso_n3:Some(688),sovereign:"Serbia",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:168,name:"Sicily",region:Region::EuropeMediterranean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Italy",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"ITA",provinces:&["Agrigento","Caltanissetta","Catania","Enna","Messina","Palermo","Ragusa","Siracusa","Trapani"]}},
    DestinationSpec{index:169,name:"Slovakia",region:Region::EuropeMediterranean,iso_a2:Some("SK"),iso_a3:Some("SVK"),iso_n3:Some(703),sovereign:"Slovakia",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:170,name:"Slovenia",region:Region::EuropeMediterranean,iso_a2:Some("SI"),iso_a3:Some("SVN"),iso_n3:Some(705),sovereign:"Slovenia",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:171,name:"Spain",region:Region::EuropeMediterranean,iso_a2:Some("ES"),iso_a3:Some("ESP"),iso_n3:Some(724),sovereign:"Spain",kind:FeatureKind::Country,strategy:Strategy::Remainder{adm0_a3:"ESP",subtract_admin1:&["Baleares","Las Palmas","Santa Cruz de Tenerife","Ceuta","Melilla"],subtract_disputed:&[],merge_disputed:&[]}},
    DestinationSpec{index:172,name:"Spitsbergen",region:Region::EuropeMediterranean,iso_a2:None,iso_a3:Some("SJM"),iso_n3:Some(744),sovereign:"Norway",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:Some("SJM"),merge:&[]}},
    DestinationSpec{index:173,name:"Srpska",region:Region::EuropeMediterranean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Bosnia and Herzegovina",kind:FeatureKind::Subnational,strategy:Strategy::Subunit{su_a3:"BIS"}},
    DestinationSpec{index:174,name:"Sweden",region:Region::EuropeMediterranean,iso_a2:Some("SE"),iso_a3:Some("SWE"),iso_n3:Some(752),sovereign:"Sweden",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:175,name:"Switzerland",region:Region::EuropeMediterranean,iso_a2:Some("CH"),iso_a3:Some("CHE"),iso_n3:Some(756),sovereign:"Switzerland",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:176,name:"Transnistria",region:Region::EuropeMediterranean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Moldova",kind:FeatureKind::Disputed,strategy:Strategy::Disputed{name:"Transnistria",also_merge:&[],fallback:None}},
    DestinationSpec{index:177,name:"Turkey in Europe",region:Region::EuropeMediterranean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Turkey",kind:FeatureKind::Subnational,strategy:Strategy::Clip{adm0_a3:"TUR",side:ContinentSide::Europe,absorb_lon:None,subtract_indices:&[],subtract_su_a3:&[]}},
    DestinationSpec{index:178,name:"Ukraine",region:Region::EuropeMediterranean,iso_a2:Some("UA"),iso_a3:Some("UKR"),iso_n3:Some(804),sovereign:"Ukraine",kind:FeatureKind::Country,strategy:Strategy::Direct{code:Some("UKR"),merge:&["RUC"]}},
    DestinationSpec{index:179,name:"Vatican City",region:Region::EuropeMediterranean,iso_a2:Some("VA"),iso_a3:Some("VAT"),iso_n3:Some(336),sovereign:"Vatican City",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:180,name:"Wales",region:Region::EuropeMediterranean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"United Kingdom",kind:FeatureKind::Subnational,strategy:Strategy::Subunit{su_a3:"WLS"}},

    // Antarctica
    DestinationSpec{index:181,name:"Argentine Antarctica",region:Region::Antarctica,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Argentina",kind:FeatureKind::Antarctic,strategy:Strategy::Antarctic{sectors:&[(-74.0,-25.0)]}},
    DestinationSpec{index:182,name:"Australian Antarctic Territory",region:Region::Antarctica,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Australia",kind:FeatureKind::Antarctic,strategy:Strategy::Antarctic{sectors:&[(44.63,136.0),(142.0,160.0)]}},
    DestinationSpec{index:183,name:"British Antarctic Territory",region:Region::Antarctica,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"United Kingdom",kind:FeatureKind::Antarctic,strategy:Strategy::Antarctic{sectors:&[(-25.0,-20.0)]}},
    DestinationSpec{index:184,name:"Chilean Antarctic Territory",region:Region::Antarctica,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Chile",kind:FeatureKind::Antarctic,strategy:Strategy::Antarctic{sectors:&[(-90.0,-74.0)]}},
    DestinationSpec{index:185,name:"French Antarctica",region:Region::Antarctica,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"France",kind:FeatureKind::Antarctic,strategy:Strategy::Antarctic{sectors:&[(136.0,142.0)]}},
    DestinationSpec{index:186,name:"New Zealand Antarctica",region:Region::Antarctica,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"New Zealand",kind:FeatureKind::Antarctic,strategy:Strategy::Antarctic{sectors:&[(160.0,-90.0)]}},
    DestinationSpec{index:187,name:"Norwegian Dependencies",region:Region::Antarctica,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Norway",kind:FeatureKind::Antarctic,strategy:Strategy::Antarctic{sectors:&[(-20.0,44.63)]}},

    // Africa
    DestinationSpec{index:188,name:"Algeria",region:Region::Africa,iso_a2:Some("DZ"),iso_a3:Some("DZA"),iso_n3:Some(12),sovereign:"Algeria",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:189,name:"Angola",region:Region::Africa,iso_a2:Some("AO"),iso_a3:Some("AGO"),iso_n3:Some(24),sovereign:"Angola",kind:FeatureKind::Country,strategy:Strategy::Remainder{adm0_a3:"AGO",subtract_admin1:&["Cabinda"],subtract_disputed:&[],merge_disputed:&[]}},
    DestinationSpec{index:190,name:"Benin",region:Region::Africa,iso_a2:Some("BJ"),iso_a3:Some("BEN"),iso_n3:Some(204),sovereign:"Benin",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:191,name:"Botswana",region:Region::Africa,iso_a2:Some("BW"),iso_a3:Some("BWA"),iso_n3:Some(72),sovereign:"Botswana",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:192,name:"Burkina Faso",region:Region::Africa,iso_a2:Some("BF"),iso_a3:Some("BFA"),iso_n3:Some(854),sovereign:"Burkina Faso",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:193,name:"Burundi",region:Region::Africa,iso_a2:Some("BI"),iso_a3:Some("BDI"),iso_n3:Some(108),sovereign:"Burundi",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:194,name:"Cabinda",region:Region::Africa,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Angola",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"AGO",provinces:&["Cabinda"]}},
    DestinationSpec{index:195,name:"Cameroon",region:Region::Africa,iso_a2:Some("CM"),iso_a3:Some("CMR"),iso_n3:Some(120),sovereign:"Cameroon",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:196,name:"Central African Republic",region:Region::Africa,iso_a2:Some("CF"),iso_a3:Some("CAF"),iso_n3:Some(140),sovereign:"Central African Republic",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:197,name:"Chad",region:Region::Africa,iso_a2:Some("TD"),iso_a3:Some("TCD"),iso_n3:Some(148),sovereign:"Chad",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:198,name:"Congo Democratic Republic",region:Region::Africa,iso_a2:Some("CD"),iso_a3:Some("COD"),iso_n3:Some(180),sovereign:"Democratic Republic of the Congo",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:199,name:"Congo Republic",region:Region::Africa,iso_a2:Some("CG"),iso_a3:Some("COG"),iso_n3:Some(178),sovereign:"Republic of the Congo",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:200,name:"Côte d'Ivoire",region:Region::Africa,iso_a2:Some("CI"),iso_a3:Some("CIV"),iso_n3:Some(384),sovereign:"Côte d'Ivoire",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:201,name:"Djibouti",region:Region::Africa,iso_a2:Some("DJ"),iso_a3:Some("DJI"),iso_n3:Some(262),sovereign:"Djibouti",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:202,name:"Egypt in Africa",region:Region::Africa,iso_a2:Some("EG"),iso_a3:Some("EGY"),iso_n3:Some(818),sovereign:"Egypt",kind:FeatureKind::Country,strategy:Strategy::Remainder{adm0_a3:"EGY",subtract_admin1:&["North Sinai","South Sinai"],subtract_disputed:&[],merge_disputed:&["Bir Tawil"]}},
    DestinationSpec{index:203,name:"Equatorial Guinea Bioko",region:Region::Africa,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Equatorial Guinea",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"GNQ",provinces:&["Bioko Norte","Bioko Sur"]}},
    DestinationSpec{index:204,name:"Equatorial Guinea Rio Muni",region:Region::Africa,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Equatorial Guinea",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"GNQ",provinces:&["Centro Sur","Kié-Ntem","Litoral","Wele-Nzas"]}},
    DestinationSpec{index:205,name:"Eritrea",region:Region::Africa,iso_a2:Some("ER"),iso_a3:Some("ERI"),iso_n3:Some(232),sovereign:"Eritrea",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:206,name:"Eswatini",region:Region::Africa,iso_a2:Some("SZ"),iso_a3:Some("SWZ"),iso_n3:Some(748),sovereign:"Eswatini",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:207,name:"Ethiopia",region:Region::Africa,iso_a2:Some("ET"),iso_a3:Some("ETH"),iso_n3:Some(231),sovereign:"Ethiopia",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:208,name:"Gabon",region:Region::Africa,iso_a2:Some("GA"),iso_a3:Some("GAB"),iso_n3:Some(266),sovereign:"Gabon",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:209,name:"Gambia",region:Region::Africa,iso_a2:Some("GM"),iso_a3:Some("GMB"),iso_n3:Some(270),sovereign:"Gambia",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:210,name:"Ghana",region:Region::Africa,iso_a2:Some("GH"),iso_a3:Some("GHA"),iso_n3:Some(288),sovereign:"Ghana",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:211,name:"Guinea",region:Region::Africa,iso_a2:Some("GN"),iso_a3:Some("GIN"),iso_n3:Some(324),sovereign:"Guinea",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:212,name:"Guinea-Bissau",region:Region::Africa,iso_a2:Some("GW"),iso_a3:Some("GNB"),iso_n3:Some(624),sovereign:"Guinea-Bissau",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:213,name:"Kenya",region:Region::Africa,iso_a2:Some("KE"),iso_a3:Some("KEN"),iso_n3:Some(404),sovereign:"Kenya",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:214,name:"Lesotho",region:Region::Africa,iso_a2:Some("LS"),iso_a3:Some("LSO"),iso_n3:Some(426),sovereign:"Lesotho",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:215,name:"Liberia",region:Region::Africa,iso_a2:Some("LR"),iso_a3:Some("LBR"),iso_n3:Some(430),sovereign:"Liberia",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:216,name:"Libya",region:Region::Africa,iso_a2:Some("LY"),iso_a3:Some("LBY"),iso_n3:Some(434),sovereign:"Libya",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:217,name:"Malawi",region:Region::Africa,iso_a2:Some("MW"),iso_a3:Some("MWI"),iso_n3:Some(454),sovereign:"Malawi",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:218,name:"Mali",region:Region::Africa,iso_a2:Some("ML"),iso_a3:Some("MLI"),iso_n3:Some(466),sovereign:"Mali",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:219,name:"Mauritania",region:Region::Africa,iso_a2:Some("MR"),iso_a3:Some("MRT"),iso_n3:Some(478),sovereign:"Mauritania",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:220,name:"Morocco",region:Region::Africa,iso_a2:Some("MA"),iso_a3:Some("MAR"),iso_n3:Some(504),sovereign:"Morocco",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:221,name:"Morocco Spanish",region:Region::Africa,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Spain",kind:FeatureKind::Territory,strategy:Strategy::Admin1{adm0_a3:"ESP",provinces:&["Ceuta","Melilla"]}},
    DestinationSpec{index:222,name:"Mozambique",region:Region::Africa,iso_a2:Some("MZ"),iso_a3:Some("MOZ"),iso_n3:Some(508),sovereign:"Mozambique",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:223,name:"Namibia",region:Region::Africa,iso_a2:Some("NA"),iso_a3:Some("NAM"),iso_n3:Some(516),sovereign:"Namibia",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:224,name:"Niger",region:Region::Africa,iso_a2:Some("NE"),iso_a3:Some("NER"),iso_n3:Some(562),sovereign:"Niger",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:225,name:"Nigeria",region:Region::Africa,iso_a2:Some("NG"),iso_a3:Some("NGA"),iso_n3:Some(566),sovereign:"Nigeria",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:226,name:"Rwanda",region:Region::Africa,iso_a2:Some("RW"),iso_a3:Some("RWA"),iso_n3:Some(646),sovereign:"Rwanda",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:227,name:"Sao Tome & Principe",region:Region::Africa,iso_a2:Some("ST"),iso_a3:Some("STP"),iso_n3:Some(678),sovereign:"Sao Tome and Principe",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:228,name:"Senegal",region:Region::Africa,iso_a2:Some("SN"),iso_a3:Some("SEN"),iso_n3:Some(686),sovereign:"Senegal",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:229,name:"Sierra Leone",region:Region::Africa,iso_a2:Some("SL"),iso_a3:Some("SLE"),iso_n3:Some(694),sovereign:"Sierra Leone",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:230,name:"Somalia",region:Region::Africa,iso_a2:Some("SO"),iso_a3:Some("SOM"),iso_n3:Some(706),sovereign:"Somalia",kind:FeatureKind::Country,strategy:Strategy::DisputedRemainder{adm0_a3:"SOM",subtract_disputed:&["Somaliland"]}},
    DestinationSpec{index:231,name:"Somaliland",region:Region::Africa,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Somalia",kind:FeatureKind::Disputed,strategy:Strategy::Disputed{name:"Somaliland",also_merge:&[],fallback:None}},
    DestinationSpec{index:232,name:"South Africa",region:Region::Africa,iso_a2:Some("ZA"),iso_a3:Some("ZAF"),iso_n3:Some(710),sovereign:"South Africa",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:233,name:"South Sudan",region:Region::Africa,iso_a2:Some("SS"),iso_a3:Some("SSD"),iso_n3:Some(728),sovereign:"South Sudan",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:234,name:"Sudan",region:Region::Africa,iso_a2:Some("SD"),iso_a3:Some("SDN"),iso_n3:Some(729),sovereign:"Sudan",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:235,name:"Tanzania",region:Region::Africa,iso_a2:Some("TZ"),iso_a3:Some("TZA"),iso_n3:Some(834),sovereign:"Tanzania",kind:FeatureKind::Country,strategy:Strategy::Remainder{adm0_a3:"TZA",subtract_admin1:&["Zanzibar North","Zanzibar South and Central","Zanzibar West","Zanzibar Urban/West"],subtract_disputed:&[],merge_disputed:&[]}},
    DestinationSpec{index:236,name:"Togo",region:Region::Africa,iso_a2:Some("TG"),iso_a3:Some("TGO"),iso_n3:Some(768),sovereign:"Togo",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:237,name:"Tunisia",region:Region::Africa,iso_a2:Some("TN"),iso_a3:Some("TUN"),iso_n3:Some(788),sovereign:"Tunisia",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:238,name:"Uganda",region:Region::Africa,iso_a2:Some("UG"),iso_a3:Some("UGA"),iso_n3:Some(800),sovereign:"Uganda",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:239,name:"Western Sahara",region:Region::Africa,iso_a2:Some("EH"),iso_a3:Some("ESH"),iso_n3:Some(732),sovereign:"Western Sahara",kind:FeatureKind::Disputed,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:240,name:"Zambia",region:Region::Africa,iso_a2:Some("ZM"),iso_a3:Some("ZMB"),iso_n3:Some(894),sovereign:"Zambia",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:241,name:"Zanzibar",region:Region::Africa,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Tanzania",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"TZA",provinces:&["Zanzibar North","Zanzibar South and Central","Zanzibar West","Zanzibar Urban/West"]}},
    DestinationSpec{index:242,name:"Zimbabwe",region:Region::Africa,iso_a2:Some("ZW"),iso_a3:Some("ZWE"),iso_n3:Some(716),sovereign:"Zimbabwe",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},

    // Middle East
    DestinationSpec{index:243,name:"Abu Dhabi",region:Region::MiddleEast,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"United Arab Emirates",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"ARE",provinces:&["Abu Dhabi"]}},
    DestinationSpec{index:244,name:"Ajman",region:Region::MiddleEast,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"United Arab Emirates",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"ARE",provinces:&["Ajman"]}},
    DestinationSpec{index:245,name:"Bahrain",region:Region::MiddleEast,iso_a2:Some("BH"),iso_a3:Some("BHR"),iso_n3:Some(48),sovereign:"Bahrain",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:246,name:"Dubai",region:Region::MiddleEast,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"United Arab Emirates",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"ARE",provinces:&["Dubay"]}},
    DestinationSpec{index:247,name:"Egypt in Asia",region:Region::MiddleEast,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Egypt",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"EGY",provinces:&["North Sinai","South Sinai"]}},
    DestinationSpec{index:248,name:"Fujairah",region:Region::MiddleEast,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"United Arab Emirates",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"ARE",provinces:&["Fujayrah"]}},
    DestinationSpec{index:249,name:"Iran",region:Region::MiddleEast,iso_a2:Some("IR"),iso_a3:Some("IRN"),iso_n3:Some(364),sovereign:"Iran",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:250,name:"Iraq",region:Region::MiddleEast,iso_a2:Some("IQ"),iso_a3:Some("IRQ"),iso_n3:Some(368),sovereign:"Iraq",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:251,name:"Israel",region:Region::MiddleEast,iso_a2:Some("IL"),iso_a3:Some("ISR"),iso_n3:Some(376),sovereign:"Israel",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:252,name:"Jordan",region:Region::MiddleEast,iso_a2:Some("JO"),iso_a3:Some("JOR"),iso_n3:Some(400),sovereign:"Jordan",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:253,name:"Kuwait",region:Region::MiddleEast,iso_a2:Some("KW"),iso_a3:Some("KWT"),iso_n3:Some(414),sovereign:"Kuwait",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:254,name:"Lebanon",region:Region::MiddleEast,iso_a2:Some("LB"),iso_a3:Some("LBN"),iso_n3:Some(422),sovereign:"Lebanon",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:255,name:"Oman",region:Region::MiddleEast,iso_a2:Some("OM"),iso_a3:Some("OMN"),iso_n3:Some(512),sovereign:"Oman",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:256,name:"Palestine",region:Region::MiddleEast,iso_a2:Some("PS"),iso_a3:Some("PSE"),iso_n3:Some(275),sovereign:"Palestine",kind:FeatureKind::Disputed,strategy:Strategy::Direct{code:Some("PSX"),merge:&[]}},
    DestinationSpec{index:257,name:"Qatar",region:Region::MiddleEast,iso_a2:Some("QA"),iso_a3:Some("QAT"),iso_n3:Some(634),sovereign:"Qatar",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:258,name:"Ras Al Khaimah",region:Region::MiddleEast,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"United Arab Emirates",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"ARE",provinces:&["Ras Al Khaymah"]}},
    DestinationSpec{index:259,name:"Saudi Arabia",region:Region::MiddleEast,iso_a2:Some("SA"),iso_a3:Some("SAU"),iso_n3:Some(682),sovereign:"Saudi Arabia",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:260,name:"Sharjah",region:Region::MiddleEast,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"United Arab Emirates",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"ARE",provinces:&["Sharjah"]}},
    DestinationSpec{index:261,name:"Syria",region:Region::MiddleEast,iso_a2:Some("SY"),iso_a3:Some("SYR"),iso_n3:Some(760),sovereign:"Syria",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:262,name:"Umm Al Qaiwain",region:Region::MiddleEast,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"United Arab Emirates",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"ARE",provinces:&["Umm Al Qaywayn"]}},
    DestinationSpec{index:263,name:"Yemen",region:Region::MiddleEast,iso_a2:Some("YE"),iso_a3:Some("YEM"),iso_n3:Some(887),sovereign:"Yemen",kind:FeatureKind::Country,strategy:Strategy::GroupRemainder{adm0_a3:"YEM",subtract_indices:&[277]}},

    // Indian Ocean
    DestinationSpec{index:264,name:"Andaman-Nicobar Islands",region:Region::IndianOcean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"India",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"IND",provinces:&["Andaman and Nicobar"]}},
    DestinationSpec{index:265,name:"British Indian Ocean Territory",region:Region::IndianOcean,iso_a2:Some("IO"),iso_a3:Some("IOT"),iso_n3:Some(86),sovereign:"United Kingdom",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:266,name:"Christmas Island",region:Region::IndianOcean,iso_a2:Some("CX"),iso_a3:Some("CXR"),iso_n3:Some(162),sovereign:"Australia",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:267,name:"Cocos Islands",region:Region::IndianOcean,iso_a2:Some("CC"),iso_a3:Some("CCK"),iso_n3:Some(166),sovereign:"Australia",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:268,name:"Comoros",region:Region::IndianOcean,iso_a2:Some("KM"),iso_a3:Some("COM"),iso_n3:Some(174),sovereign:"Comoros",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:269,name:"Lakshadweep",region:Region::IndianOcean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"India",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"IND",provinces:&["Lakshadweep"]}},
    DestinationSpec{index:270,name:"Madagascar",region:Region::IndianOcean,iso_a2:Some("MG"),iso_a3:Some("MDG"),iso_n3:Some(450),sovereign:"Madagascar",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:271,name:"Maldives",region:Region::IndianOcean,iso_a2:Some("MV"),iso_a3:Some("MDV"),iso_n3:Some(462),sovereign:"Maldives",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:272,name:"Mauritius & Dependencies",region:Region::IndianOcean,iso_a2:Some("MU"),iso_a3:Some("MUS"),iso_n3:Some(480),sovereign:"Mauritius",kind:FeatureKind::Country,strategy:Strategy::GroupRemainder{adm0_a3:"MUS",subtract_indices:&[275]}},
    DestinationSpec{index:273,name:"Mayotte",region:Region::IndianOcean,iso_a2:Some("YT"),iso_a3:Some("MYT"),iso_n3:Some(175),sovereign:"France",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:274,name:"Reunion",region:Region::IndianOcean,iso_a2:Some("RE"),iso_a3:Some("REU"),iso_n3:Some(638),sovereign:"France",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:275,name:"Rodrigues Island",region:Region::IndianOcean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Mauritius",kind:FeatureKind::Territory,strategy:Strategy::IslandBbox{parent:ParentRef::Country("MUS"),bbox:[63.0,-20.5,64.0,-19.0]}},
    DestinationSpec{index:276,name:"Seychelles",region:Region::IndianOcean,iso_a2:Some("SC"),iso_a3:Some("SYC"),iso_n3:Some(690),sovereign:"Seychelles",kind:FeatureKind::Country,strategy:Strategy::GroupRemainder{adm0_a3:"SYC",subtract_indices:&[278]}},
    DestinationSpec{index:277,name:"Socotra",region:Region::IndianOcean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Yemen",kind:FeatureKind::Territory,strategy:Strategy::IslandBbox{parent:ParentRef::Country("YEM"),bbox:[52.0,11.0,55.0,13.0]}},
    DestinationSpec{index:278,name:"Zil Elwannyen Sesel",region:Region::IndianOcean,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Seychelles",kind:FeatureKind::Territory,strategy:Strategy::IslandBbox{parent:ParentRef::Country("SYC"),bbox:[52.0,-10.0,57.0,-3.0]}},

    // Asia
    DestinationSpec{index:279,name:"Abkhazia",region:Region::Asia,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Georgia",kind:FeatureKind::Disputed,strategy:Strategy::Disputed{name:"Abkhazia",also_merge:&[],fallback:None}},
    DestinationSpec{index:280,name:"Afghanistan",region:Region::Asia,iso_a2:Some("AF"),iso_a3:Some("AFG"),iso_n3:Some(4),sovereign:"Afghanistan",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:281,name:"Armenia",region:Region::Asia,iso_a2:Some("AM"),iso_a3:Some("ARM"),iso_n3:Some(51),sovereign:"Armenia",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:282,name:"Azerbaijan",region:Region::Asia,iso_a2:Some("AZ"),iso_a3:Some("AZE"),iso_n3:Some(31),sovereign:"Azerbaijan",kind:FeatureKind::Country,strategy:Strategy::Remainder{adm0_a3:"AZE",subtract_admin1:&["Naxçıvan"],subtract_disputed:&[],merge_disputed:&[]}},
    DestinationSpec{index:283,name:"Bangladesh",region:Region::Asia,iso_a2:Some("BD"),iso_a3:Some("BGD"),iso_n3:Some(50),sovereign:"Bangladesh",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:284,name:"Bhutan",region:Region::Asia,iso_a2:Some("BT"),iso_a3:Some("BTN"),iso_n3:Some(64),sovereign:"Bhutan",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:285,name:"Brunei",region:Region::Asia,iso_a2:Some("BN"),iso_a3:Some("BRN"),iso_n3:Some(96),sovereign:"Brunei",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:286,name:"Cambodia",region:Region::Asia,iso_a2:Some("KH"),iso_a3:Some("KHM"),iso_n3:Some(116),sovereign:"Cambodia",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:287,name:"China People's Republic",region:Region::Asia,iso_a2:Some("CN"),iso_a3:Some("CHN"),iso_n3:Some(156),sovereign:"China",kind:FeatureKind::Country,strategy:Strategy::Remainder{adm0_a3:"CHN",subtract_admin1:&["Hainan","Xizang"],subtract_disputed:&[],merge_disputed:&[]}},
    DestinationSpec{index:288,name:"Georgia",region:Region::Asia,iso_a2:Some("GE"),iso_a3:Some("GEO"),iso_n3:Some(268),sovereign:"Georgia",kind:FeatureKind::Country,strategy:Strategy::DisputedRemainder{adm0_a3:"GEO",subtract_disputed:&["Abkhazia","South Ossetia"]}},
    DestinationSpec{index:289,name:"Hainan Island",region:Region::Asia,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"China",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"CHN",provinces:&["Hainan"]}},
    DestinationSpec{index:290,name:"Hong Kong",region:Region::Asia,iso_a2:Some("HK"),iso_a3:Some("HKG"),iso_n3:Some(344),sovereign:"China",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:291,name:"India",region:Region::Asia,iso_a2:Some("IN"),iso_a3:Some("IND"),iso_n3:Some(356),sovereign:"India",kind:FeatureKind::Country,strategy:Strategy::Remainder{adm0_a3:"IND",subtract_admin1:&["Sikkim","Andaman and Nicobar","Lakshadweep"],subtract_disputed:&["Kashmir"],merge_disputed:&[]}},
    DestinationSpec{index:292,name:"Indonesia Java",region:Region::Asia,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Indonesia",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"IDN",provinces:&["Jakarta Raya","Banten","Jawa Barat","Jawa Tengah","Jawa Timur","Yogyakarta"]}},
    DestinationSpec{index:293,name:"Japan",region:Region::Asia,iso_a2:Some("JP"),iso_a3:Some("JPN"),iso_n3:Some(392),sovereign:"Japan",kind:FeatureKind::Country,strategy:Strategy::Remainder{adm0_a3:"JPN",subtract_admin1:&["Okinawa"],subtract_disputed:&[],merge_disputed:&[]}},
    DestinationSpec{index:294,name:"Jeju Island",region:Region::Asia,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"South Korea",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"KOR",provinces:&["Jeju"]}},
    DestinationSpec{index:295,name:"Kalimantan",region:Region::Asia,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Indonesia",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"IDN",provinces:&["Kalimantan Barat","Kalimantan Selatan","Kalimantan Tengah","Kalimantan Timur","Kalimantan Utara"]}},
    DestinationSpec{index:296,name:"Kashmir",region:Region::Asia,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Disputed",kind:FeatureKind::Disputed,strategy:Strategy::Disputed{name:"Kashmir",also_merge:&["Siachen Glacier"],fallback:None}},
    DestinationSpec{index:297,name:"Kazakhstan",region:Region::Asia,iso_a2:Some("KZ"),iso_a3:Some("KAZ"),iso_n3:Some(398),sovereign:"Kazakhstan",kind:FeatureKind::Country,strategy:Strategy::Direct{code:Some("KAZ"),merge:&["KAB"]}},
    DestinationSpec{index:298,name:"Korea North",region:Region::Asia,iso_a2:Some("KP"),iso_a3:Some("PRK"),iso_n3:Some(408),sovereign:"North Korea",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:299,name:"Korea South",region:Region::Asia,iso_a2:Some("KR"),iso_a3:Some("KOR"),iso_n3:Some(410),sovereign:"South Korea",kind:FeatureKind::Country,strategy:Strategy::Remainder{adm0_a3:"KOR",subtract_admin1:&["Jeju"],subtract_disputed:&[],merge_disputed:&[]}},
    DestinationSpec{index:300,name:"Kyrgyzstan",region:Region::Asia,iso_a2:Some("KG"),iso_a3:Some("KGZ"),iso_n3:Some(417),sovereign:"Kyrgyzstan",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:301,name:"Laos",region:Region::Asia,iso_a2:Some("LA"),iso_a3:Some("LAO"),iso_n3:Some(418),sovereign:"Laos",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:302,name:"Lesser Sunda Islands",region:Region::Asia,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Indonesia",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"IDN",provinces:&["Bali","Nusa Tenggara Barat","Nusa Tenggara Timur"]}},
    DestinationSpec{index:303,name:"Macau",region:Region::Asia,iso_a2:Some("MO"),iso_a3:Some("MAC"),iso_n3:Some(446),sovereign:"China",kind:FeatureKind::Territory,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:304,name:"Malaysia",region:Region::Asia,iso_a2:Some("MY"),iso_a3:Some("MYS"),iso_n3:Some(458),sovereign:"Malaysia",kind:FeatureKind::Country,strategy:Strategy::Remainder{adm0_a3:"MYS",subtract_admin1:&["Sabah","Sarawak"],subtract_disputed:&[],merge_disputed:&[]}},
    DestinationSpec{index:305,name:"Maluku Islands",region:Region::Asia,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Indonesia",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"IDN",provinces:&["Maluku","Maluku Utara"]}},
    DestinationSpec{index:306,name:"Mongolia",region:Region::Asia,iso_a2:Some("MN"),iso_a3:Some("MNG"),iso_n3:Some(496),sovereign:"Mongolia",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:307,name:"Myanmar",region:Region::Asia,iso_a2:Some("MM"),iso_a3:Some("MMR"),iso_n3:Some(104),sovereign:"Myanmar",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:308,name:"Nakhchivan",region:Region::Asia,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Azerbaijan",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"AZE",provinces:&["Naxçıvan"]}},
    DestinationSpec{index:309,name:"Nepal",region:Region::Asia,iso_a2:Some("NP"),iso_a3:Some("NPL"),iso_n3:Some(524),sovereign:"Nepal",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:310,name:"Pakistan",region:Region::Asia,iso_a2:Some("PK"),iso_a3:Some("PAK"),iso_n3:Some(586),sovereign:"Pakistan",kind:FeatureKind::Country,strategy:Strategy::DisputedRemainder{adm0_a3:"PAK",subtract_disputed:&["Kashmir"]}},
    DestinationSpec{index:311,name:"Papua",region:Region::Asia,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Indonesia",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"IDN",provinces:&["Papua","Papua Barat"]}},
    DestinationSpec{index:312,name:"Philippines",region:Region::Asia,iso_a2:Some("PH"),iso_a3:Some("PHL"),iso_n3:Some(608),sovereign:"Philippines",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:313,name:"Russia in Asia",region:Region::Asia,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Russia",kind:FeatureKind::Subnational,strategy:Strategy::Clip{adm0_a3:"RUS",side:ContinentSide::Asia,absorb_lon:Some((30.0,59.0)),subtract_indices:&[],subtract_su_a3:&[]}},
    DestinationSpec{index:314,name:"Sabah",region:Region::Asia,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Malaysia",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"MYS",provinces:&["Sabah"]}},
    DestinationSpec{index:315,name:"Sarawak",region:Region::Asia,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Malaysia",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"MYS",provinces:&["Sarawak"]}},
    DestinationSpec{index:316,name:"Sikkim",region:Region::Asia,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"India",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"IND",provinces:&["Sikkim"]}},
    DestinationSpec{index:317,name:"Singapore",region:Region::Asia,iso_a2:Some("SG"),iso_a3:Some("SGP"),iso_n3:Some(702),sovereign:"Singapore",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:318,name:"South Ossetia",region:Region::Asia,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Georgia",kind:FeatureKind::Disputed,strategy:Strategy::Disputed{name:"South Ossetia",also_merge:&[],fallback:None}},
    DestinationSpec{index:319,name:"Sri Lanka",region:Region::Asia,iso_a2:Some("LK"),iso_a3:Some("LKA"),iso_n3:Some(144),sovereign:"Sri Lanka",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:320,name:"Sulawesi",region:Region::Asia,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Indonesia",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"IDN",provinces:&["Sulawesi Barat","Sulawesi Selatan","Sulawesi Tengah","Sulawesi Tenggara","Sulawesi Utara","Gorontalo"]}},
    DestinationSpec{index:321,name:"Sumatra",region:Region::Asia,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Indonesia",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"IDN",provinces:&["Aceh","Bengkulu","Jambi","Kepulauan Bangka Belitung","Kepulauan Riau","Lampung","Riau","Sumatera Barat","Sumatera Selatan","Sumatera Utara"]}},
    DestinationSpec{index:322,name:"Taiwan",region:Region::Asia,iso_a2:Some("TW"),iso_a3:Some("TWN"),iso_n3:Some(158),sovereign:"Taiwan",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:323,name:"Tajikistan",region:Region::Asia,iso_a2:Some("TJ"),iso_a3:Some("TJK"),iso_n3:Some(762),sovereign:"Tajikistan",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:324,name:"Thailand",region:Region::Asia,iso_a2:Some("TH"),iso_a3:Some("THA"),iso_n3:Some(764),sovereign:"Thailand",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:325,name:"Tibet",region:Region::Asia,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"China",kind:FeatureKind::Subnational,strategy:Strategy::Admin1{adm0_a3:"CHN",provinces:&["Xizang"]}},
    DestinationSpec{index:326,name:"Timor-Leste",region:Region::Asia,iso_a2:Some("TL"),iso_a3:Some("TLS"),iso_n3:Some(626),sovereign:"Timor-Leste",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:327,name:"Turkey in Asia",region:Region::Asia,iso_a2:None,iso_a3:None,iso_n3:None,sovereign:"Turkey",kind:FeatureKind::Subnational,strategy:Strategy::Clip{adm0_a3:"TUR",side:ContinentSide::Asia,absorb_lon:None,subtract_indices:&[],subtract_su_a3:&[]}},
    DestinationSpec{index:328,name:"Turkmenistan",region:Region::Asia,iso_a2:Some("TM"),iso_a3:Some("TKM"),iso_n3:Some(795),sovereign:"Turkmenistan",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:329,name:"Uzbekistan",region:Region::Asia,iso_a2:Some("UZ"),iso_a3:Some("UZB"),iso_n3:Some(860),sovereign:"Uzbekistan",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
    DestinationSpec{index:330,name:"Vietnam",region:Region::Asia,iso_a2:Some("VN"),iso_a3:Some("VNM"),iso_n3:Some(704),sovereign:"Vietnam",kind:FeatureKind::Country,strategy:Strategy::Direct{code:None,merge:&[]}},
];

#[cfg(test)]
mod test {

    use super::DestinationSpec;
    use super::FeatureKind;
    use super::Region;
    use super::Registry;
    use super::Strategy;
    use super::DESTINATIONS;

    #[test]
    fn test_standard_registry_is_valid() {

        let registry = Registry::standard().expect("table should have passed its invariants");

        assert_eq!(registry.get_all().len(), 330);
        assert_eq!(registry.get(181).expect("get").name, "Argentine Antarctica");
        assert_eq!(registry.get(42).expect("get").name, "Canada");
        assert!(registry.get(331).is_err());

    }

    #[test]
    fn test_every_index_maps_to_its_band_region() {

        for spec in &DESTINATIONS {
            assert_eq!(Region::for_index(spec.index), Some(spec.region), "[{}] {}", spec.index, spec.name);
        }
        assert_eq!(Region::for_index(0), None);
        assert_eq!(Region::for_index(331), None);

    }

    #[test]
    fn test_published_counts_total_330() {

        assert_eq!(Region::ALL.iter().map(|r| r.published_count()).sum::<usize>(), 330);

    }

    #[test]
    fn test_iso_codes_are_well_formed() {

        for spec in &DESTINATIONS {
            if let Some(a2) = spec.iso_a2 {
                assert!(a2.len() == 2 && a2.chars().all(|c| c.is_ascii_uppercase()), "[{}] iso_a2 {:?}", spec.index, a2);
            }
            if let Some(a3) = spec.iso_a3 {
                assert!(a3.len() == 3 && a3.chars().all(|c| c.is_ascii_uppercase()), "[{}] iso_a3 {:?}", spec.index, a3);
            }
            if let Some(n3) = spec.iso_n3 {
                assert!(n3 <= 999, "[{}] iso_n3 {}", spec.index, n3);
            }
            // a numeric code without an alpha-3 would be garbled
            if spec.iso_n3.is_some() {
                assert!(spec.iso_a3.is_some(), "[{}]", spec.index);
            }
        }

    }

    #[test]
    fn test_group_remainders_only_reference_first_pass_strategies() {

        let registry = Registry::standard().expect("registry");
        for spec in registry.get_all() {
            if let Strategy::GroupRemainder { subtract_indices, .. } = spec.strategy {
                for subtracted in subtract_indices {
                    let target = registry.get(*subtracted).expect("referenced index should exist");
                    assert!(!matches!(target.strategy, Strategy::GroupRemainder { .. }), "[{}] depends on another group remainder [{}]", spec.index, subtracted);
                }
            }
            if let Strategy::Clip { subtract_indices, .. } = spec.strategy {
                for subtracted in subtract_indices {
                    assert!(*subtracted < spec.index, "[{}] clip subtracts a later index [{}]", spec.index, subtracted);
                }
            }
        }

    }

    #[test]
    fn test_antarctic_band_is_all_wedges() {

        for spec in &DESTINATIONS {
            let is_antarctic_strategy = matches!(spec.strategy, Strategy::Antarctic { .. });
            assert_eq!(spec.kind == FeatureKind::Antarctic, is_antarctic_strategy, "[{}]", spec.index);
        }

    }

    #[test]
    fn test_misordered_table_is_rejected() {

        let mut specs: Vec<DestinationSpec> = DESTINATIONS.to_vec();
        specs.swap(0, 1);
        assert!(Registry::from_specs(specs).is_err());

        let mut specs: Vec<DestinationSpec> = DESTINATIONS.to_vec();
        specs[41].index = 41; // duplicate 41, index 42 gone
        assert!(Registry::from_specs(specs).is_err());

    }

}
