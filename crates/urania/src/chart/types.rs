use crate::aspects::AspectRecord;
use crate::ephemeris::Body;
use crate::vedic::{
    get_nakshatra_for_longitude, ArudhaLagna, DashaState, DivisionalChart, KarakaRank,
    NakshatraPlacement,
};
use crate::zodiac::{resolve_sign, whole_sign_house, SignPosition};
use serde::{Deserialize, Serialize};

/// Sign, nakshatra and house of a longitude within a chart.
#[derive(Debug, Clone, Serialize)]
pub struct Placement {
    #[serde(flatten)]
    pub sign: SignPosition,
    pub nakshatra: NakshatraPlacement,
    pub house: u8,
}

impl Placement {
    /// Resolve a longitude against an ascendant sign.
    pub fn resolve(longitude: f64, asc_sign_index: u8) -> Self {
        let sign = resolve_sign(longitude);
        Self {
            house: whole_sign_house(sign.sign_index, asc_sign_index),
            nakshatra: get_nakshatra_for_longitude(longitude),
            sign,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanetPlacement {
    pub body: Body,
    pub longitude: f64,
    /// Degrees per day
    pub speed: f64,
    pub retrograde: bool,
    #[serde(flatten)]
    pub placement: Placement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensitivePointKind {
    Vertex,
    ParsFortuna,
}

impl SensitivePointKind {
    pub fn id(self) -> &'static str {
        match self {
            SensitivePointKind::Vertex => "vertex",
            SensitivePointKind::ParsFortuna => "pars_fortuna",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SensitivePointKind::Vertex => "Vertex",
            SensitivePointKind::ParsFortuna => "Pars Fortuna",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SensitivePoint {
    pub kind: SensitivePointKind,
    pub longitude: f64,
    #[serde(flatten)]
    pub placement: Placement,
}

#[derive(Debug, Clone, Serialize)]
pub struct AscendantInfo {
    pub longitude: f64,
    #[serde(flatten)]
    pub placement: Placement,
}

/// Birth data as it was used for the computation.
#[derive(Debug, Clone, Serialize)]
pub struct BirthDetails {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "julianDay")]
    pub julian_day: f64,
}

/// Everything derived for one birth moment.
#[derive(Debug, Clone, Serialize)]
pub struct NatalSnapshot {
    pub birth: BirthDetails,
    pub time_unknown: bool,
    pub ayanamsa: &'static str,
    pub ascendant: AscendantInfo,
    pub planets: Vec<PlanetPlacement>,
    pub sensitive_points: Vec<SensitivePoint>,
    pub is_day_chart: Option<bool>,
    pub aspects: Vec<AspectRecord>,
    pub karakas: Vec<KarakaRank>,
    pub arudha_lagna: Option<ArudhaLagna>,
    pub divisional_charts: Vec<DivisionalChart>,
    pub dasha: Option<DashaState>,
    pub retrograde: Vec<Body>,
    pub report: String,
}

impl NatalSnapshot {
    pub fn planet(&self, body: Body) -> Option<&PlanetPlacement> {
        self.planets.iter().find(|p| p.body == body)
    }

    pub fn sensitive_point(&self, kind: SensitivePointKind) -> Option<&SensitivePoint> {
        self.sensitive_points.iter().find(|p| p.kind == kind)
    }
}
