//! Divisional chart (varga) helpers for Vedic astrology.
//!
//! Each varga is built harmonically: every longitude, the ascendant included,
//! is multiplied by the division factor and wrapped back onto the zodiac. Houses
//! are then whole-sign houses from the divisional ascendant.

use crate::chart::types::PlanetPlacement;
use crate::zodiac::{normalize_degrees, resolve_sign, whole_sign_house};
use serde::Serialize;

pub struct VargaSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub division: u32,
}

pub const SUPPORTED_VARGAS: &[VargaSpec] = &[
    VargaSpec { id: "d4", label: "Chaturthamsa", division: 4 },
    VargaSpec { id: "d7", label: "Saptamsa", division: 7 },
    VargaSpec { id: "d9", label: "Navamsa", division: 9 },
    VargaSpec { id: "d10", label: "Dasamsa", division: 10 },
    VargaSpec { id: "d30", label: "Trimsamsa", division: 30 },
];

#[derive(Debug, Clone, Serialize)]
pub struct VargaPosition {
    pub body: crate::ephemeris::Body,
    pub longitude: f64,
    #[serde(rename = "signIndex")]
    pub sign_index: u8,
    pub sign: &'static str,
    #[serde(rename = "degreeInSign")]
    pub degree_in_sign: f64,
    pub house: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct DivisionalChart {
    #[serde(rename = "vargaId")]
    pub varga_id: &'static str,
    pub label: &'static str,
    pub factor: u32,
    #[serde(rename = "ascendantLongitude")]
    pub ascendant_longitude: f64,
    #[serde(rename = "ascendantSignIndex")]
    pub ascendant_sign_index: u8,
    #[serde(rename = "ascendantSign")]
    pub ascendant_sign: &'static str,
    pub positions: Vec<VargaPosition>,
}

/// Harmonic longitude: `normalize(longitude * factor)`.
pub fn varga_longitude(longitude: f64, factor: u32) -> f64 {
    normalize_degrees(normalize_degrees(longitude) * factor as f64)
}

/// Build one divisional chart for `spec`.
pub fn build_divisional_chart(
    spec: &VargaSpec,
    ascendant: f64,
    planets: &[PlanetPlacement],
) -> DivisionalChart {
    let asc_lon = varga_longitude(ascendant, spec.division);
    let asc_sign = resolve_sign(asc_lon);

    let positions = planets
        .iter()
        .filter(|p| p.longitude.is_finite())
        .map(|p| {
            let lon = varga_longitude(p.longitude, spec.division);
            let sign = resolve_sign(lon);
            VargaPosition {
                body: p.body,
                longitude: lon,
                sign_index: sign.sign_index,
                sign: sign.sign,
                degree_in_sign: sign.degree_in_sign,
                house: whole_sign_house(sign.sign_index, asc_sign.sign_index),
            }
        })
        .collect();

    DivisionalChart {
        varga_id: spec.id,
        label: spec.label,
        factor: spec.division,
        ascendant_longitude: asc_lon,
        ascendant_sign_index: asc_sign.sign_index,
        ascendant_sign: asc_sign.sign,
        positions,
    }
}

/// Build every supported divisional chart, in factor order.
pub fn build_divisional_charts(ascendant: f64, planets: &[PlanetPlacement]) -> Vec<DivisionalChart> {
    SUPPORTED_VARGAS
        .iter()
        .map(|spec| build_divisional_chart(spec, ascendant, planets))
        .collect()
}
