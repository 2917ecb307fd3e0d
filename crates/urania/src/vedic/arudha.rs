//! Arudha Lagna: the ascendant reflected through the sign its lord occupies.
//!
//! `arudha = (ascendant sign + lord's sign) mod 12`. The classical exception that
//! moves a result falling in the 1st or 7th house is not applied.

use crate::chart::types::PlanetPlacement;
use crate::ephemeris::Body;
use crate::zodiac::{get_sign, get_sign_ruler};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ArudhaLagna {
    #[serde(rename = "ascendantSignIndex")]
    pub ascendant_sign_index: u8,
    pub lord: Body,
    #[serde(rename = "lordSignIndex")]
    pub lord_sign_index: u8,
    #[serde(rename = "signIndex")]
    pub sign_index: u8,
    pub sign: &'static str,
}

/// Returns `None` when the ascendant lord has no resolved position.
pub fn compute_arudha_lagna(asc_sign_index: u8, planets: &[PlanetPlacement]) -> Option<ArudhaLagna> {
    let lord = get_sign_ruler(asc_sign_index);
    let lord_sign_index = planets.iter().find(|p| p.body == lord)?.placement.sign.sign_index;
    let sign_index = (asc_sign_index % 12 + lord_sign_index) % 12;

    Some(ArudhaLagna {
        ascendant_sign_index: asc_sign_index % 12,
        lord,
        lord_sign_index,
        sign_index,
        sign: get_sign(sign_index).name,
    })
}
