//! The twelve signs and longitude to sign/degree resolution.

use crate::ephemeris::Body;
use crate::zodiac::normalize_degrees;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Movable,
    Fixed,
    Dual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignInfo {
    pub name: &'static str,
    /// Traditional ruler
    pub ruler: Body,
    pub element: Element,
    pub modality: Modality,
}

pub const SIGNS: [SignInfo; 12] = [
    SignInfo { name: "Aries", ruler: Body::Mars, element: Element::Fire, modality: Modality::Movable },
    SignInfo { name: "Taurus", ruler: Body::Venus, element: Element::Earth, modality: Modality::Fixed },
    SignInfo { name: "Gemini", ruler: Body::Mercury, element: Element::Air, modality: Modality::Dual },
    SignInfo { name: "Cancer", ruler: Body::Moon, element: Element::Water, modality: Modality::Movable },
    SignInfo { name: "Leo", ruler: Body::Sun, element: Element::Fire, modality: Modality::Fixed },
    SignInfo { name: "Virgo", ruler: Body::Mercury, element: Element::Earth, modality: Modality::Dual },
    SignInfo { name: "Libra", ruler: Body::Venus, element: Element::Air, modality: Modality::Movable },
    SignInfo { name: "Scorpio", ruler: Body::Mars, element: Element::Water, modality: Modality::Fixed },
    SignInfo { name: "Sagittarius", ruler: Body::Jupiter, element: Element::Fire, modality: Modality::Dual },
    SignInfo { name: "Capricorn", ruler: Body::Saturn, element: Element::Earth, modality: Modality::Movable },
    SignInfo { name: "Aquarius", ruler: Body::Saturn, element: Element::Air, modality: Modality::Fixed },
    SignInfo { name: "Pisces", ruler: Body::Jupiter, element: Element::Water, modality: Modality::Dual },
];

/// Sign and degree-in-sign of a longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignPosition {
    #[serde(rename = "signIndex")]
    pub sign_index: u8,
    pub sign: &'static str,
    #[serde(rename = "degreeInSign")]
    pub degree_in_sign: f64,
}

/// Get sign index (0-11) from longitude
pub fn get_sign_index(longitude: f64) -> u8 {
    let normalized = normalize_degrees(longitude);
    ((normalized / 30.0).floor() as u8) % 12
}

pub fn get_sign(sign_index: u8) -> &'static SignInfo {
    &SIGNS[(sign_index % 12) as usize]
}

/// Get sign ruler (traditional rulership)
pub fn get_sign_ruler(sign_index: u8) -> Body {
    get_sign(sign_index).ruler
}

pub fn resolve_sign(longitude: f64) -> SignPosition {
    let lon = normalize_degrees(longitude);
    let sign_index = get_sign_index(lon);
    SignPosition {
        sign_index,
        sign: get_sign(sign_index).name,
        degree_in_sign: lon % 30.0,
    }
}
