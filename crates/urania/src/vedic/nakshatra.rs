//! Nakshatra utilities for Vedic astrology.
//!
//! Nakshatras are 27 lunar mansions, each spanning 13°20' (360/27 degrees).
//! Each nakshatra is divided into 4 padas (quarters).

use crate::ephemeris::Body;
use crate::zodiac::normalize_degrees;
use serde::{Deserialize, Serialize};

pub const NAKSHATRA_COUNT: usize = 27;
pub const NAKSHATRA_SEGMENT_SIZE: f64 = 360.0 / 27.0;
pub const PADA_SIZE: f64 = NAKSHATRA_SEGMENT_SIZE / 4.0;

/// The four aims of life (purusharthas) a nakshatra is oriented to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifeAim {
    Dharma,
    Artha,
    Kama,
    Moksha,
}

impl LifeAim {
    pub fn name(self) -> &'static str {
        match self {
            LifeAim::Dharma => "Dharma",
            LifeAim::Artha => "Artha",
            LifeAim::Kama => "Kama",
            LifeAim::Moksha => "Moksha",
        }
    }
}

use LifeAim::{Artha, Dharma, Kama, Moksha};

// (slug, display_name, vimshottari lord, deity, aim)
pub const NAKSHATRA_ORDER: &[(&str, &str, Body, &str, LifeAim)] = &[
    ("ashwini", "Ashwini", Body::Ketu, "Ashwini Kumaras", Dharma),
    ("bharani", "Bharani", Body::Venus, "Yama", Artha),
    ("krittika", "Krittika", Body::Sun, "Agni", Kama),
    ("rohini", "Rohini", Body::Moon, "Brahma", Moksha),
    ("mrigashira", "Mrigashira", Body::Mars, "Soma", Moksha),
    ("ardra", "Ardra", Body::Rahu, "Rudra", Kama),
    ("punarvasu", "Punarvasu", Body::Jupiter, "Aditi", Artha),
    ("pushya", "Pushya", Body::Saturn, "Brihaspati", Dharma),
    ("ashlesha", "Ashlesha", Body::Mercury, "Nagas", Dharma),
    ("magha", "Magha", Body::Ketu, "Pitris", Artha),
    ("purva_phalguni", "Purva Phalguni", Body::Venus, "Bhaga", Kama),
    ("uttara_phalguni", "Uttara Phalguni", Body::Sun, "Aryaman", Moksha),
    ("hasta", "Hasta", Body::Moon, "Savitar", Moksha),
    ("chitra", "Chitra", Body::Mars, "Tvashtar", Kama),
    ("swati", "Swati", Body::Rahu, "Vayu", Artha),
    ("vishakha", "Vishakha", Body::Jupiter, "Indra-Agni", Dharma),
    ("anuradha", "Anuradha", Body::Saturn, "Mitra", Dharma),
    ("jyeshtha", "Jyeshtha", Body::Mercury, "Indra", Artha),
    ("mula", "Mula", Body::Ketu, "Nirriti", Kama),
    ("purva_ashadha", "Purva Ashadha", Body::Venus, "Apas", Moksha),
    ("uttara_ashadha", "Uttara Ashadha", Body::Sun, "Vishvedevas", Moksha),
    ("shravana", "Shravana", Body::Moon, "Vishnu", Artha),
    ("dhanishta", "Dhanishta", Body::Mars, "Vasus", Dharma),
    ("shatabhisha", "Shatabhisha", Body::Rahu, "Varuna", Dharma),
    ("purva_bhadrapada", "Purva Bhadrapada", Body::Jupiter, "Aja Ekapada", Artha),
    ("uttara_bhadrapada", "Uttara Bhadrapada", Body::Saturn, "Ahir Budhnya", Kama),
    ("revati", "Revati", Body::Mercury, "Pushan", Moksha),
];

#[derive(Debug, Clone, Serialize)]
pub struct BaseNakshatraRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub lord: Body,
    pub deity: &'static str,
    pub aim: LifeAim,
    pub start: f64,
    pub end: f64,
    pub index: usize,
}

/// Where a longitude falls within the nakshatra wheel.
#[derive(Debug, Clone, Serialize)]
pub struct NakshatraPlacement {
    pub index: usize,
    pub id: &'static str,
    pub name: &'static str,
    pub lord: Body,
    pub deity: &'static str,
    pub aim: LifeAim,
    /// 1..=4
    pub pada: u8,
    /// Fraction of the nakshatra already traversed, in [0, 1)
    pub progress: f64,
}

fn build_nakshatra_table() -> Vec<BaseNakshatraRecord> {
    NAKSHATRA_ORDER
        .iter()
        .enumerate()
        .map(|(idx, (slug, display_name, lord, deity, aim))| {
            let start = idx as f64 * NAKSHATRA_SEGMENT_SIZE;
            BaseNakshatraRecord {
                id: *slug,
                name: *display_name,
                lord: *lord,
                deity: *deity,
                aim: *aim,
                start,
                end: start + NAKSHATRA_SEGMENT_SIZE,
                index: idx,
            }
        })
        .collect()
}

lazy_static::lazy_static! {
    static ref NAKSHATRA_TABLE: Vec<BaseNakshatraRecord> = build_nakshatra_table();
}

pub fn nakshatra_record(index: usize) -> &'static BaseNakshatraRecord {
    &NAKSHATRA_TABLE[index % NAKSHATRA_COUNT]
}

/// Nakshatra index (0-26) of a longitude.
pub fn nakshatra_index(longitude: f64) -> usize {
    let lon = normalize_degrees(longitude);
    (lon / NAKSHATRA_SEGMENT_SIZE).floor() as usize % NAKSHATRA_COUNT
}

/// Pada (1-4) of a longitude within its nakshatra.
pub fn pada(longitude: f64) -> u8 {
    let offset = normalize_degrees(longitude) % NAKSHATRA_SEGMENT_SIZE;
    // clamp guards the float edge where offset rounds up to a full segment
    ((offset / PADA_SIZE).floor() as u8 + 1).min(4)
}

/// Return the placement of the nakshatra containing the given longitude.
pub fn get_nakshatra_for_longitude(longitude: f64) -> NakshatraPlacement {
    let lon = normalize_degrees(longitude);
    let entry = nakshatra_record(nakshatra_index(lon));
    let offset = lon % NAKSHATRA_SEGMENT_SIZE;

    NakshatraPlacement {
        index: entry.index,
        id: entry.id,
        name: entry.name,
        lord: entry.lord,
        deity: entry.deity,
        aim: entry.aim,
        pada: pada(lon),
        progress: offset / NAKSHATRA_SEGMENT_SIZE,
    }
}
