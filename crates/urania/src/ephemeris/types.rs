use serde::{Deserialize, Serialize};
use std::fmt;

/// Celestial bodies resolved for a natal chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Rahu,
    Ketu,
}

/// Bodies in the order they are computed and reported.
pub const CHART_BODIES: &[Body] = &[
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
    Body::Rahu,
    Body::Ketu,
];

impl Body {
    pub fn id(self) -> &'static str {
        match self {
            Body::Sun => "sun",
            Body::Moon => "moon",
            Body::Mercury => "mercury",
            Body::Venus => "venus",
            Body::Mars => "mars",
            Body::Jupiter => "jupiter",
            Body::Saturn => "saturn",
            Body::Uranus => "uranus",
            Body::Neptune => "neptune",
            Body::Pluto => "pluto",
            Body::Rahu => "rahu",
            Body::Ketu => "ketu",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
            Body::Rahu => "Rahu",
            Body::Ketu => "Ketu",
        }
    }

    /// Swiss Ephemeris planet number. Ketu has none: it is always derived from Rahu.
    pub fn swe_id(self) -> Option<i32> {
        match self {
            Body::Sun => Some(0),
            Body::Moon => Some(1),
            Body::Mercury => Some(2),
            Body::Venus => Some(3),
            Body::Mars => Some(4),
            Body::Jupiter => Some(5),
            Body::Saturn => Some(6),
            Body::Uranus => Some(7),
            Body::Neptune => Some(8),
            Body::Pluto => Some(9),
            Body::Rahu => Some(11), // TRUE_NODE
            Body::Ketu => None,
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw provider output for one body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawBodyPosition {
    /// Ecliptic longitude in degrees, not necessarily normalized
    pub longitude: f64,
    /// Speed in longitude (degrees per day)
    pub speed: f64,
}

/// Raw provider output for a house computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawHouses {
    pub ascendant: f64,
    pub vertex: f64,
    /// Cusps 1..12 in order
    pub cusps: Vec<f64>,
}

/// House systems understood by the provider. Charts use whole-sign houses only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    WholeSign,
}

impl HouseSystem {
    /// Swiss Ephemeris house-system byte.
    pub fn code(self) -> u8 {
        match self {
            HouseSystem::WholeSign => b'W',
        }
    }
}

/// Calculation flags passed with every provider request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcFlags {
    pub sidereal: bool,
    pub speed: bool,
}

impl Default for CalcFlags {
    fn default() -> Self {
        Self {
            sidereal: true,
            speed: true,
        }
    }
}

impl CalcFlags {
    /// Swiss Ephemeris flag bits. Sidereal correction is applied by the adapter,
    /// so FLG_SIDEREAL is never forwarded to the library.
    pub fn swe_bits(self) -> i32 {
        // FLG_SWIEPH = 2
        let mut flags = 2;
        if self.speed {
            flags |= 256; // FLG_SPEED
        }
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_sign_code() {
        assert_eq!(HouseSystem::WholeSign.code(), b'W');
    }

    #[test]
    fn test_swe_bits() {
        assert_eq!(CalcFlags::default().swe_bits(), 2 | 256);
        let no_speed = CalcFlags {
            sidereal: true,
            speed: false,
        };
        assert_eq!(no_speed.swe_bits(), 2);
    }

    #[test]
    fn test_ketu_has_no_swiss_number() {
        assert_eq!(Body::Rahu.swe_id(), Some(11));
        assert_eq!(Body::Ketu.swe_id(), None);
        assert!(CHART_BODIES.iter().filter(|b| b.swe_id().is_none()).count() == 1);
    }
}
