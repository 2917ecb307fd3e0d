use crate::ephemeris::ayanamsa::Ayanamsa;
use crate::ephemeris::provider::EphemerisProvider;
use crate::ephemeris::types::{Body, CalcFlags, HouseSystem, RawBodyPosition, RawHouses};
use crate::zodiac::normalize_degrees;
use std::env;
use std::path::{Path, PathBuf};
use swisseph::swe::{calc_ut, houses_ex, julday};
use swisseph::Cusp;
use thiserror::Error;

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Invalid ayanamsa: {ayanamsa}. Valid ayanamsas: {valid:?}")]
    InvalidAyanamsa { ayanamsa: String, valid: Vec<String> },
    #[error("Failed to calculate position for {body} at JD {julian_day}: {message}")]
    CalculationFailed {
        body: String,
        julian_day: f64,
        message: String,
    },
    #[error("House calculation failed: {message}")]
    HouseCalculationFailed { message: String },
}

const DEFAULT_EPHEMERIS_PATH: &str = "/usr/local/share/swisseph";

/// Resolve the ephemeris data directory: explicit path, then `SWISS_EPHEMERIS_PATH`,
/// then the system default.
pub fn resolve_ephemeris_path(explicit: Option<&Path>) -> PathBuf {
    explicit.map(Path::to_path_buf).unwrap_or_else(|| {
        env::var("SWISS_EPHEMERIS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_EPHEMERIS_PATH))
    })
}

/// Swiss Ephemeris adapter implementation
///
/// Positions are requested tropically and shifted by the configured ayanamsa
/// here, so the sidereal frame does not depend on library-global state.
pub struct SwissEphemerisAdapter {
    ephemeris_path: PathBuf,
    sidereal_mode: Ayanamsa,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter with an optional ephemeris path.
    ///
    /// Use [`SwissEphemerisAdapter::new_strict`] to fail when the data files are absent;
    /// this constructor only warns, since the library falls back to its analytical theory.
    pub fn new(ephemeris_path: Option<PathBuf>) -> Self {
        let path = resolve_ephemeris_path(ephemeris_path.as_deref());
        if !path.exists() {
            log::warn!(
                "Swiss Ephemeris path {} does not exist; falling back to built-in theory",
                path.display()
            );
        }
        Self {
            ephemeris_path: path,
            sidereal_mode: Ayanamsa::default(),
        }
    }

    pub fn new_strict(ephemeris_path: Option<PathBuf>) -> Result<Self, EphemerisError> {
        let path = resolve_ephemeris_path(ephemeris_path.as_deref());
        if !path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
            });
        }
        Ok(Self {
            ephemeris_path: path,
            sidereal_mode: Ayanamsa::default(),
        })
    }

    pub fn ephemeris_path(&self) -> &Path {
        &self.ephemeris_path
    }

    fn sidereal_offset(&self, jd: f64, flags: CalcFlags) -> f64 {
        if flags.sidereal {
            self.sidereal_mode.offset_deg(jd)
        } else {
            0.0
        }
    }
}

impl EphemerisProvider for SwissEphemerisAdapter {
    fn set_sidereal_mode(&mut self, ayanamsa: Ayanamsa) {
        self.sidereal_mode = ayanamsa;
    }

    fn julian_day(&self, year: i32, month: u32, day: u32, hour: f64) -> f64 {
        // GREG_CAL = 1
        julday(year, month as i32, day as i32, hour, 1)
    }

    fn body_position(
        &self,
        jd: f64,
        body: Body,
        flags: CalcFlags,
    ) -> Result<RawBodyPosition, EphemerisError> {
        let code = body.swe_id().ok_or_else(|| EphemerisError::CalculationFailed {
            body: body.id().to_string(),
            julian_day: jd,
            message: "body has no ephemeris number; derive it instead".to_string(),
        })?;

        let result = calc_ut(jd, code as u32, flags.swe_bits() as u32).map_err(|e| {
            EphemerisError::CalculationFailed {
                body: body.id().to_string(),
                julian_day: jd,
                message: format!("Swiss Ephemeris error: {}", e),
            }
        })?;

        let out = result.out;
        Ok(RawBodyPosition {
            longitude: normalize_degrees(out[0] - self.sidereal_offset(jd, flags)),
            speed: out[3],
        })
    }

    fn houses(
        &self,
        jd: f64,
        flags: CalcFlags,
        lat: f64,
        lon: f64,
        system: HouseSystem,
    ) -> Result<RawHouses, EphemerisError> {
        let (cusps, ascmc) = houses_ex(jd, flags.swe_bits(), lat, lon, system.code() as i32);

        // ascmc layout: [asc, mc, armc, vertex, ...]
        let ascendant = ascmc[0];
        let vertex = ascmc[3];
        if !ascendant.is_finite() || !vertex.is_finite() {
            return Err(EphemerisError::HouseCalculationFailed {
                message: format!("non-finite angles at lat {lat}, lon {lon}"),
            });
        }

        let offset = self.sidereal_offset(jd, flags);
        let cusps = Cusp::from_array(cusps);
        let cusps = [
            cusps.first, cusps.second, cusps.third, cusps.fourth,
            cusps.fifth, cusps.sixth, cusps.seventh, cusps.eighth,
            cusps.ninth, cusps.tenth, cusps.eleventh, cusps.twelfth,
        ]
        .iter()
        .map(|cusp| normalize_degrees(cusp - offset))
        .collect();

        Ok(RawHouses {
            ascendant: normalize_degrees(ascendant - offset),
            vertex: normalize_degrees(vertex - offset),
            cusps,
        })
    }
}
