//! The ephemeris capability the chart engine is built against.

use crate::ephemeris::adapter::EphemerisError;
use crate::ephemeris::ayanamsa::Ayanamsa;
use crate::ephemeris::types::{Body, CalcFlags, HouseSystem, RawBodyPosition, RawHouses};
use crate::time;
use std::collections::{HashMap, HashSet};

/// Raw astronomical positions for a Julian Day.
///
/// Implementations must be deterministic for a fixed Julian Day and flags.
pub trait EphemerisProvider {
    /// Select the sidereal frame used when `CalcFlags::sidereal` is set.
    fn set_sidereal_mode(&mut self, ayanamsa: Ayanamsa);

    /// Gregorian calendar date plus decimal hour (UT) to Julian Day.
    fn julian_day(&self, year: i32, month: u32, day: u32, hour: f64) -> f64 {
        time::julian_day(year, month, day, hour)
    }

    fn body_position(
        &self,
        jd: f64,
        body: Body,
        flags: CalcFlags,
    ) -> Result<RawBodyPosition, EphemerisError>;

    fn houses(
        &self,
        jd: f64,
        flags: CalcFlags,
        lat: f64,
        lon: f64,
        system: HouseSystem,
    ) -> Result<RawHouses, EphemerisError>;
}

/// Provider returning fixed positions, for deterministic tests and benches.
#[derive(Debug, Clone, Default)]
pub struct FixtureEphemeris {
    bodies: HashMap<Body, RawBodyPosition>,
    houses: Option<RawHouses>,
    failing_bodies: HashSet<Body>,
    sidereal_mode: Option<Ayanamsa>,
}

impl FixtureEphemeris {
    pub fn new(ascendant: f64, vertex: f64) -> Self {
        let cusps = (0..12)
            .map(|i| ((ascendant / 30.0).floor() + i as f64) * 30.0 % 360.0)
            .collect();
        Self {
            houses: Some(RawHouses {
                ascendant,
                vertex,
                cusps,
            }),
            ..Self::default()
        }
    }

    /// A fixture whose house computation always fails.
    pub fn without_houses() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, body: Body, longitude: f64, speed: f64) -> Self {
        self.bodies.insert(body, RawBodyPosition { longitude, speed });
        self
    }

    pub fn failing(mut self, body: Body) -> Self {
        self.failing_bodies.insert(body);
        self
    }

    pub fn sidereal_mode(&self) -> Option<Ayanamsa> {
        self.sidereal_mode
    }
}

impl EphemerisProvider for FixtureEphemeris {
    fn set_sidereal_mode(&mut self, ayanamsa: Ayanamsa) {
        self.sidereal_mode = Some(ayanamsa);
    }

    fn body_position(
        &self,
        jd: f64,
        body: Body,
        _flags: CalcFlags,
    ) -> Result<RawBodyPosition, EphemerisError> {
        let failure = |message: &str| EphemerisError::CalculationFailed {
            body: body.id().to_string(),
            julian_day: jd,
            message: message.to_string(),
        };
        if self.failing_bodies.contains(&body) {
            return Err(failure("fixture configured to fail"));
        }
        self.bodies
            .get(&body)
            .copied()
            .ok_or_else(|| failure("no fixture position"))
    }

    fn houses(
        &self,
        _jd: f64,
        _flags: CalcFlags,
        _lat: f64,
        _lon: f64,
        _system: HouseSystem,
    ) -> Result<RawHouses, EphemerisError> {
        self.houses
            .clone()
            .ok_or_else(|| EphemerisError::HouseCalculationFailed {
                message: "no fixture houses".to_string(),
            })
    }
}
