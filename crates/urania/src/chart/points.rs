//! Sensitive points: the Vertex and the Part of Fortune.

use crate::chart::types::{Placement, PlanetPlacement, SensitivePoint, SensitivePointKind};
use crate::ephemeris::Body;
use crate::zodiac::normalize_degrees;

/// A chart is a day chart when the Sun's whole-sign house is 7 or lower.
pub fn is_day_chart(sun_house: u8) -> bool {
    sun_house <= 7
}

/// Day: `asc + moon - sun`; night: `asc + sun - moon`.
pub fn pars_fortuna_longitude(ascendant: f64, sun: f64, moon: f64, day_chart: bool) -> f64 {
    if day_chart {
        normalize_degrees(ascendant + moon - sun)
    } else {
        normalize_degrees(ascendant + sun - moon)
    }
}

/// Derived sensitive points and the day/night classification.
#[derive(Debug, Clone)]
pub struct SensitivePoints {
    pub points: Vec<SensitivePoint>,
    /// `None` when the Sun could not be placed
    pub is_day_chart: Option<bool>,
}

pub fn derive_sensitive_points(
    ascendant: f64,
    asc_sign_index: u8,
    vertex: f64,
    planets: &[PlanetPlacement],
) -> SensitivePoints {
    let find = |body: Body| planets.iter().find(|p| p.body == body);
    let mut points = vec![point(SensitivePointKind::Vertex, vertex, asc_sign_index)];

    let sun = find(Body::Sun);
    let is_day = sun.map(|s| is_day_chart(s.placement.house));

    match (sun, find(Body::Moon), is_day) {
        (Some(sun), Some(moon), Some(day)) => {
            let lon = pars_fortuna_longitude(ascendant, sun.longitude, moon.longitude, day);
            points.push(point(SensitivePointKind::ParsFortuna, lon, asc_sign_index));
        }
        _ => log::warn!("pars fortuna skipped: sun or moon position unavailable"),
    }

    SensitivePoints {
        points,
        is_day_chart: is_day,
    }
}

fn point(kind: SensitivePointKind, longitude: f64, asc_sign_index: u8) -> SensitivePoint {
    let longitude = normalize_degrees(longitude);
    SensitivePoint {
        kind,
        longitude,
        placement: Placement::resolve(longitude, asc_sign_index),
    }
}
