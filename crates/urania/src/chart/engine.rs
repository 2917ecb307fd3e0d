//! Natal chart assembly: the single entry point tying every calculator together.

use crate::aspects::{AspectCalculator, ChartPoint};
use crate::chart::points::derive_sensitive_points;
use crate::chart::report::render_report;
use crate::chart::types::{AscendantInfo, BirthDetails, NatalSnapshot, Placement, PlanetPlacement};
use crate::ephemeris::{
    Ayanamsa, Body, CalcFlags, EphemerisProvider, HouseSystem, RawBodyPosition,
    SwissEphemerisAdapter, CHART_BODIES,
};
use crate::error::ChartError;
use crate::time::CivilTime;
use crate::vedic::{
    build_divisional_charts, compute_arudha_lagna, compute_chara_karakas,
    compute_vimshottari_dasha,
};
use crate::zodiac::{get_sign_index, normalize_degrees, resolve_sign, whole_sign_house};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::panic::{self, AssertUnwindSafe};

/// Raw birth data. Optional fields mirror what a caller may fail to supply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub time_unknown: bool,
}

impl ChartRequest {
    pub fn new(year: i32, month: u32, day: u32, latitude: f64, longitude: f64) -> Self {
        Self {
            year: Some(year),
            month: Some(month),
            day: Some(day),
            latitude: Some(latitude),
            longitude: Some(longitude),
            ..Self::default()
        }
    }

    pub fn with_time(mut self, hour: u32, minute: u32) -> Self {
        self.hour = Some(hour);
        self.minute = Some(minute);
        self
    }

    pub fn with_time_unknown(mut self) -> Self {
        self.time_unknown = true;
        self
    }
}

/// All-or-nothing result: either a snapshot and report, or an error.
#[derive(Debug, Clone, Serialize)]
pub struct ChartResponse {
    pub report: String,
    pub snapshot: Option<NatalSnapshot>,
    pub error: Option<String>,
}

impl ChartResponse {
    fn failure(error: String) -> Self {
        Self {
            report: String::new(),
            snapshot: None,
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineSettings {
    pub ayanamsa: Ayanamsa,
}

/// Computes natal charts against an injected ephemeris provider.
pub struct ChartEngine<P: EphemerisProvider> {
    provider: P,
    settings: EngineSettings,
}

impl ChartEngine<SwissEphemerisAdapter> {
    /// Engine backed by the Swiss Ephemeris with default settings.
    pub fn swiss() -> Self {
        Self::new(SwissEphemerisAdapter::new(None), EngineSettings::default())
    }
}

impl<P: EphemerisProvider> ChartEngine<P> {
    pub fn new(mut provider: P, settings: EngineSettings) -> Self {
        provider.set_sidereal_mode(settings.ayanamsa);
        Self { provider, settings }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn settings(&self) -> EngineSettings {
        self.settings
    }

    /// Compute a chart, evaluating the dasha state at the current instant.
    pub fn compute(&self, request: &ChartRequest) -> ChartResponse {
        self.compute_at(request, Utc::now())
    }

    /// Compute a chart, evaluating the dasha state at `now`.
    pub fn compute_at(&self, request: &ChartRequest, now: DateTime<Utc>) -> ChartResponse {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.build_snapshot(request, now)));
        match outcome {
            Ok(Ok(snapshot)) => ChartResponse {
                report: snapshot.report.clone(),
                snapshot: Some(snapshot),
                error: None,
            },
            Ok(Err(e)) => {
                log::warn!("chart computation failed: {}", e);
                ChartResponse::failure(e.to_string())
            }
            Err(payload) => {
                let detail = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                log::error!("chart computation panicked: {}", detail);
                ChartResponse::failure(ChartError::Unexpected(detail).to_string())
            }
        }
    }

    /// Build the snapshot, surfacing structural failures as errors.
    pub fn build_snapshot(
        &self,
        request: &ChartRequest,
        now: DateTime<Utc>,
    ) -> Result<NatalSnapshot, ChartError> {
        let latitude = required_coordinate(request.latitude, "latitude")?;
        let longitude = required_coordinate(request.longitude, "longitude")?;
        let year = request.year.ok_or(ChartError::MissingInput("year"))?;
        let month = request.month.ok_or(ChartError::MissingInput("month"))?;
        let day = request.day.ok_or(ChartError::MissingInput("day"))?;

        let civil = CivilTime::new(
            year,
            month,
            day,
            request.hour,
            request.minute,
            request.time_unknown,
        )?;
        let jd = self
            .provider
            .julian_day(civil.year, civil.month, civil.day, civil.decimal_hour());
        let flags = CalcFlags {
            sidereal: self.settings.ayanamsa != Ayanamsa::Tropical,
            speed: true,
        };

        let houses = self
            .provider
            .houses(jd, flags, latitude, longitude, HouseSystem::WholeSign)
            .map_err(ChartError::Houses)?;
        let ascendant = normalize_degrees(houses.ascendant);
        if !ascendant.is_finite() {
            return Err(ChartError::Unexpected(format!(
                "ascendant is not finite for JD {jd}"
            )));
        }
        let asc_sign_index = get_sign_index(ascendant);

        let planets = self.resolve_planets(jd, flags, asc_sign_index);
        let sensitive = derive_sensitive_points(ascendant, asc_sign_index, houses.vertex, &planets);

        let points: Vec<ChartPoint> = planets
            .iter()
            .map(|p| ChartPoint {
                id: p.body.id(),
                longitude: p.longitude,
                speed: Some(p.speed),
            })
            .chain(sensitive.points.iter().map(|p| ChartPoint {
                id: p.kind.id(),
                longitude: p.longitude,
                speed: None,
            }))
            .collect();
        let aspects = AspectCalculator::new().compute_aspects(&points);

        let karakas = compute_chara_karakas(&planets);
        let arudha_lagna = compute_arudha_lagna(asc_sign_index, &planets);
        let divisional_charts = build_divisional_charts(ascendant, &planets);
        let dasha = self.resolve_dasha(&civil, &planets, now);
        let retrograde = planets.iter().filter(|p| p.retrograde).map(|p| p.body).collect();

        let mut snapshot = NatalSnapshot {
            birth: BirthDetails {
                year: civil.year,
                month: civil.month,
                day: civil.day,
                hour: civil.hour,
                minute: civil.minute,
                latitude,
                longitude,
                julian_day: jd,
            },
            time_unknown: civil.time_unknown,
            ayanamsa: self.settings.ayanamsa.name(),
            ascendant: AscendantInfo {
                longitude: ascendant,
                placement: Placement::resolve(ascendant, asc_sign_index),
            },
            planets,
            sensitive_points: sensitive.points,
            is_day_chart: sensitive.is_day_chart,
            aspects,
            karakas,
            arudha_lagna,
            divisional_charts,
            dasha,
            retrograde,
            report: String::new(),
        };
        round_for_display(&mut snapshot);
        snapshot.report = render_report(&snapshot);

        log::info!(
            "natal chart {:04}-{:02}-{:02} {:02}:{:02}: {} bodies, {} aspects",
            civil.year,
            civil.month,
            civil.day,
            civil.hour,
            civil.minute,
            snapshot.planets.len(),
            snapshot.aspects.len()
        );
        Ok(snapshot)
    }

    /// Query and resolve every chart body. Bodies the provider fails on are omitted.
    fn resolve_planets(&self, jd: f64, flags: CalcFlags, asc_sign_index: u8) -> Vec<PlanetPlacement> {
        let mut rahu: Option<RawBodyPosition> = None;
        let mut planets = Vec::with_capacity(CHART_BODIES.len());

        for &body in CHART_BODIES {
            let raw = if body == Body::Ketu {
                match rahu {
                    Some(node) => RawBodyPosition {
                        longitude: node.longitude + 180.0,
                        speed: node.speed,
                    },
                    None => {
                        log::warn!("ketu omitted: rahu position unavailable");
                        continue;
                    }
                }
            } else {
                match self.provider.body_position(jd, body, flags) {
                    Ok(raw) => raw,
                    Err(e) => {
                        log::warn!("{} omitted: {}", body, e);
                        continue;
                    }
                }
            };
            if body == Body::Rahu {
                rahu = Some(raw);
            }

            let longitude = normalize_degrees(raw.longitude);
            log::debug!("{}: {:.4} deg, speed {:.4}", body, longitude, raw.speed);
            planets.push(PlanetPlacement {
                body,
                longitude,
                speed: raw.speed,
                retrograde: raw.speed < 0.0,
                placement: Placement::resolve(longitude, asc_sign_index),
            });
        }
        planets
    }

    fn resolve_dasha(
        &self,
        civil: &CivilTime,
        planets: &[PlanetPlacement],
        now: DateTime<Utc>,
    ) -> Option<crate::vedic::DashaState> {
        let moon = match planets.iter().find(|p| p.body == Body::Moon) {
            Some(moon) => moon,
            None => {
                log::warn!("dasha skipped: moon position unavailable");
                return None;
            }
        };
        match civil.instant() {
            Ok(birth) => compute_vimshottari_dasha(moon.longitude, birth, now),
            Err(e) => {
                log::warn!("dasha skipped: {}", e);
                None
            }
        }
    }
}

/// Compute a chart with the Swiss Ephemeris and default settings.
pub fn compute(request: &ChartRequest) -> ChartResponse {
    ChartEngine::swiss().compute(request)
}

fn required_coordinate(value: Option<f64>, field: &'static str) -> Result<f64, ChartError> {
    value
        .filter(|v| v.is_finite())
        .ok_or(ChartError::MissingInput(field))
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn round_longitude(value: f64) -> f64 {
    normalize_degrees(round_to(value, 2))
}

/// Placement of an already rounded longitude, with its degree rounded to 1 decimal.
fn display_placement(longitude: f64, asc_sign_index: u8) -> Placement {
    let mut placement = Placement::resolve(longitude, asc_sign_index);
    placement.sign.degree_in_sign = round_degree(placement.sign.degree_in_sign);
    placement
}

/// 1-decimal rounding that never rolls a degree over into the next sign.
fn round_degree(degree_in_sign: f64) -> f64 {
    round_to(degree_in_sign, 1).min(29.9)
}

/// Display rounding: longitudes to 2 decimals, degrees within a sign to 1.
///
/// Signs, houses and nakshatras shown are re-resolved from the rounded
/// longitudes so they always agree with the printed values.
fn round_for_display(snapshot: &mut NatalSnapshot) {
    let ascendant = round_longitude(snapshot.ascendant.longitude);
    let asc_sign_index = get_sign_index(ascendant);
    snapshot.ascendant.longitude = ascendant;
    snapshot.ascendant.placement = display_placement(ascendant, asc_sign_index);

    for planet in &mut snapshot.planets {
        planet.longitude = round_longitude(planet.longitude);
        planet.placement = display_placement(planet.longitude, asc_sign_index);
    }
    for point in &mut snapshot.sensitive_points {
        point.longitude = round_longitude(point.longitude);
        point.placement = display_placement(point.longitude, asc_sign_index);
    }
    for karaka in &mut snapshot.karakas {
        karaka.longitude = round_longitude(karaka.longitude);
    }
    for chart in &mut snapshot.divisional_charts {
        chart.ascendant_longitude = round_longitude(chart.ascendant_longitude);
        let div_asc = resolve_sign(chart.ascendant_longitude);
        chart.ascendant_sign_index = div_asc.sign_index;
        chart.ascendant_sign = div_asc.sign;
        for position in &mut chart.positions {
            position.longitude = round_longitude(position.longitude);
            let sign = resolve_sign(position.longitude);
            position.sign_index = sign.sign_index;
            position.sign = sign.sign;
            position.degree_in_sign = round_degree(sign.degree_in_sign);
            position.house = whole_sign_house(sign.sign_index, div_asc.sign_index);
        }
    }
}
