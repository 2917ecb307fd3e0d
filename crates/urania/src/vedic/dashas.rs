//! Vimshottari dasha calculations for Vedic astrology.
//!
//! Dashas are time periods ruled by planets, calculated based on the Moon's nakshatra.
//! The birth Mahadasha is the lord of the Moon's nakshatra, already partly elapsed
//! in proportion to how far the Moon has travelled through that nakshatra.

use crate::ephemeris::Body;
use crate::vedic::nakshatra::{nakshatra_index, NAKSHATRA_SEGMENT_SIZE};
use crate::zodiac::normalize_degrees;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;
pub const VIMSHOTTARI_YEAR_DAYS: f64 = 365.2425;

/// Upper bound on period steps when locating the evaluation instant.
pub const MAX_PERIOD_STEPS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashaLevel {
    Mahadasha,
    Antardasha,
}

type PlanetYears = (Body, f64);

pub const VIMSHOTTARI_SEQUENCE: &[PlanetYears] = &[
    (Body::Ketu, 7.0),
    (Body::Venus, 20.0),
    (Body::Sun, 6.0),
    (Body::Moon, 10.0),
    (Body::Mars, 7.0),
    (Body::Rahu, 18.0),
    (Body::Jupiter, 16.0),
    (Body::Saturn, 19.0),
    (Body::Mercury, 17.0),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaPeriod {
    pub lord: Body,
    pub level: DashaLevel,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub years: f64,
}

impl DashaPeriod {
    /// `None` when the period end falls outside the representable date range.
    fn new(lord: Body, level: DashaLevel, start: DateTime<Utc>, years: f64) -> Option<Self> {
        let end = start.checked_add_signed(years_to_duration(years))?;
        Some(Self {
            lord,
            level,
            start,
            end,
            years,
        })
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// Vimshottari state at an evaluation instant.
#[derive(Debug, Clone, Serialize)]
pub struct DashaState {
    #[serde(rename = "moonNakshatra")]
    pub moon_nakshatra: usize,
    #[serde(rename = "birthLord")]
    pub birth_lord: Body,
    /// Years of the birth Mahadasha still to run at birth
    #[serde(rename = "balanceYears")]
    pub balance_years: f64,
    pub mahadasha: DashaPeriod,
    pub antardasha: DashaPeriod,
    /// One full cycle of Mahadashas, starting with the birth Mahadasha
    pub timeline: Vec<DashaPeriod>,
    /// Antardashas of the current Mahadasha
    pub antardashas: Vec<DashaPeriod>,
}

pub fn years_to_duration(years: f64) -> Duration {
    Duration::milliseconds((years * VIMSHOTTARI_YEAR_DAYS * 86_400_000.0).round() as i64)
}

/// Sequence index of the Mahadasha running at birth.
pub fn birth_sequence_index(moon_longitude: f64) -> usize {
    nakshatra_index(moon_longitude) % VIMSHOTTARI_SEQUENCE.len()
}

/// Years of the birth Mahadasha already elapsed at birth.
pub fn elapsed_years_at_birth(moon_longitude: f64) -> f64 {
    let lon = normalize_degrees(moon_longitude);
    let progress = (lon % NAKSHATRA_SEGMENT_SIZE) / NAKSHATRA_SEGMENT_SIZE;
    let (_, years) = VIMSHOTTARI_SEQUENCE[birth_sequence_index(lon)];
    progress * years
}

/// Compute the Vimshottari Mahadasha/Antardasha running at `now`.
///
/// Returns `None` when `now` precedes the birth Mahadasha, lies beyond
/// `MAX_PERIOD_STEPS` periods of it, or a period boundary leaves the
/// representable date range.
pub fn compute_vimshottari_dasha(
    moon_longitude: f64,
    birth: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Option<DashaState> {
    let start_index = birth_sequence_index(moon_longitude);
    let elapsed = elapsed_years_at_birth(moon_longitude);
    let (birth_lord, birth_years) = VIMSHOTTARI_SEQUENCE[start_index];
    let first_start = birth.checked_sub_signed(years_to_duration(elapsed))?;

    let timeline = mahadasha_cycle(start_index, first_start)?;
    let mahadasha = find_mahadasha(start_index, first_start, now)?;
    let antardashas = antardasha_cycle(&mahadasha)?;
    let antardasha = antardashas.iter().find(|p| p.contains(now)).cloned().or_else(|| {
        // rounding at the last sub-period's end can leave `now` just outside
        antardashas.last().cloned()
    })?;

    log::debug!(
        "vimshottari: birth lord {} ({:.3}y elapsed), current {}/{}",
        birth_lord,
        elapsed,
        mahadasha.lord,
        antardasha.lord
    );

    Some(DashaState {
        moon_nakshatra: nakshatra_index(moon_longitude),
        birth_lord,
        balance_years: birth_years - elapsed,
        mahadasha,
        antardasha,
        timeline,
        antardashas,
    })
}

fn mahadasha_cycle(start_index: usize, first_start: DateTime<Utc>) -> Option<Vec<DashaPeriod>> {
    let mut start = first_start;
    let mut periods = Vec::with_capacity(VIMSHOTTARI_SEQUENCE.len());
    for offset in 0..VIMSHOTTARI_SEQUENCE.len() {
        let (lord, years) = VIMSHOTTARI_SEQUENCE[(start_index + offset) % VIMSHOTTARI_SEQUENCE.len()];
        let period = DashaPeriod::new(lord, DashaLevel::Mahadasha, start, years)?;
        start = period.end;
        periods.push(period);
    }
    Some(periods)
}

fn find_mahadasha(
    start_index: usize,
    first_start: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Option<DashaPeriod> {
    if now < first_start {
        return None;
    }
    let mut start = first_start;
    for step in 0..MAX_PERIOD_STEPS {
        let (lord, years) = VIMSHOTTARI_SEQUENCE[(start_index + step) % VIMSHOTTARI_SEQUENCE.len()];
        let period = DashaPeriod::new(lord, DashaLevel::Mahadasha, start, years)?;
        if period.contains(now) {
            return Some(period);
        }
        start = period.end;
    }
    log::warn!("vimshottari: evaluation instant beyond {MAX_PERIOD_STEPS} periods");
    None
}

/// All nine Antardashas of a Mahadasha, starting with its own lord.
pub fn antardasha_cycle(mahadasha: &DashaPeriod) -> Option<Vec<DashaPeriod>> {
    let start_index = VIMSHOTTARI_SEQUENCE
        .iter()
        .position(|(lord, _)| *lord == mahadasha.lord)
        .unwrap_or(0);
    let mut start = mahadasha.start;
    let mut periods = Vec::with_capacity(VIMSHOTTARI_SEQUENCE.len());
    for offset in 0..VIMSHOTTARI_SEQUENCE.len() {
        let (lord, sub_years) = VIMSHOTTARI_SEQUENCE[(start_index + offset) % VIMSHOTTARI_SEQUENCE.len()];
        let years = mahadasha.years * sub_years / VIMSHOTTARI_TOTAL_YEARS;
        let period = DashaPeriod::new(lord, DashaLevel::Antardasha, start, years)?;
        start = period.end;
        periods.push(period);
    }
    Some(periods)
}
