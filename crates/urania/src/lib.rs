//! Deterministic natal-chart engine: sidereal positions, whole-sign houses,
//! nakshatras, aspects, sensitive points, karakas, arudha lagna, divisional
//! charts and Vimshottari dasha, computed from an injected ephemeris.

pub mod aspects;
pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod time;
pub mod vedic;
pub mod zodiac;

pub use chart::{compute, ChartEngine, ChartRequest, ChartResponse, EngineSettings, NatalSnapshot};
pub use ephemeris::{Ayanamsa, EphemerisProvider, FixtureEphemeris, SwissEphemerisAdapter};
pub use error::ChartError;
