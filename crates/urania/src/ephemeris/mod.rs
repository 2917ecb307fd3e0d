pub mod adapter;
pub mod ayanamsa;
pub mod provider;
pub mod types;

pub use adapter::{EphemerisError, SwissEphemerisAdapter};
pub use ayanamsa::Ayanamsa;
pub use provider::{EphemerisProvider, FixtureEphemeris};
pub use types::{Body, CalcFlags, HouseSystem, RawBodyPosition, RawHouses, CHART_BODIES};
