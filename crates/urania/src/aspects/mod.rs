pub mod calculator;
pub mod types;

pub use calculator::{max_orb, separation, AspectCalculator, ASPECT_CATALOG};
pub use types::{AspectCore, AspectKind, AspectRecord, ChartPoint};
