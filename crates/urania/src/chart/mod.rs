pub mod engine;
pub mod points;
pub mod report;
pub mod types;

pub use engine::{compute, ChartEngine, ChartRequest, ChartResponse, EngineSettings};
pub use report::{render_report, UNKNOWN_TIME_CAVEAT};
pub use types::{
    AscendantInfo, BirthDetails, NatalSnapshot, Placement, PlanetPlacement, SensitivePoint,
    SensitivePointKind,
};
