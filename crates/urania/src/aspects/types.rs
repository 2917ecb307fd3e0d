use serde::Serialize;

/// One entry of the aspect catalog
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectKind {
    pub name: &'static str,
    pub angle: f64,
    /// Maximum allowed deviation from `angle`, in degrees
    pub max_orb: f64,
}

/// Core aspect information
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AspectCore {
    /// Aspect type: "conjunction", "trine", etc.
    pub aspect: &'static str,
    /// Catalog angle for this aspect
    pub angle: f64,
    /// Deviation from the catalog angle
    pub orb: f64,
    /// Whether the aspect is exact (within 0.1 degrees)
    pub exact: bool,
    /// Whether the aspect is applying; unknown when either point has no speed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applying: Option<bool>,
}

/// A point taking part in aspect detection.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub id: &'static str,
    pub longitude: f64,
    pub speed: Option<f64>,
}

/// An aspect between two chart points
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AspectRecord {
    pub from: &'static str,
    pub to: &'static str,
    #[serde(flatten)]
    pub aspect: AspectCore,
}
