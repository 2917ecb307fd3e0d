use crate::aspects::types::{AspectCore, AspectKind, AspectRecord, ChartPoint};
use crate::zodiac::normalize_degrees;

pub const ASPECT_CATALOG: &[AspectKind] = &[
    AspectKind { name: "conjunction", angle: 0.0, max_orb: 8.0 },
    AspectKind { name: "semi-sextile", angle: 30.0, max_orb: 2.0 },
    AspectKind { name: "semi-square", angle: 45.0, max_orb: 2.0 },
    AspectKind { name: "sextile", angle: 60.0, max_orb: 6.0 },
    AspectKind { name: "quintile", angle: 72.0, max_orb: 2.0 },
    AspectKind { name: "square", angle: 90.0, max_orb: 7.0 },
    AspectKind { name: "trine", angle: 120.0, max_orb: 8.0 },
    AspectKind { name: "sesquiquadrate", angle: 135.0, max_orb: 2.0 },
    AspectKind { name: "biquintile", angle: 144.0, max_orb: 2.0 },
    AspectKind { name: "quincunx", angle: 150.0, max_orb: 3.0 },
    AspectKind { name: "opposition", angle: 180.0, max_orb: 8.0 },
];

/// Maximum orb of the catalog aspect at `angle`, if any.
pub fn max_orb(angle: f64) -> Option<f64> {
    ASPECT_CATALOG
        .iter()
        .find(|kind| kind.angle == angle)
        .map(|kind| kind.max_orb)
}

/// Angular separation of two longitudes, in [0, 180].
pub fn separation(lon1: f64, lon2: f64) -> f64 {
    let raw_diff = (normalize_degrees(lon1) - normalize_degrees(lon2)).abs();
    if raw_diff > 180.0 {
        360.0 - raw_diff
    } else {
        raw_diff
    }
}

/// Aspect calculator
pub struct AspectCalculator {
    catalog: &'static [AspectKind],
}

impl AspectCalculator {
    /// Create a calculator over the full aspect catalog
    pub fn new() -> Self {
        Self {
            catalog: ASPECT_CATALOG,
        }
    }

    /// Every catalog aspect the two longitudes form.
    ///
    /// Overlapping orb windows are all reported; nothing is deduplicated.
    pub fn calculate_aspects(
        &self,
        lon1: f64,
        lon2: f64,
        speed1: Option<f64>,
        speed2: Option<f64>,
    ) -> Vec<AspectCore> {
        let angle_diff = separation(lon1, lon2);

        self.catalog
            .iter()
            .filter_map(|kind| {
                let orb = (angle_diff - kind.angle).abs();
                if orb > kind.max_orb {
                    return None;
                }
                let applying = match (speed1, speed2) {
                    (Some(s1), Some(s2)) => Some(is_aspect_applying(
                        lon1, lon2, s1, s2, kind.angle, angle_diff,
                    )),
                    _ => None,
                };
                Some(AspectCore {
                    aspect: kind.name,
                    angle: kind.angle,
                    orb,
                    exact: orb < 0.1,
                    applying,
                })
            })
            .collect()
    }

    /// Aspects between every unordered pair of points.
    pub fn compute_aspects(&self, points: &[ChartPoint]) -> Vec<AspectRecord> {
        let mut records = Vec::new();
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let (a, b) = (&points[i], &points[j]);
                for aspect in self.calculate_aspects(a.longitude, b.longitude, a.speed, b.speed) {
                    records.push(AspectRecord {
                        from: a.id,
                        to: b.id,
                        aspect,
                    });
                }
            }
        }
        records
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Determine if an aspect is applying (approaching exact) or separating
fn is_aspect_applying(
    lon1: f64,
    lon2: f64,
    speed1: f64,
    speed2: f64,
    aspect_angle: f64,
    current_angle: f64,
) -> bool {
    let relative_speed = speed1 - speed2;

    // Too slow to tell; call it applying only inside half a degree
    if relative_speed.abs() < 0.01 {
        return current_angle < aspect_angle + 0.5;
    }

    let signed_diff = wrap_signed(lon1 - lon2);
    let current_distance = (current_angle - aspect_angle).abs();

    // Project forward a small amount to see if we're getting closer to exact
    let time_step = 0.1; // days
    let future_angle = wrap_signed(signed_diff + relative_speed * time_step).abs();
    let future_distance = (future_angle - aspect_angle).abs();

    future_distance < current_distance
}

fn wrap_signed(diff: f64) -> f64 {
    let mut wrapped = diff % 360.0;
    if wrapped > 180.0 {
        wrapped -= 360.0;
    } else if wrapped < -180.0 {
        wrapped += 360.0;
    }
    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separation_reflects() {
        assert_eq!(separation(10.0, 350.0), 20.0);
        assert_eq!(separation(0.0, 180.0), 180.0);
        assert_eq!(separation(370.0, 10.0), 0.0);
    }

    #[test]
    fn test_catalog_orbs_in_range() {
        assert_eq!(ASPECT_CATALOG.len(), 11);
        for kind in ASPECT_CATALOG {
            assert!(kind.max_orb >= 2.0 && kind.max_orb <= 8.0, "{}", kind.name);
        }
    }

    #[test]
    fn test_overlapping_windows_are_not_deduplicated() {
        const WIDE: &[AspectKind] = &[
            AspectKind { name: "conjunction", angle: 0.0, max_orb: 12.0 },
            AspectKind { name: "semi-sextile", angle: 30.0, max_orb: 25.0 },
        ];
        let calculator = AspectCalculator { catalog: WIDE };

        // 10 deg sits inside both windows
        let aspects = calculator.calculate_aspects(0.0, 10.0, None, None);
        let names: Vec<&str> = aspects.iter().map(|a| a.aspect).collect();
        assert_eq!(names, vec!["conjunction", "semi-sextile"]);
        assert!((aspects[0].orb - 10.0).abs() < 1e-9);
        assert!((aspects[1].orb - 20.0).abs() < 1e-9);

        let points = [
            ChartPoint { id: "sun", longitude: 0.0, speed: None },
            ChartPoint { id: "moon", longitude: 10.0, speed: None },
        ];
        let records = calculator.compute_aspects(&points);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.from == "sun" && r.to == "moon"));
    }

    #[test]
    fn test_applying_when_faster_body_closes_in() {
        // Moon 5 deg behind the Sun and faster: closing on the conjunction
        assert!(is_aspect_applying(95.0, 100.0, 13.0, 1.0, 0.0, 5.0));
        assert!(!is_aspect_applying(105.0, 100.0, 13.0, 1.0, 0.0, 5.0));
    }
}
