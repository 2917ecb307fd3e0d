//! Zodiac geometry: longitude normalization, signs and whole-sign houses.

pub mod houses;
pub mod signs;

pub use houses::whole_sign_house;
pub use signs::{
    get_sign, get_sign_index, get_sign_ruler, resolve_sign, Element, Modality, SignInfo,
    SignPosition, SIGNS,
};

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let normalized = value.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
        assert_eq!(normalize_degrees(-10.0), 350.0);
        assert_eq!(normalize_degrees(370.0), 10.0);
    }

    #[test]
    fn test_normalize_degrees_range_and_idempotence() {
        let samples = [-1e-15, -720.5, -359.999, -0.0, 1e-12, 179.5, 359.999_999, 1e6, -1e6];
        for x in samples {
            let n = normalize_degrees(x);
            assert!((0.0..360.0).contains(&n), "normalize({x}) = {n}");
            assert_eq!(normalize_degrees(n), n);
        }
    }
}
