//! Chara karakas: the seven classical bodies ranked by longitude.

use crate::chart::types::PlanetPlacement;
use crate::ephemeris::Body;
use serde::Serialize;

pub const KARAKA_BODIES: &[Body] = &[
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
];

pub const KARAKA_NAMES: &[&str] = &[
    "Atmakaraka",
    "Amatyakaraka",
    "Bhratrikaraka",
    "Matrikaraka",
    "Putrakaraka",
    "Gnatikaraka",
    "Darakaraka",
];

#[derive(Debug, Clone, Serialize)]
pub struct KarakaRank {
    pub rank: usize,
    pub karaka: &'static str,
    pub body: Body,
    pub longitude: f64,
}

/// Rank the classical bodies present in `planets` by descending longitude.
///
/// Equal longitudes keep their catalog order. Bodies the ephemeris could not
/// place are skipped, so fewer than seven ranks may be returned.
pub fn compute_chara_karakas(planets: &[PlanetPlacement]) -> Vec<KarakaRank> {
    let mut candidates: Vec<(Body, f64)> = KARAKA_BODIES
        .iter()
        .filter_map(|body| {
            planets
                .iter()
                .find(|p| p.body == *body)
                .map(|p| (*body, p.longitude))
        })
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    candidates
        .into_iter()
        .zip(KARAKA_NAMES.iter().copied())
        .enumerate()
        .map(|(rank, ((body, longitude), karaka))| KarakaRank {
            rank,
            karaka,
            body,
            longitude,
        })
        .collect()
}
