//! Whole-sign houses: the ascendant's sign is house 1, the next sign house 2, and so on.

/// House (1-12) of a body in `sign_index` for an ascendant in `asc_sign_index`.
pub fn whole_sign_house(sign_index: u8, asc_sign_index: u8) -> u8 {
    let sign = (sign_index % 12) as i32;
    let asc = (asc_sign_index % 12) as i32;
    (((sign - asc + 12) % 12) + 1) as u8
}
