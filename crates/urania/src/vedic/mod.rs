pub mod arudha;
pub mod dashas;
pub mod karakas;
pub mod nakshatra;
pub mod vargas;

pub use arudha::{compute_arudha_lagna, ArudhaLagna};
pub use dashas::{compute_vimshottari_dasha, DashaLevel, DashaPeriod, DashaState};
pub use karakas::{compute_chara_karakas, KarakaRank};
pub use nakshatra::{get_nakshatra_for_longitude, LifeAim, NakshatraPlacement};
pub use vargas::{build_divisional_charts, DivisionalChart, VargaPosition};
