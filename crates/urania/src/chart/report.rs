//! Plain-text rendering of a natal snapshot.

use crate::chart::types::{NatalSnapshot, Placement};
use std::fmt::Write;

pub const UNKNOWN_TIME_CAVEAT: &str = "Birth time unknown: noon (12:00) was used. \
The ascendant, houses, sensitive points, arudha lagna and divisional charts are unreliable.";

fn placement_line(placement: &Placement) -> String {
    format!(
        "{} {:.1}° | house {} | {} pada {} ({}, {})",
        placement.sign.sign,
        placement.sign.degree_in_sign,
        placement.house,
        placement.nakshatra.name,
        placement.nakshatra.pada,
        placement.nakshatra.deity,
        placement.nakshatra.aim.name(),
    )
}

pub fn render_report(snapshot: &NatalSnapshot) -> String {
    // Writing into a String cannot fail.
    let mut out = String::new();
    let birth = &snapshot.birth;

    let _ = writeln!(
        out,
        "NATAL CHART {:04}-{:02}-{:02} {:02}:{:02} (lat {:.4}, lon {:.4})",
        birth.year, birth.month, birth.day, birth.hour, birth.minute, birth.latitude, birth.longitude
    );
    let _ = writeln!(
        out,
        "Zodiac: sidereal ({}), whole-sign houses, JD {:.5}",
        snapshot.ayanamsa, birth.julian_day
    );
    if snapshot.time_unknown {
        let _ = writeln!(out, "NOTE: {}", UNKNOWN_TIME_CAVEAT);
    }

    let _ = writeln!(out, "\nASCENDANT");
    let _ = writeln!(
        out,
        "  {:.2}° {}",
        snapshot.ascendant.longitude,
        placement_line(&snapshot.ascendant.placement)
    );

    let _ = writeln!(out, "\nPLANETS");
    for planet in &snapshot.planets {
        let _ = writeln!(
            out,
            "  {:<8} {:>6.2}° {}{}",
            planet.body.name(),
            planet.longitude,
            placement_line(&planet.placement),
            if planet.retrograde { " R" } else { "" }
        );
    }

    let _ = writeln!(out, "\nSENSITIVE POINTS");
    if let Some(day) = snapshot.is_day_chart {
        let _ = writeln!(out, "  {} chart", if day { "Day" } else { "Night" });
    }
    for point in &snapshot.sensitive_points {
        let _ = writeln!(
            out,
            "  {:<12} {:>6.2}° {}",
            point.kind.name(),
            point.longitude,
            placement_line(&point.placement)
        );
    }

    let _ = writeln!(out, "\nASPECTS");
    if snapshot.aspects.is_empty() {
        let _ = writeln!(out, "  none");
    }
    for record in &snapshot.aspects {
        let _ = writeln!(
            out,
            "  {} {} {} ({:.0}°, orb {:.2}°){}",
            record.from,
            record.aspect.aspect,
            record.to,
            record.aspect.angle,
            record.aspect.orb,
            if record.aspect.exact { " exact" } else { "" }
        );
    }

    let _ = writeln!(out, "\nCHARA KARAKAS");
    for karaka in &snapshot.karakas {
        let _ = writeln!(
            out,
            "  {:<14} {} ({:.2}°)",
            karaka.karaka,
            karaka.body.name(),
            karaka.longitude
        );
    }

    let _ = writeln!(out, "\nARUDHA LAGNA");
    match &snapshot.arudha_lagna {
        Some(al) => {
            let _ = writeln!(
                out,
                "  {} (ascendant lord {} in sign {})",
                al.sign,
                al.lord.name(),
                al.lord_sign_index + 1
            );
        }
        None => {
            let _ = writeln!(out, "  unavailable");
        }
    }

    let _ = writeln!(out, "\nDIVISIONAL CHARTS");
    for chart in &snapshot.divisional_charts {
        let bodies: Vec<String> = chart
            .positions
            .iter()
            .map(|p| format!("{} {} (H{})", p.body.name(), p.sign, p.house))
            .collect();
        let _ = writeln!(
            out,
            "  D{} {}: Asc {} | {}",
            chart.factor,
            chart.label,
            chart.ascendant_sign,
            bodies.join(", ")
        );
    }

    let _ = writeln!(out, "\nVIMSHOTTARI DASHA");
    match &snapshot.dasha {
        Some(dasha) => {
            let _ = writeln!(
                out,
                "  Birth lord {} ({:.2} years remaining at birth)",
                dasha.birth_lord.name(),
                dasha.balance_years
            );
            for period in [&dasha.mahadasha, &dasha.antardasha] {
                let _ = writeln!(
                    out,
                    "  {:?}: {} {} -> {}",
                    period.level,
                    period.lord.name(),
                    period.start.format("%Y-%m-%d"),
                    period.end.format("%Y-%m-%d")
                );
            }
        }
        None => {
            let _ = writeln!(out, "  unavailable");
        }
    }

    let _ = writeln!(out, "\nRETROGRADE");
    if snapshot.retrograde.is_empty() {
        let _ = writeln!(out, "  none");
    } else {
        let names: Vec<&str> = snapshot.retrograde.iter().map(|b| b.name()).collect();
        let _ = writeln!(out, "  {}", names.join(", "));
    }

    out
}
