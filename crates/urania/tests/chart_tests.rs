use chrono::{TimeZone, Utc};
use urania::chart::{ChartEngine, ChartRequest, EngineSettings, SensitivePointKind};
use urania::ephemeris::{Ayanamsa, Body, FixtureEphemeris};
use urania::vedic::LifeAim;

/// Sidereal positions for 1990-01-15 14:30 UT, Moscow.
fn moscow_fixture() -> FixtureEphemeris {
    FixtureEphemeris::new(200.0, 80.0)
        .with_body(Body::Sun, 270.5, 1.01)
        .with_body(Body::Moon, 45.0, 13.2)
        .with_body(Body::Mercury, 255.0, -0.5)
        .with_body(Body::Venus, 290.0, -0.6)
        .with_body(Body::Mars, 230.0, 0.7)
        .with_body(Body::Jupiter, 86.0, -0.1)
        .with_body(Body::Saturn, 262.0, 0.11)
        .with_body(Body::Uranus, 254.0, 0.05)
        .with_body(Body::Neptune, 258.0, 0.03)
        .with_body(Body::Pluto, 203.0, 0.01)
        .with_body(Body::Rahu, 300.0, -0.05)
}

fn moscow_request() -> ChartRequest {
    ChartRequest::new(1990, 1, 15, 55.75, 37.62).with_time(14, 30)
}

fn engine(fixture: FixtureEphemeris) -> ChartEngine<FixtureEphemeris> {
    ChartEngine::new(fixture, EngineSettings::default())
}

fn evaluation_instant() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

#[test]
fn test_moscow_chart() {
    let response = engine(moscow_fixture()).compute_at(&moscow_request(), evaluation_instant());
    assert!(response.is_ok(), "{:?}", response.error);
    let snapshot = response.snapshot.unwrap();

    assert!(!snapshot.time_unknown);
    assert_eq!(snapshot.ayanamsa, "lahiri");
    assert_eq!(snapshot.ascendant.placement.sign.sign, "Libra");
    assert_eq!(snapshot.ascendant.placement.house, 1);

    let sun = snapshot.planet(Body::Sun).unwrap();
    assert_eq!(sun.placement.sign.sign, "Capricorn");
    assert_eq!(sun.placement.house, 4);
    assert_eq!(snapshot.is_day_chart, Some(true));

    let moon = snapshot.planet(Body::Moon).unwrap();
    assert_eq!(moon.placement.nakshatra.name, "Rohini");
    assert_eq!(moon.placement.nakshatra.lord, Body::Moon);
    assert_eq!(moon.placement.nakshatra.aim, LifeAim::Moksha);

    assert_eq!(snapshot.planets.len(), 12);
    assert!(!snapshot.aspects.is_empty());
    assert_eq!(snapshot.report, response.report);
    assert!(snapshot.report.contains("PLANETS"));
    assert!(!snapshot.report.contains("Birth time unknown"));
}

#[test]
fn test_ketu_opposes_rahu() {
    let snapshot = engine(moscow_fixture())
        .compute_at(&moscow_request(), evaluation_instant())
        .snapshot
        .unwrap();
    let rahu = snapshot.planet(Body::Rahu).unwrap();
    let ketu = snapshot.planet(Body::Ketu).unwrap();
    assert_eq!(ketu.longitude, 120.0);
    assert_eq!(ketu.speed, rahu.speed);
    assert!(ketu.retrograde);
}

#[test]
fn test_whole_sign_houses_for_every_body() {
    let snapshot = engine(moscow_fixture())
        .compute_at(&moscow_request(), evaluation_instant())
        .snapshot
        .unwrap();
    let asc_sign = snapshot.ascendant.placement.sign.sign_index as i32;
    for planet in &snapshot.planets {
        let sign = planet.placement.sign.sign_index as i32;
        let expected = ((sign - asc_sign).rem_euclid(12) + 1) as u8;
        assert_eq!(planet.placement.house, expected, "{}", planet.body);
        assert!((1..=12).contains(&planet.placement.house));
        assert!((0.0..360.0).contains(&planet.longitude));
    }
}

#[test]
fn test_sensitive_points() {
    let snapshot = engine(moscow_fixture())
        .compute_at(&moscow_request(), evaluation_instant())
        .snapshot
        .unwrap();
    let vertex = snapshot.sensitive_point(SensitivePointKind::Vertex).unwrap();
    assert_eq!(vertex.longitude, 80.0);
    // day chart: 200 + 45 - 270.5
    let fortuna = snapshot.sensitive_point(SensitivePointKind::ParsFortuna).unwrap();
    assert_eq!(fortuna.longitude, 334.5);
    assert_eq!(fortuna.placement.sign.sign, "Pisces");
}

#[test]
fn test_karakas_arudha_and_vargas() {
    let snapshot = engine(moscow_fixture())
        .compute_at(&moscow_request(), evaluation_instant())
        .snapshot
        .unwrap();

    let order: Vec<Body> = snapshot.karakas.iter().map(|k| k.body).collect();
    assert_eq!(
        order,
        vec![
            Body::Venus,
            Body::Sun,
            Body::Saturn,
            Body::Mercury,
            Body::Mars,
            Body::Jupiter,
            Body::Moon
        ]
    );
    assert_eq!(snapshot.karakas[0].karaka, "Atmakaraka");

    // Libra ascendant, Venus in Capricorn: (6 + 9) mod 12
    let arudha = snapshot.arudha_lagna.as_ref().unwrap();
    assert_eq!(arudha.lord, Body::Venus);
    assert_eq!(arudha.sign, "Cancer");

    let factors: Vec<u32> = snapshot.divisional_charts.iter().map(|c| c.factor).collect();
    assert_eq!(factors, vec![4, 7, 9, 10, 30]);
    for chart in &snapshot.divisional_charts {
        assert_eq!(chart.positions.len(), snapshot.planets.len());
    }
}

#[test]
fn test_dasha_at_fixed_instant() {
    let snapshot = engine(moscow_fixture())
        .compute_at(&moscow_request(), evaluation_instant())
        .snapshot
        .unwrap();
    let dasha = snapshot.dasha.unwrap();
    assert_eq!(dasha.birth_lord, Body::Moon);
    // Moon at 45 deg is 3/8 of the way through Rohini
    assert!((dasha.balance_years - 6.25).abs() < 1e-9);
    assert_eq!(dasha.mahadasha.lord, Body::Jupiter);
    assert_eq!(dasha.antardasha.lord, Body::Saturn);
    assert!(dasha.mahadasha.contains(evaluation_instant()));
    assert!(dasha.antardasha.contains(evaluation_instant()));
}

#[test]
fn test_retrograde_list() {
    let snapshot = engine(moscow_fixture())
        .compute_at(&moscow_request(), evaluation_instant())
        .snapshot
        .unwrap();
    assert_eq!(
        snapshot.retrograde,
        vec![Body::Mercury, Body::Venus, Body::Jupiter, Body::Rahu, Body::Ketu]
    );
}

#[test]
fn test_displayed_sign_matches_rounded_longitude() {
    let fixture = FixtureEphemeris::new(10.0, 190.0)
        .with_body(Body::Sun, 359.996, 1.0)
        .with_body(Body::Moon, 29.96, 13.0);
    let snapshot = engine(fixture)
        .compute_at(&moscow_request(), evaluation_instant())
        .snapshot
        .unwrap();

    let sun = snapshot.planet(Body::Sun).unwrap();
    assert_eq!(sun.longitude, 0.0);
    assert_eq!(sun.placement.sign.sign, "Aries");
    assert_eq!(sun.placement.sign.degree_in_sign, 0.0);
    assert_eq!(sun.placement.house, 1);

    let moon = snapshot.planet(Body::Moon).unwrap();
    assert_eq!(moon.longitude, 29.96);
    assert_eq!(moon.placement.sign.sign, "Aries");
    assert!(moon.placement.sign.degree_in_sign < 30.0);

    for planet in &snapshot.planets {
        let expected = (planet.longitude / 30.0).floor() as u8 % 12;
        assert_eq!(planet.placement.sign.sign_index, expected, "{}", planet.body);
    }
}

#[test]
fn test_time_unknown_uses_noon() {
    let request = ChartRequest::new(1990, 1, 15, 55.75, 37.62).with_time_unknown();
    let response = engine(moscow_fixture()).compute_at(&request, evaluation_instant());
    let snapshot = response.snapshot.unwrap();
    assert!(snapshot.time_unknown);
    assert_eq!(snapshot.birth.hour, 12);
    assert_eq!(snapshot.birth.minute, 0);
    assert!(response.report.contains("Birth time unknown"));
}

#[test]
fn test_time_unknown_ignores_supplied_time() {
    let request = moscow_request().with_time_unknown();
    let snapshot = engine(moscow_fixture())
        .compute_at(&request, evaluation_instant())
        .snapshot
        .unwrap();
    assert_eq!((snapshot.birth.hour, snapshot.birth.minute), (12, 0));
}

#[test]
fn test_missing_latitude_is_an_error() {
    let mut request = moscow_request();
    request.latitude = None;
    let response = engine(moscow_fixture()).compute_at(&request, evaluation_instant());
    assert!(!response.is_ok());
    assert!(response.snapshot.is_none());
    assert!(response.report.is_empty());
    assert!(response.error.unwrap().contains("latitude"));
}

#[test]
fn test_invalid_date_is_an_error() {
    let request = ChartRequest::new(1990, 2, 30, 55.75, 37.62);
    let response = engine(moscow_fixture()).compute_at(&request, evaluation_instant());
    assert!(response.snapshot.is_none());
    assert!(response.error.is_some());
}

#[test]
fn test_exact_square() {
    let fixture = FixtureEphemeris::new(0.0, 180.0)
        .with_body(Body::Sun, 100.0, 1.0)
        .with_body(Body::Mars, 190.0, 0.5);
    let snapshot = engine(fixture)
        .compute_at(&moscow_request(), evaluation_instant())
        .snapshot
        .unwrap();
    let square = snapshot
        .aspects
        .iter()
        .find(|a| a.from == "sun" && a.to == "mars" && a.aspect.aspect == "square")
        .unwrap();
    assert_eq!(square.aspect.orb, 0.0);
    assert!(square.aspect.exact);
}

#[test]
fn test_failing_body_is_omitted() {
    let snapshot = engine(moscow_fixture().failing(Body::Mars))
        .compute_at(&moscow_request(), evaluation_instant())
        .snapshot
        .unwrap();
    assert!(snapshot.planet(Body::Mars).is_none());
    assert_eq!(snapshot.planets.len(), 11);
    assert!(snapshot.aspects.iter().all(|a| a.from != "mars" && a.to != "mars"));
}

#[test]
fn test_failing_rahu_drops_ketu() {
    let snapshot = engine(moscow_fixture().failing(Body::Rahu))
        .compute_at(&moscow_request(), evaluation_instant())
        .snapshot
        .unwrap();
    assert!(snapshot.planet(Body::Rahu).is_none());
    assert!(snapshot.planet(Body::Ketu).is_none());
}

#[test]
fn test_missing_moon_drops_dasha_and_fortuna() {
    let snapshot = engine(moscow_fixture().failing(Body::Moon))
        .compute_at(&moscow_request(), evaluation_instant())
        .snapshot
        .unwrap();
    assert!(snapshot.dasha.is_none());
    assert!(snapshot.sensitive_point(SensitivePointKind::ParsFortuna).is_none());
    assert!(snapshot.sensitive_point(SensitivePointKind::Vertex).is_some());
}

#[test]
fn test_house_failure_is_an_error() {
    let fixture = FixtureEphemeris::without_houses().with_body(Body::Sun, 100.0, 1.0);
    let response = engine(fixture).compute_at(&moscow_request(), evaluation_instant());
    assert!(response.snapshot.is_none());
    assert!(response.error.unwrap().contains("Ascendant"));
}

#[test]
fn test_out_of_range_hour_drops_dasha() {
    let request = ChartRequest::new(1990, 1, 15, 55.75, 37.62).with_time(25, 0);
    let response = engine(moscow_fixture()).compute_at(&request, evaluation_instant());
    assert!(response.is_ok());
    let snapshot = response.snapshot.unwrap();
    assert!(snapshot.dasha.is_none());
    assert_eq!(snapshot.planets.len(), 12);
}

#[test]
fn test_birth_near_date_limit_drops_only_dasha() {
    let request = ChartRequest::new(262_100, 1, 1, 55.75, 37.62).with_time(12, 0);
    let birth = Utc.with_ymd_and_hms(262_100, 1, 1, 12, 0, 0).unwrap();
    let response = engine(moscow_fixture()).compute_at(&request, birth);
    assert!(response.is_ok(), "{:?}", response.error);
    let snapshot = response.snapshot.unwrap();
    assert!(snapshot.dasha.is_none());
    assert_eq!(snapshot.planets.len(), 12);
}

#[test]
fn test_engine_sets_sidereal_mode() {
    let settings = EngineSettings {
        ayanamsa: Ayanamsa::Raman,
    };
    let engine = ChartEngine::new(moscow_fixture(), settings);
    assert_eq!(engine.provider().sidereal_mode(), Some(Ayanamsa::Raman));
    let snapshot = engine
        .compute_at(&moscow_request(), evaluation_instant())
        .snapshot
        .unwrap();
    assert_eq!(snapshot.ayanamsa, "raman");
}

#[test]
fn test_deterministic() {
    let engine = engine(moscow_fixture());
    let a = engine.compute_at(&moscow_request(), evaluation_instant());
    let b = engine.compute_at(&moscow_request(), evaluation_instant());
    assert_eq!(a.report, b.report);
}

#[test]
fn test_snapshot_serializes_to_json() {
    let snapshot = engine(moscow_fixture())
        .compute_at(&moscow_request(), evaluation_instant())
        .snapshot
        .unwrap();
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["ascendant"]["sign"], "Libra");
    assert_eq!(json["planets"][0]["body"], "sun");
    assert_eq!(json["planets"][0]["house"], 4);
    assert_eq!(json["birth"]["julianDay"], snapshot.birth.julian_day);
}

#[test]
fn test_request_from_json() {
    let request: ChartRequest = serde_json::from_str(
        r#"{"year":1990,"month":1,"day":15,"hour":14,"minute":30,"latitude":55.75,"longitude":37.62}"#,
    )
    .unwrap();
    assert_eq!(request, moscow_request());
}
