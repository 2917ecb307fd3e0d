use anyhow::Context;
use chrono::{Datelike, NaiveDate, TimeZone, Utc};
use clap::Parser;
use std::path::PathBuf;
use urania::{Ayanamsa, ChartEngine, ChartRequest, EngineSettings, SwissEphemerisAdapter};

#[derive(Parser, Debug)]
#[command(author, version, about = "Compute a sidereal natal chart")]
struct Args {
    /// Birth date as YYYY-MM-DD.
    #[arg(long)]
    date: String,

    /// Birth time (UT) as HH:MM. Omit when unknown.
    #[arg(long)]
    time: Option<String>,

    /// Latitude in degrees, north positive.
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// Longitude in degrees, east positive.
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,

    /// Treat the birth time as unknown (noon is used).
    #[arg(long)]
    time_unknown: bool,

    /// Print the JSON snapshot instead of the text report.
    #[arg(long)]
    json: bool,

    /// Ayanamsa override (otherwise configs/urania.toml, then lahiri).
    #[arg(long)]
    ayanamsa: Option<String>,

    /// Swiss Ephemeris data directory override.
    #[arg(long)]
    ephemeris_path: Option<PathBuf>,

    /// Evaluate the dasha state at this date (YYYY-MM-DD) instead of today.
    #[arg(long)]
    at: Option<String>,
}

fn parse_time(text: &str) -> anyhow::Result<(u32, u32)> {
    let (h, m) = text
        .split_once(':')
        .with_context(|| format!("time must be HH:MM, got {text:?}"))?;
    let hour = h.trim().parse().with_context(|| format!("invalid hour in {text:?}"))?;
    let minute = m.trim().parse().with_context(|| format!("invalid minute in {text:?}"))?;
    Ok((hour, minute))
}

fn parse_date(text: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .with_context(|| format!("date must be YYYY-MM-DD, got {text:?}"))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let config = urania_config::load_settings().context("loading configs/urania.toml")?;
    let ayanamsa_name = args.ayanamsa.as_deref().unwrap_or(&config.ayanamsa);
    let ayanamsa = Ayanamsa::from_name(ayanamsa_name)?;
    let ephemeris_path = args.ephemeris_path.clone().or(config.ephemeris_path.clone());
    log::info!("ayanamsa {}, ephemeris {:?}", ayanamsa.name(), ephemeris_path);

    let birth = parse_date(&args.date)?;
    let mut request = ChartRequest::new(
        birth.year(),
        birth.month(),
        birth.day(),
        args.lat,
        args.lon,
    );
    match args.time.as_deref() {
        Some(text) if !args.time_unknown => {
            let (hour, minute) = parse_time(text)?;
            request = request.with_time(hour, minute);
        }
        _ => request = request.with_time_unknown(),
    }

    let now = match args.at.as_deref() {
        Some(text) => {
            let date = parse_date(text)?;
            let midnight = date.and_hms_opt(0, 0, 0).context("invalid evaluation date")?;
            Utc.from_utc_datetime(&midnight)
        }
        None => Utc::now(),
    };

    let engine = ChartEngine::new(
        SwissEphemerisAdapter::new(ephemeris_path),
        EngineSettings { ayanamsa },
    );
    let response = engine.compute_at(&request, now);
    if let Some(error) = &response.error {
        anyhow::bail!("chart computation failed: {error}");
    }

    if args.json || config.json {
        let json = serde_json::to_string_pretty(&response.snapshot)?;
        println!("{json}");
    } else {
        print!("{}", response.report);
    }
    Ok(())
}
