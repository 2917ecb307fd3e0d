use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const CONFIG_PATHS: [&str; 2] = ["configs/urania.toml", "../../configs/urania.toml"];

/// Resolved engine settings.
#[derive(Debug, Clone, PartialEq)]
pub struct UraniaSettings {
    /// Directory holding the Swiss Ephemeris data files
    pub ephemeris_path: Option<PathBuf>,
    pub ayanamsa: String,
    /// Print JSON instead of the text report
    pub json: bool,
}

impl Default for UraniaSettings {
    fn default() -> Self {
        Self {
            ephemeris_path: None,
            ayanamsa: default_ayanamsa(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct EphemerisToml {
    #[serde(default)]
    path: Option<PathBuf>,
    #[serde(default = "default_ayanamsa")]
    ayanamsa: String,
}

#[derive(Debug, Clone, Deserialize)]
struct OutputToml {
    #[serde(default)]
    format: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    ephemeris: Option<EphemerisToml>,
    #[serde(default)]
    output: Option<OutputToml>,
}

fn default_ayanamsa() -> String {
    "lahiri".to_string()
}

/// Try the common relative locations of `configs/urania.toml`.
///
/// `Ok(None)` when no candidate exists; any other read failure is an error.
pub fn read_config_text() -> anyhow::Result<Option<String>> {
    read_first_existing(&CONFIG_PATHS.map(Path::new))
}

fn read_first_existing(paths: &[&Path]) -> anyhow::Result<Option<String>> {
    for p in paths {
        match fs::read_to_string(p) {
            Ok(c) => return Ok(Some(c)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => anyhow::bail!("Failed to read {}: {e}", p.display()),
        }
    }
    Ok(None)
}

pub fn parse_settings(text: &str) -> anyhow::Result<UraniaSettings> {
    let root: RootConfigToml =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse urania.toml: {e}"))?;

    let mut settings = UraniaSettings::default();
    if let Some(eph) = root.ephemeris {
        settings.ephemeris_path = eph.path;
        settings.ayanamsa = eph.ayanamsa;
    }
    if let Some(format) = root.output.and_then(|o| o.format) {
        settings.json = match format.as_str() {
            "json" => true,
            "text" => false,
            other => anyhow::bail!("output.format must be \"text\" or \"json\", got {other:?}"),
        };
    }
    Ok(settings)
}

pub fn load_settings_from(path: &Path) -> anyhow::Result<UraniaSettings> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
    parse_settings(&text)
}

/// Load settings from the default locations. A missing file yields defaults;
/// an unreadable or malformed one is an error.
pub fn load_settings() -> anyhow::Result<UraniaSettings> {
    settings_from_text(read_config_text()?)
}

fn settings_from_text(text: Option<String>) -> anyhow::Result<UraniaSettings> {
    match text {
        Some(text) => parse_settings(&text),
        None => Ok(UraniaSettings::default()),
    }
}
