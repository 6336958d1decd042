use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use urania::houses::AngleSystem;

const CONFIG_PATHS: [&str; 2] = ["configs/urania.toml", "../../configs/urania.toml"];

/// Largest civil time offset in use anywhere, in minutes.
const MAX_OFFSET_MINUTES: i32 = 18 * 60;

#[derive(Debug, Clone, PartialEq)]
pub struct UraniaSettings {
    pub angle_system: AngleSystem,
    pub utc_offset_minutes: Option<i32>,
    pub timezone: Option<String>,
    pub ledger_path: PathBuf,
    pub free_allotment: u32,
    pub render_size: u32,
}

impl Default for UraniaSettings {
    fn default() -> Self {
        Self {
            angle_system: AngleSystem::Reference,
            utc_offset_minutes: None,
            timezone: None,
            ledger_path: PathBuf::from("urania-credits.json"),
            free_allotment: obol::FREE_ALLOTMENT,
            render_size: default_render_size(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ChartToml {
    #[serde(default)]
    angles: Option<String>,
    #[serde(default)]
    utc_offset_minutes: Option<i32>,
    #[serde(default)]
    timezone: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CreditsToml {
    #[serde(default)]
    ledger_path: Option<PathBuf>,
    #[serde(default)]
    free_allotment: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct RenderToml {
    #[serde(default = "default_render_size")]
    size: u32,
}

fn default_render_size() -> u32 {
    300
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    chart: Option<ChartToml>,
    #[serde(default)]
    credits: Option<CreditsToml>,
    #[serde(default)]
    render: Option<RenderToml>,
}

/// Try the common relative paths for `configs/urania.toml`.
/// `Ok(None)` when no file exists at any of them.
pub fn read_config_toml_text() -> anyhow::Result<Option<String>> {
    for p in &CONFIG_PATHS {
        match fs::read_to_string(p) {
            Ok(text) => {
                log::debug!("loaded config from {p}");
                return Ok(Some(text));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => anyhow::bail!("Could not read {p}: {e}"),
        }
    }
    Ok(None)
}

/// Settings from `configs/urania.toml`, or the defaults when there is none.
pub fn load_settings() -> anyhow::Result<UraniaSettings> {
    match read_config_toml_text()? {
        Some(text) => parse_settings(&text),
        None => {
            log::debug!("no urania.toml found in {:?}, using defaults", CONFIG_PATHS);
            Ok(UraniaSettings::default())
        }
    }
}

pub fn parse_settings(text: &str) -> anyhow::Result<UraniaSettings> {
    let root: RootConfigToml =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse urania.toml: {e}"))?;
    let defaults = UraniaSettings::default();

    let ChartToml {
        angles,
        utc_offset_minutes,
        timezone,
    } = root.chart.unwrap_or_default();

    let angle_system = match angles {
        Some(name) => name.parse::<AngleSystem>()?,
        None => defaults.angle_system,
    };
    if let Some(offset) = utc_offset_minutes {
        validate_offset(offset)?;
    }

    let credits = root.credits.unwrap_or_default();
    let free_allotment = credits.free_allotment.unwrap_or(defaults.free_allotment);
    if free_allotment == 0 {
        anyhow::bail!("credits.free_allotment must be at least 1");
    }

    let render_size = root.render.map(|r| r.size).unwrap_or(defaults.render_size);
    if render_size == 0 {
        anyhow::bail!("render.size must be greater than 0");
    }

    Ok(UraniaSettings {
        angle_system,
        utc_offset_minutes,
        timezone,
        ledger_path: credits.ledger_path.unwrap_or(defaults.ledger_path),
        free_allotment,
        render_size,
    })
}

pub fn validate_offset(minutes: i32) -> anyhow::Result<()> {
    if !(-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&minutes) {
        anyhow::bail!(
            "utc_offset_minutes {minutes} is outside ±{MAX_OFFSET_MINUTES} minutes"
        );
    }
    Ok(())
}
