use anyhow::Context;
use clap::Args;
use obol::{Feature, Ledger};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use urania::houses::AngleSystem;
use urania::rendering::render_svg;
use urania::{BirthChart, BirthInput, ChartCalculator};
use urania_config::{validate_offset, UraniaSettings};

#[derive(Args, Debug, Clone)]
pub struct ChartArgs {
    /// Display name.
    #[arg(long, default_value = "")]
    pub name: String,

    /// Birth date, YYYY-MM-DD.
    #[arg(long)]
    pub date: String,

    /// Birth time, HH:MM (24h).
    #[arg(long)]
    pub time: String,

    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub lng: Option<f64>,

    /// Minutes east of UTC; unset reads the birth time as UT.
    #[arg(long, allow_hyphen_values = true)]
    pub utc_offset_minutes: Option<i32>,

    /// Time zone label echoed in the metadata.
    #[arg(long)]
    pub timezone: Option<String>,

    /// Angle system: reference | equal.
    #[arg(long)]
    pub angles: Option<AngleSystem>,

    /// Also write the chart wheel as SVG.
    #[arg(long)]
    pub svg: Option<PathBuf>,

    #[arg(long)]
    pub pretty: bool,

    /// Do not touch the credit ledger.
    #[arg(long)]
    pub no_charge: bool,
}

impl ChartArgs {
    fn birth_input(&self, settings: &UraniaSettings) -> BirthInput {
        let coordinates = match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(urania::Coordinates { lat, lng }),
            _ => None,
        };
        BirthInput {
            name: self.name.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            coordinates,
            utc_offset_minutes: self.utc_offset_minutes.or(settings.utc_offset_minutes),
            timezone: self.timezone.clone().or_else(|| settings.timezone.clone()),
        }
    }
}

/// Check credits, calculate, then charge. A failed calculation costs nothing.
pub fn run(args: &ChartArgs, settings: &UraniaSettings, out: &mut impl Write) -> anyhow::Result<()> {
    let input = args.birth_input(settings);
    if let Some(offset) = input.utc_offset_minutes {
        validate_offset(offset)?;
    }

    let mut ledger = if args.no_charge {
        None
    } else {
        let ledger = Ledger::load(&settings.ledger_path, settings.free_allotment)?;
        if !ledger.can_afford(Feature::BirthChart) {
            anyhow::bail!(
                "Insufficient credits. You need {} credit to generate a birth chart.",
                Feature::BirthChart.cost()
            );
        }
        Some(ledger)
    };

    let calculator = ChartCalculator::with_angle_system(args.angles.unwrap_or(settings.angle_system));
    let chart = calculator.calculate(&input)?;
    if calculator.angle_system() == AngleSystem::Reference {
        log::debug!("reference angles in use: Ascendant and houses are the same for every chart");
    }

    if let Some(path) = &args.svg {
        write_svg(&chart, path, settings.render_size)?;
    }

    if let Some(ledger) = ledger.as_mut() {
        ledger.charge(Feature::BirthChart)?;
        ledger.save(&settings.ledger_path)?;
    }

    let json = if args.pretty {
        chart.to_json_pretty()?
    } else {
        chart.to_json()?
    };
    writeln!(out, "{json}")?;
    Ok(())
}

fn write_svg(chart: &BirthChart, path: &Path, size: u32) -> anyhow::Result<()> {
    fs::write(path, render_svg(chart, size as f32))
        .with_context(|| format!("writing chart wheel to {}", path.display()))?;
    log::info!("chart wheel written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args() -> ChartArgs {
        ChartArgs {
            name: "Test".to_string(),
            date: "2004-02-12".to_string(),
            time: "11:25".to_string(),
            lat: Some(20.7),
            lng: Some(77.0),
            utc_offset_minutes: None,
            timezone: None,
            angles: None,
            svg: None,
            pretty: false,
            no_charge: false,
        }
    }

    fn settings(dir: &std::path::Path) -> UraniaSettings {
        UraniaSettings {
            ledger_path: dir.join("credits.json"),
            ..UraniaSettings::default()
        }
    }

    #[test]
    fn test_chart_charges_one_credit() {
        let dir = tempdir().unwrap();
        let settings = settings(dir.path());
        let mut out = Vec::new();

        run(&args(), &settings, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["ascendant"]["sign"], "Taurus");
        assert_eq!(Ledger::load(&settings.ledger_path, 1).unwrap().balance(), 4);
    }

    #[test]
    fn test_failed_chart_is_free() {
        let dir = tempdir().unwrap();
        let settings = settings(dir.path());
        let mut bad = args();
        bad.lat = None;

        assert!(run(&bad, &settings, &mut Vec::new()).is_err());
        assert!(!settings.ledger_path.exists());
    }

    #[test]
    fn test_empty_ledger_blocks_chart() {
        let dir = tempdir().unwrap();
        let settings = settings(dir.path());
        Ledger::with_balance(0, 0).save(&settings.ledger_path).unwrap();
        let low = UraniaSettings {
            free_allotment: 0,
            ..settings
        };

        let err = run(&args(), &low, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("Insufficient credits"));
    }

    #[test]
    fn test_extreme_offset_rejected_before_charging() {
        let dir = tempdir().unwrap();
        let settings = settings(dir.path());
        for offset in [i32::MIN, i32::MAX, 1081] {
            let mut a = args();
            a.utc_offset_minutes = Some(offset);
            assert!(run(&a, &settings, &mut Vec::new()).is_err());
        }
        assert!(!settings.ledger_path.exists());
    }

    #[test]
    fn test_no_charge_and_svg_output() {
        let dir = tempdir().unwrap();
        let settings = settings(dir.path());
        let mut a = args();
        a.no_charge = true;
        a.svg = Some(dir.path().join("wheel.svg"));
        a.angles = Some(AngleSystem::Equal);

        let mut out = Vec::new();
        run(&a, &settings, &mut out).unwrap();

        assert!(!settings.ledger_path.exists());
        let svg = fs::read_to_string(dir.path().join("wheel.svg")).unwrap();
        assert!(svg.starts_with("<svg"));
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["metadata"]["angleSystem"], "equal");
    }

    #[test]
    fn test_config_offset_used_when_flag_absent() {
        let dir = tempdir().unwrap();
        let settings = UraniaSettings {
            utc_offset_minutes: Some(330),
            timezone: Some("Asia/Kolkata".to_string()),
            ..settings(dir.path())
        };
        let mut a = args();
        a.no_charge = true;

        let mut out = Vec::new();
        run(&a, &settings, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let jd = value["metadata"]["julianDay"].as_f64().unwrap();
        assert!((jd - 2453047.74653).abs() < 1e-6);
        assert_eq!(value["metadata"]["timezone"], "Asia/Kolkata");
    }
}
