//! Field report: mean NDVI from two band images, AQI from PM readings and a
//! soil class from pH. Sections run in order; a bad reading skips only its
//! own section, an unreadable image aborts the run.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use vitals_core::{parse_concentration, parse_reading, AqiReport, NdviReport, SoilReport};

const AQI_INVALID: &str = "Invalid input. Please enter numeric values for PM2.5 and PM10.";
const PH_INVALID: &str = "Invalid input. Please enter a numeric value for pH.";

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "field_report", about = "Vegetation, air quality and soil report from field measurements")]
struct Args {
    /// Near-infrared band image.
    #[arg(long, default_value = "infrared_image.tif")]
    infrared: PathBuf,

    /// Red band image; resampled to the infrared band's size.
    #[arg(long, default_value = "red_img.tif")]
    red: PathBuf,

    /// PM2.5 concentration in µg/m³. Prompted for when omitted.
    #[arg(long, allow_hyphen_values = true)]
    pm25: Option<String>,

    /// PM10 concentration in µg/m³. Prompted for when omitted.
    #[arg(long, allow_hyphen_values = true)]
    pm10: Option<String>,

    /// Soil pH. Prompted for when omitted.
    #[arg(long, allow_hyphen_values = true)]
    ph: Option<String>,

    /// Skip the vegetation index section.
    #[arg(long)]
    skip_ndvi: bool,

    /// Write a grayscale preview of the per-pixel NDVI to this PNG.
    #[arg(long)]
    ndvi_png: Option<PathBuf>,

    /// Print one JSON object instead of text lines.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct FieldReport {
    ndvi: Option<NdviReport>,
    aqi: Option<AqiReport>,
    soil: Option<SoilReport>,
}

// ── Console helpers ───────────────────────────────────────────────────────────

/// Human-facing text goes to stderr in JSON mode so stdout stays parseable.
fn say(json: bool, msg: &str) {
    if json {
        eprintln!("{msg}");
    } else {
        println!("{msg}");
    }
}

fn prompt_line(json: bool, prompt: &str) -> Result<String> {
    if json {
        eprint!("{prompt}");
        io::stderr().flush().context("flushing prompt")?;
    } else {
        print!("{prompt}");
        io::stdout().flush().context("flushing prompt")?;
    }
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).context("reading from stdin")?;
    Ok(line)
}

type ReadingParser = fn(&str, &str) -> vitals_core::Result<f64>;

/// Take the reading from the flag or the console. `None` means `parse`
/// rejected the text; the reason is logged.
fn read_reading(
    json: bool,
    given: Option<&str>,
    field: &str,
    prompt: &str,
    parse: ReadingParser,
) -> Result<Option<f64>> {
    let text = match given {
        Some(t) => t.to_string(),
        None => prompt_line(json, prompt)?,
    };
    match parse(field, &text) {
        Ok(v) => Ok(Some(v)),
        Err(e) => {
            log::warn!("{e}");
            Ok(None)
        }
    }
}

// ── Sections ──────────────────────────────────────────────────────────────────

fn ndvi_section(args: &Args) -> Result<NdviReport> {
    let (report, field) = NdviReport::from_paths(&args.infrared, &args.red).with_context(|| {
        format!(
            "computing NDVI from {} and {}",
            args.infrared.display(),
            args.red.display()
        )
    })?;

    if let Some(path) = &args.ndvi_png {
        field
            .to_preview_image()
            .save(path)
            .with_context(|| format!("writing NDVI preview {}", path.display()))?;
        log::info!("wrote {}", path.display());
    }

    if !args.json {
        println!("Your NDVI value is: {:.2}", report.mean);
        println!("{}", report.label);
    }
    Ok(report)
}

fn aqi_section(args: &Args) -> Result<Option<AqiReport>> {
    let Some(pm25) = read_reading(
        args.json,
        args.pm25.as_deref(),
        "PM2.5",
        "Enter PM2.5 value (µg/m³): ",
        parse_concentration,
    )? else {
        say(args.json, AQI_INVALID);
        return Ok(None);
    };
    let Some(pm10) = read_reading(
        args.json,
        args.pm10.as_deref(),
        "PM10",
        "Enter PM10 value (µg/m³): ",
        parse_concentration,
    )? else {
        say(args.json, AQI_INVALID);
        return Ok(None);
    };

    let report = AqiReport::new(pm25, pm10);
    if !args.json {
        println!("The Air Quality Index (AQI) is: {}", report.aqi);
    }
    Ok(Some(report))
}

fn soil_section(args: &Args) -> Result<Option<SoilReport>> {
    let Some(ph) = read_reading(
        args.json,
        args.ph.as_deref(),
        "pH",
        "Enter the soil pH value: ",
        parse_reading,
    )? else {
        say(args.json, PH_INVALID);
        return Ok(None);
    };

    let report = SoilReport::new(ph);
    if !args.json {
        println!("The soil quality is {}", report.label);
    }
    Ok(Some(report))
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let ndvi = if args.skip_ndvi {
        None
    } else {
        Some(ndvi_section(&args)?)
    };
    let aqi = aqi_section(&args)?;
    let soil = soil_section(&args)?;

    if args.json {
        let report = FieldReport { ndvi, aqi, soil };
        println!("{}", serde_json::to_string_pretty(&report).context("serialising report")?);
    }
    Ok(())
}
