//! Serialisable per-section results, one builder per metric.

use std::path::Path;

use serde::Serialize;

use crate::aqi::{calculate_aqi_pm10, calculate_aqi_pm25};
use crate::error::Result;
use crate::ndvi::{categorize_ndvi, load_ndvi_field, NdviCategory, NdviField};
use crate::soil::{categorize_soil_quality, SoilCategory};

#[derive(Debug, Clone, Serialize)]
pub struct NdviReport {
    pub mean: f64,
    pub category: NdviCategory,
    pub label: &'static str,
    pub width: usize,
    pub height: usize,
}

impl NdviReport {
    pub fn from_field(field: &NdviField) -> Self {
        let mean = field.mean();
        let category = categorize_ndvi(mean);
        Self {
            mean,
            category,
            label: category.label(),
            width: field.width,
            height: field.height,
        }
    }

    /// Decode both bands and build the report. The field is returned too so
    /// callers can render it.
    pub fn from_paths(infrared: &Path, red: &Path) -> Result<(Self, NdviField)> {
        let field = load_ndvi_field(infrared, red)?;
        let report = Self::from_field(&field);
        log::info!("NDVI {:.4} ({})", report.mean, report.label);
        Ok((report, field))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Pollutant {
    #[serde(rename = "PM2.5")]
    Pm25,
    #[serde(rename = "PM10")]
    Pm10,
}

#[derive(Debug, Clone, Serialize)]
pub struct AqiReport {
    pub pm25: f64,
    pub pm10: f64,
    pub pm25_index: i64,
    pub pm10_index: i64,
    pub aqi: i64,
    /// Pollutant that set the overall index; PM2.5 on a tie.
    pub dominant: Pollutant,
}

impl AqiReport {
    pub fn new(pm25: f64, pm10: f64) -> Self {
        let pm25_index = calculate_aqi_pm25(pm25);
        let pm10_index = calculate_aqi_pm10(pm10);
        let (aqi, dominant) = if pm10_index > pm25_index {
            (pm10_index, Pollutant::Pm10)
        } else {
            (pm25_index, Pollutant::Pm25)
        };
        log::info!("AQI {aqi} (PM2.5 → {pm25_index}, PM10 → {pm10_index})");
        Self { pm25, pm10, pm25_index, pm10_index, aqi, dominant }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SoilReport {
    pub ph: f64,
    pub category: SoilCategory,
    pub label: &'static str,
}

impl SoilReport {
    pub fn new(ph: f64) -> Self {
        let category = categorize_soil_quality(ph);
        Self { ph, category, label: category.label() }
    }
}
