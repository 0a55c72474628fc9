//! Environmental vitals: vegetation index, air quality index and soil pH class.
//!
//! The three metrics are independent; none of them shares state with the
//! others. File decoding and console I/O live with the caller
//! (`tools/field_report`), this crate only computes.

pub mod aqi;
pub mod error;
pub mod input;
pub mod ndvi;
pub mod report;
pub mod soil;

pub use aqi::{calculate_aqi, calculate_aqi_pm10, calculate_aqi_pm25, BreakpointTable, PM10_TABLE, PM25_TABLE};
pub use error::{Result, VitalsError};
pub use input::{parse_concentration, parse_reading};
pub use ndvi::{calculate_ndvi, categorize_ndvi, compute_ndvi_field, load_ndvi_field, Band, NdviCategory, NdviField};
pub use report::{AqiReport, NdviReport, Pollutant, SoilReport};
pub use soil::{categorize_soil_quality, SoilCategory};
