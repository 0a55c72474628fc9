//! Normalized Difference Vegetation Index from an infrared and a red band.
//!
//! ```text
//!   NDVI = (NIR − Red) / (NIR + Red)
//! ```
//!
//! The red band is resampled onto the infrared grid first. A pixel whose
//! denominator is exactly zero divides by 1 instead, so a pixel dark in both
//! bands contributes 0 to the mean.
mod band;
mod category;

use std::path::Path;

use image::{GrayImage, Luma};
#[cfg(feature = "threading")]
use rayon::prelude::*;

use crate::error::{Result, VitalsError};

pub use band::Band;
pub use category::{categorize_ndvi, NdviCategory};

/// Per-pixel NDVI on the infrared band's grid, row-major, values in [-1, 1]
/// for non-negative inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct NdviField {
    pub data: Vec<f32>,
    pub width: usize,
    pub height: usize,
}

impl NdviField {
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.width + col]
    }

    /// Arithmetic mean over all pixels, accumulated in f64.
    pub fn mean(&self) -> f64 {
        #[cfg(feature = "threading")]
        let sum: f64 = self.data.par_iter().map(|&v| v as f64).sum();
        #[cfg(not(feature = "threading"))]
        let sum: f64 = self.data.iter().map(|&v| v as f64).sum();
        sum / self.data.len() as f64
    }

    /// Grayscale preview: −1 → black, 0 → mid grey, +1 → white.
    pub fn to_preview_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            let v = self.get(y as usize, x as usize);
            let t = ((v + 1.0) / 2.0).clamp(0.0, 1.0);
            Luma([(t * 255.0).round() as u8])
        })
    }
}

#[inline]
fn normalized_difference(nir: f32, red: f32) -> f32 {
    let sum = nir + red;
    let denom = if sum == 0.0 { 1.0 } else { sum };
    (nir - red) / denom
}

/// Compute the per-pixel NDVI field.
///
/// `red` is bilinearly resampled to `infrared`'s dimensions when they differ.
/// Either band having zero width or height is an error.
pub fn compute_ndvi_field(infrared: &Band, red: &Band) -> Result<NdviField> {
    for band in [infrared, red] {
        if band.is_empty() {
            return Err(VitalsError::EmptyBand { width: band.width, height: band.height });
        }
    }

    let red = red.resized(infrared.width, infrared.height)?;

    #[cfg(feature = "threading")]
    let data: Vec<f32> = infrared
        .data
        .par_iter()
        .zip(red.data.par_iter())
        .map(|(&nir, &r)| normalized_difference(nir, r))
        .collect();
    #[cfg(not(feature = "threading"))]
    let data: Vec<f32> = infrared
        .data
        .iter()
        .zip(red.data.iter())
        .map(|(&nir, &r)| normalized_difference(nir, r))
        .collect();

    Ok(NdviField {
        data,
        width: infrared.width,
        height: infrared.height,
    })
}

/// Decode both band files and compute the per-pixel field.
pub fn load_ndvi_field(infrared_path: impl AsRef<Path>, red_path: impl AsRef<Path>) -> Result<NdviField> {
    let infrared = Band::open(infrared_path)?;
    let red = Band::open(red_path)?;
    compute_ndvi_field(&infrared, &red)
}

/// Load both bands from disk and return the mean NDVI.
pub fn calculate_ndvi(infrared_path: impl AsRef<Path>, red_path: impl AsRef<Path>) -> Result<f64> {
    let field = load_ndvi_field(infrared_path, red_path)?;
    let mean = field.mean();
    log::info!("mean NDVI over {}x{} pixels: {mean:.4}", field.width, field.height);
    Ok(mean)
}
