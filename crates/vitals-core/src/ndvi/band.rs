use std::path::Path;

use image::imageops::{self, FilterType};
use image::{GrayImage, ImageBuffer, Luma};

use crate::error::{Result, VitalsError};

/// A single image band: intensity samples as f32, row-major.
///
/// Values decoded from 8-bit images lie in 0..=255; nothing else about the
/// range is assumed.
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    pub data: Vec<f32>,
    pub width: usize,
    pub height: usize,
}

impl Band {
    /// Wrap row-major samples. `data.len()` must equal `width * height`.
    pub fn new(width: usize, height: usize, data: Vec<f32>) -> Result<Self> {
        if data.len() != width * height {
            return Err(VitalsError::BandShape { width, height, len: data.len() });
        }
        Ok(Self { data, width, height })
    }

    /// A band with every sample set to `fill`.
    pub fn filled(width: usize, height: usize, fill: f32) -> Self {
        Self {
            data: vec![fill; width * height],
            width,
            height,
        }
    }

    pub fn from_luma(img: &GrayImage) -> Self {
        Self {
            data: img.as_raw().iter().map(|&v| v as f32).collect(),
            width: img.width() as usize,
            height: img.height() as usize,
        }
    }

    /// Decode an image file and reduce it to 8-bit grayscale.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|source| VitalsError::ImageDecode {
            path: path.to_path_buf(),
            source,
        })?;
        let band = Self::from_luma(&img.to_luma8());
        log::debug!("decoded {} as {}x{} band", path.display(), band.width, band.height);
        Ok(band)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.width + col]
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Resample to `width`×`height` with the triangle (bilinear) filter.
    ///
    /// Samples are normalised to [0, 1] around the resize, since `image`
    /// clamps float pixels to that range. Returns a copy when the size
    /// already matches.
    pub fn resized(&self, width: usize, height: usize) -> Result<Self> {
        if self.is_empty() {
            return Err(VitalsError::EmptyBand { width: self.width, height: self.height });
        }
        if width == self.width && height == self.height {
            return Ok(self.clone());
        }
        log::debug!(
            "resampling band {}x{} -> {}x{}",
            self.width, self.height, width, height
        );

        let lo = self.data.iter().cloned().fold(f32::INFINITY, f32::min);
        let hi = self.data.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        let range = hi - lo;
        if range <= 0.0 {
            return Ok(Self::filled(width, height, lo));
        }

        let normalised: Vec<f32> = self.data.iter().map(|&v| (v - lo) / range).collect();
        let src: ImageBuffer<Luma<f32>, Vec<f32>> =
            ImageBuffer::from_raw(self.width as u32, self.height as u32, normalised).ok_or(
                VitalsError::BandShape { width: self.width, height: self.height, len: self.data.len() },
            )?;
        let out = imageops::resize(&src, width as u32, height as u32, FilterType::Triangle);

        Ok(Self {
            data: out.into_raw().into_iter().map(|v| v * range + lo).collect(),
            width,
            height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn new_rejects_mismatched_length() {
        let err = Band::new(3, 2, vec![0.0; 5]).unwrap_err();
        assert!(matches!(err, VitalsError::BandShape { width: 3, height: 2, len: 5 }));
    }

    #[test]
    fn from_luma_keeps_row_major_order() {
        let img = GrayImage::from_raw(2, 2, vec![1, 2, 3, 4]).unwrap();
        let band = Band::from_luma(&img);
        assert_eq!(band.width, 2);
        assert_eq!(band.height, 2);
        assert_eq!(band.get(0, 1), 2.0);
        assert_eq!(band.get(1, 0), 3.0);
    }

    #[test]
    fn resize_to_same_size_is_identity() {
        let band = Band::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(band.resized(2, 2).unwrap(), band);
    }

    #[test]
    fn resize_constant_band_stays_constant() {
        let band = Band::filled(7, 5, 42.0);
        let out = band.resized(13, 3).unwrap();
        assert_eq!((out.width, out.height), (13, 3));
        for &v in &out.data {
            assert_relative_eq!(v, 42.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn upsample_interpolates_between_samples() {
        let band = Band::new(2, 1, vec![0.0, 100.0]).unwrap();
        let out = band.resized(4, 1).unwrap();
        assert_eq!((out.width, out.height), (4, 1));
        for w in out.data.windows(2) {
            assert!(w[0] <= w[1] + 1e-3, "expected a non-decreasing ramp, got {:?}", out.data);
        }
        assert!(out.get(0, 1) > 0.0 && out.get(0, 2) < 100.0);
        assert!(out.data.iter().all(|&v| (0.0..=100.0 + 1e-3).contains(&v)));
    }

    #[test]
    fn resize_keeps_values_above_unit_range() {
        // 8-bit intensities must survive the float resize unclamped.
        let band = Band::new(2, 2, vec![200.0, 200.0, 250.0, 250.0]).unwrap();
        let out = band.resized(4, 4).unwrap();
        assert_relative_eq!(out.get(0, 0), 200.0, epsilon = 1e-2);
        assert_relative_eq!(out.get(3, 3), 250.0, epsilon = 1e-2);
        assert!(out.data.iter().all(|&v| v >= 200.0 - 1e-2 && v <= 250.0 + 1e-2));
    }

    #[test]
    fn resize_of_empty_band_fails() {
        let band = Band::filled(0, 4, 0.0);
        assert!(matches!(band.resized(2, 2), Err(VitalsError::EmptyBand { .. })));
    }

    #[test]
    fn open_missing_file_is_decode_error() {
        let err = Band::open("definitely/not/here.tif").unwrap_err();
        assert!(matches!(err, VitalsError::ImageDecode { .. }));
    }

    #[test]
    fn open_reads_png_as_grayscale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("band.png");
        GrayImage::from_raw(3, 1, vec![0, 128, 255]).unwrap().save(&path).unwrap();

        let band = Band::open(&path).unwrap();
        assert_eq!(band.data, vec![0.0, 128.0, 255.0]);
    }
}
