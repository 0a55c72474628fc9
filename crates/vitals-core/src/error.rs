use std::path::PathBuf;

/// Errors raised while loading bands or validating readings.
#[derive(Debug, thiserror::Error)]
pub enum VitalsError {
    #[error("cannot decode image {}: {source}", path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("band has zero size ({width}x{height})")]
    EmptyBand { width: usize, height: usize },

    #[error("band data has {len} samples, expected {width}x{height}")]
    BandShape { width: usize, height: usize, len: usize },

    #[error("invalid {field} reading: '{input}' is not a number")]
    InvalidReading { field: String, input: String },
}

pub type Result<T> = std::result::Result<T, VitalsError>;
