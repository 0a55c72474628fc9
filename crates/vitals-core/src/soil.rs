//! Soil quality class from a pH reading.
use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SoilCategory {
    Neutral,
    SlightlyAcidic,
    SlightlyAlkaline,
    Acidic,
    Alkaline,
    /// Only reachable for NaN.
    Invalid,
}

impl SoilCategory {
    pub fn label(self) -> &'static str {
        match self {
            SoilCategory::Neutral => "Neutral soil, perfect!",
            SoilCategory::SlightlyAcidic => "Slightly acidic soil, somewhat optimal for plants",
            SoilCategory::SlightlyAlkaline => "Slightly alkaline, somewhat optimal for plants",
            SoilCategory::Acidic => "Acidic, please add some more alkali",
            SoilCategory::Alkaline => "Alkaline, please add some more acid",
            SoilCategory::Invalid => "Invalid pH value",
        }
    }
}

impl fmt::Display for SoilCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `[6.5, 7.5]` neutral, `[6.0, 6.5)` slightly acidic, `(7.5, 8.0]`
/// slightly alkaline, `< 6.0` acidic, `> 8.0` alkaline.
pub fn categorize_soil_quality(ph: f64) -> SoilCategory {
    if (6.5..=7.5).contains(&ph) {
        SoilCategory::Neutral
    } else if (6.0..6.5).contains(&ph) {
        SoilCategory::SlightlyAcidic
    } else if ph > 7.5 && ph <= 8.0 {
        SoilCategory::SlightlyAlkaline
    } else if ph < 6.0 {
        SoilCategory::Acidic
    } else if ph > 8.0 {
        SoilCategory::Alkaline
    } else {
        SoilCategory::Invalid
    }
}
