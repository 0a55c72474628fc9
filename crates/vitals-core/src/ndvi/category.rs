use std::fmt;

use serde::Serialize;

/// Vegetation class for a mean NDVI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NdviCategory {
    NonVegetated,
    Barren,
    Sparse,
    Moderate,
    Lush,
    Invalid,
}

impl NdviCategory {
    pub fn label(self) -> &'static str {
        match self {
            NdviCategory::NonVegetated => "Non-vegetated (Water, Bare Soil, Urban)",
            NdviCategory::Barren => "Barren (Little or No Vegetation)",
            NdviCategory::Sparse => "Sparse or Stressed Vegetation",
            NdviCategory::Moderate => "Moderate Vegetation (Reasonably Healthy)",
            NdviCategory::Lush => "Lush, Healthy Vegetation (High Biomass)",
            NdviCategory::Invalid => "Invalid NDVI Value",
        }
    }
}

impl fmt::Display for NdviCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a mean NDVI value.
///
/// | range        | class        |
/// |--------------|--------------|
/// | `< 0`        | NonVegetated |
/// | `== 0`       | Barren       |
/// | `(0, 0.2]`   | Sparse       |
/// | `(0.2, 0.5]` | Moderate     |
/// | `(0.5, 1]`   | Lush         |
/// | otherwise    | Invalid      |
///
/// The negative branch is tested first, so values below −1 still read as
/// non-vegetated; only `> 1` and NaN are invalid.
pub fn categorize_ndvi(value: f64) -> NdviCategory {
    if value < 0.0 {
        NdviCategory::NonVegetated
    } else if value == 0.0 {
        NdviCategory::Barren
    } else if value > 0.0 && value <= 0.2 {
        NdviCategory::Sparse
    } else if value > 0.2 && value <= 0.5 {
        NdviCategory::Moderate
    } else if value > 0.5 && value <= 1.0 {
        NdviCategory::Lush
    } else {
        log::warn!("NDVI value {value} is outside [-1, 1]");
        NdviCategory::Invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_fall_in_lower_class() {
        assert_eq!(categorize_ndvi(-0.01), NdviCategory::NonVegetated);
        assert_eq!(categorize_ndvi(0.0), NdviCategory::Barren);
        assert_eq!(categorize_ndvi(-0.0), NdviCategory::Barren);
        assert_eq!(categorize_ndvi(0.2), NdviCategory::Sparse);
        assert_eq!(categorize_ndvi(0.2000001), NdviCategory::Moderate);
        assert_eq!(categorize_ndvi(0.5), NdviCategory::Moderate);
        assert_eq!(categorize_ndvi(0.5000001), NdviCategory::Lush);
        assert_eq!(categorize_ndvi(1.0), NdviCategory::Lush);
    }

    #[test]
    fn out_of_range_is_invalid() {
        assert_eq!(categorize_ndvi(2.0), NdviCategory::Invalid);
        assert_eq!(categorize_ndvi(1.0001), NdviCategory::Invalid);
        assert_eq!(categorize_ndvi(f64::NAN), NdviCategory::Invalid);
        assert_eq!(categorize_ndvi(2.0).to_string(), "Invalid NDVI Value");
    }

    #[test]
    fn labels_are_human_readable() {
        assert_eq!(NdviCategory::Barren.label(), "Barren (Little or No Vegetation)");
        assert_eq!(
            categorize_ndvi(0.7).to_string(),
            "Lush, Healthy Vegetation (High Biomass)"
        );
    }
}
