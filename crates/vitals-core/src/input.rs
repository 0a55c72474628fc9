//! Validation of free-form numeric readings typed at the console.

use crate::error::{Result, VitalsError};

/// Parse a reading such as `"35.4"` or `" 7 "` into an `f64`.
///
/// `field` names the reading in the error (`"PM2.5"`, `"pH"`, ...).
pub fn parse_reading(field: &str, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    trimmed.parse::<f64>().map_err(|_| VitalsError::InvalidReading {
        field: field.to_string(),
        input: trimmed.to_string(),
    })
}

/// Parse a pollutant concentration. Same as [`parse_reading`], but `nan`
/// and `±inf` are rejected: they have no place on the breakpoint tables and
/// would otherwise collapse to a bogus integer index.
pub fn parse_concentration(field: &str, text: &str) -> Result<f64> {
    let value = parse_reading(field, text)?;
    if !value.is_finite() {
        return Err(VitalsError::InvalidReading {
            field: field.to_string(),
            input: text.trim().to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_padded_numbers() {
        assert_eq!(parse_reading("pH", "7").unwrap(), 7.0);
        assert_eq!(parse_reading("PM2.5", "  35.4\n").unwrap(), 35.4);
        assert_eq!(parse_reading("PM10", "-3.5").unwrap(), -3.5);
        assert_eq!(parse_reading("PM10", "1e2").unwrap(), 100.0);
    }

    #[test]
    fn rejects_non_numeric_text() {
        for bad in ["", "abc", "7,5", "12 µg"] {
            match parse_reading("pH", bad) {
                Err(VitalsError::InvalidReading { field, input }) => {
                    assert_eq!(field, "pH");
                    assert_eq!(input, bad.trim());
                }
                other => panic!("'{bad}' should be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn concentration_rejects_non_finite_values() {
        for bad in ["nan", "NaN", "inf", "-inf", "infinity"] {
            assert!(
                matches!(parse_concentration("PM2.5", bad), Err(VitalsError::InvalidReading { .. })),
                "'{bad}' should be rejected"
            );
        }
        assert_eq!(parse_concentration("PM10", " 54 ").unwrap(), 54.0);
        assert_eq!(parse_concentration("PM10", "-2").unwrap(), -2.0);
    }

    #[test]
    fn ph_reading_still_accepts_nan() {
        assert!(parse_reading("pH", "nan").unwrap().is_nan());
    }

    #[test]
    fn error_message_names_the_field() {
        let err = parse_reading("PM2.5", "lots").unwrap_err();
        assert_eq!(err.to_string(), "invalid PM2.5 reading: 'lots' is not a number");
    }
}
