//! Degree/minute position strings.
//!
//! Latitudes and longitudes travel through the portal in two shapes: signed
//! decimal degrees, and the fixed-width `"DD MM.mmmH"` strings shown in the
//! editor (`"DDD MM.mmmH"` for longitude). The two representations
//! round-trip through [`parse_latitude`]/[`format_latitude`] within the
//! three-decimal minute rounding error.
//!
//! # Examples
//! ```
//! use msinm_core::{format_latitude, parse_latitude};
//!
//! assert_eq!(format_latitude(56.205_75), "56 12.345N");
//! assert_eq!(parse_latitude("10 00.000S"), Ok(-10.0));
//! ```

use thiserror::Error;

/// Errors raised when a position string cannot be parsed.
///
/// Callers catch this to mark the offending form field invalid; a parse
/// failure is never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionFormatError {
    /// The input had no space separator and was not a plain decimal degree.
    #[error("{0:?} is not a decimal degree value")]
    InvalidDecimal(String),
    /// The input did not split into exactly degrees and minutes before the
    /// hemisphere letter.
    #[error("expected degrees and minutes before the hemisphere letter, found {found} field(s)")]
    FieldCount {
        /// Number of space-separated fields present.
        found: usize,
    },
    /// The degree field was not a whole number.
    #[error("{0:?} is not a whole number of degrees")]
    InvalidDegrees(String),
    /// The minute field was not a decimal number.
    #[error("{0:?} is not a decimal number of minutes")]
    InvalidMinutes(String),
    /// The trailing hemisphere letter was not one of the expected pair.
    #[error("unknown hemisphere {found:?}, expected {expected}")]
    InvalidHemisphere {
        /// Letter found at the end of the input.
        found: char,
        /// Accepted letters for the axis.
        expected: &'static str,
    },
}

/// Format a latitude in signed decimal degrees as `"DD MM.mmmH"`.
///
/// Values at or above zero map to the `N` hemisphere, negative values to
/// `S`. Degrees are zero-padded to two digits and minutes always render
/// with three decimals, so degree-only values still produce a full
/// `00.000` minutes field.
///
/// # Examples
/// ```
/// use msinm_core::format_latitude;
///
/// assert_eq!(format_latitude(0.0), "00 00.000N");
/// assert_eq!(format_latitude(-10.0), "10 00.000S");
/// ```
pub fn format_latitude(degrees: f64) -> String {
    format_position(degrees, 2, 'N', 'S')
}

/// Format a longitude in signed decimal degrees as `"DDD MM.mmmH"`.
///
/// Identical to [`format_latitude`] except for the `E`/`W` hemisphere pair
/// and the three-digit degree field.
///
/// # Examples
/// ```
/// use msinm_core::format_longitude;
///
/// assert_eq!(format_longitude(0.0), "000 00.000E");
/// assert_eq!(format_longitude(-5.5), "005 30.000W");
/// ```
pub fn format_longitude(degrees: f64) -> String {
    format_position(degrees, 3, 'E', 'W')
}

/// Parse a latitude from decimal degrees or `"DD MM.mmmH"` form.
///
/// # Errors
/// Returns [`PositionFormatError`] for malformed input: a non-numeric
/// spaceless string, a field count other than degrees-plus-minutes, or a
/// hemisphere letter outside `N`/`S`.
pub fn parse_latitude(text: &str) -> Result<f64, PositionFormatError> {
    parse_position(text, 'N', 'S', "N or S")
}

/// Parse a longitude from decimal degrees or `"DDD MM.mmmH"` form.
///
/// # Errors
/// Returns [`PositionFormatError`] for malformed input, with `E`/`W` as the
/// accepted hemisphere pair.
pub fn parse_longitude(text: &str) -> Result<f64, PositionFormatError> {
    parse_position(text, 'E', 'W', "E or W")
}

fn format_position(degrees: f64, degree_width: usize, positive: char, negative: char) -> String {
    let hemisphere = if degrees < 0.0 { negative } else { positive };
    let absolute = degrees.abs();
    let whole = absolute.trunc() as u32;
    let minutes = absolute.fract() * 60.0;
    format!("{whole:0degree_width$} {minutes:06.3}{hemisphere}")
}

fn parse_position(
    text: &str,
    positive: char,
    negative: char,
    expected: &'static str,
) -> Result<f64, PositionFormatError> {
    let trimmed = text.trim();
    if !trimmed.contains(' ') {
        // Strict whole-string decimal parse; partial parses must not slip
        // through as positions.
        let value: f64 = trimmed
            .parse()
            .map_err(|_| PositionFormatError::InvalidDecimal(trimmed.to_owned()))?;
        if !value.is_finite() {
            return Err(PositionFormatError::InvalidDecimal(trimmed.to_owned()));
        }
        return Ok(value);
    }

    let Some((last_index, letter)) = trimmed.char_indices().next_back() else {
        return Err(PositionFormatError::FieldCount { found: 0 });
    };
    let hemisphere = letter.to_ascii_uppercase();
    if hemisphere != positive && hemisphere != negative {
        return Err(PositionFormatError::InvalidHemisphere {
            found: letter,
            expected,
        });
    }

    let body = &trimmed[..last_index];
    let fields: Vec<&str> = body.split(' ').collect();
    let [degree_field, minute_field] = fields.as_slice() else {
        return Err(PositionFormatError::FieldCount {
            found: fields.len(),
        });
    };

    let degrees: u32 = degree_field
        .parse()
        .map_err(|_| PositionFormatError::InvalidDegrees((*degree_field).to_owned()))?;
    let minutes: f64 = minute_field
        .parse()
        .map_err(|_| PositionFormatError::InvalidMinutes((*minute_field).to_owned()))?;
    if !minutes.is_finite() {
        return Err(PositionFormatError::InvalidMinutes((*minute_field).to_owned()));
    }

    let value = f64::from(degrees) + minutes / 60.0;
    Ok(if hemisphere == negative { -value } else { value })
}
