//! Radius field codec.
//!
//! The message editor stores a circle radius as a whole number of nautical
//! miles but accepts free text: a bare number, `"<n> nm"`, or `"<n> km"`
//! (case-insensitive, optional space before the unit). Unlike the position
//! codec this parser signals failure with `None` rather than an error; the
//! field is simply marked invalid and no value is produced.
//!
//! # Examples
//! ```
//! use msinm_core::{format_radius, parse_radius};
//!
//! assert_eq!(format_radius(10), "10 nm");
//! assert_eq!(parse_radius("18.52 km"), Some(10));
//! assert_eq!(parse_radius("abc"), None);
//! ```

use crate::units::METRES_PER_NAUTICAL_MILE;

/// Render a radius in nautical miles as `"<n> nm"`.
pub fn format_radius(nautical_miles: u32) -> String {
    format!("{nautical_miles} nm")
}

/// Parse a radius field into whole nautical miles.
///
/// Tries, in order: a bare integer, an integer with an `nm` unit, and a
/// decimal number with a `km` unit converted via
/// `round(km * 1000 / 1852)`. Returns `None` when nothing matches.
pub fn parse_radius(text: &str) -> Option<u32> {
    let trimmed = text.trim();
    if let Ok(value) = trimmed.parse::<u32>() {
        return Some(value);
    }

    let lowered = trimmed.to_ascii_lowercase();
    if let Some(body) = lowered.strip_suffix("nm") {
        return body.strip_suffix(' ').unwrap_or(body).parse::<u32>().ok();
    }
    if let Some(body) = lowered.strip_suffix("km") {
        let km: f64 = body.strip_suffix(' ').unwrap_or(body).parse().ok()?;
        if !km.is_finite() || km < 0.0 {
            return None;
        }
        return Some((km * 1000.0 / METRES_PER_NAUTICAL_MILE).round() as u32);
    }
    None
}
