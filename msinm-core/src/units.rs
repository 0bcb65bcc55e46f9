//! Distance unit conversions.
//!
//! The editor fields hold whole units, so every conversion rounds. Zero and
//! non-finite inputs yield `None` — an empty field stays empty instead of
//! becoming `0`.

/// Metres per international nautical mile.
pub const METRES_PER_NAUTICAL_MILE: f64 = 1852.0;

/// Convert nautical miles to whole kilometres.
///
/// # Examples
/// ```
/// use msinm_core::nm_to_km;
///
/// assert_eq!(nm_to_km(10.0), Some(19.0));
/// assert_eq!(nm_to_km(0.0), None);
/// ```
pub fn nm_to_km(nautical_miles: f64) -> Option<f64> {
    convert(nautical_miles, |v| {
        (v * METRES_PER_NAUTICAL_MILE / 1000.0).round()
    })
}

/// Convert kilometres to whole nautical miles.
///
/// # Examples
/// ```
/// use msinm_core::km_to_nm;
///
/// assert_eq!(km_to_nm(19.0), Some(10.0));
/// assert_eq!(km_to_nm(0.0), None);
/// ```
pub fn km_to_nm(kilometres: f64) -> Option<f64> {
    convert(kilometres, |v| {
        (v * 1000.0 / METRES_PER_NAUTICAL_MILE).round()
    })
}

/// Convert metres to whole nautical miles.
///
/// # Examples
/// ```
/// use msinm_core::m_to_nm;
///
/// assert_eq!(m_to_nm(3704.0), Some(2.0));
/// assert_eq!(m_to_nm(0.0), None);
/// ```
pub fn m_to_nm(metres: f64) -> Option<f64> {
    convert(metres, |v| (v / METRES_PER_NAUTICAL_MILE).round())
}

fn convert(value: f64, conversion: impl Fn(f64) -> f64) -> Option<f64> {
    (value != 0.0 && value.is_finite()).then(|| conversion(value))
}
