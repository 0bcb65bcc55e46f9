//! Spherical web mercator projection.
//!
//! The map renders in projected metres while locations are stored in
//! geographic degrees. [`forward`] projects for display; [`inverse`] maps
//! user-drawn coordinates back to degrees before storing them.

use std::f64::consts::FRAC_PI_2;
use std::f64::consts::FRAC_PI_4;

use geo::Coord;

/// Earth radius of the spherical mercator projection, in metres.
pub const PROJECTION_RADIUS_M: f64 = 6_378_137.0;

/// Project a geographic coordinate (`x` = longitude, `y` = latitude, both in
/// degrees) into mercator metres.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use msinm_geo::mercator::forward;
///
/// let origin = forward(Coord { x: 0.0, y: 0.0 });
/// assert!(origin.x.abs() < 1e-9 && origin.y.abs() < 1e-9);
/// ```
pub fn forward(geographic: Coord<f64>) -> Coord<f64> {
    let x = geographic.x.to_radians() * PROJECTION_RADIUS_M;
    let y = (geographic.y.to_radians() / 2.0 + FRAC_PI_4).tan().ln() * PROJECTION_RADIUS_M;
    Coord { x, y }
}

/// Map a projected mercator coordinate back to geographic degrees.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use msinm_geo::mercator::{forward, inverse};
///
/// let back = inverse(forward(Coord { x: 10.0, y: 56.0 }));
/// assert!((back.x - 10.0).abs() < 1e-9);
/// assert!((back.y - 56.0).abs() < 1e-9);
/// ```
pub fn inverse(projected: Coord<f64>) -> Coord<f64> {
    let lon = (projected.x / PROJECTION_RADIUS_M).to_degrees();
    let lat = (2.0 * (projected.y / PROJECTION_RADIUS_M).exp().atan() - FRAC_PI_2).to_degrees();
    Coord { x: lon, y: lat }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(10.0, 56.0)]
    #[case(-123.5, -45.25)]
    #[case(179.9, 84.9)]
    fn projection_round_trips(#[case] lon: f64, #[case] lat: f64) {
        let back = inverse(forward(Coord { x: lon, y: lat }));
        assert!((back.x - lon).abs() < 1e-9, "lon {lon} -> {}", back.x);
        assert!((back.y - lat).abs() < 1e-9, "lat {lat} -> {}", back.y);
    }

    #[rstest]
    fn northern_latitudes_project_to_positive_y() {
        let projected = forward(Coord { x: 0.0, y: 45.0 });
        assert!(projected.y > 0.0);
        assert!(forward(Coord { x: 0.0, y: -45.0 }).y < 0.0);
    }

    #[rstest]
    fn antimeridian_maps_to_projection_circumference() {
        let projected = forward(Coord { x: 180.0, y: 0.0 });
        let expected = std::f64::consts::PI * PROJECTION_RADIUS_M;
        assert!((projected.x - expected).abs() < 1e-6);
    }
}
