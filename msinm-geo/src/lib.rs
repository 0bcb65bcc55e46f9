//! Map-feature construction for message locations.
//!
//! Locations are stored in geographic degrees; the map draws in projected
//! mercator metres. This crate turns a [`Location`] into drawable
//! [`MapFeature`]s: one marker per point, one path or ring for polylines and
//! polygons, and a geodesic 40-vertex ring approximating a circle from its
//! centre and radius.
//!
//! # Examples
//! ```
//! use msinm_core::{Location, LocationPoint};
//! use msinm_geo::features;
//!
//! let circle = Location::circle(LocationPoint::new(56.0, 10.0, 0), 5.0);
//! let drawn = features(&circle);
//! assert_eq!(drawn.len(), 1);
//! assert_eq!(drawn[0].vertex_count(), 40);
//! ```

#![forbid(unsafe_code)]

use std::f64::consts::TAU;

use geo::Coord;
use log::trace;
use msinm_core::{Location, LocationKind};

pub mod mercator;
mod types;

pub use types::MapFeature;

/// Mean Earth radius used for geodesic calculations, in kilometres.
pub const MEAN_EARTH_RADIUS_KM: f64 = 6_371.008_771_4;

/// Number of vertices in the polygon approximation of a circle.
pub const CIRCLE_VERTICES: usize = 40;

/// Great-circle destination point on a spherical earth.
///
/// Starting from `origin` (degrees, `x` = longitude), travel `distance_km`
/// along the initial `bearing` (radians, clockwise from north) and return
/// the destination in degrees.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use msinm_geo::destination_point;
///
/// // Zero distance stays at the origin.
/// let here = destination_point(Coord { x: 10.0, y: 56.0 }, 1.0, 0.0);
/// assert!((here.x - 10.0).abs() < 1e-9);
/// assert!((here.y - 56.0).abs() < 1e-9);
/// ```
pub fn destination_point(origin: Coord<f64>, bearing: f64, distance_km: f64) -> Coord<f64> {
    let angular = distance_km / MEAN_EARTH_RADIUS_KM;
    let lat1 = origin.y.to_radians();
    let lon1 = origin.x.to_radians();

    let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos()).asin();
    let lon2 = lon1
        + (bearing.sin() * angular.sin() * lat1.cos())
            .atan2(angular.cos() - lat1.sin() * lat2.sin());

    Coord {
        x: lon2.to_degrees(),
        y: lat2.to_degrees(),
    }
}

/// Approximate a circle as a geodesic ring of `vertices` points, in
/// geographic degrees.
///
/// Vertex `i` lies at bearing `2*pi*i/vertices` from the centre at the given
/// radius. A zero radius collapses every vertex onto the centre.
pub fn circle_ring(center: Coord<f64>, radius_km: f64, vertices: usize) -> Vec<Coord<f64>> {
    (0..vertices)
        .map(|i| destination_point(center, TAU * i as f64 / vertices as f64, radius_km))
        .collect()
}

/// Build the drawable features for a location, in projected coordinates.
///
/// Point locations yield one marker per point; polygons and polylines yield
/// a single ring or path over the ordered point list; circles yield a
/// [`CIRCLE_VERTICES`]-vertex ring from the first point and the radius in
/// kilometres. A shape with no points yields no features.
pub fn features(location: &Location) -> Vec<MapFeature> {
    let built = match location.kind {
        LocationKind::Point => location
            .points
            .iter()
            .map(|point| MapFeature::Point(mercator::forward(point.coord())))
            .collect(),
        LocationKind::Polygon => ring_or_path(location, MapFeature::Ring),
        LocationKind::Polyline => ring_or_path(location, MapFeature::Path),
        LocationKind::Circle => circle_features(location),
    };
    trace!(
        "built {} feature(s) for a {} location",
        built.len(),
        location.kind
    );
    built
}

fn ring_or_path(
    location: &Location,
    wrap: impl FnOnce(Vec<Coord<f64>>) -> MapFeature,
) -> Vec<MapFeature> {
    if location.points.is_empty() {
        return Vec::new();
    }
    let vertices = location
        .points
        .iter()
        .map(|point| mercator::forward(point.coord()))
        .collect();
    vec![wrap(vertices)]
}

fn circle_features(location: &Location) -> Vec<MapFeature> {
    let (Some(center), Some(radius_km)) = (location.points.first(), location.radius) else {
        return Vec::new();
    };
    let ring = circle_ring(center.coord(), radius_km, CIRCLE_VERTICES)
        .into_iter()
        .map(mercator::forward)
        .collect();
    vec![MapFeature::Ring(ring)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use msinm_core::LocationPoint;
    use rstest::rstest;

    fn vertex(lat: f64, lon: f64, index: u32) -> LocationPoint {
        LocationPoint::new(lat, lon, index)
    }

    #[rstest]
    fn point_location_yields_one_feature_per_point() {
        let location =
            Location::point(vec![vertex(56.0, 10.0, 0), vertex(57.0, 11.0, 1)]).expect("points");
        let drawn = features(&location);
        assert_eq!(drawn.len(), 2);
        assert!(drawn.iter().all(|f| matches!(f, MapFeature::Point(_))));
    }

    #[rstest]
    fn polygon_yields_one_ring_with_all_vertices() {
        let location = Location::polygon(vec![
            vertex(0.0, 0.0, 0),
            vertex(0.0, 1.0, 1),
            vertex(1.0, 0.0, 2),
        ]);
        let drawn = features(&location);
        assert_eq!(drawn.len(), 1);
        assert_eq!(drawn[0].vertex_count(), 3);
        assert!(matches!(drawn[0], MapFeature::Ring(_)));
    }

    #[rstest]
    fn polyline_is_not_closed_into_a_ring() {
        let location = Location::polyline(vec![vertex(0.0, 0.0, 0), vertex(1.0, 1.0, 1)]);
        let drawn = features(&location);
        assert_eq!(drawn.len(), 1);
        assert!(matches!(drawn[0], MapFeature::Path(_)));
    }

    #[rstest]
    fn empty_shapes_yield_no_features() {
        assert!(features(&Location::polygon(Vec::new())).is_empty());
        assert!(features(&Location::polyline(Vec::new())).is_empty());
    }

    #[rstest]
    fn circle_becomes_a_forty_vertex_ring() {
        let location = Location::circle(vertex(56.0, 10.0, 0), 5.0);
        let drawn = features(&location);
        assert_eq!(drawn.len(), 1);
        assert_eq!(drawn[0].vertex_count(), CIRCLE_VERTICES);
    }

    #[rstest]
    fn zero_radius_ring_collapses_onto_the_center() {
        let ring = circle_ring(Coord { x: 0.0, y: 0.0 }, 0.0, CIRCLE_VERTICES);
        assert_eq!(ring.len(), CIRCLE_VERTICES);
        for point in ring {
            assert!(point.x.abs() < 1e-9 && point.y.abs() < 1e-9, "{point:?}");
        }
    }

    #[rstest]
    fn ring_vertices_sit_at_the_requested_distance() {
        let radius_km = 10.0;
        let center = Coord { x: 10.0, y: 56.0 };
        for point in circle_ring(center, radius_km, 8) {
            let distance = haversine_km(center, point);
            assert!((distance - radius_km).abs() < 1e-6, "distance {distance}");
        }
    }

    fn haversine_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
        let (lat1, lat2) = (a.y.to_radians(), b.y.to_radians());
        let dlat = lat2 - lat1;
        let dlon = (b.x - a.x).to_radians();
        let h = (dlat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        2.0 * h.sqrt().asin() * MEAN_EARTH_RADIUS_KM
    }
}
