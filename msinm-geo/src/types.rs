//! Drawable map features in projected coordinates.

use geo::Coord;

/// A single drawable feature produced from a location.
///
/// Coordinates are spherical web mercator metres; see
/// [`crate::mercator::forward`].
#[derive(Debug, Clone, PartialEq)]
pub enum MapFeature {
    /// A standalone marker.
    Point(Coord<f64>),
    /// An open path; the last vertex is not joined back to the first.
    Path(Vec<Coord<f64>>),
    /// A closed linear ring; the closing edge is implicit.
    Ring(Vec<Coord<f64>>),
}

impl MapFeature {
    /// Number of vertices the feature carries.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use msinm_geo::MapFeature;
    ///
    /// let ring = MapFeature::Ring(vec![Coord { x: 0.0, y: 0.0 }; 3]);
    /// assert_eq!(ring.vertex_count(), 3);
    /// ```
    pub fn vertex_count(&self) -> usize {
        match self {
            Self::Point(_) => 1,
            Self::Path(vertices) | Self::Ring(vertices) => vertices.len(),
        }
    }
}
