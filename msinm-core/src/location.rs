//! Geographic shapes attached to messages.
//!
//! A [`Location`] is the portal's wire shape for message geometry: a kind
//! tag, an optional radius for circles, and an ordered point list in
//! geographic degrees. Constructors validate the kind-specific invariants;
//! deserialised values can be re-checked with [`Location::validate`].

use geo::Coord;
use thiserror::Error;

/// The closed set of shape kinds a location can take.
///
/// # Examples
/// ```
/// use msinm_core::LocationKind;
///
/// assert_eq!(LocationKind::Circle.as_str(), "CIRCLE");
/// assert_eq!("polyline".parse::<LocationKind>(), Ok(LocationKind::Polyline));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum LocationKind {
    /// One or more standalone positions.
    Point,
    /// A centre position with a radius in kilometres.
    Circle,
    /// A single linear ring; self-intersection is not validated.
    Polygon,
    /// An open path; never closed automatically.
    Polyline,
}

impl LocationKind {
    /// Return the wire spelling of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Point => "POINT",
            Self::Circle => "CIRCLE",
            Self::Polygon => "POLYGON",
            Self::Polyline => "POLYLINE",
        }
    }
}

impl std::fmt::Display for LocationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LocationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "POINT" => Ok(Self::Point),
            "CIRCLE" => Ok(Self::Circle),
            "POLYGON" => Ok(Self::Polygon),
            "POLYLINE" => Ok(Self::Polyline),
            _ => Err(format!("unknown location type '{s}'")),
        }
    }
}

/// One vertex of a location, in geographic degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationPoint {
    /// Latitude in signed decimal degrees.
    pub lat: f64,
    /// Longitude in signed decimal degrees.
    pub lon: f64,
    /// Ordering index within the shape.
    pub index: u32,
}

impl LocationPoint {
    /// Construct a point from latitude, longitude, and ordering index.
    pub fn new(lat: f64, lon: f64, index: u32) -> Self {
        Self { lat, lon, index }
    }

    /// The point as a geographic coordinate (`x = longitude`, `y = latitude`).
    pub fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.lon,
            y: self.lat,
        }
    }
}

/// Errors returned when constructing or validating a [`Location`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// A circle was built without a radius.
    #[error("a circle requires a radius in kilometres")]
    MissingRadius,
    /// A non-circle shape carried a radius.
    #[error("only circles carry a radius, {kind} does not")]
    UnexpectedRadius {
        /// The offending shape kind.
        kind: LocationKind,
    },
    /// A shape that requires points had none.
    #[error("{kind} requires at least one point")]
    MissingPoints {
        /// The offending shape kind.
        kind: LocationKind,
    },
}

/// A geographic shape attached to a message.
///
/// Invariants: `radius` is present iff `kind` is [`LocationKind::Circle`];
/// `points` is non-empty for points and circles. Polygons and polylines may
/// start empty while the user is still drawing.
///
/// # Examples
/// ```
/// use msinm_core::{Location, LocationPoint};
///
/// let circle = Location::circle(LocationPoint::new(56.0, 10.0, 0), 5.0);
/// assert_eq!(circle.radius, Some(5.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Shape kind tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: LocationKind,
    /// Circle radius in kilometres.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub radius: Option<f64>,
    /// Ordered vertices in geographic degrees.
    #[cfg_attr(feature = "serde", serde(default))]
    pub points: Vec<LocationPoint>,
}

impl Location {
    /// Validate and construct a [`Location`].
    ///
    /// # Errors
    /// Returns [`LocationError`] when the radius presence does not match the
    /// kind, or when a point or circle has no points.
    pub fn new(
        kind: LocationKind,
        radius: Option<f64>,
        points: Vec<LocationPoint>,
    ) -> Result<Self, LocationError> {
        let location = Self {
            kind,
            radius,
            points,
        };
        location.validate()?;
        Ok(location)
    }

    /// Construct a point location.
    ///
    /// # Errors
    /// Returns [`LocationError::MissingPoints`] for an empty point list.
    pub fn point(points: Vec<LocationPoint>) -> Result<Self, LocationError> {
        Self::new(LocationKind::Point, None, points)
    }

    /// Construct a circle from its centre and a radius in kilometres.
    pub fn circle(center: LocationPoint, radius_km: f64) -> Self {
        Self {
            kind: LocationKind::Circle,
            radius: Some(radius_km),
            points: vec![center],
        }
    }

    /// Construct a polygon; an empty ring is a freshly-initialised shape.
    pub fn polygon(points: Vec<LocationPoint>) -> Self {
        Self {
            kind: LocationKind::Polygon,
            radius: None,
            points,
        }
    }

    /// Construct a polyline; an empty path is a freshly-initialised shape.
    pub fn polyline(points: Vec<LocationPoint>) -> Self {
        Self {
            kind: LocationKind::Polyline,
            radius: None,
            points,
        }
    }

    /// Check the kind-specific invariants.
    ///
    /// # Errors
    /// Returns [`LocationError`] for radius/kind mismatches and for points
    /// or circles without points. Deserialised values should be run through
    /// this before use.
    pub fn validate(&self) -> Result<(), LocationError> {
        match self.kind {
            LocationKind::Circle => {
                if self.radius.is_none() {
                    return Err(LocationError::MissingRadius);
                }
            }
            kind if self.radius.is_some() => {
                return Err(LocationError::UnexpectedRadius { kind });
            }
            _ => {}
        }
        match self.kind {
            kind @ (LocationKind::Point | LocationKind::Circle) if self.points.is_empty() => {
                Err(LocationError::MissingPoints { kind })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    fn vertex(lat: f64, lon: f64, index: u32) -> LocationPoint {
        LocationPoint::new(lat, lon, index)
    }

    #[rstest]
    fn kind_display_matches_wire_spelling() {
        assert_eq!(LocationKind::Polyline.to_string(), "POLYLINE");
    }

    #[rstest]
    fn kind_parsing_rejects_unknown() {
        let err = LocationKind::from_str("SECTOR").expect_err("unknown kind");
        assert!(err.contains("unknown location type"));
    }

    #[rstest]
    fn point_requires_points() {
        let result = Location::point(Vec::new());
        assert_eq!(
            result,
            Err(LocationError::MissingPoints {
                kind: LocationKind::Point
            })
        );
    }

    #[rstest]
    fn circle_without_radius_fails_validation() {
        let result = Location::new(LocationKind::Circle, None, vec![vertex(0.0, 0.0, 0)]);
        assert_eq!(result, Err(LocationError::MissingRadius));
    }

    #[rstest]
    #[case(LocationKind::Point)]
    #[case(LocationKind::Polygon)]
    #[case(LocationKind::Polyline)]
    fn radius_is_rejected_outside_circles(#[case] kind: LocationKind) {
        let result = Location::new(kind, Some(5.0), vec![vertex(0.0, 0.0, 0)]);
        assert_eq!(result, Err(LocationError::UnexpectedRadius { kind }));
    }

    #[rstest]
    fn fresh_polygon_may_be_empty() {
        assert!(Location::polygon(Vec::new()).validate().is_ok());
        assert!(Location::polyline(Vec::new()).validate().is_ok());
    }

    #[rstest]
    fn coord_maps_lon_to_x() {
        let coord = vertex(56.0, 10.0, 0).coord();
        assert_eq!((coord.x, coord.y), (10.0, 56.0));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn location_round_trips_wire_json() {
        let json = r#"{"type":"CIRCLE","radius":5.0,"points":[{"lat":56.0,"lon":10.0,"index":0}]}"#;
        let location: Location = serde_json::from_str(json).expect("decode location");
        assert_eq!(location.kind, LocationKind::Circle);
        location.validate().expect("valid circle");
        let encoded = serde_json::to_string(&location).expect("encode location");
        assert_eq!(encoded, json);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn unknown_wire_kind_fails_to_decode() {
        let json = r#"{"type":"SECTOR","points":[]}"#;
        assert!(serde_json::from_str::<Location>(json).is_err());
    }
}
