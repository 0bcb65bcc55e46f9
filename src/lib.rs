//! Facade crate for the MSI/NM geographic core.
//!
//! This crate re-exports the domain model, the position and radius codecs,
//! the map-feature builders, and the structural diff engine from the member
//! crates. Serde support on the domain types is forwarded through the
//! `serde` feature.

#![forbid(unsafe_code)]

pub use msinm_core::{
    AppContext, Location, LocationError, LocationKind, LocationPoint, PositionFormatError,
    format_latitude, format_longitude, format_radius, km_to_nm, m_to_nm, nm_to_km,
    parse_latitude, parse_longitude, parse_radius,
};

pub use msinm_diff::{DiffNode, DiffStatus, ValueKind, compare, render};

pub use msinm_geo::{
    CIRCLE_VERTICES, MEAN_EARTH_RADIUS_KM, MapFeature, circle_ring, destination_point, features,
    mercator,
};
