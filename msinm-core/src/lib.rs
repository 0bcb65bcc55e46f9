//! Domain model and codecs for maritime safety information locations.
//!
//! The crate carries the pure, UI-free contracts of the MSI/NM portal:
//! - the [`Location`] shape model (point, circle, polygon, polyline);
//! - the degree/minute position codec ([`format_latitude`],
//!   [`parse_latitude`] and the longitude counterparts);
//! - the radius field codec ([`format_radius`], [`parse_radius`]);
//! - distance unit conversions ([`nm_to_km`], [`km_to_nm`], [`m_to_nm`]);
//! - the explicit [`AppContext`] replacing the portal's ambient root scope.
//!
//! Serde support on the domain types sits behind the `serde` feature,
//! enabled by default, so locations round-trip the portal's JSON wire shape.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod context;
mod location;
mod position;
mod radius;
mod units;

pub use context::AppContext;
pub use location::{Location, LocationError, LocationKind, LocationPoint};
pub use position::{
    PositionFormatError, format_latitude, format_longitude, parse_latitude, parse_longitude,
};
pub use radius::{format_radius, parse_radius};
pub use units::{METRES_PER_NAUTICAL_MILE, km_to_nm, m_to_nm, nm_to_km};
