//! Polygon/disc intersection for geospace.
//!
//! The pieces, in the order a request flows through them:
//! - [`Ring`] and [`PolygonBuilder`]: typed rings and their closed `POLYGON ((...))` text form
//! - [`GeometryEngine`]: the WKT boundary to a geometry engine, implemented by [`GeoEngine`]
//! - [`decode`]: turns classified engine output back into coordinate sequences
//! - [`Intersector`]: sequences all of the above for one disc model

pub mod engine;
pub mod intersect;
mod types;
pub mod wkt;

pub use engine::*;
pub use intersect::*;
pub use types::*;
pub use wkt::*;
