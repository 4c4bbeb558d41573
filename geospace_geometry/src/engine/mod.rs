//! The boundary to the geometry engine that performs the boolean intersection.
//!
//! Everything crossing this boundary is WKT text, so any engine that can read
//! and write polygons in WKT can be plugged in behind [`GeometryEngine`].

mod geo_engine;

pub use geo_engine::*;

use geospace_core::Result;
use std::fmt;

/// Shape of an engine result, as far as decoding is concerned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeometryKind {
	Polygon,
	MultiPolygon,
	LineString,
	Empty,
	/// Any other shape, carrying the engine's name for it.
	Other(String),
}

impl fmt::Display for GeometryKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			GeometryKind::Polygon => f.write_str("Polygon"),
			GeometryKind::MultiPolygon => f.write_str("MultiPolygon"),
			GeometryKind::LineString => f.write_str("LineString"),
			GeometryKind::Empty => f.write_str("Empty"),
			GeometryKind::Other(name) => f.write_str(name),
		}
	}
}

/// A geometry engine reachable through WKT.
///
/// Implementations must report faults as [`GeospaceError::EngineFault`](geospace_core::GeospaceError::EngineFault)
/// values and never unwind into the caller.
pub trait GeometryEngine {
	/// Engine-side geometry handle.
	type Geometry;

	/// Intersects two WKT polygons.
	fn intersect(&self, wkt_a: &str, wkt_b: &str) -> Result<Self::Geometry>;

	fn classify(&self, geometry: &Self::Geometry) -> GeometryKind;

	/// Renders a geometry as WKT.
	fn render(&self, geometry: &Self::Geometry) -> String;

	/// Number of member geometries; single geometries count as one.
	fn num_geometries(&self, geometry: &Self::Geometry) -> usize;

	/// Member geometry at `index`.
	fn geometry_n(&self, geometry: &Self::Geometry, index: usize) -> Result<Self::Geometry>;

	/// Whether two WKT polygons share any area.
	fn intersects(&self, wkt_a: &str, wkt_b: &str) -> Result<bool> {
		let geometry = self.intersect(wkt_a, wkt_b)?;
		Ok(!self.render(&geometry).ends_with("EMPTY"))
	}
}
