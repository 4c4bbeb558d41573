use super::{GeometryEngine, GeometryKind};
use crate::reader::{parse_polygon_rings, split_envelope};
use geo::{BooleanOps, Coord, Geometry, LineString, MultiPolygon, Polygon};
use geospace_core::{GeoPoint, GeospaceError, Result};
use log::trace;
use std::panic::{self, AssertUnwindSafe};

/// [`GeometryEngine`] backed by the boolean operations of the `geo` crate.
///
/// Coordinates are treated as planar `(x, y) = (lat, lng)` pairs. The engine is
/// stateless, so one instance may be shared freely between threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeoEngine;

impl GeoEngine {
	#[must_use]
	pub fn new() -> Self {
		Self
	}

	/// Reads a WKT polygon. Every ring must be closed and hold at least four coordinates.
	pub fn read_polygon(wkt: &str) -> Result<Polygon<f64>> {
		let envelope = split_envelope(wkt).map_err(|e| GeospaceError::engine_fault(format!("invalid WKT: {e}")))?;
		if envelope.tag != "POLYGON" {
			return Err(GeospaceError::engine_fault(format!(
				"expected a POLYGON, got {}",
				envelope.tag
			)));
		}
		let Some(body) = envelope.body else {
			return Ok(empty_polygon());
		};

		let rings = parse_polygon_rings(body)
			.map_err(|e| GeospaceError::engine_fault(format!("invalid WKT: {e}")))?
			.into_iter()
			.map(linear_ring)
			.collect::<Result<Vec<_>>>()?;

		let mut rings = rings.into_iter();
		let exterior = rings.next().unwrap_or_else(|| LineString::new(Vec::new()));
		Ok(Polygon::new(exterior, rings.collect()))
	}
}

fn linear_ring(points: Vec<GeoPoint>) -> Result<LineString<f64>> {
	if points.len() < 4 {
		return Err(GeospaceError::engine_fault(format!(
			"a linear ring needs at least 4 coordinates, got {}",
			points.len()
		)));
	}
	if points.first() != points.last() {
		return Err(GeospaceError::engine_fault(
			"points of linear ring do not form a closed linestring",
		));
	}
	Ok(LineString::new(points.into_iter().map(Coord::from).collect()))
}

fn empty_polygon() -> Polygon<f64> {
	Polygon::new(LineString::new(Vec::new()), Vec::new())
}

/// Runs `operation` and turns a panic inside it into an engine fault.
pub(crate) fn contain<T>(name: &str, operation: impl FnOnce() -> T) -> Result<T> {
	panic::catch_unwind(AssertUnwindSafe(operation)).map_err(|payload| {
		let reason = payload
			.downcast_ref::<&str>()
			.map(|s| (*s).to_string())
			.or_else(|| payload.downcast_ref::<String>().cloned())
			.unwrap_or_else(|| "unknown panic".to_string());
		GeospaceError::engine_fault(format!("{name} failed: {reason}"))
	})
}

/// Boolean operations always yield a multi polygon; single and empty results
/// are reported as a plain polygon.
fn from_multi_polygon(multi: MultiPolygon<f64>) -> Geometry<f64> {
	match <[Polygon<f64>; 1]>::try_from(multi.0) {
		Ok([polygon]) => Geometry::Polygon(polygon),
		Err(polygons) if polygons.is_empty() => Geometry::Polygon(empty_polygon()),
		Err(polygons) => Geometry::MultiPolygon(MultiPolygon::new(polygons)),
	}
}

fn type_name(geometry: &Geometry<f64>) -> &'static str {
	match geometry {
		Geometry::Point(_) => "Point",
		Geometry::Line(_) => "Line",
		Geometry::LineString(_) => "LineString",
		Geometry::Polygon(_) => "Polygon",
		Geometry::MultiPoint(_) => "MultiPoint",
		Geometry::MultiLineString(_) => "MultiLineString",
		Geometry::MultiPolygon(_) => "MultiPolygon",
		Geometry::GeometryCollection(_) => "GeometryCollection",
		Geometry::Rect(_) => "Rect",
		Geometry::Triangle(_) => "Triangle",
	}
}

fn coords_text<'a>(coords: impl IntoIterator<Item = &'a Coord<f64>>) -> String {
	coords
		.into_iter()
		.map(|c| format!("{} {}", c.x, c.y))
		.collect::<Vec<_>>()
		.join(", ")
}

fn polygon_body(polygon: &Polygon<f64>) -> String {
	let rings = std::iter::once(polygon.exterior())
		.chain(polygon.interiors())
		.map(|ring| format!("({})", coords_text(&ring.0)))
		.collect::<Vec<_>>();
	format!("({})", rings.join(", "))
}

fn tagged(tag: &str, body: Option<String>) -> String {
	match body {
		Some(body) => format!("{tag} {body}"),
		None => format!("{tag} EMPTY"),
	}
}

fn write_wkt(geometry: &Geometry<f64>) -> String {
	match geometry {
		Geometry::Point(p) => tagged("POINT", Some(format!("({})", coords_text([&p.0])))),
		Geometry::Line(l) => tagged("LINESTRING", Some(format!("({})", coords_text([&l.start, &l.end])))),
		Geometry::LineString(ls) => tagged(
			"LINESTRING",
			(!ls.0.is_empty()).then(|| format!("({})", coords_text(&ls.0))),
		),
		Geometry::Polygon(p) => tagged("POLYGON", (!p.exterior().0.is_empty()).then(|| polygon_body(p))),
		Geometry::MultiPoint(mp) => tagged(
			"MULTIPOINT",
			(!mp.0.is_empty()).then(|| {
				let points = mp.0.iter().map(|p| format!("({})", coords_text([&p.0]))).collect::<Vec<_>>();
				format!("({})", points.join(", "))
			}),
		),
		Geometry::MultiLineString(mls) => tagged(
			"MULTILINESTRING",
			(!mls.0.is_empty()).then(|| {
				let lines = mls.0.iter().map(|ls| format!("({})", coords_text(&ls.0))).collect::<Vec<_>>();
				format!("({})", lines.join(", "))
			}),
		),
		Geometry::MultiPolygon(mp) => tagged(
			"MULTIPOLYGON",
			(!mp.0.is_empty()).then(|| {
				let polygons = mp.0.iter().map(polygon_body).collect::<Vec<_>>();
				format!("({})", polygons.join(", "))
			}),
		),
		Geometry::GeometryCollection(gc) => tagged(
			"GEOMETRYCOLLECTION",
			(!gc.0.is_empty()).then(|| {
				let members = gc.0.iter().map(write_wkt).collect::<Vec<_>>();
				format!("({})", members.join(", "))
			}),
		),
		Geometry::Rect(r) => write_wkt(&Geometry::Polygon(r.to_polygon())),
		Geometry::Triangle(t) => write_wkt(&Geometry::Polygon(t.to_polygon())),
	}
}

impl GeometryEngine for GeoEngine {
	type Geometry = Geometry<f64>;

	fn intersect(&self, wkt_a: &str, wkt_b: &str) -> Result<Geometry<f64>> {
		let a = Self::read_polygon(wkt_a)?;
		let b = Self::read_polygon(wkt_b)?;
		let result = contain("intersection", || a.intersection(&b))?;
		trace!("intersection produced {} polygon(s)", result.0.len());
		Ok(from_multi_polygon(result))
	}

	fn classify(&self, geometry: &Geometry<f64>) -> GeometryKind {
		match geometry {
			Geometry::Polygon(p) if p.exterior().0.is_empty() => GeometryKind::Empty,
			Geometry::Polygon(_) => GeometryKind::Polygon,
			Geometry::MultiPolygon(mp) if mp.0.is_empty() => GeometryKind::Empty,
			Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
			Geometry::LineString(ls) if ls.0.is_empty() => GeometryKind::Empty,
			Geometry::LineString(_) => GeometryKind::LineString,
			Geometry::GeometryCollection(gc) if gc.0.is_empty() => GeometryKind::Empty,
			other => GeometryKind::Other(type_name(other).to_string()),
		}
	}

	fn render(&self, geometry: &Geometry<f64>) -> String {
		write_wkt(geometry)
	}

	fn num_geometries(&self, geometry: &Geometry<f64>) -> usize {
		match geometry {
			Geometry::MultiPoint(mp) => mp.0.len(),
			Geometry::MultiLineString(mls) => mls.0.len(),
			Geometry::MultiPolygon(mp) => mp.0.len(),
			Geometry::GeometryCollection(gc) => gc.0.len(),
			_ => 1,
		}
	}

	fn geometry_n(&self, geometry: &Geometry<f64>, index: usize) -> Result<Geometry<f64>> {
		let member = match geometry {
			Geometry::MultiPoint(mp) => mp.0.get(index).cloned().map(Geometry::Point),
			Geometry::MultiLineString(mls) => mls.0.get(index).cloned().map(Geometry::LineString),
			Geometry::MultiPolygon(mp) => mp.0.get(index).cloned().map(Geometry::Polygon),
			Geometry::GeometryCollection(gc) => gc.0.get(index).cloned(),
			single => (index == 0).then(|| single.clone()),
		};
		member.ok_or_else(|| {
			GeospaceError::engine_fault(format!(
				"geometry index {index} out of range for {}",
				type_name(geometry)
			))
		})
	}
}
