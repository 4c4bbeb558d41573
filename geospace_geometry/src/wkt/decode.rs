use super::reader::{parse_coordinates, split_envelope, split_groups};
use crate::GeometryKind;
use geospace_core::{GeoPoint, GeospaceError, Result};
use log::warn;

/// Decodes the WKT text of an engine result into coordinate sequences.
///
/// Polygons contribute their outer ring only; interior rings are dropped with a
/// warning. Multi polygons contribute one sequence per member, line strings a
/// single sequence. Text ending in `EMPTY` decodes to nothing whatever `kind` says.
pub fn decode(kind: &GeometryKind, wkt: &str) -> Result<Vec<Vec<GeoPoint>>> {
	let wkt = wkt.trim();
	if wkt.ends_with("EMPTY") || *kind == GeometryKind::Empty {
		return Ok(Vec::new());
	}

	let expected_tag = match kind {
		GeometryKind::Polygon => "POLYGON",
		GeometryKind::MultiPolygon => "MULTIPOLYGON",
		GeometryKind::LineString => "LINESTRING",
		GeometryKind::Empty => return Ok(Vec::new()),
		GeometryKind::Other(name) => return Err(GeospaceError::GeometryType(name.clone())),
	};

	let envelope = split_envelope(wkt)?;
	if envelope.tag != expected_tag {
		return Err(GeospaceError::GeometryType(envelope.tag));
	}
	let Some(body) = envelope.body else {
		return Ok(Vec::new());
	};

	match kind {
		GeometryKind::MultiPolygon => decode_multi_polygon_body(body),
		GeometryKind::LineString => Ok(vec![parse_coordinates(body)?]),
		_ => Ok(vec![decode_polygon_body(body)?]),
	}
}

fn decode_polygon_body(body: &str) -> Result<Vec<GeoPoint>> {
	let rings = split_groups(body)?;
	if rings.len() > 1 {
		warn!("dropping {} interior ring(s) of an intersection polygon", rings.len() - 1);
	}
	match rings.first() {
		Some(outer) => parse_coordinates(outer),
		None => Ok(Vec::new()),
	}
}

fn decode_multi_polygon_body(body: &str) -> Result<Vec<Vec<GeoPoint>>> {
	split_groups(body)?
		.into_iter()
		.map(decode_polygon_body)
		.collect()
}
