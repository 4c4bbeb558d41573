use geospace_core::{DiscOptions, GeoPoint, GeospaceError, Result};

/// Serializes point sequences as closed WKT polygons.
///
/// The engine rejects rings whose first and last coordinates differ, so the
/// closing coordinate is a copy of the first formatted entry rather than a
/// second formatting of the first point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolygonBuilder {
	precision: usize,
}

impl PolygonBuilder {
	#[must_use]
	pub fn new(precision: usize) -> Self {
		Self { precision }
	}

	#[must_use]
	pub fn precision(&self) -> usize {
		self.precision
	}

	/// Builds `POLYGON ((p1, p2, ..., pN, p1))` from an open sequence of points.
	pub fn close(&self, points: &[GeoPoint]) -> Result<String> {
		let Some(first) = points.first() else {
			return Err(GeospaceError::input("cannot build a polygon from an empty point sequence"));
		};
		let first = first.to_wkt_coord(self.precision);

		let mut text = String::with_capacity((points.len() + 1) * (2 * self.precision + 10) + 12);
		text.push_str("POLYGON ((");
		text.push_str(&first);
		for point in &points[1..] {
			text.push_str(", ");
			text.push_str(&point.to_wkt_coord(self.precision));
		}
		text.push_str(", ");
		text.push_str(&first);
		text.push_str("))");
		Ok(text)
	}
}

impl Default for PolygonBuilder {
	fn default() -> Self {
		Self::new(DiscOptions::DEFAULT_PRECISION)
	}
}

impl From<&DiscOptions> for PolygonBuilder {
	fn from(options: &DiscOptions) -> Self {
		Self::new(options.precision)
	}
}
