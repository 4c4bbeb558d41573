use crate::PolygonBuilder;
use geospace_core::{GeoPoint, GeospaceError, Result};
use std::fmt::Debug;

/// An open ring of at least three points bounding an area.
///
/// The closing point is never stored; it is appended when the ring is
/// serialized by a [`PolygonBuilder`].
#[derive(Clone, PartialEq)]
pub struct Ring(Vec<GeoPoint>);

impl Ring {
	/// Creates a ring, failing with an input error for fewer than three points.
	pub fn new(points: Vec<GeoPoint>) -> Result<Self> {
		let ring = Self(points);
		ring.verify()?;
		Ok(ring)
	}

	/// Verifies that the ring has at least three points.
	pub fn verify(&self) -> Result<()> {
		if self.0.len() < 3 {
			return Err(GeospaceError::input(format!(
				"a ring needs at least 3 points, got {}",
				self.0.len()
			)));
		}
		Ok(())
	}

	#[must_use]
	pub fn points(&self) -> &[GeoPoint] {
		&self.0
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Serializes the closed ring as `POLYGON ((...))`.
	pub fn to_wkt(&self, builder: &PolygonBuilder) -> Result<String> {
		builder.close(&self.0)
	}

	/// Returns `[lat_min, lng_min, lat_max, lng_max]`.
	#[must_use]
	pub fn compute_bounds(&self) -> [f64; 4] {
		let mut lat_min = f64::MAX;
		let mut lng_min = f64::MAX;
		let mut lat_max = f64::MIN;
		let mut lng_max = f64::MIN;

		for p in &self.0 {
			lat_min = lat_min.min(p.lat);
			lng_min = lng_min.min(p.lng);
			lat_max = lat_max.max(p.lat);
			lng_max = lng_max.max(p.lng);
		}

		[lat_min, lng_min, lat_max, lng_max]
	}

	/// Whether the bounding boxes of both rings overlap, edges included.
	#[must_use]
	pub fn bounds_overlap(&self, other: &Ring) -> bool {
		let a = self.compute_bounds();
		let b = other.compute_bounds();
		a[0] <= b[2] && b[0] <= a[2] && a[1] <= b[3] && b[1] <= a[3]
	}
}

impl TryFrom<Vec<GeoPoint>> for Ring {
	type Error = GeospaceError;

	fn try_from(points: Vec<GeoPoint>) -> Result<Self> {
		Ring::new(points)
	}
}

impl TryFrom<&[GeoPoint]> for Ring {
	type Error = GeospaceError;

	fn try_from(points: &[GeoPoint]) -> Result<Self> {
		Ring::new(points.to_vec())
	}
}

impl Debug for Ring {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}
