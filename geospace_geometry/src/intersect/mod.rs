//! Intersection of a boundary polygon with a geodesic disc.
//!
//! An [`Intersector`] closes both rings into WKT, hands them to its
//! [`GeometryEngine`], then classifies and decodes whatever comes back. The free
//! functions run the default [`GeoEngine`] for one disc model each.

use crate::{GeoEngine, GeometryEngine, GeometryKind, PolygonBuilder, Ring, decode};
use geospace_core::{DiscModel, DiscOptions, GeoPoint, GeospaceError, Result};
use log::debug;
use std::collections::HashSet;

/// Runs intersections through a geometry engine with fixed disc options.
#[derive(Clone, Debug, Default)]
pub struct Intersector<E = GeoEngine> {
	engine: E,
	options: DiscOptions,
}

impl Intersector<GeoEngine> {
	#[must_use]
	pub fn new(options: DiscOptions) -> Self {
		Self::with_engine(GeoEngine::new(), options)
	}
}

impl<E: GeometryEngine> Intersector<E> {
	#[must_use]
	pub fn with_engine(engine: E, options: DiscOptions) -> Self {
		Self { engine, options }
	}

	#[must_use]
	pub fn engine(&self) -> &E {
		&self.engine
	}

	#[must_use]
	pub fn options(&self) -> &DiscOptions {
		&self.options
	}

	/// Intersects `boundary` with a disc of `radius` metres around `center`.
	///
	/// The decoded rings are concatenated in engine order. An empty intersection
	/// is `Ok(vec![])`.
	pub fn intersect_with_disc(
		&self,
		model: DiscModel,
		boundary: &[GeoPoint],
		center: &GeoPoint,
		radius: f64,
	) -> Result<Vec<GeoPoint>> {
		Ok(self
			.decode_members(model, boundary, center, radius)?
			.into_iter()
			.flatten()
			.collect())
	}

	/// Like [`Intersector::intersect_with_disc`], but keeps one sequence per
	/// intersection polygon.
	pub fn decode_members(
		&self,
		model: DiscModel,
		boundary: &[GeoPoint],
		center: &GeoPoint,
		radius: f64,
	) -> Result<Vec<Vec<GeoPoint>>> {
		let boundary = Ring::try_from(boundary)?;
		let disc = Ring::new(model.generate(center, radius, &self.options)?)?;
		self.verify_resolvable(&disc, radius)?;
		debug!(
			"intersecting a {}-point boundary with a {model} disc of {radius} m around {center}",
			boundary.len()
		);
		self.intersect_rings(&boundary, &disc)
	}

	/// Intersects two rings, returning one sequence per intersection polygon.
	pub fn intersect_rings(&self, a: &Ring, b: &Ring) -> Result<Vec<Vec<GeoPoint>>> {
		let builder = PolygonBuilder::from(&self.options);
		let geometry = self.engine.intersect(&a.to_wkt(&builder)?, &b.to_wkt(&builder)?)?;
		self.decode_result(&geometry)
	}

	/// Whether two boundaries share any area.
	pub fn polygons_intersect(&self, a: &[GeoPoint], b: &[GeoPoint]) -> Result<bool> {
		let a = Ring::try_from(a)?;
		let b = Ring::try_from(b)?;
		if !a.bounds_overlap(&b) {
			return Ok(false);
		}
		let builder = PolygonBuilder::from(&self.options);
		self.engine.intersects(&a.to_wkt(&builder)?, &b.to_wkt(&builder)?)
	}

	/// Fails when the disc collapses to fewer than three distinct coordinates at
	/// the configured precision.
	fn verify_resolvable(&self, disc: &Ring, radius: f64) -> Result<()> {
		let precision = self.options.precision;
		let distinct = disc
			.points()
			.iter()
			.map(|p| p.to_wkt_coord(precision))
			.collect::<HashSet<_>>()
			.len();
		if distinct < 3 {
			return Err(GeospaceError::input(format!(
				"a disc of {radius} m collapses to {distinct} distinct point(s) at {precision} decimals"
			)));
		}
		Ok(())
	}

	fn decode_result(&self, geometry: &E::Geometry) -> Result<Vec<Vec<GeoPoint>>> {
		let kind = self.engine.classify(geometry);
		let text = self.engine.render(geometry);
		if text.trim_end().ends_with("EMPTY") {
			debug!("intersection is empty");
			return Ok(Vec::new());
		}

		let rings = if kind == GeometryKind::MultiPolygon {
			let count = self.engine.num_geometries(geometry);
			let mut rings = Vec::with_capacity(count);
			for index in 0..count {
				let member = self.engine.geometry_n(geometry, index)?;
				rings.extend(decode(&GeometryKind::Polygon, &self.engine.render(&member))?);
			}
			rings
		} else {
			decode(&kind, &text)?
		};

		debug!(
			"intersection is a {kind} with {} ring(s) and {} point(s)",
			rings.len(),
			rings.iter().map(Vec::len).sum::<usize>()
		);
		Ok(rings)
	}
}

/// Intersects `boundary` with a spherical (haversine) disc.
pub fn intersect_with_haversine_disc(
	boundary: &[GeoPoint],
	center: &GeoPoint,
	radius: f64,
	options: &DiscOptions,
) -> Result<Vec<GeoPoint>> {
	Intersector::new(options.clone()).intersect_with_disc(DiscModel::Haversine, boundary, center, radius)
}

/// Intersects `boundary` with an ellipsoidal (Vincenty, WGS-84) disc.
pub fn intersect_with_vincenty_disc(
	boundary: &[GeoPoint],
	center: &GeoPoint,
	radius: f64,
	options: &DiscOptions,
) -> Result<Vec<GeoPoint>> {
	Intersector::new(options.clone()).intersect_with_disc(DiscModel::Vincenty, boundary, center, radius)
}

/// Whether two boundaries share any area, using the default engine.
pub fn polygons_intersect(a: &[GeoPoint], b: &[GeoPoint]) -> Result<bool> {
	Intersector::new(DiscOptions::default()).polygons_intersect(a, b)
}
