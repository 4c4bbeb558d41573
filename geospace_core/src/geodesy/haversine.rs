//! Spherical earth geodesy.

use super::{degrees_to_radians, radians_to_degrees, step_bearing, verify_disc_input};
use crate::{DiscOptions, GeoPoint, Result};
use log::debug;

/// Mean earth radius in metres.
pub const EARTH_RADIUS: f64 = 6_371_008.8;

/// Point reached from `origin` after travelling `distance` metres along `bearing` degrees.
#[must_use]
pub fn destination(origin: &GeoPoint, distance: f64, bearing: f64) -> GeoPoint {
	let theta = distance / EARTH_RADIUS;
	let lat1 = degrees_to_radians(origin.lat);
	let lng1 = degrees_to_radians(origin.lng);
	let bearing = degrees_to_radians(bearing);

	let lat2 = (lat1.sin() * theta.cos() + lat1.cos() * theta.sin() * bearing.cos()).asin();
	let lng2 = lng1 + (bearing.sin() * theta.sin() * lat1.cos()).atan2(theta.cos() - lat1.sin() * lat2.sin());

	GeoPoint::new(radians_to_degrees(lat2), radians_to_degrees(lng2))
}

/// Great-circle distance in metres between two points.
#[must_use]
pub fn distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
	let lat1 = a.lat.to_radians();
	let lat2 = b.lat.to_radians();
	let d_lat = lat2 - lat1;
	let d_lng = (b.lng - a.lng).to_radians();

	let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
	2.0 * EARTH_RADIUS * h.sqrt().min(1.0).asin()
}

/// Approximates a disc of `radius` metres around `center` on a sphere.
///
/// Returns exactly `options.steps` points; the ring is left open.
pub fn create_disc(center: &GeoPoint, radius: f64, options: &DiscOptions) -> Result<Vec<GeoPoint>> {
	verify_disc_input(radius, options)?;
	debug!(
		"haversine disc around {center} with radius {radius} m in {} steps",
		options.steps
	);

	Ok((0..options.steps)
		.map(|i| destination(center, radius, step_bearing(i, options.steps)))
		.collect())
}
