//! Ellipsoidal earth geodesy on WGS-84, after T. Vincenty (1975),
//! "Direct and inverse solutions of geodesics on the ellipsoid with application
//! of nested equations". Accurate to about 0.5 mm in distance.
//!
//! Both solutions iterate; the number of iterations is capped and exceeding the
//! cap yields [`GeospaceError::Convergence`].

use super::{degrees_to_radians, radians_to_degrees, step_bearing, verify_disc_input};
use crate::{DiscOptions, GeoPoint, GeospaceError, Result};
use log::{debug, trace};

/// Semi-major axis in metres.
pub const SEMI_MAJOR_AXIS: f64 = 6_378_137.0;
/// Semi-minor axis in metres.
pub const SEMI_MINOR_AXIS: f64 = 6_356_752.314245;
/// Flattening.
pub const FLATTENING: f64 = (SEMI_MAJOR_AXIS - SEMI_MINOR_AXIS) / SEMI_MAJOR_AXIS;

const SIGMA_TOLERANCE: f64 = 1e-13;
const LAMBDA_TOLERANCE: f64 = 1e-12;

/// Result of the direct problem.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectSolution {
	pub point: GeoPoint,
	/// Azimuth at the destination, in degrees.
	pub final_bearing: f64,
}

/// Result of the inverse problem.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InverseSolution {
	/// Ellipsoidal distance in metres.
	pub distance: f64,
	/// Azimuth at the first point, in degrees.
	pub initial_bearing: f64,
	/// Azimuth at the second point, in degrees.
	pub final_bearing: f64,
}

fn u_squared(cos2_alpha: f64) -> f64 {
	let a2 = SEMI_MAJOR_AXIS * SEMI_MAJOR_AXIS;
	let b2 = SEMI_MINOR_AXIS * SEMI_MINOR_AXIS;
	cos2_alpha * (a2 - b2) / b2
}

/// Series coefficients A and B.
fn series_coefficients(u2: f64) -> (f64, f64) {
	let a = 1.0 + (u2 / 16384.0) * (4096.0 + u2 * (-768.0 + u2 * (320.0 - 175.0 * u2)));
	let b = (u2 / 1024.0) * (256.0 + u2 * (-128.0 + u2 * (74.0 - 47.0 * u2)));
	(a, b)
}

fn delta_sigma(b: f64, sin_sigma: f64, cos_sigma: f64, cos_2sigma_m: f64) -> f64 {
	let cos2_2sigma_m = cos_2sigma_m * cos_2sigma_m;
	b * sin_sigma
		* (cos_2sigma_m
			+ (b / 4.0)
				* (cos_sigma * (-1.0 + 2.0 * cos2_2sigma_m)
					- (b / 6.0) * cos_2sigma_m * (-3.0 + 4.0 * sin_sigma * sin_sigma) * (-3.0 + 4.0 * cos2_2sigma_m)))
}

fn reduced_latitude(lat: f64) -> (f64, f64) {
	let tan_u = (1.0 - FLATTENING) * degrees_to_radians(lat).tan();
	let cos_u = 1.0 / (1.0 + tan_u * tan_u).sqrt();
	(tan_u * cos_u, cos_u)
}

/// Solves the direct problem: the point reached from `origin` after `distance`
/// metres along the initial `bearing` in degrees.
pub fn direct(origin: &GeoPoint, distance: f64, bearing: f64, max_iterations: usize) -> Result<DirectSolution> {
	let alpha1 = degrees_to_radians(bearing);
	let (sin_alpha1, cos_alpha1) = alpha1.sin_cos();

	let (sin_u1, cos_u1) = reduced_latitude(origin.lat);

	// angular distance on the sphere from the equator to the origin
	let sigma1 = sin_u1.atan2(cos_u1 * cos_alpha1);
	// azimuth of the geodesic at the equator
	let sin_alpha = cos_u1 * sin_alpha1;
	let sin2_alpha = sin_alpha * sin_alpha;
	let cos2_alpha = 1.0 - sin2_alpha;

	let (a, b) = series_coefficients(u_squared(cos2_alpha));
	let s_over_ba = distance / (SEMI_MINOR_AXIS * a);

	let mut sigma = s_over_ba;
	let mut converged = false;
	for iteration in 0..max_iterations {
		let cos_2sigma_m = (2.0 * sigma1 + sigma).cos();
		let (sin_sigma, cos_sigma) = sigma.sin_cos();
		let next = s_over_ba + delta_sigma(b, sin_sigma, cos_sigma, cos_2sigma_m);
		let change = (next - sigma).abs();
		sigma = next;
		if change < SIGMA_TOLERANCE {
			trace!("vincenty direct converged after {} iterations", iteration + 1);
			converged = true;
			break;
		}
	}
	if !converged {
		return Err(GeospaceError::Convergence {
			iterations: max_iterations,
		});
	}

	let cos_2sigma_m = (2.0 * sigma1 + sigma).cos();
	let cos2_2sigma_m = cos_2sigma_m * cos_2sigma_m;
	let (sin_sigma, cos_sigma) = sigma.sin_cos();

	let x = sin_u1 * sin_sigma - cos_u1 * cos_sigma * cos_alpha1;
	let phi2 = (sin_u1 * cos_sigma + cos_u1 * sin_sigma * cos_alpha1).atan2((1.0 - FLATTENING) * (sin2_alpha + x * x).sqrt());

	// longitude on the auxiliary sphere, atan2 keeps pole crossings correct
	let lambda = (sin_sigma * sin_alpha1).atan2(cos_u1 * cos_sigma - sin_u1 * sin_sigma * cos_alpha1);
	let c = (FLATTENING / 16.0) * cos2_alpha * (4.0 + FLATTENING * (4.0 - 3.0 * cos2_alpha));
	let l = lambda
		- (1.0 - c)
			* FLATTENING
			* sin_alpha
			* (sigma + c * sin_sigma * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos2_2sigma_m)));

	let alpha2 = sin_alpha.atan2(-x);

	Ok(DirectSolution {
		point: GeoPoint::new(radians_to_degrees(phi2), origin.lng + radians_to_degrees(l)),
		final_bearing: radians_to_degrees(alpha2),
	})
}

/// Solves the inverse problem: ellipsoidal distance and azimuths between two points.
///
/// Nearly antipodal points may fail to converge.
pub fn inverse(p1: &GeoPoint, p2: &GeoPoint, max_iterations: usize) -> Result<InverseSolution> {
	let l = (p2.lng - p1.lng).to_radians();
	let (sin_u1, cos_u1) = reduced_latitude(p1.lat);
	let (sin_u2, cos_u2) = reduced_latitude(p2.lat);

	let mut lambda = l;
	let mut state = None;
	let mut iterations = 0;
	while iterations < max_iterations {
		iterations += 1;
		let (sin_lambda, cos_lambda) = lambda.sin_cos();
		let t = cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda;
		let sin_sigma = ((cos_u2 * sin_lambda).powi(2) + t * t).sqrt();
		if sin_sigma == 0.0 {
			return Ok(InverseSolution {
				distance: 0.0,
				initial_bearing: 0.0,
				final_bearing: 0.0,
			});
		}
		let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
		let sigma = sin_sigma.atan2(cos_sigma);
		let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
		let cos2_alpha = 1.0 - sin_alpha * sin_alpha;
		// equatorial line
		let cos_2sigma_m = if cos2_alpha == 0.0 {
			0.0
		} else {
			cos_sigma - 2.0 * sin_u1 * sin_u2 / cos2_alpha
		};
		let c = (FLATTENING / 16.0) * cos2_alpha * (4.0 + FLATTENING * (4.0 - 3.0 * cos2_alpha));
		let previous = lambda;
		lambda = l
			+ (1.0 - c)
				* FLATTENING
				* sin_alpha
				* (sigma + c * sin_sigma * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

		if lambda.abs() > std::f64::consts::PI {
			break;
		}
		if (lambda - previous).abs() < LAMBDA_TOLERANCE {
			state = Some((sin_sigma, cos_sigma, sigma, cos2_alpha, cos_2sigma_m));
			break;
		}
	}

	let Some((sin_sigma, cos_sigma, sigma, cos2_alpha, cos_2sigma_m)) = state else {
		return Err(GeospaceError::Convergence { iterations });
	};

	let (a, b) = series_coefficients(u_squared(cos2_alpha));
	let distance = SEMI_MINOR_AXIS * a * (sigma - delta_sigma(b, sin_sigma, cos_sigma, cos_2sigma_m));

	let (sin_lambda, cos_lambda) = lambda.sin_cos();
	let alpha1 = (cos_u2 * sin_lambda).atan2(cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda);
	let alpha2 = (cos_u1 * sin_lambda).atan2(-sin_u1 * cos_u2 + cos_u1 * sin_u2 * cos_lambda);

	Ok(InverseSolution {
		distance,
		initial_bearing: alpha1.to_degrees(),
		final_bearing: alpha2.to_degrees(),
	})
}

/// Approximates a disc of `radius` metres around `center` on the WGS-84 ellipsoid.
///
/// Returns exactly `options.steps` points; the ring is left open.
pub fn create_disc(center: &GeoPoint, radius: f64, options: &DiscOptions) -> Result<Vec<GeoPoint>> {
	verify_disc_input(radius, options)?;
	debug!(
		"vincenty disc around {center} with radius {radius} m in {} steps",
		options.steps
	);

	(0..options.steps)
		.map(|i| direct(center, radius, step_bearing(i, options.steps), options.max_iterations).map(|s| s.point))
		.collect()
}
