use std::f64::consts::{PI, TAU};

/// Converts degrees to radians after reducing the angle modulo 360.
///
/// The remainder keeps the sign of the input, so `-450°` maps to `-90°`.
#[must_use]
pub fn degrees_to_radians(degrees: f64) -> f64 {
	(degrees % 360.0) * PI / 180.0
}

/// Converts radians to degrees after reducing the angle modulo 2π.
#[must_use]
pub fn radians_to_degrees(radians: f64) -> f64 {
	(radians % TAU) * 180.0 / PI
}
