//! Geodesic solvers and the disc generators built on top of them.
//!
//! Two earth models are available:
//! - [`haversine`]: a sphere of mean radius, closed-form formulas
//! - [`vincenty`]: the WGS-84 ellipsoid, iterative formulas with a bounded iteration count
//!
//! Both produce open discs: `steps` points sampled at bearings `i * -360 / steps`,
//! starting due north. Closing the ring is left to the WKT builder.

mod angle;
pub mod haversine;
pub mod vincenty;

pub use angle::*;

use crate::{DiscOptions, GeoPoint, GeospaceError, Result};
use serde::Deserialize;
use std::{fmt, str::FromStr};

/// Earth model used to build a disc.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum DiscModel {
	/// Spherical earth, haversine direct formula.
	#[default]
	Haversine,
	/// WGS-84 ellipsoid, Vincenty direct formula.
	Vincenty,
}

impl DiscModel {
	pub const ALL: [DiscModel; 2] = [DiscModel::Haversine, DiscModel::Vincenty];

	/// Generates the open disc approximation for this model.
	pub fn generate(self, center: &GeoPoint, radius: f64, options: &DiscOptions) -> Result<Vec<GeoPoint>> {
		match self {
			DiscModel::Haversine => haversine::create_disc(center, radius, options),
			DiscModel::Vincenty => vincenty::create_disc(center, radius, options),
		}
	}

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			DiscModel::Haversine => "haversine",
			DiscModel::Vincenty => "vincenty",
		}
	}
}

impl fmt::Display for DiscModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for DiscModel {
	type Err = GeospaceError;

	fn from_str(s: &str) -> Result<Self> {
		match s.trim().to_ascii_lowercase().as_str() {
			"haversine" => Ok(DiscModel::Haversine),
			"vincenty" => Ok(DiscModel::Vincenty),
			_ => Err(GeospaceError::parse(s, "expected 'haversine' or 'vincenty'")),
		}
	}
}

/// Generates a disc around `center` with the given model.
pub fn generate_disc(model: DiscModel, center: &GeoPoint, radius: f64, options: &DiscOptions) -> Result<Vec<GeoPoint>> {
	model.generate(center, radius, options)
}

/// Bearing in degrees of sample `index` out of `steps`.
fn step_bearing(index: usize, steps: usize) -> f64 {
	index as f64 * -360.0 / steps as f64
}

fn verify_disc_input(radius: f64, options: &DiscOptions) -> Result<()> {
	if !radius.is_finite() || radius <= 0.0 {
		return Err(GeospaceError::input(format!("radius must be positive, got {radius}")));
	}
	options.verify()
}
