use crate::{GeospaceError, Result};
use serde::Deserialize;

/// Precision settings for disc generation and WKT serialization.
///
/// These are passed explicitly to every generator and orchestrator call.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DiscOptions {
	/// Number of points sampled around the disc.
	pub steps: usize,

	/// Upper bound on Vincenty iterations before giving up.
	pub max_iterations: usize,

	/// Decimals written per coordinate in WKT.
	pub precision: usize,
}

impl DiscOptions {
	pub const DEFAULT_STEPS: usize = 128;
	pub const DEFAULT_MAX_ITERATIONS: usize = 200;
	pub const DEFAULT_PRECISION: usize = 6;

	#[must_use]
	pub fn with_steps(mut self, steps: usize) -> Self {
		self.steps = steps;
		self
	}

	#[must_use]
	pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
		self.max_iterations = max_iterations;
		self
	}

	#[must_use]
	pub fn with_precision(mut self, precision: usize) -> Self {
		self.precision = precision;
		self
	}

	/// Checks the settings required by the disc generators.
	pub fn verify(&self) -> Result<()> {
		if self.steps < 3 {
			return Err(GeospaceError::input(format!(
				"a disc needs at least 3 steps, got {}",
				self.steps
			)));
		}
		if self.max_iterations == 0 {
			return Err(GeospaceError::input("max_iterations must be at least 1"));
		}
		Ok(())
	}
}

impl Default for DiscOptions {
	fn default() -> Self {
		Self {
			steps: Self::DEFAULT_STEPS,
			max_iterations: Self::DEFAULT_MAX_ITERATIONS,
			precision: Self::DEFAULT_PRECISION,
		}
	}
}
