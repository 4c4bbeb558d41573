use super::ModelChoice;
use anyhow::{Context, Result};
use geospace_core::{DiscOptions, GeoPoint};
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

/// One intersection job: a boundary, a disc and how to build it.
///
/// ```yaml
/// boundary:
///   - { lat: 26.88, lng: -80.5443 }
///   - { lat: 26.73, lng: -80.22 }
///   - { lat: 26.423, lng: -80.421 }
/// center: { lat: 26.43, lng: -80.32 }
/// radius: 10000
/// model: both
/// options:
///   steps: 64
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Request {
	/// Boundary polygon, at least three points.
	pub boundary: Vec<GeoPoint>,

	/// Center of the disc.
	pub center: GeoPoint,

	/// Disc radius in metres.
	pub radius: f64,

	#[serde(default)]
	pub model: ModelChoice,

	#[serde(default)]
	pub options: DiscOptions,
}

impl Request {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("opening request file {path:?}"))?;
		Request::from_reader(BufReader::new(file)).with_context(|| format!("parsing request file {path:?}"))
	}
}
