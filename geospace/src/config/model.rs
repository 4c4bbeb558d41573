use geospace_core::DiscModel;
use serde::Deserialize;

/// Disc models to run, either one of them or both in turn.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModelChoice {
	Haversine,
	Vincenty,
	#[default]
	Both,
}

impl ModelChoice {
	pub fn models(self) -> &'static [DiscModel] {
		match self {
			ModelChoice::Haversine => &[DiscModel::Haversine],
			ModelChoice::Vincenty => &[DiscModel::Vincenty],
			ModelChoice::Both => &DiscModel::ALL,
		}
	}
}
