use super::format_results;
use crate::config::ModelChoice;
use anyhow::{Context, Result};
use geospace_core::{DiscOptions, GeoPoint};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// center of the disc
	#[arg(long, short, value_name = "lat,lng", allow_hyphen_values = true, display_order = 1)]
	center: GeoPoint,

	/// radius of the disc in metres
	#[arg(long, short, value_name = "metres", display_order = 1)]
	radius: f64,

	/// earth model of the disc
	#[arg(long, short, value_enum, default_value_t = ModelChoice::Haversine, display_order = 2)]
	model: ModelChoice,

	/// number of points approximating the disc
	#[arg(long, value_name = "int", default_value_t = DiscOptions::DEFAULT_STEPS, display_order = 2)]
	steps: usize,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let options = DiscOptions::default().with_steps(arguments.steps);
	let results = arguments
		.model
		.models()
		.iter()
		.map(|&model| {
			let points = model
				.generate(&arguments.center, arguments.radius, &options)
				.with_context(|| format!("generating the {model} disc"))?;
			Ok((model, points))
		})
		.collect::<Result<Vec<_>>>()?;

	for line in format_results(&results) {
		println!("{line}");
	}
	Ok(())
}
