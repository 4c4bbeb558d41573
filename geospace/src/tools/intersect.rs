use super::format_results;
use crate::config::{ModelChoice, Request};
use anyhow::{Context, Result, bail};
use geospace_core::{DiscModel, DiscOptions, GeoPoint};
use geospace_geometry::Intersector;
use log::info;
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// boundary polygon as "lat,lng|lat,lng|..."
	#[arg(allow_hyphen_values = true, required_unless_present = "config")]
	boundary: Option<String>,

	/// center of the disc
	#[arg(
		long,
		short,
		value_name = "lat,lng",
		allow_hyphen_values = true,
		required_unless_present = "config",
		display_order = 1
	)]
	center: Option<GeoPoint>,

	/// radius of the disc in metres
	#[arg(long, short, value_name = "metres", required_unless_present = "config", display_order = 1)]
	radius: Option<f64>,

	/// earth model of the disc [default: both]
	#[arg(long, short, value_enum, display_order = 2)]
	model: Option<ModelChoice>,

	/// number of points approximating the disc
	#[arg(long, value_name = "int", display_order = 2)]
	steps: Option<usize>,

	/// read boundary, center, radius and options from a YAML request file
	#[arg(
		long,
		value_name = "FILE",
		conflicts_with_all = ["boundary", "center", "radius"],
		display_order = 3
	)]
	config: Option<PathBuf>,
}

impl Subcommand {
	/// Builds the request from the arguments or the request file; `--model` and `--steps` override the file.
	fn request(&self) -> Result<Request> {
		let mut request = match &self.config {
			Some(path) => Request::from_path(path)?,
			None => {
				let (Some(boundary), Some(center), Some(radius)) = (&self.boundary, self.center, self.radius) else {
					bail!("a boundary, --center and --radius are required unless --config is given");
				};
				Request {
					boundary: GeoPoint::parse_list(boundary).context("parsing boundary")?,
					center,
					radius,
					model: ModelChoice::default(),
					options: DiscOptions::default(),
				}
			}
		};

		if let Some(model) = self.model {
			request.model = model;
		}
		if let Some(steps) = self.steps {
			request.options.steps = steps;
		}
		Ok(request)
	}
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let request = arguments.request()?;
	for line in format_results(&intersect(&request)?) {
		println!("{line}");
	}
	Ok(())
}

fn intersect(request: &Request) -> Result<Vec<(DiscModel, Vec<GeoPoint>)>> {
	let intersector = Intersector::new(request.options.clone());
	request
		.model
		.models()
		.iter()
		.map(|&model| {
			let points = intersector
				.intersect_with_disc(model, &request.boundary, &request.center, request.radius)
				.with_context(|| format!("intersecting the boundary with the {model} disc"))?;
			if points.is_empty() {
				info!("the {model} disc does not overlap the boundary");
			}
			Ok((model, points))
		})
		.collect()
}
