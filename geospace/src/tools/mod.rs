pub mod disc;
pub mod intersect;

use geospace_core::{DiscModel, GeoPoint};

/// One output line per model as `lat,lng|lat,lng|...`, prefixed with the
/// model name when more than one model ran.
fn format_results(results: &[(DiscModel, Vec<GeoPoint>)]) -> Vec<String> {
	let labelled = results.len() > 1;
	results
		.iter()
		.map(|(model, points)| {
			let points = GeoPoint::format_list(points);
			if labelled {
				format!("{model}: {points}")
			} else {
				points
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn single_model_is_unlabelled() {
		let results = vec![(DiscModel::Vincenty, vec![GeoPoint::new(1.0, -2.5)])];
		assert_eq!(format_results(&results), vec!["1.000000,-2.500000"]);
	}

	#[test]
	fn several_models_are_labelled() {
		let results = vec![
			(DiscModel::Haversine, vec![GeoPoint::new(1.0, 2.0), GeoPoint::new(3.0, 4.0)]),
			(DiscModel::Vincenty, vec![]),
		];
		assert_eq!(
			format_results(&results),
			vec!["haversine: 1.000000,2.000000|3.000000,4.000000", "vincenty: "]
		);
	}
}
