//! End-to-end intersections through the geo-backed engine.

use geospace_core::{
	DiscModel, DiscOptions, GeoPoint, GeospaceError, Result,
	geodesy::{haversine, vincenty},
};
use geospace_geometry::*;
use rstest::rstest;

fn triangle() -> Vec<GeoPoint> {
	GeoPoint::parse_list("26.88,-80.5443|26.73,-80.22|26.423,-80.421").unwrap()
}

fn center() -> GeoPoint {
	GeoPoint::new(26.43, -80.32)
}

fn run(model: DiscModel, boundary: &[GeoPoint], center: &GeoPoint, radius: f64) -> Result<Vec<GeoPoint>> {
	let options = DiscOptions::default();
	match model {
		DiscModel::Haversine => intersect_with_haversine_disc(boundary, center, radius, &options),
		DiscModel::Vincenty => intersect_with_vincenty_disc(boundary, center, radius, &options),
	}
}

/// Whether `p` lies inside the triangle or within `eps` (in squared degrees) of an edge.
fn in_triangle(triangle: &[GeoPoint], p: &GeoPoint, eps: f64) -> bool {
	let signs: Vec<f64> = (0..3)
		.map(|i| {
			let a = triangle[i];
			let b = triangle[(i + 1) % 3];
			(b.lat - a.lat) * (p.lng - a.lng) - (b.lng - a.lng) * (p.lat - a.lat)
		})
		.collect();
	signs.iter().all(|s| *s >= -eps) || signs.iter().all(|s| *s <= eps)
}

/// Planar metres around `origin`; adequate over a few kilometres.
fn local_xy(origin: &GeoPoint, p: &GeoPoint) -> (f64, f64) {
	let x = (p.lng - origin.lng) * 111_320.0 * origin.lat.to_radians().cos();
	let y = (p.lat - origin.lat) * 110_574.0;
	(x, y)
}

/// Distance in metres from `p` to the closest segment of the polyline `line`.
fn distance_to_polyline(origin: &GeoPoint, p: &GeoPoint, line: &[GeoPoint]) -> f64 {
	let (px, py) = local_xy(origin, p);
	line
		.windows(2)
		.map(|w| {
			let (ax, ay) = local_xy(origin, &w[0]);
			let (bx, by) = local_xy(origin, &w[1]);
			let (dx, dy) = (bx - ax, by - ay);
			let len2 = dx * dx + dy * dy;
			let t = if len2 == 0.0 {
				0.0
			} else {
				(((px - ax) * dx + (py - ay) * dy) / len2).clamp(0.0, 1.0)
			};
			(px - ax - t * dx).hypot(py - ay - t * dy)
		})
		.fold(f64::INFINITY, f64::min)
}

#[rstest]
#[case(DiscModel::Haversine)]
#[case(DiscModel::Vincenty)]
fn published_scenario_does_not_reach_the_triangle(#[case] model: DiscModel) {
	// the closest triangle edge is about 8.3 km from the center
	assert!(run(model, &triangle(), &center(), 7000.0).unwrap().is_empty());
}

#[rstest]
#[case(DiscModel::Haversine)]
#[case(DiscModel::Vincenty)]
fn overlapping_disc_stays_inside_triangle_and_radius(#[case] model: DiscModel) {
	let radius = 10_000.0;
	let result = run(model, &triangle(), &center(), radius).unwrap();

	assert!(result.len() > 4, "{result:?}");
	assert_eq!(result.first(), result.last());

	for p in &result {
		assert!(in_triangle(&triangle(), p, 1e-9), "{p} is outside the triangle");
		let distance = match model {
			DiscModel::Haversine => haversine::distance(&center(), p),
			DiscModel::Vincenty => vincenty::inverse(&center(), p, 200).unwrap().distance,
		};
		assert!(distance <= radius + 1.0, "{p} is {distance} m from the center");
	}
}

#[test]
fn models_differ_by_spherical_error_only() {
	let haversine = run(DiscModel::Haversine, &triangle(), &center(), 10_000.0).unwrap();
	let vincenty = run(DiscModel::Vincenty, &triangle(), &center(), 10_000.0).unwrap();

	for (points, other) in [(&haversine, &vincenty), (&vincenty, &haversine)] {
		for p in points {
			let gap = distance_to_polyline(&center(), p, other);
			assert!(gap < 50.0, "{p} is {gap} m away from the other model's boundary");
		}
	}
}

#[rstest]
#[case(DiscModel::Haversine)]
#[case(DiscModel::Vincenty)]
fn contained_polygon_is_returned_unchanged(#[case] model: DiscModel) {
	let small = vec![
		GeoPoint::new(26.44, -80.32),
		GeoPoint::new(26.425, -80.31),
		GeoPoint::new(26.425, -80.33),
	];
	let result = run(model, &small, &center(), 7000.0).unwrap();

	// same vertices, possibly starting elsewhere or running the other way
	assert_eq!(result.len(), small.len() + 1);
	assert_eq!(result.first(), result.last());
	for p in &small {
		assert!(
			result
				.iter()
				.any(|q| (q.lat - p.lat).abs() < 1e-6 && (q.lng - p.lng).abs() < 1e-6),
			"{p} missing from {result:?}"
		);
	}
}

#[rstest]
#[case(DiscModel::Haversine)]
#[case(DiscModel::Vincenty)]
fn disc_outside_polygon_is_empty(#[case] model: DiscModel) {
	let far = GeoPoint::new(40.7, -74.0);
	assert!(run(model, &triangle(), &far, 7000.0).unwrap().is_empty());
}

#[rstest]
#[case(DiscModel::Haversine, 0)]
#[case(DiscModel::Haversine, 2)]
#[case(DiscModel::Vincenty, 1)]
#[case(DiscModel::Vincenty, 2)]
fn short_boundary_is_an_input_error(#[case] model: DiscModel, #[case] len: usize) {
	let boundary = &triangle()[..len];
	assert!(matches!(
		run(model, boundary, &center(), 7000.0),
		Err(GeospaceError::Input(_))
	));
}

#[test]
fn disc_split_by_boundary_yields_one_ring_per_piece() {
	// U shape whose arms are 0.01 degrees apart
	let u_shape = GeoPoint::parse_list("0,0|0,0.03|0.01,0.03|0.01,0.01|0.02,0.01|0.02,0.03|0.03,0.03|0.03,0").unwrap();
	let center = GeoPoint::new(0.015, 0.025);
	let intersector = Intersector::new(DiscOptions::default());

	let members = intersector
		.decode_members(DiscModel::Haversine, &u_shape, &center, 1500.0)
		.unwrap();
	assert_eq!(members.len(), 2);
	for ring in &members {
		assert_eq!(ring.first(), ring.last());
		assert!(ring.iter().all(|p| p.lat <= 0.01 + 1e-9 || p.lat >= 0.02 - 1e-9));
	}

	let flat = intersector
		.intersect_with_disc(DiscModel::Haversine, &u_shape, &center, 1500.0)
		.unwrap();
	assert_eq!(flat.len(), members.iter().map(Vec::len).sum::<usize>());
}

#[test]
fn vincenty_iteration_cap_surfaces_as_convergence_error() {
	let intersector = Intersector::new(DiscOptions::default().with_max_iterations(1));
	let result = intersector.intersect_with_disc(DiscModel::Vincenty, &triangle(), &center(), 7000.0);
	assert!(
		matches!(result, Err(GeospaceError::Convergence { iterations: 1 })),
		"{result:?}"
	);
}

#[test]
fn polygons_intersect_agrees_with_disc_overlap() {
	let disc = DiscModel::Haversine
		.generate(&center(), 10_000.0, &DiscOptions::default())
		.unwrap();
	assert!(polygons_intersect(&triangle(), &disc).unwrap());

	let disc = DiscModel::Haversine
		.generate(&center(), 7000.0, &DiscOptions::default())
		.unwrap();
	assert!(!polygons_intersect(&triangle(), &disc).unwrap());
}

#[rstest]
#[case(DiscModel::Haversine)]
#[case(DiscModel::Vincenty)]
fn disc_below_coordinate_resolution_is_an_input_error(#[case] model: DiscModel) {
	let square = GeoPoint::parse_list("0,0|0,1|1,1|1,0").unwrap();
	let result = run(model, &square, &GeoPoint::new(0.5, 0.5), 0.01);
	assert!(matches!(result, Err(GeospaceError::Input(_))), "{result:?}");
}
