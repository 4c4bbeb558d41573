use crate::{GeospaceError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A latitude/longitude pair in decimal degrees.
///
/// Values are stored exactly as given. Normalization only happens inside the
/// trigonometric formulas of the geodesy module.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
	pub lat: f64,
	pub lng: f64,
}

impl GeoPoint {
	#[must_use]
	pub fn new(lat: f64, lng: f64) -> Self {
		Self { lat, lng }
	}

	/// Formats the point as `"<lat> <lng>"` with a fixed number of decimals, the
	/// coordinate form used inside WKT.
	#[must_use]
	pub fn to_wkt_coord(&self, precision: usize) -> String {
		format!("{:.precision$} {:.precision$}", self.lat, self.lng)
	}

	/// Parses a list of points written as `lat,lng|lat,lng|...`.
	pub fn parse_list(text: &str) -> Result<Vec<GeoPoint>> {
		text
			.split('|')
			.filter(|entry| !entry.trim().is_empty())
			.map(str::parse)
			.collect()
	}

	/// Formats points as `lat,lng|lat,lng|...` with six decimals.
	#[must_use]
	pub fn format_list(points: &[GeoPoint]) -> String {
		points.iter().map(ToString::to_string).collect::<Vec<_>>().join("|")
	}
}

impl fmt::Display for GeoPoint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:.6},{:.6}", self.lat, self.lng)
	}
}

impl FromStr for GeoPoint {
	type Err = GeospaceError;

	/// Parses `"lat,lng"`, surrounding whitespace allowed.
	fn from_str(s: &str) -> Result<Self> {
		let mut parts = s.split(',');
		let (Some(lat), Some(lng), None) = (parts.next(), parts.next(), parts.next()) else {
			return Err(GeospaceError::parse(s, "expected 'lat,lng'"));
		};
		let number = |token: &str| {
			let token = token.trim();
			token
				.parse::<f64>()
				.map_err(|e| GeospaceError::parse(token, e.to_string()))
		};
		Ok(GeoPoint::new(number(lat)?, number(lng)?))
	}
}

impl From<(f64, f64)> for GeoPoint {
	fn from(value: (f64, f64)) -> Self {
		GeoPoint::new(value.0, value.1)
	}
}

impl From<&(f64, f64)> for GeoPoint {
	fn from(value: &(f64, f64)) -> Self {
		GeoPoint::new(value.0, value.1)
	}
}

impl From<[f64; 2]> for GeoPoint {
	fn from(value: [f64; 2]) -> Self {
		GeoPoint::new(value[0], value[1])
	}
}

/// Planar coordinates keep the WKT axis order: `x` is latitude, `y` is longitude.
impl From<geo_types::Coord<f64>> for GeoPoint {
	fn from(value: geo_types::Coord<f64>) -> Self {
		GeoPoint::new(value.x, value.y)
	}
}

impl From<GeoPoint> for geo_types::Coord<f64> {
	fn from(value: GeoPoint) -> Self {
		geo_types::Coord { x: value.lat, y: value.lng }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[test]
	fn new_keeps_values_unnormalized() {
		let p = GeoPoint::new(91.5, -370.25);
		assert_eq!(p.lat, 91.5);
		assert_eq!(p.lng, -370.25);
	}

	#[rstest]
	#[case(GeoPoint::new(26.88, -80.5443), 6, "26.880000 -80.544300")]
	#[case(GeoPoint::new(0.1234567, 1.0), 6, "0.123457 1.000000")]
	#[case(GeoPoint::new(-0.0000001, 0.0), 6, "-0.000000 0.000000")]
	#[case(GeoPoint::new(1.24, 2.56), 1, "1.2 2.6")]
	fn wkt_coord(#[case] p: GeoPoint, #[case] precision: usize, #[case] expected: &str) {
		assert_eq!(p.to_wkt_coord(precision), expected);
	}

	#[test]
	fn display_uses_six_decimals() {
		assert_eq!(GeoPoint::new(26.43, -80.32).to_string(), "26.430000,-80.320000");
	}

	#[rstest]
	#[case("26.88,-80.5443", GeoPoint::new(26.88, -80.5443))]
	#[case(" 1 , 2 ", GeoPoint::new(1.0, 2.0))]
	fn from_str_valid(#[case] text: &str, #[case] expected: GeoPoint) {
		assert_eq!(text.parse::<GeoPoint>().unwrap(), expected);
	}

	#[rstest]
	#[case("26.88")]
	#[case("1,2,3")]
	#[case("north,2")]
	fn from_str_invalid(#[case] text: &str) {
		let err = text.parse::<GeoPoint>().unwrap_err();
		assert!(matches!(err, GeospaceError::Parse { .. }), "{err}");
	}

	#[test]
	fn from_str_error_names_token() {
		let err = "12.5,abc".parse::<GeoPoint>().unwrap_err();
		assert!(matches!(err, GeospaceError::Parse { ref token, .. } if token == "abc"));
	}

	#[test]
	fn parse_and_format_list() {
		let points = GeoPoint::parse_list("26.88,-80.5443|26.73,-80.22|26.423,-80.421").unwrap();
		assert_eq!(
			points,
			vec![
				GeoPoint::new(26.88, -80.5443),
				GeoPoint::new(26.73, -80.22),
				GeoPoint::new(26.423, -80.421)
			]
		);
		assert_eq!(
			GeoPoint::format_list(&points),
			"26.880000,-80.544300|26.730000,-80.220000|26.423000,-80.421000"
		);
	}

	#[test]
	fn parse_list_ignores_trailing_separator() {
		assert_eq!(GeoPoint::parse_list("1,2|").unwrap().len(), 1);
		assert!(GeoPoint::parse_list("").unwrap().is_empty());
	}

	#[test]
	fn geo_coord_conversion_keeps_axis_order() {
		let coord: geo_types::Coord<f64> = GeoPoint::new(26.0, -80.0).into();
		assert_eq!(coord.x, 26.0);
		assert_eq!(coord.y, -80.0);
		assert_eq!(GeoPoint::from(coord), GeoPoint::new(26.0, -80.0));
	}

	#[test]
	fn serde_field_names() {
		let p: GeoPoint = serde_yaml_ng::from_str("{lat: 1.5, lng: -2.5}").unwrap();
		assert_eq!(p, GeoPoint::new(1.5, -2.5));
	}
}
