//! Minimal WKT reading helpers.
//!
//! Only the two-dimensional subset written by [`PolygonBuilder`](super::PolygonBuilder)
//! and rendered by geometry engines is understood: a tag, then either `EMPTY`
//! or a parenthesized body of nested groups and `x y` pairs.

use geospace_core::{GeoPoint, GeospaceError, Result};

/// A WKT text split into its tag and parenthesized body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Envelope<'a> {
	/// Upper-case geometry tag, e.g. `POLYGON`.
	pub tag: String,
	/// Text inside the outermost parentheses, `None` for `EMPTY` geometries.
	pub body: Option<&'a str>,
}

/// Splits `TAG (body)` or `TAG EMPTY`.
pub fn split_envelope(text: &str) -> Result<Envelope<'_>> {
	let text = text.trim();
	match text.find('(') {
		None => {
			let tag = text
				.strip_suffix("EMPTY")
				.ok_or_else(|| GeospaceError::parse(text, "expected '(' or EMPTY"))?;
			Ok(Envelope {
				tag: normalize_tag(tag)?,
				body: None,
			})
		}
		Some(open) => {
			let body = text[open + 1..]
				.strip_suffix(')')
				.ok_or_else(|| GeospaceError::parse(text, "missing closing parenthesis"))?;
			Ok(Envelope {
				tag: normalize_tag(&text[..open])?,
				body: Some(body),
			})
		}
	}
}

/// Returns the body of a WKT text, `None` for `EMPTY` geometries.
pub fn envelope_body(text: &str) -> Result<Option<&str>> {
	Ok(split_envelope(text)?.body)
}

fn normalize_tag(tag: &str) -> Result<String> {
	let tag = tag.trim();
	if tag.is_empty() || !tag.bytes().all(|b| b.is_ascii_alphabetic()) {
		return Err(GeospaceError::parse(tag, "invalid geometry tag"));
	}
	Ok(tag.to_ascii_uppercase())
}

/// Splits a comma separated list of parenthesized groups, `(a), (b)`, into the
/// group contents `a` and `b`. Nested parentheses stay inside their group.
pub fn split_groups(body: &str) -> Result<Vec<&str>> {
	let mut groups = Vec::new();
	let mut depth = 0usize;
	let mut start = 0;
	let mut expect_group = true;

	for (i, c) in body.char_indices() {
		match c {
			'(' => {
				if depth == 0 {
					if !expect_group {
						return Err(GeospaceError::parse(body, "missing ',' between groups"));
					}
					start = i + 1;
				}
				depth += 1;
			}
			')' => {
				if depth == 0 {
					return Err(GeospaceError::parse(body, "unbalanced ')'"));
				}
				depth -= 1;
				if depth == 0 {
					groups.push(&body[start..i]);
					expect_group = false;
				}
			}
			',' if depth == 0 => {
				if expect_group {
					return Err(GeospaceError::parse(body, "empty group"));
				}
				expect_group = true;
			}
			c if depth == 0 && !c.is_whitespace() => {
				return Err(GeospaceError::parse(body, format!("unexpected character '{c}' outside a group")));
			}
			_ => {}
		}
	}

	if depth != 0 {
		return Err(GeospaceError::parse(body, "unbalanced '('"));
	}
	if expect_group {
		return Err(GeospaceError::parse(body, "expected a parenthesized group"));
	}
	Ok(groups)
}

/// Reads `x y, x y, ...` into points, `x` being latitude and `y` longitude.
///
/// Fails on the first token that is not a finite number and on entries that
/// do not hold exactly two values.
pub fn parse_coordinates(text: &str) -> Result<Vec<GeoPoint>> {
	text
		.split(',')
		.map(|entry| {
			let entry = entry.trim();
			let mut values = entry.split_whitespace().map(parse_value);
			match (values.next(), values.next(), values.next()) {
				(Some(lat), Some(lng), None) => Ok(GeoPoint::new(lat?, lng?)),
				_ => Err(GeospaceError::parse(entry, "expected a coordinate pair 'lat lng'")),
			}
		})
		.collect()
}

fn parse_value(token: &str) -> Result<f64> {
	let value = token
		.parse::<f64>()
		.map_err(|e| GeospaceError::parse(token, e.to_string()))?;
	if !value.is_finite() {
		return Err(GeospaceError::parse(token, "not a finite number"));
	}
	Ok(value)
}

/// Reads a polygon body `(outer), (hole), ...` into its rings, outer ring first.
pub fn parse_polygon_rings(body: &str) -> Result<Vec<Vec<GeoPoint>>> {
	split_groups(body)?.into_iter().map(parse_coordinates).collect()
}
