use assert_cmd::{Command, cargo};
use predicates::{prelude::*, str};
use std::{fs, path::PathBuf};

const TRIANGLE: &str = "26.88,-80.5443|26.73,-80.22|26.423,-80.421";

// one or more "lat,lng" pairs with six decimals, separated by pipes
const POINTS: &str = r"-?\d+\.\d{6},-?\d+\.\d{6}(\|-?\d+\.\d{6},-?\d+\.\d{6})*";

fn get_testdata(filename: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR"))
		.parent()
		.unwrap()
		.join("testdata")
		.join(filename)
}

fn geospace_cmd() -> Command {
	Command::new(cargo::cargo_bin!())
}

#[test]
fn single_model_prints_bare_points() {
	geospace_cmd()
		.args(["intersect", TRIANGLE, "--center", "26.43,-80.32", "--radius", "10000", "--model", "haversine"])
		.assert()
		.success()
		.stdout(str::is_match(format!("^{POINTS}\n$")).unwrap());
}

#[test]
fn both_models_print_labelled_lines() {
	geospace_cmd()
		.args(["intersect", TRIANGLE, "-c", "26.43,-80.32", "-r", "10000", "--steps", "32"])
		.assert()
		.success()
		.stdout(str::is_match(format!("^haversine: {POINTS}\nvincenty: {POINTS}\n$")).unwrap());
}

#[test]
fn no_overlap_prints_empty_line() {
	geospace_cmd()
		.args(["intersect", TRIANGLE, "-c", "26.43,-80.32", "-r", "7000", "-m", "vincenty"])
		.assert()
		.success()
		.stdout(str::diff("\n"));
}

#[test]
fn request_file() {
	geospace_cmd()
		.args(["intersect", "--config"])
		.arg(get_testdata("request.yml"))
		.assert()
		.success()
		.stdout(str::is_match(format!("^haversine: {POINTS}\nvincenty: {POINTS}\n$")).unwrap());
}

#[test]
fn request_file_with_model_override() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("request.yml");
	fs::write(
		&path,
		"boundary:\n  - { lat: 0, lng: 0 }\n  - { lat: 0, lng: 0.1 }\n  - { lat: 0.1, lng: 0.1 }\n  - { lat: 0.1, lng: 0 }\ncenter: { lat: 0.05, lng: 0.05 }\nradius: 1000\n",
	)
	.unwrap();

	geospace_cmd()
		.args(["intersect", "-m", "vincenty", "--steps", "16", "--config"])
		.arg(&path)
		.assert()
		.success()
		.stdout(str::is_match(format!("^{POINTS}\n$")).unwrap());
}

#[test]
fn short_boundary_fails() {
	geospace_cmd()
		.args(["intersect", "1,2|3,4", "-c", "2,3", "-r", "1000"])
		.assert()
		.failure()
		.code(1)
		.stdout(str::is_empty())
		.stderr(str::contains("a ring needs at least 3 points, got 2"));
}

#[test]
fn malformed_boundary_names_the_token() {
	geospace_cmd()
		.args(["intersect", "26.88,-80.5443|26.73,abc|26.423,-80.421", "-c", "26.43,-80.32", "-r", "7000"])
		.assert()
		.failure()
		.stderr(str::contains("parsing boundary").and(str::contains("cannot parse 'abc'")));
}

#[test]
fn missing_request_file() {
	geospace_cmd()
		.args(["intersect", "--config", "does-not-exist.yml"])
		.assert()
		.failure()
		.stderr(str::contains("opening request file"));
}

#[test]
fn disc_prints_requested_steps() {
	let output = geospace_cmd()
		.args(["disc", "-c", "-33.9,18.4", "-r", "2500", "--steps", "12"])
		.assert()
		.success()
		.get_output()
		.stdout
		.clone();
	let text = String::from_utf8(output).unwrap();
	assert_eq!(text.trim_end().split('|').count(), 12);
}
