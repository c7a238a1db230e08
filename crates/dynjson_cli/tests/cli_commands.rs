#![allow(missing_docs)]

use std::path::Path;
use std::process::{Command, Output};

use dynjson_testkit::{fixture_bytes, fixture_json, fixture_path};

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_dynjson")).args(args).output().expect("dynjson command executes")
}

fn stdout(output: &Output) -> String {
	assert!(output.status.success(), "command failed: {}", String::from_utf8_lossy(&output.stderr));
	String::from_utf8(output.stdout.clone()).expect("stdout is utf-8")
}

fn write_zstd(dir: &Path, name: &str) -> String {
	let packed = zstd::encode_all(&fixture_bytes(name)[..], 3).expect("zstd encodes");
	let path = dir.join(format!("{name}.zst"));
	std::fs::write(&path, packed).expect("write compressed fixture");
	path.display().to_string()
}

#[test]
fn fmt_applies_prefix_and_indent() {
	let input = fixture_path("mixed.json").display().to_string();
	let text = stdout(&run(&["fmt", &input, "--prefix", "> ", "--indent", "\t"]));

	let mut lines = text.lines();
	assert_eq!(lines.next(), Some("{"));
	assert_eq!(lines.next(), Some("> \t\"big\": 18446744073709551615,"));
	assert!(text.ends_with("> }\n"));
}

#[test]
fn fmt_compact_is_single_line_with_sorted_keys() {
	let input = fixture_path("person.json").display().to_string();
	let text = stdout(&run(&["fmt", &input, "--compact"]));

	assert_eq!(text.lines().count(), 1);
	assert!(text.starts_with("{\"age\":37,\"children\":"));
	let reparsed: serde_json::Value = serde_json::from_str(&text).expect("valid json");
	assert_eq!(reparsed, fixture_json("person.json"));
}

#[test]
fn fmt_rejects_compact_with_layout_flags() {
	let input = fixture_path("person.json").display().to_string();
	let output = run(&["fmt", &input, "--compact", "--indent", "\t"]);
	assert!(!output.status.success());
}

#[test]
fn info_reports_plain_input() {
	let input = fixture_path("person.json").display().to_string();
	let text = stdout(&run(&["info", &input]));

	assert!(text.contains("compression: none\n"));
	assert!(text.contains("kind: object\n"));
	assert!(text.contains("size: 5\n"));
	assert!(text.contains("keys: age, children, fav.movie, friends, name\n"));
}

#[test]
fn zstd_input_is_transparent_to_commands() {
	let dir = tempfile::tempdir().expect("tempdir");
	let packed = write_zstd(dir.path(), "mixed.json");

	let info = stdout(&run(&["info", &packed]));
	assert!(info.contains("compression: zstd\n"));
	assert!(info.contains("size: 10\n"));

	let deeper = stdout(&run(&["get", &packed, "nested.deep.deeper[1][1][0]"]));
	assert_eq!(deeper, "3\n");

	let whole = stdout(&run(&["get", &packed, "."]));
	let reparsed: serde_json::Value = serde_json::from_str(&whole).expect("valid json");
	assert_eq!(reparsed, fixture_json("mixed.json"));
}

#[test]
fn malformed_input_exits_nonzero_with_path() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("broken.json");
	std::fs::write(&path, "[1, 2").expect("write broken input");

	let output = run(&["info", &path.display().to_string()]);
	assert_eq!(output.status.code(), Some(1));
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.starts_with("error: "));
	assert!(stderr.contains("broken.json"));
}

#[test]
fn verbose_flag_logs_input_details() {
	let input = fixture_path("person.json").display().to_string();
	let output = Command::new(env!("CARGO_BIN_EXE_dynjson"))
		.args(["--verbose", "info", &input])
		.env_remove("RUST_LOG")
		.output()
		.expect("dynjson command executes");
	assert!(output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("read input"));
}
