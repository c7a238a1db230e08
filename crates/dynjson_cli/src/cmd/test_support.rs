use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::sync::OnceLock;

use dynjson_testkit::{fixture_path as shared_fixture_path, target_dir as workspace_target_dir};

static DYNJSON_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn fixture_path(name: &str) -> PathBuf {
	shared_fixture_path(name)
}

pub(crate) fn run_dynjson(args: &[&str]) -> Output {
	Command::new(dynjson_bin()).args(args).output().expect("dynjson command executes")
}

pub(crate) fn run_dynjson_stdin(args: &[&str], stdin: &[u8]) -> Output {
	let mut child = Command::new(dynjson_bin())
		.args(args)
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.expect("dynjson command spawns");
	child.stdin.take().expect("stdin is piped").write_all(stdin).expect("stdin accepts input");
	child.wait_with_output().expect("dynjson command completes")
}

pub(crate) fn run_dynjson_json(args: &[&str]) -> serde_json::Value {
	let output = run_dynjson(args);
	assert!(
		output.status.success(),
		"dynjson command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn dynjson_bin() -> &'static PathBuf {
	DYNJSON_BIN.get_or_init(resolve_dynjson_bin)
}

fn resolve_dynjson_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_dynjson") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let target_dir = workspace_target_dir();

	let mut bin = target_dir.join("debug");
	bin.push(if cfg!(windows) { "dynjson.exe" } else { "dynjson" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "dynjson"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build dynjson binary at {}", bin.display());

	bin
}
