//! Fixture and process-output helpers shared by the hostbind test suites.

use std::path::{Path, PathBuf};
use std::process::Output;

/// JSON fixtures checked in at the workspace root.
pub const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../fixtures");

/// Path of a fixture under [`FIXTURES_DIR`].
pub fn fixture_path(name: &str) -> PathBuf {
	Path::new(FIXTURES_DIR).join(name)
}

/// Fixture contents as text.
pub fn fixture_text(name: &str) -> String {
	let path = fixture_path(name);
	std::fs::read_to_string(&path).unwrap_or_else(|err| panic!("fixture {} should be readable: {err}", path.display()))
}

/// Fixture contents parsed as JSON.
pub fn fixture_json(name: &str) -> serde_json::Value {
	serde_json::from_str(&fixture_text(name)).unwrap_or_else(|err| panic!("fixture {name} should be valid json: {err}"))
}

/// Stdout of a successful run, parsed as JSON.
pub fn stdout_json(output: &Output) -> serde_json::Value {
	assert!(
		output.status.success(),
		"command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

/// Stderr of a run that exited with status 1.
pub fn failure_stderr(output: &Output) -> String {
	assert_eq!(output.status.code(), Some(1), "stdout: {}", String::from_utf8_lossy(&output.stdout));
	String::from_utf8_lossy(&output.stderr).into_owned()
}
