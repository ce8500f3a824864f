use std::path::PathBuf;
use std::process::{Command, Output};

pub(crate) use hostbind_testkit::fixture_path;

/// Binary under test; unit tests run from `target/<profile>/deps`, next to it.
fn hostbind_bin() -> PathBuf {
	if let Some(path) = option_env!("CARGO_BIN_EXE_hostbind") {
		return PathBuf::from(path);
	}
	let exe = std::env::current_exe().expect("test binary path");
	let profile_dir = exe.parent().and_then(|deps| deps.parent()).expect("test binary lives under target/<profile>/deps");
	profile_dir.join(format!("hostbind{}", std::env::consts::EXE_SUFFIX))
}

pub(crate) fn run_hostbind(args: &[&str]) -> Output {
	Command::new(hostbind_bin()).args(args).output().expect("hostbind command executes")
}

pub(crate) fn run_hostbind_json(args: &[&str]) -> serde_json::Value {
	hostbind_testkit::stdout_json(&run_hostbind(args))
}

pub(crate) fn run_hostbind_failure(args: &[&str]) -> String {
	hostbind_testkit::failure_stderr(&run_hostbind(args))
}
