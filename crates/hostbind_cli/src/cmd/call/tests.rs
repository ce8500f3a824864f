use serde_json::json;

use crate::cmd::test_support::{fixture_path, run_hostbind_failure, run_hostbind_json};

#[test]
fn call_prints_reply_envelope() {
	let json = run_hostbind_json(&["call", "CellNameToCoordinates", r#"["B3"]"#]);
	assert_eq!(json, json!({"col": 2, "row": 3, "error": null}));

	let json = run_hostbind_json(&["call", "CoordinatesToCellName", "[1, 1, true]"]);
	assert_eq!(json, json!({"cell": "$A$1", "error": null}));
}

#[test]
fn call_without_arguments_reports_count_error_in_envelope() {
	let json = run_hostbind_json(&["call", "SplitCellName"]);
	assert_eq!(json, json!({"col": "", "row": 0, "error": "wrong number of arguments"}));
}

#[test]
fn call_reports_domain_and_type_errors_in_envelope() {
	let json = run_hostbind_json(&["call", "ColumnNameToNumber", r#"["-"]"#]);
	assert_eq!(json["error"], "invalid column name \"-\"");

	let json = run_hostbind_json(&["call", "JoinCellName", r#"["A", "1"]"#]);
	assert_eq!(json["error"], "invalid argument type: $1: expected Number, got String");
}

#[test]
fn call_reads_arguments_from_file() {
	let fixture = fixture_path("join_cell_name_args.json");
	let fixture = fixture.to_string_lossy().into_owned();
	let json = run_hostbind_json(&["call", "JoinCellName", "--args-file", &fixture]);
	assert_eq!(json, json!({"cell": "XFD1048576", "error": null}));
}

#[test]
fn call_unknown_operation_still_replies() {
	let json = run_hostbind_json(&["call", "AddPicture", "[]"]);
	assert_eq!(json, json!({"error": "unknown operation AddPicture"}));
}

#[test]
fn call_rejects_non_array_arguments() {
	let stderr = run_hostbind_failure(&["call", "SplitCellName", r#"{"cell": "A1"}"#]);
	assert_eq!(stderr.trim_end(), "error: arguments must be a JSON array, got Object");

	let stderr = run_hostbind_failure(&["call", "SplitCellName", "[A1]"]);
	assert!(stderr.starts_with("error: invalid JSON input:"), "{stderr}");
}
