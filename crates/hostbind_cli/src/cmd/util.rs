use std::path::Path;

use hostbind::marshal::Value;
use serde::Serialize;

use crate::cmd::{CliError, Result};

/// Print `payload` as pretty JSON on stdout.
pub(crate) fn emit_json<T: Serialize>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}

/// Parse JSON text into a host value.
pub(crate) fn parse_value(text: &str) -> Result<Value> {
	let json: serde_json::Value = serde_json::from_str(text)?;
	Ok(Value::from(json))
}

/// Read and parse a JSON file into a host value.
pub(crate) fn read_value(path: &Path) -> Result<Value> {
	let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
		path: path.to_path_buf(),
		source,
	})?;
	log::debug!("read {} bytes from {}", text.len(), path.display());
	parse_value(&text)
}
