use std::path::PathBuf;

use hostbind::marshal::Value;

use crate::catalog;
use crate::cmd::util::{emit_json, parse_value, read_value};
use crate::cmd::{CliError, Result};

#[cfg(test)]
mod tests;

#[derive(clap::Args)]
pub struct Args {
	/// Operation name, e.g. `CellNameToCoordinates`.
	pub name: String,
	/// Arguments as a JSON array.
	#[arg(conflicts_with = "args_file")]
	pub args: Option<String>,
	/// Read the JSON argument array from a file.
	#[arg(long)]
	pub args_file: Option<PathBuf>,
}

/// Invoke one operation and print its reply envelope.
///
/// Operation failures are reported inside the envelope; only malformed input
/// fails the command.
pub fn run(args: Args) -> Result<()> {
	let Args { name, args, args_file } = args;

	let value = match (args, args_file) {
		(Some(text), _) => parse_value(&text)?,
		(None, Some(path)) => read_value(&path)?,
		(None, None) => Value::Array(Vec::new()),
	};
	let Value::Array(call_args) = value else {
		return Err(CliError::ArgsNotArray {
			got: value.kind().to_string(),
		});
	};

	let registry = catalog::registry()?;
	emit_json(&registry.reply(&name, &call_args))
}
