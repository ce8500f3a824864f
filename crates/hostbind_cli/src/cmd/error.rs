use std::path::PathBuf;

use hostbind::marshal::MarshalError;
use thiserror::Error;

/// Command result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Failures surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Marshaling, validation, or dispatch failure.
	#[error(transparent)]
	Marshal(#[from] MarshalError),
	/// Input text is not valid JSON.
	#[error("invalid JSON input: {0}")]
	Json(#[from] serde_json::Error),
	/// Argument file could not be read.
	#[error("cannot read {}: {source}", .path.display())]
	Read {
		/// File that failed to open.
		path: PathBuf,
		/// Underlying I/O error.
		source: std::io::Error,
	},
	/// Call arguments were not a JSON array.
	#[error("arguments must be a JSON array, got {got}")]
	ArgsNotArray {
		/// Kind of the supplied document.
		got: String,
	},
	/// No demo shape has the requested name.
	#[error("unknown shape {name:?}; expected one of: {known}")]
	UnknownShape {
		/// Requested shape name.
		name: String,
		/// Comma-separated list of known shapes.
		known: String,
	},
}
