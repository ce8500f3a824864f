use thiserror::Error;

use crate::marshal::{FieldPath, PathStep, PrimKind};

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, MarshalError>;

/// Errors produced while validating, converting, and dispatching host calls.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MarshalError {
	/// Supplied argument count is outside the signature's bounds.
	#[error("wrong number of arguments")]
	ArgumentCount {
		/// Number of required arguments.
		min: usize,
		/// Number of declared arguments, optional ones included.
		max: usize,
		/// Number of supplied arguments.
		got: usize,
	},
	/// A value's kind or shape does not match what the target type expects.
	#[error("invalid argument type{}", type_detail(.path, .mismatch))]
	ArgumentType {
		/// Location of the offending value.
		path: FieldPath,
		/// What was expected and what was found.
		mismatch: Mismatch,
	},
	/// Struct descriptor declared the same field name twice.
	#[error("duplicate field {field} in struct {struct_name}")]
	DuplicateField {
		/// Struct being described.
		struct_name: String,
		/// Repeated field name.
		field: String,
	},
	/// Required argument rule follows an optional one.
	#[error("required argument rule at position {position} follows an optional rule")]
	OptionalGap {
		/// Position of the misplaced required rule.
		position: usize,
	},
	/// Result layout exports a key the reply envelope owns.
	#[error("operation {operation} result exports reserved field {field}")]
	ReservedField {
		/// Operation name.
		operation: String,
		/// Clashing field name.
		field: String,
	},
	/// Operation name registered twice.
	#[error("operation {name} is already registered")]
	DuplicateOperation {
		/// Operation name.
		name: String,
	},
	/// No operation is registered under the requested name.
	#[error("unknown operation {name}")]
	UnknownOperation {
		/// Requested operation name.
		name: String,
	},
	/// Domain operation failed; the message reaches the host verbatim.
	#[error("{message}")]
	Operation {
		/// Human-readable failure text.
		message: String,
	},
}

/// Coarse error family used by callers that only need to branch on category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	/// Signature arity violated.
	ArgumentCount,
	/// Kind, shape, or range mismatch somewhere in a value.
	ArgumentType,
	/// Invalid descriptor or signature definition.
	Schema,
	/// Registry lookup or registration failure.
	Dispatch,
	/// Failure reported by the domain operation itself.
	Operation,
}

/// Detail attached to [`MarshalError::ArgumentType`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Mismatch {
	/// Dynamic kind or static shape differs from the expected one.
	#[error("expected {expected}, got {got}")]
	Kind {
		/// Expected kind or shape name.
		expected: String,
		/// Actual kind or shape name.
		got: String,
	},
	/// Number cannot be represented by the requested primitive kind.
	#[error("number {value} out of range for {kind}")]
	OutOfRange {
		/// Requested primitive kind.
		kind: PrimKind,
		/// Offending number.
		value: f64,
	},
	/// Requested struct layout names a field the rendered value lacks.
	#[error("{struct_name} has no field {field}")]
	MissingField {
		/// Struct type of the rendered value.
		struct_name: String,
		/// Field the requested layout expects.
		field: String,
	},
	/// Byte buffer exceeds the configured length limit.
	#[error("byte buffer of {len} bytes exceeds limit {max}")]
	TooManyBytes {
		/// Supplied buffer length.
		len: usize,
		/// Configured maximum.
		max: usize,
	},
	/// Array exceeds the configured element limit.
	#[error("array of {count} elements exceeds limit {max}")]
	TooLong {
		/// Supplied element count.
		count: usize,
		/// Configured maximum.
		max: usize,
	},
}

impl Mismatch {
	/// Build a kind mismatch from anything displayable.
	pub fn kind(expected: impl ToString, got: impl ToString) -> Self {
		Self::Kind {
			expected: expected.to_string(),
			got: got.to_string(),
		}
	}
}

impl MarshalError {
	/// Type error at `path`.
	pub fn at(path: FieldPath, mismatch: Mismatch) -> Self {
		Self::ArgumentType { path, mismatch }
	}

	/// Domain failure carrying a host-visible message.
	pub fn operation(message: impl Into<String>) -> Self {
		Self::Operation { message: message.into() }
	}

	/// Error family.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::ArgumentCount { .. } => ErrorKind::ArgumentCount,
			Self::ArgumentType { .. } => ErrorKind::ArgumentType,
			Self::DuplicateField { .. } | Self::OptionalGap { .. } | Self::ReservedField { .. } => ErrorKind::Schema,
			Self::DuplicateOperation { .. } | Self::UnknownOperation { .. } => ErrorKind::Dispatch,
			Self::Operation { .. } => ErrorKind::Operation,
		}
	}

	/// Location of a type error, if this is one.
	pub fn path(&self) -> Option<&FieldPath> {
		match self {
			Self::ArgumentType { path, .. } => Some(path),
			_ => None,
		}
	}

	/// Mismatch detail of a type error, if this is one.
	pub fn mismatch(&self) -> Option<&Mismatch> {
		match self {
			Self::ArgumentType { mismatch, .. } => Some(mismatch),
			_ => None,
		}
	}

	/// Prefix the path of a type error with an enclosing step.
	pub fn within(self, step: PathStep) -> Self {
		match self {
			Self::ArgumentType { mut path, mismatch } => {
				path.steps.insert(0, step);
				Self::ArgumentType { path, mismatch }
			}
			other => other,
		}
	}
}

fn type_detail(path: &FieldPath, mismatch: &Mismatch) -> String {
	if path.is_empty() {
		format!(": {mismatch}")
	} else {
		format!(": {path}: {mismatch}")
	}
}
