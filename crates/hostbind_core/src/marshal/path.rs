use std::fmt;

use crate::marshal::{MarshalError, Mismatch, Result};

/// One hop from an outer value to an inner one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
	/// Positional call argument.
	Arg(usize),
	/// Named struct field / object key.
	Field(String),
	/// Zero-based slice / array element.
	Index(usize),
	/// Pointer indirection.
	Deref,
}

/// Location of a value inside a nested argument, e.g. `$1.fills[0].color*`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
	/// Ordered sequence of path steps, outermost first.
	pub steps: Vec<PathStep>,
}

impl FieldPath {
	/// Empty path addressing the root value.
	pub fn root() -> Self {
		Self::default()
	}

	/// Path addressing call argument `position`.
	pub fn arg(position: usize) -> Self {
		Self {
			steps: vec![PathStep::Arg(position)],
		}
	}

	/// Whether the path addresses the root value.
	pub fn is_empty(&self) -> bool {
		self.steps.is_empty()
	}

	/// Append a step.
	pub fn push(&mut self, step: PathStep) {
		self.steps.push(step);
	}

	/// Drop the innermost step.
	pub fn pop(&mut self) {
		self.steps.pop();
	}

	/// Parse the rendered form: `$N` argument prefix, dotted field names,
	/// `[index]` selectors and `*` pointer hops.
	pub fn parse(input: &str) -> Result<Self> {
		let bytes = input.as_bytes();
		let mut idx = 0_usize;
		let mut steps = Vec::new();

		if bytes.first() == Some(&b'$') {
			idx = 1;
			let start = idx;
			while idx < bytes.len() && bytes[idx].is_ascii_digit() {
				idx += 1;
			}
			let position = input[start..idx].parse::<usize>().map_err(|_| invalid(input))?;
			steps.push(PathStep::Arg(position));
			if idx < bytes.len() && bytes[idx] == b'.' {
				idx += 1;
				if idx >= bytes.len() {
					return Err(invalid(input));
				}
			}
		}

		while idx < bytes.len() {
			if bytes[idx] != b'[' && bytes[idx] != b'*' {
				let start = idx;
				while idx < bytes.len() && (bytes[idx].is_ascii_alphanumeric() || bytes[idx] == b'_') {
					idx += 1;
				}
				if idx == start {
					return Err(invalid(input));
				}
				steps.push(PathStep::Field(input[start..idx].to_owned()));
			}

			while idx < bytes.len() && (bytes[idx] == b'[' || bytes[idx] == b'*') {
				if bytes[idx] == b'*' {
					steps.push(PathStep::Deref);
					idx += 1;
					continue;
				}

				idx += 1;
				let n_start = idx;
				while idx < bytes.len() && bytes[idx].is_ascii_digit() {
					idx += 1;
				}
				if idx == n_start || idx >= bytes.len() || bytes[idx] != b']' {
					return Err(invalid(input));
				}
				let number = input[n_start..idx].parse::<usize>().map_err(|_| invalid(input))?;
				steps.push(PathStep::Index(number));
				idx += 1;
			}

			if idx < bytes.len() {
				if bytes[idx] != b'.' {
					return Err(invalid(input));
				}
				idx += 1;
				if idx >= bytes.len() {
					return Err(invalid(input));
				}
			}
		}

		Ok(Self { steps })
	}
}

impl fmt::Display for FieldPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut first = true;
		for step in &self.steps {
			match step {
				PathStep::Arg(position) => write!(f, "${position}")?,
				PathStep::Field(name) => {
					if !first {
						f.write_str(".")?;
					}
					f.write_str(name)?;
				}
				PathStep::Index(index) => write!(f, "[{index}]")?,
				PathStep::Deref => f.write_str("*")?,
			}
			first = false;
		}
		Ok(())
	}
}

fn invalid(input: &str) -> MarshalError {
	MarshalError::at(FieldPath::root(), Mismatch::kind("field path", format!("{input:?}")))
}

#[cfg(test)]
mod tests {
	use super::{FieldPath, PathStep};

	#[test]
	fn parse_accepts_arg_fields_indices_and_derefs() {
		let path = FieldPath::parse("$2.fills[0]*.color").expect("path parses");
		assert_eq!(
			path.steps,
			vec![
				PathStep::Arg(2),
				PathStep::Field("fills".into()),
				PathStep::Index(0),
				PathStep::Deref,
				PathStep::Field("color".into()),
			]
		);
	}

	#[test]
	fn display_renders_parseable_text() {
		let path = FieldPath {
			steps: vec![PathStep::Field("F2".into()), PathStep::Index(3), PathStep::Deref],
		};
		assert_eq!(path.to_string(), "F2[3]*");
		assert_eq!(FieldPath::parse("F2[3]*").expect("path parses"), path);
	}

	#[test]
	fn leading_index_is_allowed() {
		let path = FieldPath::parse("[4].name").expect("path parses");
		assert_eq!(path.steps, vec![PathStep::Index(4), PathStep::Field("name".into())]);
	}

	#[test]
	fn malformed_paths_are_rejected() {
		for input in ["F1.", "F1[", "F1[x]", "$", "$1.", "F1..F2", "F1-F2"] {
			assert!(FieldPath::parse(input).is_err(), "{input} should not parse");
		}
	}
}
