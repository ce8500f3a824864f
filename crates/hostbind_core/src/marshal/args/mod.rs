use std::fmt;

use crate::marshal::{FieldPath, MarshalError, Mismatch, Result, Value, ValueKind};

#[cfg(test)]
mod tests;

/// Set of accepted [`ValueKind`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KindSet(u8);

impl KindSet {
	/// Accepts nothing.
	pub const EMPTY: KindSet = KindSet(0);
	/// Accepts every kind.
	pub const ANY: KindSet = KindSet::of(&ValueKind::ALL);
	/// `Boolean`.
	pub const BOOLEAN: KindSet = KindSet::of(&[ValueKind::Boolean]);
	/// `Number`.
	pub const NUMBER: KindSet = KindSet::of(&[ValueKind::Number]);
	/// `String`.
	pub const STRING: KindSet = KindSet::of(&[ValueKind::String]);
	/// `Array`.
	pub const ARRAY: KindSet = KindSet::of(&[ValueKind::Array]);
	/// `Object`.
	pub const OBJECT: KindSet = KindSet::of(&[ValueKind::Object]);
	/// `BinaryBuffer`.
	pub const BINARY: KindSet = KindSet::of(&[ValueKind::BinaryBuffer]);

	/// Set containing exactly `kinds`.
	pub const fn of(kinds: &[ValueKind]) -> Self {
		let mut bits = 0_u8;
		let mut idx = 0;
		while idx < kinds.len() {
			bits |= 1 << kinds[idx] as u8;
			idx += 1;
		}
		KindSet(bits)
	}

	/// Union with `other`.
	pub const fn union(self, other: KindSet) -> Self {
		KindSet(self.0 | other.0)
	}

	/// Whether `kind` is accepted.
	pub const fn contains(self, kind: ValueKind) -> bool {
		self.0 & (1 << kind as u8) != 0
	}

	/// Accepted kinds in declaration order.
	pub fn iter(self) -> impl Iterator<Item = ValueKind> {
		ValueKind::ALL.into_iter().filter(move |kind| self.contains(*kind))
	}
}

impl fmt::Display for KindSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut first = true;
		for kind in self.iter() {
			if !first {
				f.write_str("|")?;
			}
			f.write_str(kind.name())?;
			first = false;
		}
		if first {
			f.write_str("nothing")?;
		}
		Ok(())
	}
}

/// Accepted kinds for one argument position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgRule {
	/// Kinds the argument may have.
	pub kinds: KindSet,
	/// Whether the argument may be omitted.
	pub optional: bool,
}

impl ArgRule {
	/// Rule for a mandatory argument.
	pub const fn required(kinds: KindSet) -> Self {
		Self { kinds, optional: false }
	}

	/// Rule for an argument that may be omitted.
	pub const fn optional(kinds: KindSet) -> Self {
		Self { kinds, optional: true }
	}
}

/// Validated call signature: required rules followed by optional ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
	rules: Vec<ArgRule>,
	required: usize,
}

impl Signature {
	/// Check that optional rules form a trailing run.
	pub fn new(rules: Vec<ArgRule>) -> Result<Self> {
		let required = check_trailing_optional(&rules)?;
		Ok(Self { rules, required })
	}

	/// Number of mandatory arguments.
	pub fn required(&self) -> usize {
		self.required
	}

	/// Maximum argument count.
	pub fn max(&self) -> usize {
		self.rules.len()
	}

	/// Rules in position order.
	pub fn rules(&self) -> &[ArgRule] {
		&self.rules
	}

	/// Check arity, then each supplied argument's kind.
	pub fn validate(&self, args: &[Value]) -> Result<()> {
		if args.len() < self.required || args.len() > self.rules.len() {
			return Err(MarshalError::ArgumentCount {
				min: self.required,
				max: self.rules.len(),
				got: args.len(),
			});
		}

		for (position, (arg, rule)) in args.iter().zip(&self.rules).enumerate() {
			if !rule.kinds.contains(arg.kind()) {
				return Err(MarshalError::at(FieldPath::arg(position), Mismatch::kind(rule.kinds, arg.kind())));
			}
		}
		Ok(())
	}
}

impl fmt::Display for Signature {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("(")?;
		for (position, rule) in self.rules.iter().enumerate() {
			if position > 0 {
				f.write_str(", ")?;
			}
			if rule.optional {
				write!(f, "[{}]", rule.kinds)?;
			} else {
				write!(f, "{}", rule.kinds)?;
			}
		}
		f.write_str(")")
	}
}

/// Check `args` against an ad-hoc rule list.
pub fn validate_args(args: &[Value], rules: &[ArgRule]) -> Result<()> {
	let required = check_trailing_optional(rules)?;
	Signature {
		rules: rules.to_vec(),
		required,
	}
	.validate(args)
}

fn check_trailing_optional(rules: &[ArgRule]) -> Result<usize> {
	let required = rules.iter().take_while(|rule| !rule.optional).count();
	if let Some(offset) = rules[required..].iter().position(|rule| !rule.optional) {
		return Err(MarshalError::OptionalGap { position: required + offset });
	}
	Ok(required)
}
