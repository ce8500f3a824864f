//! Scalar coercion between dynamic values and primitive kinds.
//!
//! Matching is kind-exact: `Bool` feeds only `bool`, `String` only `string`,
//! and `Number` every numeric kind. Integer kinds truncate toward zero and
//! reject numbers they cannot hold; `f32`-based kinds reject finite numbers
//! beyond `f32::MAX`.

use crate::marshal::{Complex, Mismatch, PrimKind, StaticValue, Value};


/// Convert one dynamic scalar into a value of `kind`.
pub fn to_static(value: &Value, kind: PrimKind) -> Result<StaticValue, Mismatch> {
	match (kind, value) {
		(PrimKind::Bool, Value::Bool(flag)) => Ok(StaticValue::Bool(*flag)),
		(PrimKind::String, Value::String(text)) => Ok(StaticValue::String(text.to_string())),
		(kind, Value::Number(number)) if kind.is_numeric() => number_to_static(*number, kind),
		(kind, other) => Err(Mismatch::kind(kind, other.kind())),
	}
}

/// Render a primitive static value; `None` when `value` is not a primitive.
///
/// The host has a single number type, so complex kinds render their real
/// part only and the imaginary part is dropped. 64-bit integers beyond 2^53
/// round to the nearest representable number.
pub fn to_dynamic(value: &StaticValue) -> Option<Value> {
	Some(match value {
		StaticValue::Bool(flag) => Value::Bool(*flag),
		StaticValue::I8(number) => Value::Number(f64::from(*number)),
		StaticValue::I16(number) => Value::Number(f64::from(*number)),
		StaticValue::I32(number) => Value::Number(f64::from(*number)),
		StaticValue::I64(number) => Value::Number(*number as f64),
		StaticValue::U8(number) => Value::Number(f64::from(*number)),
		StaticValue::U16(number) => Value::Number(f64::from(*number)),
		StaticValue::U32(number) => Value::Number(f64::from(*number)),
		StaticValue::U64(number) => Value::Number(*number as f64),
		StaticValue::F32(number) => Value::Number(f64::from(*number)),
		StaticValue::F64(number) => Value::Number(*number),
		StaticValue::Complex64(number) => Value::Number(f64::from(number.re)),
		StaticValue::Complex128(number) => Value::Number(number.re),
		StaticValue::String(text) => Value::String(text.as_str().into()),
		StaticValue::Bytes(_) | StaticValue::Struct(_) | StaticValue::Slice(_) | StaticValue::Pointer(_) => return None,
	})
}

macro_rules! int_from_number {
	($number:expr, $kind:expr, $ty:ty, $variant:ident) => {{
		let truncated = $number.trunc();
		// `MAX as f64` rounds up to 2^64 or 2^63 for 64-bit kinds; `as` saturates those back to MAX.
		if $number.is_finite() && truncated >= <$ty>::MIN as f64 && truncated <= <$ty>::MAX as f64 {
			Ok(StaticValue::$variant(truncated as $ty))
		} else {
			Err(Mismatch::OutOfRange { kind: $kind, value: $number })
		}
	}};
}

fn number_to_static(number: f64, kind: PrimKind) -> Result<StaticValue, Mismatch> {
	match kind {
		PrimKind::I8 => int_from_number!(number, kind, i8, I8),
		PrimKind::I16 => int_from_number!(number, kind, i16, I16),
		PrimKind::I32 => int_from_number!(number, kind, i32, I32),
		PrimKind::I64 => int_from_number!(number, kind, i64, I64),
		PrimKind::U8 => int_from_number!(number, kind, u8, U8),
		PrimKind::U16 => int_from_number!(number, kind, u16, U16),
		PrimKind::U32 => int_from_number!(number, kind, u32, U32),
		PrimKind::U64 => int_from_number!(number, kind, u64, U64),
		PrimKind::F32 => narrow_f32(number, kind).map(StaticValue::F32),
		PrimKind::F64 => Ok(StaticValue::F64(number)),
		PrimKind::Complex64 => narrow_f32(number, kind).map(|re| StaticValue::Complex64(Complex { re, im: 0.0 })),
		PrimKind::Complex128 => Ok(StaticValue::Complex128(Complex { re: number, im: 0.0 })),
		PrimKind::Bool | PrimKind::String => Err(Mismatch::kind(kind, "Number")),
	}
}

fn narrow_f32(number: f64, kind: PrimKind) -> Result<f32, Mismatch> {
	if number.is_finite() && number.abs() > f64::from(f32::MAX) {
		return Err(Mismatch::OutOfRange { kind, value: number });
	}
	Ok(number as f32)
}
