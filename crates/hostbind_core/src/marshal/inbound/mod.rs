use std::sync::Arc;

use crate::marshal::{FieldPath, MarshalError, Mismatch, PathStep, Result, StaticValue, StructDesc, StructValue, TypeDesc, Value, prim};


/// Runtime limits for marshaling untrusted host values.
#[derive(Debug, Clone)]
pub struct MarshalOptions {
	/// Maximum element count accepted for any single array.
	pub max_array_elems: usize,
	/// Maximum byte length accepted for any single binary buffer.
	pub max_bytes_len: usize,
}

impl Default for MarshalOptions {
	fn default() -> Self {
		Self {
			max_array_elems: 1_048_576,
			max_bytes_len: usize::MAX,
		}
	}
}

impl MarshalOptions {
	/// Preset with tight bounds for inspecting hand-written input.
	pub fn for_inspect() -> Self {
		Self {
			max_array_elems: 4096,
			max_bytes_len: 1 << 20,
		}
	}
}

/// Build a value of type `ty` from a host value, with default options.
pub fn convert_in(value: &Value, ty: &TypeDesc) -> Result<StaticValue> {
	convert_in_with(value, ty, &MarshalOptions::default())
}

/// Build a value of type `ty` from a host value.
pub fn convert_in_with(value: &Value, ty: &TypeDesc, opt: &MarshalOptions) -> Result<StaticValue> {
	convert_in_at(FieldPath::root(), value, ty, opt)
}

/// Build a value of type `ty`, reporting failures relative to `base`.
pub(crate) fn convert_in_at(base: FieldPath, value: &Value, ty: &TypeDesc, opt: &MarshalOptions) -> Result<StaticValue> {
	let mut inbound = Inbound { opt, path: base };
	inbound.convert(value, ty)
}

struct Inbound<'a> {
	opt: &'a MarshalOptions,
	path: FieldPath,
}

impl Inbound<'_> {
	fn convert(&mut self, value: &Value, ty: &TypeDesc) -> Result<StaticValue> {
		match ty {
			TypeDesc::Primitive(kind) => prim::to_static(value, *kind).map_err(|mismatch| self.fail(mismatch)),
			TypeDesc::Bytes => match value {
				Value::Bytes(bytes) if bytes.len() > self.opt.max_bytes_len => Err(self.fail(Mismatch::TooManyBytes {
					len: bytes.len(),
					max: self.opt.max_bytes_len,
				})),
				Value::Bytes(bytes) => Ok(StaticValue::Bytes(bytes.clone())),
				other => Err(self.fail(Mismatch::kind("BinaryBuffer", other.kind()))),
			},
			TypeDesc::Pointer(pointee) => {
				if value.is_null() {
					return Ok(StaticValue::Pointer(None));
				}
				self.path.push(PathStep::Deref);
				let inner = self.convert(value, pointee)?;
				self.path.pop();
				Ok(StaticValue::Pointer(Some(Box::new(inner))))
			}
			TypeDesc::Slice(elem) => self.convert_slice(value, elem),
			TypeDesc::Struct(desc) => self.convert_struct(value, desc),
		}
	}

	fn convert_slice(&mut self, value: &Value, elem: &TypeDesc) -> Result<StaticValue> {
		let Value::Array(items) = value else {
			return Err(self.fail(Mismatch::kind("Array", value.kind())));
		};
		if items.len() > self.opt.max_array_elems {
			return Err(self.fail(Mismatch::TooLong {
				count: items.len(),
				max: self.opt.max_array_elems,
			}));
		}

		let mut out = Vec::with_capacity(items.len());
		for (idx, item) in items.iter().enumerate() {
			self.path.push(PathStep::Index(idx));
			out.push(self.convert(item, elem)?);
			self.path.pop();
		}
		Ok(StaticValue::Slice(out))
	}

	fn convert_struct(&mut self, value: &Value, desc: &Arc<StructDesc>) -> Result<StaticValue> {
		let Value::Object(object) = value else {
			return Err(self.fail(Mismatch::kind("Object", value.kind())));
		};

		let mut fields = Vec::with_capacity(desc.fields().len());
		for field in desc.fields() {
			let supplied = if field.exported { object.get(&field.name) } else { None };
			let Some(supplied) = supplied else {
				fields.push(StaticValue::zero(&field.ty));
				continue;
			};

			self.path.push(PathStep::Field(field.name.to_string()));
			fields.push(self.convert(supplied, &field.ty)?);
			self.path.pop();
		}

		Ok(StaticValue::Struct(StructValue::new(desc.clone(), fields)))
	}

	fn fail(&self, mismatch: Mismatch) -> MarshalError {
		MarshalError::at(self.path.clone(), mismatch)
	}
}
