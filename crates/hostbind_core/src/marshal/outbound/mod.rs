use std::sync::Arc;

use crate::marshal::{
	FieldPath, MarshalError, Mismatch, Object, PathStep, PrimKind, Result, StaticValue, StructDesc, StructValue, TypeDesc, Value, prim,
};

#[cfg(test)]
mod tests;

/// Render a static value through the layout of `ty`.
pub fn convert_out(value: &StaticValue, ty: &TypeDesc) -> Result<Value> {
	convert_out_with(FieldPath::root(), value, ty)
}

/// Render a static value, reporting failures relative to `base`.
pub fn convert_out_with(base: FieldPath, value: &StaticValue, ty: &TypeDesc) -> Result<Value> {
	let mut outbound = Outbound { path: base };
	outbound.convert(value, ty)
}

struct Outbound {
	path: FieldPath,
}

impl Outbound {
	fn convert(&mut self, value: &StaticValue, ty: &TypeDesc) -> Result<Value> {
		match (ty, value) {
			(TypeDesc::Primitive(kind), value) => self.convert_prim(value, *kind),
			(TypeDesc::Bytes, StaticValue::Bytes(bytes)) => Ok(Value::Bytes(bytes.clone())),
			(TypeDesc::Pointer(_), StaticValue::Pointer(None)) => Ok(Value::Null),
			(TypeDesc::Pointer(pointee), StaticValue::Pointer(Some(inner))) => {
				self.path.push(PathStep::Deref);
				let out = self.convert(inner, pointee)?;
				self.path.pop();
				Ok(out)
			}
			(TypeDesc::Slice(elem), StaticValue::Slice(items)) => {
				let mut out = Vec::with_capacity(items.len());
				for (idx, item) in items.iter().enumerate() {
					self.path.push(PathStep::Index(idx));
					out.push(self.convert(item, elem)?);
					self.path.pop();
				}
				Ok(Value::Array(out))
			}
			(TypeDesc::Struct(desc), StaticValue::Struct(item)) => self.convert_struct(item, desc),
			(ty, value) => Err(self.fail(Mismatch::kind(ty, value.shape_name()))),
		}
	}

	fn convert_prim(&mut self, value: &StaticValue, kind: PrimKind) -> Result<Value> {
		if value.prim_kind() != Some(kind) {
			return Err(self.fail(Mismatch::kind(kind, value.shape_name())));
		}
		prim::to_dynamic(value).ok_or_else(|| self.fail(Mismatch::kind(kind, value.shape_name())))
	}

	fn convert_struct(&mut self, item: &StructValue, desc: &Arc<StructDesc>) -> Result<Value> {
		let same_layout = Arc::ptr_eq(&item.desc, desc) || item.desc == *desc;
		let mut object = Object::with_capacity(desc.fields().len());

		for (idx, field) in desc.exported_fields() {
			self.path.push(PathStep::Field(field.name.to_string()));
			let source = if same_layout {
				item.fields.get(idx)
			} else {
				item.desc.exported_field(&field.name).and_then(|(source_idx, _)| item.fields.get(source_idx))
			};
			let Some(source) = source else {
				return Err(self.fail(Mismatch::MissingField {
					struct_name: item.desc.name().to_owned(),
					field: field.name.to_string(),
				}));
			};

			let rendered = self.convert(source, &field.ty)?;
			self.path.pop();
			object.insert(field.name.clone(), rendered);
		}

		Ok(Value::Object(object))
	}

	fn fail(&self, mismatch: Mismatch) -> MarshalError {
		MarshalError::at(self.path.clone(), mismatch)
	}
}
