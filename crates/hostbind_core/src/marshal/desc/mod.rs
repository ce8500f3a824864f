use std::fmt;
use std::sync::Arc;

use crate::marshal::{MarshalError, Result};

#[cfg(test)]
mod tests;

/// Primitive static kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimKind {
	/// `bool`.
	Bool,
	/// `i8`.
	I8,
	/// `i16`.
	I16,
	/// `i32`.
	I32,
	/// `i64`.
	I64,
	/// `u8`.
	U8,
	/// `u16`.
	U16,
	/// `u32`.
	U32,
	/// `u64`.
	U64,
	/// `f32`.
	F32,
	/// `f64`.
	F64,
	/// Complex number with `f32` parts.
	Complex64,
	/// Complex number with `f64` parts.
	Complex128,
	/// UTF-8 string.
	String,
}

impl PrimKind {
	/// Type name used in descriptors and error messages.
	pub fn name(self) -> &'static str {
		match self {
			PrimKind::Bool => "bool",
			PrimKind::I8 => "i8",
			PrimKind::I16 => "i16",
			PrimKind::I32 => "i32",
			PrimKind::I64 => "i64",
			PrimKind::U8 => "u8",
			PrimKind::U16 => "u16",
			PrimKind::U32 => "u32",
			PrimKind::U64 => "u64",
			PrimKind::F32 => "f32",
			PrimKind::F64 => "f64",
			PrimKind::Complex64 => "complex64",
			PrimKind::Complex128 => "complex128",
			PrimKind::String => "string",
		}
	}

	/// Whether the host represents this kind as a number.
	pub fn is_numeric(self) -> bool {
		!matches!(self, PrimKind::Bool | PrimKind::String)
	}
}

impl fmt::Display for PrimKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Shape of a static type, resolved on demand.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDesc {
	/// Scalar of a primitive kind.
	Primitive(PrimKind),
	/// Opaque byte buffer.
	Bytes,
	/// Struct with named fields.
	Struct(Arc<StructDesc>),
	/// Variable-length sequence.
	Slice(Box<TypeDesc>),
	/// Nullable indirection.
	Pointer(Box<TypeDesc>),
}

impl TypeDesc {
	/// Slice of `elem`.
	pub fn slice(elem: TypeDesc) -> Self {
		TypeDesc::Slice(Box::new(elem))
	}

	/// Pointer to `pointee`.
	pub fn pointer(pointee: TypeDesc) -> Self {
		TypeDesc::Pointer(Box::new(pointee))
	}

	/// `bool`.
	pub fn bool() -> Self {
		TypeDesc::Primitive(PrimKind::Bool)
	}

	/// `string`.
	pub fn string() -> Self {
		TypeDesc::Primitive(PrimKind::String)
	}

	/// Struct descriptor, if this is a struct.
	pub fn as_struct(&self) -> Option<&Arc<StructDesc>> {
		match self {
			TypeDesc::Struct(desc) => Some(desc),
			_ => None,
		}
	}
}

impl fmt::Display for TypeDesc {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			TypeDesc::Primitive(kind) => write!(f, "{kind}"),
			TypeDesc::Bytes => f.write_str("bytes"),
			TypeDesc::Struct(desc) => f.write_str(&desc.name),
			TypeDesc::Slice(elem) => write!(f, "[{elem}]"),
			TypeDesc::Pointer(pointee) => write!(f, "*{pointee}"),
		}
	}
}

/// One struct field declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDesc {
	/// Field name; also the host object key.
	pub name: Box<str>,
	/// Field type.
	pub ty: TypeDesc,
	/// Whether the field is visible to the converters.
	pub exported: bool,
}

/// Struct declaration: name plus fields in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct StructDesc {
	name: Box<str>,
	fields: Vec<FieldDesc>,
}

impl StructDesc {
	/// Validate field-name uniqueness and build a shared descriptor.
	pub fn try_new(name: impl Into<Box<str>>, fields: Vec<FieldDesc>) -> Result<Arc<Self>> {
		let name = name.into();
		for (idx, field) in fields.iter().enumerate() {
			if fields[..idx].iter().any(|prior| prior.name == field.name) {
				return Err(MarshalError::DuplicateField {
					struct_name: name.into_string(),
					field: field.name.to_string(),
				});
			}
		}
		Ok(Arc::new(Self { name, fields }))
	}

	/// Build from fields whose names are unique by construction, such as the
	/// fields of a Rust struct definition.
	pub fn from_unique_fields(name: impl Into<Box<str>>, fields: Vec<FieldDesc>) -> Arc<Self> {
		debug_assert!(
			fields.iter().enumerate().all(|(idx, field)| fields[..idx].iter().all(|prior| prior.name != field.name)),
			"struct fields must be unique"
		);
		Arc::new(Self { name: name.into(), fields })
	}

	/// Start a builder.
	pub fn builder(name: impl Into<Box<str>>) -> StructBuilder {
		StructBuilder {
			name: name.into(),
			fields: Vec::new(),
		}
	}

	/// Struct type name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// All fields in declaration order.
	pub fn fields(&self) -> &[FieldDesc] {
		&self.fields
	}

	/// Exported fields in declaration order, with their positional index.
	pub fn exported_fields(&self) -> impl Iterator<Item = (usize, &FieldDesc)> {
		self.fields.iter().enumerate().filter(|(_, field)| field.exported)
	}

	/// Look up an exported field by name.
	pub fn exported_field(&self, name: &str) -> Option<(usize, &FieldDesc)> {
		self.exported_fields().find(|(_, field)| &*field.name == name)
	}
}

/// Incremental [`StructDesc`] construction.
#[derive(Debug, Clone)]
pub struct StructBuilder {
	name: Box<str>,
	fields: Vec<FieldDesc>,
}

impl StructBuilder {
	/// Append an exported field.
	pub fn field(mut self, name: impl Into<Box<str>>, ty: TypeDesc) -> Self {
		self.fields.push(FieldDesc {
			name: name.into(),
			ty,
			exported: true,
		});
		self
	}

	/// Append an unexported field.
	pub fn hidden(mut self, name: impl Into<Box<str>>, ty: TypeDesc) -> Self {
		self.fields.push(FieldDesc {
			name: name.into(),
			ty,
			exported: false,
		});
		self
	}

	/// Finish, rejecting duplicate field names.
	pub fn build(self) -> Result<Arc<StructDesc>> {
		StructDesc::try_new(self.name, self.fields)
	}

	/// Finish and wrap as a [`TypeDesc`].
	pub fn build_type(self) -> Result<TypeDesc> {
		self.build().map(TypeDesc::Struct)
	}
}
