use std::sync::Arc;

use crate::marshal::{PrimKind, StructDesc, TypeDesc};

/// Complex number.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex<T> {
	/// Real part.
	pub re: T,
	/// Imaginary part.
	pub im: T,
}

/// Strongly typed value tree, shaped by a [`TypeDesc`].
#[derive(Debug, Clone, PartialEq)]
pub enum StaticValue {
	/// `bool`.
	Bool(bool),
	/// `i8`.
	I8(i8),
	/// `i16`.
	I16(i16),
	/// `i32`.
	I32(i32),
	/// `i64`.
	I64(i64),
	/// `u8`.
	U8(u8),
	/// `u16`.
	U16(u16),
	/// `u32`.
	U32(u32),
	/// `u64`.
	U64(u64),
	/// `f32`.
	F32(f32),
	/// `f64`.
	F64(f64),
	/// `complex64`.
	Complex64(Complex<f32>),
	/// `complex128`.
	Complex128(Complex<f64>),
	/// `string`.
	String(String),
	/// Byte buffer.
	Bytes(Vec<u8>),
	/// Struct instance.
	Struct(StructValue),
	/// Slice elements in order.
	Slice(Vec<StaticValue>),
	/// Nil (`None`) or a boxed pointee.
	Pointer(Option<Box<StaticValue>>),
}

/// Struct instance: its descriptor plus one value per declared field.
#[derive(Debug, Clone, PartialEq)]
pub struct StructValue {
	/// Struct layout.
	pub desc: Arc<StructDesc>,
	/// Field values, positionally aligned with `desc.fields()`.
	pub fields: Vec<StaticValue>,
}

impl StructValue {
	/// Pair a descriptor with positional field values.
	pub fn new(desc: Arc<StructDesc>, fields: Vec<StaticValue>) -> Self {
		debug_assert_eq!(desc.fields().len(), fields.len(), "field count must match descriptor");
		Self { desc, fields }
	}

	/// Field value by name, exported or not.
	pub fn get(&self, name: &str) -> Option<&StaticValue> {
		let idx = self.desc.fields().iter().position(|field| &*field.name == name)?;
		self.fields.get(idx)
	}
}

impl StaticValue {
	/// Zero value of `ty`: false, 0, empty, nil, or a struct of zero fields.
	pub fn zero(ty: &TypeDesc) -> Self {
		match ty {
			TypeDesc::Primitive(kind) => Self::zero_prim(*kind),
			TypeDesc::Bytes => StaticValue::Bytes(Vec::new()),
			TypeDesc::Struct(desc) => StaticValue::Struct(StructValue {
				desc: desc.clone(),
				fields: desc.fields().iter().map(|field| Self::zero(&field.ty)).collect(),
			}),
			TypeDesc::Slice(_) => StaticValue::Slice(Vec::new()),
			TypeDesc::Pointer(_) => StaticValue::Pointer(None),
		}
	}

	fn zero_prim(kind: PrimKind) -> Self {
		match kind {
			PrimKind::Bool => StaticValue::Bool(false),
			PrimKind::I8 => StaticValue::I8(0),
			PrimKind::I16 => StaticValue::I16(0),
			PrimKind::I32 => StaticValue::I32(0),
			PrimKind::I64 => StaticValue::I64(0),
			PrimKind::U8 => StaticValue::U8(0),
			PrimKind::U16 => StaticValue::U16(0),
			PrimKind::U32 => StaticValue::U32(0),
			PrimKind::U64 => StaticValue::U64(0),
			PrimKind::F32 => StaticValue::F32(0.0),
			PrimKind::F64 => StaticValue::F64(0.0),
			PrimKind::Complex64 => StaticValue::Complex64(Complex::default()),
			PrimKind::Complex128 => StaticValue::Complex128(Complex::default()),
			PrimKind::String => StaticValue::String(String::new()),
		}
	}

	/// Primitive kind, if this is a primitive.
	pub fn prim_kind(&self) -> Option<PrimKind> {
		Some(match self {
			StaticValue::Bool(_) => PrimKind::Bool,
			StaticValue::I8(_) => PrimKind::I8,
			StaticValue::I16(_) => PrimKind::I16,
			StaticValue::I32(_) => PrimKind::I32,
			StaticValue::I64(_) => PrimKind::I64,
			StaticValue::U8(_) => PrimKind::U8,
			StaticValue::U16(_) => PrimKind::U16,
			StaticValue::U32(_) => PrimKind::U32,
			StaticValue::U64(_) => PrimKind::U64,
			StaticValue::F32(_) => PrimKind::F32,
			StaticValue::F64(_) => PrimKind::F64,
			StaticValue::Complex64(_) => PrimKind::Complex64,
			StaticValue::Complex128(_) => PrimKind::Complex128,
			StaticValue::String(_) => PrimKind::String,
			StaticValue::Bytes(_) | StaticValue::Struct(_) | StaticValue::Slice(_) | StaticValue::Pointer(_) => return None,
		})
	}

	/// Short shape name for error messages.
	pub fn shape_name(&self) -> String {
		if let Some(kind) = self.prim_kind() {
			return kind.name().to_owned();
		}
		match self {
			StaticValue::Bytes(_) => "bytes".to_owned(),
			StaticValue::Struct(item) => item.desc.name().to_owned(),
			StaticValue::Slice(_) => "slice".to_owned(),
			_ => "pointer".to_owned(),
		}
	}
}
