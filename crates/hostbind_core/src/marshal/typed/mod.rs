//! Bridge between Rust types and the runtime descriptor model.
//!
//! [`Marshal`] ties a Rust type to its [`TypeDesc`] and to the
//! [`StaticValue`] tree the converters produce. Struct types opt in through
//! [`marshal_struct!`](crate::marshal_struct), which caches one shared
//! descriptor per type.

use std::sync::{Arc, OnceLock};

use crate::marshal::inbound::convert_in_at;
use crate::marshal::{
	Complex, FieldPath, MarshalError, MarshalOptions, Mismatch, PathStep, PrimKind, Result, StaticValue, StructDesc, StructValue, TypeDesc,
	Value, convert_out,
};

#[cfg(test)]
mod tests;

/// Rust type with a static descriptor.
pub trait Marshal: Sized {
	/// Layout of this type.
	fn describe() -> TypeDesc;

	/// Lower `self` into a value tree shaped by [`Marshal::describe`].
	fn to_static(&self) -> StaticValue;

	/// Rebuild from a value tree shaped by [`Marshal::describe`].
	fn from_static(value: StaticValue) -> Result<Self>;
}

/// Struct type whose descriptor is built once and shared.
pub trait MarshalStruct: Marshal {
	/// Shared struct descriptor.
	fn struct_desc() -> Arc<StructDesc>;
}

/// Opaque byte buffer, marshaled as [`TypeDesc::Bytes`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Blob(pub Vec<u8>);

/// Convert a host value into `T` with default options.
pub fn from_dynamic<T: Marshal>(value: &Value) -> Result<T> {
	from_dynamic_with(value, &MarshalOptions::default())
}

/// Convert a host value into `T`.
pub fn from_dynamic_with<T: Marshal>(value: &Value, opt: &MarshalOptions) -> Result<T> {
	from_dynamic_at(FieldPath::root(), value, opt)
}

pub(crate) fn from_dynamic_at<T: Marshal>(base: FieldPath, value: &Value, opt: &MarshalOptions) -> Result<T> {
	let converted = convert_in_at(base.clone(), value, &T::describe(), opt)?;
	T::from_static(converted).map_err(|err| prefix(base, err))
}

/// Render `value` as a host value.
pub fn to_dynamic<T: Marshal>(value: &T) -> Result<Value> {
	convert_out(&value.to_static(), &T::describe())
}

fn prefix(base: FieldPath, err: MarshalError) -> MarshalError {
	base.steps.into_iter().rev().fold(err, |err, step| err.within(step))
}

fn unexpected(expected: impl ToString, got: &StaticValue) -> MarshalError {
	MarshalError::at(FieldPath::root(), Mismatch::kind(expected, got.shape_name()))
}

macro_rules! marshal_prim {
	($($ty:ty => $kind:ident),* $(,)?) => {
		$(
			impl Marshal for $ty {
				fn describe() -> TypeDesc {
					TypeDesc::Primitive(PrimKind::$kind)
				}

				fn to_static(&self) -> StaticValue {
					StaticValue::$kind(*self)
				}

				fn from_static(value: StaticValue) -> Result<Self> {
					match value {
						StaticValue::$kind(inner) => Ok(inner),
						other => Err(unexpected(PrimKind::$kind, &other)),
					}
				}
			}
		)*
	};
}

marshal_prim! {
	bool => Bool,
	i8 => I8,
	i16 => I16,
	i32 => I32,
	i64 => I64,
	u8 => U8,
	u16 => U16,
	u32 => U32,
	u64 => U64,
	f32 => F32,
	f64 => F64,
	Complex<f32> => Complex64,
	Complex<f64> => Complex128,
}

impl Marshal for String {
	fn describe() -> TypeDesc {
		TypeDesc::string()
	}

	fn to_static(&self) -> StaticValue {
		StaticValue::String(self.clone())
	}

	fn from_static(value: StaticValue) -> Result<Self> {
		match value {
			StaticValue::String(text) => Ok(text),
			other => Err(unexpected(PrimKind::String, &other)),
		}
	}
}

impl Marshal for Blob {
	fn describe() -> TypeDesc {
		TypeDesc::Bytes
	}

	fn to_static(&self) -> StaticValue {
		StaticValue::Bytes(self.0.clone())
	}

	fn from_static(value: StaticValue) -> Result<Self> {
		match value {
			StaticValue::Bytes(bytes) => Ok(Blob(bytes)),
			other => Err(unexpected("bytes", &other)),
		}
	}
}

impl<T: Marshal> Marshal for Vec<T> {
	fn describe() -> TypeDesc {
		TypeDesc::slice(T::describe())
	}

	fn to_static(&self) -> StaticValue {
		StaticValue::Slice(self.iter().map(T::to_static).collect())
	}

	fn from_static(value: StaticValue) -> Result<Self> {
		match value {
			StaticValue::Slice(items) => items
				.into_iter()
				.enumerate()
				.map(|(idx, item)| T::from_static(item).map_err(|err| err.within(PathStep::Index(idx))))
				.collect(),
			other => Err(unexpected(Self::describe(), &other)),
		}
	}
}

impl<T: Marshal> Marshal for Option<T> {
	fn describe() -> TypeDesc {
		TypeDesc::pointer(T::describe())
	}

	fn to_static(&self) -> StaticValue {
		StaticValue::Pointer(self.as_ref().map(|inner| Box::new(inner.to_static())))
	}

	fn from_static(value: StaticValue) -> Result<Self> {
		match value {
			StaticValue::Pointer(None) => Ok(None),
			StaticValue::Pointer(Some(inner)) => T::from_static(*inner).map(Some).map_err(|err| err.within(PathStep::Deref)),
			other => Err(unexpected(Self::describe(), &other)),
		}
	}
}

/// Operations with nothing to report render as an empty object.
impl Marshal for () {
	fn describe() -> TypeDesc {
		TypeDesc::Struct(<() as MarshalStruct>::struct_desc())
	}

	fn to_static(&self) -> StaticValue {
		StaticValue::Struct(StructValue::new(<() as MarshalStruct>::struct_desc(), Vec::new()))
	}

	fn from_static(value: StaticValue) -> Result<Self> {
		let desc = <() as MarshalStruct>::struct_desc();
		struct_fields(value, &desc).map(drop)
	}
}

impl MarshalStruct for () {
	fn struct_desc() -> Arc<StructDesc> {
		static DESC: OnceLock<Arc<StructDesc>> = OnceLock::new();
		DESC.get_or_init(|| StructDesc::from_unique_fields("unit", Vec::new())).clone()
	}
}

/// Unpack a struct value laid out as `desc`. Used by [`marshal_struct!`](crate::marshal_struct).
#[doc(hidden)]
pub fn struct_fields(value: StaticValue, desc: &Arc<StructDesc>) -> Result<std::vec::IntoIter<StaticValue>> {
	match value {
		StaticValue::Struct(item) if Arc::ptr_eq(&item.desc, desc) || item.desc == *desc => Ok(item.fields.into_iter()),
		other => Err(unexpected(desc.name(), &other)),
	}
}

/// Take the next positional field. Used by [`marshal_struct!`](crate::marshal_struct).
#[doc(hidden)]
pub fn next_field<T: Marshal>(fields: &mut std::vec::IntoIter<StaticValue>, desc: &StructDesc, name: &str) -> Result<T> {
	let value = fields.next().ok_or_else(|| {
		MarshalError::at(
			FieldPath::root(),
			Mismatch::MissingField {
				struct_name: desc.name().to_owned(),
				field: name.to_owned(),
			},
		)
	})?;
	T::from_static(value).map_err(|err| err.within(PathStep::Field(name.to_owned())))
}

/// Declare a struct and derive its [`Marshal`](crate::marshal::Marshal) impl.
///
/// Fields with a visibility qualifier are exported; private fields are
/// hidden from the converters and take their zero value on the way in.
///
/// ```
/// hostbind::marshal_struct! {
/// 	/// Cell coordinates.
/// 	#[derive(Debug, PartialEq)]
/// 	pub struct Coordinates {
/// 		pub col: u32,
/// 		pub row: u32,
/// 	}
/// }
///
/// let value = hostbind::marshal::to_dynamic(&Coordinates { col: 2, row: 7 }).unwrap();
/// let back: Coordinates = hostbind::marshal::from_dynamic(&value).unwrap();
/// assert_eq!(back, Coordinates { col: 2, row: 7 });
/// ```
#[macro_export]
macro_rules! marshal_struct {
	(
		$(#[$meta:meta])*
		$vis:vis struct $name:ident {
			$(
				$(#[$field_meta:meta])*
				$field_vis:vis $field:ident : $field_ty:ty
			),* $(,)?
		}
	) => {
		$(#[$meta])*
		$vis struct $name {
			$(
				$(#[$field_meta])*
				$field_vis $field: $field_ty,
			)*
		}

		impl $crate::marshal::typed::MarshalStruct for $name {
			fn struct_desc() -> ::std::sync::Arc<$crate::marshal::StructDesc> {
				static DESC: ::std::sync::OnceLock<::std::sync::Arc<$crate::marshal::StructDesc>> = ::std::sync::OnceLock::new();
				DESC.get_or_init(|| {
					$crate::marshal::StructDesc::from_unique_fields(
						stringify!($name),
						::std::vec![$(
							$crate::marshal::FieldDesc {
								name: stringify!($field).into(),
								ty: <$field_ty as $crate::marshal::Marshal>::describe(),
								exported: !stringify!($field_vis).is_empty(),
							}
						),*],
					)
				})
				.clone()
			}
		}

		impl $crate::marshal::Marshal for $name {
			fn describe() -> $crate::marshal::TypeDesc {
				$crate::marshal::TypeDesc::Struct(<Self as $crate::marshal::typed::MarshalStruct>::struct_desc())
			}

			fn to_static(&self) -> $crate::marshal::StaticValue {
				$crate::marshal::StaticValue::Struct($crate::marshal::StructValue::new(
					<Self as $crate::marshal::typed::MarshalStruct>::struct_desc(),
					::std::vec![$($crate::marshal::Marshal::to_static(&self.$field)),*],
				))
			}

			fn from_static(value: $crate::marshal::StaticValue) -> $crate::marshal::Result<Self> {
				let desc = <Self as $crate::marshal::typed::MarshalStruct>::struct_desc();
				#[allow(unused_mut, unused_variables)]
				let mut fields = $crate::marshal::typed::struct_fields(value, &desc)?;
				Ok(Self {
					$($field: $crate::marshal::typed::next_field(&mut fields, &desc, stringify!($field))?,)*
				})
			}
		}
	};
}
