use crate::marshal::{MarshalError, PrimKind, StructDesc, TypeDesc};

#[test]
fn builder_keeps_declaration_order() {
	let desc = StructDesc::builder("Cell")
		.field("row", TypeDesc::Primitive(PrimKind::U32))
		.hidden("cache", TypeDesc::string())
		.field("col", TypeDesc::Primitive(PrimKind::U32))
		.build()
		.expect("unique fields");

	let names: Vec<&str> = desc.fields().iter().map(|field| &*field.name).collect();
	assert_eq!(names, ["row", "cache", "col"]);

	let exported: Vec<(usize, &str)> = desc.exported_fields().map(|(idx, field)| (idx, &*field.name)).collect();
	assert_eq!(exported, [(0, "row"), (2, "col")]);
	assert!(desc.exported_field("cache").is_none());
}

#[test]
fn duplicate_field_names_are_rejected() {
	let err = StructDesc::builder("Font")
		.field("bold", TypeDesc::bool())
		.hidden("bold", TypeDesc::bool())
		.build()
		.expect_err("duplicate must fail");

	assert_eq!(
		err,
		MarshalError::DuplicateField {
			struct_name: "Font".into(),
			field: "bold".into(),
		}
	);
}

#[test]
fn display_renders_nested_shapes() {
	let empty = StructDesc::builder("Empty").build_type().expect("empty struct");
	let ty = TypeDesc::slice(TypeDesc::pointer(TypeDesc::string()));
	assert_eq!(ty.to_string(), "[*string]");
	assert_eq!(TypeDesc::slice(TypeDesc::pointer(empty)).to_string(), "[*Empty]");
	assert_eq!(TypeDesc::Bytes.to_string(), "bytes");
}

#[test]
fn kind_classification() {
	assert!(PrimKind::Complex64.is_numeric());
	assert!(PrimKind::U64.is_numeric());
	assert!(!PrimKind::Bool.is_numeric());
	assert!(!PrimKind::String.is_numeric());
}
