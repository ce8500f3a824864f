use serde_json::json;

use super::convert_out;
use crate::marshal::{ErrorKind, FieldPath, Mismatch, PrimKind, StaticValue, StructDesc, StructValue, TypeDesc, Value, convert_in};

fn dynamic(json: serde_json::Value) -> Value {
	Value::from(json)
}

fn struct_of(name: &str, fields: &[(&str, TypeDesc)]) -> TypeDesc {
	fields
		.iter()
		.fold(StructDesc::builder(name), |builder, (field, ty)| builder.field(*field, ty.clone()))
		.build_type()
		.expect("test struct")
}

fn instance(ty: &TypeDesc, fields: Vec<StaticValue>) -> StaticValue {
	let desc = ty.as_struct().expect("struct type").clone();
	StaticValue::Struct(StructValue::new(desc, fields))
}

#[test]
fn pointer_to_bool_renders_value_or_null() {
	let ty = struct_of("Flags", &[("F1", TypeDesc::pointer(TypeDesc::bool()))]);

	let set = instance(&ty, vec![StaticValue::Pointer(Some(Box::new(StaticValue::Bool(true))))]);
	assert_eq!(convert_out(&set, &ty).expect("renders"), dynamic(json!({"F1": true})));

	let unset = instance(&ty, vec![StaticValue::Pointer(None)]);
	assert_eq!(convert_out(&unset, &ty).expect("renders"), dynamic(json!({"F1": null})));
}

#[test]
fn string_field_through_bool_layout_is_rejected() {
	let source = struct_of("Named", &[("F1", TypeDesc::string())]);
	let target = struct_of("Flagged", &[("F1", TypeDesc::bool())]);
	let value = instance(&source, vec![StaticValue::String("true".into())]);

	let err = convert_out(&value, &target).expect_err("string must not render as bool");
	assert_eq!(err.kind(), ErrorKind::ArgumentType);
	assert_eq!(err.path(), Some(&FieldPath::parse("F1").expect("path")));
	assert_eq!(err.mismatch(), Some(&Mismatch::kind("bool", "string")));
}

#[test]
fn cross_layout_rendering_matches_fields_by_name() {
	let source = struct_of("Wide", &[("row", TypeDesc::Primitive(PrimKind::U32)), ("col", TypeDesc::Primitive(PrimKind::U32))]);
	let target = struct_of("Narrow", &[("col", TypeDesc::Primitive(PrimKind::U32))]);
	let value = instance(&source, vec![StaticValue::U32(4), StaticValue::U32(9)]);

	assert_eq!(convert_out(&value, &target).expect("subset renders"), dynamic(json!({"col": 9})));

	let err = convert_out(&instance(&target, vec![StaticValue::U32(9)]), &source).expect_err("row is missing");
	assert_eq!(err.path(), Some(&FieldPath::parse("row").expect("path")));
	assert_eq!(
		err.mismatch(),
		Some(&Mismatch::MissingField {
			struct_name: "Narrow".into(),
			field: "row".into(),
		})
	);
}

#[test]
fn primitive_kinds_must_match_exactly() {
	let err = convert_out(&StaticValue::I32(1), &TypeDesc::Primitive(PrimKind::I64)).expect_err("i32 through i64");
	assert_eq!(err.to_string(), "invalid argument type: expected i64, got i32");

	let err = convert_out(&StaticValue::Slice(Vec::new()), &TypeDesc::string()).expect_err("slice through string");
	assert_eq!(err.mismatch(), Some(&Mismatch::kind("string", "slice")));
}

#[test]
fn shape_mismatches_are_type_errors() {
	let err = convert_out(&StaticValue::Bool(true), &TypeDesc::pointer(TypeDesc::bool())).expect_err("bare bool through pointer");
	assert_eq!(err.mismatch(), Some(&Mismatch::kind("*bool", "bool")));

	let err = convert_out(&StaticValue::Pointer(None), &TypeDesc::slice(TypeDesc::bool())).expect_err("pointer through slice");
	assert_eq!(err.mismatch(), Some(&Mismatch::kind("[bool]", "pointer")));
}

#[test]
fn fields_render_in_declaration_order_without_hidden_ones() {
	let ty = StructDesc::builder("Font")
		.field("size", TypeDesc::Primitive(PrimKind::F64))
		.hidden("cache", TypeDesc::string())
		.field("bold", TypeDesc::bool())
		.build_type()
		.expect("font struct");
	let value = instance(&ty, vec![StaticValue::F64(11.0), StaticValue::String("x".into()), StaticValue::Bool(false)]);

	let Value::Object(object) = convert_out(&value, &ty).expect("renders") else {
		panic!("expected object");
	};
	let keys: Vec<&str> = object.iter().map(|entry| &*entry.key).collect();
	assert_eq!(keys, ["size", "bold"]);
}

#[test]
fn nested_values_survive_a_round_trip() {
	let cell = struct_of(
		"Cell",
		&[
			("value", TypeDesc::pointer(TypeDesc::string())),
			("style", TypeDesc::Primitive(PrimKind::I32)),
		],
	);
	let ty = struct_of(
		"Sheet",
		&[
			("name", TypeDesc::string()),
			("rows", TypeDesc::slice(TypeDesc::slice(cell))),
			("visible", TypeDesc::pointer(TypeDesc::bool())),
			("picture", TypeDesc::Bytes),
		],
	);
	let input = dynamic(json!({
		"name": "Sheet1",
		"rows": [[{"value": "A1", "style": 2}, {"value": null, "style": 0}], []],
		"visible": null,
	}));

	let value = convert_in(&input, &ty).expect("converts in");
	let rendered = convert_out(&value, &ty).expect("renders out");
	assert_eq!(convert_in(&rendered, &ty).expect("converts again"), value);

	let mut expected = input;
	if let Value::Object(object) = &mut expected {
		object.insert("picture", Value::Bytes(Vec::new()));
	}
	assert_eq!(rendered, expected);
}

#[test]
fn nested_failure_path_covers_index_and_pointer_hops() {
	let ty = TypeDesc::slice(TypeDesc::pointer(TypeDesc::Primitive(PrimKind::U8)));
	let value = StaticValue::Slice(vec![
		StaticValue::Pointer(None),
		StaticValue::Pointer(Some(Box::new(StaticValue::U16(1)))),
	]);

	let err = convert_out(&value, &ty).expect_err("u16 through u8");
	assert_eq!(err.path(), Some(&FieldPath::parse("[1]*").expect("path")));
}
