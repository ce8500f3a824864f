use std::sync::Arc;

use proptest::prelude::*;
use serde_json::json;

use super::{Blob, Marshal, MarshalStruct, from_dynamic, from_dynamic_at, to_dynamic};
use crate::marshal::{Complex, FieldPath, MarshalOptions, Mismatch, PrimKind, StaticValue, TypeDesc, Value};

crate::marshal_struct! {
	#[derive(Debug, Clone, PartialEq, Default)]
	struct Coordinates {
		pub col: u32,
		pub row: u32,
	}
}

crate::marshal_struct! {
	#[derive(Debug, Clone, PartialEq, Default)]
	struct Font {
		pub bold: Option<bool>,
		pub family: Option<String>,
		pub size: Option<f64>,
		cache: String,
	}
}

crate::marshal_struct! {
	#[derive(Debug, Clone, PartialEq, Default)]
	struct Row {
		pub cells: Vec<Option<String>>,
	}
}

crate::marshal_struct! {
	#[derive(Debug, Clone, PartialEq, Default)]
	struct Sheet {
		pub name: String,
		pub rows: Vec<Row>,
	}
}

crate::marshal_struct! {
	#[derive(Debug, Clone, PartialEq)]
	struct Record {
		pub flag: bool,
		pub small: i16,
		pub wide: i64,
		pub count: u64,
		pub ratio: f64,
		pub narrow: f32,
		pub phase: Complex<f64>,
		pub name: String,
		pub tags: Vec<Option<String>>,
		pub blob: Blob,
		pub origin: Option<Coordinates>,
	}
}

#[test]
fn struct_descriptor_lists_fields_in_declaration_order() {
	let desc = Font::struct_desc();
	assert_eq!(desc.name(), "Font");
	let names: Vec<(&str, bool)> = desc.fields().iter().map(|field| (&*field.name, field.exported)).collect();
	assert_eq!(names, [("bold", true), ("family", true), ("size", true), ("cache", false)]);
	assert_eq!(Font::describe().to_string(), "Font");
	assert_eq!(Vec::<Option<Font>>::describe().to_string(), "[*Font]");
}

#[test]
fn struct_descriptor_is_built_once() {
	assert!(Arc::ptr_eq(&Coordinates::struct_desc(), &Coordinates::struct_desc()));
}

#[test]
fn hidden_fields_are_skipped_both_ways() {
	let font: Font = from_dynamic(&Value::from(json!({"bold": true, "size": 11, "cache": "ignored"}))).expect("converts");
	assert_eq!(
		font,
		Font {
			bold: Some(true),
			family: None,
			size: Some(11.0),
			cache: String::new(),
		}
	);

	let rendered = to_dynamic(&Font {
		cache: "kept private".into(),
		..font
	})
	.expect("renders");
	assert_eq!(rendered, Value::from(json!({"bold": true, "family": null, "size": 11})));
}

#[test]
fn nested_failure_reports_full_path() {
	let input = Value::from(json!({"name": "Sheet1", "rows": [{"cells": ["A1", 2]}]}));
	let err = from_dynamic::<Sheet>(&input).expect_err("number in string cell");
	assert_eq!(err.path(), Some(&FieldPath::parse("rows[0].cells[1]*").expect("path")));
	assert_eq!(err.mismatch(), Some(&Mismatch::kind("string", "Number")));
}

#[test]
fn argument_base_prefixes_failure_path() {
	let err = from_dynamic_at::<Coordinates>(FieldPath::arg(2), &Value::from(json!({"col": "A"})), &MarshalOptions::default())
		.expect_err("string column");
	assert_eq!(err.to_string(), "invalid argument type: $2.col: expected u32, got String");
}

#[test]
fn mismatched_static_values_are_rejected() {
	let err = bool::from_static(StaticValue::I32(1)).expect_err("i32 is not bool");
	assert_eq!(err.mismatch(), Some(&Mismatch::kind(PrimKind::Bool, "i32")));

	let err = Vec::<u8>::from_static(StaticValue::Slice(vec![StaticValue::U8(1), StaticValue::U16(2)])).expect_err("u16 element");
	assert_eq!(err.path(), Some(&FieldPath::parse("[1]").expect("path")));

	let err = Coordinates::from_static(StaticValue::zero(&Font::describe())).expect_err("font is not coordinates");
	assert_eq!(err.mismatch(), Some(&Mismatch::kind("Coordinates", "Font")));
}

#[test]
fn unit_renders_as_empty_object() {
	assert_eq!(to_dynamic(&()).expect("renders"), Value::Object(Default::default()));
	from_dynamic::<()>(&Value::from(json!({"anything": 1}))).expect("extra keys ignored");
}

#[test]
fn blobs_carry_bytes() {
	assert_eq!(Blob::describe(), TypeDesc::Bytes);
	let blob: Blob = from_dynamic(&Value::Bytes(vec![0, 7, 255])).expect("bytes");
	assert_eq!(blob, Blob(vec![0, 7, 255]));
	assert_eq!(to_dynamic(&blob).expect("renders"), Value::Bytes(vec![0, 7, 255]));
}

crate::marshal_struct! {
	#[derive(Debug, Clone, PartialEq)]
	struct Extremes {
		pub low: i64,
		pub high: i64,
		pub count: u64,
	}
}

#[test]
fn wide_integer_limits_survive_host_round_trip() {
	let extremes = Extremes {
		low: i64::MIN,
		high: i64::MAX,
		count: u64::MAX,
	};
	let rendered = to_dynamic(&extremes).expect("renders");
	let back: Extremes = from_dynamic(&rendered).expect("converts back");
	assert_eq!(back, extremes);
}

const EXACT: i64 = 1 << 53;

fn arb_coordinates() -> impl Strategy<Value = Coordinates> {
	(1u32..=16_384, 1u32..=1_048_576).prop_map(|(col, row)| Coordinates { col, row })
}

fn arb_record() -> impl Strategy<Value = Record> {
	(
		(any::<bool>(), any::<i16>(), -EXACT..=EXACT, 0..=EXACT as u64),
		(-1e12f64..1e12, -1e6f32..1e6, -1e6f64..1e6),
		(
			".{0,12}",
			prop::collection::vec(prop::option::of("[a-z]{0,4}"), 0..6),
			prop::collection::vec(any::<u8>(), 0..16),
			prop::option::of(arb_coordinates()),
		),
	)
		.prop_map(|((flag, small, wide, count), (ratio, narrow, re), (name, tags, blob, origin))| Record {
			flag,
			small,
			wide,
			count,
			ratio,
			narrow,
			phase: Complex { re, im: 0.0 },
			name,
			tags,
			blob: Blob(blob),
			origin,
		})
}

proptest! {
	#[test]
	fn typed_values_survive_host_round_trip(record in arb_record()) {
		let rendered = to_dynamic(&record).unwrap();
		let back: Record = from_dynamic(&rendered).unwrap();
		prop_assert_eq!(back, record);
	}
}
