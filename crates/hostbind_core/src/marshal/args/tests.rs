use super::{ArgRule, KindSet, Signature, validate_args};
use crate::marshal::{ErrorKind, FieldPath, MarshalError, Mismatch, Value, ValueKind};

fn bool_then_optional_bool() -> [ArgRule; 2] {
	[ArgRule::required(KindSet::BOOLEAN), ArgRule::optional(KindSet::BOOLEAN)]
}

#[test]
fn missing_required_argument_is_a_count_error() {
	let err = validate_args(&[], &bool_then_optional_bool()).expect_err("zero args");
	assert_eq!(err, MarshalError::ArgumentCount { min: 1, max: 2, got: 0 });
	assert_eq!(err.to_string(), "wrong number of arguments");
}

#[test]
fn trailing_optional_argument_may_be_omitted() {
	validate_args(&[Value::Bool(true)], &bool_then_optional_bool()).expect("one arg");
	validate_args(&[Value::Bool(true), Value::Bool(false)], &bool_then_optional_bool()).expect("two args");
}

#[test]
fn wrong_kind_in_optional_slot_is_a_type_error() {
	let err = validate_args(&[Value::Bool(true), Value::from("true")], &bool_then_optional_bool()).expect_err("string in bool slot");
	assert_eq!(err.kind(), ErrorKind::ArgumentType);
	assert_eq!(err.path(), Some(&FieldPath::arg(1)));
	assert_eq!(err.mismatch(), Some(&Mismatch::kind("Boolean", "String")));
	assert_eq!(err.to_string(), "invalid argument type: $1: expected Boolean, got String");
}

#[test]
fn too_many_arguments_is_a_count_error() {
	let args = [Value::Bool(true), Value::Bool(true), Value::Bool(true)];
	let err = validate_args(&args, &bool_then_optional_bool()).expect_err("three args");
	assert_eq!(err.kind(), ErrorKind::ArgumentCount);
}

#[test]
fn first_mismatch_wins() {
	let rules = [ArgRule::required(KindSet::STRING), ArgRule::required(KindSet::NUMBER)];
	let err = validate_args(&[Value::Number(1.0), Value::from("x")], &rules).expect_err("both wrong");
	assert_eq!(err.path(), Some(&FieldPath::arg(0)));
}

#[test]
fn optional_rules_must_be_trailing() {
	let rules = vec![
		ArgRule::required(KindSet::STRING),
		ArgRule::optional(KindSet::NUMBER),
		ArgRule::required(KindSet::NUMBER),
	];
	assert_eq!(Signature::new(rules.clone()), Err(MarshalError::OptionalGap { position: 2 }));
	assert_eq!(validate_args(&[Value::from("a"), Value::Number(1.0)], &rules), Err(MarshalError::OptionalGap { position: 2 }));
}

#[test]
fn kind_sets_union_and_render() {
	let set = KindSet::STRING.union(KindSet::NUMBER);
	assert!(set.contains(ValueKind::Number));
	assert!(!set.contains(ValueKind::Null));
	assert_eq!(set.to_string(), "Number|String");
	assert_eq!(KindSet::EMPTY.to_string(), "nothing");
	assert!(ValueKind::ALL.iter().all(|kind| KindSet::ANY.contains(*kind)));
}

#[test]
fn signature_reports_bounds_and_renders() {
	let signature = Signature::new(vec![
		ArgRule::required(KindSet::NUMBER),
		ArgRule::required(KindSet::NUMBER),
		ArgRule::optional(KindSet::BOOLEAN),
	])
	.expect("valid signature");
	assert_eq!(signature.required(), 2);
	assert_eq!(signature.max(), 3);
	assert_eq!(signature.to_string(), "(Number, Number, [Boolean])");
}
