//! Bridge between JSON documents and host values.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::marshal::{Object, Value};

impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Value::Null,
			serde_json::Value::Bool(flag) => Value::Bool(flag),
			serde_json::Value::Number(number) => number.as_f64().map_or(Value::Null, Value::Number),
			serde_json::Value::String(text) => Value::from(text),
			serde_json::Value::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
			serde_json::Value::Object(map) => Value::Object(map.into_iter().map(|(key, item)| (key, Value::from(item))).collect()),
		}
	}
}

impl Serialize for Value {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Value::Null => serializer.serialize_unit(),
			Value::Bool(flag) => serializer.serialize_bool(*flag),
			Value::Number(number) if number.is_finite() => serialize_number(*number, serializer),
			Value::Number(_) => serializer.serialize_unit(),
			Value::String(text) => serializer.serialize_str(text),
			Value::Array(items) => {
				let mut seq = serializer.serialize_seq(Some(items.len()))?;
				for item in items {
					seq.serialize_element(item)?;
				}
				seq.end()
			}
			Value::Object(object) => object.serialize(serializer),
			Value::Bytes(bytes) => {
				let mut seq = serializer.serialize_seq(Some(bytes.len()))?;
				for byte in bytes {
					seq.serialize_element(byte)?;
				}
				seq.end()
			}
		}
	}
}

impl Serialize for Object {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.len()))?;
		for entry in self {
			map.serialize_entry(&*entry.key, &entry.value)?;
		}
		map.end()
	}
}

// Integral numbers print without a trailing `.0`.
fn serialize_number<S: Serializer>(number: f64, serializer: S) -> Result<S::Ok, S::Error> {
	const EXACT: f64 = 9_007_199_254_740_992.0;
	if number.fract() == 0.0 && number.abs() <= EXACT {
		serializer.serialize_i64(number as i64)
	} else {
		serializer.serialize_f64(number)
	}
}
