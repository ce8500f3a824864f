use std::fmt;

/// Loosely typed value exchanged with the host.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
	/// Absent value; the dynamic counterpart of a nil pointer.
	#[default]
	Null,
	/// Boolean.
	Bool(bool),
	/// Number; the host has no integer/float distinction.
	Number(f64),
	/// Text.
	String(Box<str>),
	/// Ordered list.
	Array(Vec<Value>),
	/// String-keyed map.
	Object(Object),
	/// Opaque byte buffer (file contents, pictures).
	Bytes(Vec<u8>),
}

/// Variant tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
	/// [`Value::Null`].
	Null,
	/// [`Value::Bool`].
	Boolean,
	/// [`Value::Number`].
	Number,
	/// [`Value::String`].
	String,
	/// [`Value::Array`].
	Array,
	/// [`Value::Object`].
	Object,
	/// [`Value::Bytes`].
	BinaryBuffer,
}

impl ValueKind {
	/// Every kind, in declaration order.
	pub const ALL: [ValueKind; 7] = [
		ValueKind::Null,
		ValueKind::Boolean,
		ValueKind::Number,
		ValueKind::String,
		ValueKind::Array,
		ValueKind::Object,
		ValueKind::BinaryBuffer,
	];

	/// Display name.
	pub fn name(self) -> &'static str {
		match self {
			ValueKind::Null => "Null",
			ValueKind::Boolean => "Boolean",
			ValueKind::Number => "Number",
			ValueKind::String => "String",
			ValueKind::Array => "Array",
			ValueKind::Object => "Object",
			ValueKind::BinaryBuffer => "BinaryBuffer",
		}
	}
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl Value {
	/// Variant tag.
	pub fn kind(&self) -> ValueKind {
		match self {
			Value::Null => ValueKind::Null,
			Value::Bool(_) => ValueKind::Boolean,
			Value::Number(_) => ValueKind::Number,
			Value::String(_) => ValueKind::String,
			Value::Array(_) => ValueKind::Array,
			Value::Object(_) => ValueKind::Object,
			Value::Bytes(_) => ValueKind::BinaryBuffer,
		}
	}

	/// Whether this is [`Value::Null`].
	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	/// Borrow the object, if this is one.
	pub fn as_object(&self) -> Option<&Object> {
		match self {
			Value::Object(object) => Some(object),
			_ => None,
		}
	}

	/// Borrow the string, if this is one.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::String(text) => Some(text),
			_ => None,
		}
	}

	/// Look up an object key; `None` for non-objects.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.as_object().and_then(|object| object.get(key))
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::Number(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::String(value.into())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::String(value.into_boxed_str())
	}
}

impl From<Vec<Value>> for Value {
	fn from(value: Vec<Value>) -> Self {
		Value::Array(value)
	}
}

impl From<Object> for Value {
	fn from(value: Object) -> Self {
		Value::Object(value)
	}
}

/// One key/value pair of an [`Object`].
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectEntry {
	/// Key.
	pub key: Box<str>,
	/// Value.
	pub value: Value,
}

/// String-keyed map with unique keys.
///
/// Iteration follows insertion order so rendered output is reproducible;
/// equality ignores order.
#[derive(Debug, Clone, Default)]
pub struct Object {
	entries: Vec<ObjectEntry>,
}

impl Object {
	/// Empty object.
	pub fn new() -> Self {
		Self::default()
	}

	/// Empty object with room for `capacity` entries.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			entries: Vec::with_capacity(capacity),
		}
	}

	/// Insert or replace `key`, returning the previous value.
	pub fn insert(&mut self, key: impl Into<Box<str>>, value: Value) -> Option<Value> {
		let key = key.into();
		if let Some(entry) = self.entries.iter_mut().find(|entry| entry.key == key) {
			return Some(std::mem::replace(&mut entry.value, value));
		}
		self.entries.push(ObjectEntry { key, value });
		None
	}

	/// Look up `key`.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.entries.iter().find(|entry| &*entry.key == key).map(|entry| &entry.value)
	}

	/// Whether `key` is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.get(key).is_some()
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the object has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Entries in insertion order.
	pub fn iter(&self) -> std::slice::Iter<'_, ObjectEntry> {
		self.entries.iter()
	}
}

impl PartialEq for Object {
	fn eq(&self, other: &Self) -> bool {
		self.len() == other.len() && self.iter().all(|entry| other.get(&entry.key) == Some(&entry.value))
	}
}

impl<K: Into<Box<str>>> FromIterator<(K, Value)> for Object {
	fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
		let mut object = Object::new();
		for (key, value) in iter {
			object.insert(key, value);
		}
		object
	}
}

impl<'a> IntoIterator for &'a Object {
	type Item = &'a ObjectEntry;
	type IntoIter = std::slice::Iter<'a, ObjectEntry>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}
