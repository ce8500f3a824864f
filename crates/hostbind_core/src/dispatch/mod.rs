//! Named operations callable from the host.
//!
//! A [`Registry`] maps operation names to a [`Signature`] and a typed handler.
//! Every call is validated against the signature before any argument is
//! converted, and the handler's result is rendered back through the result
//! type's descriptor.

use std::collections::BTreeMap;
use std::fmt;

use crate::marshal::typed::from_dynamic_at;
use crate::marshal::{
	ArgRule, FieldPath, Marshal, MarshalError, MarshalOptions, Object, Result, Signature, StaticValue, StructDesc, TypeDesc, Value,
	convert_out,
};


/// Key carrying the failure text in a host reply.
pub const ERROR_KEY: &str = "error";

/// Key wrapping a non-object result in a host reply.
pub const RESULT_KEY: &str = "result";

type Handler = Box<dyn Fn(&Call<'_>) -> Result<StaticValue> + Send + Sync>;

/// Arguments of one validated invocation.
#[derive(Debug, Clone, Copy)]
pub struct Call<'a> {
	name: &'a str,
	args: &'a [Value],
	opt: &'a MarshalOptions,
}

impl<'a> Call<'a> {
	/// Operation name.
	pub fn name(&self) -> &'a str {
		self.name
	}

	/// Raw host arguments.
	pub fn args(&self) -> &'a [Value] {
		self.args
	}

	/// Convert the argument at `position` into `T`.
	pub fn arg<T: Marshal>(&self, position: usize) -> Result<T> {
		match self.args.get(position) {
			Some(value) => from_dynamic_at(FieldPath::arg(position), value, self.opt),
			None => Err(MarshalError::ArgumentCount {
				min: position + 1,
				max: position + 1,
				got: self.args.len(),
			}),
		}
	}

	/// Convert the argument at `position`, or `None` when it was omitted.
	pub fn opt_arg<T: Marshal>(&self, position: usize) -> Result<Option<T>> {
		match self.args.get(position) {
			Some(value) => from_dynamic_at(FieldPath::arg(position), value, self.opt).map(Some),
			None => Ok(None),
		}
	}
}

/// Registered operation.
pub struct Operation {
	signature: Signature,
	result: TypeDesc,
	handler: Handler,
}

impl Operation {
	/// Argument contract.
	pub fn signature(&self) -> &Signature {
		&self.signature
	}

	/// Layout the result is rendered through.
	pub fn result(&self) -> &TypeDesc {
		&self.result
	}
}

impl fmt::Debug for Operation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Operation")
			.field("signature", &self.signature)
			.field("result", &self.result)
			.finish_non_exhaustive()
	}
}

/// Name-keyed operation table.
#[derive(Debug, Default)]
pub struct Registry {
	ops: BTreeMap<String, Operation>,
	opt: MarshalOptions,
}

impl Registry {
	/// Empty registry with default marshaling limits.
	pub fn new() -> Self {
		Self::default()
	}

	/// Empty registry with custom marshaling limits.
	pub fn with_options(opt: MarshalOptions) -> Self {
		Self { ops: BTreeMap::new(), opt }
	}

	/// Marshaling limits applied to every argument.
	pub fn options(&self) -> &MarshalOptions {
		&self.opt
	}

	/// Register `handler` under `name`.
	pub fn register<R, F>(&mut self, name: impl Into<String>, rules: Vec<ArgRule>, handler: F) -> Result<()>
	where
		R: Marshal,
		F: Fn(&Call<'_>) -> Result<R> + Send + Sync + 'static,
	{
		let name = name.into();
		if self.ops.contains_key(&name) {
			return Err(MarshalError::DuplicateOperation { name });
		}
		let signature = Signature::new(rules)?;
		let result = R::describe();
		if reply_object(&result).is_some_and(|desc| desc.exported_field(ERROR_KEY).is_some()) {
			return Err(MarshalError::ReservedField {
				operation: name,
				field: ERROR_KEY.to_owned(),
			});
		}
		let handler: Handler = Box::new(move |call| handler(call).map(|result| result.to_static()));
		self.ops.insert(
			name,
			Operation {
				signature,
				result,
				handler,
			},
		);
		Ok(())
	}

	/// Look up an operation.
	pub fn get(&self, name: &str) -> Option<&Operation> {
		self.ops.get(name)
	}

	/// Operations in name order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Operation)> {
		self.ops.iter().map(|(name, op)| (name.as_str(), op))
	}

	/// Number of registered operations.
	pub fn len(&self) -> usize {
		self.ops.len()
	}

	/// Whether nothing is registered.
	pub fn is_empty(&self) -> bool {
		self.ops.is_empty()
	}

	/// Validate, run, and render one call.
	pub fn invoke(&self, name: &str, args: &[Value]) -> Result<Value> {
		let op = self.ops.get(name).ok_or_else(|| MarshalError::UnknownOperation { name: name.to_owned() })?;
		log::debug!("invoke {name} with {} argument(s)", args.len());

		op.signature.validate(args)?;
		let call = Call { name, args, opt: &self.opt };
		let result = (op.handler)(&call)?;
		convert_out(&result, &op.result)
	}

	/// Run one call and wrap the outcome in the host reply envelope.
	///
	/// Successful object results gain an `error: null` entry; other results
	/// are wrapped under `result`. Failures render the zero result alongside
	/// the error text, so the host always sees the same keys.
	pub fn reply(&self, name: &str, args: &[Value]) -> Value {
		match self.invoke(name, args) {
			Ok(value) => envelope(value, Value::Null),
			Err(err) => {
				log::warn!("{name} failed: {err}");
				let zero = self
					.ops
					.get(name)
					.and_then(|op| convert_out(&StaticValue::zero(&op.result), &op.result).ok())
					.unwrap_or_else(|| Value::Object(Object::new()));
				envelope(zero, Value::from(err.to_string()))
			}
		}
	}
}

/// Struct whose fields become the reply's top-level keys.
fn reply_object(result: &TypeDesc) -> Option<&StructDesc> {
	match result {
		TypeDesc::Pointer(pointee) => reply_object(pointee),
		TypeDesc::Struct(desc) => Some(desc),
		_ => None,
	}
}

fn envelope(result: Value, error: Value) -> Value {
	let mut object = match result {
		Value::Object(object) => object,
		other => {
			let mut object = Object::with_capacity(2);
			object.insert(RESULT_KEY, other);
			object
		}
	};
	object.insert(ERROR_KEY, error);
	Value::Object(object)
}
