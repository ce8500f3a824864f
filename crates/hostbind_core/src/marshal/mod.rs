mod args;
mod desc;
mod error;
mod inbound;
mod json;
mod outbound;
mod path;
pub mod prim;
mod static_value;
pub mod typed;
mod value;

/// Argument rules and the pre-conversion contract check.
pub use args::{ArgRule, KindSet, Signature, validate_args};
/// Static type descriptors.
pub use desc::{FieldDesc, PrimKind, StructBuilder, StructDesc, TypeDesc};
/// Error and result aliases.
pub use error::{ErrorKind, MarshalError, Mismatch, Result};
/// Dynamic to static conversion entry points and options.
pub use inbound::{MarshalOptions, convert_in, convert_in_with};
/// Static to dynamic conversion entry points.
pub use outbound::{convert_out, convert_out_with};
/// Field path types used to locate conversion failures.
pub use path::{FieldPath, PathStep};
/// Strongly typed value tree.
pub use static_value::{Complex, StaticValue, StructValue};
/// Compile-time descriptor bridge.
pub use typed::{Blob, Marshal, from_dynamic, from_dynamic_with, to_dynamic};
/// Host-facing dynamic value types.
pub use value::{Object, ObjectEntry, Value, ValueKind};
