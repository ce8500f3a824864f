use hostbind::marshal::TypeDesc;
use serde::Serialize;

use crate::catalog::shapes;
use crate::cmd::util::emit_json;
use crate::cmd::{CliError, Result};


#[derive(clap::Args)]
pub struct Args {
	/// Shape name, e.g. `font`.
	pub shape: String,
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum TypeJson {
	Primitive { name: String },
	Bytes,
	Struct { name: String, fields: Vec<FieldJson> },
	Slice { elem: Box<TypeJson> },
	Pointer { pointee: Box<TypeJson> },
}

#[derive(Serialize)]
struct FieldJson {
	name: String,
	exported: bool,
	#[serde(rename = "type")]
	ty: TypeJson,
}

/// Print the descriptor tree of a demo shape.
pub fn run(args: Args) -> Result<()> {
	let ty = shapes::shape(&args.shape).ok_or_else(|| CliError::UnknownShape {
		name: args.shape.clone(),
		known: shapes::shape_names(),
	})?;
	emit_json(&type_json(&ty))
}

fn type_json(ty: &TypeDesc) -> TypeJson {
	match ty {
		TypeDesc::Primitive(kind) => TypeJson::Primitive { name: kind.name().to_owned() },
		TypeDesc::Bytes => TypeJson::Bytes,
		TypeDesc::Struct(desc) => TypeJson::Struct {
			name: desc.name().to_owned(),
			fields: desc
				.fields()
				.iter()
				.map(|field| FieldJson {
					name: field.name.to_string(),
					exported: field.exported,
					ty: type_json(&field.ty),
				})
				.collect(),
		},
		TypeDesc::Slice(elem) => TypeJson::Slice {
			elem: Box::new(type_json(elem)),
		},
		TypeDesc::Pointer(pointee) => TypeJson::Pointer {
			pointee: Box::new(type_json(pointee)),
		},
	}
}
