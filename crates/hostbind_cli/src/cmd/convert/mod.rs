use hostbind::marshal::{MarshalOptions, convert_in_with, convert_out};

use crate::catalog::shapes;
use crate::cmd::util::{emit_json, parse_value};
use crate::cmd::{CliError, Result};


#[derive(clap::Args)]
pub struct Args {
	/// Shape name, e.g. `font`.
	pub shape: String,
	/// JSON document to convert.
	pub json: String,
	/// Maximum element count accepted for any array.
	#[arg(long)]
	pub max_array_elems: Option<usize>,
}

/// Convert a JSON document into a demo shape and render it back.
pub fn run(args: Args) -> Result<()> {
	let Args {
		shape,
		json,
		max_array_elems,
	} = args;

	let ty = shapes::shape(&shape).ok_or_else(|| CliError::UnknownShape {
		name: shape.clone(),
		known: shapes::shape_names(),
	})?;

	let mut opt = MarshalOptions::for_inspect();
	if let Some(max) = max_array_elems {
		opt.max_array_elems = max;
	}

	let input = parse_value(&json)?;
	let value = convert_in_with(&input, &ty, &opt)?;
	log::debug!("converted {shape} input into {}", value.shape_name());
	emit_json(&convert_out(&value, &ty)?)
}
