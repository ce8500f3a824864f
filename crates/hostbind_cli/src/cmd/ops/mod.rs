use serde::Serialize;

use crate::catalog;
use crate::cmd::Result;
use crate::cmd::util::emit_json;


#[derive(clap::Args)]
pub struct Args {
	#[arg(long)]
	pub json: bool,
}

#[derive(Serialize)]
struct OpJson {
	name: String,
	signature: String,
	required: usize,
	max: usize,
	result: String,
}

/// List registered operations with their argument contracts.
pub fn run(args: Args) -> Result<()> {
	let registry = catalog::registry()?;
	let ops: Vec<OpJson> = registry
		.iter()
		.map(|(name, op)| OpJson {
			name: name.to_owned(),
			signature: op.signature().to_string(),
			required: op.signature().required(),
			max: op.signature().max(),
			result: op.result().to_string(),
		})
		.collect();

	if args.json {
		return emit_json(&ops);
	}

	for op in &ops {
		println!("{}{} -> {}", op.name, op.signature, op.result);
	}
	Ok(())
}
