#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod catalog;
mod cmd;

#[derive(Parser)]
#[command(name = "hostbind", about = "Host value marshaling and dispatch tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// List registered operations and their signatures.
	Ops(cmd::ops::Args),
	/// Invoke an operation and print the host reply envelope.
	Call(cmd::call::Args),
	/// Print the descriptor of a demo shape.
	Describe(cmd::describe::Args),
	/// Convert JSON through a demo shape and print the normalised result.
	Convert(cmd::convert::Args),
}

fn main() {
	env_logger::init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> cmd::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Ops(args) => cmd::ops::run(args),
		Commands::Call(args) => cmd::call::run(args),
		Commands::Describe(args) => cmd::describe::run(args),
		Commands::Convert(args) => cmd::convert::run(args),
	}
}
