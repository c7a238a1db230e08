#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod error;

pub(crate) use error::{CliError, Result};

#[derive(Parser)]
#[command(name = "dynjson", about = "Dynamic JSON document inspection and editing")]
struct Cli {
	/// Log library decisions (decode failures, coercion fallbacks) to stderr.
	#[arg(long, short, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print the node at a field path.
	Get(cmd::get::Args),
	/// Assign a value at a field path.
	Set(cmd::set::Args),
	/// Append a value to the array at a field path.
	Append(cmd::set::Args),
	/// Re-encode a document with the requested layout.
	Fmt(cmd::fmt::Args),
	/// Print root kind, size, and input compression.
	Info(cmd::info::Args),
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run(command: Commands) -> Result<()> {
	match command {
		Commands::Get(args) => cmd::get::run(args),
		Commands::Set(args) => cmd::set::run(args, cmd::set::Mode::Assign),
		Commands::Append(args) => cmd::set::run(args, cmd::set::Mode::Append),
		Commands::Fmt(args) => cmd::fmt::run(args),
		Commands::Info(args) => cmd::info::run(args),
	}
}

fn init_tracing(verbose: bool) {
	let fallback = if verbose { "debug" } else { "warn" };
	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.try_init();
}
