use std::path::PathBuf;

use crate::Result;
use crate::cmd::input::open;

#[derive(clap::Args)]
pub struct Args {
	/// Document to summarize, or `-` for stdin.
	pub file: PathBuf,
}

/// Print root kind, member count, and detected compression.
pub fn run(args: Args) -> Result<()> {
	let Args { file } = args;

	let input = open(&file)?;
	let mut keys = input.root.keys();
	keys.truncate(12);

	println!("path: {}", file.display());
	println!("compression: {}", input.compression.as_str());
	println!("kind: {}", input.root.kind());
	println!("size: {}", input.root.size());
	if !keys.is_empty() {
		println!("keys: {}", keys.join(", "));
	}

	Ok(())
}
