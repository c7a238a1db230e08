use std::path::PathBuf;

use crate::cmd::input::open;
use crate::cmd::util::{emit, layout, parse_path, render_path};
use crate::{CliError, Result};

#[derive(clap::Args)]
pub struct Args {
	/// Document to read, or `-` for stdin.
	pub file: PathBuf,
	/// Field path such as `friends[-1].first`; `.` is the root.
	pub path: String,
	/// Print string values without JSON quoting.
	#[arg(long)]
	pub raw: bool,
	/// Indent output by two spaces.
	#[arg(long)]
	pub pretty: bool,
}

/// Print the node found at a field path.
pub fn run(args: Args) -> Result<()> {
	let Args { file, path, raw, pretty } = args;

	let input = open(&file)?;
	let path = parse_path(&path)?;
	let node = input.root.at(&path);
	if !node.is_valid() {
		return Err(CliError::PathNotFound { path: render_path(&path) });
	}

	if raw && let Some(text) = node.as_str() {
		return emit(text.as_bytes(), None);
	}

	emit(&node.encode_with(&layout(pretty))?, None)
}
