use std::path::PathBuf;

use dynjson::doc::EncodeOptions;

use crate::Result;
use crate::cmd::input::open;
use crate::cmd::util::emit;

#[derive(clap::Args)]
pub struct Args {
	/// Document to re-encode, or `-` for stdin.
	pub file: PathBuf,
	/// Indent unit repeated per nesting level.
	#[arg(long, default_value = "  ")]
	pub indent: String,
	/// Text placed before every line after the first.
	#[arg(long, default_value = "")]
	pub prefix: String,
	/// Emit a single compact line instead.
	#[arg(long, conflicts_with_all = ["indent", "prefix"])]
	pub compact: bool,
	/// Write output here instead of stdout.
	#[arg(long)]
	pub out: Option<PathBuf>,
}

/// Re-encode a document with the requested layout.
pub fn run(args: Args) -> Result<()> {
	let Args {
		file,
		indent,
		prefix,
		compact,
		out,
	} = args;

	let input = open(&file)?;
	let options = if compact { EncodeOptions::compact() } else { EncodeOptions::indented(prefix, indent) };
	emit(&input.root.encode_with(&options)?, out.as_deref())
}
