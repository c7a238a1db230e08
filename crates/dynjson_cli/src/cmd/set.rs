use std::path::PathBuf;

use dynjson::DynamicValue;
use dynjson::doc::{FieldPath, PathStep};

use crate::cmd::input::open;
use crate::cmd::util::{emit, layout, parse_path, parse_value_arg, render_path};
use crate::{CliError, Result};

/// Which edit `run` applies at the target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
	/// Replace the member or element at the path.
	Assign,
	/// Push onto the array at the path.
	Append,
}

#[derive(clap::Args)]
pub struct Args {
	/// Document to edit, or `-` for stdin.
	pub file: PathBuf,
	/// Field path such as `friends[1].last`.
	pub path: String,
	/// JSON value; anything that does not parse is stored as a string.
	pub value: String,
	/// Write the edited document here instead of stdout.
	#[arg(long)]
	pub out: Option<PathBuf>,
	/// Indent output by two spaces.
	#[arg(long)]
	pub pretty: bool,
}

/// Apply one edit and write the whole document back out.
pub fn run(args: Args, mode: Mode) -> Result<()> {
	let Args { file, path, value, out, pretty } = args;

	let input = open(&file)?;
	let path = parse_path(&path)?;
	let value = parse_value_arg(&value);

	match mode {
		Mode::Assign => assign(&input.root, &path, value)?,
		Mode::Append => append(&input.root, &path, value)?,
	}

	emit(&input.root.encode_with(&layout(pretty))?, out.as_deref())
}

fn assign(root: &DynamicValue, path: &FieldPath, value: DynamicValue) -> Result<()> {
	let (Some(last), Some(parent_path)) = (path.last(), path.parent()) else {
		return Err(CliError::CannotEdit {
			action: "set",
			path: render_path(path),
			found: root.kind(),
		});
	};

	let parent = root.at(&parent_path);
	let fits = match last {
		PathStep::Field(_) => parent.is_object(),
		PathStep::Index(index) => parent.index(*index).is_valid(),
	};
	if !fits {
		return Err(CliError::CannotEdit {
			action: "set",
			path: render_path(path),
			found: parent.kind(),
		});
	}

	root.set_at(path, value);
	Ok(())
}

fn append(root: &DynamicValue, path: &FieldPath, value: DynamicValue) -> Result<()> {
	let target = root.at(path);
	if !target.is_array() {
		return Err(CliError::CannotEdit {
			action: "append",
			path: render_path(path),
			found: target.kind(),
		});
	}

	target.append(value);
	Ok(())
}
