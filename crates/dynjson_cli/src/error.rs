use std::path::PathBuf;

use thiserror::Error;

/// CLI result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Failures surfaced by `dynjson` subcommands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Library failure while decoding, encoding, or parsing a path.
	#[error(transparent)]
	Document(#[from] dynjson::Error),
	/// Input document could not be decoded.
	#[error("{}: {source}", path.display())]
	Input {
		/// Input path as given on the command line.
		path: PathBuf,
		/// Underlying decode failure.
		#[source]
		source: dynjson::Error,
	},
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// No node exists at the requested path.
	#[error("path not found: {path}")]
	PathNotFound {
		/// Canonical rendering of the path.
		path: String,
	},
	/// Target container is missing or has the wrong shape for the edit.
	#[error("cannot {action} at {path}: target is {found}")]
	CannotEdit {
		/// Edit being attempted.
		action: &'static str,
		/// Canonical rendering of the path.
		path: String,
		/// Kind found at the target container.
		found: dynjson::Kind,
	},
}
