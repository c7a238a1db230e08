use std::io::Read;
use std::path::Path;

use dynjson::DynamicValue;
use tracing::debug;

use crate::{CliError, Result};

const MAX_DECOMPRESSED_BYTES: usize = 256 * 1024 * 1024;
/// zstd frame magic used by compressed documents.
pub(crate) const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Compression mode detected for an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Compression {
	/// Plain document text.
	None,
	/// zstd-compressed document text.
	Zstd,
}

impl Compression {
	/// Render compression mode as a stable lowercase label.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Zstd => "zstd",
		}
	}
}

/// Decoded input document.
#[derive(Debug)]
pub(crate) struct Input {
	/// Compression detected on the raw bytes.
	pub(crate) compression: Compression,
	/// Document root.
	pub(crate) root: DynamicValue,
}

/// Read, decompress, and parse a document; `-` reads stdin.
pub(crate) fn open(path: &Path) -> Result<Input> {
	let raw = read_raw(path)?;
	let (compression, bytes) = decode_bytes(raw)?;
	debug!(path = %path.display(), compression = compression.as_str(), len = bytes.len(), "read input");

	let root = DynamicValue::parse(&bytes).map_err(|source| CliError::Input {
		path: path.to_path_buf(),
		source,
	})?;
	Ok(Input { compression, root })
}

fn read_raw(path: &Path) -> Result<Vec<u8>> {
	if path == Path::new("-") {
		let mut raw = Vec::new();
		std::io::stdin().read_to_end(&mut raw)?;
		return Ok(raw);
	}
	Ok(std::fs::read(path)?)
}

/// Detect and decode compression, returning `(mode, decoded_bytes)`.
pub(crate) fn decode_bytes(raw: Vec<u8>) -> Result<(Compression, Vec<u8>)> {
	if raw.starts_with(&ZSTD_MAGIC) {
		let out = decode_zstd(&raw, MAX_DECOMPRESSED_BYTES)?;
		return Ok((Compression::Zstd, out));
	}

	Ok((Compression::None, raw))
}

fn decode_zstd(raw: &[u8], limit: usize) -> Result<Vec<u8>> {
	let mut decoder = zstd::stream::read::Decoder::new(raw)?;
	let mut out = Vec::new();
	let mut buf = [0_u8; 8192];

	loop {
		let read = decoder.read(&mut buf)?;
		if read == 0 {
			break;
		}

		if out.len() + read > limit {
			return Err(CliError::DecompressedTooLarge { limit });
		}

		out.extend_from_slice(&buf[..read]);
	}

	Ok(out)
}
