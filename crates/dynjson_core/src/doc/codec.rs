use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::doc::native::Native;
use crate::doc::{DynamicValue, Error, Result};

/// Output layout for [`DynamicValue::encode_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodeOptions {
	/// Break output across lines; when false the output is a single compact line.
	pub indented: bool,
	/// Text placed at the start of every line after the first.
	pub prefix: String,
	/// Text repeated once per nesting level.
	pub indent: String,
}

impl EncodeOptions {
	/// Compact single-line output.
	pub fn compact() -> Self {
		Self::default()
	}

	/// Multi-line output with the given line prefix and indent unit.
	pub fn indented(prefix: impl Into<String>, indent: impl Into<String>) -> Self {
		Self {
			indented: true,
			prefix: prefix.into(),
			indent: indent.into(),
		}
	}

	/// Multi-line output indented by two spaces.
	pub fn pretty() -> Self {
		Self::indented("", "  ")
	}
}

impl DynamicValue {
	/// Decode a document and wrap its root.
	pub fn parse(bytes: impl AsRef<[u8]>) -> Result<Self> {
		let tree: serde_json::Value = serde_json::from_slice(bytes.as_ref()).map_err(|err| {
			debug!(error = %err, "document decode failed");
			Error::Decode(err)
		})?;
		Ok(Self::classify(&Native::from_json(tree)))
	}

	/// Decode a document held as text.
	pub fn parse_str(text: &str) -> Result<Self> {
		Self::parse(text.as_bytes())
	}

	/// Owned `serde_json` snapshot of this node; `Invalid` becomes `null`.
	pub fn to_json(&self) -> Result<serde_json::Value> {
		self.to_native().to_json()
	}

	/// Encode as compact JSON.
	pub fn encode(&self) -> Result<Vec<u8>> {
		self.encode_with(&EncodeOptions::compact())
	}

	/// Encode across lines, starting nested lines with `prefix` plus one `indent` per level.
	pub fn encode_indented(&self, prefix: &str, indent: &str) -> Result<Vec<u8>> {
		self.encode_with(&EncodeOptions::indented(prefix, indent))
	}

	/// Encode with explicit layout options.
	pub fn encode_with(&self, options: &EncodeOptions) -> Result<Vec<u8>> {
		let tree = self.to_json()?;
		let mut out = Vec::new();
		if !options.indented {
			serde_json::to_writer(&mut out, &tree).map_err(Error::Encode)?;
			return Ok(out);
		}

		let formatter = PrettyFormatter::with_indent(options.indent.as_bytes());
		let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
		tree.serialize(&mut serializer).map_err(Error::Encode)?;
		Ok(apply_prefix(out, &options.prefix))
	}

	/// Compact text form, empty when encoding fails.
	pub fn encode_to_text(&self) -> String {
		text_or_empty(self.encode())
	}

	/// Indented text form, empty when encoding fails.
	pub fn encode_indented_to_text(&self, prefix: &str, indent: &str) -> String {
		text_or_empty(self.encode_indented(prefix, indent))
	}
}

fn text_or_empty(encoded: Result<Vec<u8>>) -> String {
	match encoded.map(String::from_utf8) {
		Ok(Ok(text)) => text,
		Ok(Err(err)) => {
			debug!(error = %err, "encoded output was not utf-8");
			String::new()
		}
		Err(err) => {
			debug!(error = %err, "encode to text swallowed error");
			String::new()
		}
	}
}

// Encoded strings escape control characters, so every raw newline is layout.
fn apply_prefix(encoded: Vec<u8>, prefix: &str) -> Vec<u8> {
	if prefix.is_empty() {
		return encoded;
	}

	let lines = encoded.iter().filter(|byte| **byte == b'\n').count();
	let mut out = Vec::with_capacity(encoded.len() + lines * prefix.len());
	for byte in encoded {
		out.push(byte);
		if byte == b'\n' {
			out.extend_from_slice(prefix.as_bytes());
		}
	}
	out
}
