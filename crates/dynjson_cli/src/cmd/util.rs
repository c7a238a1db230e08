use std::io::Write;
use std::path::Path;

use dynjson::DynamicValue;
use dynjson::doc::{EncodeOptions, FieldPath};
use tracing::debug;

use crate::Result;

/// Parse a path argument; `.` addresses the document root.
pub(crate) fn parse_path(raw: &str) -> Result<FieldPath> {
	if raw == "." {
		return Ok(FieldPath::default());
	}
	Ok(FieldPath::parse(raw)?)
}

/// Render a path for messages, using `.` for the root.
pub(crate) fn render_path(path: &FieldPath) -> String {
	if path.steps.is_empty() { ".".to_owned() } else { path.to_string() }
}

/// Interpret a value argument as JSON, falling back to a plain string.
pub(crate) fn parse_value_arg(raw: &str) -> DynamicValue {
	match DynamicValue::parse_str(raw) {
		Ok(value) => value,
		Err(err) => {
			debug!(error = %err, "value argument is not json; storing as string");
			DynamicValue::from_value(raw)
		}
	}
}

/// Layout selected by the shared `--pretty` flag.
pub(crate) fn layout(pretty: bool) -> EncodeOptions {
	if pretty { EncodeOptions::pretty() } else { EncodeOptions::compact() }
}

/// Write encoded output to `out`, or to stdout followed by a newline.
pub(crate) fn emit(bytes: &[u8], out: Option<&Path>) -> Result<()> {
	if let Some(path) = out {
		std::fs::write(path, bytes)?;
		return Ok(());
	}

	let mut stdout = std::io::stdout().lock();
	stdout.write_all(bytes)?;
	stdout.write_all(b"\n")?;
	Ok(())
}
