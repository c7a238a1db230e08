use std::fmt;

/// Active variant tag of a [`DynamicValue`](crate::doc::DynamicValue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
	/// Missing or wrongly-shaped value.
	Invalid,
	/// Explicit `null` in the document.
	Null,
	/// Numeric scalar.
	Number,
	/// Text scalar.
	String,
	/// Boolean scalar.
	Boolean,
	/// Ordered sequence.
	Array,
	/// String-keyed mapping.
	Object,
}

impl Kind {
	/// Render kind as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Invalid => "invalid",
			Self::Null => "null",
			Self::Number => "number",
			Self::String => "string",
			Self::Boolean => "boolean",
			Self::Array => "array",
			Self::Object => "object",
		}
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
