use thiserror::Error;

use crate::doc::Kind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while decoding, extracting from, and encoding documents.
#[derive(Debug, Error)]
pub enum Error {
	/// Input bytes were not a well-formed document.
	#[error("decode: {0}")]
	Decode(#[source] serde_json::Error),
	/// The codec failed while writing output.
	#[error("encode: {0}")]
	Encode(#[source] serde_json::Error),
	/// A value degraded during coercion cannot be written.
	#[error("unrepresentable value: {reason}")]
	Unrepresentable {
		/// Why the source value could not be converted.
		reason: String,
	},
	/// NaN and infinities have no document representation.
	#[error("non-finite number {value}")]
	NonFiniteNumber {
		/// Offending float.
		value: f64,
	},
	/// A container was found nested inside itself.
	#[error("container cycle detected")]
	Cycle,
	/// Node kind does not match the requested extraction.
	#[error("type mismatch: expected {expected}, found {found}")]
	TypeMismatch {
		/// Requested target description.
		expected: &'static str,
		/// Actual node kind.
		found: Kind,
	},
	/// Field path expression syntax is invalid.
	#[error("invalid field path: {path}")]
	InvalidFieldPath {
		/// Original user-provided path string.
		path: String,
	},
}

impl Error {
	/// Whether this error came from a failed extraction rather than the codec.
	pub fn is_type_mismatch(&self) -> bool {
		matches!(self, Self::TypeMismatch { .. })
	}
}
