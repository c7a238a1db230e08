mod codec;
mod coerce;
mod error;
mod extract;
mod kind;
mod native;
mod number;
mod path;
mod reflect;
mod value;

/// Output layout options for encoding.
pub use codec::EncodeOptions;
/// Native-to-payload coercion entry points.
pub use coerce::{IntoPayload, Payload};
/// Error and result aliases.
pub use error::{Error, Result};
/// Typed scalar extraction.
pub use extract::FromDynamic;
/// Node kind tag.
pub use kind::Kind;
/// Numeric payload representation.
pub use number::Number;
/// Field path parser types.
pub use path::{FieldPath, PathStep};
/// Serde-driven fallback coercion.
pub use reflect::Serialized;
/// Dynamic document node.
pub use value::DynamicValue;
