use std::rc::Rc;

use serde::Serialize;
use tracing::debug;

use crate::doc::native::Native;
use crate::doc::{IntoPayload, Payload};

/// Coerce any `Serialize` value by walking its serde data model.
///
/// Sequences become arrays, maps and structs become objects, and scalar map
/// keys are stringified. When the value has no document shape (for example a
/// map keyed by tuples) it is kept as an opaque leftover: it reads back as
/// invalid and makes encoding fail with
/// [`Error::Unrepresentable`](crate::doc::Error::Unrepresentable).
#[derive(Debug, Clone, Copy)]
pub struct Serialized<T>(pub T);

impl<T: Serialize> IntoPayload for Serialized<T> {
	fn into_payload(self) -> Payload {
		match serde_json::to_value(&self.0) {
			Ok(tree) => Payload(Native::from_json(tree)),
			Err(err) => {
				debug!(type_name = std::any::type_name::<T>(), error = %err, "coercion kept value as opaque");
				Payload(Native::Opaque(Rc::from(format!("{}: {err}", std::any::type_name::<T>()))))
			}
		}
	}
}
