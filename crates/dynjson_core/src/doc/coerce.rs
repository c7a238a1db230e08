use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::hash::BuildHasher;

use crate::doc::native::{Native, share};
use crate::doc::{DynamicValue, Number};

/// Coerced payload, ready to be stored inside an array or object.
#[derive(Debug, Clone)]
pub struct Payload(pub(crate) Native);

impl Payload {
	/// Payload for an explicit `null`.
	pub fn null() -> Self {
		Self(Native::Null)
	}
}

/// Conversion of native Rust values into document payloads.
///
/// Implemented for scalars, strings, options, sequences, string-keyable maps,
/// `serde_json` trees, and existing nodes. Types outside that set can go
/// through [`Serialized`](crate::doc::Serialized) or implement this trait by
/// delegating to one of the existing impls.
pub trait IntoPayload {
	/// Convert into a payload. Never fails; unconvertible input degrades.
	fn into_payload(self) -> Payload;
}

impl IntoPayload for Payload {
	fn into_payload(self) -> Payload {
		self
	}
}

impl IntoPayload for DynamicValue {
	fn into_payload(self) -> Payload {
		Payload(self.to_native())
	}
}

impl IntoPayload for &DynamicValue {
	fn into_payload(self) -> Payload {
		Payload(self.to_native())
	}
}

impl IntoPayload for Number {
	fn into_payload(self) -> Payload {
		Payload(Native::Number(self))
	}
}

macro_rules! into_payload_number {
	($($ty:ty),*) => {
		$(
			impl IntoPayload for $ty {
				fn into_payload(self) -> Payload {
					Payload(Native::Number(Number::from(self)))
				}
			}
		)*
	};
}

into_payload_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl IntoPayload for bool {
	fn into_payload(self) -> Payload {
		Payload(Native::Bool(self))
	}
}

impl IntoPayload for char {
	fn into_payload(self) -> Payload {
		Payload(Native::String(self.to_string()))
	}
}

impl IntoPayload for &str {
	fn into_payload(self) -> Payload {
		Payload(Native::String(self.to_owned()))
	}
}

impl IntoPayload for String {
	fn into_payload(self) -> Payload {
		Payload(Native::String(self))
	}
}

impl IntoPayload for &String {
	fn into_payload(self) -> Payload {
		Payload(Native::String(self.clone()))
	}
}

impl IntoPayload for () {
	fn into_payload(self) -> Payload {
		Payload::null()
	}
}

impl<T: IntoPayload> IntoPayload for Option<T> {
	fn into_payload(self) -> Payload {
		match self {
			Some(value) => value.into_payload(),
			None => Payload::null(),
		}
	}
}

impl<T: IntoPayload> IntoPayload for Vec<T> {
	fn into_payload(self) -> Payload {
		sequence(self)
	}
}

impl<T: IntoPayload + Clone> IntoPayload for &[T] {
	fn into_payload(self) -> Payload {
		sequence(self.iter().cloned())
	}
}

impl<T: IntoPayload, const N: usize> IntoPayload for [T; N] {
	fn into_payload(self) -> Payload {
		sequence(self)
	}
}

impl<K: Display, V: IntoPayload, S: BuildHasher> IntoPayload for HashMap<K, V, S> {
	fn into_payload(self) -> Payload {
		mapping(self)
	}
}

impl<K: Display, V: IntoPayload> IntoPayload for BTreeMap<K, V> {
	fn into_payload(self) -> Payload {
		mapping(self)
	}
}

impl IntoPayload for serde_json::Value {
	fn into_payload(self) -> Payload {
		Payload(Native::from_json(self))
	}
}

impl IntoPayload for &serde_json::Value {
	fn into_payload(self) -> Payload {
		Payload(Native::from_json(self.clone()))
	}
}

fn sequence<T: IntoPayload>(items: impl IntoIterator<Item = T>) -> Payload {
	let items = items.into_iter().map(|item| item.into_payload().0).collect();
	Payload(Native::Array(share(items)))
}

fn mapping<K: Display, V: IntoPayload>(entries: impl IntoIterator<Item = (K, V)>) -> Payload {
	let entries = entries.into_iter().map(|(key, item)| (key.to_string(), item.into_payload().0)).collect();
	Payload(Native::Object(share(entries)))
}
