use std::fmt;

use tracing::trace;

use crate::doc::native::{Array, Native, Object, Shared, share};
use crate::doc::{IntoPayload, Kind, Number, Payload};

/// Dynamically-typed node viewing one value of a document tree.
///
/// Navigation never fails: a missing key, an out-of-range index, or a
/// receiver of the wrong shape yields an [`Kind::Invalid`] node, so chains like
/// `root.field("a").field("b").index(-1)` stop safely at the first gap.
///
/// Scalars are copied out on every access. Array and object containers are
/// shared with the document they came from, so mutating a navigated child
/// updates the parent in place. Cloning a node shares its container the same
/// way.
#[derive(Debug, Clone, Default)]
pub struct DynamicValue(pub(crate) Node);

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) enum Node {
	#[default]
	Invalid,
	Null,
	Number(Number),
	String(String),
	Boolean(bool),
	Array(Shared<Array>),
	Object(Shared<Object>),
}

impl DynamicValue {
	/// Sentinel for a value that does not exist.
	pub fn invalid() -> Self {
		Self(Node::Invalid)
	}

	/// Explicit `null` node.
	pub fn null() -> Self {
		Self(Node::Null)
	}

	/// Fresh empty object.
	pub fn new_object() -> Self {
		Self(Node::Object(share(Object::new())))
	}

	/// Fresh empty array.
	pub fn new_array() -> Self {
		Self(Node::Array(share(Array::new())))
	}

	/// Build a node from any coercible value.
	///
	/// Values that degrade during coercion come back as [`Kind::Invalid`].
	pub fn from_value(value: impl IntoPayload) -> Self {
		Self::classify(&value.into_payload().0)
	}

	pub(crate) fn classify(native: &Native) -> Self {
		Self(match native {
			Native::Null => Node::Null,
			Native::Bool(flag) => Node::Boolean(*flag),
			Native::Number(number) => Node::Number(*number),
			Native::String(text) => Node::String(text.clone()),
			Native::Array(items) => Node::Array(items.clone()),
			Native::Object(entries) => Node::Object(entries.clone()),
			Native::Opaque(_) => Node::Invalid,
		})
	}

	/// Raw payload for storing into a container; `Invalid` stores as `null`.
	pub(crate) fn to_native(&self) -> Native {
		match &self.0 {
			Node::Invalid | Node::Null => Native::Null,
			Node::Number(number) => Native::Number(*number),
			Node::String(text) => Native::String(text.clone()),
			Node::Boolean(flag) => Native::Bool(*flag),
			Node::Array(items) => Native::Array(items.clone()),
			Node::Object(entries) => Native::Object(entries.clone()),
		}
	}

	/// Active variant tag.
	pub fn kind(&self) -> Kind {
		match self.0 {
			Node::Invalid => Kind::Invalid,
			Node::Null => Kind::Null,
			Node::Number(_) => Kind::Number,
			Node::String(_) => Kind::String,
			Node::Boolean(_) => Kind::Boolean,
			Node::Array(_) => Kind::Array,
			Node::Object(_) => Kind::Object,
		}
	}

	/// Whether this node corresponds to an existing value.
	pub fn is_valid(&self) -> bool {
		!matches!(self.0, Node::Invalid)
	}

	/// Whether the document holds an explicit `null` here.
	pub fn is_null(&self) -> bool {
		matches!(self.0, Node::Null)
	}

	/// Whether this is a number node.
	pub fn is_number(&self) -> bool {
		matches!(self.0, Node::Number(_))
	}

	/// Whether this is a string node.
	pub fn is_string(&self) -> bool {
		matches!(self.0, Node::String(_))
	}

	/// Whether this is a boolean node.
	pub fn is_bool(&self) -> bool {
		matches!(self.0, Node::Boolean(_))
	}

	/// Whether this is an array node.
	pub fn is_array(&self) -> bool {
		matches!(self.0, Node::Array(_))
	}

	/// Whether this is an object node.
	pub fn is_object(&self) -> bool {
		matches!(self.0, Node::Object(_))
	}

	/// Numeric payload, if this is a number node.
	pub fn as_number(&self) -> Option<Number> {
		match self.0 {
			Node::Number(number) => Some(number),
			_ => None,
		}
	}

	/// Borrow the text payload, if this is a string node.
	pub fn as_str(&self) -> Option<&str> {
		match &self.0 {
			Node::String(text) => Some(text),
			_ => None,
		}
	}

	/// Look up an object member.
	pub fn field(&self, name: &str) -> Self {
		let Node::Object(entries) = &self.0 else {
			trace!(field = name, kind = %self.kind(), "field lookup on non-object");
			return Self::invalid();
		};

		match entries.borrow().get(name) {
			Some(child) => Self::classify(child),
			None => {
				trace!(field = name, "field lookup missed");
				Self::invalid()
			}
		}
	}

	/// Look up an array element; negative indices count from the end.
	pub fn index(&self, index: isize) -> Self {
		let Node::Array(items) = &self.0 else {
			trace!(index, kind = %self.kind(), "index lookup on non-array");
			return Self::invalid();
		};

		let items = items.borrow();
		match resolve_index(items.len(), index) {
			Some(slot) => Self::classify(&items[slot]),
			None => {
				trace!(index, len = items.len(), "index out of range");
				Self::invalid()
			}
		}
	}

	/// Element count for arrays and objects, zero for everything else.
	pub fn size(&self) -> usize {
		match &self.0 {
			Node::Array(items) => items.borrow().len(),
			Node::Object(entries) => entries.borrow().len(),
			_ => 0,
		}
	}

	/// Object keys, empty for every other kind.
	pub fn keys(&self) -> Vec<String> {
		match &self.0 {
			Node::Object(entries) => entries.borrow().keys().cloned().collect(),
			_ => Vec::new(),
		}
	}

	/// Insert or overwrite an object member; no-op unless this is an object.
	pub fn set_field(&self, name: impl Into<String>, value: impl IntoPayload) -> &Self {
		if let Node::Object(entries) = &self.0 {
			let native = value.into_payload().0;
			entries.borrow_mut().insert(name.into(), native);
		}
		self
	}

	/// Replace an array element, resolving `index` like [`Self::index`].
	///
	/// Out-of-range indices and non-array receivers are silently ignored.
	pub fn set_index(&self, index: isize, value: impl IntoPayload) -> &Self {
		if let Node::Array(items) = &self.0 {
			let native = value.into_payload().0;
			let mut items = items.borrow_mut();
			if let Some(slot) = resolve_index(items.len(), index) {
				items[slot] = native;
			}
		}
		self
	}

	/// Push onto the end of an array; no-op unless this is an array.
	pub fn append(&self, value: impl IntoPayload) -> &Self {
		if let Node::Array(items) = &self.0 {
			let native = value.into_payload().0;
			items.borrow_mut().push(native);
		}
		self
	}

	/// Visit array elements in order with their position.
	///
	/// The array is re-read before each element, so the visitor may mutate it
	/// without a borrow conflict; elements appended during the walk are
	/// visited too.
	pub fn each(&self, mut visit: impl FnMut(Self, usize)) {
		let Node::Array(items) = &self.0 else {
			return;
		};

		let mut position = 0;
		loop {
			let item = match items.borrow().get(position) {
				Some(child) => Self::classify(child),
				None => break,
			};
			visit(item, position);
			position += 1;
		}
	}

	/// Visit object members with their key. Callers must not rely on the order.
	pub fn each_pair(&self, mut visit: impl FnMut(Self, &str)) {
		let Node::Object(entries) = &self.0 else {
			return;
		};

		let keys: Vec<String> = entries.borrow().keys().cloned().collect();
		for key in keys {
			let item = match entries.borrow().get(&key) {
				Some(child) => Self::classify(child),
				None => continue,
			};
			visit(item, &key);
		}
	}
}

/// Map a possibly negative index onto `0..len`.
pub(crate) fn resolve_index(len: usize, index: isize) -> Option<usize> {
	if index >= 0 {
		let slot = index.unsigned_abs();
		(slot < len).then_some(slot)
	} else {
		len.checked_sub(index.unsigned_abs())
	}
}

impl PartialEq for DynamicValue {
	/// Structural equality: same kinds and values at every path.
	///
	/// A container nested inside itself recurses without bound.
	fn eq(&self, other: &Self) -> bool {
		self.0 == other.0
	}
}

impl From<serde_json::Value> for DynamicValue {
	fn from(tree: serde_json::Value) -> Self {
		Self::classify(&Native::from_json(tree))
	}
}

impl From<Payload> for DynamicValue {
	fn from(payload: Payload) -> Self {
		Self::classify(&payload.0)
	}
}

impl fmt::Display for DynamicValue {
	/// Strings print raw, `Invalid` prints nothing, everything else prints as
	/// compact JSON.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.0 {
			Node::Invalid => Ok(()),
			Node::String(text) => f.write_str(text),
			Node::Number(number) => write!(f, "{number}"),
			_ => f.write_str(&self.encode_to_text()),
		}
	}
}
