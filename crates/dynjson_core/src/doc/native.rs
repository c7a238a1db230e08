use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::doc::{Error, Number, Result};

/// Container storage shared between a document and every node viewing it.
pub(crate) type Shared<T> = Rc<RefCell<T>>;
/// Backing sequence of an array node.
pub(crate) type Array = Vec<Native>;
/// Backing mapping of an object node.
pub(crate) type Object = BTreeMap<String, Native>;

/// Untyped document tree as stored inside containers.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Native {
	Null,
	Bool(bool),
	Number(Number),
	String(String),
	Array(Shared<Array>),
	Object(Shared<Object>),
	/// Leftover of a coercion that had no document shape.
	Opaque(Rc<str>),
}

pub(crate) fn share<T>(value: T) -> Shared<T> {
	Rc::new(RefCell::new(value))
}

impl Native {
	pub(crate) fn from_json(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Self::Null,
			serde_json::Value::Bool(flag) => Self::Bool(flag),
			serde_json::Value::Number(number) => Self::Number(Number::from_json(&number)),
			serde_json::Value::String(text) => Self::String(text),
			serde_json::Value::Array(items) => Self::Array(share(items.into_iter().map(Self::from_json).collect())),
			serde_json::Value::Object(entries) => Self::Object(share(entries.into_iter().map(|(key, item)| (key, Self::from_json(item))).collect())),
		}
	}

	/// Snapshot into a codec tree, rejecting values the codec cannot write.
	pub(crate) fn to_json(&self) -> Result<serde_json::Value> {
		let mut open = Vec::new();
		self.to_json_inner(&mut open)
	}

	fn to_json_inner(&self, open: &mut Vec<*const ()>) -> Result<serde_json::Value> {
		match self {
			Self::Null => Ok(serde_json::Value::Null),
			Self::Bool(flag) => Ok(serde_json::Value::Bool(*flag)),
			Self::Number(number) => number.to_json().map(serde_json::Value::Number),
			Self::String(text) => Ok(serde_json::Value::String(text.clone())),
			Self::Array(items) => {
				enter(open, Rc::as_ptr(items).cast())?;
				let out = items.borrow().iter().map(|item| item.to_json_inner(open)).collect::<Result<Vec<_>>>()?;
				open.pop();
				Ok(serde_json::Value::Array(out))
			}
			Self::Object(entries) => {
				enter(open, Rc::as_ptr(entries).cast())?;
				let mut out = serde_json::Map::new();
				for (key, item) in entries.borrow().iter() {
					out.insert(key.clone(), item.to_json_inner(open)?);
				}
				open.pop();
				Ok(serde_json::Value::Object(out))
			}
			Self::Opaque(reason) => Err(Error::Unrepresentable { reason: reason.to_string() }),
		}
	}
}

fn enter(open: &mut Vec<*const ()>, container: *const ()) -> Result<()> {
	if open.contains(&container) {
		return Err(Error::Cycle);
	}
	open.push(container);
	Ok(())
}
