use crate::doc::value::Node;
use crate::doc::{DynamicValue, Error, Number, Result};

/// Scalar types that can be extracted from a node.
///
/// Extraction succeeds only when the node kind matches the target exactly.
/// Integral targets additionally require a whole value that fits the target
/// range; `3.0` extracts as `3` while `3.5` is a mismatch.
pub trait FromDynamic: Sized {
	/// Target description used in mismatch errors.
	const EXPECTED: &'static str;

	/// Extract from `value`, or `None` on any shape mismatch.
	fn from_dynamic(value: &DynamicValue) -> Option<Self>;
}

impl DynamicValue {
	/// Extract a scalar, reporting mismatches as [`Error::TypeMismatch`].
	pub fn try_get<T: FromDynamic>(&self) -> Result<T> {
		T::from_dynamic(self).ok_or(Error::TypeMismatch {
			expected: T::EXPECTED,
			found: self.kind(),
		})
	}

	/// Extract a scalar, returning `fallback` on mismatch.
	pub fn get_or<T: FromDynamic>(&self, fallback: T) -> T {
		T::from_dynamic(self).unwrap_or(fallback)
	}

	/// Extract a scalar whose shape the caller has already established.
	///
	/// # Panics
	///
	/// Panics on mismatch. Do not use on untrusted input.
	#[track_caller]
	pub fn must_get<T: FromDynamic>(&self) -> T {
		match self.try_get() {
			Ok(value) => value,
			Err(err) => panic!("{err}"),
		}
	}
}

macro_rules! from_dynamic_signed {
	($($ty:ty),*) => {
		$(
			impl FromDynamic for $ty {
				const EXPECTED: &'static str = stringify!($ty);

				fn from_dynamic(value: &DynamicValue) -> Option<Self> {
					value.as_number()?.to_i64().and_then(|whole| <$ty>::try_from(whole).ok())
				}
			}
		)*
	};
}

macro_rules! from_dynamic_unsigned {
	($($ty:ty),*) => {
		$(
			impl FromDynamic for $ty {
				const EXPECTED: &'static str = stringify!($ty);

				fn from_dynamic(value: &DynamicValue) -> Option<Self> {
					value.as_number()?.to_u64().and_then(|whole| <$ty>::try_from(whole).ok())
				}
			}
		)*
	};
}

from_dynamic_signed!(i8, i16, i32, i64, isize);
from_dynamic_unsigned!(u8, u16, u32, u64, usize);

impl FromDynamic for f64 {
	const EXPECTED: &'static str = "f64";

	fn from_dynamic(value: &DynamicValue) -> Option<Self> {
		value.as_number().map(Number::to_f64_lossy)
	}
}

impl FromDynamic for f32 {
	const EXPECTED: &'static str = "f32";

	fn from_dynamic(value: &DynamicValue) -> Option<Self> {
		value.as_number().map(|number| number.to_f64_lossy() as f32)
	}
}

impl FromDynamic for Number {
	const EXPECTED: &'static str = "number";

	fn from_dynamic(value: &DynamicValue) -> Option<Self> {
		value.as_number()
	}
}

impl FromDynamic for bool {
	const EXPECTED: &'static str = "bool";

	fn from_dynamic(value: &DynamicValue) -> Option<Self> {
		match value.0 {
			Node::Boolean(flag) => Some(flag),
			_ => None,
		}
	}
}

impl FromDynamic for String {
	const EXPECTED: &'static str = "string";

	fn from_dynamic(value: &DynamicValue) -> Option<Self> {
		value.as_str().map(str::to_owned)
	}
}
