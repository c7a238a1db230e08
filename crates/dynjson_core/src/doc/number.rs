use std::fmt;

use crate::doc::{Error, Result};

const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// Numeric payload of a number node.
///
/// Integers keep their exact value; unsigned values that fit in `i64` are
/// stored as [`Number::I64`] so equal integers share one representation.
#[derive(Debug, Clone, Copy)]
pub enum Number {
	/// Signed integer.
	I64(i64),
	/// Unsigned integer above `i64::MAX`.
	U64(u64),
	/// Floating point value.
	F64(f64),
}

impl Number {
	/// Build from an unsigned integer, normalizing into `I64` when it fits.
	pub fn from_u64(value: u64) -> Self {
		match i64::try_from(value) {
			Ok(signed) => Self::I64(signed),
			Err(_) => Self::U64(value),
		}
	}

	/// Whether the payload was stored as an integer.
	pub fn is_integer(self) -> bool {
		matches!(self, Self::I64(_) | Self::U64(_))
	}

	/// Whether the payload was stored as a float.
	pub fn is_float(self) -> bool {
		matches!(self, Self::F64(_))
	}

	/// Convert to `i64` when the value is whole and in range.
	///
	/// Floats with a fractional part are rejected instead of truncated.
	pub fn to_i64(self) -> Option<i64> {
		match self {
			Self::I64(value) => Some(value),
			Self::U64(value) => i64::try_from(value).ok(),
			Self::F64(value) => {
				if is_whole(value) && (-TWO_POW_63..TWO_POW_63).contains(&value) {
					Some(value as i64)
				} else {
					None
				}
			}
		}
	}

	/// Convert to `u64` when the value is whole, non-negative, and in range.
	pub fn to_u64(self) -> Option<u64> {
		match self {
			Self::I64(value) => u64::try_from(value).ok(),
			Self::U64(value) => Some(value),
			Self::F64(value) => {
				if is_whole(value) && (0.0..TWO_POW_64).contains(&value) {
					Some(value as u64)
				} else {
					None
				}
			}
		}
	}

	/// Convert to `f64`, rounding integers beyond 2^53.
	pub fn to_f64_lossy(self) -> f64 {
		match self {
			Self::I64(value) => value as f64,
			Self::U64(value) => value as f64,
			Self::F64(value) => value,
		}
	}

	fn integer_value(self) -> Option<i128> {
		match self {
			Self::I64(value) => Some(i128::from(value)),
			Self::U64(value) => Some(i128::from(value)),
			Self::F64(_) => None,
		}
	}

	pub(crate) fn from_json(number: &serde_json::Number) -> Self {
		if let Some(value) = number.as_i64() {
			Self::I64(value)
		} else if let Some(value) = number.as_u64() {
			Self::U64(value)
		} else {
			Self::F64(number.as_f64().unwrap_or(f64::NAN))
		}
	}

	pub(crate) fn to_json(self) -> Result<serde_json::Number> {
		match self {
			Self::I64(value) => Ok(value.into()),
			Self::U64(value) => Ok(value.into()),
			Self::F64(value) => serde_json::Number::from_f64(value).ok_or(Error::NonFiniteNumber { value }),
		}
	}
}

fn is_whole(value: f64) -> bool {
	value.is_finite() && value == value.floor()
}

impl PartialEq for Number {
	fn eq(&self, other: &Self) -> bool {
		match (self.integer_value(), other.integer_value()) {
			(Some(left), Some(right)) => left == right,
			_ => self.to_f64_lossy() == other.to_f64_lossy(),
		}
	}
}

impl fmt::Display for Number {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::I64(value) => write!(f, "{value}"),
			Self::U64(value) => write!(f, "{value}"),
			Self::F64(value) => match serde_json::Number::from_f64(*value) {
				Some(number) => write!(f, "{number}"),
				None => write!(f, "{value}"),
			},
		}
	}
}

macro_rules! number_from_signed {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for Number {
				fn from(value: $ty) -> Self {
					Self::I64(i64::from(value))
				}
			}
		)*
	};
}

macro_rules! number_from_unsigned {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for Number {
				fn from(value: $ty) -> Self {
					Self::from_u64(u64::from(value))
				}
			}
		)*
	};
}

number_from_signed!(i8, i16, i32, i64);
number_from_unsigned!(u8, u16, u32, u64);

impl From<isize> for Number {
	fn from(value: isize) -> Self {
		Self::I64(value as i64)
	}
}

impl From<usize> for Number {
	fn from(value: usize) -> Self {
		Self::from_u64(value as u64)
	}
}

impl From<f32> for Number {
	fn from(value: f32) -> Self {
		Self::F64(f64::from(value))
	}
}

impl From<f64> for Number {
	fn from(value: f64) -> Self {
		Self::F64(value)
	}
}

#[cfg(test)]
mod tests;
