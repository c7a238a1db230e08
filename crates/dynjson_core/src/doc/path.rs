use std::fmt;

use crate::doc::{DynamicValue, Error, IntoPayload, Result};

/// One parsed operation in a field path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
	/// Select an object member.
	Field(String),
	/// Select an array element; negative values count from the end.
	Index(isize),
}

/// Parsed field path expression such as `friends[-1].first`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
	/// Ordered sequence of path steps.
	pub steps: Vec<PathStep>,
}

impl FieldPath {
	/// Parse dotted member syntax with optional `[index]` or `["key"]` selectors.
	///
	/// Bare member names run until the next `.` or `[`; keys containing those
	/// characters use the quoted selector form. The path may start with a
	/// selector to address an array root.
	pub fn parse(input: &str) -> Result<Self> {
		let invalid = || Error::InvalidFieldPath { path: input.to_owned() };
		if input.is_empty() {
			return Err(invalid());
		}

		let bytes = input.as_bytes();
		let mut idx = 0_usize;
		let mut steps = Vec::new();
		let mut expect_name = bytes[0] != b'[';

		while idx < bytes.len() {
			if expect_name {
				let start = idx;
				while idx < bytes.len() && bytes[idx] != b'.' && bytes[idx] != b'[' {
					idx += 1;
				}
				if idx == start {
					return Err(invalid());
				}
				steps.push(PathStep::Field(input[start..idx].to_owned()));
			}

			while idx < bytes.len() && bytes[idx] == b'[' {
				let (step, next) = parse_selector(input, idx + 1).ok_or_else(invalid)?;
				steps.push(step);
				idx = next;
			}

			if idx < bytes.len() {
				if bytes[idx] != b'.' {
					return Err(invalid());
				}
				idx += 1;
				if idx >= bytes.len() {
					return Err(invalid());
				}
			}
			expect_name = true;
		}

		Ok(Self { steps })
	}

	/// Path without its final step; `None` for the empty path.
	pub fn parent(&self) -> Option<Self> {
		let (_, parent) = self.steps.split_last()?;
		Some(Self { steps: parent.to_vec() })
	}

	/// Final step, if any.
	pub fn last(&self) -> Option<&PathStep> {
		self.steps.last()
	}
}

/// Parse the inside of a `[...]` selector starting at `start`, returning the
/// step and the offset just past the closing bracket.
fn parse_selector(input: &str, start: usize) -> Option<(PathStep, usize)> {
	let rest = input.get(start..)?;
	if let Some(quoted) = rest.strip_prefix('"') {
		let mut key = String::new();
		let mut chars = quoted.char_indices();
		while let Some((offset, ch)) = chars.next() {
			match ch {
				'\\' => key.push(chars.next()?.1),
				'"' => {
					let close = start + 1 + offset + 1;
					return (input.as_bytes().get(close) == Some(&b']')).then(|| (PathStep::Field(key), close + 1));
				}
				other => key.push(other),
			}
		}
		return None;
	}

	let close = rest.find(']')?;
	let digits = rest[..close].strip_prefix('-').unwrap_or(&rest[..close]);
	if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
		return None;
	}
	let number = rest[..close].parse::<isize>().ok()?;
	Some((PathStep::Index(number), start + close + 1))
}

impl fmt::Display for FieldPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (position, step) in self.steps.iter().enumerate() {
			match step {
				PathStep::Field(name) if is_bare(name) => {
					if position > 0 {
						f.write_str(".")?;
					}
					f.write_str(name)?;
				}
				PathStep::Field(name) => {
					f.write_str("[\"")?;
					for ch in name.chars() {
						if ch == '"' || ch == '\\' {
							f.write_str("\\")?;
						}
						write!(f, "{ch}")?;
					}
					f.write_str("\"]")?;
				}
				PathStep::Index(index) => write!(f, "[{index}]")?,
			}
		}
		Ok(())
	}
}

fn is_bare(name: &str) -> bool {
	!name.is_empty() && !name.contains(['.', '[', ']', '"', '\\'])
}

impl DynamicValue {
	/// Follow every step of `path`, stopping as `Invalid` at the first gap.
	pub fn at(&self, path: &FieldPath) -> Self {
		self.walk(&path.steps)
	}

	/// Assign `value` at `path` through its parent container.
	///
	/// A missing parent or a parent of the wrong shape makes this a no-op,
	/// like [`Self::set_field`] and [`Self::set_index`]. The empty path is a
	/// no-op as well.
	pub fn set_at(&self, path: &FieldPath, value: impl IntoPayload) -> &Self {
		if let Some((last, parent)) = path.steps.split_last() {
			let target = self.walk(parent);
			match last {
				PathStep::Field(name) => {
					target.set_field(name.clone(), value);
				}
				PathStep::Index(index) => {
					target.set_index(*index, value);
				}
			}
		}
		self
	}

	fn walk(&self, steps: &[PathStep]) -> Self {
		let mut current = self.clone();
		for step in steps {
			current = match step {
				PathStep::Field(name) => current.field(name),
				PathStep::Index(index) => current.index(*index),
			};
			if !current.is_valid() {
				break;
			}
		}
		current
	}
}

#[cfg(test)]
mod tests;
