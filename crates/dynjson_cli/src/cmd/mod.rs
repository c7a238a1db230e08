/// Append and assignment commands.
pub mod set;
/// Re-encoding command.
pub mod fmt;
/// Path lookup command.
pub mod get;
/// Document summary command.
pub mod info;

mod input;
mod util;

#[cfg(test)]
mod test_support;
