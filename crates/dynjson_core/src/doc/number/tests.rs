use crate::doc::{Error, Number};

#[test]
fn whole_float_converts_to_integers() {
	assert_eq!(Number::F64(3.0).to_i64(), Some(3));
	assert_eq!(Number::F64(3.0).to_u64(), Some(3));
	assert_eq!(Number::F64(-0.0).to_i64(), Some(0));
}

#[test]
fn fractional_float_is_not_truncated() {
	assert_eq!(Number::F64(3.5).to_i64(), None);
	assert_eq!(Number::F64(-3.5).to_i64(), None);
	assert_eq!(Number::F64(0.1).to_u64(), None);
}

#[test]
fn float_range_edges_are_rejected() {
	assert_eq!(Number::F64(9_223_372_036_854_775_808.0).to_i64(), None);
	assert_eq!(Number::F64(-9_223_372_036_854_775_808.0).to_i64(), Some(i64::MIN));
	assert_eq!(Number::F64(-1.0).to_u64(), None);
	assert_eq!(Number::F64(f64::NAN).to_i64(), None);
	assert_eq!(Number::F64(f64::INFINITY).to_u64(), None);
}

#[test]
fn unsigned_input_normalizes_into_signed_when_it_fits() {
	assert!(matches!(Number::from(7_u8), Number::I64(7)));
	assert!(matches!(Number::from_u64(u64::MAX), Number::U64(u64::MAX)));
	assert_eq!(Number::from_u64(u64::MAX).to_i64(), None);
	assert_eq!(Number::I64(-1).to_u64(), None);
}

#[test]
fn equality_crosses_representations() {
	assert_eq!(Number::I64(3), Number::F64(3.0));
	assert_eq!(Number::from_u64(5), Number::I64(5));
	assert_ne!(Number::I64(3), Number::F64(3.5));
	assert_ne!(Number::U64(u64::MAX), Number::I64(-1));
}

#[test]
fn display_keeps_float_marker() {
	assert_eq!(Number::I64(-42).to_string(), "-42");
	assert_eq!(Number::F64(3.0).to_string(), "3.0");
	assert_eq!(Number::F64(0.25).to_string(), "0.25");
}

#[test]
fn non_finite_floats_fail_codec_conversion() {
	let err = Number::F64(f64::NAN).to_json().expect_err("nan has no json form");
	assert!(matches!(err, Error::NonFiniteNumber { .. }));
	assert_eq!(Number::U64(u64::MAX).to_json().expect("u64 encodes").as_u64(), Some(u64::MAX));
}
