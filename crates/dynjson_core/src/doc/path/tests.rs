use crate::doc::{DynamicValue, Error, FieldPath, PathStep};

fn steps(input: &str) -> Vec<PathStep> {
	FieldPath::parse(input).expect("path parses").steps
}

#[test]
fn parses_dotted_fields_with_selectors() {
	assert_eq!(
		steps("friends[-1].nets[0]"),
		vec![
			PathStep::Field("friends".into()),
			PathStep::Index(-1),
			PathStep::Field("nets".into()),
			PathStep::Index(0),
		]
	);
	assert_eq!(steps("a[1][2]"), vec![PathStep::Field("a".into()), PathStep::Index(1), PathStep::Index(2)]);
}

#[test]
fn quoted_selector_addresses_keys_with_separators() {
	assert_eq!(steps(r#"["fav.movie"]"#), vec![PathStep::Field("fav.movie".into())]);
	assert_eq!(steps(r#"a["b[\"c\"]"].d"#), vec![PathStep::Field("a".into()), PathStep::Field("b[\"c\"]".into()), PathStep::Field("d".into())]);
}

#[test]
fn leading_selector_addresses_array_roots() {
	assert_eq!(steps("[2].name"), vec![PathStep::Index(2), PathStep::Field("name".into())]);
}

#[test]
fn rejects_malformed_paths() {
	for input in ["", ".", "a.", ".a", "a..b", "a[", "a[]", "a[x]", "a[+1]", "a[1", "a[1]b", "a.[0]", r#"a["b"#, r#"a["b"x]"#, "a[--1]"] {
		let err = FieldPath::parse(input).expect_err("malformed path must fail");
		assert!(matches!(err, Error::InvalidFieldPath { ref path } if path == input), "unexpected error for {input:?}");
	}
}

#[test]
fn display_round_trips() {
	for input in ["a.b[0]", "[-1].x", r#"["fav.movie"].b"#, r#"a["q\"uote"]"#] {
		let path = FieldPath::parse(input).expect("path parses");
		assert_eq!(FieldPath::parse(&path.to_string()).expect("display reparses"), path);
	}
	assert_eq!(FieldPath::parse("a.b[0]").expect("parses").to_string(), "a.b[0]");
}

#[test]
fn parent_and_last_split_the_path() {
	let path = FieldPath::parse("a.b[3]").expect("parses");
	assert_eq!(path.last(), Some(&PathStep::Index(3)));
	assert_eq!(path.parent().expect("has parent").to_string(), "a.b");
	assert!(FieldPath::default().parent().is_none());
}

#[test]
fn at_follows_steps_and_stops_at_gaps() {
	let root = DynamicValue::parse_str(r#"{"friends":[{"first":"Dale"},{"first":"Roger"}],"fav.movie":"Deer Hunter"}"#).expect("parses");
	assert_eq!(root.at(&FieldPath::parse("friends[-1].first").expect("parses")).as_str(), Some("Roger"));
	assert_eq!(root.at(&FieldPath::parse(r#"["fav.movie"]"#).expect("parses")).as_str(), Some("Deer Hunter"));
	assert!(!root.at(&FieldPath::parse("friends[5].first").expect("parses")).is_valid());
	assert_eq!(root.at(&FieldPath::default()), root);
}

#[test]
fn set_at_writes_through_parent() {
	let root = DynamicValue::parse_str(r#"{"friends":[{"first":"Dale"}]}"#).expect("parses");
	root.set_at(&FieldPath::parse("friends[0].last").expect("parses"), "Murphy")
		.set_at(&FieldPath::parse("friends[-1].first").expect("parses"), "D.")
		.set_at(&FieldPath::parse("missing.deep").expect("parses"), 1)
		.set_at(&FieldPath::parse("friends[9]").expect("parses"), 1);

	assert_eq!(root.encode_to_text(), r#"{"friends":[{"first":"D.","last":"Murphy"}]}"#);
}
