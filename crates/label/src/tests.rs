use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

#[rstest]
#[case("//test:setting", None, "test", "setting")]
#[case("//tools/cc", None, "tools/cc", "cc")]
#[case("//tools/cc:cc", None, "tools/cc", "cc")]
#[case("//:flag", None, "", "flag")]
#[case("@@rules_cc//cc:compiler", Some("rules_cc"), "cc", "compiler")]
#[case("@rules_cc//cc:compiler", Some("rules_cc"), "cc", "compiler")]
#[case("@@//test:setting", None, "test", "setting")]
fn parses_canonical_forms(
	#[case] text: &str,
	#[case] repo: Option<&str>,
	#[case] package: &str,
	#[case] name: &str,
) {
	let label = Label::parse_canonical(text).expect("label should parse");
	assert_eq!(label.repo(), repo);
	assert_eq!(label.package(), package);
	assert_eq!(label.name(), name);
	assert_eq!(label.is_main_repo(), repo.is_none());
}

#[rstest]
#[case("test:setting", LabelError::MissingPackageRoot("test:setting".into()))]
#[case("@repo", LabelError::MissingPackageRoot("@repo".into()))]
#[case("//test:", LabelError::EmptyName("//test:".into()))]
#[case("//", LabelError::EmptyName("//".into()))]
#[case("//test/", LabelError::InvalidPackage("//test/".into()))]
#[case("///test:x", LabelError::InvalidPackage("///test:x".into()))]
#[case("//a//b:x", LabelError::InvalidPackage("//a//b:x".into()))]
#[case("//test:a:b", LabelError::InvalidChar { label: "//test:a:b".into(), ch: ':' })]
#[case("//test:a b", LabelError::InvalidChar { label: "//test:a b".into(), ch: ' ' })]
fn rejects_malformed_labels(#[case] text: &str, #[case] expected: LabelError) {
	assert_eq!(Label::parse_canonical(text), Err(expected));
}

#[test]
fn display_is_fully_qualified() {
	let short: Label = "//tools/cc".parse().unwrap();
	assert_eq!(short.to_string(), "//tools/cc:cc");

	let external: Label = "@rules_cc//cc:compiler".parse().unwrap();
	assert_eq!(external.to_string(), "@@rules_cc//cc:compiler");
}

#[test]
fn short_and_long_forms_are_equal() {
	let short = Label::parse_canonical("//tools/cc").unwrap();
	let long = Label::parse_canonical("//tools/cc:cc").unwrap();
	assert_eq!(short, long);
}

#[test]
fn serializes_as_canonical_string() {
	let label = Label::parse_canonical("//test:setting").unwrap();
	let json = serde_json::to_string(&label).unwrap();
	assert_eq!(json, "\"//test:setting\"");

	let back: Label = serde_json::from_str(&json).unwrap();
	assert_eq!(back, label);
	assert!(serde_json::from_str::<Label>("\"no-root\"").is_err());
}
