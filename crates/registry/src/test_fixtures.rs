//! Parsed option groups shared by the unit tests.
//!
//! `parse` stands in for the external options parser: it fills group structs
//! from `--flag`, `--noflag` and `--flag=value` arguments.

use std::sync::Arc;

use crate::convert::{IntConverter, OptionalConverter};
use crate::descriptor::OptionDecl;
use crate::group::{GroupInstance, OptionGroup};
use crate::value::OptionValue;

fn nullable(value: &Option<String>) -> OptionValue {
	value.as_deref().map_or(OptionValue::Null, OptionValue::from)
}

/// Parsers leave multi-valued fields unset when the flag never appears.
fn list_or_null(values: &[String]) -> OptionValue {
	if values.is_empty() {
		return OptionValue::Null;
	}
	values.iter().map(String::as_str).collect()
}

pub(crate) struct Options {
	pub boolean_option: bool,
	pub convertible_option: String,
	pub null_default: Option<String>,
	pub late_bound_default: Option<String>,
	pub multi_option: Vec<String>,
	pub internal_option: String,
	pub internal_multi_option: Vec<String>,
}

impl Default for Options {
	fn default() -> Self {
		Self {
			boolean_option: true,
			convertible_option: String::new(),
			null_default: None,
			late_bound_default: None,
			multi_option: Vec::new(),
			internal_option: "secret".to_string(),
			internal_multi_option: Vec::new(),
		}
	}
}

impl OptionGroup for Options {
	const NAME: &'static str = "Options";

	fn declarations() -> &'static [OptionDecl<Self>] {
		const DECLS: &[OptionDecl<Options>] = &[
			OptionDecl::new("boolean_option", |o: &Options| OptionValue::from(o.boolean_option)),
			OptionDecl::new("convertible_option", |o: &Options| {
				OptionValue::from(o.convertible_option.as_str())
			})
			.converter(&OptionalConverter),
			OptionDecl::new("null_default", |o: &Options| nullable(&o.null_default)),
			OptionDecl::new("late_bound_default", |o: &Options| {
				nullable(&o.late_bound_default)
			}),
			OptionDecl::new("multi_option", |o: &Options| list_or_null(&o.multi_option))
				.multiple(),
			OptionDecl::new("internal option", |o: &Options| {
				OptionValue::from(o.internal_option.as_str())
			})
			.internal(),
			OptionDecl::new("internal multi option", |o: &Options| {
				list_or_null(&o.internal_multi_option)
			})
			.multiple()
			.internal(),
		];
		DECLS
	}
}

#[derive(Default)]
pub(crate) struct MoreOptions {
	pub other_option: String,
}

impl OptionGroup for MoreOptions {
	const NAME: &'static str = "MoreOptions";

	fn declarations() -> &'static [OptionDecl<Self>] {
		const DECLS: &[OptionDecl<MoreOptions>] = &[OptionDecl::new(
			"other_option",
			|o: &MoreOptions| OptionValue::from(o.other_option.as_str()),
		)];
		DECLS
	}
}

/// Redeclares `boolean_option` and `internal option` next to a name of its own.
pub(crate) struct ShadowOptions {
	pub boolean_option: bool,
	pub shadow_only: i64,
}

impl Default for ShadowOptions {
	fn default() -> Self {
		Self {
			boolean_option: false,
			shadow_only: 7,
		}
	}
}

impl OptionGroup for ShadowOptions {
	const NAME: &'static str = "ShadowOptions";

	fn declarations() -> &'static [OptionDecl<Self>] {
		const DECLS: &[OptionDecl<ShadowOptions>] = &[
			OptionDecl::new("boolean_option", |o: &ShadowOptions| {
				OptionValue::from(o.boolean_option)
			})
			.multiple(),
			OptionDecl::new("internal option", |_: &ShadowOptions| OptionValue::from("visible")),
			OptionDecl::new("shadow_only", |o: &ShadowOptions| OptionValue::Int(o.shadow_only)),
		];
		DECLS
	}
}

/// Stores raw text for an integer option, as a parser with deferred conversion would.
pub(crate) struct CountOptions {
	pub jobs: String,
	pub limit: Option<String>,
	pub tags: String,
}

impl Default for CountOptions {
	fn default() -> Self {
		Self {
			jobs: "4".to_string(),
			limit: None,
			tags: "solo".to_string(),
		}
	}
}

impl OptionGroup for CountOptions {
	const NAME: &'static str = "CountOptions";

	fn declarations() -> &'static [OptionDecl<Self>] {
		const DECLS: &[OptionDecl<CountOptions>] = &[
			OptionDecl::new("jobs", |o: &CountOptions| OptionValue::from(o.jobs.as_str()))
				.converter(&IntConverter),
			OptionDecl::new("limit", |o: &CountOptions| nullable(&o.limit))
				.converter(&IntConverter),
			OptionDecl::new("tags", |o: &CountOptions| OptionValue::from(o.tags.as_str()))
				.multiple(),
		];
		DECLS
	}
}

/// Parses `args` into the `Options` and `MoreOptions` groups.
///
/// # Panics
///
/// Panics on any flag neither group declares.
pub(crate) fn parse(args: &[&str]) -> (Options, MoreOptions) {
	let mut options = Options::default();
	let mut more = MoreOptions::default();

	for arg in args {
		let flag = arg
			.strip_prefix("--")
			.unwrap_or_else(|| panic!("not a flag: {arg}"));
		match flag.split_once('=') {
			None if flag == "boolean_option" => options.boolean_option = true,
			None if flag == "noboolean_option" => options.boolean_option = false,
			Some(("convertible_option", v)) => options.convertible_option = v.to_string(),
			Some(("null_default", v)) => options.null_default = Some(v.to_string()),
			Some(("multi_option", v)) => options.multi_option.push(v.to_string()),
			Some(("other_option", v)) => more.other_option = v.to_string(),
			_ => panic!("unrecognized option: {arg}"),
		}
	}

	(options, more)
}

/// Parses `args` and supplies only the `Options` group.
pub(crate) fn options_only(args: &[&str]) -> Vec<Arc<dyn GroupInstance>> {
	let (options, _) = parse(args);
	vec![Arc::new(options) as Arc<dyn GroupInstance>]
}

/// Parses `args` and supplies `Options` followed by `MoreOptions`.
pub(crate) fn options_and_more(args: &[&str]) -> Vec<Arc<dyn GroupInstance>> {
	let (options, more) = parse(args);
	vec![
		Arc::new(options) as Arc<dyn GroupInstance>,
		Arc::new(more) as Arc<dyn GroupInstance>,
	]
}
