use serde::{Deserialize, Serialize};

/// The value of an option or external setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OptionValue {
	/// No value was stored.
	Null,
	/// Boolean value (true/false).
	Bool(bool),
	/// Integer value.
	Int(i64),
	/// String value.
	String(String),
	/// Ordered values of a multi-valued option.
	List(Vec<OptionValue>),
	/// Absent/present marker produced by converters.
	Optional(Option<Box<OptionValue>>),
}

impl OptionValue {
	/// Returns a present optional wrapping `value`.
	pub fn present(value: impl Into<OptionValue>) -> Self {
		OptionValue::Optional(Some(Box::new(value.into())))
	}

	/// Returns an absent optional.
	pub const fn absent() -> Self {
		OptionValue::Optional(None)
	}

	/// Returns the elements if this is a `List` variant.
	pub fn as_list(&self) -> Option<&[OptionValue]> {
		match self {
			OptionValue::List(v) => Some(v),
			_ => None,
		}
	}

	/// Returns the inner marker if this is an `Optional` variant.
	///
	/// The outer `Option` reports the variant, the inner one presence.
	pub fn as_optional(&self) -> Option<Option<&OptionValue>> {
		match self {
			OptionValue::Optional(v) => Some(v.as_deref()),
			_ => None,
		}
	}

	/// Returns true for a stored `Null`, which no converter rewrites.
	pub fn is_null(&self) -> bool {
		matches!(self, OptionValue::Null)
	}
}

impl From<bool> for OptionValue {
	fn from(v: bool) -> Self {
		OptionValue::Bool(v)
	}
}

impl From<i64> for OptionValue {
	fn from(v: i64) -> Self {
		OptionValue::Int(v)
	}
}

impl From<String> for OptionValue {
	fn from(v: String) -> Self {
		OptionValue::String(v)
	}
}

impl From<&str> for OptionValue {
	fn from(v: &str) -> Self {
		OptionValue::String(v.to_string())
	}
}

impl<T: Into<OptionValue>> From<Vec<T>> for OptionValue {
	fn from(v: Vec<T>) -> Self {
		OptionValue::List(v.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<OptionValue>> FromIterator<T> for OptionValue {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		OptionValue::List(iter.into_iter().map(Into::into).collect())
	}
}
