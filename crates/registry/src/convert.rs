//! Per-option value converters.
//!
//! A [`Converter`] turns the textual form an option was stored in into its
//! typed [`OptionValue`]. The registry invokes the declared converter for every
//! textual value, whether it came from the command line or from the option's
//! textual default.

use crate::OptionValue;

/// Strategy that converts an option's textual value into a typed value.
pub trait Converter: Send + Sync {
	/// Converts `input` into a typed value.
	fn convert(&self, input: &str) -> Result<OptionValue, ConversionError>;

	/// Short human-readable description of the accepted input.
	fn type_description(&self) -> &'static str;
}

/// A converter rejected its input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot convert {input:?} to {expected}: {reason}")]
pub struct ConversionError {
	pub input: String,
	pub expected: &'static str,
	pub reason: String,
}

impl ConversionError {
	pub fn new(input: &str, expected: &'static str, reason: impl Into<String>) -> Self {
		Self {
			input: input.to_string(),
			expected,
			reason: reason.into(),
		}
	}
}

/// Parses common boolean spellings.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolConverter;

impl Converter for BoolConverter {
	fn convert(&self, input: &str) -> Result<OptionValue, ConversionError> {
		match input.to_lowercase().as_str() {
			"true" | "1" | "yes" | "on" => Ok(OptionValue::Bool(true)),
			"false" | "0" | "no" | "off" => Ok(OptionValue::Bool(false)),
			_ => Err(ConversionError::new(
				input,
				self.type_description(),
				"expected true/false, yes/no, on/off, 1/0",
			)),
		}
	}

	fn type_description(&self) -> &'static str {
		"a boolean"
	}
}

/// Parses a signed 64-bit integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntConverter;

impl Converter for IntConverter {
	fn convert(&self, input: &str) -> Result<OptionValue, ConversionError> {
		input
			.trim()
			.parse::<i64>()
			.map(OptionValue::Int)
			.map_err(|e| ConversionError::new(input, self.type_description(), e.to_string()))
	}

	fn type_description(&self) -> &'static str {
		"an integer"
	}
}

/// Maps the empty string to an absent marker and anything else to a present string.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionalConverter;

impl Converter for OptionalConverter {
	fn convert(&self, input: &str) -> Result<OptionValue, ConversionError> {
		if input.is_empty() {
			return Ok(OptionValue::absent());
		}
		Ok(OptionValue::present(input))
	}

	fn type_description(&self) -> &'static str {
		"a string"
	}
}
