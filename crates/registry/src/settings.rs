//! Externally resolved settings keyed by [`Label`].
//!
//! Values arrive already resolved and typed; the index stores them verbatim and
//! performs no conversion or visibility filtering. It shares nothing with the
//! option name index.

use knob_label::Label;
use rustc_hash::FxHashMap;

use crate::value::OptionValue;

/// Immutable label → value table.
#[derive(Debug, Clone, Default)]
pub struct SettingIndex {
	by_label: FxHashMap<Label, OptionValue>,
}

impl SettingIndex {
	/// Builds the index; for a label supplied twice the last value is kept.
	pub fn new<I>(settings: I) -> Self
	where
		I: IntoIterator<Item = (Label, OptionValue)>,
	{
		Self {
			by_label: settings.into_iter().collect(),
		}
	}

	/// Returns the stored value for `label`.
	#[inline]
	pub fn value_of(&self, label: &Label) -> Option<&OptionValue> {
		self.by_label.get(label)
	}

	pub fn contains(&self, label: &Label) -> bool {
		self.by_label.contains_key(label)
	}

	pub fn len(&self) -> usize {
		self.by_label.len()
	}

	pub fn is_empty(&self) -> bool {
		self.by_label.is_empty()
	}
}

impl FromIterator<(Label, OptionValue)> for SettingIndex {
	fn from_iter<I: IntoIterator<Item = (Label, OptionValue)>>(iter: I) -> Self {
		Self::new(iter)
	}
}
