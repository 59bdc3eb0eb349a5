//! Registry facade over option names and external settings.
//!
//! [`OptionDetails`] is built once from finished inputs and is read-only
//! afterwards. It is `Send + Sync`, so one instance can be shared behind an
//! `Arc` by any number of readers without locking.
//!
//! Option names and setting labels are separate lookup surfaces: the key type
//! passed to [`OptionDetails::option_value`] selects which one is consulted.

use std::sync::Arc;

use knob_label::Label;

use crate::error::RegistryError;
use crate::group::{GroupInstance, GroupType};
use crate::index::{Collision, NameIndex};
use crate::settings::SettingIndex;
use crate::value::OptionValue;

mod builder;


pub use builder::OptionDetailsBuilder;

/// Name- and label-addressable view of parsed options and external settings.
#[derive(Debug, Default)]
pub struct OptionDetails {
	names: NameIndex,
	settings: SettingIndex,
}

impl OptionDetails {
	pub fn builder() -> OptionDetailsBuilder {
		OptionDetailsBuilder::new()
	}

	/// Builds details over `groups` with no external settings.
	pub fn for_groups<I>(groups: I) -> Result<Self, RegistryError>
	where
		I: IntoIterator<Item = Arc<dyn GroupInstance>>,
	{
		Self::builder().groups(groups).build()
	}

	/// Builds details over `groups` and resolved external `settings`.
	///
	/// # Errors
	///
	/// Returns [`RegistryError::Conversion`] if any public option's converter
	/// rejects its stored text. The registry is all or nothing, so a single
	/// bad value also hides every valid option. See
	/// [`OptionDetailsBuilder::build`].
	pub fn for_options<I, S>(groups: I, settings: S) -> Result<Self, RegistryError>
	where
		I: IntoIterator<Item = Arc<dyn GroupInstance>>,
		S: IntoIterator<Item = (Label, OptionValue)>,
	{
		Self::builder().groups(groups).settings(settings).build()
	}

	/// Returns the group that declares the public option `name`.
	pub fn option_group(&self, name: &str) -> Option<GroupType> {
		self.names.group_of(name)
	}

	/// Returns the value of an option name or a setting label.
	///
	/// Multi-valued options always resolve to a list. Unknown and internal
	/// names, and unknown labels, return `None`.
	pub fn option_value<K: ValueKey>(&self, key: K) -> Option<&OptionValue> {
		key.lookup(self)
	}

	/// Returns true only if `name` is a public multi-valued option.
	pub fn allows_multiple_values(&self, name: &str) -> bool {
		self.names.allows_multiple(name)
	}

	/// Returns public option names in first-insertion order.
	pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.names.names()
	}

	/// Returns the duplicate names met during construction.
	pub fn collisions(&self) -> &[Collision] {
		self.names.collisions()
	}

	/// Returns the number of public options.
	pub fn len(&self) -> usize {
		self.names.len()
	}

	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}
}

// Seal ValueKey so only names and labels select a lookup surface.
mod sealed {
	pub trait Sealed {}
	impl Sealed for &str {}
	impl Sealed for &String {}
	impl Sealed for &knob_label::Label {}
}

/// Key accepted by [`OptionDetails::option_value`].
pub trait ValueKey: sealed::Sealed {
	#[doc(hidden)]
	fn lookup(self, details: &OptionDetails) -> Option<&OptionValue>;
}

impl ValueKey for &str {
	fn lookup(self, details: &OptionDetails) -> Option<&OptionValue> {
		details.names.value_of(self)
	}
}

impl ValueKey for &String {
	fn lookup(self, details: &OptionDetails) -> Option<&OptionValue> {
		details.names.value_of(self)
	}
}

impl ValueKey for &Label {
	fn lookup(self, details: &OptionDetails) -> Option<&OptionValue> {
		details.settings.value_of(self)
	}
}
