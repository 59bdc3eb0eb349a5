//! Staged construction of [`OptionDetails`].
//!
//! Inputs are only collected here. All ingestion work (descriptor extraction,
//! duplicate resolution and value conversion) happens once in
//! [`OptionDetailsBuilder::build`].

use std::sync::Arc;

use knob_label::Label;

use super::OptionDetails;
use crate::error::RegistryError;
use crate::group::GroupInstance;
use crate::index::{DuplicatePolicy, NameIndex};
use crate::settings::SettingIndex;
use crate::value::OptionValue;

/// Builder for constructing [`OptionDetails`].
///
/// Groups are ingested in the order they were added; that order decides
/// duplicate names under the configured [`DuplicatePolicy`].
#[derive(Default)]
pub struct OptionDetailsBuilder {
	groups: Vec<Arc<dyn GroupInstance>>,
	settings: Vec<(Label, OptionValue)>,
	policy: DuplicatePolicy,
}

impl OptionDetailsBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the duplicate name handling policy.
	pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Appends a single parsed group.
	pub fn group<G: GroupInstance + 'static>(mut self, group: Arc<G>) -> Self {
		self.groups.push(group);
		self
	}

	/// Appends parsed groups in iteration order.
	pub fn groups<I: IntoIterator<Item = Arc<dyn GroupInstance>>>(mut self, groups: I) -> Self {
		self.groups.extend(groups);
		self
	}

	/// Adds one resolved external setting.
	pub fn setting(mut self, label: Label, value: impl Into<OptionValue>) -> Self {
		self.settings.push((label, value.into()));
		self
	}

	/// Adds resolved external settings.
	pub fn settings<I: IntoIterator<Item = (Label, OptionValue)>>(mut self, settings: I) -> Self {
		self.settings.extend(settings);
		self
	}

	/// Builds the registry, resolving every public option value.
	///
	/// # Errors
	///
	/// Conversion is eager: one converter rejecting its stored text fails the
	/// whole build with [`RegistryError::Conversion`], and no lookup is served,
	/// not even for unrelated valid names. Under [`DuplicatePolicy::Reject`] a
	/// repeated option name fails with [`RegistryError::DuplicateName`].
	pub fn build(self) -> Result<OptionDetails, RegistryError> {
		let names = NameIndex::build(&self.groups, self.policy)?;
		let settings = SettingIndex::new(self.settings);

		tracing::debug!(
			domain = "options",
			groups = self.groups.len(),
			options = names.len(),
			settings = settings.len(),
			collisions = names.collisions().len(),
			policy = ?self.policy,
			"built option details",
		);

		Ok(OptionDetails { names, settings })
	}
}
