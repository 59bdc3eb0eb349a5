//! Option declarations and the descriptors extracted from them.
//!
//! [`OptionDecl`] is the static input a group declares for each option.
//! [`extract`] binds those declarations to one parsed group instance and drops
//! every internal option, producing the [`OptionDescriptor`]s the name index is
//! built from.

use std::fmt;
use std::sync::Arc;

use crate::convert::Converter;
use crate::group::{GroupType, OptionGroup};
use crate::value::OptionValue;

/// Whether an option may be observed through the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
	/// Visible to name lookups once its group is supplied.
	#[default]
	Public,
	/// Excluded from every lookup, whatever its value.
	Internal,
}

/// Static declaration of one option of group `G`.
pub struct OptionDecl<G> {
	pub name: &'static str,
	/// Reads the raw stored value out of a parsed instance.
	pub accessor: fn(&G) -> OptionValue,
	pub converter: Option<&'static dyn Converter>,
	pub allows_multiple: bool,
	pub visibility: Visibility,
}

impl<G> OptionDecl<G> {
	/// Declares a public, single-valued option without a converter.
	pub const fn new(name: &'static str, accessor: fn(&G) -> OptionValue) -> Self {
		Self {
			name,
			accessor,
			converter: None,
			allows_multiple: false,
			visibility: Visibility::Public,
		}
	}

	/// Sets the converter applied to the option's textual value.
	pub const fn converter(mut self, converter: &'static dyn Converter) -> Self {
		self.converter = Some(converter);
		self
	}

	/// Marks the option as accepting multiple values.
	pub const fn multiple(mut self) -> Self {
		self.allows_multiple = true;
		self
	}

	/// Marks the option as internal.
	pub const fn internal(mut self) -> Self {
		self.visibility = Visibility::Internal;
		self
	}
}

impl<G> Clone for OptionDecl<G> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<G> Copy for OptionDecl<G> {}

impl<G> fmt::Debug for OptionDecl<G> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("OptionDecl")
			.field("name", &self.name)
			.field("allows_multiple", &self.allows_multiple)
			.field("visibility", &self.visibility)
			.finish()
	}
}

type ValueAccessor = Arc<dyn Fn() -> OptionValue + Send + Sync>;

/// Runtime record of one option bound to a parsed group instance.
#[derive(Clone)]
pub struct OptionDescriptor {
	name: &'static str,
	group: GroupType,
	accessor: ValueAccessor,
	converter: Option<&'static dyn Converter>,
	allows_multiple: bool,
	visibility: Visibility,
}

impl OptionDescriptor {
	/// Binds `decl` to the parsed `group` instance.
	pub fn new<G: OptionGroup>(decl: &OptionDecl<G>, group: &Arc<G>) -> Self {
		let instance = Arc::clone(group);
		let access = decl.accessor;
		Self {
			name: decl.name,
			group: GroupType::of::<G>(),
			accessor: Arc::new(move || access(&instance)),
			converter: decl.converter,
			allows_multiple: decl.allows_multiple,
			visibility: decl.visibility,
		}
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Returns the group that declared this option.
	pub fn group(&self) -> GroupType {
		self.group
	}

	pub fn converter(&self) -> Option<&'static dyn Converter> {
		self.converter
	}

	pub fn allows_multiple(&self) -> bool {
		self.allows_multiple
	}

	pub fn is_internal(&self) -> bool {
		self.visibility == Visibility::Internal
	}

	/// Reads the stored value before conversion or normalization.
	pub fn raw_value(&self) -> OptionValue {
		(self.accessor)()
	}
}

impl fmt::Debug for OptionDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("OptionDescriptor")
			.field("name", &self.name)
			.field("group", &self.group)
			.field("has_converter", &self.converter.is_some())
			.field("allows_multiple", &self.allows_multiple)
			.field("visibility", &self.visibility)
			.finish()
	}
}

/// Produces one descriptor per public option declared by `G`.
///
/// Internal options are dropped here so no later stage can observe them.
pub fn extract<G: OptionGroup>(group: &Arc<G>) -> Vec<OptionDescriptor> {
	G::declarations()
		.iter()
		.filter(|decl| {
			let public = decl.visibility == Visibility::Public;
			if !public {
				tracing::trace!(
					domain = "options",
					group = G::NAME,
					name = decl.name,
					"dropping internal option",
				);
			}
			public
		})
		.map(|decl| OptionDescriptor::new(decl, group))
		.collect()
}
