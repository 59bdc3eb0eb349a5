//! Name index over the public options of every supplied group.
//!
//! # Role
//!
//! Merges the descriptors of an ordered list of parsed groups into one
//! name-keyed table. Values are resolved while the table is built (multiplicity
//! normalized, converter applied), so lookups never convert or fail.
//!
//! # Invariants
//!
//! - Internal options never enter the table.
//! - A multi-valued option always resolves to a `List`, empty when it was never
//!   supplied.
//! - Group order decides duplicate names under [`DuplicatePolicy::FirstWins`]
//!   and [`DuplicatePolicy::LastWins`]; each duplicate is kept as a
//!   [`Collision`].

use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::descriptor::OptionDescriptor;
use crate::error::RegistryError;
use crate::group::{GroupInstance, GroupType};
use crate::value::OptionValue;

mod collision;


pub use collision::{Collision, DuplicatePolicy, Resolution};

/// One public option together with its owning instance and resolved value.
pub struct NameEntry {
	instance: Arc<dyn GroupInstance>,
	descriptor: OptionDescriptor,
	value: OptionValue,
}

impl NameEntry {
	/// Returns the group that declared this option.
	pub fn group(&self) -> GroupType {
		self.descriptor.group()
	}

	/// Returns the parsed instance the value was read from.
	pub fn instance(&self) -> &Arc<dyn GroupInstance> {
		&self.instance
	}

	/// Returns the resolved value.
	pub fn value(&self) -> &OptionValue {
		&self.value
	}
}

impl std::fmt::Debug for NameEntry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("NameEntry")
			.field("descriptor", &self.descriptor)
			.field("value", &self.value)
			.finish()
	}
}

/// Immutable name → option table.
#[derive(Debug, Default)]
pub struct NameIndex {
	table: Box<[NameEntry]>,
	by_name: FxHashMap<&'static str, usize>,
	collisions: Box<[Collision]>,
}

impl NameIndex {
	/// Builds the index from `groups`, earlier groups first.
	///
	/// The same instance supplied more than once is ingested once.
	pub fn build<'a, I>(groups: I, policy: DuplicatePolicy) -> Result<Self, RegistryError>
	where
		I: IntoIterator<Item = &'a Arc<dyn GroupInstance>>,
	{
		let mut table: Vec<NameEntry> = Vec::new();
		let mut by_name: FxHashMap<&'static str, usize> = FxHashMap::default();
		let mut collisions = Vec::new();
		let mut seen: FxHashSet<*const ()> = FxHashSet::default();

		for group in groups {
			if !seen.insert(Arc::as_ptr(group).cast::<()>()) {
				tracing::debug!(
					domain = "options",
					group = %group.group_type(),
					"skipping repeated group instance",
				);
				continue;
			}

			for descriptor in Arc::clone(group).descriptors() {
				if descriptor.is_internal() {
					continue;
				}

				let replace = match by_name.get(descriptor.name()).copied() {
					None => None,
					Some(slot) => {
						let existing = table[slot].group();
						let incoming = descriptor.group();
						let resolution = match policy {
							DuplicatePolicy::FirstWins => Resolution::KeptExisting,
							DuplicatePolicy::LastWins => Resolution::ReplacedExisting,
							DuplicatePolicy::Reject => {
								return Err(RegistryError::DuplicateName {
									name: descriptor.name(),
									existing,
									incoming,
								});
							}
						};
						tracing::debug!(
							domain = "options",
							name = descriptor.name(),
							%existing,
							%incoming,
							?resolution,
							"option name collision",
						);
						collisions.push(Collision {
							name: descriptor.name(),
							existing,
							incoming,
							resolution,
						});
						if resolution == Resolution::KeptExisting {
							continue;
						}
						Some(slot)
					}
				};

				let value = resolve(&descriptor)?;
				let entry = NameEntry {
					instance: Arc::clone(group),
					descriptor,
					value,
				};
				match replace {
					Some(slot) => table[slot] = entry,
					None => {
						by_name.insert(entry.descriptor.name(), table.len());
						table.push(entry);
					}
				}
			}
		}

		Ok(Self {
			table: table.into_boxed_slice(),
			by_name,
			collisions: collisions.into_boxed_slice(),
		})
	}

	/// Looks up the entry for a public option.
	#[inline]
	pub fn entry(&self, name: &str) -> Option<&NameEntry> {
		let slot = *self.by_name.get(name)?;
		Some(&self.table[slot])
	}

	/// Returns the group declaring `name`.
	pub fn group_of(&self, name: &str) -> Option<GroupType> {
		self.entry(name).map(NameEntry::group)
	}

	/// Returns the resolved value of `name`.
	pub fn value_of(&self, name: &str) -> Option<&OptionValue> {
		self.entry(name).map(NameEntry::value)
	}

	/// Returns true only for a known multi-valued option.
	pub fn allows_multiple(&self, name: &str) -> bool {
		self.entry(name)
			.is_some_and(|entry| entry.descriptor.allows_multiple())
	}

	/// Returns an iterator over option names in first-insertion order.
	pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.table.iter().map(|entry| entry.descriptor.name())
	}

	/// Returns recorded collisions for diagnostics.
	pub fn collisions(&self) -> &[Collision] {
		&self.collisions
	}

	pub fn len(&self) -> usize {
		self.table.len()
	}

	pub fn is_empty(&self) -> bool {
		self.table.is_empty()
	}
}

/// Resolves the value a lookup of `descriptor` reports.
fn resolve(descriptor: &OptionDescriptor) -> Result<OptionValue, RegistryError> {
	let raw = descriptor.raw_value();
	if descriptor.allows_multiple() {
		return Ok(match raw {
			OptionValue::List(values) => OptionValue::List(values),
			OptionValue::Null => OptionValue::List(Vec::new()),
			single => OptionValue::List(vec![single]),
		});
	}

	match (descriptor.converter(), raw) {
		(Some(converter), OptionValue::String(text)) => {
			converter.convert(&text).map_err(|source| {
				tracing::warn!(
					domain = "options",
					group = %descriptor.group(),
					name = descriptor.name(),
					expected = converter.type_description(),
					error = %source,
					"option value conversion failed",
				);
				RegistryError::Conversion {
					option: descriptor.name(),
					group: descriptor.group(),
					source,
				}
			})
		}
		(_, raw) => Ok(raw),
	}
}
