//! Duplicate-name policy and collision records.

use crate::group::GroupType;

/// How the name index settles two groups declaring the same option name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
	/// Keep the option of the group supplied first.
	#[default]
	FirstWins,
	/// Overwrite with the option of the group supplied last.
	LastWins,
	/// Fail construction.
	Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
	/// Existing binding kept; incoming dropped.
	KeptExisting,
	/// Existing binding replaced by incoming.
	ReplacedExisting,
}

/// A name declared by more than one supplied group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collision {
	pub name: &'static str,
	pub existing: GroupType,
	pub incoming: GroupType,
	pub resolution: Resolution,
}
