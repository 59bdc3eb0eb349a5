//! Option groups and their identity.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::descriptor::{self, OptionDecl, OptionDescriptor};

/// A bundle of related options parsed together as one unit.
///
/// Implementors are plain structs filled in by the options parser. Each one
/// declares its options in a `'static` table instead of having them discovered
/// at runtime.
///
/// ```ignore
/// struct CacheOptions {
///     max_entries: i64,
/// }
///
/// impl OptionGroup for CacheOptions {
///     const NAME: &'static str = "CacheOptions";
///
///     fn declarations() -> &'static [OptionDecl<Self>] {
///         const DECLS: &[OptionDecl<CacheOptions>] =
///             &[OptionDecl::new("max_entries", |o: &CacheOptions| o.max_entries.into())];
///         DECLS
///     }
/// }
/// ```
pub trait OptionGroup: Send + Sync + 'static {
	/// Name reported for this group in diagnostics.
	const NAME: &'static str;

	/// Every option this group declares, internal ones included.
	fn declarations() -> &'static [OptionDecl<Self>]
	where
		Self: Sized;
}

/// Type-erased view of a parsed option group instance.
///
/// Implemented for every [`OptionGroup`]; the registry stores groups as
/// `Arc<dyn GroupInstance>` so heterogeneous groups share one list.
pub trait GroupInstance: Send + Sync {
	/// Returns the identity of the declaring group.
	fn group_type(&self) -> GroupType;

	/// Extracts the public descriptors of this instance.
	fn descriptors(self: Arc<Self>) -> Vec<OptionDescriptor>;
}

impl<G: OptionGroup> GroupInstance for G {
	fn group_type(&self) -> GroupType {
		GroupType::of::<G>()
	}

	fn descriptors(self: Arc<Self>) -> Vec<OptionDescriptor> {
		descriptor::extract(&self)
	}
}

/// Identity of an option group type.
///
/// Two values are equal when they name the same Rust type.
#[derive(Clone, Copy)]
pub struct GroupType {
	id: TypeId,
	name: &'static str,
}

impl GroupType {
	/// Returns the identity of group `G`.
	pub fn of<G: OptionGroup>() -> Self {
		Self {
			id: TypeId::of::<G>(),
			name: G::NAME,
		}
	}

	/// Returns the group's declared name.
	pub fn name(self) -> &'static str {
		self.name
	}

	/// Returns true if this is the identity of `G`.
	pub fn is<G: OptionGroup>(self) -> bool {
		self.id == TypeId::of::<G>()
	}
}

impl PartialEq for GroupType {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for GroupType {}

impl Hash for GroupType {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl fmt::Debug for GroupType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("GroupType").field(&self.name).finish()
	}
}

impl fmt::Display for GroupType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}
