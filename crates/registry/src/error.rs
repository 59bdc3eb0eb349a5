use crate::convert::ConversionError;
use crate::group::GroupType;

/// Failures while constructing a registry.
///
/// Lookups on a constructed registry never fail; unknown keys report `None`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RegistryError {
	/// A declared converter rejected the option's stored text.
	#[error("option '{option}' of {group}: {source}")]
	Conversion {
		option: &'static str,
		group: GroupType,
		#[source]
		source: ConversionError,
	},
	/// Two groups declare the same name under [`DuplicatePolicy::Reject`].
	///
	/// [`DuplicatePolicy::Reject`]: crate::DuplicatePolicy::Reject
	#[error("option '{name}' declared by both {existing} and {incoming}")]
	DuplicateName {
		name: &'static str,
		existing: GroupType,
		incoming: GroupType,
	},
}
