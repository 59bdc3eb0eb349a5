//! Read-only registry of option details.
//!
//! Reconciles the options of independently declared, already-parsed option
//! groups and a set of externally resolved, label-addressed settings into one
//! lookup surface.
//!
//! # Modules
//!
//! - [`descriptor`] - static option declarations and descriptor extraction
//! - [`index`] - name index merging all supplied groups
//! - [`settings`] - label-keyed external settings
//! - [`details`] - the [`OptionDetails`] facade and its builder
//! - [`convert`] - per-option value converters
//!
//! # Lifecycle
//!
//! A registry is built once from finished inputs, then only read. Lookups never
//! fail: unknown names, internal options and unknown labels all report `None`
//! (or `false` for [`OptionDetails::allows_multiple_values`]).

pub mod convert;
pub mod descriptor;
pub mod details;
mod error;
pub mod group;
pub mod index;
pub mod settings;
mod value;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use convert::{BoolConverter, ConversionError, Converter, IntConverter, OptionalConverter};
pub use descriptor::{OptionDecl, OptionDescriptor, Visibility};
pub use details::{OptionDetails, OptionDetailsBuilder, ValueKey};
pub use error::RegistryError;
pub use group::{GroupInstance, GroupType, OptionGroup};
pub use index::{Collision, DuplicatePolicy, NameEntry, NameIndex, Resolution};
pub use knob_label::{Label, LabelError};
pub use settings::SettingIndex;
pub use value::OptionValue;
