//! Structured identifiers for externally resolved settings.
//!
//! A [`Label`] addresses a setting by repository, package and target name
//! rather than by a plain option name. Labels are produced from their canonical
//! text form:
//!
//! | Text | Repository | Package | Name |
//! |------|------------|---------|------|
//! | `//test:setting` | main | `test` | `setting` |
//! | `//tools/cc` | main | `tools/cc` | `cc` |
//! | `//:flag` | main | (root) | `flag` |
//! | `@@rules_cc//cc:compiler` | `rules_cc` | `cc` | `compiler` |
//!
//! Labels always render back in the fully qualified `//package:name` form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Structured identifier of an externally resolved setting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Label {
	repo: Option<Box<str>>,
	package: Box<str>,
	name: Box<str>,
}

/// Reasons a canonical label string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LabelError {
	#[error("label {0:?} must start with '//' or a repository prefix followed by '//'")]
	MissingPackageRoot(String),
	#[error("label {0:?} has an empty target name")]
	EmptyName(String),
	#[error("label {0:?} has a malformed package path")]
	InvalidPackage(String),
	#[error("label {label:?} contains invalid character {ch:?}")]
	InvalidChar { label: String, ch: char },
}

impl Label {
	/// Parses a label from its canonical text form.
	pub fn parse_canonical(text: &str) -> Result<Self, LabelError> {
		if let Some(ch) = text.chars().find(|c| c.is_whitespace()) {
			return Err(LabelError::InvalidChar {
				label: text.to_string(),
				ch,
			});
		}

		let (repo, rest) = split_repo(text);
		let Some(body) = rest.strip_prefix("//") else {
			return Err(LabelError::MissingPackageRoot(text.to_string()));
		};

		let (package, name) = match body.split_once(':') {
			Some((package, name)) => (package, name),
			None => (body, body.rsplit_once('/').map_or(body, |(_, last)| last)),
		};

		if package.starts_with('/') || package.ends_with('/') || package.contains("//") {
			return Err(LabelError::InvalidPackage(text.to_string()));
		}
		if name.is_empty() {
			return Err(LabelError::EmptyName(text.to_string()));
		}
		if name.contains(':') {
			return Err(LabelError::InvalidChar {
				label: text.to_string(),
				ch: ':',
			});
		}

		Ok(Self {
			repo: repo.map(Box::from),
			package: Box::from(package),
			name: Box::from(name),
		})
	}

	/// Returns the repository name, or `None` for the main repository.
	pub fn repo(&self) -> Option<&str> {
		self.repo.as_deref()
	}

	/// Returns the package path without leading slashes.
	pub fn package(&self) -> &str {
		&self.package
	}

	/// Returns the target name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns true if the label lives in the main repository.
	pub fn is_main_repo(&self) -> bool {
		self.repo.is_none()
	}
}

/// Splits off an `@repo` or `@@repo` prefix. An empty repository name refers
/// to the main repository.
fn split_repo(text: &str) -> (Option<&str>, &str) {
	let Some(stripped) = text.strip_prefix("@@").or_else(|| text.strip_prefix('@')) else {
		return (None, text);
	};
	match stripped.find("//") {
		Some(at) => {
			let repo = &stripped[..at];
			(Some(repo).filter(|r| !r.is_empty()), &stripped[at..])
		}
		None => (None, stripped),
	}
}

impl fmt::Display for Label {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if let Some(repo) = &self.repo {
			write!(f, "@@{repo}")?;
		}
		write!(f, "//{}:{}", self.package, self.name)
	}
}

impl FromStr for Label {
	type Err = LabelError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse_canonical(s)
	}
}

impl TryFrom<String> for Label {
	type Error = LabelError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::parse_canonical(&value)
	}
}

impl From<Label> for String {
	fn from(label: Label) -> Self {
		label.to_string()
	}
}
