//! Skill — a markdown document published verbatim for agents and humans.

use std::fmt;
use std::str::FromStr;

use crate::error::{OpenShipError, ValidationError};

/// Content type every skill document is served with.
pub const MARKDOWN_CONTENT_TYPE: &str = "text/markdown; charset=utf-8";

/// File holding a skill's body inside its directory.
pub const SKILL_FILE_NAME: &str = "SKILL.md";

/// Skill published by the site out of the box.
pub const DEFAULT_SKILL: &str = "openship1";

/// Validated skill identifier.
///
/// Only ASCII alphanumerics, `-` and `_` are allowed, so a name can never
/// escape the skills directory once joined onto a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SkillName(String);

impl SkillName {
    /// Validate and wrap a name.
    ///
    /// # Errors
    ///
    /// Returns [`OpenShipError::Validation`] when `name` is empty or holds a
    /// character outside `[A-Za-z0-9_-]`.
    pub fn new(name: impl Into<String>) -> Result<Self, OpenShipError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if let Some(found) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(ValidationError::InvalidName { name, found }.into());
        }
        Ok(Self(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SkillName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SkillName {
    type Err = OpenShipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A skill document and its untouched markdown body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: SkillName,
    pub markdown: String,
}
