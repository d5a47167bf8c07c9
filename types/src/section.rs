//! Section identifiers and navigation items.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a tracked page region.
///
/// Doubles as the DOM id of the region and as the in-page anchor target
/// (`#intro`, `#platform`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Anchor href for in-page navigation.
    ///
    /// ```
    /// use nexus_types::SectionId;
    /// assert_eq!(SectionId::new("intro").anchor(), "#intro");
    /// ```
    pub fn anchor(&self) -> String {
        format!("#{}", self.0)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SectionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for SectionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SectionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A named region of the page, in page order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub label: String,
}

impl Section {
    pub fn new(id: impl Into<SectionId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// One entry of the navigation rail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub id: SectionId,
    pub label: String,
    pub is_active: bool,
}
