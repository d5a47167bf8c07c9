//! Validated, ordered section list.

use std::collections::HashSet;

use nexus_types::{Section, SectionId};

use crate::error::ConfigError;

/// Non-empty list of sections with unique ids, in page order.
///
/// Built once at startup and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionList {
    sections: Vec<Section>,
}

impl SectionList {
    pub fn new(sections: Vec<Section>) -> Result<Self, ConfigError> {
        if sections.is_empty() {
            return Err(ConfigError::NoSections);
        }

        let mut seen = HashSet::with_capacity(sections.len());
        for section in &sections {
            if !seen.insert(&section.id) {
                return Err(ConfigError::DuplicateSection(section.id.clone()));
            }
        }

        Ok(Self { sections })
    }

    /// First section in page order.
    pub fn first(&self) -> &Section {
        // Non-empty by construction
        &self.sections[0]
    }

    pub fn get(&self, id: &SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| &s.id == id)
    }

    pub fn contains(&self, id: &SectionId) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> Vec<SectionId> {
        self.sections.iter().map(|s| s.id.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
