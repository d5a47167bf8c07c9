//! Site configuration loading and validation.

use nexus_types::{SectionId, SiteConfig};

use crate::error::ConfigError;
use crate::tracker::{SectionList, SectionTracker};

/// A validated `site.toml`.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub config: SiteConfig,
    sections: SectionList,
    default_section: SectionId,
}

impl Site {
    /// Parse and validate TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(text)?;
        Self::from_config(config)
    }

    pub fn from_config(config: SiteConfig) -> Result<Self, ConfigError> {
        let sections = SectionList::new(config.sections.clone())?;
        let default_section = match &config.default_section {
            Some(id) if sections.contains(id) => id.clone(),
            Some(id) => return Err(ConfigError::UnknownDefault(id.clone())),
            None => sections.first().id.clone(),
        };

        tracing::info!(
            brand = %config.brand,
            sections = sections.len(),
            default = %default_section,
            "site config loaded"
        );

        Ok(Self {
            config,
            sections,
            default_section,
        })
    }

    pub fn sections(&self) -> &SectionList {
        &self.sections
    }

    pub fn default_section(&self) -> &SectionId {
        &self.default_section
    }

    /// Fresh tracker focused on the default section.
    pub fn tracker(&self) -> SectionTracker {
        SectionTracker::focused_on(self.sections.clone(), self.default_section.clone())
    }
}
