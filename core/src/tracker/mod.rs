//! Active-section tracking
//!
//! Derives the single focused section from visibility signals reported by
//! the view layer. Only "entered" signals move the focus; "left" signals
//! are ignored, so the focus is never cleared. Within one batch the last
//! entered signal wins.

mod sections;
mod source;
mod viewport;

#[cfg(test)]
mod tracker_tests;

pub use sections::SectionList;
pub use source::{SubscriptionHandle, VisibilityCallback, VisibilitySource};
pub use viewport::{Region, SimulatedViewport};

use nexus_types::{NavItem, SectionId};

use crate::error::ConfigError;

/// A section's region crossed the observation band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilitySignal {
    pub section: SectionId,
    pub is_intersecting: bool,
}

impl VisibilitySignal {
    pub fn entered(section: impl Into<SectionId>) -> Self {
        Self {
            section: section.into(),
            is_intersecting: true,
        }
    }

    pub fn left(section: impl Into<SectionId>) -> Self {
        Self {
            section: section.into(),
            is_intersecting: false,
        }
    }
}

/// Holds the focus state for a fixed section list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTracker {
    sections: SectionList,
    current: SectionId,
}

impl SectionTracker {
    /// Tracker focused on the first section.
    pub fn new(sections: SectionList) -> Self {
        let current = sections.first().id.clone();
        Self { sections, current }
    }

    /// Tracker focused on `default` until the first signal arrives.
    pub fn with_default(sections: SectionList, default: SectionId) -> Result<Self, ConfigError> {
        if !sections.contains(&default) {
            return Err(ConfigError::UnknownDefault(default));
        }
        Ok(Self {
            sections,
            current: default,
        })
    }

    /// Tracker for a default already checked against `sections`.
    pub(crate) fn focused_on(sections: SectionList, default: SectionId) -> Self {
        debug_assert!(sections.contains(&default));
        Self {
            sections,
            current: default,
        }
    }

    /// Currently focused section id.
    pub fn current(&self) -> &SectionId {
        &self.current
    }

    /// Region ids to hand to a [`VisibilitySource`].
    pub fn watched_regions(&self) -> Vec<SectionId> {
        self.sections.ids()
    }

    /// Focus a batch would produce, if it differs from the current one.
    ///
    /// Signals are applied in delivery order; unknown sections and "left"
    /// signals are skipped.
    pub fn resolve_batch<'a>(&self, signals: &'a [VisibilitySignal]) -> Option<&'a SectionId> {
        signals
            .iter()
            .filter(|s| s.is_intersecting && self.sections.contains(&s.section))
            .map(|s| &s.section)
            .last()
            .filter(|next| **next != self.current)
    }

    /// Apply a single signal. Returns true if the focus changed.
    pub fn handle_signal(&mut self, signal: &VisibilitySignal) -> bool {
        self.handle_batch(std::slice::from_ref(signal))
    }

    /// Apply a batch of signals in delivery order. Returns true if the
    /// focus changed.
    pub fn handle_batch(&mut self, signals: &[VisibilitySignal]) -> bool {
        let Some(next) = self.resolve_batch(signals).cloned() else {
            return false;
        };
        tracing::debug!(from = %self.current, to = %next, "section focus changed");
        self.current = next;
        true
    }

    /// Navigation entries in page order with the active flag set.
    pub fn nav_items(&self) -> Vec<NavItem> {
        self.sections
            .iter()
            .map(|section| NavItem {
                id: section.id.clone(),
                label: section.label.clone(),
                is_active: section.id == self.current,
            })
            .collect()
    }
}
