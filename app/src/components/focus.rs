//! Active-section focus shared through context.
//!
//! The landing page installs the provider once; the navigation rail reads
//! the nav items and re-renders whenever the focus moves.

use std::rc::Rc;

use dioxus::prelude::*;
use nexus_core::{SectionTracker, Site, VisibilitySignal};
use nexus_types::NavItem;

use crate::observer::use_visibility;

/// Handle to the page's focus state.
///
/// Access via `use_focus_tracker()` from any component below the provider.
#[derive(Clone, Copy)]
pub struct FocusTracker {
    tracker: Signal<SectionTracker>,
}

impl FocusTracker {
    fn new(tracker: SectionTracker) -> Self {
        Self {
            tracker: Signal::new(tracker),
        }
    }

    /// Nav entries in page order with the active flag set.
    pub fn nav_items(&self) -> Vec<NavItem> {
        self.tracker.read().nav_items()
    }

    /// Apply a visibility batch. Subscribers are only notified when the
    /// focus actually moves.
    fn apply(&mut self, batch: &[VisibilitySignal]) {
        if self.tracker.peek().resolve_batch(batch).is_none() {
            return;
        }
        // try_write: the signal may already be dropped if the page unmounted
        let _ = self.tracker.try_write().map(|mut t| t.handle_batch(batch));
    }
}

/// Site configuration shared through context.
pub fn use_site_provider(site: Rc<Site>) -> Rc<Site> {
    use_context_provider(move || site)
}

pub fn use_site() -> Rc<Site> {
    use_context::<Rc<Site>>()
}

/// Install the focus tracker and subscribe it to the page sections.
///
/// Call this once in the component that renders the tracked sections.
pub fn use_focus_tracker_provider(site: &Site) -> FocusTracker {
    let focus = use_context_provider(|| FocusTracker::new(site.tracker()));

    let mut target = focus;
    use_visibility(
        site.sections().ids(),
        site.config.tracker,
        Box::new(move |batch: &[VisibilitySignal]| target.apply(batch)),
    );

    focus
}

/// Get the focus tracker from context.
pub fn use_focus_tracker() -> FocusTracker {
    use_context::<FocusTracker>()
}
