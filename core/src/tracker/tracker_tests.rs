//! Tests for the section tracker
//!
//! Covers focus initialization, entry-only updates, last-wins batches and
//! the full subscribe/scroll/dispose cycle against a simulated page.

use std::cell::RefCell;
use std::rc::Rc;

use nexus_types::{ObserverConfig, Section, SectionId};

use super::{
    SectionList, SectionTracker, SimulatedViewport, VisibilitySignal, VisibilitySource,
};
use crate::error::ConfigError;

fn sections() -> SectionList {
    SectionList::new(vec![
        Section::new("intro", "Overview"),
        Section::new("platform", "Platform"),
        Section::new("pricing", "Scale & Access"),
    ])
    .unwrap()
}

fn page() -> SimulatedViewport {
    SimulatedViewport::new(900.0)
        .with_region("intro", 900.0)
        .with_region("platform", 1400.0)
        .with_region("pricing", 1000.0)
}

fn ids(names: &[&str]) -> Vec<SectionId> {
    names.iter().map(|n| SectionId::new(*n)).collect()
}

/// Subscribe a shared tracker to the viewport the way the web front end does.
fn subscribe(
    viewport: &mut SimulatedViewport,
    tracker: &Rc<RefCell<SectionTracker>>,
) -> super::SubscriptionHandle {
    let regions = tracker.borrow().watched_regions();
    let target = Rc::clone(tracker);
    viewport.register(
        &regions,
        &ObserverConfig::CENTER_BAND,
        Box::new(move |batch: &[VisibilitySignal]| {
            target.borrow_mut().handle_batch(batch);
        }),
    )
}

#[test]
fn test_initial_focus_is_first_section() {
    let tracker = SectionTracker::new(sections());
    assert_eq!(tracker.current(), &SectionId::new("intro"));
}

#[test]
fn test_initial_focus_uses_configured_default() {
    let tracker = SectionTracker::with_default(sections(), "pricing".into()).unwrap();
    assert_eq!(tracker.current(), &SectionId::new("pricing"));
}

#[test]
fn test_unknown_default_is_rejected() {
    let result = SectionTracker::with_default(sections(), "careers".into());
    assert!(matches!(result, Err(ConfigError::UnknownDefault(id)) if id == "careers"));
}

#[test]
fn test_entered_signal_moves_focus() {
    let mut tracker = SectionTracker::new(sections());

    assert!(tracker.handle_signal(&VisibilitySignal::entered("pricing")));
    assert_eq!(tracker.current(), &SectionId::new("pricing"));

    // Any prior value is overwritten, including jumps backwards
    assert!(tracker.handle_signal(&VisibilitySignal::entered("intro")));
    assert_eq!(tracker.current(), &SectionId::new("intro"));

    // Re-entering the focused section is not a change
    assert!(!tracker.handle_signal(&VisibilitySignal::entered("intro")));
}

#[test]
fn test_left_signal_never_changes_focus() {
    let mut tracker = SectionTracker::new(sections());
    tracker.handle_signal(&VisibilitySignal::entered("platform"));

    for id in ["intro", "platform", "pricing"] {
        assert!(!tracker.handle_signal(&VisibilitySignal::left(id)));
        assert_eq!(tracker.current(), &SectionId::new("platform"));
    }
}

#[test]
fn test_last_entered_in_batch_wins() {
    let mut tracker = SectionTracker::new(sections());
    let batch = [
        VisibilitySignal::entered("platform"),
        VisibilitySignal::entered("pricing"),
        VisibilitySignal::left("platform"),
    ];
    assert!(tracker.handle_batch(&batch));
    assert_eq!(tracker.current(), &SectionId::new("pricing"));

    // Delivery order, not page order, decides
    let batch = [
        VisibilitySignal::entered("pricing"),
        VisibilitySignal::entered("intro"),
    ];
    assert!(tracker.handle_batch(&batch));
    assert_eq!(tracker.current(), &SectionId::new("intro"));
}

#[test]
fn test_batch_ending_on_current_focus_is_not_a_change() {
    let tracker = SectionTracker::new(sections());
    let batch = [
        VisibilitySignal::entered("pricing"),
        VisibilitySignal::entered("intro"),
    ];
    assert_eq!(tracker.resolve_batch(&batch), None);
}

#[test]
fn test_resolved_focus_borrows_only_the_batch() {
    let mut tracker = SectionTracker::new(sections());
    let batch = vec![VisibilitySignal::entered("platform")];

    // The resolved id outlives a mutation of the tracker
    let next = tracker.resolve_batch(&batch);
    tracker.handle_signal(&VisibilitySignal::entered("pricing"));
    assert_eq!(next, Some(&SectionId::new("platform")));
    assert_eq!(tracker.current(), &SectionId::new("pricing"));
}

#[test]
fn test_unknown_section_signal_is_ignored() {
    let mut tracker = SectionTracker::new(sections());
    assert!(!tracker.handle_signal(&VisibilitySignal::entered("careers")));
    assert_eq!(tracker.current(), &SectionId::new("intro"));
}

#[test]
fn test_nav_items_follow_focus() {
    let mut tracker = SectionTracker::new(sections());
    tracker.handle_signal(&VisibilitySignal::entered("platform"));

    let items = tracker.nav_items();
    let summary: Vec<_> = items
        .iter()
        .map(|item| (item.id.as_str(), item.label.as_str(), item.is_active))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("intro", "Overview", false),
            ("platform", "Platform", true),
            ("pricing", "Scale & Access", false),
        ]
    );
}

#[test]
fn test_scrolling_down_and_back_up() {
    let mut viewport = page();
    let tracker = Rc::new(RefCell::new(SectionTracker::new(sections())));
    subscribe(&mut viewport, &tracker);

    let mut seen = vec![tracker.borrow().current().clone()];
    for y in (0..=2400).step_by(100) {
        viewport.scroll_to(y as f64);
        let current = tracker.borrow().current().clone();
        if seen.last() != Some(&current) {
            seen.push(current);
        }
    }
    assert_eq!(seen, ids(&["intro", "platform", "pricing"]));

    let mut seen = vec![tracker.borrow().current().clone()];
    for y in (0..=2400).rev().step_by(100) {
        viewport.scroll_to(y as f64);
        let current = tracker.borrow().current().clone();
        if seen.last() != Some(&current) {
            seen.push(current);
        }
    }
    assert_eq!(seen, ids(&["pricing", "platform", "intro"]));
}

#[test]
fn test_anchor_jump_focuses_target() {
    let mut viewport = page();
    let tracker = Rc::new(RefCell::new(SectionTracker::new(sections())));
    subscribe(&mut viewport, &tracker);

    viewport.scroll_into_center(&"pricing".into());
    assert_eq!(tracker.borrow().current(), &SectionId::new("pricing"));
}

#[test]
fn test_initial_registration_picks_section_under_midline() {
    let mut viewport = page();
    viewport.scroll_to(1200.0);

    let tracker = Rc::new(RefCell::new(SectionTracker::new(sections())));
    subscribe(&mut viewport, &tracker);
    assert_eq!(tracker.borrow().current(), &SectionId::new("platform"));
}

#[test]
fn test_focus_freezes_after_dispose() {
    let mut viewport = page();
    let tracker = Rc::new(RefCell::new(SectionTracker::new(sections())));
    let handle = subscribe(&mut viewport, &tracker);

    viewport.scroll_to(1200.0);
    assert_eq!(tracker.borrow().current(), &SectionId::new("platform"));

    viewport.dispose(handle);
    viewport.scroll_to(2400.0);
    assert_eq!(tracker.borrow().current(), &SectionId::new("platform"));
}

#[test]
fn test_missing_section_leaves_focus_stale() {
    // Pricing never rendered
    let mut viewport = SimulatedViewport::new(900.0)
        .with_region("intro", 900.0)
        .with_region("platform", 1400.0);
    let tracker = Rc::new(RefCell::new(SectionTracker::new(sections())));
    subscribe(&mut viewport, &tracker);

    viewport.scroll_to(10_000.0);
    assert_eq!(tracker.borrow().current(), &SectionId::new("platform"));
}

#[test]
fn test_removed_section_stops_reporting() {
    let mut viewport = page();
    let tracker = Rc::new(RefCell::new(SectionTracker::new(sections())));
    subscribe(&mut viewport, &tracker);

    viewport.scroll_to(1200.0);
    viewport.remove_region(&"pricing".into());
    viewport.scroll_to(2400.0);
    assert_eq!(tracker.borrow().current(), &SectionId::new("platform"));
}
