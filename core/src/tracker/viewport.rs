//! Geometric stand-in for the browser's intersection facility.
//!
//! Models a vertical page of stacked regions and a scrollable viewport.
//! Every scroll or resize re-evaluates each live subscription and delivers
//! the regions whose intersection state flipped, in observation order,
//! as a single batch. Used by the tracker tests and handy for reasoning
//! about root-margin settings without a browser.

use std::collections::BTreeMap;

use nexus_types::{ObserverConfig, SectionId};

use super::VisibilitySignal;
use super::source::{SubscriptionHandle, VisibilityCallback, VisibilitySource};

/// A rectangular page region, in page coordinates (pixels from the top).
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub id: SectionId,
    pub top: f64,
    pub height: f64,
}

impl Region {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

struct Subscription {
    config: ObserverConfig,
    /// Observed region ids with their last reported state.
    observed: Vec<(SectionId, bool)>,
    on_change: VisibilityCallback,
}

pub struct SimulatedViewport {
    viewport_height: f64,
    scroll_y: f64,
    regions: Vec<Region>,
    subscriptions: BTreeMap<SubscriptionHandle, Subscription>,
    next_handle: u32,
}

impl SimulatedViewport {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            viewport_height: viewport_height.max(0.0),
            scroll_y: 0.0,
            regions: Vec::new(),
            subscriptions: BTreeMap::new(),
            next_handle: 0,
        }
    }

    /// Append a region directly below the last one.
    pub fn with_region(mut self, id: impl Into<SectionId>, height: f64) -> Self {
        let top = self.page_height();
        self.regions.push(Region {
            id: id.into(),
            top,
            height,
        });
        self
    }

    /// Place a region at an explicit offset.
    pub fn with_region_at(mut self, id: impl Into<SectionId>, top: f64, height: f64) -> Self {
        self.regions.push(Region {
            id: id.into(),
            top,
            height,
        });
        self
    }

    /// Remove a region from the page. Subscriptions keep their last state
    /// for it and report nothing further.
    pub fn remove_region(&mut self, id: &SectionId) {
        self.regions.retain(|r| &r.id != id);
    }

    pub fn region(&self, id: &SectionId) -> Option<&Region> {
        self.regions.iter().find(|r| &r.id == id)
    }

    pub fn page_height(&self) -> f64 {
        self.regions
            .iter()
            .map(Region::bottom)
            .fold(0.0, f64::max)
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Scroll so that `y` is the top edge of the viewport, clamped to the
    /// scrollable range.
    /// Non-finite offsets are ignored.
    pub fn scroll_to(&mut self, y: f64) {
        if !y.is_finite() {
            return;
        }
        let max_scroll = (self.page_height() - self.viewport_height).max(0.0);
        self.scroll_y = y.clamp(0.0, max_scroll);
        self.notify();
    }

    /// Scroll so that the middle of `id` sits on the viewport midline.
    pub fn scroll_into_center(&mut self, id: &SectionId) {
        if let Some(region) = self.region(id) {
            let target = region.top + region.height / 2.0 - self.viewport_height / 2.0;
            self.scroll_to(target);
        }
    }

    pub fn resize(&mut self, viewport_height: f64) {
        self.viewport_height = viewport_height.max(0.0);
        self.scroll_to(self.scroll_y);
    }

    /// Observation band for `config` at the current scroll offset.
    ///
    /// Returns `None` when the margins leave no area at all.
    pub fn band(&self, config: &ObserverConfig) -> Option<(f64, f64)> {
        let top = self.scroll_y + self.viewport_height * config.top_margin_pct / 100.0;
        let bottom =
            self.scroll_y + self.viewport_height * (1.0 - config.bottom_margin_pct / 100.0);
        (top <= bottom).then_some((top, bottom))
    }

    fn is_intersecting(&self, id: &SectionId, config: &ObserverConfig) -> Option<bool> {
        let region = self.region(id)?;
        let Some((band_top, band_bottom)) = self.band(config) else {
            return Some(false);
        };
        if region.height <= 0.0 {
            return Some(false);
        }
        // Bottom edge exclusive so two stacked regions never share the midline
        if region.top > band_bottom || region.bottom() <= band_top {
            return Some(false);
        }
        let overlap = region.bottom().min(band_bottom) - region.top.max(band_top);
        Some(config.threshold <= 0.0 || overlap / region.height >= config.threshold)
    }

    fn notify(&mut self) {
        let handles: Vec<_> = self.subscriptions.keys().copied().collect();
        for handle in handles {
            let Some(mut sub) = self.subscriptions.remove(&handle) else {
                continue;
            };

            let mut batch = Vec::new();
            for (id, last) in sub.observed.iter_mut() {
                let Some(now) = self.is_intersecting(id, &sub.config) else {
                    continue;
                };
                if now != *last {
                    *last = now;
                    batch.push(VisibilitySignal {
                        section: id.clone(),
                        is_intersecting: now,
                    });
                }
            }

            if !batch.is_empty() {
                (sub.on_change)(&batch);
            }
            self.subscriptions.insert(handle, sub);
        }
    }
}

impl VisibilitySource for SimulatedViewport {
    fn register(
        &mut self,
        regions: &[SectionId],
        config: &ObserverConfig,
        mut on_change: VisibilityCallback,
    ) -> SubscriptionHandle {
        let handle = SubscriptionHandle::new(self.next_handle);
        self.next_handle += 1;

        let mut observed = Vec::new();
        let mut initial = Vec::new();
        for id in regions {
            let Some(now) = self.is_intersecting(id, config) else {
                tracing::debug!(region = %id, "region not on page, not observed");
                continue;
            };
            observed.push((id.clone(), now));
            initial.push(VisibilitySignal {
                section: id.clone(),
                is_intersecting: now,
            });
        }

        // Mirrors the browser: every observed target is reported once on registration
        if !initial.is_empty() {
            on_change(&initial);
        }

        self.subscriptions.insert(
            handle,
            Subscription {
                config: *config,
                observed,
                on_change,
            },
        );
        handle
    }

    fn dispose(&mut self, handle: SubscriptionHandle) {
        self.subscriptions.remove(&handle);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn page() -> SimulatedViewport {
        SimulatedViewport::new(800.0)
            .with_region("intro", 800.0)
            .with_region("platform", 1200.0)
            .with_region("pricing", 900.0)
    }

    fn recorder() -> (Rc<RefCell<Vec<Vec<VisibilitySignal>>>>, VisibilityCallback) {
        let batches = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&batches);
        let callback: VisibilityCallback =
            Box::new(move |batch: &[VisibilitySignal]| sink.borrow_mut().push(batch.to_vec()));
        (batches, callback)
    }

    fn ids(names: &[&str]) -> Vec<SectionId> {
        names.iter().map(|n| SectionId::new(*n)).collect()
    }

    #[test]
    fn test_center_band_is_midline() {
        let mut vp = page();
        assert_eq!(vp.band(&ObserverConfig::CENTER_BAND), Some((400.0, 400.0)));
        vp.scroll_to(1000.0);
        assert_eq!(vp.band(&ObserverConfig::CENTER_BAND), Some((1400.0, 1400.0)));
        assert_eq!(
            vp.band(&ObserverConfig::FULL_VIEWPORT),
            Some((1000.0, 1800.0))
        );
    }

    #[test]
    fn test_overlapping_margins_have_no_band() {
        let vp = page();
        let config = ObserverConfig {
            top_margin_pct: 60.0,
            bottom_margin_pct: 60.0,
            threshold: 0.0,
        };
        assert_eq!(vp.band(&config), None);
    }

    #[test]
    fn test_initial_batch_reports_every_observed_region() {
        let mut vp = page();
        let (batches, callback) = recorder();
        vp.register(
            &ids(&["intro", "platform", "pricing"]),
            &ObserverConfig::CENTER_BAND,
            callback,
        );

        let batches = batches.borrow();
        assert_eq!(batches.len(), 1);
        assert_eq!(
            batches[0],
            vec![
                VisibilitySignal::entered("intro"),
                VisibilitySignal::left("platform"),
                VisibilitySignal::left("pricing"),
            ]
        );
    }

    #[test]
    fn test_scroll_reports_only_changes() {
        let mut vp = page();
        let (batches, callback) = recorder();
        vp.register(
            &ids(&["intro", "platform", "pricing"]),
            &ObserverConfig::CENTER_BAND,
            callback,
        );

        // Midline moves from 400 to 450, still inside intro
        vp.scroll_to(50.0);
        assert_eq!(batches.borrow().len(), 1);

        // Midline at 1000, inside platform
        vp.scroll_to(600.0);
        assert_eq!(
            batches.borrow().last().unwrap(),
            &vec![
                VisibilitySignal::left("intro"),
                VisibilitySignal::entered("platform"),
            ]
        );
    }

    #[test]
    fn test_shared_edge_belongs_to_lower_region() {
        let mut vp = page();
        let (batches, callback) = recorder();
        vp.register(
            &ids(&["intro", "platform"]),
            &ObserverConfig::CENTER_BAND,
            callback,
        );

        // Midline exactly at 800, the intro/platform boundary
        vp.scroll_to(400.0);
        assert_eq!(
            batches.borrow().last().unwrap(),
            &vec![
                VisibilitySignal::left("intro"),
                VisibilitySignal::entered("platform"),
            ]
        );
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut vp = page();
        vp.scroll_to(-100.0);
        assert_eq!(vp.scroll_y(), 0.0);
        vp.scroll_to(1_000_000.0);
        assert_eq!(vp.scroll_y(), 2900.0 - 800.0);
    }

    #[test]
    fn test_non_finite_scroll_is_ignored() {
        let mut vp = page();
        let (batches, callback) = recorder();
        vp.register(
            &ids(&["intro", "platform", "pricing"]),
            &ObserverConfig::CENTER_BAND,
            callback,
        );
        vp.scroll_to(600.0);
        let delivered = batches.borrow().len();

        for y in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            vp.scroll_to(y);
            assert_eq!(vp.scroll_y(), 600.0);
        }
        assert_eq!(batches.borrow().len(), delivered);
        assert_eq!(vp.band(&ObserverConfig::CENTER_BAND), Some((1000.0, 1000.0)));
    }

    #[test]
    fn test_missing_region_is_never_observed() {
        let mut vp = page();
        let (batches, callback) = recorder();
        vp.register(
            &ids(&["intro", "careers"]),
            &ObserverConfig::CENTER_BAND,
            callback,
        );
        vp.scroll_to(2100.0);

        for batch in batches.borrow().iter() {
            assert!(batch.iter().all(|s| s.section != "careers"));
        }
    }

    #[test]
    fn test_registering_nothing_observable_delivers_nothing() {
        let mut vp = page();
        let (batches, callback) = recorder();
        vp.register(&ids(&["careers"]), &ObserverConfig::CENTER_BAND, callback);
        vp.scroll_to(1500.0);
        assert!(batches.borrow().is_empty());
    }

    #[test]
    fn test_dispose_stops_delivery() {
        let mut vp = page();
        let (batches, callback) = recorder();
        let handle = vp.register(
            &ids(&["intro", "platform"]),
            &ObserverConfig::CENTER_BAND,
            callback,
        );
        assert_eq!(vp.subscription_count(), 1);

        vp.dispose(handle);
        vp.dispose(handle);
        assert_eq!(vp.subscription_count(), 0);

        vp.scroll_to(600.0);
        assert_eq!(batches.borrow().len(), 1);
    }

    #[test]
    fn test_threshold_against_full_viewport() {
        let mut vp = page();
        let (batches, callback) = recorder();
        let config = ObserverConfig {
            threshold: 0.5,
            ..ObserverConfig::FULL_VIEWPORT
        };
        vp.register(&ids(&["platform"]), &config, callback);
        assert_eq!(batches.borrow()[0], vec![VisibilitySignal::left("platform")]);

        // 500 of 1200px visible: below half
        vp.scroll_to(500.0);
        assert_eq!(batches.borrow().len(), 1);

        // 700 of 1200px visible
        vp.scroll_to(700.0);
        assert_eq!(
            batches.borrow().last().unwrap(),
            &vec![VisibilitySignal::entered("platform")]
        );
    }

    #[test]
    fn test_resize_moves_midline() {
        let mut vp = page();
        let (batches, callback) = recorder();
        vp.register(
            &ids(&["intro", "platform"]),
            &ObserverConfig::CENTER_BAND,
            callback,
        );

        // Midline at 1000 for a 2000px tall viewport
        vp.resize(2000.0);
        assert_eq!(
            batches.borrow().last().unwrap(),
            &vec![
                VisibilitySignal::left("intro"),
                VisibilitySignal::entered("platform"),
            ]
        );
    }
}
