//! DOM visibility bindings
//!
//! Backs the tracker's `VisibilitySource` seam with the browser's
//! `IntersectionObserver`, and wraps it in a hook that subscribes on mount
//! and releases the observer on unmount.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use dioxus::prelude::*;
use nexus_core::{SubscriptionHandle, VisibilityCallback, VisibilitySignal, VisibilitySource};
use nexus_types::{ObserverConfig, SectionId};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

// ─────────────────────────────────────────────────────────────────────────────
// IntersectionObserver source
// ─────────────────────────────────────────────────────────────────────────────

/// A live observer plus the JS closure it calls back into.
///
/// The closure must outlive the observer, so both are dropped together.
struct Observation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

/// One `IntersectionObserver` per subscription, targets looked up by id.
#[derive(Default)]
pub struct DomVisibilitySource {
    observations: HashMap<SubscriptionHandle, Observation>,
    next_handle: u32,
}

/// Convert a batch of observer entries into tracker signals.
fn signals_from_entries(entries: &js_sys::Array) -> Vec<VisibilitySignal> {
    entries
        .iter()
        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
        .map(|entry| VisibilitySignal {
            section: SectionId::new(entry.target().id()),
            is_intersecting: entry.is_intersecting(),
        })
        .collect()
}

impl VisibilitySource for DomVisibilitySource {
    fn register(
        &mut self,
        regions: &[SectionId],
        config: &ObserverConfig,
        mut on_change: VisibilityCallback,
    ) -> SubscriptionHandle {
        let handle = SubscriptionHandle::new(self.next_handle);
        self.next_handle += 1;

        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            let batch = signals_from_entries(&entries);
            if !batch.is_empty() {
                on_change(&batch);
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_root_margin(&config.root_margin());
        options.set_threshold(&JsValue::from_f64(config.threshold));

        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(err) => {
                tracing::warn!(?err, "IntersectionObserver unavailable, regions not tracked");
                return handle;
            }
        };

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            tracing::warn!("no document, regions not tracked");
            return handle;
        };

        for id in regions {
            match document.get_element_by_id(id.as_str()) {
                Some(element) => observer.observe(&element),
                None => tracing::debug!(region = %id, "region not rendered, not observed"),
            }
        }

        self.observations.insert(
            handle,
            Observation {
                observer,
                _callback: callback,
            },
        );
        handle
    }

    fn dispose(&mut self, handle: SubscriptionHandle) {
        if let Some(observation) = self.observations.remove(&handle) {
            observation.observer.disconnect();
        }
    }
}

impl Drop for DomVisibilitySource {
    fn drop(&mut self) {
        for (_, observation) in self.observations.drain() {
            observation.observer.disconnect();
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Hooks
// ─────────────────────────────────────────────────────────────────────────────

type PendingSubscription = (Vec<SectionId>, ObserverConfig, VisibilityCallback);

/// Observe `regions` for the lifetime of the calling component.
///
/// Registration waits until after the first render so the target elements
/// exist. Arguments passed on later renders are ignored.
pub fn use_visibility(regions: Vec<SectionId>, config: ObserverConfig, on_change: VisibilityCallback) {
    let source = use_hook(|| Rc::new(RefCell::new(DomVisibilitySource::default())));
    let handle = use_hook(|| Rc::new(Cell::new(None::<SubscriptionHandle>)));
    let pending: Rc<RefCell<Option<PendingSubscription>>> =
        use_hook(move || Rc::new(RefCell::new(Some((regions, config, on_change)))));

    {
        let source = Rc::clone(&source);
        let handle = Rc::clone(&handle);
        use_effect(move || {
            let Some((regions, config, on_change)) = pending.borrow_mut().take() else {
                return;
            };
            let registered = source.borrow_mut().register(&regions, &config, on_change);
            handle.set(Some(registered));
        });
    }

    use_drop(move || {
        if let Some(registered) = handle.take() {
            source.borrow_mut().dispose(registered);
        }
    });
}

thread_local! {
    static NEXT_DOM_ID: Cell<u32> = const { Cell::new(0) };
}

/// Unique element id for observed wrappers (WASM is single-threaded).
pub fn next_dom_id(prefix: &str) -> String {
    let n = NEXT_DOM_ID.with(|next| {
        let n = next.get();
        next.set(n + 1);
        n
    });
    format!("{prefix}-{n}")
}
