//! Scroll-triggered entrance animations.

use dioxus::prelude::*;
use nexus_core::VisibilitySignal;
use nexus_core::effects::{RevealLatch, RevealMotion};
use nexus_types::{ObserverConfig, SectionId};

use crate::observer::{next_dom_id, use_visibility};

/// Latch that flips the first time the element `dom_id` becomes visible.
pub fn use_reveal_once(dom_id: &str) -> Signal<RevealLatch> {
    let mut latch = use_signal(RevealLatch::new);

    use_visibility(
        vec![SectionId::new(dom_id)],
        ObserverConfig::FULL_VIEWPORT,
        Box::new(move |batch: &[VisibilitySignal]| {
            let visible = batch.iter().any(|s| s.is_intersecting);
            if !visible || latch.peek().is_revealed() {
                return;
            }
            let _ = latch.try_write().map(|mut l| l.observe(true));
        }),
    );

    latch
}

/// Fade and rise into place on first view.
#[component]
pub fn Reveal(
    /// Seconds to wait before animating, for staggering siblings.
    #[props(default = 0.0)]
    delay: f64,
    #[props(default = String::new())] class: String,
    children: Element,
) -> Element {
    let dom_id = use_hook(|| next_dom_id("reveal"));
    let latch = use_reveal_once(&dom_id);
    let style = RevealMotion::new(delay).style(latch.read().is_revealed());

    rsx! {
        div { id: "{dom_id}", class: "reveal {class}", style: "{style}", {children} }
    }
}
