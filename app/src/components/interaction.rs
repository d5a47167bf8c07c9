//! Interaction wrappers: marquee, clip-reveal, hover-lift.

use dioxus::prelude::*;
use nexus_core::effects::{
    HoverLift, InteractionVisual, MarqueeSpec, clip_reveal_style, interaction_visual,
};
use nexus_types::InteractionKind;

use super::reveal::use_reveal_once;
use crate::observer::next_dom_id;

/// Wrap content in an interaction. Unknown kinds render the content
/// unstyled.
#[component]
pub fn SignatureInteraction(
    kind: InteractionKind,
    #[props(default = String::new())] class: String,
    /// Marquee loop length in seconds.
    speed: Option<f64>,
    children: Element,
) -> Element {
    match interaction_visual(&kind, &class, speed) {
        InteractionVisual::Marquee(spec) => rsx! {
            Marquee { spec, {children} }
        },
        InteractionVisual::ClipReveal { class } => rsx! {
            ClipReveal { class, {children} }
        },
        InteractionVisual::HoverLift { class } => rsx! {
            HoverLiftPanel { class, {children} }
        },
        InteractionVisual::Unstyled { class } => rsx! {
            div { class: "{class}", {children} }
        },
    }
}

#[component]
fn Marquee(spec: MarqueeSpec, children: Element) -> Element {
    let container = spec.container();
    let track = spec.track();

    rsx! {
        div { class: "{container.class}", style: "{container.style}",
            div { class: "{track.class}", style: "{track.style}",
                for copy in 0..spec.copies() {
                    div { key: "{copy}", class: "marquee-copy", {children.clone()} }
                }
            }
        }
    }
}

#[component]
fn ClipReveal(class: String, children: Element) -> Element {
    let dom_id = use_hook(|| next_dom_id("clip"));
    let latch = use_reveal_once(&dom_id);
    let style = clip_reveal_style(latch.read().is_revealed());

    rsx! {
        div { id: "{dom_id}", class: "{class}", style: "{style}", {children} }
    }
}

#[component]
fn HoverLiftPanel(class: String, children: Element) -> Element {
    let mut lift = use_signal(HoverLift::new);
    let style = lift.read().style();

    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            onmouseenter: move |_| lift.write().enter(),
            onmouseleave: move |_| lift.write().leave(),
            {children}
        }
    }
}
