//! Decorative effects: grid background, status ping, glass glow.

use dioxus::prelude::*;
use nexus_core::effects::{EffectVisual, effect_visual};
use nexus_types::EffectKind;

/// Render a decorative effect. Unknown kinds render nothing.
#[component]
pub fn SignatureEffect(
    effect: EffectKind,
    /// Extra classes appended to the effect's root element.
    #[props(default = String::new())]
    class: String,
) -> Element {
    let Some(visual) = effect_visual(&effect, &class) else {
        return rsx! {};
    };

    match visual {
        EffectVisual::Grid(spec) => rsx! {
            div { class: "{spec.class}", style: "{spec.style}" }
        },
        EffectVisual::StatusPing { wrapper, halo, dot } => rsx! {
            span { class: "{wrapper.class}",
                span { class: "{halo.class}" }
                span { class: "{dot.class}" }
            }
        },
        EffectVisual::Glow(spec) => rsx! {
            div { class: "{spec.class}", style: "{spec.style}" }
        },
    }
}
