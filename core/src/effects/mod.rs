//! Presentational effect wrappers
//!
//! Every function here is a pure mapping from parameters to a visual
//! description (CSS classes plus inline style). The web front end turns the
//! description into markup; the animation itself is left to CSS.

pub mod interaction;
pub mod motion;

pub use interaction::{
    HoverLift, InteractionVisual, MarqueeSpec, RevealLatch, clip_reveal_style, hover_lift_style,
    interaction_visual,
};
pub use motion::RevealMotion;

use nexus_types::EffectKind;

/// Accent color shared by glow, hover and reveal styling.
pub const ACCENT_CYAN: &str = "#00f2ff";

/// Classes and inline style for one element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VisualSpec {
    pub class: String,
    pub style: String,
}

impl VisualSpec {
    pub fn new(class: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            style: style.into(),
        }
    }

    pub fn class_only(class: impl Into<String>) -> Self {
        Self::new(class, String::new())
    }
}

/// Join a base class list with caller-supplied extras.
///
/// ```
/// use nexus_core::effects::join_classes;
/// assert_eq!(join_classes("glass-glow", ""), "glass-glow");
/// assert_eq!(join_classes("glass-glow", " cta-glow "), "glass-glow cta-glow");
/// ```
pub fn join_classes(base: &str, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}

/// Rendered form of a decorative effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectVisual {
    /// Line grid behind the content, ignoring pointer events.
    Grid(VisualSpec),
    /// Static dot with a pulsing halo stacked under it.
    StatusPing {
        wrapper: VisualSpec,
        halo: VisualSpec,
        dot: VisualSpec,
    },
    /// Blurred accent blob.
    Glow(VisualSpec),
}

const GRID_STYLE: &str = "background-image: linear-gradient(#333 1px, transparent 1px), \
     linear-gradient(90deg, #333 1px, transparent 1px); background-size: 40px 40px;";

/// Describe a decorative effect. Unknown kinds render nothing.
pub fn effect_visual(kind: &EffectKind, extra_class: &str) -> Option<EffectVisual> {
    match kind {
        EffectKind::GridBackground => Some(EffectVisual::Grid(VisualSpec::new(
            join_classes("effect-grid", extra_class),
            GRID_STYLE,
        ))),
        EffectKind::StatusPing => Some(EffectVisual::StatusPing {
            wrapper: VisualSpec::class_only(join_classes("status-ping", extra_class)),
            halo: VisualSpec::class_only("status-ping-halo"),
            dot: VisualSpec::class_only("status-ping-dot"),
        }),
        EffectKind::GlassGlow => Some(EffectVisual::Glow(VisualSpec::new(
            join_classes("glass-glow", extra_class),
            format!("background: {ACCENT_CYAN};"),
        ))),
        EffectKind::Unknown(name) => {
            tracing::trace!(effect = %name, "unknown effect, rendering nothing");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_background() {
        let Some(EffectVisual::Grid(spec)) = effect_visual(&EffectKind::GridBackground, "") else {
            panic!("expected grid");
        };
        assert_eq!(spec.class, "effect-grid");
        assert!(spec.style.contains("background-size: 40px 40px"));
    }

    #[test]
    fn test_status_ping_has_halo_and_dot() {
        let visual = effect_visual(&EffectKind::StatusPing, "rail-ping");
        assert_eq!(
            visual,
            Some(EffectVisual::StatusPing {
                wrapper: VisualSpec::class_only("status-ping rail-ping"),
                halo: VisualSpec::class_only("status-ping-halo"),
                dot: VisualSpec::class_only("status-ping-dot"),
            })
        );
    }

    #[test]
    fn test_glow_uses_accent() {
        let Some(EffectVisual::Glow(spec)) = effect_visual(&EffectKind::GlassGlow, "") else {
            panic!("expected glow");
        };
        assert!(spec.style.contains(ACCENT_CYAN));
    }

    #[test]
    fn test_unknown_effect_renders_nothing() {
        assert_eq!(effect_visual(&EffectKind::from("confetti"), "x"), None);
    }

    #[test]
    fn test_effects_are_pure() {
        for name in ["grid-background", "status-ping", "glass-glow", "confetti"] {
            let kind = EffectKind::from(name);
            assert_eq!(effect_visual(&kind, "a"), effect_visual(&kind, "a"));
        }
    }
}
