//! Interaction wrappers: marquee, clip-reveal and hover-lift.
//!
//! The wrappers keep no state of their own. Clip-reveal and hover-lift
//! depend on a single runtime flag (seen / hovered) that the caller owns;
//! [`RevealLatch`] and [`HoverLift`] are the small state holders the front
//! end keeps for that flag.

use nexus_types::InteractionKind;

use super::{ACCENT_CYAN, VisualSpec, join_classes};

/// Loop length used when no usable speed is given.
pub const DEFAULT_MARQUEE_SECS: f64 = 20.0;

const REVEAL_EASE: &str = "cubic-bezier(0.16, 1, 0.3, 1)";
const CLIP_HIDDEN: &str = "polygon(0 0, 0 0, 0 100%, 0% 100%)";
const CLIP_SHOWN: &str = "polygon(0 0, 100% 0, 100% 100%, 0 100%)";

const MARQUEE_MASK: &str = "linear-gradient(to right, transparent, black 10%, black 90%, transparent)";

/// Horizontally looping content.
///
/// The content is rendered twice side by side and the track slides left by
/// half its width per cycle, so the loop is seamless.
#[derive(Debug, Clone, PartialEq)]
pub struct MarqueeSpec {
    duration_secs: f64,
    class: String,
}

impl MarqueeSpec {
    /// Number of content copies in the track.
    pub const COPIES: usize = 2;

    /// CSS iteration count: the loop never ends.
    pub const ITERATIONS: &'static str = "infinite";

    pub fn new(speed_secs: f64) -> Self {
        Self::with_class(speed_secs, "")
    }

    pub fn with_class(speed_secs: f64, extra_class: &str) -> Self {
        let duration_secs = if speed_secs.is_finite() && speed_secs > 0.0 {
            speed_secs
        } else {
            DEFAULT_MARQUEE_SECS
        };
        Self {
            duration_secs,
            class: join_classes("marquee", extra_class),
        }
    }

    /// Seconds per loop.
    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    pub fn copies(&self) -> usize {
        Self::COPIES
    }

    /// Clipping container with faded edges.
    pub fn container(&self) -> VisualSpec {
        VisualSpec::new(
            self.class.clone(),
            format!("mask-image: {MARQUEE_MASK}; -webkit-mask-image: {MARQUEE_MASK};"),
        )
    }

    /// Animated track holding the copies.
    pub fn track(&self) -> VisualSpec {
        VisualSpec::new(
            "marquee-track",
            format!(
                "animation: nexus-marquee {}s linear {};",
                self.duration_secs,
                Self::ITERATIONS
            ),
        )
    }
}

impl Default for MarqueeSpec {
    fn default() -> Self {
        Self::new(DEFAULT_MARQUEE_SECS)
    }
}

/// One-shot visibility latch.
///
/// Flips on the first visible observation and stays flipped; later
/// observations, visible or not, never fire again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a visibility observation. Returns true only when this call
    /// triggers the reveal.
    pub fn observe(&mut self, is_visible: bool) -> bool {
        if self.revealed || !is_visible {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Inline style of a clip-reveal element.
pub fn clip_reveal_style(revealed: bool) -> String {
    let clip = if revealed { CLIP_SHOWN } else { CLIP_HIDDEN };
    format!("clip-path: {clip}; transition: clip-path 0.8s {REVEAL_EASE};")
}

/// Pointer hover state of a hover-lift element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverLift {
    hovered: bool,
}

impl HoverLift {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self) {
        self.hovered = true;
    }

    pub fn leave(&mut self) {
        self.hovered = false;
    }

    pub fn style(&self) -> String {
        hover_lift_style(self.hovered)
    }
}

/// Inline style of a hover-lift element.
pub fn hover_lift_style(hovered: bool) -> String {
    let transition =
        "transition: transform 0.4s ease-out, border-color 0.4s ease-out, box-shadow 0.4s ease-out;";
    if hovered {
        format!(
            "{transition} transform: translateY(-5px); border-color: {ACCENT_CYAN}; \
             box-shadow: 0 10px 40px -10px rgba(0, 242, 255, 0.15);"
        )
    } else {
        transition.to_string()
    }
}

/// Rendered form of an interaction wrapper.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionVisual {
    Marquee(MarqueeSpec),
    /// Clip-path reveal; style comes from [`clip_reveal_style`].
    ClipReveal { class: String },
    /// Hover lift; style comes from [`hover_lift_style`].
    HoverLift { class: String },
    /// Unknown kind: the content in a plain wrapper.
    Unstyled { class: String },
}

/// Describe an interaction wrapper. `speed_secs` only affects marquees.
pub fn interaction_visual(
    kind: &InteractionKind,
    extra_class: &str,
    speed_secs: Option<f64>,
) -> InteractionVisual {
    match kind {
        InteractionKind::Marquee => InteractionVisual::Marquee(MarqueeSpec::with_class(
            speed_secs.unwrap_or(DEFAULT_MARQUEE_SECS),
            extra_class,
        )),
        InteractionKind::TextReveal => InteractionVisual::ClipReveal {
            class: join_classes("clip-reveal", extra_class),
        },
        InteractionKind::HoverLift => InteractionVisual::HoverLift {
            class: join_classes("hover-lift", extra_class),
        },
        InteractionKind::Unknown(name) => {
            tracing::trace!(interaction = %name, "unknown interaction, rendering unstyled");
            InteractionVisual::Unstyled {
                class: extra_class.trim().to_string(),
            }
        }
    }
}
