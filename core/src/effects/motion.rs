//! Entrance motion for page copy.
//!
//! Blocks fade in and rise into place the first time they scroll into view.
//! Sibling blocks stagger by passing increasing delays (0.1s steps on the
//! landing page).

const EASE: &str = "cubic-bezier(0.16, 1, 0.3, 1)";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealMotion {
    pub delay_secs: f64,
    pub duration_secs: f64,
    /// Vertical offset of the hidden state, in pixels.
    pub offset_px: f64,
}

impl RevealMotion {
    pub fn new(delay_secs: f64) -> Self {
        Self {
            delay_secs: delay_secs.max(0.0),
            ..Self::default()
        }
    }

    /// Inline style for the hidden or shown state.
    pub fn style(&self, revealed: bool) -> String {
        let transition = format!(
            "transition: opacity {d}s {EASE} {delay}s, transform {d}s {EASE} {delay}s;",
            d = self.duration_secs,
            delay = self.delay_secs,
        );
        if revealed {
            format!("opacity: 1; transform: none; {transition}")
        } else {
            format!(
                "opacity: 0; transform: translateY({}px); {transition}",
                self.offset_px
            )
        }
    }
}

impl Default for RevealMotion {
    fn default() -> Self {
        Self {
            delay_secs: 0.0,
            duration_secs: 0.6,
            offset_px: 24.0,
        }
    }
}
