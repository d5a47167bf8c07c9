//! Discriminators for the presentational wrappers.
//!
//! Both enums carry an `Unknown` arm so that an unrecognized name never
//! fails: unknown effects render nothing, unknown interactions render their
//! content unstyled.

use serde::{Deserialize, Serialize};

/// Decorative, content-less effects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EffectKind {
    /// Static line grid stacked behind the content.
    GridBackground,
    /// Small dot with a pulsing halo ("live/online").
    StatusPing,
    /// Soft cyan blur used as a background accent.
    GlassGlow,
    Unknown(String),
}

impl EffectKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::GridBackground => "grid-background",
            Self::StatusPing => "status-ping",
            Self::GlassGlow => "glass-glow",
            Self::Unknown(name) => name,
        }
    }
}

impl From<&str> for EffectKind {
    fn from(name: &str) -> Self {
        match name {
            "grid-background" => Self::GridBackground,
            "status-ping" => Self::StatusPing,
            "glass-glow" => Self::GlassGlow,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl From<String> for EffectKind {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<EffectKind> for String {
    fn from(kind: EffectKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Wrappers that animate or react around their content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InteractionKind {
    /// Duplicated content scrolling horizontally forever.
    Marquee,
    /// Clip-path reveal on first visibility.
    TextReveal,
    /// Lift and highlight while hovered.
    HoverLift,
    Unknown(String),
}

impl InteractionKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Marquee => "marquee",
            Self::TextReveal => "text-reveal",
            Self::HoverLift => "hover-lift",
            Self::Unknown(name) => name,
        }
    }
}

impl From<&str> for InteractionKind {
    fn from(name: &str) -> Self {
        match name {
            "marquee" => Self::Marquee,
            "text-reveal" => Self::TextReveal,
            "hover-lift" => Self::HoverLift,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl From<String> for InteractionKind {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<InteractionKind> for String {
    fn from(kind: InteractionKind) -> Self {
        kind.as_str().to_string()
    }
}
