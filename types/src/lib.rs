//! Shared types for the Nexus landing page.
//!
//! Everything here is plain data: the site configuration deserialized from
//! `site.toml`, section identifiers, and the effect/interaction
//! discriminators used by the presentational wrappers.

pub mod config;
pub mod kinds;
pub mod section;

pub use config::{
    FooterConfig, FooterLink, MarqueeConfig, ObserverConfig, SiteConfig, StatusConfig,
    StatusMetric,
};
pub use kinds::{EffectKind, InteractionKind};
pub use section::{NavItem, Section, SectionId};
