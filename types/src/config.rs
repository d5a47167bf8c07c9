//! Site configuration deserialized from `site.toml`.
//!
//! Validation (non-empty, unique section ids, known default) happens in
//! `nexus-core`; these types only describe the shape of the file.

use serde::{Deserialize, Serialize};

use crate::section::{Section, SectionId};

/// Root of `site.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub brand: String,

    /// Section focused on page load. Falls back to the first section.
    #[serde(default)]
    pub default_section: Option<SectionId>,

    /// Tracked sections in page order.
    #[serde(rename = "section", default)]
    pub sections: Vec<Section>,

    #[serde(default)]
    pub tracker: ObserverConfig,

    #[serde(default)]
    pub marquee: MarqueeConfig,

    #[serde(default)]
    pub status: StatusConfig,

    #[serde(default)]
    pub footer: FooterConfig,
}

/// Observation area used for section tracking.
///
/// The viewport is contracted by `top_margin_pct` from the top and
/// `bottom_margin_pct` from the bottom before testing intersection. With the
/// defaults (50/50) the area collapses to the viewport midline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    pub top_margin_pct: f64,
    pub bottom_margin_pct: f64,
    pub threshold: f64,
}

impl ObserverConfig {
    /// Center-band configuration used by the navigation tracker.
    pub const CENTER_BAND: Self = Self {
        top_margin_pct: 50.0,
        bottom_margin_pct: 50.0,
        threshold: 0.0,
    };

    /// Whole viewport, used by entrance animations.
    pub const FULL_VIEWPORT: Self = Self {
        top_margin_pct: 0.0,
        bottom_margin_pct: 0.0,
        threshold: 0.0,
    };

    /// CSS root margin string for `IntersectionObserver`.
    ///
    /// ```
    /// use nexus_types::ObserverConfig;
    /// assert_eq!(ObserverConfig::CENTER_BAND.root_margin(), "-50% 0px -50% 0px");
    /// assert_eq!(ObserverConfig::FULL_VIEWPORT.root_margin(), "-0% 0px -0% 0px");
    /// ```
    pub fn root_margin(&self) -> String {
        format!(
            "-{}% 0px -{}% 0px",
            self.top_margin_pct, self.bottom_margin_pct
        )
    }
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self::CENTER_BAND
    }
}

/// Compliance ticker between the platform and pricing sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarqueeConfig {
    /// Seconds per full loop.
    pub speed_secs: f64,
    pub items: Vec<String>,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            speed_secs: 20.0,
            items: vec![
                "SOC2 COMPLIANT".to_string(),
                "GDPR READY".to_string(),
                "END-TO-END ENCRYPTION".to_string(),
                "99.99% UPTIME".to_string(),
            ],
        }
    }
}

/// "System status" panel in the side rail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    pub title: String,
    pub state: String,
    pub metrics: Vec<StatusMetric>,
    pub cta: String,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            title: "SYSTEM STATUS".to_string(),
            state: "ONLINE".to_string(),
            metrics: vec![
                StatusMetric::new("Latency", "12ms"),
                StatusMetric::new("Ingest", "4.2TB/s"),
            ],
            cta: "Get Access".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusMetric {
    pub name: String,
    pub value: String,
}

impl StatusMetric {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub copyright: String,
    pub links: Vec<FooterLink>,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            copyright: "\u{a9} 2024 NEXUS ANALYTICS INC.".to_string(),
            links: ["PRIVACY", "TERMS", "STATUS"]
                .into_iter()
                .map(|label| FooterLink {
                    label: label.to_string(),
                    href: "#".to_string(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}
