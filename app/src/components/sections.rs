//! Main content stream: hero, platform, marquee break, scale, footer.
//!
//! Section ids here must match the `[[section]]` ids in `site.toml`.

use dioxus::prelude::*;
use nexus_types::{EffectKind, InteractionKind};

use super::effects::SignatureEffect;
use super::focus::use_site;
use super::interaction::SignatureInteraction;
use super::reveal::Reveal;

const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?q=80&w=1000&auto=format&fit=crop";
const INGEST_IMAGE: &str =
    "https://images.unsplash.com/photo-1518770660439-4636190af475?q=80&w=500&auto=format&fit=crop";
const DASHBOARD_IMAGE: &str =
    "https://images.unsplash.com/photo-1551288049-bebda4e38f71?q=80&w=800&auto=format&fit=crop";

#[component]
pub fn ContentStream() -> Element {
    rsx! {
        main { class: "content-stream",
            SignatureEffect { effect: EffectKind::GridBackground }
            IntroSection {}
            PlatformSection {}
            MarqueeBreak {}
            ScaleSection {}
            Footer {}
        }
    }
}

#[component]
fn IntroSection() -> Element {
    rsx! {
        section { id: "intro", class: "page-section intro-section",
            div { class: "intro-copy",
                Reveal {
                    span { class: "eyebrow font-mono", "/// INITIALIZING VIEW" }
                }
                Reveal { delay: 0.1,
                    h2 { class: "hero-title",
                        "CLARITY"
                        br {}
                        span { class: "hero-title-fade", "IN TOTAL" }
                        br {}
                        "CHAOS."
                    }
                }
                Reveal { delay: 0.2,
                    p { class: "hero-lede",
                        "Stop guessing. Nexus ingests messy B2B data streams and crystallizes them into actionable, predictive intelligence instantly."
                    }
                }
                Reveal { delay: 0.3,
                    div { class: "hero-links",
                        a { class: "hero-link-primary", href: "#", "Explore Demo" }
                        span { class: "hero-link-divider", "|" }
                        a { class: "hero-link-secondary font-mono", href: "#",
                            "Read Documentation "
                            i { class: "fa-solid fa-arrow-right" }
                        }
                    }
                }
            }
            div { class: "hero-art",
                img { src: HERO_IMAGE, alt: "Cyberpunk Data" }
            }
        }
    }
}

#[component]
fn PlatformSection() -> Element {
    rsx! {
        section { id: "platform", class: "page-section platform-section",
            Reveal {
                div { class: "section-heading",
                    div {
                        span { class: "section-kicker font-mono", "01 / CAPABILITIES" }
                        h3 { class: "section-title", "The Core Engine" }
                    }
                    p { class: "section-aside font-mono",
                        "Designed for speed."
                        br {}
                        "Built for scale."
                    }
                }
            }

            div { class: "feature-grid",
                Reveal {
                    SignatureInteraction { kind: InteractionKind::HoverLift, class: "glass-panel feature-card",
                        div { class: "feature-icon",
                            i { class: "fa-solid fa-bolt accent-cyan" }
                        }
                        h4 { class: "feature-title", "Real-time Ingestion" }
                        p { class: "feature-body",
                            "Connect to Snowflake, Postgres, or REST APIs. We normalize disparate schemas in milliseconds, not months."
                        }
                        div { class: "feature-visual",
                            div {
                                class: "feature-visual-image",
                                style: "background-image: url('{INGEST_IMAGE}');",
                            }
                            div { class: "feature-visual-tag font-mono", "SYNC: ACTIVE" }
                        }
                    }
                }
                Reveal { delay: 0.1,
                    SignatureInteraction { kind: InteractionKind::HoverLift, class: "glass-panel feature-card",
                        div { class: "feature-icon",
                            i { class: "fa-solid fa-chart-column accent-purple" }
                        }
                        h4 { class: "feature-title", "Predictive Modeling" }
                        p { class: "feature-body",
                            "Our neural engine identifies churn risk and upsell opportunities before your sales team even logs in."
                        }
                        div { class: "feature-bars",
                            for (i, height) in ["33%", "66%", "50%", "100%", "75%"].into_iter().enumerate() {
                                div { key: "{i}", class: "feature-bar", style: "height: {height};" }
                            }
                        }
                    }
                }
                div { class: "feature-wide",
                    Reveal { delay: 0.2,
                        SignatureInteraction { kind: InteractionKind::HoverLift, class: "glass-panel feature-card",
                            div { class: "feature-split",
                                div { class: "feature-split-copy",
                                    h4 { class: "feature-title", "Visual Logic Builder" }
                                    p { class: "feature-body",
                                        "No SQL? No problem. Construct complex queries using our node-based visual interface. Drag, drop, deploy."
                                    }
                                    a { class: "feature-button font-mono", href: "#", "See Workflow" }
                                }
                                div { class: "feature-split-media",
                                    img { src: DASHBOARD_IMAGE, alt: "Data Dashboard" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MarqueeBreak() -> Element {
    let site = use_site();
    let marquee = site.config.marquee.clone();

    rsx! {
        div { class: "marquee-break",
            SignatureInteraction { kind: InteractionKind::Marquee, speed: marquee.speed_secs,
                div { class: "marquee-items",
                    for item in marquee.items.iter() {
                        span { key: "{item}", class: "marquee-item font-mono", "{item}" }
                    }
                }
            }
        }
    }
}

#[component]
fn ScaleSection() -> Element {
    let stats = [
        ("500TB", "Daily ingestion capacity per node cluster.", 0.1),
        ("12ms", "Average query latency for cold storage data.", 0.2),
        ("400+", "Native integrations with leading SaaS tools.", 0.3),
    ];

    rsx! {
        section { id: "pricing", class: "page-section scale-section",
            Reveal {
                span { class: "section-kicker accent-cyan font-mono", "02 / SCALE" }
                h3 { class: "scale-title",
                    "Designed for the"
                    br {}
                    "Enterprise."
                }
            }

            div { class: "stat-grid",
                for (value, caption, delay) in stats {
                    Reveal { key: "{value}", delay,
                        div { class: "stat",
                            div { class: "stat-value font-mono", "{value}" }
                            div { class: "stat-caption", "{caption}" }
                        }
                    }
                }
            }

            Reveal { class: "cta-reveal",
                div { class: "cta-box",
                    SignatureEffect { effect: EffectKind::GlassGlow }
                    div { class: "cta-content",
                        h4 { class: "cta-title", "Ready to deploy?" }
                        p { class: "cta-body",
                            "Start your 14-day trial on our dedicated clusters. No credit card required for sandbox access."
                        }
                        div { class: "cta-actions",
                            button { class: "cta-primary", "Start Free Trial" }
                            button { class: "cta-secondary", "Talk to Sales" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    let site = use_site();
    let footer = site.config.footer.clone();

    rsx! {
        footer { class: "page-footer font-mono",
            div { class: "footer-row",
                div { "{footer.copyright}" }
                div { class: "footer-links",
                    for link in footer.links.iter() {
                        a { key: "{link.label}", href: "{link.href}", "{link.label}" }
                    }
                }
            }
        }
    }
}
