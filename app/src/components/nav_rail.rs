//! Fixed side rail: brand, section navigation and the status module.

use dioxus::prelude::*;
use nexus_types::EffectKind;

use super::effects::SignatureEffect;
use super::focus::{use_focus_tracker, use_site};

#[component]
pub fn SideRail() -> Element {
    let site = use_site();
    let focus = use_focus_tracker();
    let mut menu_open = use_signal(|| false);

    let brand = site.config.brand.clone();
    let nav_class = if menu_open() {
        "rail-nav rail-nav-open"
    } else {
        "rail-nav"
    };

    rsx! {
        aside { class: "side-rail",
            div { class: "rail-header",
                a { class: "brand", href: "#",
                    h1 { class: "brand-name", "{brand}" }
                    div { class: "brand-underline" }
                }
                // Mobile only; the nav is always open on wide screens
                button {
                    class: "menu-toggle",
                    onclick: move |_| menu_open.set(!menu_open()),
                    i { class: "fa-solid fa-bars" }
                }
            }

            nav { class: nav_class,
                for item in focus.nav_items() {
                    a {
                        key: "{item.id}",
                        href: "{item.id.anchor()}",
                        class: if item.is_active { "nav-link nav-link-active" } else { "nav-link" },
                        onclick: move |_| menu_open.set(false),
                        div { class: "nav-dot" }
                        span { class: "nav-label", "{item.label}" }
                    }
                }
            }

            StatusPanel {}
        }
    }
}

#[component]
fn StatusPanel() -> Element {
    let site = use_site();
    let status = site.config.status.clone();

    rsx! {
        div { class: "rail-status",
            div { class: "glass-panel status-panel",
                div { class: "status-header",
                    span { class: "status-title", "{status.title}" }
                    div { class: "status-state",
                        SignatureEffect { effect: EffectKind::StatusPing }
                        span { class: "status-state-label", "{status.state}" }
                    }
                }
                div { class: "status-metrics",
                    for metric in status.metrics.iter() {
                        div { key: "{metric.name}", class: "status-metric",
                            span { class: "status-metric-name", "{metric.name}" }
                            span { class: "font-mono", "{metric.value}" }
                        }
                    }
                }
                button { class: "status-cta", "{status.cta}" }
            }
        }
    }
}
