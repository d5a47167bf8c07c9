//! Nexus landing page
//!
//! Single-page marketing site: a fixed navigation rail whose indicator
//! follows the section under the viewport midline, and a scrolling content
//! stream decorated with reveal, marquee and hover effects.

use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing::Level;
use nexus_core::Site;

mod components;
mod observer;

use components::{ContentStream, SideRail, use_focus_tracker_provider, use_site_provider};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const FONTS_CSS: &str = "https://fonts.googleapis.com/css2?family=JetBrains+Mono:wght@400;700&family=Space+Grotesk:wght@300;500;700&display=swap";
const ICONS_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css";

/// Page content, embedded at compile time.
const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    // Fails only if a subscriber is already installed
    let _ = dioxus_logger::init(level);

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let site = use_hook(|| match Site::from_toml_str(SITE_TOML) {
        Ok(site) => Ok(Rc::new(site)),
        Err(err) => {
            tracing::error!(error = %err, "invalid site config");
            Err(err.to_string())
        }
    });

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: FONTS_CSS }
        document::Link { rel: "stylesheet", href: ICONS_CSS }

        match site {
            Ok(site) => rsx! { LandingPage { site } },
            Err(message) => rsx! { ConfigErrorNotice { message } },
        }
    }
}

#[component]
fn LandingPage(site: Rc<Site>) -> Element {
    let site = use_site_provider(site);
    use_focus_tracker_provider(&site);

    rsx! {
        div { class: "landing",
            SideRail {}
            ContentStream {}
        }
    }
}

#[component]
fn ConfigErrorNotice(message: String) -> Element {
    rsx! {
        div { class: "config-error font-mono",
            h1 { "Nexus_" }
            p { "This page could not be loaded." }
            pre { "{message}" }
        }
    }
}
