//! Link card component

use crate::Route;
use dioxus::prelude::*;

/// A card-style navigation link with title and description
#[component]
pub fn LinkCard(to: Route, title: &'static str, description: &'static str) -> Element {
    rsx! {
        Link { to, class: "link-card",
            div { class: "link-card-title", "{title}" }
            div { class: "link-card-description", "{description}" }
        }
    }
}
