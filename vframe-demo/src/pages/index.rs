//! Index of example apps

use crate::ui::LinkCard;
use crate::Route;
use dioxus::prelude::*;
use vframe_ui::completion::RENDER_COMPLETE_FLAG;

#[component]
pub fn AppIndex() -> Element {
    rsx! {
        div { class: "index",
            h1 { class: "index-title", "vframe" }

            h2 { class: "index-section", "Apps" }
            div { class: "index-links",
                LinkCard {
                    to: Route::Episode {
                        query: String::new(),
                    },
                    title: "Episode card",
                    description: "Title, date, tags and a closing card via ?outro",
                }
                LinkCard {
                    to: Route::LowerThird {
                        query: String::new(),
                    },
                    title: "Lower third",
                    description: "Speaker name, role and handle",
                }
            }

            h2 { class: "index-section", "Capture" }
            p { class: "index-note",
                "Add "
                code { "?rendering" }
                " to any app URL to show only the frame. Capture once "
                code { "window.{RENDER_COMPLETE_FLAG}" }
                " is true."
            }
        }
    }
}
