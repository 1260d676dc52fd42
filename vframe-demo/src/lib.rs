//! vframe demo - Example frame apps
//!
//! Each app reads its initial content from the URL query and either shows the
//! frame editor or, with `?rendering`, only the frame for headless capture.

pub mod apps;
pub mod pages;
pub mod query;
pub mod ui;

use dioxus::prelude::*;
use pages::{AppIndex, Episode, LowerThird};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    AppIndex {},
    #[route("/episode?:..query")]
    Episode { query: String },
    #[route("/lower-third?:..query")]
    LowerThird { query: String },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
