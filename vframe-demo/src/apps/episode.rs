//! Episode title card

use dioxus::prelude::*;
use vframe_common::caption::EpisodeCard;
use vframe_common::{ContentParams, ParameterSchema};

pub const STORAGE_KEY: &str = "vframe.episode";
pub const PATH: &str = "/episode";

pub fn schema() -> ParameterSchema {
    ParameterSchema::builder()
        .field("title", "Title")
        .placeholder("Episode title")
        .field("date", "Date")
        .placeholder("YYYY-MM-DD")
        .field("tags", "Tags")
        .placeholder("rust, video, render")
        .field("extra", "Extra")
        .placeholder("Emoji or short note")
        .build()
}

/// Title card text. With `outro` the closing card is shown instead.
#[component]
pub fn EpisodeContent(content: ContentParams, #[props(default)] outro: bool) -> Element {
    let card = EpisodeCard::resolve(
        content.get("title"),
        content.get("date"),
        content.get("tags"),
        content.get("extra"),
        outro,
    );

    rsx! {
        div { class: if outro { "episode episode-outro" } else { "episode" },
            if !card.date.is_empty() {
                div { class: "episode-date", "{card.date}" }
            }
            h1 { class: "episode-title", "{card.title}" }
            if !card.tags.is_empty() {
                div { class: "episode-tags",
                    for tag in card.tags {
                        span { class: "episode-tag", "{tag}" }
                    }
                }
            }
            if !card.extra.is_empty() {
                div { class: "episode-extra", "{card.extra}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_includes_extra_field() {
        let names: Vec<_> = schema().iter().map(|f| f.name.clone()).collect();
        assert_eq!(names, vec!["title", "date", "tags", "extra"]);
    }
}
