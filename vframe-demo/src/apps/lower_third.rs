//! Speaker lower third

use dioxus::prelude::*;
use vframe_common::{ContentParams, ParameterSchema};

pub const STORAGE_KEY: &str = "vframe.lower-third";
pub const PATH: &str = "/lower-third";

pub fn schema() -> ParameterSchema {
    ParameterSchema::builder()
        .field("name", "Name")
        .placeholder("Ada Lovelace")
        .field("role", "Role")
        .default_value("Speaker")
        .field("handle", "Handle")
        .placeholder("@handle")
        .build()
}

#[component]
pub fn LowerThirdContent(content: ContentParams) -> Element {
    let name = content.get("name");
    let role = content.get("role");
    let handle = content.get("handle").trim();

    rsx! {
        div { class: "lower-third",
            div { class: "lower-third-bar",
                div { class: "lower-third-name", "{name}" }
                div { class: "lower-third-role",
                    "{role}"
                    if !handle.is_empty() {
                        span { class: "lower-third-handle", " · {handle}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_has_fallback() {
        assert_eq!(schema().defaults().get("role"), "Speaker");
        assert_eq!(schema().defaults().get("name"), "");
    }
}
