//! Text input used by the editing panels

use dioxus::prelude::*;

/// Text input size
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TextInputSize {
    /// Compact, for secondary fields
    Small,
    #[default]
    Medium,
}

#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] size: TextInputSize,
    #[props(default)] placeholder: Option<String>,
    #[props(default)] readonly: bool,
    #[props(default)] monospace: bool,
    #[props(default)] id: Option<String>,
) -> Element {
    let size_class = match size {
        TextInputSize::Small => "vf-input-sm",
        TextInputSize::Medium => "vf-input-md",
    };
    let font_class = if monospace { "vf-mono" } else { "" };
    let class = format!("vf-input {size_class} {font_class}");

    rsx! {
        input {
            r#type: "text",
            class: "{class}",
            id: id.as_deref(),
            value: "{value}",
            placeholder: placeholder.as_deref(),
            readonly,
            oninput: move |e| on_input.call(e.value()),
        }
    }
}
