//! Schema-driven editing panel

use super::text_input::TextInput;
use dioxus::prelude::*;
use vframe_common::{ContentParams, ParameterSchema};

/// A single input change: field `name` now holds `value`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldEdit {
    pub name: String,
    pub value: String,
}

impl FieldEdit {
    /// Write the edited field into `content`, leaving every other key as is
    pub fn apply_to(self, content: &mut ContentParams) {
        content.insert(self.name, self.value);
    }
}

/// One labelled input per schema field, in schema order.
///
/// `on_change` gets a full copy of `value` with the edited field replaced;
/// keys outside the schema ride along untouched. Holders that keep the
/// content in a signal should listen to `on_edit` instead and merge into the
/// current state, since several input events can arrive before `value` is
/// re-rendered.
#[component]
pub fn PreviewPanel(
    value: ContentParams,
    #[props(default)] on_change: Option<EventHandler<ContentParams>>,
    #[props(default)] on_edit: Option<EventHandler<FieldEdit>>,
    #[props(default)] schema: ParameterSchema,
) -> Element {
    let rows = schema.rows(&value);

    rsx! {
        div { class: "vf-fields",
            for row in rows {
                label { key: "{row.name}", class: "vf-field",
                    span { class: "vf-field-label", "{row.label}" }
                    TextInput {
                        id: format!("vf-field-{}", row.name),
                        value: row.value.clone(),
                        placeholder: row.placeholder.clone(),
                        on_input: {
                            let value = value.clone();
                            let name = row.name.clone();
                            move |text: String| {
                                if let Some(on_edit) = on_edit {
                                    on_edit.call(FieldEdit {
                                        name: name.clone(),
                                        value: text.clone(),
                                    });
                                }
                                if let Some(on_change) = on_change {
                                    on_change.call(value.with_value(&name, text));
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}
