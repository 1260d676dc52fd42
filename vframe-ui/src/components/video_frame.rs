//! Frame editor: format + parameter controls around a live preview

use super::format_panel::FormatPanel;
use super::preview_panel::{FieldEdit, PreviewPanel};
use super::text_input::{TextInput, TextInputSize};
use super::viewport::{preview_scale, FrameViewport};
use crate::hooks::use_local_storage;
use dioxus::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};
use std::rc::Rc;
use vframe_common::{ContentParams, Format, ParameterSchema};

/// Caller-supplied display of the current content
#[derive(Clone)]
pub struct RenderContent(pub Rc<dyn Fn(ContentParams) -> Element>);

impl RenderContent {
    pub fn new(render: impl Fn(ContentParams) -> Element + 'static) -> Self {
        Self(Rc::new(render))
    }

    pub fn call(&self, content: ContentParams) -> Element {
        (self.0)(content)
    }
}

impl PartialEq for RenderContent {
    fn eq(&self, _other: &Self) -> bool {
        false // Closures can't be compared; always re-render
    }
}

/// Everything a frame persists under its storage key
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameState {
    pub content: ContentParams,
    #[serde(deserialize_with = "deserialize_format")]
    pub format: Format,
}

impl FrameState {
    pub fn new(content: ContentParams) -> Self {
        Self::with_format(content, Format::default())
    }

    pub fn with_format(content: ContentParams, format: Format) -> Self {
        Self { content, format }
    }
}

#[derive(Deserialize)]
struct StoredFormat {
    label: String,
}

/// Stored formats resolve against the preset catalog by label; a preset that
/// no longer exists falls back to the default rather than failing the load.
fn deserialize_format<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Format, D::Error> {
    let stored = StoredFormat::deserialize(deserializer)?;
    Ok(Format::by_label(&stored.label).unwrap_or_else(|| {
        tracing::debug!("Unknown stored format '{}', using default", stored.label);
        Format::default()
    }))
}

/// Editor around a sized preview of `render`.
///
/// Content and format are seeded from local storage under `storage_key` when
/// a valid entry exists, otherwise from `initial_content` and
/// `initial_format` (the first preset unless given), and written back on
/// every change.
#[component]
pub fn VideoFrame(
    storage_key: String,
    initial_content: ContentParams,
    #[props(default)] initial_format: Format,
    render: RenderContent,
    #[props(default)] schema: ParameterSchema,
    #[props(default)] title: Option<String>,
    /// Builds a capture URL for the current state, shown under the controls
    #[props(default)]
    render_url: Option<Callback<(ContentParams, Format), String>>,
    #[props(default = 960.0)] max_preview_width: f64,
    #[props(default = 720.0)] max_preview_height: f64,
) -> Element {
    let mut state = use_local_storage(storage_key, move || {
        FrameState::with_format(initial_content, initial_format)
    });

    let FrameState { content, format } = state.read().clone();
    let scale = preview_scale(&format, max_preview_width, max_preview_height);
    let url = render_url.map(|build| build.call((content.clone(), format)));

    rsx! {
        div { class: "vf-frame",
            div { class: "vf-controls",
                if let Some(title) = title {
                    h1 { class: "vf-title", "{title}" }
                }
                FormatPanel {
                    selected: format,
                    on_select: move |format: Format| state.write().format = format,
                }
                PreviewPanel {
                    value: content.clone(),
                    schema,
                    on_edit: move |edit: FieldEdit| edit.apply_to(&mut state.write().content),
                }
                if let Some(url) = url {
                    RenderUrlRow { url }
                }
            }
            div { class: "vf-stage",
                FrameViewport {
                    width: format.width,
                    height: format.height,
                    scale,
                    {render.call(content.clone())}
                }
            }
        }
    }
}

#[component]
fn RenderUrlRow(url: String) -> Element {
    rsx! {
        div { class: "vf-render-url",
            span { class: "vf-field-label", "Render URL" }
            TextInput {
                value: url.clone(),
                on_input: |_| {},
                size: TextInputSize::Small,
                readonly: true,
                monospace: true,
            }
            a { class: "vf-link", href: "{url}", target: "_blank", "Open" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::{persist, restore_or};
    use crate::storage::{KeyValueStore, MemoryStore};
    use vframe_common::FORMATS;

    fn edited_state() -> FrameState {
        let content: ContentParams = [
            ("title", "T"),
            ("date", "2025-01-15"),
            ("tags", "a,b"),
            ("extra", "E"),
        ]
        .into_iter()
        .collect();
        FrameState {
            content: content.with_value("title", "Edited"),
            format: FORMATS[1],
        }
    }

    #[test]
    fn test_state_round_trips_through_storage() {
        let store = MemoryStore::new();
        let state = edited_state();
        persist(&store, "frame", &state);

        let restored = restore_or(&store, "frame", || FrameState::new(ContentParams::new()));
        assert_eq!(restored, state);
    }

    #[test]
    fn test_stored_shape() {
        let json = serde_json::to_value(edited_state()).unwrap();
        assert_eq!(json["format"]["label"], "1080x1920");
        assert_eq!(json["format"]["width"], 1080);
        assert_eq!(json["content"]["title"], "Edited");
    }

    #[test]
    fn test_corrupt_entry_uses_initial_content() {
        let store = MemoryStore::new();
        store.set_item("frame", r#"{"content": 42}"#).unwrap();

        let initial: ContentParams = [("title", "From URL")].into_iter().collect();
        let restored = restore_or(&store, "frame", || FrameState::new(initial.clone()));
        assert_eq!(restored.content, initial);
        assert_eq!(restored.format, Format::default());
    }

    #[test]
    fn test_empty_store_uses_initial_format() {
        let store = MemoryStore::new();
        let initial: ContentParams = [("title", "From URL")].into_iter().collect();
        let restored = restore_or(&store, "frame", || {
            FrameState::with_format(initial.clone(), FORMATS[1])
        });
        assert_eq!(restored.format, FORMATS[1]);
        assert_eq!(restored.content, initial);
    }

    #[test]
    fn test_unknown_format_falls_back_to_default() {
        let raw = r#"{"content":{"title":"kept"},"format":{"label":"4096x4096","width":4096,"height":4096}}"#;
        let state: FrameState = serde_json::from_str(raw).unwrap();
        assert_eq!(state.content.get("title"), "kept");
        assert_eq!(state.format, Format::default());
    }
}
