//! URL query handling for the example apps
//!
//! Recognised keys: one per schema field (`title`, `date`, ...), `format`
//! (preset label), `outro` (closing card), and the presence-only `rendering`
//! flag that switches to headless capture mode.

use tracing::{debug, warn};
use vframe_common::{ContentParams, Format, ParameterSchema};

/// Presence-only flag selecting headless capture mode
pub const RENDERING_FLAG: &str = "rendering";

/// Parsed query string. First occurrence of a key wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameQuery {
    pairs: Vec<(String, String)>,
}

impl FrameQuery {
    /// Parse a raw query string, with or without the leading `?`. A malformed
    /// string yields an empty query.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim_start_matches('?');
        match serde_urlencoded::from_str::<Vec<(String, String)>>(raw) {
            Ok(pairs) => Self { pairs },
            Err(e) => {
                debug!("Ignoring malformed query '{}': {}", raw, e);
                Self::default()
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn is_rendering(&self) -> bool {
        self.has(RENDERING_FLAG)
    }

    /// `outro` counts when present with any value other than `0` / `false`
    pub fn is_outro(&self) -> bool {
        self.get("outro")
            .is_some_and(|v| !matches!(v, "0" | "false"))
    }

    /// Requested preset, or the default one when absent or unknown
    pub fn format(&self) -> Format {
        match self.get("format") {
            Some(label) => Format::by_label(label).unwrap_or_else(|| {
                debug!("Unknown format '{}', using default", label);
                Format::default()
            }),
            None => Format::default(),
        }
    }

    /// Initial content for `schema`: the query value, else the field's
    /// default, else `""`.
    pub fn content(&self, schema: &ParameterSchema) -> ContentParams {
        schema.initial_content(|name| {
            self.get(name).map(str::to_string).or_else(|| {
                schema
                    .field(name)
                    .and_then(|f| f.default_value.clone())
            })
        })
    }
}

/// URL that loads `path` in capture mode with exactly this content and
/// format. Every schema field is written, empty ones included, so a cleared
/// field is not refilled from its default on the way back in. Keys outside
/// the schema are left out; `flags` are appended as presence-only keys.
pub fn render_url(
    path: &str,
    schema: &ParameterSchema,
    content: &ContentParams,
    format: &Format,
    flags: &[&str],
) -> String {
    let mut pairs: Vec<(&str, &str)> = schema
        .iter()
        .map(|field| (field.name.as_str(), content.get(&field.name)))
        .collect();
    pairs.push(("format", format.label));

    let mut query = match serde_urlencoded::to_string(&pairs) {
        Ok(q) => q,
        Err(e) => {
            warn!("Failed to encode render URL: {}", e);
            String::new()
        }
    };
    for flag in flags.iter().copied().chain([RENDERING_FLAG]) {
        if !query.is_empty() {
            query.push('&');
        }
        query.push_str(flag);
    }

    format!("{path}?{query}")
}
