//! Output format selector

use dioxus::prelude::*;
use vframe_common::{Format, FORMATS};

/// One button per preset in [`FORMATS`]; the preset whose label matches
/// `selected` is shown active.
#[component]
pub fn FormatPanel(selected: Format, on_select: EventHandler<Format>) -> Element {
    rsx! {
        div { class: "vf-formats",
            span { class: "vf-formats-label", "Format:" }
            for format in FORMATS {
                FormatButton {
                    key: "{format.label}",
                    format,
                    selected,
                    on_select,
                }
            }
        }
    }
}

#[component]
fn FormatButton(format: Format, selected: Format, on_select: EventHandler<Format>) -> Element {
    let active = is_active(&format, &selected);
    let orientation = if format.is_portrait() {
        "Portrait"
    } else {
        "Landscape"
    };

    rsx! {
        button {
            class: if active { "vf-format vf-format-active" } else { "vf-format" },
            aria_pressed: if active { "true" } else { "false" },
            title: "{orientation} {format.width}×{format.height}",
            onclick: move |_| {
                if let Some(format) = selection_change(&selected, &format) {
                    on_select.call(format);
                }
            },
            "{format.label}"
        }
    }
}

/// Presets are matched by label, not by size
pub fn is_active(format: &Format, selected: &Format) -> bool {
    format.label == selected.label
}

/// Preset to report when `candidate` is clicked while `selected` is active
pub fn selection_change(selected: &Format, candidate: &Format) -> Option<Format> {
    (!is_active(candidate, selected)).then_some(*candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_active() {
        for selected in FORMATS {
            let active = FORMATS.iter().filter(|f| is_active(f, &selected)).count();
            assert_eq!(active, 1);
        }
    }

    #[test]
    fn test_selecting_other_preset_reports_full_format() {
        let [landscape, portrait] = FORMATS;
        let picked = selection_change(&landscape, &portrait).unwrap();
        assert_eq!(picked, Format::new("1080x1920", 1080, 1920));
        assert!(is_active(&portrait, &picked));
        assert!(!is_active(&landscape, &picked));
    }

    #[test]
    fn test_selecting_active_preset_is_noop() {
        let landscape = FORMATS[0];
        assert_eq!(selection_change(&landscape, &landscape), None);
    }
}
