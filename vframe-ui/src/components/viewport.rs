//! Fixed-size frame viewport

use dioxus::prelude::*;
use vframe_common::Format;

/// Container rendered at the frame's real pixel size, optionally scaled down
/// for on-screen preview. Children always lay out at `width`×`height`.
#[component]
pub fn FrameViewport(
    #[props(default = 1080)] width: u32,
    #[props(default = 1920)] height: u32,
    #[props(default = 1.0)] scale: f64,
    children: Element,
) -> Element {
    let outer = format!(
        "width: {}px; height: {}px; overflow: hidden;",
        width as f64 * scale,
        height as f64 * scale,
    );
    let inner = format!(
        "width: {width}px; height: {height}px; transform: scale({scale}); transform-origin: top left;"
    );

    rsx! {
        div { class: "vf-viewport", style: outer,
            div { class: "vf-viewport-content", style: inner, {children} }
        }
    }
}

/// Largest scale (at most 1.0) that fits `format` inside the given box
pub fn preview_scale(format: &Format, max_width: f64, max_height: f64) -> f64 {
    let sx = max_width / format.width as f64;
    let sy = max_height / format.height as f64;
    sx.min(sy).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vframe_common::FORMATS;

    #[test]
    fn test_landscape_limited_by_width() {
        let scale = preview_scale(&FORMATS[0], 960.0, 960.0);
        assert_eq!(scale, 0.5);
    }

    #[test]
    fn test_portrait_limited_by_height() {
        let scale = preview_scale(&FORMATS[1], 960.0, 960.0);
        assert_eq!(scale, 0.5);
    }

    #[test]
    fn test_never_scales_up() {
        let tiny = Format::new("tiny", 100, 100);
        assert_eq!(preview_scale(&tiny, 1000.0, 1000.0), 1.0);
    }
}
