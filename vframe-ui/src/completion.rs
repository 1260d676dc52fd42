//! Render-complete signalling for external capture tools
//!
//! A headless browser loads a frame, waits for a well-known global to become
//! `true`, then captures. The flag is only ever written once per page and
//! never reset. Nothing here waits for images or fonts to finish loading;
//! the capture tool has to tolerate that.

use std::cell::Cell;
use tracing::{debug, warn};
use wasm_bindgen::JsValue;

/// Global property on `window` that capture tools poll
pub const RENDER_COMPLETE_FLAG: &str = "__vframeRenderComplete";

/// Destination of the completion signal
pub trait CompletionSink {
    fn mark_complete(&self);
}

/// Sets `window[name] = true`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowFlag {
    pub name: &'static str,
}

impl Default for WindowFlag {
    fn default() -> Self {
        Self {
            name: RENDER_COMPLETE_FLAG,
        }
    }
}

impl CompletionSink for WindowFlag {
    fn mark_complete(&self) {
        let Some(window) = web_sys::window() else {
            warn!("No window, cannot set {}", self.name);
            return;
        };
        match js_sys::Reflect::set(&window, &JsValue::from_str(self.name), &JsValue::TRUE) {
            Ok(_) => debug!("Set window.{} = true", self.name),
            Err(e) => warn!("Failed to set window.{}: {:?}", self.name, e),
        }
    }
}

/// One-shot wrapper around a sink
pub struct CompletionSignal<S: CompletionSink> {
    sink: S,
    fired: Cell<bool>,
}

impl<S: CompletionSink> CompletionSignal<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            fired: Cell::new(false),
        }
    }

    /// Signal completion. Returns false if already signalled.
    pub fn fire(&self) -> bool {
        if self.fired.replace(true) {
            return false;
        }
        self.sink.mark_complete();
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired.get()
    }
}

/// Make the page background transparent so captures contain only the frame
pub fn clear_page_background() {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let html = document
        .document_element()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    for element in html.into_iter().chain(document.body()) {
        if let Err(e) = element.style().set_property("background", "transparent") {
            warn!("Failed to clear page background: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingSink {
        calls: Rc<Cell<u32>>,
    }

    impl CompletionSink for RecordingSink {
        fn mark_complete(&self) {
            self.calls.set(self.calls.get() + 1);
        }
    }

    #[test]
    fn test_fires_once() {
        let sink = RecordingSink::default();
        let signal = CompletionSignal::new(sink.clone());

        assert!(!signal.has_fired());
        assert!(signal.fire());
        assert!(!signal.fire());
        assert!(!signal.fire());

        assert_eq!(sink.calls.get(), 1);
        assert!(signal.has_fired());
    }

    #[test]
    fn test_default_flag_name() {
        assert_eq!(WindowFlag::default().name, "__vframeRenderComplete");
    }
}
