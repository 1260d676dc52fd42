//! Headless capture wrapper

use crate::completion::{clear_page_background, CompletionSignal, WindowFlag, RENDER_COMPLETE_FLAG};
use dioxus::prelude::*;
use std::rc::Rc;

/// Renders `children` unchanged. After the first commit it clears the page
/// background and sets `window[flag]` to `true`, once.
#[component]
pub fn RenderingView(
    #[props(default = RENDER_COMPLETE_FLAG)] flag: &'static str,
    children: Element,
) -> Element {
    let signal = use_hook(|| Rc::new(CompletionSignal::new(WindowFlag { name: flag })));

    use_effect(move || {
        if signal.has_fired() {
            return;
        }
        clear_page_background();
        signal.fire();
    });

    rsx! {
        div { class: "vf-rendering", {children} }
    }
}
