//! Explicit runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::reducer::{DialogInput, RuntimeEffect};
use crate::runtime_context::LibraryRuntimeContext;

/// Stable DOM id of a dialog's primary input.
pub const fn dialog_input_dom_id(input: DialogInput) -> &'static str {
    match input {
        DialogInput::WebsiteTitle => "add-website-title-input",
        DialogInput::CategoryName => "add-category-name-input",
    }
}

/// Installs the effect executor that drains reducer-emitted runtime effects in
/// order.
pub fn install(runtime: LibraryRuntimeContext) {
    // Clear the current queue before processing so nested dispatches enqueue a
    // fresh batch instead of being overwritten by the in-flight drain.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            run_runtime_effect(effect);
        }
    });
}

fn run_runtime_effect(effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::FocusDialogInput(input) => {
            focus_element_by_id(dialog_input_dom_id(input));
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn focus_element_by_id(id: &str) {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    // The dialog mounts in the same tick as the effect drain; a missing node
    // just means the dialog was closed again before focus landed.
    if let Some(element) = document.get_element_by_id(id) {
        if let Ok(input) = element.dyn_into::<web_sys::HtmlElement>() {
            let _ = input.focus();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn focus_element_by_id(_: &str) {}
