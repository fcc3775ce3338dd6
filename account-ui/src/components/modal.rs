//! Modal shell around the native `<dialog>` element
//!
//! `showModal()` gives us top-layer rendering, a focus trap, Escape handling
//! and `::backdrop` for free. `showModal()` throws on an already open dialog,
//! so the effect checks the `open` attribute before calling it.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use tracing::warn;
use wasm_bindgen_x::JsCast;

static NEXT_MODAL_ID: AtomicU64 = AtomicU64::new(0);

/// Call `showModal` or `close` on the dialog with `id` if it is not already
/// in the requested state.
fn sync_dialog(id: &str, open: bool) {
    let Some(element) = web_sys_x::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };

    if element.has_attribute("open") == open {
        return;
    }

    let method = if open { "showModal" } else { "close" };
    let Ok(value) = js_sys_x::Reflect::get(&element, &method.into()) else {
        return;
    };
    if let Some(func) = value.dyn_ref::<js_sys_x::Function>() {
        if func.call0(&element).is_err() {
            warn!("dialog {id}: {method}() failed");
        }
    }
}

#[component]
pub fn Modal(
    is_open: ReadSignal<bool>,
    /// Escape key or backdrop click
    on_close: EventHandler<()>,
    /// Id of the element holding the dialog title
    #[props(default)]
    labelled_by: Option<String>,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let dialog_id = use_hook(|| format!("modal-{}", NEXT_MODAL_ID.fetch_add(1, Ordering::Relaxed)));

    let effect_id = dialog_id.clone();
    use_effect(move || sync_dialog(&effect_id, is_open()));

    let extra = class.unwrap_or_default();

    // The <dialog> itself must not get display classes (flex, block, ...):
    // they would override the native display:none while closed.
    rsx! {
        dialog {
            id: "{dialog_id}",
            class: "p-0 bg-transparent backdrop:bg-black/80 {extra}",
            aria_labelledby: labelled_by.as_deref(),
            oncancel: move |evt| {
                evt.prevent_default();
                on_close.call(());
            },
            if is_open() {
                div {
                    class: "fixed inset-0 flex items-center justify-center",
                    onclick: move |_| on_close.call(()),
                    div { onclick: move |evt| evt.stop_propagation(), {children} }
                }
            }
        }
    }
}
