//! Non-dismissible status alert

use crate::components::icons::AlertCircleIcon;
use dioxus::prelude::*;

/// Red alert box with an icon and arbitrary content.
///
/// There is no close control: the alert stays as long as the condition it
/// reports holds.
#[component]
pub fn StatusAlert(#[props(default)] icon_id: Option<String>, children: Element) -> Element {
    rsx! {
        div {
            class: "alert alert-danger modal-alert mt-4 flex items-start gap-3 bg-red-900/30 border border-red-700/50 rounded-lg p-4",
            role: "alert",
            div { class: "icon-wrapper flex-shrink-0 mt-0.5", id: icon_id.as_deref(),
                AlertCircleIcon { class: "w-5 h-5 text-red-400" }
            }
            div { class: "alert-content flex-1 space-y-1 text-sm text-red-200", {children} }
        }
    }
}
