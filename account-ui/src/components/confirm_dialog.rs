//! Generic confirmation dialog
//!
//! The account deletion panel does not depend on this view; hosts that have
//! no richer deletion dialog can mount it through the panel's `dialog` prop.

use crate::components::{Button, ButtonSize, ButtonVariant, Modal};
use dioxus::prelude::*;

const TITLE_ID: &str = "confirm-dialog-title";

#[component]
pub fn ConfirmDialogView(
    is_open: ReadSignal<bool>,
    title: String,
    message: String,
    #[props(default = "Confirm".to_string())] confirm_label: String,
    #[props(default = "Cancel".to_string())] cancel_label: String,
    #[props(default = true)] is_destructive: bool,
    #[props(default)] is_busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let confirm_variant = if is_destructive {
        ButtonVariant::Danger
    } else {
        ButtonVariant::Primary
    };

    rsx! {
        Modal {
            is_open,
            labelled_by: Some(TITLE_ID.to_string()),
            on_close: move |_| {
                if !is_busy {
                    on_cancel.call(());
                }
            },
            div { class: "bg-gray-800 rounded-lg p-6 max-w-md w-full mx-4",
                h2 { id: TITLE_ID, class: "text-xl font-bold text-white mb-4", "{title}" }
                p { class: "text-gray-300 mb-6", "{message}" }
                div { class: "flex gap-3 justify-end",
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Medium,
                        disabled: is_busy,
                        onclick: move |_| on_cancel.call(()),
                        "{cancel_label}"
                    }
                    Button {
                        variant: confirm_variant,
                        size: ButtonSize::Medium,
                        disabled: is_busy,
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
