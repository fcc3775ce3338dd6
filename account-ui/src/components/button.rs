//! Buttons

use dioxus::prelude::*;

/// Unstyled `<button>` with disabled handling and an optional mount hook.
///
/// `onmounted` hands the element to the caller, e.g. to move focus back to it
/// after a dialog closes.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] id: Option<String>,
    #[props(default)] class: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] onmounted: Option<EventHandler<MountedEvent>>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            id: id.as_deref(),
            class: class.as_deref(),
            disabled,
            aria_label: aria_label.as_deref(),
            aria_disabled: if disabled { Some("true") } else { None },
            onmounted: move |e| {
                if let Some(handler) = onmounted {
                    handler.call(e);
                }
            },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    /// Transparent with a primary-colored border
    Outline,
    /// Red background, for the confirming step of a destructive action
    Danger,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    Small,
    Medium,
}

#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] id: Option<String>,
    #[props(default)] class: Option<String>,
    #[props(default)] onmounted: Option<EventHandler<MountedEvent>>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let sizing = match size {
        ButtonSize::Small => "px-3 py-1.5 text-sm",
        ButtonSize::Medium => "px-4 py-2",
    };

    let look = match variant {
        ButtonVariant::Primary => "btn-primary bg-indigo-600 hover:bg-indigo-500 text-white",
        ButtonVariant::Secondary => "btn-secondary bg-gray-700 hover:bg-gray-600 text-gray-200",
        ButtonVariant::Outline => {
            "btn-outline-primary border border-indigo-500 text-indigo-300 hover:bg-indigo-500/10"
        }
        ButtonVariant::Danger => "btn-danger bg-red-600 hover:bg-red-500 text-white",
    };

    let mut computed = format!(
        "btn inline-flex items-center gap-2 rounded-lg transition-colors disabled:opacity-50 disabled:cursor-not-allowed {sizing} {look}"
    );
    if let Some(extra) = &class {
        computed.push(' ');
        computed.push_str(extra);
    }

    rsx! {
        ChromelessButton {
            id,
            disabled,
            class: Some(computed),
            onmounted,
            onclick,
            {children}
        }
    }
}
