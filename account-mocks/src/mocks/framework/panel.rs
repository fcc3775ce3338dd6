//! Control bar rendered above every mock

use super::registry::{ControlDef, ControlRegistry, ControlValue};
use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn MockPanel(title: String, registry: ControlRegistry, children: Element) -> Element {
    let choice_controls: Vec<ControlDef> = registry
        .controls
        .iter()
        .filter(|c| !c.options.is_empty())
        .cloned()
        .collect();
    let bool_controls: Vec<ControlDef> = registry
        .controls
        .iter()
        .filter(|c| c.options.is_empty())
        .cloned()
        .collect();

    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white",
            div { class: "sticky top-0 z-50 bg-gray-800 border-b border-gray-700 p-4",
                div { class: "max-w-4xl mx-auto",
                    div { class: "flex items-center gap-3 mb-3",
                        Link {
                            to: Route::MockIndex {},
                            class: "text-gray-400 hover:text-white text-sm",
                            "← Mocks"
                        }
                        h1 { class: "text-lg font-semibold", "{title}" }
                    }

                    if !registry.presets.is_empty() {
                        PresetBar { registry: registry.clone() }
                    }

                    for control in choice_controls {
                        div { key: "{control.key}", class: "flex flex-wrap gap-2 mb-3",
                            for (value , label) in control.options.clone() {
                                ChoiceButton {
                                    key: "{value}",
                                    registry: registry.clone(),
                                    control_key: control.key,
                                    value,
                                    label,
                                    doc: control.doc,
                                }
                            }
                        }
                    }

                    div { class: "flex flex-wrap gap-4 text-sm",
                        for control in bool_controls {
                            BoolCheckbox {
                                key: "{control.key}",
                                registry: registry.clone(),
                                control_key: control.key,
                                label: control.label,
                                doc: control.doc,
                            }
                        }
                    }
                }
            }

            div { class: "max-w-4xl mx-auto p-6", {children} }
        }
    }
}

#[component]
fn PresetBar(registry: ControlRegistry) -> Element {
    rsx! {
        div { class: "flex flex-wrap gap-2 mb-3",
            span { class: "text-xs text-gray-500 self-center mr-2", "Presets:" }
            for preset in registry.presets.clone() {
                button {
                    key: "{preset.name}",
                    class: if preset.matches(&registry) { "px-2 py-1 text-xs rounded bg-blue-600 text-white" } else { "px-2 py-1 text-xs rounded bg-gray-700 text-gray-300 hover:bg-gray-600" },
                    onclick: {
                        let preset = preset.clone();
                        let registry = registry.clone();
                        move |_| registry.apply_preset(&preset)
                    },
                    "{preset.name}"
                }
            }
        }
    }
}

#[component]
fn ChoiceButton(
    registry: ControlRegistry,
    control_key: &'static str,
    value: &'static str,
    label: &'static str,
    doc: Option<&'static str>,
) -> Element {
    // Reading here subscribes this button to its control
    let is_selected = registry.get_choice(control_key) == value;

    rsx! {
        button {
            class: if is_selected { "px-3 py-1.5 text-sm rounded bg-blue-600 text-white" } else { "px-3 py-1.5 text-sm rounded bg-gray-700 text-gray-300 hover:bg-gray-600" },
            title: doc.unwrap_or(""),
            onclick: move |_| registry.set(control_key, ControlValue::Choice(value.to_string())),
            "{label}"
        }
    }
}

#[component]
fn BoolCheckbox(
    registry: ControlRegistry,
    control_key: &'static str,
    label: &'static str,
    doc: Option<&'static str>,
) -> Element {
    let checked = registry.get_bool(control_key);

    rsx! {
        label {
            class: "flex items-center gap-2 text-gray-400",
            title: doc.unwrap_or(""),
            input {
                r#type: "checkbox",
                checked,
                onchange: move |e| registry.set(control_key, ControlValue::Bool(e.checked())),
            }
            "{label}"
        }
    }
}
