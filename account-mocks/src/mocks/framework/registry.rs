//! Typed control registry with URL sync

use super::preset::Preset;
use crate::mocks::url_state::{encode_state, parse_state};
use crate::Route;
use dioxus::prelude::*;
use std::collections::{BTreeMap, HashMap};

#[derive(Clone, Debug, PartialEq)]
pub enum ControlValue {
    Bool(bool),
    Choice(String),
}

impl ControlValue {
    fn encode(&self) -> String {
        match self {
            ControlValue::Bool(b) => if *b { "1" } else { "0" }.to_string(),
            ControlValue::Choice(s) => s.clone(),
        }
    }

    /// Parse a URL value using `self` as the type witness.
    fn decode(&self, raw: &str) -> Self {
        match self {
            ControlValue::Bool(_) => ControlValue::Bool(raw == "1" || raw == "true"),
            ControlValue::Choice(_) => ControlValue::Choice(raw.to_string()),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct ControlDef {
    pub key: &'static str,
    pub label: &'static str,
    pub default: ControlValue,
    pub doc: Option<&'static str>,
    /// (value, label) pairs for choice controls
    pub options: Vec<(&'static str, &'static str)>,
}

pub struct ControlRegistryBuilder {
    controls: Vec<ControlDef>,
    presets: Vec<Preset>,
}

impl ControlRegistryBuilder {
    pub fn new() -> Self {
        Self {
            controls: Vec::new(),
            presets: Vec::new(),
        }
    }

    pub fn bool_control(mut self, key: &'static str, label: &'static str, default: bool) -> Self {
        self.controls.push(ControlDef {
            key,
            label,
            default: ControlValue::Bool(default),
            doc: None,
            options: Vec::new(),
        });
        self
    }

    pub fn choice_control(
        mut self,
        key: &'static str,
        label: &'static str,
        default: &'static str,
        options: Vec<(&'static str, &'static str)>,
    ) -> Self {
        self.controls.push(ControlDef {
            key,
            label,
            default: ControlValue::Choice(default.to_string()),
            doc: None,
            options,
        });
        self
    }

    /// Document the last control (shown as a tooltip)
    pub fn doc(mut self, doc: &'static str) -> Self {
        if let Some(last) = self.controls.last_mut() {
            last.doc = Some(doc);
        }
        self
    }

    pub fn with_presets(mut self, presets: Vec<Preset>) -> Self {
        self.presets = presets;
        self
    }

    /// Must be called inside a component (creates one signal per control).
    pub fn build(self, initial_state: Option<String>) -> ControlRegistry {
        let overrides = initial_state
            .as_deref()
            .map(parse_state)
            .unwrap_or_default();

        let mut values = HashMap::new();
        for def in &self.controls {
            let initial = overrides
                .get(def.key)
                .map(|raw| def.default.decode(raw))
                .unwrap_or_else(|| def.default.clone());
            values.insert(def.key, use_signal(|| initial));
        }

        ControlRegistry {
            controls: self.controls,
            values,
            presets: self.presets,
        }
    }
}

impl Default for ControlRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, PartialEq)]
pub struct ControlRegistry {
    pub controls: Vec<ControlDef>,
    pub values: HashMap<&'static str, Signal<ControlValue>>,
    pub presets: Vec<Preset>,
}

impl ControlRegistry {
    pub fn get_bool(&self, key: &'static str) -> bool {
        self.values
            .get(key)
            .map(|s| matches!(&*s.read(), ControlValue::Bool(true)))
            .unwrap_or(false)
    }

    pub fn get_choice(&self, key: &'static str) -> String {
        self.values
            .get(key)
            .and_then(|s| match &*s.read() {
                ControlValue::Choice(v) => Some(v.clone()),
                ControlValue::Bool(_) => None,
            })
            .unwrap_or_default()
    }

    pub fn set(&self, key: &str, value: ControlValue) {
        if let Some(mut signal) = self.values.get(key).copied() {
            signal.set(value);
        }
    }

    /// Reset everything to defaults, then apply the preset's values.
    pub fn apply_preset(&self, preset: &Preset) {
        for control in &self.controls {
            self.set(control.key, control.default.clone());
        }
        for (key, value) in &preset.values {
            self.set(key, value.clone());
        }
    }

    /// Non-default values, encoded for the URL
    pub fn build_state(&self) -> Option<String> {
        let mut changed = BTreeMap::new();
        for def in &self.controls {
            if let Some(signal) = self.values.get(def.key) {
                let value = signal.read();
                if *value != def.default {
                    changed.insert(def.key.to_string(), value.encode());
                }
            }
        }
        encode_state(&changed)
    }

    /// Keep the URL in step with the controls. `route` builds the page's
    /// route from the encoded state.
    pub fn use_url_sync(&self, route: fn(Option<String>) -> Route) {
        let registry = self.clone();
        let mut is_mounted = use_signal(|| false);

        use_effect(move || {
            for signal in registry.values.values() {
                let _ = signal.read();
            }

            // Skip the first run so loading a URL doesn't rewrite it.
            if !*is_mounted.peek() {
                is_mounted.set(true);
                return;
            }

            navigator().replace(route(registry.build_state()));
        });
    }
}
