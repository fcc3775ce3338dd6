//! Named control states for quick switching

use super::registry::{ControlRegistry, ControlValue};
use std::collections::HashMap;

#[derive(Clone, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub values: HashMap<String, ControlValue>,
}

impl Preset {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            values: HashMap::new(),
        }
    }

    pub fn set_bool(mut self, key: &'static str, value: bool) -> Self {
        self.values.insert(key.to_string(), ControlValue::Bool(value));
        self
    }

    pub fn set_choice(mut self, key: &'static str, value: &'static str) -> Self {
        self.values
            .insert(key.to_string(), ControlValue::Choice(value.to_string()));
        self
    }

    /// Controls named by the preset hold its values; all others are at default.
    pub fn matches(&self, registry: &ControlRegistry) -> bool {
        registry.controls.iter().all(|control| {
            let expected = self.values.get(control.key).unwrap_or(&control.default);
            registry
                .values
                .get(control.key)
                .is_some_and(|signal| &*signal.read() == expected)
        })
    }
}
