//! Storybook-like harness for component mocks
//!
//! - ControlRegistry: typed controls synced to the URL
//! - Preset: named control states
//! - MockPanel: control bar plus the mocked component

mod panel;
mod preset;
mod registry;

pub use panel::MockPanel;
pub use preset::Preset;
pub use registry::{ControlRegistry, ControlRegistryBuilder, ControlValue};
