//! account-common - Framework-free logic for the account deletion panel
//!
//! Everything here is pure: the props model, the precondition evaluator, the
//! dialog state machine, interpolation and the translated panel copy. The
//! Dioxus views in account-ui only read from these types.

mod account_state;
mod config;
mod deletion_block;
mod dialog;
pub mod interpolate;
pub mod messages;
pub mod translate;

pub use account_state::{AccountState, LinkedProvider, SocialAccountLinks};
pub use config::{ConfigError, PanelConfig};
pub use deletion_block::{DeletionBlock, DeletionNotice};
pub use dialog::{CloseOutcome, DeletionDialog, DialogError, DialogState};
pub use interpolate::{interpolate, placeholder_counts, placeholders, Markup};
pub use messages::DeletionPanelText;
pub use translate::{Catalog, CatalogError, SourceText, Translator};
