//! Shared UI components

pub mod account_deletion;
pub mod button;
pub mod confirm_dialog;
pub mod icons;
pub mod modal;
pub mod status_alert;

pub use account_deletion::AccountDeletionPanel;
pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use confirm_dialog::ConfirmDialogView;
pub use icons::{AlertCircleIcon, TrashIcon};
pub use modal::Modal;
pub use status_alert::StatusAlert;
