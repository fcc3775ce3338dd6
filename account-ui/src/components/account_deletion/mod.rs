mod panel;

pub use panel::{AccountDeletionPanel, ALERT_ICON_ID, DELETE_BUTTON_ID};
