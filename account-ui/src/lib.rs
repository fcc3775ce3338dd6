//! account-ui - Dioxus views for the account deletion panel
//!
//! Pure, props-based components. All decisions (what is blocked, which
//! notices show, what the copy says) come from account-common.

pub mod components;
pub mod i18n;

pub use components::*;
pub use i18n::{use_i18n, I18n, I18nProvider};
