//! Account settings mocks - Web app for developing the account deletion panel
//!
//! Renders account-ui components with interactive controls, presets and
//! shareable URL state.

pub mod mocks;
pub mod pages;
pub mod ui;

use dioxus::prelude::*;
use pages::{MockAccountDeletion, MockIndex};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    MockIndex {},
    #[route("/account-deletion?:state")]
    MockAccountDeletion { state: Option<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
