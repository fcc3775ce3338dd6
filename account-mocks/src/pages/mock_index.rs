//! Mock index and routed mock pages

use crate::mocks::AccountDeletionMock;
use crate::ui::LinkCard;
use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn MockIndex() -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white p-8",
            h1 { class: "text-2xl font-bold mb-6", "Account settings mocks" }
            div { class: "space-y-2",
                LinkCard {
                    to: Route::MockAccountDeletion {
                        state: None,
                    },
                    title: "Account deletion",
                    description: "Warning copy, delete button, precondition notices and the confirmation dialog",
                }
            }
        }
    }
}

#[component]
pub fn MockAccountDeletion(state: Option<String>) -> Element {
    rsx! {
        AccountDeletionMock { initial_state: state }
    }
}
