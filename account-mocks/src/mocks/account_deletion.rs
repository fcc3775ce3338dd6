//! AccountDeletionPanel mock

use super::framework::{ControlRegistryBuilder, MockPanel, Preset};
use crate::Route;
use account_common::{Catalog, LinkedProvider, PanelConfig, SocialAccountLinks};
use account_ui::{
    AccountDeletionPanel, ConfirmDialogView, I18n, I18nProvider, TrashIcon,
};
use dioxus::prelude::*;
use tracing::{info, warn};

pub const SPANISH_CATALOG: &str = include_str!("../../assets/catalogs/es.yaml");

fn load_spanish() -> I18n {
    match Catalog::from_yaml_str(SPANISH_CATALOG) {
        Ok(catalog) => I18n::new(catalog),
        Err(e) => {
            warn!("Bundled Spanish catalog is invalid, showing source text: {e}");
            I18n::default()
        }
    }
}

fn providers(google: bool, facebook: bool) -> SocialAccountLinks {
    SocialAccountLinks::new(vec![
        LinkedProvider::new("Google", google),
        LinkedProvider::new("Facebook", facebook),
    ])
}

#[component]
pub fn AccountDeletionMock(initial_state: Option<String>) -> Element {
    let registry = ControlRegistryBuilder::new()
        .choice_control("locale", "Locale", "en", vec![("en", "English"), ("es", "Español")])
        .bool_control("is_active", "Account active", true)
        .bool_control("google", "Google linked", false)
        .doc("Any connected provider blocks deletion")
        .bool_control("facebook", "Facebook linked", false)
        .bool_control("same_tab", "Links open in same tab", false)
        .with_presets(vec![
            Preset::new("Can delete"),
            Preset::new("Inactive").set_bool("is_active", false),
            Preset::new("Social linked").set_bool("google", true),
            Preset::new("Inactive + linked")
                .set_bool("is_active", false)
                .set_bool("facebook", true),
            Preset::new("Spanish, inactive")
                .set_choice("locale", "es")
                .set_bool("is_active", false),
        ])
        .build(initial_state);

    registry.use_url_sync(|state| Route::MockAccountDeletion { state });

    let english = use_hook(I18n::default);
    let spanish = use_hook(load_spanish);

    let locale = registry.get_choice("locale");
    let i18n = if locale == "es" { spanish } else { english };
    let config = PanelConfig {
        open_links_in_new_tab: !registry.get_bool("same_tab"),
        ..PanelConfig::default()
    };

    rsx! {
        MockPanel { title: "AccountDeletionPanel", registry: registry.clone(),
            div { class: "max-w-2xl",
                I18nProvider { key: "{locale}", i18n,
                    AccountDeletionPanel {
                        is_active: registry.get_bool("is_active"),
                        social_account_links: providers(registry.get_bool("google"), registry.get_bool("facebook")),
                        config,
                        dialog: move |on_close: EventHandler<()>| rsx! {
                            MockDeletionDialog { on_close }
                        },
                    }
                }
            }
        }
    }
}

/// Stand-in for the real deletion dialog (password check + request)
#[component]
fn MockDeletionDialog(on_close: EventHandler<()>) -> Element {
    let open = use_signal(|| true);
    let is_open: ReadSignal<bool> = open.into();

    rsx! {
        ConfirmDialogView {
            is_open,
            title: "Are you sure?".to_string(),
            message: "You have selected “Delete my account.” Deletion of your account and personal data is permanent and cannot be undone.".to_string(),
            confirm_label: "Yes, Delete".to_string(),
            on_confirm: move |_| {
                info!("Mock: deletion confirmed");
                on_close.call(());
            },
            on_cancel: move |_| on_close.call(()),
        }
        div { class: "mt-4 flex items-center gap-2 text-xs text-gray-500",
            TrashIcon { class: "w-3 h-3" }
            "Confirmation dialog is open"
        }
    }
}
