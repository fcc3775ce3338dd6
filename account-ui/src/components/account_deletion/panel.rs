//! Account deletion panel view

use crate::components::{Button, ButtonSize, ButtonVariant, StatusAlert};
use crate::i18n::use_i18n;
use account_common::{
    AccountState, CloseOutcome, DeletionBlock, DeletionDialog, DeletionPanelText, PanelConfig,
    SocialAccountLinks,
};
use dioxus::prelude::*;
use std::rc::Rc;
use tracing::{debug, info, warn};

pub const DELETE_BUTTON_ID: &str = "delete-account-btn";
pub const ALERT_ICON_ID: &str = "delete-confirmation-body-error-icon";

/// Warning copy, the delete button and any precondition notices.
///
/// The confirmation dialog itself belongs to the host: `dialog` is called with
/// the close handler while the dialog is open. Closing returns focus to the
/// delete button.
#[component]
pub fn AccountDeletionPanel(
    is_active: bool,
    social_account_links: SocialAccountLinks,
    dialog: Callback<EventHandler<()>, Element>,
    #[props(default)] config: PanelConfig,
) -> Element {
    let i18n = use_i18n();
    let block = DeletionBlock::evaluate(&AccountState::new(is_active, social_account_links));
    let text = DeletionPanelText::build(i18n.translator(), &config);
    let notices: Vec<String> = block
        .notices()
        .into_iter()
        .map(|notice| text.notice_html(notice).to_string())
        .collect();
    let DeletionPanelText {
        farewell,
        permanence_notice,
        course_access_notice,
        lose_access_html,
        permanence_warning_html,
        change_account_info_html,
        delete_button_label,
        ..
    } = text;

    let mut deletion_dialog = use_signal(DeletionDialog::new);
    let mut trigger: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    let on_close = use_callback(move |()| {
        if deletion_dialog.write().close() != CloseOutcome::RestoreFocus {
            return;
        }
        info!("Account deletion dialog closed");
        if let Some(button) = trigger.cloned() {
            spawn(async move {
                if let Err(e) = button.set_focus(true).await {
                    warn!("Could not return focus to the delete button: {e:?}");
                }
            });
        }
    });

    use_drop(move || {
        let dialog = *deletion_dialog.peek();
        if dialog.is_open() {
            let state = dialog.teardown();
            debug!("Account deletion panel unmounted with dialog open, now {state:?}");
        }
    });

    let open_dialog = move |_: MouseEvent| {
        let result = deletion_dialog.write().open(block);
        match result {
            Ok(()) => info!("Account deletion dialog opened"),
            Err(e) => warn!("{e}"),
        }
    };

    let dialog_open = deletion_dialog.read().is_open();

    rsx! {
        div { class: "account-deletion-details space-y-3",
            p { class: "account-settings-header-subtitle", "{farewell}" }
            p { class: "account-settings-header-subtitle", "{permanence_notice}" }
            p { class: "account-settings-header-subtitle", "{course_access_notice}" }
            p {
                class: "account-settings-header-subtitle",
                dangerous_inner_html: lose_access_html,
            }
            p {
                class: "account-settings-header-subtitle-warning",
                dangerous_inner_html: permanence_warning_html,
            }
            p {
                class: "account-settings-header-subtitle",
                dangerous_inner_html: change_account_info_html,
            }
            Button {
                id: DELETE_BUTTON_ID.to_string(),
                variant: ButtonVariant::Outline,
                size: ButtonSize::Medium,
                disabled: block.is_blocked(),
                onmounted: move |evt: MountedEvent| trigger.set(Some(evt.data())),
                onclick: open_dialog,
                "{delete_button_label}"
            }
            if !notices.is_empty() {
                StatusAlert { icon_id: ALERT_ICON_ID.to_string(),
                    for (i , html) in notices.into_iter().enumerate() {
                        p { key: "{i}", dangerous_inner_html: html }
                    }
                }
            }
            if dialog_open {
                {dialog.call(on_close)}
            }
        }
    }
}
