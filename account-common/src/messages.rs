//! Translated copy for the account deletion panel
//!
//! Fields ending in `_html` hold trusted markup and must be inserted as raw
//! HTML; every other field is plain text.

use crate::interpolate::{interpolate, Markup};
use crate::{DeletionNotice, PanelConfig, Translator};

pub const FAREWELL: &str = "We’re sorry to see you go!";
pub const PERMANENCE_NOTICE: &str = "Please note: Deletion of your account and personal data is permanent and cannot be undone. {platform_name} will not be able to recover your account or the data that is deleted.";
pub const COURSE_ACCESS_NOTICE: &str =
    "Once your account is deleted, you cannot use it to take courses on the site hosted by {platform_name}.";
pub const LOSE_ACCESS: &str = "You may also lose access to verified certificates and other program credentials. If you want to make a copy of these for your records before proceeding with deletion, please go to {htmlStart}Dashboard{htmlEnd} to view your certificates.";
pub const PERMANENCE_WARNING: &str = "{strongStart}Warning: Account deletion is permanent.{strongEnd} Please read the above carefully before proceeding. This is an irreversible action, and {strongStart}you will no longer be able to use the same email on {platform_name}.{strongEnd}";
pub const CHANGE_ACCOUNT_INFO: &str =
    "{htmlStart}Want to change your email, name, or password instead?{htmlEnd}";
pub const DELETE_BUTTON: &str = "Delete My Account";
pub const SOCIAL_AUTH_NOTICE: &str =
    "Before proceeding, please {htmlStart}unlink all social media accounts{htmlEnd}.";
pub const ACTIVATION_NOTICE: &str =
    "Before proceeding, please {htmlStart}activate your account{htmlEnd}.";

/// Every message id the panel looks up
pub const ALL_MESSAGES: &[&str] = &[
    FAREWELL,
    PERMANENCE_NOTICE,
    COURSE_ACCESS_NOTICE,
    LOSE_ACCESS,
    PERMANENCE_WARNING,
    CHANGE_ACCOUNT_INFO,
    DELETE_BUTTON,
    SOCIAL_AUTH_NOTICE,
    ACTIVATION_NOTICE,
];

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn with_markup(template: &str, markup: &Markup, platform_name: &str) -> String {
    interpolate(
        template,
        &[
            ("htmlStart", markup.start.as_str()),
            ("htmlEnd", markup.end.as_str()),
            ("platform_name", platform_name),
        ],
    )
}

/// All strings rendered by the panel, already translated and interpolated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionPanelText {
    pub farewell: String,
    pub permanence_notice: String,
    pub course_access_notice: String,
    pub lose_access_html: String,
    pub permanence_warning_html: String,
    pub change_account_info_html: String,
    pub delete_button_label: String,
    pub social_auth_notice_html: String,
    pub activation_notice_html: String,
}

impl DeletionPanelText {
    pub fn build(translator: &dyn Translator, config: &PanelConfig) -> Self {
        let platform = config.platform_name.as_str();
        let platform_html = escape_text(platform);
        let plain = |msgid: &str| interpolate(&translator.gettext(msgid), &[("platform_name", platform)]);

        let strong = Markup::strong();
        let permanence_warning_html = interpolate(
            &translator.gettext(PERMANENCE_WARNING),
            &[
                ("strongStart", strong.start.as_str()),
                ("strongEnd", strong.end.as_str()),
                ("platform_name", platform_html.as_str()),
            ],
        );

        let new_tab = config.open_links_in_new_tab;
        let empty = Markup::empty();

        Self {
            farewell: plain(FAREWELL),
            permanence_notice: plain(PERMANENCE_NOTICE),
            course_access_notice: plain(COURSE_ACCESS_NOTICE),
            lose_access_html: with_markup(
                &translator.gettext(LOSE_ACCESS),
                &Markup::link(&config.dashboard_url, new_tab),
                &platform_html,
            ),
            permanence_warning_html,
            change_account_info_html: with_markup(
                &translator.gettext(CHANGE_ACCOUNT_INFO),
                &Markup::link(&config.account_help_url, new_tab),
                &platform_html,
            ),
            delete_button_label: plain(DELETE_BUTTON),
            social_auth_notice_html: with_markup(
                &translator.gettext(SOCIAL_AUTH_NOTICE),
                &empty,
                &platform_html,
            ),
            activation_notice_html: with_markup(
                &translator.gettext(ACTIVATION_NOTICE),
                &empty,
                &platform_html,
            ),
        }
    }

    pub fn notice_html(&self, notice: DeletionNotice) -> &str {
        match notice {
            DeletionNotice::UnlinkSocialAccounts => &self.social_auth_notice_html,
            DeletionNotice::ActivateAccount => &self.activation_notice_html,
        }
    }
}
