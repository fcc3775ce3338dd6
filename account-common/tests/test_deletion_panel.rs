//! Props JSON through to the panel's gate and copy

use account_common::messages::ALL_MESSAGES;
use account_common::{
    placeholders, AccountState, Catalog, CloseOutcome, DeletionBlock, DeletionDialog,
    DeletionNotice, DeletionPanelText, DialogError, PanelConfig, SourceText,
};

fn evaluate(json: &str) -> DeletionBlock {
    let account = AccountState::from_json(json).expect("valid props");
    DeletionBlock::evaluate(&account)
}

#[test]
fn test_active_unlinked_account_can_open_dialog() {
    let block = evaluate(
        r#"{"isActive": true, "socialAccountLinks": {"providers": [
            {"name": "Google", "connected": false},
            {"name": "Facebook", "connected": false}
        ]}}"#,
    );
    assert!(!block.is_blocked());
    assert!(block.notices().is_empty());

    let mut dialog = DeletionDialog::new();
    dialog.open(block).unwrap();
    assert!(dialog.is_open());
    assert_eq!(dialog.close(), CloseOutcome::RestoreFocus);
    assert!(!dialog.is_open());
}

#[test]
fn test_inactive_account_shows_activation_notice() {
    let block = evaluate(r#"{"isActive": false, "socialAccountLinks": {"providers": []}}"#);
    let text = DeletionPanelText::build(&SourceText, &PanelConfig::default());

    let notices: Vec<&str> = block
        .notices()
        .into_iter()
        .map(|n| text.notice_html(n))
        .collect();
    assert_eq!(
        notices,
        vec!["Before proceeding, please activate your account."]
    );

    let mut dialog = DeletionDialog::new();
    assert_eq!(
        dialog.open(block),
        Err(DialogError::Blocked(DeletionBlock::Inactive))
    );
    assert!(!dialog.is_open());
}

#[test]
fn test_linked_provider_blocks_even_when_inactive() {
    for is_active in [true, false] {
        let json = format!(
            r#"{{"isActive": {is_active}, "socialAccountLinks": {{"providers": [
                {{"name": "GitHub", "connected": true}}
            ]}}}}"#
        );
        let block = evaluate(&json);
        assert!(block.is_blocked());
        assert!(block.notices().contains(&DeletionNotice::UnlinkSocialAccounts));
        assert!(DeletionDialog::new().open(block).is_err());
    }
}

#[test]
fn test_absent_provider_data_falls_back_to_unlinked() {
    assert_eq!(evaluate(r#"{"isActive": true}"#), DeletionBlock::None);
}

#[test]
fn test_spanish_catalog_renders_every_message() {
    let mut yaml = String::from("locale: es\nmessages:\n");
    for msgid in ALL_MESSAGES {
        // Keep placeholders, prefix the text so it is visibly translated.
        let translated = format!("ES {msgid}");
        yaml.push_str(&format!(
            "  {}: {}\n",
            yaml_quoted(msgid),
            yaml_quoted(&translated)
        ));
    }

    let catalog = Catalog::from_yaml_str(&yaml).unwrap();
    assert_eq!(catalog.len(), ALL_MESSAGES.len());

    let text = DeletionPanelText::build(&catalog, &PanelConfig::default());
    assert!(text.delete_button_label.starts_with("ES "));
    assert!(text.lose_access_html.starts_with("ES "));
    assert_eq!(
        text.lose_access_html
            .matches(r#"<a href="/dashboard" target="_blank">"#)
            .count(),
        1
    );
    assert!(placeholders(&text.permanence_warning_html).is_empty());
}

fn yaml_quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}
