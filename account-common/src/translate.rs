//! Translation seam
//!
//! The panel never calls a global `gettext`; callers hand it a [`Translator`].

use crate::interpolate::placeholder_counts;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Looks up the translation for a source-language message id
pub trait Translator {
    fn gettext(&self, msgid: &str) -> String;
}

/// Source-language passthrough
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceText;

impl Translator for SourceText {
    fn gettext(&self, msgid: &str) -> String {
        msgid.to_string()
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Translation of {msgid:?} uses placeholders {found:?}, expected {expected:?}")]
    PlaceholderMismatch {
        msgid: String,
        expected: BTreeMap<String, usize>,
        found: BTreeMap<String, usize>,
    },
}

#[derive(Debug, Deserialize)]
struct CatalogYaml {
    locale: String,
    #[serde(default)]
    messages: HashMap<String, String>,
}

/// msgid -> translation table for one locale
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    locale: String,
    messages: HashMap<String, String>,
}

impl Catalog {
    /// Build a catalog, rejecting translations whose placeholders differ from
    /// their msgid, counting repeats. Empty translations are treated as
    /// untranslated.
    pub fn new(
        locale: impl Into<String>,
        messages: HashMap<String, String>,
    ) -> Result<Self, CatalogError> {
        for (msgid, translation) in &messages {
            if translation.is_empty() {
                continue;
            }
            let expected = placeholder_counts(msgid);
            let found = placeholder_counts(translation);
            if expected != found {
                return Err(CatalogError::PlaceholderMismatch {
                    msgid: msgid.clone(),
                    expected,
                    found,
                });
            }
        }

        Ok(Self {
            locale: locale.into(),
            messages,
        })
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let parsed: CatalogYaml = serde_yaml::from_str(yaml)?;
        Self::new(parsed.locale, parsed.messages)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_yaml_str(&contents)?;
        info!(
            "Loaded {} catalog with {} messages from {}",
            catalog.locale,
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translator for Catalog {
    fn gettext(&self, msgid: &str) -> String {
        match self.messages.get(msgid) {
            Some(translation) if !translation.is_empty() => translation.clone(),
            _ => {
                warn!("No {} translation for {:?}", self.locale, msgid);
                msgid.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const YAML: &str = r#"
locale: es
messages:
  "Delete My Account": "Eliminar mi cuenta"
  "Before proceeding, please {htmlStart}activate your account{htmlEnd}.": "Antes de continuar, {htmlStart}active su cuenta{htmlEnd}."
  "Untranslated": ""
"#;

    #[test]
    fn test_source_text_passthrough() {
        assert_eq!(SourceText.gettext("Delete My Account"), "Delete My Account");
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = Catalog::from_yaml_str(YAML).unwrap();
        assert_eq!(catalog.locale(), "es");
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.gettext("Delete My Account"), "Eliminar mi cuenta");
    }

    #[test]
    fn test_catalog_falls_back_to_msgid() {
        let catalog = Catalog::from_yaml_str(YAML).unwrap();
        assert_eq!(catalog.gettext("Missing"), "Missing");
        assert_eq!(catalog.gettext("Untranslated"), "Untranslated");
    }

    #[test]
    fn test_catalog_rejects_dropped_placeholder() {
        let yaml = r#"
locale: fr
messages:
  "Go to {htmlStart}Dashboard{htmlEnd}": "Aller au tableau de bord{htmlEnd}"
"#;
        match Catalog::from_yaml_str(yaml) {
            Err(CatalogError::PlaceholderMismatch {
                expected, found, ..
            }) => {
                assert_eq!(expected.get("htmlStart"), Some(&1));
                assert_eq!(expected.get("htmlEnd"), Some(&1));
                assert_eq!(found.get("htmlStart"), None);
                assert_eq!(found.get("htmlEnd"), Some(&1));
            }
            other => panic!("Expected PlaceholderMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_catalog_rejects_renamed_placeholder() {
        let mut messages = HashMap::new();
        messages.insert(
            "{platform_name} rocks".to_string(),
            "{plataforma} mola".to_string(),
        );
        assert!(matches!(
            Catalog::new("es", messages),
            Err(CatalogError::PlaceholderMismatch { .. })
        ));
    }

    #[test]
    fn test_catalog_rejects_dropped_repeat_of_placeholder() {
        let mut messages = HashMap::new();
        messages.insert(
            crate::messages::PERMANENCE_WARNING.to_string(),
            "{strongStart}Aviso.{strongEnd} Lea. {strongStart}No podrá usar el correo en {platform_name}."
                .to_string(),
        );
        match Catalog::new("es", messages) {
            Err(CatalogError::PlaceholderMismatch {
                expected, found, ..
            }) => {
                assert_eq!(expected.get("strongEnd"), Some(&2));
                assert_eq!(found.get("strongEnd"), Some(&1));
                assert_eq!(found.get("strongStart"), Some(&2));
            }
            other => panic!("Expected PlaceholderMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_catalog_accepts_reordered_placeholders() {
        let mut messages = HashMap::new();
        messages.insert(
            "{strongStart}A{strongEnd} for {platform_name}".to_string(),
            "Para {platform_name}: {strongStart}A{strongEnd}".to_string(),
        );
        assert!(Catalog::new("es", messages).is_ok());
    }

    #[test]
    fn test_catalog_parse_error() {
        assert!(matches!(
            Catalog::from_yaml_str("messages: [unclosed"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_catalog_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(YAML.as_bytes()).unwrap();
        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.gettext("Delete My Account"), "Eliminar mi cuenta");
    }

    #[test]
    fn test_catalog_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Catalog::load(&dir.path().join("missing.yaml")),
            Err(CatalogError::Io(_))
        ));
    }
}
