//! Translator context
//!
//! Views read the active [`Translator`] from context instead of a global.
//! Mount an [`I18nProvider`] above the panel; without one, source text is shown.

use account_common::{SourceText, Translator};
use dioxus::prelude::*;
use std::rc::Rc;

/// Shared handle to the active translator
#[derive(Clone)]
pub struct I18n(Rc<dyn Translator>);

impl I18n {
    pub fn new(translator: impl Translator + 'static) -> Self {
        Self(Rc::new(translator))
    }

    pub fn translator(&self) -> &dyn Translator {
        self.0.as_ref()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(SourceText)
    }
}

impl PartialEq for I18n {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Provides `i18n` to every descendant.
///
/// The context is fixed for the provider's lifetime; give the provider a new
/// `key` to switch locales.
#[component]
pub fn I18nProvider(i18n: I18n, children: Element) -> Element {
    use_context_provider(|| i18n);
    rsx! {
        {children}
    }
}

pub fn use_i18n() -> I18n {
    try_use_context::<I18n>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use account_common::Catalog;
    use std::collections::HashMap;

    #[test]
    fn test_default_is_source_text() {
        assert_eq!(I18n::default().translator().gettext("Delete My Account"), "Delete My Account");
    }

    #[test]
    fn test_equality_is_identity() {
        let a = I18n::default();
        let b = a.clone();
        assert!(a == b);
        assert!(a != I18n::default());
    }

    #[test]
    fn test_wraps_catalog() {
        let mut messages = HashMap::new();
        messages.insert("Delete My Account".to_string(), "Eliminar mi cuenta".to_string());
        let i18n = I18n::new(Catalog::new("es", messages).unwrap());
        assert_eq!(i18n.translator().gettext("Delete My Account"), "Eliminar mi cuenta");
    }
}
