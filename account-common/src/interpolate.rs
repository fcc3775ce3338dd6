//! Named-placeholder interpolation for translated templates
//!
//! Placeholders look like `{name}` where `name` is one or more word
//! characters. Substituted values are inserted verbatim: markup passed in is
//! trusted and is NOT escaped, so templates must come from translators, never
//! from users.

use regex::{Captures, Regex};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{(\w+)\}").expect("placeholder pattern is valid"))
}

/// Replace every `{name}` that has a substitution. Unknown placeholders are
/// left as-is and substituted values are not scanned again.
pub fn interpolate(template: &str, substitutions: &[(&str, &str)]) -> String {
    placeholder_pattern()
        .replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            match substitutions.iter().find(|(key, _)| *key == name) {
                Some((_, value)) => (*value).to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Placeholder names used by a template
pub fn placeholders(template: &str) -> BTreeSet<String> {
    placeholder_pattern()
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// How many times each placeholder appears in a template
pub fn placeholder_counts(template: &str) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for caps in placeholder_pattern().captures_iter(template) {
        *counts.entry(caps[1].to_string()).or_insert(0) += 1;
    }
    counts
}

/// A trusted pair of opening/closing markup fragments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup {
    pub start: String,
    pub end: String,
}

impl Markup {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Anchor pointing at an operator-configured URL
    pub fn link(href: &str, new_tab: bool) -> Self {
        let href = href.replace('"', "&quot;");
        let start = if new_tab {
            format!(r#"<a href="{href}" target="_blank">"#)
        } else {
            format!(r#"<a href="{href}">"#)
        };
        Self::new(start, "</a>")
    }

    pub fn strong() -> Self {
        Self::new("<strong>", "</strong>")
    }

    /// Used where the template has markup placeholders but the text is shown plain
    pub fn empty() -> Self {
        Self::new("", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_each_placeholder_once() {
        let out = interpolate(
            "Go to {htmlStart}Dashboard{htmlEnd} now.",
            &[("htmlStart", "<a href=\"/dashboard\">"), ("htmlEnd", "</a>")],
        );
        assert_eq!(out, "Go to <a href=\"/dashboard\">Dashboard</a> now.");
        assert_eq!(out.matches("<a href=\"/dashboard\">").count(), 1);
        assert_eq!(out.matches("</a>").count(), 1);
    }

    #[test]
    fn test_repeated_placeholder_substituted_at_every_position() {
        let out = interpolate(
            "{strongStart}A{strongEnd} and {strongStart}B{strongEnd}",
            &[("strongStart", "<strong>"), ("strongEnd", "</strong>")],
        );
        assert_eq!(out, "<strong>A</strong> and <strong>B</strong>");
    }

    #[test]
    fn test_unknown_placeholder_left_verbatim() {
        let out = interpolate("Hello {name}, see {other}", &[("name", "Ada")]);
        assert_eq!(out, "Hello Ada, see {other}");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let out = interpolate("{a}", &[("a", "{b}"), ("b", "nope")]);
        assert_eq!(out, "{b}");
    }

    #[test]
    fn test_markup_is_not_escaped() {
        let out = interpolate("{x}", &[("x", "<em>&</em>")]);
        assert_eq!(out, "<em>&</em>");
    }

    #[test]
    fn test_non_placeholder_braces_untouched() {
        assert_eq!(interpolate("{} { x } {", &[("x", "y")]), "{} { x } {");
    }

    #[test]
    fn test_empty_markup_drops_placeholders() {
        let empty = Markup::empty();
        let out = interpolate(
            "Before proceeding, please {htmlStart}activate your account{htmlEnd}.",
            &[("htmlStart", empty.start.as_str()), ("htmlEnd", empty.end.as_str())],
        );
        assert_eq!(out, "Before proceeding, please activate your account.");
    }

    #[test]
    fn test_placeholders() {
        let names = placeholders("{strongStart}x{strongEnd} {platform_name} {strongStart}");
        let expected: BTreeSet<String> = ["platform_name", "strongEnd", "strongStart"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_placeholder_counts() {
        let counts = placeholder_counts("{strongStart}x{strongEnd} {platform_name} {strongStart}");
        assert_eq!(counts.get("strongStart"), Some(&2));
        assert_eq!(counts.get("strongEnd"), Some(&1));
        assert_eq!(counts.get("platform_name"), Some(&1));
        assert!(placeholder_counts("no placeholders").is_empty());
    }

    #[test]
    fn test_link_markup() {
        assert_eq!(
            Markup::link("/dashboard", true).start,
            r#"<a href="/dashboard" target="_blank">"#
        );
        assert_eq!(Markup::link("/manual", false).start, r#"<a href="/manual">"#);
        assert_eq!(
            Markup::link(r#"/x"onclick="y"#, false).start,
            r#"<a href="/x&quot;onclick=&quot;y">"#
        );
    }
}
