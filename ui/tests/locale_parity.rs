use std::collections::{BTreeMap, BTreeSet};

use pretty_assertions::assert_eq;

/// Every locale must define exactly the fallback's messages, and each
/// message must use the same `{ $variable }` placeholders, otherwise `t!`
/// calls that pass arguments silently render `{$name}` in that locale.
///
/// Register a new locale in `LOCALES` after creating
/// `ui/i18n/<locale>/checkpad-ui.ftl`.
const FALLBACK: &str = include_str!("../i18n/en-US/checkpad-ui.ftl");

const LOCALES: &[(&str, &str)] = &[
    ("es-ES", include_str!("../i18n/es-ES/checkpad-ui.ftl")),
    ("fr-FR", include_str!("../i18n/fr-FR/checkpad-ui.ftl")),
];

/// Message id -> placeholder names. Panics on duplicate ids.
fn messages(locale: &str, src: &str) -> BTreeMap<String, BTreeSet<String>> {
    let mut out = BTreeMap::new();
    for line in src.lines() {
        if line.starts_with([' ', '\t', '#', '.', '-']) || line.trim().is_empty() {
            continue;
        }
        let Some((id, value)) = line.split_once('=') else {
            continue;
        };
        let id = id.trim().to_string();
        let previous = out.insert(id.clone(), placeholders(value));
        assert!(previous.is_none(), "{locale}: duplicate message `{id}`");
    }
    out
}

fn placeholders(value: &str) -> BTreeSet<String> {
    value
        .split("{ $")
        .skip(1)
        .filter_map(|rest| rest.split_once(" }").map(|(name, _)| name.to_string()))
        .collect()
}

#[test]
fn fallback_defines_messages() {
    let fallback = messages("en-US", FALLBACK);
    assert!(fallback.contains_key("results-no-errors"));
    assert_eq!(
        fallback["results-internal-error"],
        BTreeSet::from(["error".to_string()])
    );
}

#[test]
fn locales_match_fallback_ids_and_placeholders() {
    let fallback = messages("en-US", FALLBACK);
    for (locale, src) in LOCALES {
        let translated = messages(locale, src);
        let expected: Vec<_> = fallback.keys().collect();
        let actual: Vec<_> = translated.keys().collect();
        assert_eq!(expected, actual, "{locale}: message ids differ from en-US");

        for (id, vars) in &fallback {
            assert_eq!(vars, &translated[id], "{locale}: placeholders differ in `{id}`");
        }
    }
}
