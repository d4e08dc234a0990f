// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Locale string resolution: static bundles, two-pass overrides, fallback
//! and `{{param}}` templating.
//!
//! Overrides come in two shapes that must land identically: a nested partial
//! tree under the locale code, and flat keys containing literal dots
//! (`"live.latest_donations"`). An unsupported locale code resolves to the
//! English bundle's shape; a missing translation key resolves to the literal
//! key. Neither is an error.

use crate::merge::{insert_dotted, merge};
use serde_json::{json, Value as J};
use std::sync::OnceLock;

/// Fallback locale; its bundle defines the canonical string-table shape.
pub const FALLBACK_LOCALE: &str = "en";

/// The static bundle for a locale code, `None` when unsupported.
pub fn bundle(code: &str) -> Option<&'static J> {
    match code {
        "en" => Some(english_bundle()),
        "fr" => Some(french_bundle()),
        _ => None,
    }
}

fn english_bundle() -> &'static J {
    static BUNDLE: OnceLock<J> = OnceLock::new();
    BUNDLE.get_or_init(|| {
        json!({
            "common": {
                "yes": "Yes",
                "no": "No",
                "close": "Close",
                "back": "Back"
            },
            "donation": {
                "title": "Make a donation",
                "amount": "Amount",
                "donate": "Donate",
                "anonymous": "Donate anonymously",
                "message": "Leave a message",
                "thank_you": "Thank you for your donation, {{name}}!"
            },
            "live": {
                "latest_donations": "Latest donations",
                "total_raised": "Total raised",
                "goal_progress": "{{percent}}% of our goal"
            },
            "receipt": {
                "subject": "Your donation receipt",
                "greeting": "Dear {{name}},",
                "amount_line": "We received your donation of {{amount}}."
            }
        })
    })
}

fn french_bundle() -> &'static J {
    static BUNDLE: OnceLock<J> = OnceLock::new();
    BUNDLE.get_or_init(|| {
        json!({
            "common": {
                "yes": "Oui",
                "no": "Non",
                "close": "Fermer",
                "back": "Retour"
            },
            "donation": {
                "title": "Faire un don",
                "amount": "Montant",
                "donate": "Donner",
                "anonymous": "Donner anonymement",
                "message": "Laisser un message",
                "thank_you": "Merci pour votre don, {{name}} !"
            },
            "live": {
                "latest_donations": "Derniers dons",
                "total_raised": "Total collecté",
                "goal_progress": "{{percent}}% de notre objectif"
            },
            "receipt": {
                "subject": "Votre reçu de don",
                "greeting": "Cher/Chère {{name}},",
                "amount_line": "Nous avons bien reçu votre don de {{amount}}."
            }
        })
    })
}

/// Resolve the string table for a locale, applying overrides in two passes.
///
/// Pass 1 deep-merges the nested subtree stored under the locale code. Pass
/// 2 applies flat dotted keys to the requested locale; keys whose first
/// segment is itself a locale code are considered locale-qualified and left
/// to pass 1. Both shapes may coexist in one payload.
pub fn resolve_locale(code: &str, overrides: Option<&J>) -> J {
    let base = bundle(code).unwrap_or_else(english_bundle);

    let override_map = match overrides {
        Some(J::Object(map)) => map,
        _ => return base.clone(),
    };

    let mut resolved = match override_map.get(code) {
        Some(nested) => merge(base, &[nested]),
        None => base.clone(),
    };

    for (key, value) in override_map {
        if !key.contains('.') {
            continue;
        }
        let first_segment = key.split('.').next().unwrap_or_default();
        if bundle(first_segment).is_some() {
            continue;
        }
        insert_dotted(&mut resolved, key, value.clone());
    }

    resolved
}

/// Look up a dotted key in a resolved tree and substitute `{{name}}` tokens.
///
/// A key missing from the tree is retried against the English bundle; a key
/// missing there too (or resolving to a non-string) returns the literal key.
/// Tokens with no matching param stay verbatim, braces included.
pub fn translate(tree: &J, dotted_key: &str, params: Option<&J>) -> String {
    let template = lookup(tree, dotted_key)
        .or_else(|| lookup(english_bundle(), dotted_key))
        .and_then(J::as_str);

    let template = match template {
        Some(t) => t,
        None => return dotted_key.to_string(),
    };

    match params.and_then(J::as_object) {
        Some(map) => {
            let mut out = template.to_string();
            for (name, value) in map {
                out = out.replace(&format!("{{{{{}}}}}", name), &param_to_string(value));
            }
            out
        }
        None => template.to_string(),
    }
}

fn lookup<'a>(tree: &'a J, dotted: &str) -> Option<&'a J> {
    let mut cur = tree;
    for part in dotted.split('.') {
        cur = cur.get(part)?;
    }
    Some(cur)
}

fn param_to_string(value: &J) -> String {
    match value {
        J::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unsupported_locale_falls_back_to_english_shape() {
        let xx = resolve_locale("xx", None);
        let en = resolve_locale("en", None);
        assert_eq!(
            translate(&xx, "common.yes", None),
            translate(&en, "common.yes", None)
        );
    }

    #[test]
    fn nested_override_lands_under_the_locale() {
        let overrides = json!({ "en": { "donation": { "title": "Give now" } } });
        let tree = resolve_locale("en", Some(&overrides));
        assert_eq!(translate(&tree, "donation.title", None), "Give now");
        // Untouched siblings survive the merge
        assert_eq!(translate(&tree, "donation.amount", None), "Amount");
    }

    #[test]
    fn flat_path_override_lands_nested() {
        let overrides = json!({ "live.latest_donations": "Recent gifts" });
        let tree = resolve_locale("en", Some(&overrides));
        assert_eq!(translate(&tree, "live.latest_donations", None), "Recent gifts");
    }

    #[test]
    fn nested_and_flat_overrides_coexist() {
        let overrides = json!({
            "en": { "donation": { "title": "Give now" } },
            "live.latest_donations": "Recent gifts"
        });
        let tree = resolve_locale("en", Some(&overrides));
        assert_eq!(translate(&tree, "donation.title", None), "Give now");
        assert_eq!(translate(&tree, "live.latest_donations", None), "Recent gifts");
    }

    #[test]
    fn locale_qualified_flat_keys_are_left_to_the_nested_pass() {
        let overrides = json!({ "fr.donation.title": "Donnez" });
        let tree = resolve_locale("fr", Some(&overrides));
        assert_eq!(translate(&tree, "donation.title", None), "Faire un don");
    }

    #[test]
    fn missing_key_returns_the_literal_key() {
        let tree = resolve_locale("en", None);
        assert_eq!(translate(&tree, "no.such.key", None), "no.such.key");
    }

    #[test]
    fn missing_in_locale_retries_english() {
        // French tree with a key removed by an override pointing at nothing
        let tree = json!({ "donation": {} });
        assert_eq!(translate(&tree, "donation.title", None), "Make a donation");
    }

    #[test]
    fn non_string_value_returns_the_literal_key() {
        let tree = json!({ "donation": { "title": { "unexpected": true } } });
        assert_eq!(translate(&tree, "donation.title", None), "donation.title");
    }

    #[test]
    fn params_substitute_and_unmatched_tokens_stay() {
        let tree = json!({ "greeting": "Hello {{name}}, {{missing}}" });
        let out = translate(&tree, "greeting", Some(&json!({"name": "World"})));
        assert_eq!(out, "Hello World, {{missing}}");
    }

    #[test]
    fn numeric_params_coerce_to_string() {
        let tree = resolve_locale("en", None);
        let out = translate(&tree, "live.goal_progress", Some(&json!({"percent": 75})));
        assert_eq!(out, "75% of our goal");
    }

    #[test]
    fn no_params_leaves_tokens_verbatim() {
        let tree = json!({ "greeting": "Hello {{name}}" });
        assert_eq!(translate(&tree, "greeting", None), "Hello {{name}}");
    }
}
