// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Theme variable cascading and live application.
//!
//! Variables are plain maps of CSS custom-property name to value; cascading
//! is a key-replacing merge, never value-aware. Application to a live style
//! target tracks the previously written key set so that navigating from one
//! branded context to another never leaks a stale property.

use serde_json::Value as J;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Cascade variable maps: event keys replace global keys wholesale.
pub fn resolve_variables(
    global: &BTreeMap<String, String>,
    event: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut merged = global.clone();
    for (name, value) in event {
        merged.insert(name.clone(), value.clone());
    }
    merged
}

/// Collect a variable map out of a domain partial's `theme.variables` node.
/// Non-string and empty values are dropped, matching the inheritance rule.
pub fn variables_from_partial(partial: &J) -> BTreeMap<String, String> {
    let mut vars = BTreeMap::new();
    if let Some(J::Object(map)) = partial.pointer("/theme/variables") {
        for (name, value) in map {
            if let Some(s) = value.as_str() {
                if !s.is_empty() {
                    vars.insert(name.clone(), s.to_string());
                }
            }
        }
    }
    vars
}

/// The seam to a live document root (or any other surface CSS custom
/// properties can be written to).
pub trait StyleTarget {
    fn set_property(&mut self, name: &str, value: &str);
    fn remove_property(&mut self, name: &str);
}

/// In-memory style target for tests and headless rendering.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InMemoryStyleTarget {
    props: BTreeMap<String, String>,
}

impl InMemoryStyleTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.props.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

impl StyleTarget for InMemoryStyleTarget {
    fn set_property(&mut self, name: &str, value: &str) {
        self.props.insert(name.to_string(), value.to_string());
    }

    fn remove_property(&mut self, name: &str) {
        self.props.remove(name);
    }
}

/// Writes variable maps to one style target, rolling back the previous
/// application first.
///
/// Not safe for concurrent use from multiple configuration sources; callers
/// serialize `apply` calls or accept last-writer-wins on the tracked keys.
pub struct ThemeApplier<T: StyleTarget> {
    target: T,
    applied: BTreeSet<String>,
}

impl<T: StyleTarget> ThemeApplier<T> {
    pub fn new(target: T) -> Self {
        Self {
            target,
            applied: BTreeSet::new(),
        }
    }

    /// Remove every property written by the previous call, then write the
    /// new map. Idempotent and leak-free across repeated calls.
    pub fn apply(&mut self, vars: &BTreeMap<String, String>) {
        for name in &self.applied {
            self.target.remove_property(name);
        }
        for (name, value) in vars {
            self.target.set_property(name, value);
        }
        self.applied = vars.keys().cloned().collect();
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn into_inner(self) -> T {
        self.target
    }
}

/// Pull one variable's value out of CSS source text.
///
/// Textual first-match scan for "name, colon, value up to `;`/newline/end";
/// deliberately not a CSS parse. Callers wanting real parsing swap this
/// function out, nothing else knows about the format.
pub fn extract_from_stylesheet_text(text: &str, variable_name: &str) -> Option<String> {
    let mut search_from = 0;
    while let Some(pos) = text[search_from..].find(variable_name) {
        let after_name = search_from + pos + variable_name.len();
        let rest = text[after_name..].trim_start_matches(|c| c == ' ' || c == '\t');
        if let Some(value_and_tail) = rest.strip_prefix(':') {
            let value = value_and_tail
                .split(|c| c == ';' || c == '\n')
                .next()
                .unwrap_or("")
                .trim();
            return Some(value.to_string());
        }
        search_from = after_name;
    }
    None
}

/// Look a variable up across candidate stylesheet files in order: typically
/// a deployment-specific override first, then the packaged default. Files
/// that do not exist or cannot be read are simply skipped.
pub fn lookup_variable_in_files<P: AsRef<Path>>(
    candidates: &[P],
    variable_name: &str,
) -> Option<String> {
    for candidate in candidates {
        if let Ok(text) = std::fs::read_to_string(candidate) {
            if let Some(value) = extract_from_stylesheet_text(&text, variable_name) {
                return Some(value);
            }
        }
    }
    None
}
