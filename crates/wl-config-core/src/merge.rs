// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! JSON merging functionality

use serde_json::Value as J;

/// Merge source layers over a target, left to right, returning a new value.
///
/// Objects are merged recursively; arrays and scalars replace the left value
/// wholesale. A source leaf of `null` or `""` is skipped so the target value
/// survives, which is how a higher layer inherits from a lower one. No
/// argument is ever mutated.
pub fn merge(target: &J, sources: &[&J]) -> J {
    let mut out = target.clone();
    for source in sources {
        merge_into(&mut out, source);
    }
    out
}

fn merge_into(base: &mut J, layer: &J) {
    match (base, layer) {
        // A null layer (or null leaf) inherits the base value
        (_, J::Null) => {}
        (J::Object(a), J::Object(b)) => {
            for (k, v) in b {
                if is_empty_leaf(v) {
                    continue;
                }
                merge_into(a.entry(k.clone()).or_insert(J::Null), v);
            }
        }
        // Policy: arrays are replaced wholesale, never merged element-wise
        (a @ J::Array(_), J::Array(_)) => *a = layer.clone(),
        (a, b) => {
            if !is_empty_leaf(b) {
                *a = b.clone();
            }
        }
    }
}

/// The values the inheritance rule treats as "unset": `null` and `""`.
///
/// An empty object is deliberately not in this set; storing one would defeat
/// inheritance, which is why persistence prunes it away instead (see
/// `mapper::clean_for_persistence`).
pub fn is_empty_leaf(v: &J) -> bool {
    match v {
        J::Null => true,
        J::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Insert a value at a dotted path in JSON, creating intermediate objects.
pub fn insert_dotted(root: &mut J, dotted: &str, v: J) {
    let parts: Vec<&str> = dotted.split('.').collect();
    let (final_key, parents) = match parts.split_last() {
        Some(split) => split,
        None => return,
    };

    // Navigate to the parent of the final key
    let mut cur = root;
    for p in parents {
        if !cur.is_object() {
            *cur = J::Object(Default::default());
        }
        let map = cur.as_object_mut().expect("just coerced to object");
        cur = map.entry(*p).or_insert_with(|| J::Object(Default::default()));
    }

    // Insert the value at the final key
    if let J::Object(map) = cur {
        map.insert((*final_key).into(), v);
    } else {
        *cur = serde_json::json!({ *final_key: v });
    }
}
