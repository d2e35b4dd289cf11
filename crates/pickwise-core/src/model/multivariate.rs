//! Multivariate variants: every combination of per-key options.

use serde_json::{Map, Value};

/// Expands `{"color": ["red", "blue"], "size": [1, 2]}` into the four
/// combined objects.
///
/// - An array value lists the options for that key.
/// - A non-array value is a single fixed option.
/// - An empty array drops the key from every combination.
///
/// Keys are expanded in map order; the last key varies fastest. Returns an
/// empty vec when no key has any option.
pub fn combinations(variants: &Map<String, Value>) -> Vec<Value> {
    let mut combos: Vec<Map<String, Value>> = vec![Map::new()];
    let mut any_key = false;

    for (key, value) in variants {
        let options: &[Value] = match value {
            Value::Array(items) => items,
            single => std::slice::from_ref(single),
        };
        if options.is_empty() {
            continue;
        }
        any_key = true;

        combos = combos
            .iter()
            .flat_map(|combo| {
                options.iter().map(move |option| {
                    let mut next = combo.clone();
                    next.insert(key.clone(), option.clone());
                    next
                })
            })
            .collect();
    }

    if !any_key {
        return Vec::new();
    }
    combos.into_iter().map(Value::Object).collect()
}
