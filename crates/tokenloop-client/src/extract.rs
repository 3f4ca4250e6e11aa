//! Response-shape normalization for protect/reveal bodies.
//!
//! The target API has several observed response shapes across vendor
//! implementations, and the harness must tolerate all of them without
//! knowing in advance which one a given server returns. Bulk extraction is
//! an ordered list of named shape strategies applied first-match-wins; a
//! body matching no strategy yields an empty list, never an error. The
//! key-priority order is contractual: when a body erroneously contains
//! more than one candidate key, the earlier key wins.
//!
//! All functions are pure over the body; normalizing the same body twice
//! yields identical results.

use log::debug;
use serde_json::Value;

/// Candidate keys for a single protect response, in priority order.
const PROTECT_KEYS: [&str; 3] = ["protected_data", "protected", "token"];

/// Candidate keys for a single reveal response, in priority order.
const REVEAL_KEYS: [&str; 7] = [
    "data",
    "original",
    "plain",
    "revealed",
    "unprotected_data",
    "unprotected",
    "decrypted",
];

/// Keys tried for a keyed reveal-bulk list, in priority order.
const REVEAL_LIST_KEYS: [&str; 4] = ["data", "restored", "results", "items"];

/// Fields tried on each object under a `results` list, in priority order.
const RESULT_ITEM_KEYS: [&str; 3] = ["data", "restored", "value"];

/// One bulk extraction strategy: `None` when the body does not have this
/// shape, `Some(values)` when it does (possibly empty).
struct ListStrategy {
    name: &'static str,
    extract: fn(&Value) -> Option<Vec<String>>,
}

const PROTECT_BULK_STRATEGIES: [ListStrategy; 4] = [
    ListStrategy {
        name: "bare array",
        extract: bare_array,
    },
    ListStrategy {
        name: "protected_data list",
        extract: protected_data_list,
    },
    ListStrategy {
        name: "protected_data_array objects",
        extract: protected_data_array,
    },
    ListStrategy {
        name: "results objects",
        extract: results_protected_data,
    },
];

const REVEAL_BULK_STRATEGIES: [ListStrategy; 4] = [
    ListStrategy {
        name: "bare array",
        extract: bare_array,
    },
    ListStrategy {
        name: "keyed list",
        extract: keyed_restored_list,
    },
    ListStrategy {
        name: "data_array objects",
        extract: data_array_objects,
    },
    ListStrategy {
        name: "top-level scalars",
        extract: top_level_scalars,
    },
];

/// Token from a single protect response body.
///
/// Returns the first of `protected_data`/`protected`/`token` holding a
/// scalar; `None` when the body is not a mapping or no candidate matches.
#[must_use]
pub fn extract_protected(body: &Value) -> Option<String> {
    first_scalar(body, &PROTECT_KEYS)
}

/// Restored value from a single reveal response body, same rules with the
/// reveal key priority.
#[must_use]
pub fn extract_restored(body: &Value) -> Option<String> {
    first_scalar(body, &REVEAL_KEYS)
}

/// Token list from a bulk protect response body; empty on shape mismatch.
#[must_use]
pub fn extract_protected_list(body: &Value) -> Vec<String> {
    apply_strategies(body, &PROTECT_BULK_STRATEGIES, "protect-bulk")
}

/// Restored-value list from a bulk reveal response body; empty on shape
/// mismatch.
#[must_use]
pub fn extract_restored_list(body: &Value) -> Vec<String> {
    apply_strategies(body, &REVEAL_BULK_STRATEGIES, "reveal-bulk")
}

fn apply_strategies(body: &Value, strategies: &[ListStrategy], label: &str) -> Vec<String> {
    for strategy in strategies {
        if let Some(values) = (strategy.extract)(body) {
            debug!(
                "{label} body matched the {} shape ({} value(s))",
                strategy.name,
                values.len()
            );
            return values;
        }
    }
    debug!("{label} body matched no known shape");
    Vec::new()
}

fn first_scalar(body: &Value, keys: &[&str]) -> Option<String> {
    let map = body.as_object()?;
    keys.iter().find_map(|key| map.get(*key).and_then(scalar))
}

/// A scalar usable as a single extracted token or value. Arrays, objects
/// and null never satisfy a single-item key.
fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Render one list element: strings verbatim, everything else via its JSON
/// rendering.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn bare_array(body: &Value) -> Option<Vec<String>> {
    body.as_array()
        .map(|items| items.iter().map(stringify).collect())
}

/// `{"protected_data": [..]}` with a list value.
fn protected_data_list(body: &Value) -> Option<Vec<String>> {
    let items = body.as_object()?.get("protected_data")?.as_array()?;
    Some(items.iter().map(stringify).collect())
}

/// `{"protected_data_array": [{"protected_data": ..}, ..]}`; elements that
/// are not objects or lack the field are skipped.
fn protected_data_array(body: &Value) -> Option<Vec<String>> {
    field_of_each(body, "protected_data_array", "protected_data")
}

/// `{"results": [{"protected_data": ..}, ..]}`.
fn results_protected_data(body: &Value) -> Option<Vec<String>> {
    field_of_each(body, "results", "protected_data")
}

/// `{"data_array": [{"data": ..}, ..]}`.
fn data_array_objects(body: &Value) -> Option<Vec<String>> {
    field_of_each(body, "data_array", "data")
}

fn field_of_each(body: &Value, list_key: &str, field: &str) -> Option<Vec<String>> {
    let items = body.as_object()?.get(list_key)?.as_array()?;
    Some(
        items
            .iter()
            .filter_map(|item| item.as_object()?.get(field).map(stringify))
            .collect(),
    )
}

/// First of `data`/`restored`/`results`/`items` holding a list. Under
/// `results`, object elements contribute their first of
/// `data`/`restored`/`value`; scalar elements are taken as-is.
fn keyed_restored_list(body: &Value) -> Option<Vec<String>> {
    let map = body.as_object()?;
    for key in REVEAL_LIST_KEYS {
        let Some(items) = map.get(key).and_then(Value::as_array) else {
            continue;
        };
        if key == "results" {
            return Some(items.iter().filter_map(result_item_value).collect());
        }
        return Some(items.iter().map(stringify).collect());
    }
    None
}

fn result_item_value(item: &Value) -> Option<String> {
    match item.as_object() {
        Some(fields) => RESULT_ITEM_KEYS
            .iter()
            .find_map(|key| fields.get(*key).map(stringify)),
        None => Some(stringify(item)),
    }
}

/// Last resort: every string or integer value at the top level of the
/// mapping, in document order.
fn top_level_scalars(body: &Value) -> Option<Vec<String>> {
    let map = body.as_object()?;
    Some(
        map.values()
            .filter_map(|value| match value {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
                _ => None,
            })
            .collect(),
    )
}
