//! Field-path checks on raw JSON.
//!
//! serde reports a missing field by its bare name, with no hint of where it
//! lives. We walk the document first so that a rejected template says
//! `style.card.color` instead of just `color`.

use serde_json::{Map, Value};

use crate::{Error, Result};

/// The path we report when the whole document has the wrong type.
const ROOT: &str = "<root>";

/// Append `key` to a dotted path. Array indices are already in `prefix`.
pub(crate) fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_owned()
    } else {
        format!("{}.{}", prefix, key)
    }
}

/// Require `value` to be a JSON object. `path` is the location of `value`
/// itself.
pub(crate) fn object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| Error::WrongType {
        path: (if path.is_empty() { ROOT } else { path }).to_owned(),
        expected: "object",
    })
}

/// Require `value` to be a JSON array.
pub(crate) fn array<'a>(value: &'a Value, path: &str) -> Result<&'a Vec<Value>> {
    value.as_array().ok_or_else(|| Error::WrongType {
        path: (if path.is_empty() { ROOT } else { path }).to_owned(),
        expected: "array",
    })
}

/// Require `obj[key]` to be a nested object, and return it.
pub(crate) fn required_object<'a>(
    obj: &'a Map<String, Value>,
    prefix: &str,
    key: &str,
) -> Result<&'a Map<String, Value>> {
    let path = join(prefix, key);
    match obj.get(key) {
        None | Some(Value::Null) => Err(Error::MissingField { path }),
        Some(value) => object(value, &path),
    }
}

/// Require every one of `keys` to be present in `obj` as a string.
pub(crate) fn required_strings(
    obj: &Map<String, Value>,
    prefix: &str,
    keys: &[&str],
) -> Result<()> {
    for key in keys {
        match obj.get(*key) {
            Some(Value::String(_)) => {}
            None | Some(Value::Null) => {
                return Err(Error::MissingField {
                    path: join(prefix, key),
                })
            }
            Some(_) => {
                return Err(Error::WrongType {
                    path: join(prefix, key),
                    expected: "string",
                })
            }
        }
    }
    Ok(())
}

/// Allow each of `keys` to be absent or `null`, but if one is present, it must
/// be a string.
pub(crate) fn optional_strings(
    obj: &Map<String, Value>,
    prefix: &str,
    keys: &[&str],
) -> Result<()> {
    for key in keys {
        match obj.get(*key) {
            None | Some(Value::Null) | Some(Value::String(_)) => {}
            Some(_) => {
                return Err(Error::WrongType {
                    path: join(prefix, key),
                    expected: "string",
                })
            }
        }
    }
    Ok(())
}

#[test]
fn join_builds_dotted_paths() {
    assert_eq!(join("", "id"), "id");
    assert_eq!(join("style", "card"), "style.card");
    assert_eq!(join("[2]", "style"), "[2].style");
}

#[test]
fn null_counts_as_missing_for_required_fields() {
    let value = serde_json::json!({ "padding": null, "backgroundColor": "#fff" });
    let obj = object(&value, "").unwrap();
    let err = required_strings(obj, "style.container", &["padding"]).unwrap_err();
    assert_eq!(err.path(), Some("style.container.padding"));
    assert!(matches!(err, Error::MissingField { .. }));
}

#[test]
fn non_object_root_is_reported_as_root() {
    let value = serde_json::json!("just a string");
    let err = object(&value, "").unwrap_err();
    assert_eq!(err.path(), Some("<root>"));
}

#[test]
fn optional_fields_must_still_be_strings() {
    let value = serde_json::json!({ "fontSize": 14, "padding": null });
    let obj = object(&value, "").unwrap();
    let err = optional_strings(obj, "style.card", &["padding", "fontSize"])
        .unwrap_err();
    assert_eq!(err.path(), Some("style.card.fontSize"));
    assert!(matches!(err, Error::WrongType { expected: "string", .. }));
}
