//! German UI strings.
//!
//! The shop site is German only, so a single bundle is embedded at build time.
//! Keys are dotted paths into `i18n/de.json`; a missing key renders as itself.

use serde_json::Value;
use std::collections::BTreeMap;

/// Language tag for `<html lang>`.
pub const LANG: &str = "de";

thread_local! {
    static BUNDLE: Value = serde_json::from_str(include_str!("../i18n/de.json"))
        .unwrap_or_else(|err| {
            log::error!("German string bundle failed to parse: {err}");
            Value::Object(serde_json::Map::new())
        });
}

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = value.as_str()?.to_string();
    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    Some(text)
}

/// Look up a UI string.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Look up a UI string and fill in `{name}` placeholders.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    BUNDLE
        .with(|bundle| get_nested_value(bundle, key).and_then(|v| render_value(v, args)))
        .unwrap_or_else(|| key.to_string())
}

/// Shorthand for a single-placeholder lookup.
#[must_use]
pub fn tr1(key: &str, name: &str, value: &str) -> String {
    let mut args = BTreeMap::new();
    args.insert(name, value);
    tr(key, Some(&args))
}
