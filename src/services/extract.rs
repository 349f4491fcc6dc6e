use serde_json::{Map, Value};

use crate::model::app::AppEntry;

/// Key spellings seen in the wild, highest priority first.
pub const ID_KEYS: [&str; 3] = ["appid", "AppId", "AppID"];
pub const NAME_KEYS: [&str; 2] = ["name", "Name"];

/// First candidate key present with a non-null value. Falsy values such as
/// `0` or `""` still count as present, so they shadow later spellings.
pub fn lookup_first<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| map.get(*k))
        .find(|v| !v.is_null())
}

/// Yields one `AppEntry` per usable record under `applist.apps`.
///
/// A missing or malformed container yields nothing. Records without a
/// usable identifier are skipped.
pub fn extract_apps(json: &Value) -> impl Iterator<Item = AppEntry> + '_ {
    json.get("applist")
        .and_then(|a| a.get("apps"))
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_object)
        .filter_map(entry_from_map)
}

fn entry_from_map(map: &Map<String, Value>) -> Option<AppEntry> {
    let app_id = lookup_first(map, &ID_KEYS).and_then(coerce_id)?;
    let name = lookup_first(map, &NAME_KEYS)
        .map(coerce_name)
        .unwrap_or_default();

    Some(AppEntry::new(app_id, name))
}

fn coerce_id(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite())
                .map(f64::trunc)
                .filter(|f| *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_name(v: &Value) -> String {
    match v {
        Value::String(s) => s.trim().to_string(),
        other => other.to_string().trim().to_string(),
    }
}
