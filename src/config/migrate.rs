//! Configuration file upgrades.
//!
//! Every field of [`Config`] has a serde default, so an old file always
//! loads. These helpers make the gap visible (`config --check`) and write
//! the missing keys back (`config --migrate`) without touching the values
//! the user already set.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Dotted paths of the keys present in the defaults but absent from the file.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let current = read_yaml(path)?;
    let defaults = serde_yaml::to_value(Config::default())?;

    let mut missing = Vec::new();
    collect_missing(&defaults, &current, "", &mut missing);
    Ok(missing)
}

/// Add the missing keys (with their default value) to the config file.
/// Returns the keys that were added; an empty list means nothing changed.
pub fn migrate_file(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_yaml(path)?;
    let defaults = serde_yaml::to_value(Config::default())?;

    let mut added = Vec::new();
    merge_missing(&defaults, &mut current, "", &mut added);

    if added.is_empty() {
        return Ok(added);
    }

    // the merged file must still load as a Config
    let _: Config = serde_yaml::from_value(current.clone())?;

    let serialized = serde_yaml::to_string(&current)?;
    fs::write(path, serialized).map_err(|_| AppError::ConfigSave)?;

    tracing::info!(path = %path.display(), added = added.len(), "config migrated");
    Ok(added)
}

fn read_yaml(path: &Path) -> AppResult<Value> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let value: Value = serde_yaml::from_str(&content)?;

    // An empty file parses as Null: treat it as an empty mapping.
    match value {
        Value::Null => Ok(Value::Mapping(Mapping::new())),
        Value::Mapping(_) => Ok(value),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn collect_missing(defaults: &Value, current: &Value, prefix: &str, out: &mut Vec<String>) {
    let (Some(def_map), Some(cur_map)) = (defaults.as_mapping(), current.as_mapping()) else {
        return;
    };

    for (k, def_val) in def_map {
        let name = join_key(prefix, k.as_str().unwrap_or_default());
        match cur_map.get(k) {
            None => out.push(name),
            Some(cur_val) => collect_missing(def_val, cur_val, &name, out),
        }
    }
}

fn merge_missing(defaults: &Value, current: &mut Value, prefix: &str, added: &mut Vec<String>) {
    let (Some(def_map), Some(cur_map)) = (defaults.as_mapping(), current.as_mapping_mut()) else {
        return;
    };

    for (k, def_val) in def_map {
        let name = join_key(prefix, k.as_str().unwrap_or_default());
        if !cur_map.contains_key(k) {
            cur_map.insert(k.clone(), def_val.clone());
            added.push(name);
            continue;
        }
        if let Some(cur_val) = cur_map.get_mut(k) {
            merge_missing(def_val, cur_val, &name, added);
        }
    }
}
