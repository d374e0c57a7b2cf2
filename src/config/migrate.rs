//! Configuration file checks and migrations.
//!
//! Older config files (pre-0.4) carried only the `database` key; the labor
//! rate was hardcoded. `check_config` reports the missing keys and
//! `migrate_config` rewrites the file with defaults filled in, never touching
//! values the user already set.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Keys every current config file must carry, with their default YAML value.
fn expected_keys() -> Vec<(&'static str, Value)> {
    vec![
        (
            "labor_rate",
            Value::Number(serde_yaml::Number::from(crate::config::DEFAULT_LABOR_RATE)),
        ),
        ("currency_symbol", Value::String("$".to_string())),
        ("separator_char", Value::String("-".to_string())),
    ]
}

fn load_yaml(path: &Path) -> AppResult<Value> {
    let content = fs::read_to_string(path)?;
    serde_yaml::from_str(&content).map_err(|e| AppError::Config(format!("Invalid YAML: {}", e)))
}

/// Return the list of expected keys missing from the config file.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let yaml = load_yaml(path)?;

    let map = yaml
        .as_mapping()
        .ok_or_else(|| AppError::Config("Config file is not a YAML mapping".to_string()))?;

    let mut missing = Vec::new();
    for (key, _) in expected_keys() {
        if !map.contains_key(&Value::String(key.to_string())) {
            missing.push(key);
        }
    }

    Ok(missing)
}

/// Check the config file and print a report. Does not modify anything.
pub fn check_config() -> AppResult<()> {
    let path = Config::config_file();

    if !path.exists() {
        warning(format!("No config file found at {}", path.display()));
        info("Run 'jobcost init' to create one.");
        return Ok(());
    }

    let missing = missing_keys(&path)?;

    if missing.is_empty() {
        success("Configuration file is up to date.");
    } else {
        warning(format!(
            "Configuration file is missing {} key(s): {}",
            missing.len(),
            missing.join(", ")
        ));
        info("Run 'jobcost config --migrate' to add them with defaults.");
    }

    Ok(())
}

/// Add missing keys with their defaults, preserving existing values.
/// Returns true when the file was rewritten.
pub fn migrate_config() -> AppResult<bool> {
    let path = Config::config_file();

    if !path.exists() {
        warning(format!("No config file found at {}", path.display()));
        return Ok(false);
    }

    let mut yaml = load_yaml(&path)?;

    let map = yaml
        .as_mapping_mut()
        .ok_or_else(|| AppError::Config("Config file is not a YAML mapping".to_string()))?;

    let mut changed = false;
    for (key, default) in expected_keys() {
        let k = Value::String(key.to_string());
        if !map.contains_key(&k) {
            info(format!("Adding '{}' with default value", key));
            map.insert(k, default);
            changed = true;
        }
    }

    if changed {
        let serialized =
            serde_yaml::to_string(&yaml).map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(&path, serialized)?;
        success(format!("Configuration migrated: {}", path.display()));
    } else {
        success("Configuration already up to date, nothing to migrate.");
    }

    Ok(changed)
}
