//! Stored session commands.

use anyhow::{Context, Result};
use edugate_core::config::Config;
use edugate_core::storage::{FileStore, STUDENT_KEY, SessionStore, USER_KEY};

const KEYS: [(&str, &str); 2] = [(STUDENT_KEY, "Student"), (USER_KEY, "Faculty user")];

pub fn show(config: &Config) -> Result<()> {
    let store = FileStore::new(config.effective_storage_path());

    let mut found = false;
    for (key, label) in KEYS {
        let Some(raw) = store
            .get(key)
            .with_context(|| format!("read {key} record"))?
        else {
            continue;
        };
        found = true;
        println!("{label} ({key}):");
        println!("{}", pretty(&raw));
    }

    if !found {
        println!("No session stored.");
    }
    Ok(())
}

pub fn clear(config: &Config) -> Result<()> {
    let mut store = FileStore::new(config.effective_storage_path());

    let mut removed = 0;
    for (key, _) in KEYS {
        if store
            .remove(key)
            .with_context(|| format!("remove {key} record"))?
            .is_some()
        {
            removed += 1;
        }
    }

    println!("Cleared {removed} session record(s).");
    Ok(())
}

/// Pretty-prints stored JSON, falling back to the raw text.
fn pretty(raw: &str) -> String {
    serde_json::from_str::<serde_json::Value>(raw)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or_else(|_| raw.to_string())
}
