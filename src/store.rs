use log::error;
use serde_json::{Map, Value};
use std::fs;
use std::path::PathBuf;

use crate::host::SettingsStore;

/// Write-through settings store backed by a JSON file. Every write saves
/// the whole map; save failures are logged and the in-memory copy stays
/// authoritative for the rest of the session.
pub struct FileStore {
    path: PathBuf,
    map: Map<String, Value>,
}

impl FileStore {
    /// Open `path`, loading whatever was persisted there before. A missing
    /// file is a first run; an unreadable one starts fresh.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let map = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<Map<String, Value>>(&text) {
                Ok(map) => map,
                Err(e) => {
                    error!(
                        "settings file {} is not valid JSON ({}), starting fresh",
                        path.display(),
                        e
                    );
                    Map::new()
                }
            },
            Err(_) => Map::new(),
        };
        Self { path, map }
    }

    /// Default location under the user's config directory.
    pub fn default_path() -> PathBuf {
        dirs_next::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("festivo")
            .join("settings.json")
    }

    fn put(&mut self, key: &str, value: Value) {
        self.map.insert(key.to_string(), value);
        self.save();
    }

    fn save(&self) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                error!("cannot create {}: {}", parent.display(), e);
                return;
            }
        }
        match serde_json::to_string_pretty(&self.map) {
            Ok(text) => {
                if let Err(e) = fs::write(&self.path, text) {
                    error!("cannot write {}: {}", self.path.display(), e);
                }
            }
            Err(e) => error!("cannot encode settings: {}", e),
        }
    }
}

impl SettingsStore for FileStore {
    fn has(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }
    fn read_bool(&self, key: &str) -> Option<bool> {
        self.map.get(key)?.as_bool()
    }
    fn read_int(&self, key: &str) -> Option<i64> {
        self.map.get(key)?.as_i64()
    }
    fn read_string(&self, key: &str) -> Option<String> {
        Some(self.map.get(key)?.as_str()?.to_string())
    }
    fn write_bool(&mut self, key: &str, value: bool) {
        self.put(key, Value::Bool(value));
    }
    fn write_int(&mut self, key: &str, value: i64) {
        self.put(key, Value::from(value));
    }
    fn write_string(&mut self, key: &str, value: &str) {
        self.put(key, Value::from(value));
    }
}

/// In-memory store for tests and demos.
#[derive(Debug, Default)]
pub struct MemStore {
    map: Map<String, Value>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemStore {
    fn has(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }
    fn read_bool(&self, key: &str) -> Option<bool> {
        self.map.get(key)?.as_bool()
    }
    fn read_int(&self, key: &str) -> Option<i64> {
        self.map.get(key)?.as_i64()
    }
    fn read_string(&self, key: &str) -> Option<String> {
        Some(self.map.get(key)?.as_str()?.to_string())
    }
    fn write_bool(&mut self, key: &str, value: bool) {
        self.map.insert(key.to_string(), Value::Bool(value));
    }
    fn write_int(&mut self, key: &str, value: i64) {
        self.map.insert(key.to_string(), Value::from(value));
    }
    fn write_string(&mut self, key: &str, value: &str) {
        self.map.insert(key.to_string(), Value::from(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mem_store_round_trips_each_type() {
        let mut store = MemStore::new();
        assert!(!store.has("a"));
        store.write_bool("a", true);
        store.write_int("b", -3);
        store.write_string("c", "hi");
        assert_eq!(store.read_bool("a"), Some(true));
        assert_eq!(store.read_int("b"), Some(-3));
        assert_eq!(store.read_string("c").as_deref(), Some("hi"));
        // type-mismatched reads come back empty
        assert_eq!(store.read_bool("b"), None);
        assert_eq!(store.read_string("a"), None);
    }

    #[test]
    fn file_store_survives_reopen() {
        let path = std::env::temp_dir().join(format!("festivo-store-{}.json", std::process::id()));
        let _ = fs::remove_file(&path);

        {
            let mut store = FileStore::open(&path);
            store.write_bool("twentyFourHourFormat", true);
            store.write_string("birthdayList", "Pat,03-17");
        }
        let store = FileStore::open(&path);
        assert_eq!(store.read_bool("twentyFourHourFormat"), Some(true));
        assert_eq!(store.read_string("birthdayList").as_deref(), Some("Pat,03-17"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn garbage_file_starts_fresh() {
        let path = std::env::temp_dir().join(format!("festivo-garbage-{}.json", std::process::id()));
        fs::write(&path, "not json at all").unwrap();
        let store = FileStore::open(&path);
        assert!(!store.has("twentyFourHourFormat"));
        let _ = fs::remove_file(&path);
    }
}
