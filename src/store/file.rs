use super::KeyValueStore;
use crate::error::{Error, Result};
use std::{
    collections::BTreeMap,
    fs,
    io::ErrorKind,
    path::PathBuf,
};
use tracing::debug;

/// Key/value store kept as a single JSON object on disk; a missing file is an empty store
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> Result<BTreeMap<String, String>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        if text.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&text).map_err(|e| {
            Error::StateFormat(format!("{}: {}", self.path.display(), e))
        })
    }

    fn write(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        debug!("Wrote {} key(s) to {}", entries.len(), self.path.display());
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        // a corrupt file is replaced rather than blocking the save
        let mut entries = self.read().unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());
        self.write(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut entries = match self.read() {
            Ok(entries) => entries,
            Err(Error::StateFormat(_)) => BTreeMap::new(),
            Err(e) => return Err(e),
        };
        if entries.remove(key).is_some() || self.path.exists() {
            self.write(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        form::samples,
        store::{StateStore, STATE_KEY},
    };

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("state.json"));
        assert_eq!(store.get(STATE_KEY).unwrap(), None);
    }

    #[test]
    fn test_keys_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let mut store = FileStore::new(&path);
        store.set("theme", "dark").unwrap();
        store.set(STATE_KEY, "{}").unwrap();

        let mut reopened = FileStore::new(&path);
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
        reopened.remove(STATE_KEY).unwrap();
        assert_eq!(reopened.get(STATE_KEY).unwrap(), None);
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_corrupt_file_loads_as_no_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "[1, 2").unwrap();

        let mut states = StateStore::new(FileStore::new(&path));
        assert_eq!(states.load(), None);

        let state = samples::nginx();
        states.save(&state).unwrap();
        assert_eq!(states.load(), Some(state));
    }
}
