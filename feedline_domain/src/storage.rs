use crate::error::{FeedError, FeedResult};
use crate::GetConfig;

use entrait::entrait_export as entrait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Location of the JSON file backing the client's local key/value storage.
#[derive(Clone, Debug)]
pub struct StoragePath(pub PathBuf);

impl AsRef<Path> for StoragePath {
    fn as_ref(&self) -> &Path {
        self.0.as_path()
    }
}

///
/// String key/value storage that survives between runs.
///
/// A missing file reads as empty storage.
///
#[entrait(pub LocalStorage, mock_api=LocalStorageMock)]
pub mod local_storage {
    use super::*;

    pub fn get_item(deps: &impl GetConfig, key: &str) -> FeedResult<Option<String>> {
        let mut items = read_items(deps.get_storage_path().as_ref())?;
        Ok(items.remove(key))
    }

    pub fn set_item(deps: &impl GetConfig, key: &str, value: &str) -> FeedResult<()> {
        let path = deps.get_storage_path().as_ref();
        let mut items = read_items(path)?;
        items.insert(key.to_string(), value.to_string());
        write_items(path, &items)
    }

    pub fn remove_item(deps: &impl GetConfig, key: &str) -> FeedResult<()> {
        let path = deps.get_storage_path().as_ref();
        let mut items = read_items(path)?;
        if items.remove(key).is_some() {
            write_items(path, &items)?;
        }
        Ok(())
    }
}

fn read_items(path: &Path) -> FeedResult<BTreeMap<String, String>> {
    match std::fs::read(path) {
        Ok(bytes) if bytes.is_empty() => Ok(BTreeMap::new()),
        Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
            FeedError::Storage(format!("corrupt storage file {}: {e}", path.display()))
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
        Err(e) => Err(e.into()),
    }
}

fn write_items(path: &Path, items: &BTreeMap<String, String>) -> FeedResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_vec_pretty(items)
        .map_err(|e| FeedError::Storage(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
