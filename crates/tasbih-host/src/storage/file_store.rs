use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, warn};
use tasbih_core::store::{KeyValueStore, StoreKey};

#[derive(Debug, thiserror::Error)]
pub enum FileStoreError {
    #[error("store file i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("store file encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Key-value store kept as one JSON object on disk.
///
/// Every write rewrites the whole file through a sibling temp file and a
/// rename, so a crash leaves either the old or the new contents.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open or create the store at `path`. A malformed file is logged and
    /// treated as empty; it is replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, FileStoreError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let values = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(values) => values,
                Err(err) => {
                    warn!("store file {} is malformed, starting empty: {err}", path.display());
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };

        debug!("opened store {} with {} keys", path.display(), values.len());
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), FileStoreError> {
        let encoded = serde_json::to_string_pretty(&self.values)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, encoded)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    type Error = FileStoreError;

    fn get(&self, key: StoreKey) -> Result<Option<String>, Self::Error> {
        Ok(self.values.get(key.as_str()).cloned())
    }

    fn set(&mut self, key: StoreKey, value: &str) -> Result<(), Self::Error> {
        if self.values.get(key.as_str()).map(String::as_str) == Some(value) {
            return Ok(());
        }
        self.values.insert(key.as_str().to_owned(), value.to_owned());
        self.flush()
    }

    fn remove(&mut self, key: StoreKey) -> Result<(), Self::Error> {
        if self.values.remove(key.as_str()).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.values.clear();
        self.flush()
    }
}
