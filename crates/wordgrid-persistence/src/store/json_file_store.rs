use crate::store::atomic_writer::AtomicWriter;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use wordgrid_core::{KeyValueStore, WordGridError, WordGridResult};

const FORMAT_VERSION: u32 = 1;

/// On-disk layout of the store file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreFile {
    pub version: u32,
    #[serde(default)]
    pub entries: BTreeMap<String, String>,
}

/// Accepts the versioned layout as well as a bare `{"key": "value"}` dump
#[derive(Deserialize)]
#[serde(untagged)]
enum StoreFileFormat {
    Versioned(StoreFile),
    Flat(BTreeMap<String, String>),
}

impl StoreFile {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self {
            version: FORMAT_VERSION,
            entries,
        }
    }

    pub fn parse(bytes: &[u8]) -> WordGridResult<Self> {
        let format: StoreFileFormat = serde_json::from_slice(bytes)?;
        match format {
            StoreFileFormat::Versioned(file) if file.version == FORMAT_VERSION => Ok(file),
            StoreFileFormat::Versioned(file) => Err(WordGridError::Serialization(format!(
                "Unsupported store version: {}",
                file.version
            ))),
            StoreFileFormat::Flat(entries) => Ok(Self::new(entries)),
        }
    }

    pub fn to_json_bytes(&self) -> WordGridResult<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }
}

/// JSON file-backed key-value store
///
/// The whole key space is held in memory and written back to disk after every
/// mutation, so each `set`/`remove` is durable once it returns.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`
    ///
    /// A missing file opens empty. An unreadable or corrupt file also opens
    /// empty and is replaced on the next write.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            match AtomicWriter::read_all(&path).and_then(|bytes| StoreFile::parse(&bytes)) {
                Ok(file) => {
                    tracing::info!(
                        "Loaded {} keys from {}",
                        file.entries.len(),
                        path.display()
                    );
                    file.entries
                }
                Err(e) => {
                    tracing::warn!(
                        "Discarding unreadable store at {}: {}",
                        path.display(),
                        e
                    );
                    BTreeMap::new()
                }
            }
        } else {
            tracing::info!("No store at {}, starting empty", path.display());
            BTreeMap::new()
        };

        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write `entries` to disk and adopt them only once the write succeeded
    fn commit(&mut self, entries: BTreeMap<String, String>) -> WordGridResult<()> {
        let file = StoreFile::new(entries);
        AtomicWriter::write_atomic(&self.path, &file.to_json_bytes()?)?;
        self.entries = file.entries;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> WordGridResult<()> {
        let mut entries = self.entries.clone();
        entries.insert(key.to_string(), value);
        self.commit(entries)?;
        tracing::debug!("Stored key '{}'", key);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> WordGridResult<()> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }
        let mut entries = self.entries.clone();
        entries.remove(key);
        self.commit(entries)?;
        tracing::debug!("Removed key '{}'", key);
        Ok(())
    }
}
