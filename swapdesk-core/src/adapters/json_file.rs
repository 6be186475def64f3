//! JSON file adapter for the StateStore port
//!
//! The whole store is one JSON object in `store.json`. Each operation
//! takes an exclusive file lock, reads the blob, applies the change and
//! writes the blob back, so concurrent CLI invocations can't interleave a
//! read-modify-write. A malformed file degrades to an empty blob rather
//! than failing the operation.

use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde_json::{Map, Value};

use crate::domain::result::Result;
use crate::ports::{StateStore, StoreKey};

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run `apply` against the locked blob; persist it afterwards when
    /// `apply` returns true in its second tuple slot.
    fn with_blob<T>(&self, apply: impl FnOnce(&mut Map<String, Value>) -> (T, bool)) -> Result<T> {
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(&self.path)?;
        file.lock_exclusive()?;

        let result = (|| {
            let mut content = String::new();
            file.read_to_string(&mut content)?;
            let mut blob: Map<String, Value> =
                serde_json::from_str(&content).unwrap_or_default();

            let (value, dirty) = apply(&mut blob);
            if dirty {
                let serialized = serde_json::to_string_pretty(&blob)?;
                file.set_len(0)?;
                file.seek(SeekFrom::Start(0))?;
                file.write_all(serialized.as_bytes())?;
            }
            Ok(value)
        })();

        file.unlock()?;
        result
    }
}

impl StateStore for JsonFileStore {
    fn read(&self, key: StoreKey) -> Result<Option<Value>> {
        self.with_blob(|blob| (blob.get(key.as_str()).cloned(), false))
    }

    fn write(&self, key: StoreKey, value: Value) -> Result<()> {
        self.with_blob(|blob| {
            blob.insert(key.as_str().to_string(), value);
            ((), true)
        })
    }

    fn remove(&self, key: StoreKey) -> Result<()> {
        self.with_blob(|blob| {
            let existed = blob.remove(key.as_str()).is_some();
            ((), existed)
        })
    }
}
