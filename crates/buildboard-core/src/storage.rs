// Rust guideline compliant 2026-10-18

//! JSONL collection storage.
//!
//! Each collection is one JSONL file holding one document per line. Writes
//! rewrite the file through a temp file and an atomic rename, and are
//! serialized across processes with an exclusive lock file.

use crate::{Document, Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Storage for one collection of documents.
#[derive(Debug, Clone)]
pub struct Storage<T> {
    /// Path to the JSONL file.
    path: PathBuf,
    _documents: PhantomData<fn() -> T>,
}

impl<T> Storage<T>
where
    T: Document + Serialize + DeserializeOwned,
{
    /// Creates a new Storage instance.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSONL file
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(Self {
            path,
            _documents: PhantomData,
        })
    }

    /// Returns a reference to the JSONL file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every document, one JSON document per line.
    ///
    /// A missing file is an empty collection. Malformed JSON is skipped with
    /// a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened
    /// - A document fails validation
    pub fn load_all(&self) -> Result<Vec<T>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let mut documents = Vec::new();

        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<T>(&line) {
                Ok(document) => {
                    document.validate()?;
                    documents.push(document);
                }
                Err(e) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        line = number + 1,
                        error = %e,
                        "skipping malformed JSON line"
                    );
                }
            }
        }

        Ok(documents)
    }

    /// Loads one document by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no document has the ID, or any load error.
    pub fn load_by_id(&self, id: &str) -> Result<T> {
        self.load_all()?
            .into_iter()
            .find(|document| document.id() == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Inserts or replaces a document by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the document fails validation or the file cannot
    /// be written.
    pub fn save(&self, document: &T) -> Result<()>
    where
        T: Clone,
    {
        document.validate()?;
        self.with_lock(|| {
            let mut documents = self.load_all()?;
            match documents.iter().position(|d| d.id() == document.id()) {
                Some(pos) => documents[pos] = document.clone(),
                None => documents.push(document.clone()),
            }
            self.save_all(&documents)
        })
    }

    /// Replaces the whole collection.
    ///
    /// # Errors
    ///
    /// Returns an error if any document fails validation or the atomic
    /// write fails.
    pub fn save_all(&self, documents: &[T]) -> Result<()> {
        for document in documents {
            document.validate()?;
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let temp_path = self.path.with_extension("jsonl.tmp");
        {
            let mut file = File::create(&temp_path)?;
            for document in documents {
                let json = serde_json::to_string(document)?;
                file.write_all(json.as_bytes())?;
                file.write_all(b"\n")?;
            }
            file.sync_all()?;
        }

        std::fs::rename(&temp_path, &self.path)?;
        Ok(())
    }

    /// Removes a document by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no document has the ID, or any IO error.
    pub fn delete(&self, id: &str) -> Result<()> {
        self.with_lock(|| {
            let mut documents = self.load_all()?;
            let initial_len = documents.len();
            documents.retain(|d| d.id() != id);
            if documents.len() == initial_len {
                return Err(Error::NotFound(id.to_string()));
            }
            self.save_all(&documents)
        })
    }

    /// Executes a closure with an exclusive lock on the collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is held elsewhere or the closure fails.
    pub fn with_lock<F, R>(&self, f: F) -> Result<R>
    where
        F: FnOnce() -> Result<R>,
    {
        use fs2::FileExt;
        use std::fs::OpenOptions;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let lock_path = self.path.with_extension("lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)?;

        lock_file.try_lock_exclusive().map_err(|e| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::WouldBlock,
                format!("Failed to acquire lock: {}", e),
            ))
        })?;

        let result = f();
        let _ = lock_file.unlock();
        result
    }
}
