use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use tempfile::NamedTempFile;

use crate::io::write_log;
use crate::model::Item;

/// Error type for persistence operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not serialize items: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not write {path}: {source}")]
    WriteError { path: PathBuf, source: io::Error },
    #[error("io error: {0}")]
    IoError(#[from] io::Error),
}

/// Durable mirror of the item collection.
///
/// `load` runs once at startup; `save` is fire-and-forget — callers never
/// observe its outcome. Implementations must keep saves in invocation order
/// (last writer wins).
pub trait ItemGateway: Send + Sync {
    /// Read the persisted collection. `None` means nothing usable was
    /// found: absent file, unreadable content, or schema-invalid records.
    /// The caller treats all three as "start with an empty list."
    fn load(&self) -> Option<Vec<Item>>;

    /// Mirror the given snapshot to storage. Must not block the caller on
    /// the actual write and must never surface failure to it.
    fn save(&self, items: &[Item]);

    /// Number of saves that failed to reach storage so far
    fn failed_saves(&self) -> usize {
        0
    }
}

/// File-backed gateway: `items.json` in the data directory, written
/// atomically (temp file + rename) by a single writer thread.
///
/// The writer thread serializes saves in arrival order, so a later snapshot
/// can never be overtaken by an earlier one. Failures are appended to the
/// write-error log and counted; they never reach the UI thread. Dropping
/// the gateway drains pending saves before returning.
pub struct JsonFileGateway {
    data_dir: PathBuf,
    tx: Option<Sender<Vec<Item>>>,
    writer: Option<JoinHandle<()>>,
    failed: Arc<AtomicUsize>,
}

impl JsonFileGateway {
    pub fn new(data_dir: &Path) -> Self {
        let (tx, rx) = mpsc::channel::<Vec<Item>>();
        let dir = data_dir.to_path_buf();
        let failed = Arc::new(AtomicUsize::new(0));
        let failed_writer = Arc::clone(&failed);

        let writer = std::thread::spawn(move || {
            while let Ok(items) = rx.recv() {
                if let Err(e) = write_items(&dir, &items) {
                    failed_writer.fetch_add(1, Ordering::Relaxed);
                    write_log::log_save_failure(&dir, &e.to_string());
                }
            }
        });

        JsonFileGateway {
            data_dir: data_dir.to_path_buf(),
            tx: Some(tx),
            writer: Some(writer),
            failed,
        }
    }

    /// Path of the persisted collection
    pub fn items_path(data_dir: &Path) -> PathBuf {
        data_dir.join("items.json")
    }

    /// Synchronous write, bypassing the writer thread. Used by tests and by
    /// the writer thread itself.
    pub fn write_now(data_dir: &Path, items: &[Item]) -> Result<(), StoreError> {
        write_items(data_dir, items)
    }
}

impl ItemGateway for JsonFileGateway {
    fn load(&self) -> Option<Vec<Item>> {
        let content = fs::read_to_string(Self::items_path(&self.data_dir)).ok()?;
        serde_json::from_str(&content).ok()
    }

    fn save(&self, items: &[Item]) {
        if let Some(tx) = &self.tx {
            // The writer thread outlives every sender; a send can only fail
            // after Drop has begun, at which point the snapshot is stale.
            let _ = tx.send(items.to_vec());
        }
    }

    fn failed_saves(&self) -> usize {
        self.failed.load(Ordering::Relaxed)
    }
}

impl Drop for JsonFileGateway {
    fn drop(&mut self) {
        // Close the channel, then wait for queued saves to land
        self.tx.take();
        if let Some(writer) = self.writer.take() {
            let _ = writer.join();
        }
    }
}

/// Serialize and atomically write the collection to items.json
fn write_items(data_dir: &Path, items: &[Item]) -> Result<(), StoreError> {
    let content = serde_json::to_string_pretty(items)?;
    atomic_write(&JsonFileGateway::items_path(data_dir), content.as_bytes())
}

/// Write `content` to `path` atomically using a temp file + rename.
fn atomic_write(path: &Path, content: &[u8]) -> Result<(), StoreError> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StoreError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })?;
    tmp.write_all(content)?;
    tmp.persist(path).map_err(|e| StoreError::WriteError {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}

/// In-memory gateway for tests: records every save in order, synchronously.
#[derive(Default)]
pub struct MemoryGateway {
    initial: Mutex<Option<Vec<Item>>>,
    saves: Mutex<Vec<Vec<Item>>>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gateway whose `load` yields the given collection
    pub fn with_items(items: Vec<Item>) -> Self {
        MemoryGateway {
            initial: Mutex::new(Some(items)),
            saves: Mutex::new(Vec::new()),
        }
    }

    /// All snapshots saved so far, oldest first
    pub fn saves(&self) -> Vec<Vec<Item>> {
        self.saves.lock().unwrap().clone()
    }

    /// The most recent saved snapshot, if any
    pub fn last_save(&self) -> Option<Vec<Item>> {
        self.saves.lock().unwrap().last().cloned()
    }
}

impl ItemGateway for MemoryGateway {
    fn load(&self) -> Option<Vec<Item>> {
        self.initial.lock().unwrap().clone()
    }

    fn save(&self, items: &[Item]) {
        self.saves.lock().unwrap().push(items.to_vec());
    }
}
