//! Byte-level storage medium
//!
//! The stores only ever read, rewrite or remove whole named blobs. A
//! missing blob is reported as `None`, never as an error.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

/// Whole-blob read/write primitive
pub trait Medium: Send + Sync {
    /// Read a blob, `None` when it does not exist
    fn read(&self, name: &str) -> io::Result<Option<Vec<u8>>>;

    /// Replace a blob with `bytes`
    fn write(&self, name: &str, bytes: &[u8]) -> io::Result<()>;

    /// Remove a blob, returning whether it existed
    fn remove(&self, name: &str) -> io::Result<bool>;

    /// Human-readable location of a blob for messages
    fn locate(&self, name: &str) -> String;
}

/// Files in a local directory
#[derive(Debug, Clone)]
pub struct DirMedium {
    dir: PathBuf,
}

impl DirMedium {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

impl Medium for DirMedium {
    fn read(&self, name: &str) -> io::Result<Option<Vec<u8>>> {
        match fs::read(self.path(name)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, name: &str, bytes: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path(name), bytes)
    }

    fn remove(&self, name: &str) -> io::Result<bool> {
        match fs::remove_file(self.path(name)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn locate(&self, name: &str) -> String {
        self.path(name).display().to_string()
    }
}

/// In-process blobs, used for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryMedium {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
    fail_writes: AtomicBool,
}

impl MemoryMedium {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a blob
    pub fn with_blob(self, name: &str, bytes: impl Into<Vec<u8>>) -> Self {
        self.blobs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), bytes.into());
        self
    }

    /// Make every following write and remove fail
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_writable(&self) -> io::Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "medium is read-only",
            ));
        }
        Ok(())
    }
}

impl Medium for MemoryMedium {
    fn read(&self, name: &str) -> io::Result<Option<Vec<u8>>> {
        let blobs = self.blobs.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(blobs.get(name).cloned())
    }

    fn write(&self, name: &str, bytes: &[u8]) -> io::Result<()> {
        self.check_writable()?;
        let mut blobs = self.blobs.lock().unwrap_or_else(PoisonError::into_inner);
        blobs.insert(name.to_string(), bytes.to_vec());
        Ok(())
    }

    fn remove(&self, name: &str) -> io::Result<bool> {
        self.check_writable()?;
        let mut blobs = self.blobs.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(blobs.remove(name).is_some())
    }

    fn locate(&self, name: &str) -> String {
        format!("memory:{}", name)
    }
}
