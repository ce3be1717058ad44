//! Durable storage for the named counters.
//!
//! Each counter is a decimal-text file under the kiosk data directory
//! (`~/.local/share/loopkiosk/counters/` or platform equivalent). Values
//! survive across runs; initialization is idempotent and never clobbers
//! an existing value.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::error::StoreError;

/// The two counters tracked by the kiosk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterKind {
    Turns,
    Boops,
}

impl CounterKind {
    pub const ALL: [CounterKind; 2] = [CounterKind::Turns, CounterKind::Boops];

    /// Storage key, also used as the backing filename.
    pub fn storage_key(self) -> &'static str {
        match self {
            CounterKind::Turns => "turns_counter",
            CounterKind::Boops => "boops_counter",
        }
    }
}

impl fmt::Display for CounterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CounterKind::Turns => write!(f, "turns"),
            CounterKind::Boops => write!(f, "boops"),
        }
    }
}

/// File-backed key-value store for counter values.
#[derive(Debug, Clone)]
pub struct CounterStore {
    dir: PathBuf,
}

impl CounterStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Open the store at the default platform data directory.
    pub fn open_default() -> Result<Self, StoreError> {
        let dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("loopkiosk")
            .join("counters");
        Self::open(dir)
    }

    fn path(&self, kind: CounterKind) -> PathBuf {
        self.dir.join(kind.storage_key())
    }

    /// Store 0 under `kind` if nothing is stored yet. Idempotent: an
    /// existing value, zero or not, is left untouched.
    pub fn ensure_initialized(&self, kind: CounterKind) -> Result<(), StoreError> {
        let path = self.path(kind);
        if path.exists() {
            return Ok(());
        }
        self.write(kind, 0)
    }

    /// Read the stored value. Callers are expected to run
    /// [`ensure_initialized`](Self::ensure_initialized) first.
    pub fn read(&self, kind: CounterKind) -> Result<u64, StoreError> {
        let key = kind.storage_key();
        let raw = match fs::read_to_string(self.path(kind)) {
            Ok(raw) => raw,
            Err(source) if source.kind() == ErrorKind::NotFound => {
                return Err(StoreError::Missing { key });
            }
            Err(source) => return Err(StoreError::Read { key, source }),
        };
        raw.trim()
            .parse()
            .map_err(|_| StoreError::Corrupt { key, raw })
    }

    /// Overwrite the stored value unconditionally.
    pub fn write(&self, kind: CounterKind, value: u64) -> Result<(), StoreError> {
        fs::write(self.path(kind), value.to_string()).map_err(|source| StoreError::Write {
            key: kind.storage_key(),
            source,
        })
    }
}
