//! Durable, append-only storage for the reading log.
//!
//! The log is a single pretty-printed JSON array. Every append reads the whole
//! document, pushes one reading, and rewrites the document through a temporary
//! file in the same directory that is renamed over the original. A reader
//! therefore sees either the old log or the new one, never a partial write.
//!
//! There is no locking: two processes appending at the same time may lose one
//! of the updates (the last rename wins).

use super::{to_stored_precision, validate_level, Reading};
use crate::errors::{AppResult, StorageError};
use chrono::{Local, NaiveDateTime};
use std::fs;
#[cfg(unix)]
use std::fs::Permissions;
use std::io::{self, Write};
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

#[cfg(unix)]
use crate::constants::DEFAULT_DIR_PERMISSIONS;

/// Handle to one reading log document.
///
/// The store holds no cached readings; every call goes to disk so that it
/// observes all appends completed before it.
///
/// # Examples
///
/// ```no_run
/// use sugarlog::readings::ReadingStore;
///
/// let store = ReadingStore::new("/home/me/.sugarlog/blood_sugar_log.json");
/// let reading = store.append(120)?;
/// assert_eq!(store.load()?.last(), Some(&reading));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct ReadingStore {
    path: PathBuf,
}

impl ReadingStore {
    /// Creates a handle for the log document at `path`. Nothing is touched on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns every reading, oldest first.
    ///
    /// A missing or zero-length document is an empty log. So is a path whose
    /// parent is not a directory, since no document can exist there.
    ///
    /// # Errors
    ///
    /// - `StorageError::Read` if the document exists but cannot be read
    /// - `StorageError::Corrupt` if it is not a JSON array of readings
    /// - `StorageError::OutOfOrder` if a timestamp is older than its predecessor
    pub fn load(&self) -> Result<Vec<Reading>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e)
                if matches!(
                    e.kind(),
                    io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
                ) =>
            {
                debug!("No reading log at {:?}, starting empty", self.path);
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let readings: Vec<Reading> =
            serde_json::from_str(&content).map_err(|source| StorageError::Corrupt {
                path: self.path.clone(),
                source,
            })?;

        if let Some(index) = first_out_of_order(&readings) {
            return Err(StorageError::OutOfOrder {
                path: self.path.clone(),
                index,
            });
        }

        debug!("Loaded {} readings", readings.len());
        Ok(readings)
    }

    /// Records `level` with the current local time and persists the whole log.
    ///
    /// # Errors
    ///
    /// - `AppError::Validation` if `level` is outside 40..=500 (nothing is written)
    /// - `AppError::Storage` if the existing log cannot be loaded or the new
    ///   log cannot be written; the previous document is left untouched
    pub fn append(&self, level: i64) -> AppResult<Reading> {
        self.append_at(level, Local::now().naive_local())
    }

    fn append_at(&self, level: i64, now: NaiveDateTime) -> AppResult<Reading> {
        let level = validate_level(level)?;
        let mut readings = self.load()?;

        // Never step backwards, even if the wall clock did.
        let timestamp = match readings.last() {
            Some(last) if last.timestamp > now => last.timestamp,
            _ => now,
        };
        let timestamp = to_stored_precision(timestamp);

        let reading = Reading { timestamp, level };
        readings.push(reading.clone());
        self.write_all(&readings)?;

        info!(mg_dl = reading.level, total = readings.len(), "Saved reading");
        Ok(reading)
    }

    fn write_all(&self, readings: &[Reading]) -> Result<(), StorageError> {
        let write_error = |source: io::Error| StorageError::Write {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        ensure_log_directory_exists(dir).map_err(write_error)?;

        // NamedTempFile is created with 0o600 on unix.
        let mut temp = NamedTempFile::new_in(dir).map_err(write_error)?;
        serde_json::to_writer_pretty(&mut temp, readings)
            .map_err(|e| write_error(io::Error::from(e)))?;
        temp.write_all(b"\n").map_err(write_error)?;
        temp.as_file().sync_all().map_err(write_error)?;
        temp.persist(&self.path)
            .map_err(|e| write_error(e.error))?;

        debug!("Rewrote reading log with {} entries", readings.len());
        Ok(())
    }
}

fn first_out_of_order(readings: &[Reading]) -> Option<usize> {
    readings
        .windows(2)
        .position(|pair| pair[1].timestamp < pair[0].timestamp)
        .map(|i| i + 1)
}

fn ensure_log_directory_exists(dir: &Path) -> io::Result<()> {
    if dir.exists() {
        return Ok(());
    }

    fs::create_dir_all(dir)?;

    #[cfg(unix)]
    {
        fs::set_permissions(dir, Permissions::from_mode(DEFAULT_DIR_PERMISSIONS))?;
        debug!("Set 0o700 permissions on reading log directory");
    }

    Ok(())
}
