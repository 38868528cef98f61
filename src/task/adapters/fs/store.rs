//! Directory-backed durable store.
//!
//! Each key is one `<key>.json` file inside a capability-scoped directory.
//! Writes go to a temporary file that is then renamed over the target, so a
//! reader never sees a half-written record. A directory that cannot be
//! opened yields a store whose every operation reports
//! [`StoreError::Unavailable`].

use crate::task::ports::{KeyValueStore, StoreError, StoreResult};
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use log::warn;
use std::io;

const RECORD_EXTENSION: &str = "json";
const TEMP_SUFFIX: &str = "tmp";

/// Durable key-value store that keeps one file per key in a directory.
#[derive(Debug)]
pub struct DirectoryKeyValueStore {
    backing: Backing,
}

#[derive(Debug)]
enum Backing {
    Open(Dir),
    Unavailable(String),
}

impl DirectoryKeyValueStore {
    /// Opens the store at `path`, creating the directory when missing.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when the directory cannot be
    /// created or opened.
    pub fn open(path: &Utf8Path) -> StoreResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority())
            .and_then(|()| Dir::open_ambient_dir(path, ambient_authority()))
            .map(Self::from_dir)
            .map_err(|err| StoreError::Unavailable(format!("{path}: {err}")))
    }

    /// Opens the store at `path`, degrading to an unavailable store when the
    /// directory cannot be created or opened.
    #[must_use]
    pub fn open_or_unavailable(path: &Utf8Path) -> Self {
        Self::open(path).unwrap_or_else(|err| {
            warn!("running without a durable store: {err}");
            Self {
                backing: Backing::Unavailable(format!("{path} could not be opened")),
            }
        })
    }

    /// Wraps an already opened directory.
    #[must_use]
    pub const fn from_dir(dir: Dir) -> Self {
        Self {
            backing: Backing::Open(dir),
        }
    }

    fn dir(&self) -> StoreResult<&Dir> {
        match &self.backing {
            Backing::Open(dir) => Ok(dir),
            Backing::Unavailable(reason) => Err(StoreError::Unavailable(reason.clone())),
        }
    }
}

/// Maps a key onto a file name, rejecting keys that could escape the
/// directory or hide as dotfiles.
fn record_file_name(key: &str) -> StoreResult<String> {
    let is_valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'));
    if !is_valid {
        return Err(StoreError::io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid store key '{key}'"),
        )));
    }
    Ok(format!("{key}.{RECORD_EXTENSION}"))
}

impl KeyValueStore for DirectoryKeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let dir = self.dir()?;
        let file_name = record_file_name(key)?;
        match dir.read_to_string(&file_name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::io(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let dir = self.dir()?;
        let file_name = record_file_name(key)?;
        let temp_name = format!("{file_name}.{TEMP_SUFFIX}");
        dir.write(&temp_name, value)
            .and_then(|()| dir.rename(&temp_name, dir, &file_name))
            .map_err(StoreError::io)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let dir = self.dir()?;
        let file_name = record_file_name(key)?;
        match dir.remove_file(&file_name) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::io(err)),
        }
    }
}
