use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::activity::ActivityState;

const ACTIVITY_FILE: &str = "activity.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed record in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub struct JsonStore {
    base_dir: PathBuf,
}

impl JsonStore {
    pub fn with_base_dir(base_dir: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&base_dir).map_err(|e| StoreError::io(&base_dir, e))?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn file_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }

    /// `Ok(None)` when nothing has been saved yet.
    pub fn load_activity(&self) -> Result<Option<ActivityState>, StoreError> {
        let path = self.file_path(ACTIVITY_FILE);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::io(&path, e)),
        };
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| StoreError::Parse { path, source })
    }

    pub fn save_activity(&self, state: &ActivityState) -> Result<(), StoreError> {
        let path = self.file_path(ACTIVITY_FILE);
        let tmp_path = path.with_extension("json.tmp");

        let json = serde_json::to_string_pretty(state)?;
        let write = || -> io::Result<()> {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(json.as_bytes())?;
            file.sync_all()?;
            fs::rename(&tmp_path, &path)
        };
        write().map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            StoreError::io(&path, e)
        })
    }

    /// Remove the saved record. Succeeds when there is none.
    pub fn clear_activity(&self) -> Result<(), StoreError> {
        let path = self.file_path(ACTIVITY_FILE);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(&path, e)),
        }
    }
}

pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("keytally")
}
