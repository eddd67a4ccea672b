use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::models::IntakeRecord;

/// One JSON file per intake, named `<id>.json`, inside a single directory.
#[derive(Debug, Clone)]
pub struct IntakeStore {
    dir: PathBuf,
}

impl IntakeStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the storage directory (and parents). Safe to call repeatedly.
    pub fn ensure_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.dir)
    }

    pub fn path_for(&self, id: u64) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    /// Write the record and return the final path.
    ///
    /// Content goes to a temp file in the same directory which is then renamed
    /// over the target, so a reader sees either nothing or the whole document.
    pub async fn save(&self, record: &IntakeRecord) -> Result<PathBuf, AppError> {
        let bytes = serde_json::to_vec_pretty(&record.to_document())
            .map_err(|e| AppError::Persistence(format!("Failed to serialize intake: {e}")))?;

        let dir = self.dir.clone();
        let final_path = self.path_for(record.id);
        let target = final_path.clone();

        tokio::task::spawn_blocking(move || write_atomic(&dir, &target, &bytes))
            .await
            .map_err(|e| AppError::Persistence(format!("Write task failed: {e}")))??;

        Ok(final_path)
    }
}

fn write_atomic(dir: &Path, target: &Path, bytes: &[u8]) -> Result<(), AppError> {
    let temp = tempfile::NamedTempFile::new_in(dir).map_err(|e| {
        AppError::Persistence(format!("Failed to create temp file in {}: {e}", dir.display()))
    })?;

    let mut file = temp.as_file();
    file.write_all(bytes)
        .and_then(|_| file.sync_all())
        .map_err(|e| {
            AppError::Persistence(format!("Failed to write {}: {e}", target.display()))
        })?;

    temp.persist(target).map_err(|e| {
        AppError::Persistence(format!("Failed to move intake into {}: {}", target.display(), e.error))
    })?;

    Ok(())
}
