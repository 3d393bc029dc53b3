use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::core::error::PersistError;

/// Persists rendered reports under an output directory, one file per run.
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write the rendered report, deriving the file name from the
    /// generation timestamp so consecutive runs never collide and files
    /// sort chronologically. Directory creation is idempotent.
    pub fn write(
        &self,
        content: &str,
        generated_at: DateTime<Utc>,
    ) -> Result<PathBuf, PersistError> {
        std::fs::create_dir_all(&self.output_dir).map_err(|source| PersistError::CreateDir {
            dir: self.output_dir.clone(),
            source,
        })?;

        let path = self.output_dir.join(Self::file_name(generated_at));

        std::fs::write(&path, content).map_err(|source| PersistError::WriteFile {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }

    /// `report_YYYYMMDD_HHMMSS.txt`, filename-safe and sortable
    fn file_name(generated_at: DateTime<Utc>) -> String {
        format!("report_{}.txt", generated_at.format("%Y%m%d_%H%M%S"))
    }
}
