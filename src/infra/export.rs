//! Writes text reports to the user's download directory.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::info;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("invalid report file name `{0}`")]
    InvalidFileName(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Download directory, or the working directory when the platform has none.
pub fn export_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

pub fn save_report(file_name: &str, contents: &str) -> Result<PathBuf, ExportError> {
    save_report_in(&export_dir(), file_name, contents)
}

pub fn save_report_in(dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf, ExportError> {
    let is_plain_name = Path::new(file_name)
        .file_name()
        .map(|name| name == file_name)
        .unwrap_or(false);
    if !is_plain_name {
        return Err(ExportError::InvalidFileName(file_name.to_string()));
    }

    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, contents)?;
    info!("[export] Saved report to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::generate_id;

    #[test]
    fn writes_report_into_directory() {
        let dir = std::env::temp_dir().join(generate_id("offsite-export"));
        let path = save_report_in(&dir, "estimate.txt", "TOTAL COST: $1").unwrap();

        assert_eq!(path, dir.join("estimate.txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "TOTAL COST: $1");

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn rejects_paths_as_file_names() {
        let dir = std::env::temp_dir();
        assert!(matches!(
            save_report_in(&dir, "../escape.txt", ""),
            Err(ExportError::InvalidFileName(_))
        ));
        assert!(matches!(
            save_report_in(&dir, "", ""),
            Err(ExportError::InvalidFileName(_))
        ));
    }
}
