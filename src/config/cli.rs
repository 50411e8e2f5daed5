use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    async fn discover_csv_files(&self, root: &Path, exclude: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        // The exclude path is the results directory; a previous run's tree
        // must not feed the current run.
        for entry in WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| e.path() != exclude)
        {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let is_csv = entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("csv"))
                .unwrap_or(false);

            if is_csv {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    async fn reset_dir(&self, dir: &Path) -> Result<()> {
        if dir.is_dir() {
            tracing::info!("Directory exists, removing tree {}", dir.display());
            fs::remove_dir_all(dir)?;
        }

        tracing::info!("Creating directory {}", dir.display());
        fs::create_dir_all(dir)?;
        Ok(())
    }

    async fn ensure_dir(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;
        Ok(())
    }

    async fn copy_file(&self, source: &Path, dest: &Path) -> Result<u64> {
        let bytes = fs::copy(source, dest)?;
        Ok(bytes)
    }
}
