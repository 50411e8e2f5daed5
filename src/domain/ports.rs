use crate::domain::model::{CsvFile, RegroupPlan, RunSummary, UnlabeledPolicy};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub trait Storage: Send + Sync {
    /// Recursively list files with a `.csv` extension (case-insensitive)
    /// under `root`, never descending into `exclude`.
    fn discover_csv_files(
        &self,
        root: &Path,
        exclude: &Path,
    ) -> impl std::future::Future<Output = Result<Vec<PathBuf>>> + Send;

    /// Delete `dir` recursively if it exists, then create it fresh.
    fn reset_dir(&self, dir: &Path) -> impl std::future::Future<Output = Result<()>> + Send;

    fn ensure_dir(&self, dir: &Path) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Copy `source` to `dest`, overwriting. Returns bytes copied.
    fn copy_file(
        &self,
        source: &Path,
        dest: &Path,
    ) -> impl std::future::Future<Output = Result<u64>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn root_dir(&self) -> &str;
    fn results_dir_name(&self) -> &str;
    fn on_unlabeled(&self) -> UnlabeledPolicy;
    fn dry_run(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<CsvFile>>;
    async fn transform(&self, files: Vec<CsvFile>) -> Result<RegroupPlan>;
    async fn load(&self, plan: RegroupPlan) -> Result<RunSummary>;
}
