use crate::core::{
    ConfigProvider, CsvFile, Pipeline, PlannedCopy, RegroupPlan, RunSummary, Storage,
    UnlabeledPolicy,
};
use crate::utils::error::{RegroupError, Result};
use regex::Regex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Matches `<stem>_<label>.csv` where `<label>` is the segment after the LAST
/// underscore and contains no underscore or dot. Extension match is
/// case-insensitive so `DATA_X.CSV` groups like `data_x.csv`.
fn label_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?<stem>.+)_(?<label>[^_.]+)\.(?i:csv)$").expect("static pattern is valid")
    })
}

pub struct RegroupPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> RegroupPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn results_path(&self) -> PathBuf {
        Path::new(self.config.root_dir()).join(self.config.results_dir_name())
    }

    /// Derives the group label and destination filename, or `None` when the
    /// filename has no usable `_<label>.csv` tail.
    fn plan_copy(&self, file: &CsvFile) -> Option<PlannedCopy> {
        let caps = label_regex().captures(&file.file_name)?;
        let stem = caps.name("stem")?.as_str();
        let label = caps.name("label")?.as_str();

        Some(PlannedCopy {
            source: file.path.clone(),
            label: label.to_string(),
            dest_name: format!("{}.txt", stem),
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for RegroupPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<CsvFile>> {
        let root = PathBuf::from(self.config.root_dir());
        let results_dir = self.results_path();

        tracing::debug!("Scanning {} for CSV files", root.display());
        let paths = self.storage.discover_csv_files(&root, &results_dir).await?;

        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            match CsvFile::from_path(path.clone()) {
                Some(file) => files.push(file),
                // Grouping works on the filename, so a non-UTF-8 name cannot
                // be processed.
                None => tracing::warn!("Skipping non-UTF-8 path {}", path.display()),
            }
        }

        Ok(files)
    }

    async fn transform(&self, files: Vec<CsvFile>) -> Result<RegroupPlan> {
        let mut plan = RegroupPlan::default();

        for file in files {
            match self.plan_copy(&file) {
                Some(copy) => {
                    tracing::debug!(
                        "{} -> {}/{}",
                        file.file_name,
                        copy.label,
                        copy.dest_name
                    );
                    plan.copies.push(copy);
                }
                None => match self.config.on_unlabeled() {
                    UnlabeledPolicy::Skip => {
                        tracing::warn!(
                            "Skipping '{}': no _<label>.csv tail to group by",
                            file.file_name
                        );
                        plan.skipped.push(file.file_name);
                    }
                    UnlabeledPolicy::Fail => {
                        return Err(RegroupError::UnlabeledFileError {
                            file_name: file.file_name,
                        });
                    }
                },
            }
        }

        Ok(plan)
    }

    async fn load(&self, plan: RegroupPlan) -> Result<RunSummary> {
        let results_dir = self.results_path();

        let mut groups: BTreeMap<String, usize> = BTreeMap::new();
        for copy in &plan.copies {
            *groups.entry(copy.label.clone()).or_insert(0) += 1;
        }

        if self.config.dry_run() {
            tracing::info!("Dry run: would recreate {}", results_dir.display());
            for copy in &plan.copies {
                tracing::info!(
                    "Dry run: would copy {} -> {}",
                    copy.source.display(),
                    results_dir.join(&copy.label).join(&copy.dest_name).display()
                );
            }
            return Ok(RunSummary {
                results_dir: results_dir.display().to_string(),
                copied: 0,
                skipped: plan.skipped.len(),
                groups,
                dry_run: true,
            });
        }

        self.storage.reset_dir(&results_dir).await?;

        for label in groups.keys() {
            let group_dir = results_dir.join(label);
            tracing::info!("Creating directory {}", group_dir.display());
            self.storage.ensure_dir(&group_dir).await?;
        }

        let mut copied = 0;
        for copy in &plan.copies {
            let dest = results_dir.join(&copy.label).join(&copy.dest_name);
            let bytes = self.storage.copy_file(&copy.source, &dest).await?;
            tracing::debug!("Copied {} bytes to {}", bytes, dest.display());
            copied += 1;
        }

        Ok(RunSummary {
            results_dir: results_dir.display().to_string(),
            copied,
            skipped: plan.skipped.len(),
            groups,
            dry_run: false,
        })
    }
}
