use crate::core::{Pipeline, RunSummary};
use crate::utils::error::Result;

pub struct RegroupEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> RegroupEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("Starting regroup process...");

        let files = self.pipeline.extract().await?;
        tracing::info!("Discovered {} CSV files", files.len());

        let plan = self.pipeline.transform(files).await?;
        tracing::info!(
            "Planned {} copies, {} files skipped",
            plan.copies.len(),
            plan.skipped.len()
        );

        let summary = self.pipeline.load(plan).await?;
        tracing::info!(
            "Copied {} files into {} groups under {}",
            summary.copied,
            summary.groups.len(),
            summary.results_dir
        );

        Ok(summary)
    }
}
