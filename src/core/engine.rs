use crate::core::{Pipeline, Summary};
use crate::utils::error::Result;

pub struct CleanerEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> CleanerEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<Summary> {
        tracing::info!("Starting record cleaning...");

        let table = self.pipeline.extract().await?;
        tracing::info!("Loaded {} rows", table.len());

        let result = self.pipeline.transform(table).await?;
        tracing::info!(
            "Classified rows: {} valid, {} invalid",
            result.valid.len(),
            result.invalid.len()
        );

        let summary = self.pipeline.load(result).await?;
        tracing::info!(
            "📁 Outputs written: {} / {}",
            summary.invalid_path,
            summary.clean_path
        );

        Ok(summary)
    }
}
