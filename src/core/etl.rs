use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("Starting ETL process...");

        // Extract
        tracing::info!("Extracting accessories...");
        let document = self.pipeline.extract().await?;
        tracing::info!("Extracted {} accessories", document.accessories.len());

        // Transform
        tracing::info!("Flattening services...");
        let result = self.pipeline.transform(document).await?;
        tracing::info!(
            "Produced {} records ({} services skipped)",
            result.records.len(),
            result.skipped
        );

        // Load
        tracing::info!("Writing catalog...");
        let output_path = self.pipeline.load(result).await?;
        tracing::info!(
            "Output saved to: {} ({:.2?})",
            output_path,
            started.elapsed()
        );

        Ok(output_path)
    }
}
