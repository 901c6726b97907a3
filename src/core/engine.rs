use crate::core::Pipeline;
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct RunOutput {
    pub output_path: String,
    pub pet_count: usize,
    pub rendered: String,
}

pub struct GuidanceEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> GuidanceEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunOutput> {
        tracing::info!("Starting feeding guidance run");

        // Extract
        let pets = self.pipeline.extract().await.inspect_err(|e| {
            tracing::error!("❌ Fetching pet list failed: {}", e);
        })?;
        tracing::info!("Fetched {} pets", pets.len());

        // Transform
        let report = self.pipeline.transform(pets).await?;
        tracing::info!("Computed guidance for {} pets", report.guidance.len());

        // Load
        let output_path = self.pipeline.load(&report).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(RunOutput {
            output_path,
            pet_count: report.guidance.len(),
            rendered: report.text_output,
        })
    }
}
