use crate::core::summary::KeywordSummary;
use crate::core::Pipeline;
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct JobReport {
    pub output_path: String,
    pub summary: KeywordSummary,
}

pub struct KeywordEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> KeywordEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<JobReport> {
        tracing::info!("Starting keyword generation");

        let terms = self.pipeline.extract().await?;
        tracing::info!(
            "Loaded {} products and {} intent words",
            terms.products.len(),
            terms.words.len()
        );

        let result = self.pipeline.transform(terms).await?;
        let summary = KeywordSummary::from_rows(&result.rows);
        tracing::info!(
            "Generated {} keywords ({} unique) across {} ad groups",
            summary.total_keywords,
            summary.unique_keywords,
            summary.ad_groups
        );

        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(JobReport {
            output_path,
            summary,
        })
    }
}
