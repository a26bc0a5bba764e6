use crate::domain::model::{GenerationResult, OutputFormat, TermLists, TermSource};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn products(&self) -> TermSource;
    fn words(&self) -> TermSource;
    fn match_types(&self) -> &[String];
    fn order_matters(&self) -> bool;
    fn campaign_name(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_file(&self) -> &str;
    fn output_format(&self) -> OutputFormat;
    fn include_index(&self) -> bool;
    fn max_rows(&self) -> usize;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<TermLists>;
    async fn transform(&self, terms: TermLists) -> Result<GenerationResult>;
    async fn load(&self, result: GenerationResult) -> Result<String>;
}
