use crate::core::exporter::CsvExporter;
use crate::core::generator::{expected_row_count, normalize_terms, parse_terms, KeywordGenerator};
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{GenerationResult, MatchType, OutputFormat, TermLists, TermSource};
use crate::utils::error::{KeywordError, Result};
use std::path::Path;

/// Keyword job: read term lists, generate rows, write the rendered table.
pub struct KeywordPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    generator: KeywordGenerator,
}

impl<S: Storage, C: ConfigProvider> KeywordPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            generator: KeywordGenerator::new(),
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    async fn load_terms(&self, source: TermSource) -> Result<Vec<String>> {
        match source {
            TermSource::Inline(terms) => Ok(normalize_terms(terms)),
            TermSource::File(path) => {
                tracing::debug!("Reading terms from: {}", path);
                let bytes = self.storage.read_file(&path).await?;
                let text = String::from_utf8(bytes).map_err(|e| KeywordError::DecodeError {
                    message: format!("'{}' is not valid UTF-8: {}", path, e),
                })?;
                Ok(parse_terms(&text))
            }
        }
    }

    fn output_location(&self) -> String {
        Path::new(self.config.output_path())
            .join(self.config.output_file())
            .to_string_lossy()
            .into_owned()
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for KeywordPipeline<S, C> {
    async fn extract(&self) -> Result<TermLists> {
        let products = self.load_terms(self.config.products()).await?;
        let words = self.load_terms(self.config.words()).await?;

        tracing::debug!(
            "Loaded {} products and {} words",
            products.len(),
            words.len()
        );

        Ok(TermLists { products, words })
    }

    async fn transform(&self, terms: TermLists) -> Result<GenerationResult> {
        let match_types = MatchType::parse_all(self.config.match_types())?;
        if match_types.is_empty() {
            return Err(KeywordError::NoMatchTypes);
        }

        let requested = expected_row_count(
            terms.products.len(),
            terms.words.len(),
            match_types.len(),
            self.config.order_matters(),
        );
        let limit = self.config.max_rows();
        if requested > limit {
            return Err(KeywordError::RowLimitExceeded { requested, limit });
        }

        let rows = self.generator.generate(
            &terms.products,
            &terms.words,
            &match_types,
            self.config.order_matters(),
            self.config.campaign_name(),
        )?;

        let exporter = CsvExporter::new().with_index(self.config.include_index());
        let payload = match self.config.output_format() {
            OutputFormat::Csv => exporter.export(&rows)?,
            OutputFormat::DataUri => exporter.export_data_uri(&rows)?,
            OutputFormat::Json => serde_json::to_string_pretty(&rows)?,
        };

        Ok(GenerationResult { rows, payload })
    }

    async fn load(&self, result: GenerationResult) -> Result<String> {
        let output_location = self.output_location();

        tracing::debug!(
            "Writing {} bytes ({} rows) to storage",
            result.payload.len(),
            result.rows.len()
        );
        self.storage
            .write_file(&output_location, result.payload.as_bytes())
            .await?;

        Ok(output_location)
    }
}
