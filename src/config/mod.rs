pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::{OutputFormat, TermSource};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_CAMPAIGN_NAME: &str = "SEM_Campaign";
pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const DEFAULT_OUTPUT_FILE: &str = "rawdata.csv";
pub const DEFAULT_MAX_ROWS: usize = 100_000;

pub fn default_match_types() -> Vec<String> {
    vec!["Exact".to_string(), "Phrase".to_string()]
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "sem-keywords")]
#[command(about = "Generate search campaign keywords from products and purchase-intent words")]
pub struct CliConfig {
    /// Products to promote, comma separated; use --products-file for terms containing commas
    #[arg(long, value_delimiter = ',')]
    pub products: Vec<String>,

    /// File with one product per line
    #[arg(long)]
    pub products_file: Option<String>,

    /// Purchase-intent words, comma separated; use --words-file for terms containing commas
    #[arg(long, value_delimiter = ',')]
    pub words: Vec<String>,

    /// File with one intent word per line
    #[arg(long)]
    pub words_file: Option<String>,

    #[arg(long, value_delimiter = ',', default_value = "Exact,Phrase")]
    pub match_types: Vec<String>,

    /// Also emit every phrase in reversed term order
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub order_matters: bool,

    #[arg(long, default_value = DEFAULT_CAMPAIGN_NAME)]
    pub campaign_name: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Prepend the `#` sequence column
    #[arg(long)]
    pub include_index: bool,

    #[arg(long, default_value_t = DEFAULT_MAX_ROWS)]
    pub max_rows: usize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
fn term_source(inline: &[String], file: &Option<String>) -> TermSource {
    match file {
        Some(path) => TermSource::File(path.clone()),
        None => TermSource::Inline(inline.to_vec()),
    }
}

#[cfg(feature = "cli")]
fn inline_terms(terms: &[String]) -> Option<&[String]> {
    if terms.is_empty() {
        None
    } else {
        Some(terms)
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn products(&self) -> TermSource {
        term_source(&self.products, &self.products_file)
    }

    fn words(&self) -> TermSource {
        term_source(&self.words, &self.words_file)
    }

    fn match_types(&self) -> &[String] {
        &self.match_types
    }

    fn order_matters(&self) -> bool {
        self.order_matters
    }

    fn campaign_name(&self) -> &str {
        &self.campaign_name
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn include_index(&self) -> bool {
        self.include_index
    }

    fn max_rows(&self) -> usize {
        self.max_rows
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_term_source(
            "products",
            inline_terms(&self.products),
            self.products_file.as_deref(),
        )?;
        validation::validate_term_source(
            "words",
            inline_terms(&self.words),
            self.words_file.as_deref(),
        )?;
        validation::validate_match_types(&self.match_types)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_non_empty_string("output_file", &self.output_file)?;
        validation::validate_positive_number("max_rows", self.max_rows, 1)?;
        Ok(())
    }
}
