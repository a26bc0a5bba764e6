pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, toml_config::TomlConfig};

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::{
    engine::{JobReport, KeywordEngine},
    exporter::{decode_data_uri, parse_csv, to_data_uri, CsvExporter},
    generator::{expected_row_count, normalize_terms, parse_terms, KeywordGenerator},
    pipeline::KeywordPipeline,
    summary::KeywordSummary,
};
pub use domain::model::{KeywordRow, MatchType, OutputFormat, TermSource};
pub use utils::error::{KeywordError, Result};
