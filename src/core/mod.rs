pub mod engine;
pub mod exporter;
pub mod generator;
pub mod pipeline;
pub mod summary;

pub use crate::domain::model::{GenerationResult, KeywordRow, MatchType, TermLists};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
