use crate::utils::error::KeywordError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Keyword matching mode of an ad platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchType {
    Exact,
    Phrase,
    Modified,
    Broad,
}

impl MatchType {
    pub const ALL: [MatchType; 4] = [
        MatchType::Exact,
        MatchType::Phrase,
        MatchType::Modified,
        MatchType::Broad,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MatchType::Exact => "Exact",
            MatchType::Phrase => "Phrase",
            MatchType::Modified => "Modified",
            MatchType::Broad => "Broad",
        }
    }

    /// Encodes a raw phrase the way the platform expects for this match type.
    pub fn apply(&self, phrase: &str) -> String {
        match self {
            MatchType::Exact => format!("[{}]", phrase),
            MatchType::Phrase => format!("\"{}\"", phrase),
            MatchType::Modified => phrase
                .split_whitespace()
                .map(|token| format!("+{}", token))
                .collect::<Vec<_>>()
                .join(" "),
            MatchType::Broad => phrase.to_string(),
        }
    }

    /// Parses every name, failing on the first unrecognized one.
    pub fn parse_all<S: AsRef<str>>(names: &[S]) -> Result<Vec<MatchType>, KeywordError> {
        names.iter().map(|name| name.as_ref().parse()).collect()
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MatchType {
    type Err = KeywordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        MatchType::ALL
            .into_iter()
            .find(|match_type| match_type.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| KeywordError::InvalidMatchType {
                value: s.to_string(),
            })
    }
}

/// One generated keyword with its campaign annotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRow {
    #[serde(rename = "#", default)]
    pub index: usize,
    #[serde(rename = "Campaign")]
    pub campaign: String,
    #[serde(rename = "Ad Group")]
    pub ad_group: String,
    #[serde(rename = "Keyword")]
    pub keyword: String,
    #[serde(rename = "Criterion Type")]
    pub criterion_type: MatchType,
    #[serde(rename = "Labels")]
    pub labels: String,
}

/// Normalized term lists read by a keyword job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermLists {
    pub products: Vec<String>,
    pub words: Vec<String>,
}

/// Where a term list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermSource {
    Inline(Vec<String>),
    File(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Csv,
    DataUri,
    Json,
}

#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub rows: Vec<KeywordRow>,
    pub payload: String,
}
