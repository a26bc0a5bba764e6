use crate::domain::model::KeywordRow;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeywordSummary {
    pub total_keywords: usize,
    pub unique_keywords: usize,
    pub ad_groups: usize,
}

impl KeywordSummary {
    pub fn from_rows(rows: &[KeywordRow]) -> Self {
        let keywords: HashSet<&str> = rows.iter().map(|row| row.keyword.as_str()).collect();
        let ad_groups: HashSet<&str> = rows.iter().map(|row| row.ad_group.as_str()).collect();

        Self {
            total_keywords: rows.len(),
            unique_keywords: keywords.len(),
            ad_groups: ad_groups.len(),
        }
    }
}

impl fmt::Display for KeywordSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total keywords: {}", self.total_keywords)?;
        writeln!(f, "Unique keywords: {}", self.unique_keywords)?;
        write!(f, "Ad groups: {}", self.ad_groups)
    }
}
