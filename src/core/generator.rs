use crate::domain::model::{KeywordRow, MatchType};
use crate::utils::error::{KeywordError, Result};
use std::collections::HashSet;

/// Splits every entry into lines, trims them, drops empty ones and removes
/// duplicates.
///
/// The first occurrence of a term fixes its position, so the same input text
/// always yields the same list whether it arrives as one block or line by line.
pub fn normalize_terms<I, S>(terms: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut normalized = Vec::new();

    for term in terms {
        for line in term.as_ref().lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if seen.insert(trimmed.to_string()) {
                normalized.push(trimmed.to_string());
            }
        }
    }

    normalized
}

/// Splits a newline-delimited text block into normalized terms.
pub fn parse_terms(text: &str) -> Vec<String> {
    normalize_terms(text.lines())
}

/// Number of rows [`KeywordGenerator::generate`] emits for already normalized inputs.
pub fn expected_row_count(
    products: usize,
    words: usize,
    match_types: usize,
    order_matters: bool,
) -> usize {
    let orientations = if order_matters { 2 } else { 1 };
    products
        .saturating_mul(words)
        .saturating_mul(orientations)
        .saturating_mul(match_types)
}

#[derive(Debug)]
struct Pair<'a> {
    product: &'a str,
    word: &'a str,
    reversed: bool,
}

impl Pair<'_> {
    fn phrase(&self) -> String {
        if self.reversed {
            format!("{} {}", self.word, self.product)
        } else {
            format!("{} {}", self.product, self.word)
        }
    }
}

fn build_pairs<'a>(
    products: &'a [String],
    words: &'a [String],
    order_matters: bool,
) -> Vec<Pair<'a>> {
    let orientations: &[bool] = if order_matters { &[false, true] } else { &[false] };

    orientations
        .iter()
        .flat_map(move |&reversed| {
            products.iter().flat_map(move |product| {
                words.iter().map(move |word| Pair {
                    product: product.as_str(),
                    word: word.as_str(),
                    reversed,
                })
            })
        })
        .collect()
}

/// Expands products x intent words into match-typed keyword rows.
///
/// Stateless: every call normalizes its own inputs and returns a fresh table.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordGenerator;

impl KeywordGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Emits rows pair-major, match-type-minor, indexed from 1.
    ///
    /// Empty products or words yield an empty table. Duplicate match types in
    /// the selection are emitted as given.
    pub fn generate<P, W>(
        &self,
        products: &[P],
        words: &[W],
        match_types: &[MatchType],
        order_matters: bool,
        campaign_name: &str,
    ) -> Result<Vec<KeywordRow>>
    where
        P: AsRef<str>,
        W: AsRef<str>,
    {
        if match_types.is_empty() {
            return Err(KeywordError::NoMatchTypes);
        }

        let products = normalize_terms(products);
        let words = normalize_terms(words);

        if products.is_empty() || words.is_empty() {
            tracing::warn!(
                products = products.len(),
                words = words.len(),
                "No keyword combinations to generate"
            );
            return Ok(Vec::new());
        }

        let pairs = build_pairs(&products, &words, order_matters);
        let mut rows = Vec::with_capacity(pairs.len() * match_types.len());

        for pair in &pairs {
            let phrase = pair.phrase();
            for match_type in match_types {
                rows.push(KeywordRow {
                    index: rows.len() + 1,
                    campaign: campaign_name.to_string(),
                    ad_group: pair.product.to_string(),
                    keyword: match_type.apply(&phrase),
                    criterion_type: *match_type,
                    labels: pair.word.to_string(),
                });
            }
        }

        tracing::debug!(
            products = products.len(),
            words = words.len(),
            pairs = pairs.len(),
            rows = rows.len(),
            "Generated keyword rows"
        );

        Ok(rows)
    }

    /// Same as [`generate`](Self::generate) with match types given by name.
    ///
    /// All names are parsed before any row is built, so an unknown name fails
    /// the whole call with [`KeywordError::InvalidMatchType`].
    pub fn generate_named<P, W, M>(
        &self,
        products: &[P],
        words: &[W],
        match_types: &[M],
        order_matters: bool,
        campaign_name: &str,
    ) -> Result<Vec<KeywordRow>>
    where
        P: AsRef<str>,
        W: AsRef<str>,
        M: AsRef<str>,
    {
        let match_types = MatchType::parse_all(match_types)?;
        self.generate(products, words, &match_types, order_matters, campaign_name)
    }
}
