//! Field-level match scoring.
//!
//! Each text field of a record is classified into one tier based on how well
//! it matches the query, best tier first. The weighted score of a field is
//! `tier × weight`, with weights kept in tenths so every score is an exact
//! integer — cross-field ties (say, an exact tag hit against a word-prefix
//! name hit) compare exactly instead of through float rounding.

/// Match strength of a single field against a query.
///
/// Tiers are checked in order from best to worst and the first hit wins: a
/// field that both starts with and contains the query scores as a prefix
/// match, not a substring match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    /// No match anywhere in the field.
    None = 0,
    /// Query occurs somewhere inside the field.
    Contains = 40,
    /// Some whitespace-separated word of the field starts with the query.
    WordPrefix = 60,
    /// The field starts with the query.
    Prefix = 80,
    /// Case-insensitive equality.
    Exact = 100,
}

impl MatchTier {
    /// Raw tier score, 0–100.
    pub const fn score(self) -> u32 {
        self as u32
    }
}

/// Field weights in tenths (name ×1.0, scientific name ×0.8, category ×0.7,
/// tag ×0.6, description ×0.5). A weighted score is `tier × weight_tenths`,
/// so the best possible score is 1000.
pub(crate) const WEIGHT_NAME: u32 = 10;
pub(crate) const WEIGHT_SCIENTIFIC_NAME: u32 = 8;
pub(crate) const WEIGHT_CATEGORY: u32 = 7;
pub(crate) const WEIGHT_TAG: u32 = 6;
pub(crate) const WEIGHT_DESCRIPTION: u32 = 5;

/// Classifies `field` against `query`, case-insensitively.
///
/// An empty or absent field never matches; an empty query matches nothing.
/// `query` is expected to be pre-trimmed by the caller.
pub fn match_tier(field: &str, query: &str) -> MatchTier {
    if field.is_empty() || query.is_empty() {
        return MatchTier::None;
    }

    let field = field.to_lowercase();
    let query = query.to_lowercase();

    if field == query {
        MatchTier::Exact
    } else if field.starts_with(&query) {
        MatchTier::Prefix
    } else if field
        .split_whitespace()
        .any(|word| word.starts_with(&query))
    {
        MatchTier::WordPrefix
    } else if field.contains(&query) {
        MatchTier::Contains
    } else {
        MatchTier::None
    }
}

/// Weighted score of an optional field: tier score × weight in tenths.
/// Absent fields score 0, same as empty ones.
pub(crate) fn weighted(field: Option<&str>, query: &str, weight_tenths: u32) -> u32 {
    field.map_or(0, |text| match_tier(text, query).score() * weight_tenths)
}
