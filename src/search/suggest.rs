//! Weighted multi-field ranking of catalog records against a typed query.
//!
//! Ranking is a pure function of `(query, catalog)`: it is recomputed from
//! scratch on every keystroke, holds no state, and the same inputs always
//! produce the same order.

use super::scoring::{
    WEIGHT_CATEGORY, WEIGHT_DESCRIPTION, WEIGHT_NAME, WEIGHT_SCIENTIFIC_NAME, WEIGHT_TAG, weighted,
};
use crate::catalog::Plant;

/// Maximum number of suggestions surfaced in the dropdown.
pub const MAX_SUGGESTIONS: usize = 6;

/// Best possible suggestion score: an exact name match.
pub const MAX_SCORE: u32 = 1000;

/// Which field produced a suggestion's score.
///
/// Presentation uses this for highlighting — a scientific-name match renders
/// italicized, a tag match shows the tag chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchedField {
    Name,
    ScientificName,
    Category,
    Tag,
    Description,
}

/// One ranked search result.
#[derive(Debug, Clone)]
pub struct Suggestion {
    pub plant: Plant,
    /// Weighted match score in `0..=1000` (tier score × field weight in tenths).
    pub score: u32,
    pub matched_field: MatchedField,
}

impl Suggestion {
    /// Score as a 0–100 percentage of a perfect name match.
    pub const fn relevance(&self) -> u32 {
        self.score * 100 / MAX_SCORE
    }
}

/// Ranks `plants` against `query` and returns the top matches in priority
/// order.
///
/// A record's total score is the **maximum** of its weighted field scores,
/// never a sum: the single best-matching field determines rank. Records with
/// no match in any field are dropped, ties keep catalog order, and the list
/// is cut to [`MAX_SUGGESTIONS`]. A blank query or empty catalog yields an
/// empty list — there is no browse-all fallback.
pub fn rank(plants: &[Plant], query: &str) -> Vec<Suggestion> {
    let query = query.trim();
    if query.is_empty() || plants.is_empty() {
        return Vec::new();
    }

    let mut suggestions: Vec<Suggestion> = plants
        .iter()
        .filter_map(|plant| score_plant(plant, query))
        .collect();

    // Stable sort: equal scores retain catalog order, no secondary key.
    suggestions.sort_by(|a, b| b.score.cmp(&a.score));
    suggestions.truncate(MAX_SUGGESTIONS);

    tracing::debug!(query, results = suggestions.len(), "ranked catalog query");
    suggestions
}

/// Scores one record, or `None` when nothing matched.
fn score_plant(plant: &Plant, query: &str) -> Option<Suggestion> {
    // The record's tag contribution is its best tag, not their sum.
    let tag_score = plant
        .tags
        .iter()
        .map(|tag| weighted(Some(tag), query, WEIGHT_TAG))
        .max()
        .unwrap_or(0);

    // Declaration order doubles as the tie-break: the first field reaching
    // the maximum is the one reported as matched.
    let fields = [
        (
            MatchedField::Name,
            weighted(Some(&plant.name), query, WEIGHT_NAME),
        ),
        (
            MatchedField::ScientificName,
            weighted(plant.scientific_name.as_deref(), query, WEIGHT_SCIENTIFIC_NAME),
        ),
        (
            MatchedField::Category,
            weighted(plant.category.as_deref(), query, WEIGHT_CATEGORY),
        ),
        (MatchedField::Tag, tag_score),
        (
            MatchedField::Description,
            weighted(plant.description.as_deref(), query, WEIGHT_DESCRIPTION),
        ),
    ];

    let mut matched_field = MatchedField::Description;
    let mut score = 0;
    for (field, field_score) in fields {
        if field_score > score {
            matched_field = field;
            score = field_score;
        }
    }

    if score == 0 {
        return None;
    }

    Some(Suggestion {
        plant: plant.clone(),
        score,
        matched_field,
    })
}
