//! Client-side catalog search.
//!
//! Three cooperating pieces: field-level tier scoring, the weighted
//! multi-field ranker producing the suggestion list, and the selection state
//! machine driving keyboard/pointer interaction over that list.

mod scoring;
mod selection;
mod suggest;

pub use scoring::{MatchTier, match_tier};
pub use selection::{Key, NavIntent, SuggestBox};
pub use suggest::{MAX_SCORE, MAX_SUGGESTIONS, MatchedField, Suggestion, rank};
