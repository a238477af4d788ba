use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::entry::Entry;
use crate::match_type::MatchType;
use crate::script::ScriptType;

/// Immutable query-level context threaded from the normalizer through the
/// ranker (§3 "Query-time value types"). One instance is built per search
/// call and shared (by reference) across every candidate entry; the
/// "per-candidate" flags the specification describes (`isExactHeadword`,
/// `isLemmaMatch`) are exposed as methods here rather than stored fields,
/// since they're pure functions of (this context, a given entry) and storing
/// one copy per candidate would just duplicate the same query-level data.
#[derive(Debug, Clone)]
pub struct ScoringContext {
    pub original_query: String,
    pub normalized_query: String,
    pub script_type: ScriptType,
    pub use_reverse_search: bool,
    /// The parenthetical semantic hint extracted from the raw query, if any
    /// (e.g. `"bank (finance)"` -> `Some("finance")`).
    pub semantic_hint: Option<String>,
    /// Canonical headwords the curated English->Japanese table considers
    /// native equivalents of the query, used by `nativeEquivalentBoost`.
    pub core_headwords: Option<HashSet<String>>,
}

impl ScoringContext {
    pub fn has_semantic_hint(&self) -> bool {
        self.semantic_hint.is_some()
    }

    pub fn is_core_headword(&self, headword: &str) -> bool {
        self.core_headwords
            .as_ref()
            .is_some_and(|set| set.contains(headword))
    }

    /// `isExactHeadword` (§3, §4.4.2 `exactMatch`): the normalized query
    /// equals this entry's headword exactly.
    pub fn is_exact_headword(&self, entry: &Entry) -> bool {
        entry.headword == self.normalized_query || entry.headword == self.original_query
    }

    /// `isLemmaMatch` (§3, §4.4.2 `lemmaMatch`): the normalized query equals
    /// this entry's reading exactly.
    pub fn is_lemma_match(&self, entry: &Entry) -> bool {
        entry.reading_hiragana == self.normalized_query
    }
}

/// The named per-feature contributions to a [`ScoredEntry`]'s final score,
/// kept around for debugging and for the deterministic-tie-break audit trail
/// (§4.4).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub exact_match: f64,
    pub lemma_match: f64,
    pub prefix_match: f64,
    pub contains_match: f64,
    pub jlpt: f64,
    pub frequency: f64,
    pub pos_priority: f64,
    pub common_word: f64,
    pub entry_type: f64,
    pub surface_length: f64,
    pub common_pattern_penalty: f64,
    pub rare_word_penalty: f64,
    pub archaic_word_penalty: f64,
    pub specialized_domain_penalty: f64,
    pub vulgar_slang_penalty: f64,
    pub phrasal_penalty: f64,
    pub semantic_boost: f64,
    pub native_equivalent_boost: f64,
    pub katakana_demotion: f64,
    pub rare_kanji_penalty: f64,
    pub title_tag_penalty: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.exact_match
            + self.lemma_match
            + self.prefix_match
            + self.contains_match
            + self.jlpt
            + self.frequency
            + self.pos_priority
            + self.common_word
            + self.entry_type
            + self.surface_length
            + self.common_pattern_penalty
            + self.rare_word_penalty
            + self.archaic_word_penalty
            + self.specialized_domain_penalty
            + self.vulgar_slang_penalty
            + self.phrasal_penalty
            + self.semantic_boost
            + self.native_equivalent_boost
            + self.katakana_demotion
            + self.rare_kanji_penalty
            + self.title_tag_penalty
    }
}

/// An entry after ranking: its detected match type, final relevance score and
/// the per-feature breakdown that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredEntry {
    pub entry: Entry,
    pub match_type: MatchType,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

impl ScoredEntry {
    pub fn new(entry: Entry, match_type: MatchType, breakdown: ScoreBreakdown) -> Self {
        let score = breakdown.total();
        ScoredEntry {
            entry,
            match_type,
            score,
            breakdown,
        }
    }
}
