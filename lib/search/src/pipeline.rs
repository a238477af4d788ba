use config::Config;
use db::Db;
use error::Error;
use types::{CancellationToken, ScoringContext, SearchResponse};

use crate::normalize::normalize;
use crate::rank::rank;
use crate::retriever::retrieve;
use crate::{grouper, normalize::NormalizedQuery};

/// Run the full search pipeline for one query (§6.1): normalize, retrieve,
/// rank, group. An empty or whitespace-only query yields an empty response
/// without touching the database, per §4.2's contract that inputs never
/// surface as errors.
pub fn search(db: &Db, raw_query: &str, config: &Config, cancel: &CancellationToken) -> Result<SearchResponse, Error> {
    if raw_query.trim().is_empty() {
        return Ok(SearchResponse::empty(types::SearchMode::Forward));
    }

    let normalized = normalize(raw_query, config);
    let outcome = retrieve(db, &normalized, config, cancel)?;
    let total_candidates = outcome.candidates.len();

    let ctx = build_scoring_context(&normalized, outcome.mode);
    let ranked = rank(outcome.candidates, &ctx, outcome.mode, config);
    let groups = grouper::group(ranked, &normalized.sanitized_key, &ctx);

    Ok(SearchResponse {
        groups,
        total_candidates,
        mode: outcome.mode,
        fell_back: outcome.fell_back,
    })
}

fn build_scoring_context(normalized: &NormalizedQuery, mode: types::SearchMode) -> ScoringContext {
    ScoringContext {
        original_query: normalized.original.clone(),
        normalized_query: normalized.sanitized_key.clone(),
        script_type: normalized.script_type,
        use_reverse_search: mode == types::SearchMode::Reverse,
        semantic_hint: normalized.semantic_hint.clone(),
        core_headwords: normalized.core_headwords.clone(),
    }
}
