use config::Config;
use db::{Candidate, Db};
use error::Error;
use types::{CancellationToken, SearchMode};

use crate::normalize::NormalizedQuery;

/// The candidates found plus which mode actually produced them, and whether
/// that mode was reached by falling back from the other one (§4.3).
pub struct RetrievalOutcome {
    pub candidates: Vec<Candidate>,
    pub mode: SearchMode,
    pub fell_back: bool,
}

/// Dispatch forward or reverse retrieval per `should_use_reverse_search`, with
/// the single fallback §4.3 allows: a forward search with no hits retries in
/// reverse mode once, never the other direction, and never more than once.
pub fn retrieve(
    db: &Db,
    normalized: &NormalizedQuery,
    config: &Config,
    cancel: &CancellationToken,
) -> Result<RetrievalOutcome, Error> {
    let limit = config.limits.default_result_cap;

    if normalized.should_use_reverse_search(config) {
        let candidates = search_reverse(db, normalized, limit, cancel, config)?;
        return Ok(RetrievalOutcome {
            candidates,
            mode: SearchMode::Reverse,
            fell_back: false,
        });
    }

    let forward_candidates = db.search_forward(&normalized.sanitized_key, limit, cancel)?;
    if !forward_candidates.is_empty() || !config.limits.reverse_fallback_enabled {
        let candidates = hydrate_senses(db, forward_candidates, cancel)?;
        return Ok(RetrievalOutcome {
            candidates,
            mode: SearchMode::Forward,
            fell_back: false,
        });
    }

    if !forward_fallback_eligible(normalized, config) {
        return Ok(RetrievalOutcome {
            candidates: Vec::new(),
            mode: SearchMode::Forward,
            fell_back: false,
        });
    }

    let fallback_candidates = search_reverse(db, normalized, limit, cancel, config)?;
    Ok(RetrievalOutcome {
        candidates: fallback_candidates,
        mode: SearchMode::Reverse,
        fell_back: true,
    })
}

/// §4.3's fallback only ever fires for a query that could plausibly be
/// English/Chinese to begin with — the same allowlist/particle-denylist/
/// core-headword gate `NormalizedQuery::should_use_reverse_search` applies to
/// its Romaji branch. A hiragana/katakana/kanji query with zero forward hits
/// has nothing reverse mode could legitimately match and must return empty.
fn forward_fallback_eligible(normalized: &NormalizedQuery, config: &Config) -> bool {
    if normalized.script_type != types::ScriptType::Romaji {
        return false;
    }
    let lowered = normalized.original.to_lowercase();
    let lowered = lowered.trim();
    if config.tokens.is_particle(lowered) {
        return false;
    }
    config.tokens.is_allowlisted_english(lowered) || normalized.core_headwords.is_some()
}

/// Forward retrieval leaves every candidate's `entry.senses` empty (§4.3.1
/// loads senses in a second batch); attach them here so the ranker's
/// sense-dependent features (`posPriority`, the penalty features, …) and the
/// grouper's `is_pure_adverb` check see real data. Reverse-mode candidates
/// already carry their (word-boundary-filtered) senses from `search_reverse`
/// and must not be re-hydrated, which would discard that filtering.
fn hydrate_senses(db: &Db, mut candidates: Vec<Candidate>, cancel: &CancellationToken) -> Result<Vec<Candidate>, Error> {
    if candidates.is_empty() {
        return Ok(candidates);
    }
    let ids: Vec<i64> = candidates.iter().map(|c| c.entry.id).collect();
    let mut senses_by_entry = db.load_senses(&ids, cancel)?;
    for candidate in &mut candidates {
        candidate.entry.senses = senses_by_entry.remove(&candidate.entry.id).unwrap_or_default();
    }
    Ok(candidates)
}

fn search_reverse(
    db: &Db,
    normalized: &NormalizedQuery,
    limit: usize,
    cancel: &CancellationToken,
    config: &Config,
) -> Result<Vec<Candidate>, Error> {
    let escape_char = config.limits.like_escape_char;
    let lowercased = crate::normalize::escape_for_like(&normalized.original.to_lowercase(), escape_char);
    let original = crate::normalize::escape_for_like(&normalized.original, escape_char);
    db.search_reverse(&lowercased, &original, limit, cancel)
}
