use config::{Config, HardRuleTag};
use types::{Entry, MatchPriority, ScoringContext, SearchMode};

/// §4.4.1: assign a candidate to exactly one hard-rule bucket. Buckets fully
/// partition the result and their order is fixed — disabling a bucket in
/// configuration only removes its special treatment, falling its candidates
/// through to `General`, never reordering the remaining buckets.
///
/// The bucket-5 (specialized/archaic/rare) check runs *before* bucket 2
/// (lemma match) so a rare, JLPT-less homophone of a common word is demoted
/// rather than riding bucket 2's coattails — this is what keeps a JLPT N5
/// lemma match from being out-ranked by a frequency-tied rare-kanji homophone.
///
/// The common-prefix bucket only applies in forward mode: forward's
/// `match_priority` values 3/4 genuinely mean "headword/reading starts with
/// the query", but reverse mode reuses the same 0-4 range for an unrelated
/// ladder (3 is a phrase-boundary hit, 4 a bare substring hit) — letting
/// those trigger this bucket would rank a weak reverse substring match above
/// solid `General`-bucket candidates.
pub fn assign_bucket(
    entry: &Entry,
    match_priority: MatchPriority,
    ctx: &ScoringContext,
    mode: SearchMode,
    has_penalty: bool,
    config: &Config,
) -> HardRuleTag {
    let enabled = |tag: HardRuleTag| config.rules.enabled.contains(&tag);

    if enabled(HardRuleTag::ExactMatch) && ctx.is_exact_headword(entry) {
        return HardRuleTag::ExactMatch;
    }

    if enabled(HardRuleTag::SpecializedArchaicRare) && is_specialized_archaic_rare(entry, ctx, has_penalty) {
        return HardRuleTag::SpecializedArchaicRare;
    }

    if enabled(HardRuleTag::LemmaMatch) && ctx.is_lemma_match(entry) {
        return HardRuleTag::LemmaMatch;
    }

    if enabled(HardRuleTag::CommonPrefix)
        && mode == SearchMode::Forward
        && matches!(match_priority.0, 3 | 4)
        && !has_penalty
    {
        return HardRuleTag::CommonPrefix;
    }

    HardRuleTag::General
}

fn is_specialized_archaic_rare(entry: &Entry, ctx: &ScoringContext, has_penalty: bool) -> bool {
    if has_penalty {
        return true;
    }
    let multi_char_uncommon_lemma = entry.headword.chars().count() > 1
        && entry.jlpt_level.is_none()
        && entry.frequency_rank.map(|r| r > 10_000).unwrap_or(true);
    ctx.is_lemma_match(entry) && multi_char_uncommon_lemma
}
