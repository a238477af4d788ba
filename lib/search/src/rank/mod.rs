mod bucket;
mod features;

use config::{Config, FeatureKind, HardRuleTag};
use db::Candidate;
use types::{ScoreBreakdown, ScoredEntry, ScoringContext, SearchMode};

fn has_penalty_tags(entry: &types::Entry, config: &Config) -> bool {
    entry.senses.iter().any(|s| {
        s.is_archaic(&config.tokens.archaic_tags)
            || s.is_vulgar(&config.tokens.vulgar_tags)
            || s.is_specialized_domain(&config.tokens.domain_tags)
    })
}

fn build_breakdown(
    entry: &types::Entry,
    match_type: types::MatchType,
    ctx: &ScoringContext,
    mode: SearchMode,
    config: &Config,
) -> ScoreBreakdown {
    let f = |kind: FeatureKind| features::score_feature(kind, entry, match_type, ctx, mode, config);
    ScoreBreakdown {
        exact_match: f(FeatureKind::ExactMatch),
        lemma_match: f(FeatureKind::LemmaMatch),
        prefix_match: f(FeatureKind::PrefixMatch),
        contains_match: f(FeatureKind::ContainsMatch),
        jlpt: f(FeatureKind::Jlpt),
        frequency: f(FeatureKind::Frequency),
        pos_priority: f(FeatureKind::PosPriority),
        common_word: f(FeatureKind::CommonWord),
        entry_type: f(FeatureKind::EntryType),
        surface_length: f(FeatureKind::SurfaceLength),
        common_pattern_penalty: f(FeatureKind::CommonPatternPenalty),
        rare_word_penalty: f(FeatureKind::RareWordPenalty),
        archaic_word_penalty: f(FeatureKind::ArchaicWordPenalty),
        specialized_domain_penalty: f(FeatureKind::SpecializedDomainPenalty),
        vulgar_slang_penalty: f(FeatureKind::VulgarSlangPenalty),
        phrasal_penalty: f(FeatureKind::PhrasalPenalty),
        semantic_boost: f(FeatureKind::SemanticBoost),
        native_equivalent_boost: f(FeatureKind::NativeEquivalentBoost),
        katakana_demotion: f(FeatureKind::KatakanaDemotion),
        rare_kanji_penalty: f(FeatureKind::RareKanjiPenalty),
        title_tag_penalty: f(FeatureKind::TitleTagPenalty),
    }
}

fn bucket_rank(tag: HardRuleTag) -> usize {
    HardRuleTag::ORDERED.iter().position(|&t| t == tag).unwrap_or(usize::MAX)
}

/// Run the two-layer ranker (§4.4) over a candidate list: hard-rule bucket
/// assignment, then a weighted-sum score within each bucket, then the
/// deterministic tie-break chain (§4.4.3). The ranker cannot fail — a
/// disabled or missing feature simply contributes `0` (§4.4.4).
pub fn rank(candidates: Vec<Candidate>, ctx: &ScoringContext, mode: SearchMode, config: &Config) -> Vec<ScoredEntry> {
    let mut scored: Vec<(HardRuleTag, ScoredEntry)> = candidates
        .into_iter()
        .map(|candidate| {
            let match_type = match mode {
                SearchMode::Forward => candidate.match_priority.as_match_type(),
                SearchMode::Reverse => candidate.match_priority.as_match_type_reverse(),
            };
            let has_penalty = has_penalty_tags(&candidate.entry, config);
            let tag = bucket::assign_bucket(&candidate.entry, candidate.match_priority, ctx, mode, has_penalty, config);
            let breakdown = build_breakdown(&candidate.entry, match_type, ctx, mode, config);
            (tag, ScoredEntry::new(candidate.entry, match_type, breakdown))
        })
        .collect();

    scored.sort_by(|(tag_a, a), (tag_b, b)| {
        bucket_rank(*tag_a)
            .cmp(&bucket_rank(*tag_b))
            .then(b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal))
            .then_with(|| {
                let rank_a = a.entry.frequency_rank.unwrap_or(u32::MAX);
                let rank_b = b.entry.frequency_rank.unwrap_or(u32::MAX);
                rank_a.cmp(&rank_b)
            })
            .then_with(|| a.entry.created_at.cmp(&b.entry.created_at))
            .then_with(|| a.entry.id.cmp(&b.entry.id))
    });

    scored.into_iter().map(|(_, scored)| scored).collect()
}
