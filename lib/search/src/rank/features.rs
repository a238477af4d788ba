use config::{Config, FeatureConfig, FeatureKind, FrequencyShape};
use types::{Entry, MatchType, PartOfSpeech, ScoringContext, SearchMode};

const COMMON_PATTERN_SUFFIXES: &[(&str, f64)] = &[
    ("する", -2.0),
    ("ている", -3.0),
    ("っぽい", -2.0),
    ("もの", -1.5),
    ("こと", -1.5),
    ("的", -2.0),
    ("化", -2.0),
];

const PHRASAL_MARKERS: &[&str] = &["after all", "if only", "so that", "as if", "in order to"];

const SURFACE_LENGTH_OPTIMAL: usize = 4;
const SURFACE_LENGTH_PENALTY_RATE: f64 = 0.5;
const RARE_WORD_RANK_THRESHOLD: f64 = 10_000.0;
const RARE_WORD_PENALTY_RATE: f64 = 0.0008;

fn clamp(value: f64, feature: &FeatureConfig) -> f64 {
    value.clamp(feature.min_score, feature.max_score)
}

fn frequency_raw(rank: Option<u32>, shape: &FrequencyShape) -> f64 {
    let rank = match rank {
        Some(r) => r as f64,
        None => return 0.0,
    };
    match *shape {
        FrequencyShape::Sigmoid { midpoint } => {
            let x = (rank + 1.0).ln();
            15.0 / (1.0 + (x - midpoint).exp())
        }
        FrequencyShape::Linear { max_rank } => (15.0 * (1.0 - (rank / max_rank).min(1.0))).max(0.0),
        FrequencyShape::Logarithmic => (15.0 - (rank + 1.0).ln() * 2.0).max(0.0),
        FrequencyShape::Stepwise => {
            if rank <= 500.0 {
                15.0
            } else if rank <= 2_000.0 {
                10.0
            } else if rank <= 10_000.0 {
                5.0
            } else {
                0.0
            }
        }
    }
}

fn common_word_raw(rank: Option<u32>) -> f64 {
    match rank {
        Some(r) if r <= 100 => 5.0,
        Some(r) if r <= 500 => 3.0,
        Some(r) if r <= 2_000 => 1.5,
        Some(r) if r <= 5_000 => 0.5,
        _ => 0.0,
    }
}

/// Heuristic entry-type classification from headword shape, used only by
/// `entryType` (§4.4.2). Not persisted; recomputed per scoring pass.
fn entry_type_raw(entry: &Entry) -> f64 {
    let len = entry.headword.chars().count();
    let kanji_count = entry.kanji_chars().len();
    let notes_mention_phrase = entry
        .senses
        .iter()
        .any(|s| s.usage_notes.as_deref().is_some_and(|n| n.to_lowercase().contains("expr")));
    if notes_mention_phrase {
        0.5
    } else if len <= 2 {
        4.0
    } else if kanji_count >= 2 && len <= 4 {
        2.0
    } else {
        1.0
    }
}

fn contains_any_common_pattern(headword: &str) -> Option<f64> {
    COMMON_PATTERN_SUFFIXES
        .iter()
        .find(|(suffix, _)| headword.ends_with(suffix))
        .map(|(_, penalty)| *penalty)
}

fn is_phrasal_definition(definition: &str) -> bool {
    let lower = definition.to_lowercase();
    PHRASAL_MARKERS.iter().any(|m| lower.contains(m))
}

/// Dispatch a single feature's contribution. Returns `weight * clamp(raw)`,
/// or `0.0` if the feature is disabled in configuration (§4.4.4: "missing
/// features contribute 0").
pub fn score_feature(
    kind: FeatureKind,
    entry: &Entry,
    match_type: MatchType,
    ctx: &ScoringContext,
    mode: SearchMode,
    config: &Config,
) -> f64 {
    let feature = match config.feature(kind) {
        Some(f) if f.enabled => f,
        _ => return 0.0,
    };

    let raw = match kind {
        FeatureKind::ExactMatch => {
            if ctx.is_exact_headword(entry) {
                100.0
            } else {
                0.0
            }
        }
        FeatureKind::LemmaMatch => {
            if ctx.is_lemma_match(entry) && !ctx.is_exact_headword(entry) {
                60.0
            } else {
                0.0
            }
        }
        FeatureKind::PrefixMatch => {
            if match_type == MatchType::Prefix {
                30.0
            } else {
                0.0
            }
        }
        FeatureKind::ContainsMatch => {
            if match_type == MatchType::Contains && !ctx.is_lemma_match(entry) {
                10.0
            } else {
                0.0
            }
        }
        FeatureKind::Jlpt => entry.jlpt_level.map(|l| l.feature_points()).unwrap_or(0.0),
        FeatureKind::Frequency => {
            let shape = feature.frequency_shape.unwrap_or_default();
            frequency_raw(entry.frequency_rank, &shape)
        }
        FeatureKind::PosPriority => entry.primary_pos().map(|p| p.priority_points()).unwrap_or(0.0),
        FeatureKind::CommonWord => common_word_raw(entry.frequency_rank),
        FeatureKind::EntryType => entry_type_raw(entry),
        FeatureKind::SurfaceLength => {
            let len = entry.headword.chars().count();
            let over = len.saturating_sub(SURFACE_LENGTH_OPTIMAL) as f64;
            -(SURFACE_LENGTH_PENALTY_RATE * over)
        }
        FeatureKind::CommonPatternPenalty => contains_any_common_pattern(&entry.headword).unwrap_or(0.0),
        FeatureKind::RareWordPenalty => {
            if entry.headword.chars().count() <= 1 {
                0.0
            } else {
                match entry.frequency_rank {
                    None => -2.0,
                    Some(r) if (r as f64) < RARE_WORD_RANK_THRESHOLD => 0.0,
                    Some(r) => -RARE_WORD_PENALTY_RATE * (r as f64 - RARE_WORD_RANK_THRESHOLD),
                }
            }
        }
        FeatureKind::ArchaicWordPenalty => {
            if entry.senses.iter().any(|s| s.is_archaic(&config.tokens.archaic_tags)) {
                -12.0
            } else {
                0.0
            }
        }
        FeatureKind::SpecializedDomainPenalty => {
            if entry
                .senses
                .iter()
                .any(|s| s.is_specialized_domain(&config.tokens.domain_tags))
            {
                -6.0
            } else {
                0.0
            }
        }
        FeatureKind::VulgarSlangPenalty => {
            if entry.senses.iter().any(|s| s.is_vulgar(&config.tokens.vulgar_tags)) {
                -8.0
            } else {
                0.0
            }
        }
        FeatureKind::PhrasalPenalty => {
            if mode != SearchMode::Reverse {
                0.0
            } else {
                let is_core_word = ctx.core_headwords.is_some();
                let has_phrasal_sense = entry.senses.iter().any(|s| is_phrasal_definition(&s.definition_english));
                if is_core_word && has_phrasal_sense {
                    -15.0
                } else {
                    0.0
                }
            }
        }
        FeatureKind::SemanticBoost => {
            if mode != SearchMode::Reverse {
                0.0
            } else {
                match ctx.semantic_hint.as_deref().and_then(|h| config.tokens.semantic_keywords_for(h)) {
                    Some(patterns) => {
                        let hits = entry
                            .senses
                            .iter()
                            .filter(|s| {
                                let def = s.definition_english.to_lowercase();
                                patterns.iter().any(|p| like_pattern_matches(&def, p))
                            })
                            .count();
                        if hits > 0 {
                            20.0
                        } else {
                            0.0
                        }
                    }
                    None => 0.0,
                }
            }
        }
        FeatureKind::NativeEquivalentBoost => {
            if mode != SearchMode::Reverse {
                0.0
            } else if ctx.is_core_headword(&entry.headword) {
                25.0
            } else {
                0.0
            }
        }
        FeatureKind::KatakanaDemotion => {
            if mode == SearchMode::Reverse && entry.is_katakana_headword() {
                -8.0
            } else {
                0.0
            }
        }
        FeatureKind::RareKanjiPenalty => {
            if mode == SearchMode::Forward
                && ctx.script_type == types::ScriptType::Hiragana
                && config.tokens.contains_rare_kanji(&entry.headword)
            {
                -6.0
            } else {
                0.0
            }
        }
        FeatureKind::TitleTagPenalty => {
            if entry.frequency_rank.is_none() && entry.senses.iter().any(|s| s.is_title(&config.tokens.title_tags)) {
                -5.0
            } else {
                0.0
            }
        }
    };

    feature.weight * clamp(raw, feature)
}

/// Minimal `%`-wildcard `LIKE` pattern matcher for the curated semantic-hint
/// keyword table (patterns like `%someone to%dinner%`): segments separated
/// by `%` must appear in order, anchored to the start/end unless the pattern
/// itself starts/ends with `%`.
fn like_pattern_matches(haystack: &str, pattern: &str) -> bool {
    let anchored_start = !pattern.starts_with('%');
    let anchored_end = !pattern.ends_with('%');
    let segments: Vec<&str> = pattern.split('%').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        return true;
    }

    let mut cursor = 0usize;
    for (i, segment) in segments.iter().enumerate() {
        let remaining = &haystack[cursor..];
        let is_first = i == 0;
        let is_last = i == segments.len() - 1;
        let found = if is_first && anchored_start {
            remaining.starts_with(segment).then_some(0)
        } else {
            remaining.find(segment)
        };
        let Some(pos) = found else { return false };
        let end = cursor + pos + segment.len();
        if is_last && anchored_end && end != haystack.len() {
            return false;
        }
        cursor = end;
    }
    true
}
