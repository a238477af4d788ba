use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// One entry per row of the scoring-feature table in §4.4.2. Discriminant
/// names match the feature names used in the specification verbatim so a
/// malformed config's `InvalidConfiguration` message can name the offending
/// feature directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FeatureKind {
    ExactMatch,
    LemmaMatch,
    PrefixMatch,
    ContainsMatch,
    Jlpt,
    Frequency,
    PosPriority,
    CommonWord,
    EntryType,
    SurfaceLength,
    CommonPatternPenalty,
    RareWordPenalty,
    ArchaicWordPenalty,
    SpecializedDomainPenalty,
    VulgarSlangPenalty,
    PhrasalPenalty,
    SemanticBoost,
    NativeEquivalentBoost,
    KatakanaDemotion,
    RareKanjiPenalty,
    TitleTagPenalty,
}

impl FeatureKind {
    /// All 21 features, in the table's declared order.
    pub const ALL: [FeatureKind; 21] = [
        FeatureKind::ExactMatch,
        FeatureKind::LemmaMatch,
        FeatureKind::PrefixMatch,
        FeatureKind::ContainsMatch,
        FeatureKind::Jlpt,
        FeatureKind::Frequency,
        FeatureKind::PosPriority,
        FeatureKind::CommonWord,
        FeatureKind::EntryType,
        FeatureKind::SurfaceLength,
        FeatureKind::CommonPatternPenalty,
        FeatureKind::RareWordPenalty,
        FeatureKind::ArchaicWordPenalty,
        FeatureKind::SpecializedDomainPenalty,
        FeatureKind::VulgarSlangPenalty,
        FeatureKind::PhrasalPenalty,
        FeatureKind::SemanticBoost,
        FeatureKind::NativeEquivalentBoost,
        FeatureKind::KatakanaDemotion,
        FeatureKind::RareKanjiPenalty,
        FeatureKind::TitleTagPenalty,
    ];

    /// `[min, max]` range from the table. Used to validate configured weights
    /// can't produce a contribution wildly outside the documented range.
    pub fn range(self) -> (f64, f64) {
        match self {
            FeatureKind::ExactMatch => (0.0, 100.0),
            FeatureKind::LemmaMatch => (0.0, 60.0),
            FeatureKind::PrefixMatch => (0.0, 30.0),
            FeatureKind::ContainsMatch => (0.0, 10.0),
            FeatureKind::Jlpt => (0.0, 15.0),
            FeatureKind::Frequency => (0.0, 15.0),
            FeatureKind::PosPriority => (0.0, 8.0),
            FeatureKind::CommonWord => (0.0, 5.0),
            FeatureKind::EntryType => (0.0, 4.0),
            FeatureKind::SurfaceLength => (-5.0, 0.0),
            FeatureKind::CommonPatternPenalty => (-10.0, 0.0),
            FeatureKind::RareWordPenalty => (-8.0, 0.0),
            FeatureKind::ArchaicWordPenalty => (-12.0, 0.0),
            FeatureKind::SpecializedDomainPenalty => (-6.0, 0.0),
            FeatureKind::VulgarSlangPenalty => (-8.0, 0.0),
            FeatureKind::PhrasalPenalty => (-15.0, 0.0),
            FeatureKind::SemanticBoost => (0.0, 20.0),
            FeatureKind::NativeEquivalentBoost => (0.0, 25.0),
            FeatureKind::KatakanaDemotion => (-8.0, 0.0),
            FeatureKind::RareKanjiPenalty => (-6.0, 0.0),
            FeatureKind::TitleTagPenalty => (-5.0, 0.0),
        }
    }

    /// Default weight, per the table's "Weight (default)" column.
    pub fn default_weight(self) -> f64 {
        match self {
            FeatureKind::ExactMatch => 1.0,
            FeatureKind::LemmaMatch => 1.0,
            FeatureKind::PrefixMatch => 1.0,
            FeatureKind::ContainsMatch => 1.0,
            FeatureKind::Jlpt => 0.8,
            FeatureKind::Frequency => 1.2,
            FeatureKind::PosPriority => 0.9,
            FeatureKind::CommonWord => 0.7,
            FeatureKind::EntryType => 0.6,
            FeatureKind::SurfaceLength => 0.5,
            FeatureKind::CommonPatternPenalty => 1.0,
            FeatureKind::RareWordPenalty => 0.8,
            FeatureKind::ArchaicWordPenalty => 1.0,
            FeatureKind::SpecializedDomainPenalty => 0.7,
            FeatureKind::VulgarSlangPenalty => 0.9,
            FeatureKind::PhrasalPenalty => 1.0,
            FeatureKind::SemanticBoost => 1.0,
            FeatureKind::NativeEquivalentBoost => 1.0,
            FeatureKind::KatakanaDemotion => 1.0,
            FeatureKind::RareKanjiPenalty => 0.8,
            FeatureKind::TitleTagPenalty => 0.5,
        }
    }
}

/// The frequency feature's smoothing shape (§4.4.2, `frequency` row). Sigmoid
/// is the only shape ever shipped as the default (see the Open Questions
/// resolution); the others exist so an operator can retune the curve for a
/// corpus with a different rank distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "camelCase")]
pub enum FrequencyShape {
    Sigmoid { midpoint: f64 },
    Linear { max_rank: f64 },
    Logarithmic,
    Stepwise,
}

impl Default for FrequencyShape {
    fn default() -> Self {
        FrequencyShape::Sigmoid { midpoint: 5.0 }
    }
}

/// One configured instance of a scoring feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureConfig {
    #[serde(rename = "type")]
    pub kind: FeatureKind,
    pub weight: f64,
    pub min_score: f64,
    pub max_score: f64,
    pub enabled: bool,
    #[serde(default)]
    pub frequency_shape: Option<FrequencyShape>,
}

impl FeatureConfig {
    pub fn defaults() -> Vec<FeatureConfig> {
        FeatureKind::ALL
            .iter()
            .map(|&kind| {
                let (min_score, max_score) = kind.range();
                FeatureConfig {
                    kind,
                    weight: kind.default_weight(),
                    min_score,
                    max_score,
                    enabled: true,
                    frequency_shape: (kind == FeatureKind::Frequency).then(FrequencyShape::default),
                }
            })
            .collect()
    }
}
