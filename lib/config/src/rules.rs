use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// The five hard-rule buckets of §4.4.1, in their fixed, spec-mandated
/// priority order. Configuration can only enable/disable individual buckets
/// (falling a disabled bucket's candidates through to `General`), never
/// reorder them — the ordering itself is an invariant, not a tunable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum HardRuleTag {
    ExactMatch,
    LemmaMatch,
    CommonPrefix,
    General,
    SpecializedArchaicRare,
}

impl HardRuleTag {
    pub const ORDERED: [HardRuleTag; 5] = [
        HardRuleTag::ExactMatch,
        HardRuleTag::LemmaMatch,
        HardRuleTag::CommonPrefix,
        HardRuleTag::General,
        HardRuleTag::SpecializedArchaicRare,
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    pub enabled: Vec<HardRuleTag>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        RuleConfig {
            enabled: HardRuleTag::ORDERED.to_vec(),
        }
    }
}
