use serde::{Deserialize, Serialize};

/// Coarse part-of-speech bucket used by `posPriority` and by the grouper's
/// "pure adverb" kana-first display check. The persisted schema stores
/// `part_of_speech` as a human-readable label (§6.2); this is derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PartOfSpeech {
    Verb,
    Adjective,
    Noun,
    Adverb,
    Particle,
    AuxiliaryOrConjunction,
    PrefixOrSuffix,
    Other,
}

impl PartOfSpeech {
    /// `posPriority` feature table, §4.4.2.
    #[inline]
    pub fn priority_points(self) -> f64 {
        match self {
            PartOfSpeech::Verb => 8.0,
            PartOfSpeech::Adjective => 7.0,
            PartOfSpeech::Noun => 5.0,
            PartOfSpeech::Adverb => 4.0,
            PartOfSpeech::Particle => 2.0,
            PartOfSpeech::AuxiliaryOrConjunction => 1.0,
            PartOfSpeech::PrefixOrSuffix => 0.5,
            PartOfSpeech::Other => 0.0,
        }
    }

    /// Best-effort classification of a free-text `part_of_speech` label as stored
    /// in `word_senses`. Unrecognized labels fall back to `Other`.
    pub fn classify(label: &str) -> PartOfSpeech {
        let l = label.to_lowercase();
        if l.contains("verb") {
            PartOfSpeech::Verb
        } else if l.contains("adjective") {
            PartOfSpeech::Adjective
        } else if l.contains("adverb") {
            PartOfSpeech::Adverb
        } else if l.contains("noun") {
            PartOfSpeech::Noun
        } else if l.contains("particle") {
            PartOfSpeech::Particle
        } else if l.contains("auxiliary") || l.contains("conjunction") {
            PartOfSpeech::AuxiliaryOrConjunction
        } else if l.contains("prefix") || l.contains("suffix") {
            PartOfSpeech::PrefixOrSuffix
        } else {
            PartOfSpeech::Other
        }
    }
}
