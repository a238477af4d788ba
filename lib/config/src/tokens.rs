use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// The curated data bundled with the core (§6.3). All fields are loaded
/// verbatim from the embedded default JSON asset (or an operator-supplied
/// override) — there is no hardcoded fallback because these lists are
/// corpus-specific curation, not derivable defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenConfig {
    /// Romaji English headwords that route to reverse search even though the
    /// script detector alone can't distinguish them from an unmatched
    /// Japanese romanization (go, do, eat, run, …).
    pub english_allowlist: HashSet<String>,
    /// Romaji strings that are never themselves routed to reverse search
    /// because they're common Japanese particles (wa, ga, ni, …), even though
    /// they also happen to look like short English words.
    pub particle_denylist: HashSet<String>,
    /// English headword -> canonical native-Japanese equivalents, feeding
    /// `ScoringContext::core_headwords` and the `nativeEquivalentBoost` feature.
    pub core_headword_map: HashMap<String, Vec<String>>,
    /// Semantic-hint keyword -> `LIKE` keyword patterns, feeding `semanticBoost`.
    pub semantic_hint_keywords: HashMap<String, Vec<String>>,
    /// Chinese parenthetical hint (请客, 吃饭, …) -> the English keyword family
    /// in `semantic_hint_keywords` it belongs to, so a Chinese-hinted query
    /// boosts the same way an English-hinted one does.
    pub chinese_hint_translations: HashMap<String, String>,
    /// Non-jōyō kanji characters dense enough in obscure vocabulary to
    /// penalize a hiragana-query match containing them (`rareKanjiPenalty`).
    pub rare_kanji: HashSet<char>,
    /// Tag words (English and Japanese) marking a sense archaic/obsolete.
    pub archaic_tags: Vec<String>,
    /// Tag words marking a sense vulgar/slang/crude.
    pub vulgar_tags: Vec<String>,
    /// Tag words marking a sense as belonging to a specialized domain
    /// (medicine, law, chemistry, computing, …).
    pub domain_tags: Vec<String>,
    /// Tag words marking a sense as a film/song/brand title.
    pub title_tags: Vec<String>,
}

impl TokenConfig {
    pub fn is_particle(&self, romaji: &str) -> bool {
        self.particle_denylist.contains(romaji)
    }

    pub fn is_allowlisted_english(&self, romaji: &str) -> bool {
        self.english_allowlist.contains(romaji)
    }

    pub fn core_headwords_for(&self, english: &str) -> Option<HashSet<String>> {
        self.core_headword_map
            .get(english)
            .map(|v| v.iter().cloned().collect())
    }

    /// Looks the hint up directly first (the English-family keys), then
    /// falls back to translating a Chinese hint to its family before
    /// looking it up again.
    pub fn semantic_keywords_for(&self, hint: &str) -> Option<&[String]> {
        if let Some(patterns) = self.semantic_hint_keywords.get(hint) {
            return Some(patterns.as_slice());
        }
        let family = self.chinese_hint_translations.get(hint)?;
        self.semantic_hint_keywords.get(family).map(|v| v.as_slice())
    }

    pub fn contains_rare_kanji(&self, s: &str) -> bool {
        s.chars().any(|c| self.rare_kanji.contains(&c))
    }
}
