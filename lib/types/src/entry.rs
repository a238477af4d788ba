use serde::{Deserialize, Serialize};

use crate::jlpt::JlptLevel;
use crate::pos::PartOfSpeech;

/// A single lexicon entry, read-only and immutable once loaded from
/// `dictionary_entries` (§6.2). May be kanji, kana, or mixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    pub headword: String,
    pub reading_hiragana: String,
    pub reading_romaji: String,
    pub frequency_rank: Option<u32>,
    pub jlpt_level: Option<JlptLevel>,
    pub pitch_accent: Option<String>,
    pub jmdict_id: Option<i64>,
    pub created_at: i64,
    pub senses: Vec<Sense>,
}

impl Entry {
    /// Return `true` if the headword is written only in katakana — the
    /// loanword shape penalized by `katakanaDemotion`.
    pub fn is_katakana_headword(&self) -> bool {
        !self.headword.is_empty() && self.headword.chars().all(japanese::is_katakana)
    }

    /// Return `true` if the headword contains at least one CJK ideograph.
    pub fn has_kanji(&self) -> bool {
        self.headword.chars().any(japanese::is_kanji)
    }

    /// The distinct kanji characters used in the headword, used by the grouper's
    /// anchor-disjoint check (§4.5).
    pub fn kanji_chars(&self) -> Vec<char> {
        self.headword.chars().filter(|c| japanese::is_kanji(*c)).collect()
    }

    /// The part of speech of the entry's first sense, used by `posPriority` and by
    /// the grouper's "pure adverb" display check.
    pub fn primary_pos(&self) -> Option<PartOfSpeech> {
        self.senses.first().map(|s| s.part_of_speech)
    }

    /// `true` if every sense carries the adverb POS and none carries noun.
    pub fn is_pure_adverb(&self) -> bool {
        !self.senses.is_empty()
            && self.senses.iter().any(|s| s.part_of_speech == PartOfSpeech::Adverb)
            && !self.senses.iter().any(|s| s.part_of_speech == PartOfSpeech::Noun)
    }
}

/// A distinct meaning of an entry. Immutable; `sense_order >= 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sense {
    pub id: i64,
    pub entry_id: i64,
    pub sense_order: u32,
    pub definition_english: String,
    pub definition_chinese_simplified: Option<String>,
    pub definition_chinese_traditional: Option<String>,
    pub part_of_speech: PartOfSpeech,
    pub part_of_speech_label: String,
    pub usage_notes: Option<String>,
    /// Loaded lazily by `fetchEntry` only; empty for ranking-path senses,
    /// which never need examples (§4.3.1).
    #[serde(default)]
    pub examples: Vec<Example>,
}

impl Sense {
    fn tag_matches(&self, tags: &[String]) -> bool {
        let haystack = format!(
            "{} {}",
            self.usage_notes.as_deref().unwrap_or(""),
            self.part_of_speech_label
        )
        .to_lowercase();
        tags.iter().any(|t| haystack.contains(t.as_str()))
    }

    pub fn is_archaic(&self, archaic_tags: &[String]) -> bool {
        self.tag_matches(archaic_tags)
    }

    pub fn is_vulgar(&self, vulgar_tags: &[String]) -> bool {
        self.tag_matches(vulgar_tags)
    }

    pub fn is_specialized_domain(&self, domain_tags: &[String]) -> bool {
        self.tag_matches(domain_tags)
    }

    pub fn is_title(&self, title_tags: &[String]) -> bool {
        self.tag_matches(title_tags)
    }
}

/// An example sentence attached to a sense. Immutable; `example_order >= 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub id: i64,
    pub sense_id: i64,
    pub example_order: u32,
    pub japanese_text: String,
    pub english_translation: String,
    pub chinese_translation: Option<String>,
}
