use serde::{Deserialize, Serialize};

/// The script(s) a query is dominantly written in, as classified by the detector.
///
/// Drives which [`crate::search::SearchMode`] the retriever dispatches to: kana and
/// mixed/short-kanji queries go forward against the headword/reading index, while
/// `Kanji` and unmatched `Romaji` are candidates for the reverse, definition-side path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScriptType {
    /// Four or more kanji and nothing else; treated as possible Chinese input.
    Kanji,
    Hiragana,
    Katakana,
    Romaji,
    /// Mixed scripts, or a query containing no recognizable script at all.
    Mixed,
    /// One to three kanji and nothing else. Routed like forward Japanese vocabulary
    /// rather than like `Kanji`, since short pure-kanji strings are overwhelmingly
    /// native Japanese words (本, 人, 行く-stems), not Chinese queries.
    JapaneseKanjiShort,
}

impl ScriptType {
    /// Whether this script should use the forward (headword/reading) retrieval path
    /// by default. `Romaji` is special-cased by the caller against the English-word
    /// allowlist before this default applies.
    #[inline]
    pub fn is_forward_by_default(&self) -> bool {
        matches!(
            self,
            ScriptType::Hiragana | ScriptType::Katakana | ScriptType::Mixed | ScriptType::JapaneseKanjiShort
        )
    }
}
