use serde::{Deserialize, Serialize};

/// Query-shape bounds and behavior toggles (§4.6 "limits").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Limits {
    pub default_result_cap: usize,
    pub query_length_cap: usize,
    pub reverse_fallback_enabled: bool,
    /// Pure-kanji headwords at or below this length classify as
    /// `japaneseKanjiShort` rather than `kanji` (§4.1). Fixed at 3 per the
    /// resolved open question; exposed here only so future corpora with a
    /// different kanji-compounding profile can retune it without a code
    /// change.
    pub kanji_short_max_len: usize,
    /// Escape character used when building `LIKE` patterns on the reverse
    /// path (§4.2 step 2). Default `\`.
    pub like_escape_char: char,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            default_result_cap: 100,
            query_length_cap: 100,
            reverse_fallback_enabled: true,
            kanji_short_max_len: 3,
            like_escape_char: '\\',
        }
    }
}
