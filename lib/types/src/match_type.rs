use serde::{Deserialize, Serialize};

/// How closely a candidate matched the normalized query. Total order
/// `Exact < Prefix < Contains`, used both as the tie-break key and as an input to
/// several ranking features (`prefixMatch`, `containsMatch`, `commonPrefix` bucket).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchType {
    Exact,
    Prefix,
    Contains,
}

/// The per-row SQL match priority described in the forward-retrieval SELECT
/// projection (§4.3.1): `0` headword-equals, `1` reading-equals, `2` romaji-equals,
/// `3` headword-starts-with, `4` reading-starts-with, `5` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MatchPriority(pub u8);

impl MatchPriority {
    pub const HEADWORD_EQUALS: MatchPriority = MatchPriority(0);
    pub const READING_EQUALS: MatchPriority = MatchPriority(1);
    pub const ROMAJI_EQUALS: MatchPriority = MatchPriority(2);
    pub const HEADWORD_PREFIX: MatchPriority = MatchPriority(3);
    pub const READING_PREFIX: MatchPriority = MatchPriority(4);
    pub const OTHER: MatchPriority = MatchPriority(5);

    /// Collapses the six-level forward-mode SQL priority (§4.3.1) into the
    /// coarser [`MatchType`] used by the ranker's scoring features.
    pub fn as_match_type(self) -> MatchType {
        match self.0 {
            0..=2 => MatchType::Exact,
            3 | 4 => MatchType::Prefix,
            _ => MatchType::Contains,
        }
    }

    /// Collapses the five-level reverse-mode priority ladder (§4.3.2) into
    /// [`MatchType`]. The ladder has no genuine prefix notion — levels 0-2 are
    /// near-exact-definition matches, 3-4 are word-boundary and substring
    /// containment respectively.
    pub fn as_match_type_reverse(self) -> MatchType {
        match self.0 {
            0..=2 => MatchType::Exact,
            _ => MatchType::Contains,
        }
    }
}
