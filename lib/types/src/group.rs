use serde::{Deserialize, Serialize};

use crate::entry::Entry;

/// How a grouped entry relates to the group's chosen display headword (§4.5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupKind {
    /// The highest-ranked entry in the group; carries the display headword.
    BaseWord,
    /// An alternate kanji/kana spelling of the base word sharing its reading.
    Variant,
    /// A longer compound that shares the reading but is a distinct lexical item
    /// (excluded from the group when kanji anchors are disjoint, per §4.5).
    RelatedCompound,
    Other,
}

/// A set of entries collapsed under one display headword because they share a
/// hiragana reading (and are not excluded by the kanji-anchor-disjoint rule).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    /// The reading shared by every entry in the group.
    pub reading_hiragana: String,
    /// The entry chosen to represent the group in the display headword slot.
    pub display_entry: Entry,
    /// Alternate headwords contributed by the other member entries, in rank order.
    pub alternate_headwords: Vec<String>,
    /// All member entries including `display_entry`, already in rank order.
    pub members: Vec<Entry>,
    pub kind: GroupKind,
}

impl Group {
    pub fn new(display_entry: Entry, kind: GroupKind) -> Self {
        Group {
            reading_hiragana: display_entry.reading_hiragana.clone(),
            members: vec![display_entry.clone()],
            alternate_headwords: Vec::new(),
            display_entry,
            kind,
        }
    }

    /// Fold another entry sharing this group's reading into it as a variant.
    pub fn absorb(&mut self, entry: Entry) {
        if entry.headword != self.display_entry.headword
            && !self.alternate_headwords.contains(&entry.headword)
        {
            self.alternate_headwords.push(entry.headword.clone());
        }
        self.members.push(entry);
    }
}
