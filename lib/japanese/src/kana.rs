//! Character-class tests and hiragana/katakana folding.
//!
//! Range boundaries follow the standard Unicode blocks (Hiragana `U+3040..=U+309F`,
//! Katakana `U+30A0..=U+30FF`, CJK Unified Ideographs `U+4E00..=U+9FFF` plus the
//! Extension-A block), the same boundaries the `udoprog-jpv` kana tables encode
//! as lookup arrays rather than range checks.

const HIRAGANA_START: u32 = 0x3040;
const HIRAGANA_END: u32 = 0x309F;
const KATAKANA_START: u32 = 0x30A0;
const KATAKANA_END: u32 = 0x30FF;
const KATAKANA_HIRAGANA_FOLD_OFFSET: u32 = 0x60;
const CJK_UNIFIED_START: u32 = 0x4E00;
const CJK_UNIFIED_END: u32 = 0x9FFF;
const CJK_EXT_A_START: u32 = 0x3400;
const CJK_EXT_A_END: u32 = 0x4DBF;
const CJK_COMPAT_START: u32 = 0xF900;
const CJK_COMPAT_END: u32 = 0xFAFF;

/// The long-vowel mark `ー`, valid after any kana but not itself kana.
pub const CHOON: char = 'ー';
/// The small tsu used to mark gemination (doubled consonants).
pub const SOKUON_HIRAGANA: char = 'っ';
pub const SOKUON_KATAKANA: char = 'ッ';

#[inline]
pub fn is_hiragana(c: char) -> bool {
    let cp = c as u32;
    (HIRAGANA_START..=HIRAGANA_END).contains(&cp)
}

#[inline]
pub fn is_katakana(c: char) -> bool {
    let cp = c as u32;
    (KATAKANA_START..=KATAKANA_END).contains(&cp)
}

#[inline]
pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

#[inline]
pub fn is_kanji(c: char) -> bool {
    let cp = c as u32;
    (CJK_UNIFIED_START..=CJK_UNIFIED_END).contains(&cp)
        || (CJK_EXT_A_START..=CJK_EXT_A_END).contains(&cp)
        || (CJK_COMPAT_START..=CJK_COMPAT_END).contains(&cp)
}

/// Fold a single katakana character to its hiragana counterpart. Characters
/// outside the katakana block (including the long-vowel mark `ー`, which has
/// no hiragana equivalent) pass through unchanged.
#[inline]
pub fn fold_katakana_char_to_hiragana(c: char) -> char {
    if !is_katakana(c) || c == CHOON {
        return c;
    }
    let cp = c as u32 - KATAKANA_HIRAGANA_FOLD_OFFSET;
    char::from_u32(cp).unwrap_or(c)
}

/// Fold every katakana character in `s` to hiragana; non-katakana characters
/// (ascii, kanji, punctuation, the long-vowel mark) are copied through as-is.
pub fn fold_katakana_to_hiragana(s: &str) -> String {
    s.chars().map(fold_katakana_char_to_hiragana).collect()
}

/// Fold a single hiragana character to its katakana counterpart.
#[inline]
pub fn fold_hiragana_char_to_katakana(c: char) -> char {
    if !is_hiragana(c) {
        return c;
    }
    let cp = c as u32 + KATAKANA_HIRAGANA_FOLD_OFFSET;
    char::from_u32(cp).unwrap_or(c)
}

pub fn fold_hiragana_to_katakana(s: &str) -> String {
    s.chars().map(fold_hiragana_char_to_katakana).collect()
}
