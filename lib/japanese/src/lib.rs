pub mod kana;
pub mod romaji;

pub use kana::{fold_katakana_to_hiragana, is_hiragana, is_kanji, is_katakana};

/// Extension trait for classifying individual `char`s, mirroring the teacher
/// corpus's `JapaneseExt`-style helpers (`lib/resources/src/models/words/mod.rs`
/// calls `self.reading.kana.reading.is_katakana()`).
pub trait JapaneseExt {
    fn is_kanji(&self) -> bool;
    fn is_hiragana(&self) -> bool;
    fn is_katakana(&self) -> bool;
    fn is_roman_letter(&self) -> bool;
}

impl JapaneseExt for char {
    #[inline]
    fn is_kanji(&self) -> bool {
        kana::is_kanji(*self)
    }

    #[inline]
    fn is_hiragana(&self) -> bool {
        kana::is_hiragana(*self)
    }

    #[inline]
    fn is_katakana(&self) -> bool {
        kana::is_katakana(*self)
    }

    #[inline]
    fn is_roman_letter(&self) -> bool {
        self.is_ascii_alphabetic()
    }
}

impl JapaneseExt for str {
    #[inline]
    fn is_kanji(&self) -> bool {
        !self.is_empty() && self.chars().all(|c| c.is_kanji())
    }

    #[inline]
    fn is_hiragana(&self) -> bool {
        !self.is_empty() && self.chars().all(|c| c.is_hiragana())
    }

    #[inline]
    fn is_katakana(&self) -> bool {
        !self.is_empty() && self.chars().all(|c| c.is_katakana())
    }

    #[inline]
    fn is_roman_letter(&self) -> bool {
        !self.is_empty() && self.chars().all(|c| c.is_roman_letter())
    }
}
