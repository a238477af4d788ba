use types::ScriptType;

/// Classify a query's dominant script by a single scan over its unicode
/// scalars, per §4.1. Kanji/kana mixing always wins as `Mixed`; pure-kanji
/// input is routed to `JapaneseKanjiShort` or `Kanji` depending on
/// `kanji_short_max_len` so short native vocabulary (本, 人, 行く-stems)
/// isn't mis-dispatched as a Chinese query.
pub fn detect_script(query: &str, kanji_short_max_len: usize) -> ScriptType {
    let mut kanji = 0usize;
    let mut hiragana = 0usize;
    let mut katakana = 0usize;
    let mut ascii_letters = 0usize;

    for c in query.chars() {
        if japanese::is_kanji(c) {
            kanji += 1;
        } else if japanese::is_hiragana(c) {
            hiragana += 1;
        } else if japanese::is_katakana(c) {
            katakana += 1;
        } else if c.is_ascii_alphabetic() {
            ascii_letters += 1;
        }
    }

    let has_kanji = kanji > 0;
    let has_kana = hiragana > 0 || katakana > 0;

    if has_kanji && has_kana {
        return ScriptType::Mixed;
    }
    if has_kanji {
        return if kanji <= kanji_short_max_len {
            ScriptType::JapaneseKanjiShort
        } else {
            ScriptType::Kanji
        };
    }
    if hiragana > 0 && katakana == 0 && ascii_letters == 0 {
        return ScriptType::Hiragana;
    }
    if katakana > 0 && hiragana == 0 && ascii_letters == 0 {
        return ScriptType::Katakana;
    }
    if ascii_letters > 0 && hiragana == 0 && katakana == 0 {
        return ScriptType::Romaji;
    }
    ScriptType::Mixed
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("こんにちは" => ScriptType::Hiragana; "pure hiragana")]
    #[test_case("コンピューター" => ScriptType::Katakana; "pure katakana")]
    #[test_case("konnichiha" => ScriptType::Romaji; "pure romaji")]
    #[test_case("本" => ScriptType::JapaneseKanjiShort; "single kanji")]
    #[test_case("人" => ScriptType::JapaneseKanjiShort; "single kanji person")]
    #[test_case("自由民主主義" => ScriptType::Kanji; "six kanji treated as possible chinese")]
    #[test_case("食べる" => ScriptType::Mixed; "kanji and hiragana mixed")]
    #[test_case("食べル" => ScriptType::Mixed; "kanji and katakana mixed")]
    #[test_case("123" => ScriptType::Mixed; "digits only falls to mixed")]
    #[test_case("" => ScriptType::Mixed; "empty falls to mixed")]
    fn classification(query: &str) -> ScriptType {
        detect_script(query, 3)
    }

    #[test]
    fn kanji_short_max_len_is_configurable() {
        assert_eq!(detect_script("自由民主", 4), ScriptType::JapaneseKanjiShort);
        assert_eq!(detect_script("自由民主", 3), ScriptType::Kanji);
    }
}
