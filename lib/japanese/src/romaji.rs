//! Romaji -> hiragana conversion (Hepburn output, Kunrei-shiki input accepted)
//! and the reverse hiragana -> romaji projection used for `reading_romaji`
//! generation and display.
//!
//! Grounded on the lookup-table approach taken by the `udoprog-jpv` kana
//! module (`other_examples/9733e944_udoprog-jpv__crates-jpv-lib-src-kana.rs.rs`),
//! adapted from per-codepoint `Class` arrays to a syllable string table since
//! romaji syllables are variable-width ASCII rather than fixed-width kana.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::kana::{SOKUON_HIRAGANA, is_hiragana};

/// `(romaji syllable, hiragana)` pairs, Hepburn spelling. Longest syllables
/// first within each initial-letter group so the greedy tokenizer in
/// [`romaji_to_hiragana`] prefers `kya` over `ky` + `a`.
#[rustfmt::skip]
static SYLLABLES: &[(&str, &str)] = &[
    ("kya", "きゃ"), ("kyu", "きゅ"), ("kyo", "きょ"),
    ("sha", "しゃ"), ("shu", "しゅ"), ("sho", "しょ"),
    ("cha", "ちゃ"), ("chu", "ちゅ"), ("cho", "ちょ"),
    ("nya", "にゃ"), ("nyu", "にゅ"), ("nyo", "にょ"),
    ("hya", "ひゃ"), ("hyu", "ひゅ"), ("hyo", "ひょ"),
    ("mya", "みゃ"), ("myu", "みゅ"), ("myo", "みょ"),
    ("rya", "りゃ"), ("ryu", "りゅ"), ("ryo", "りょ"),
    ("gya", "ぎゃ"), ("gyu", "ぎゅ"), ("gyo", "ぎょ"),
    ("ja",  "じゃ"), ("ju",  "じゅ"), ("jo",  "じょ"),
    ("bya", "びゃ"), ("byu", "びゅ"), ("byo", "びょ"),
    ("pya", "ぴゃ"), ("pyu", "ぴゅ"), ("pyo", "ぴょ"),
    ("shi", "し"), ("chi", "ち"), ("tsu", "つ"),
    ("fu", "ふ"), ("ji", "じ"), ("zu", "ず"),
    ("ka", "か"), ("ki", "き"), ("ku", "く"), ("ke", "け"), ("ko", "こ"),
    ("ga", "が"), ("gi", "ぎ"), ("gu", "ぐ"), ("ge", "げ"), ("go", "ご"),
    ("sa", "さ"), ("su", "す"), ("se", "せ"), ("so", "そ"),
    ("za", "ざ"), ("ze", "ぜ"), ("zo", "ぞ"),
    ("ta", "た"), ("te", "て"), ("to", "と"),
    ("da", "だ"), ("di", "ぢ"), ("du", "づ"), ("de", "で"), ("do", "ど"),
    ("na", "な"), ("ni", "に"), ("nu", "ぬ"), ("ne", "ね"), ("no", "の"),
    ("ha", "は"), ("hi", "ひ"), ("he", "へ"), ("ho", "ほ"),
    ("ba", "ば"), ("bi", "び"), ("bu", "ぶ"), ("be", "べ"), ("bo", "ぼ"),
    ("pa", "ぱ"), ("pi", "ぴ"), ("pu", "ぷ"), ("pe", "ぺ"), ("po", "ぽ"),
    ("ma", "ま"), ("mi", "み"), ("mu", "む"), ("me", "め"), ("mo", "も"),
    ("ya", "や"), ("yu", "ゆ"), ("yo", "よ"),
    ("ra", "ら"), ("ri", "り"), ("ru", "る"), ("re", "れ"), ("ro", "ろ"),
    ("wa", "わ"), ("wo", "を"),
    ("vu", "ゔ"),
    ("a", "あ"), ("i", "い"), ("u", "う"), ("e", "え"), ("o", "お"),
];

static SYLLABLE_TABLE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| SYLLABLES.iter().copied().collect());

static REVERSE_TABLE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m: HashMap<&'static str, &'static str> = HashMap::new();
    // Insertion order favors the first (Hepburn) spelling on collisions, since
    // `collect` in forward order would let later duplicate keys win instead.
    for (romaji, kana) in SYLLABLES.iter() {
        m.entry(kana).or_insert(romaji);
    }
    m
});

/// Kunrei-shiki (and Nihon-shiki) consonant clusters accepted as aliases of
/// their Hepburn spelling, tried before a straight syllable-table lookup.
#[rustfmt::skip]
static KUNREI_ALIASES: &[(&str, &str)] = &[
    ("sya", "sha"), ("syu", "shu"), ("syo", "sho"),
    ("tya", "cha"), ("tyu", "chu"), ("tyo", "cho"),
    ("zya", "ja"),  ("zyu", "ju"),  ("zyo", "jo"),
    ("si", "shi"), ("ti", "chi"), ("tu", "tsu"),
    ("hu", "fu"), ("zi", "ji"),
];

fn apply_kunrei_alias(remaining: &str) -> Option<(&'static str, usize)> {
    KUNREI_ALIASES
        .iter()
        .filter(|(alias, _)| remaining.starts_with(alias))
        .map(|(alias, hepburn)| (*hepburn, alias.len()))
        .max_by_key(|(_, len)| *len)
}

/// Expand macron long-vowel spellings (`ā ī ū ē ō`) to their digraph
/// equivalent before syllable tokenization. `ō` expands to `ou`, the common
/// long-o spelling in native vocabulary, rather than `oo`.
fn expand_macrons(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            'ā' | 'Ā' => out.push_str("aa"),
            'ī' | 'Ī' => out.push_str("ii"),
            'ū' | 'Ū' => out.push_str("uu"),
            'ē' | 'Ē' => out.push_str("ee"),
            'ō' | 'Ō' => out.push_str("ou"),
            _ => out.push(c),
        }
    }
    out
}

const GEMINATING_CONSONANTS: &str = "kstpgzdbcfj";

/// Convert a romaji string to hiragana, accepting both Hepburn and the
/// Kunrei-shiki/Nihon-shiki aliases in [`KUNREI_ALIASES`]. Unrecognized runs
/// of input (stray punctuation, digits) are copied through unchanged so
/// callers can feed mixed-script query fragments without losing characters.
pub fn romaji_to_hiragana(input: &str) -> String {
    let lower = expand_macrons(&input.to_lowercase());
    let bytes = lower.as_str();
    let mut out = String::with_capacity(bytes.len());
    let mut rest = bytes;

    while !rest.is_empty() {
        // Syllabic n: "nn", or "n" not followed by a vowel or 'y' (not
        // swallowed into a consonant syllable), or "n'" with an explicit
        // mora boundary marker.
        if let Some(after) = rest.strip_prefix("nn") {
            out.push('ん');
            rest = after;
            continue;
        }
        if let Some(after) = rest.strip_prefix("n'") {
            out.push('ん');
            rest = after;
            continue;
        }
        if rest.starts_with('n') {
            let next = rest.as_bytes().get(1).copied();
            let next_is_vowel_or_y = matches!(next, Some(b'a' | b'i' | b'u' | b'e' | b'o' | b'y'));
            if !next_is_vowel_or_y {
                out.push('ん');
                rest = &rest[1..];
                continue;
            }
        }

        // Gemination: a doubled consonant (other than n) marks a following
        // small tsu, e.g. "kekkon" -> "けっこん".
        let first = rest.as_bytes()[0] as char;
        if GEMINATING_CONSONANTS.contains(first)
            && rest.as_bytes().get(1).copied() == Some(first as u8)
        {
            out.push(SOKUON_HIRAGANA);
            rest = &rest[1..];
            continue;
        }

        if let Some((hepburn, alias_len)) = apply_kunrei_alias(rest) {
            if let Some(kana) = SYLLABLE_TABLE.get(hepburn) {
                out.push_str(kana);
                // Advance by the alias's own length, not the Hepburn
                // spelling's — they can differ (e.g. "si" -> "shi").
                rest = &rest[alias_len..];
                continue;
            }
        }

        let mut matched = None;
        for len in (1..=3.min(rest.len())).rev() {
            if !rest.is_char_boundary(len) {
                continue;
            }
            let candidate = &rest[..len];
            if let Some(kana) = SYLLABLE_TABLE.get(candidate) {
                matched = Some((kana, len));
                break;
            }
        }

        match matched {
            Some((kana, len)) => {
                out.push_str(kana);
                rest = &rest[len..];
            }
            None => {
                let ch_len = rest.chars().next().map(|c| c.len_utf8()).unwrap_or(1);
                out.push_str(&rest[..ch_len]);
                rest = &rest[ch_len..];
            }
        }
    }

    out
}

/// Project hiragana back to a romaji reading, used to populate
/// `reading_romaji` and for display fallback. Not a strict inverse of
/// [`romaji_to_hiragana`]: gemination becomes a doubled consonant and `ん`
/// becomes `n`, matching common dictionary romanization.
pub fn hiragana_to_romaji(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 2);
    let chars: Vec<char> = input.chars().collect();
    let mut i = 0;
    let mut pending_sokuon = false;

    while i < chars.len() {
        let c = chars[i];

        if c == SOKUON_HIRAGANA {
            pending_sokuon = true;
            i += 1;
            continue;
        }

        if c == 'ん' {
            out.push('n');
            i += 1;
            continue;
        }

        if !is_hiragana(c) {
            out.push(c);
            i += 1;
            continue;
        }

        // Contracted syllables: small ya/yu/yo following a syllable.
        let mut syllable = c.to_string();
        if let Some(&next) = chars.get(i + 1) {
            if matches!(next, 'ゃ' | 'ゅ' | 'ょ') {
                syllable.push(next);
                i += 1;
            }
        }

        let romaji = REVERSE_TABLE.get(syllable.as_str()).copied().unwrap_or("");
        if romaji.is_empty() {
            out.push_str(&syllable);
        } else if pending_sokuon {
            if let Some(first) = romaji.chars().next() {
                out.push(first);
            }
            out.push_str(romaji);
        } else {
            out.push_str(romaji);
        }
        pending_sokuon = false;
        i += 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("konnichiha" => "こんにちは"; "greeting")]
    #[test_case("sushi" => "すし"; "plain")]
    #[test_case("shashin" => "しゃしん"; "contracted sha")]
    #[test_case("kekkon" => "けっこん"; "gemination kk")]
    #[test_case("zasshi" => "ざっし"; "gemination ss via shi")]
    #[test_case("hon'ya" => "ほんや"; "explicit mora boundary")]
    #[test_case("sensei" => "せんせい"; "n before consonant is syllabic")]
    fn hepburn_roundtrip(input: &str) -> String {
        romaji_to_hiragana(input)
    }

    #[test_case("siro" => "しろ"; "kunrei si")]
    #[test_case("tisai" => "ちさい"; "kunrei ti")]
    #[test_case("tuki" => "つき"; "kunrei tu")]
    #[test_case("huyu" => "ふゆ"; "kunrei hu")]
    #[test_case("zibun" => "じぶん"; "kunrei zi")]
    #[test_case("gakkousyatyou" => "がっこうしゃちょう"; "kunrei sy and ty clusters")]
    fn kunrei_aliases_accepted(input: &str) -> String {
        romaji_to_hiragana(input)
    }

    #[test]
    fn macron_long_vowel_expands() {
        assert_eq!(romaji_to_hiragana("tōkyō"), "とうきょう");
    }

    #[test]
    fn hiragana_to_romaji_basic() {
        assert_eq!(hiragana_to_romaji("ありがとう"), "arigatou");
    }

    #[test]
    fn hiragana_to_romaji_gemination() {
        assert_eq!(hiragana_to_romaji("がっこう"), "gakkou");
    }
}
