use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use config::Config;
use types::ScriptType;

use crate::detect::detect_script;

/// `base (hint)` with either ASCII or full-width parens, a single non-empty
/// hint, trailing/leading whitespace around the base trimmed (§4.2 step 5).
static PARENTHETICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*?)\s*[(（]([^()（）]+)[)）]\s*$").unwrap());

/// The canonical key and derived hints produced by [`normalize`], threaded
/// into the retriever and then into `ScoringContext`.
#[derive(Debug, Clone)]
pub struct NormalizedQuery {
    pub original: String,
    /// The script of `base_word` (the part before any parenthetical hint).
    pub script_type: ScriptType,
    /// Canonical SQL-ready key: hiragana for kana/romaji-converted input,
    /// lowercased English for reverse-mode input. Already sanitized of `"`,
    /// `*`, `:`.
    pub sanitized_key: String,
    pub semantic_hint: Option<String>,
    pub core_headwords: Option<HashSet<String>>,
}

/// Escape `%`, `_` and the escape character itself for safe embedding inside
/// a `LIKE` pattern built by string concatenation (§4.2 step 2).
pub fn escape_for_like(s: &str, escape_char: char) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == escape_char || c == '%' || c == '_' {
            out.push(escape_char);
        }
        out.push(c);
    }
    out
}

fn strip_fts_special_chars(s: &str) -> String {
    s.chars().filter(|&c| c != '"' && c != '*' && c != ':').collect()
}

fn extract_parenthetical(trimmed: &str) -> (String, Option<String>) {
    match PARENTHETICAL.captures(trimmed) {
        Some(caps) => {
            let base = caps.get(1).map(|m| m.as_str().trim()).unwrap_or(trimmed);
            let hint = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");
            if base.is_empty() || hint.is_empty() {
                (trimmed.to_string(), None)
            } else {
                (base.to_string(), Some(hint.to_lowercase()))
            }
        }
        None => (trimmed.to_string(), None),
    }
}

/// Produce the canonical search key for `raw_query`. Pure and infallible by
/// construction: unrecognized input falls back to the trimmed, lowercased
/// form unchanged (§4.2 "Contract").
pub fn normalize(raw_query: &str, config: &Config) -> NormalizedQuery {
    let capped: String = raw_query
        .trim()
        .chars()
        .take(config.limits.query_length_cap)
        .collect();

    let (base_word, semantic_hint) = extract_parenthetical(&capped);

    let script_type = detect_script(&base_word, config.limits.kanji_short_max_len);

    let converted = match script_type {
        ScriptType::Katakana => japanese::fold_katakana_to_hiragana(&base_word),
        ScriptType::Romaji => japanese::romaji::romaji_to_hiragana(&base_word),
        _ => base_word.clone(),
    };

    let sanitized_key = strip_fts_special_chars(&converted);

    let lowercase_base = base_word.to_lowercase();
    let core_headwords = config.tokens.core_headwords_for(&lowercase_base);

    NormalizedQuery {
        original: raw_query.to_string(),
        script_type,
        sanitized_key,
        semantic_hint,
        core_headwords,
    }
}

impl NormalizedQuery {
    /// §4.3 mode-selection rule: romaji input routes to reverse mode only
    /// when it resolves to a known English lemma (allowlist or core-headword
    /// map entry) and isn't itself a Japanese particle romanization.
    pub fn should_use_reverse_search(&self, config: &Config) -> bool {
        match self.script_type {
            ScriptType::Kanji => true,
            ScriptType::Romaji => {
                let lowered = self.original.to_lowercase();
                let lowered = lowered.trim();
                if config.tokens.is_particle(lowered) {
                    return false;
                }
                config.tokens.is_allowlisted_english(lowered) || self.core_headwords.is_some()
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config::load_default().unwrap()
    }

    #[test]
    fn katakana_folds_to_hiragana_key() {
        let config = test_config();
        let normalized = normalize("コンピューター", &config);
        assert_eq!(normalized.sanitized_key, "こんぴゅーたー");
        assert_eq!(normalized.script_type, ScriptType::Katakana);
    }

    #[test]
    fn romaji_converts_to_hiragana_key() {
        let config = test_config();
        let normalized = normalize("sushi", &config);
        assert_eq!(normalized.sanitized_key, "すし");
    }

    #[test]
    fn parenthetical_hint_extracted() {
        let config = test_config();
        let normalized = normalize("bank (finance)", &config);
        assert_eq!(normalized.semantic_hint.as_deref(), Some("finance"));
    }

    #[test]
    fn chinese_parenthetical_hint_extracted_untranslated() {
        let config = test_config();
        let normalized = normalize("吃饭 (请客)", &config);
        assert_eq!(normalized.semantic_hint.as_deref(), Some("请客"));
        assert!(config.tokens.semantic_keywords_for("请客").is_some());
    }

    #[test]
    fn core_headwords_attached_for_curated_english() {
        let config = test_config();
        let normalized = normalize("star", &config);
        assert!(normalized.core_headwords.is_some());
        assert!(normalized.should_use_reverse_search(&config));
    }

    #[test]
    fn particle_romaji_does_not_force_reverse_search() {
        let config = test_config();
        let normalized = normalize("wa", &config);
        assert!(!normalized.should_use_reverse_search(&config));
    }

    #[test]
    fn fts_special_chars_are_stripped() {
        let config = test_config();
        let normalized = normalize("食\"べ*る:", &config);
        assert!(!normalized.sanitized_key.contains(['"', '*', ':']));
    }

    #[test]
    fn escaping_protects_like_wildcards() {
        assert_eq!(escape_for_like("100%_off", '\\'), "100\\%\\_off");
    }
}
