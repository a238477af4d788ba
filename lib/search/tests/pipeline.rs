mod common;

use config::Config;
use db::Db;
use tempfile::NamedTempFile;
use types::{CancellationToken, GroupKind, SearchMode};

fn fixture_db() -> (NamedTempFile, Db) {
    let file = NamedTempFile::new().expect("create temp file");
    common::build_fixture(file.path());
    let db = Db::open(file.path()).expect("open fixture db read-only");
    (file, db)
}

#[test]
fn scenario_star_ranks_native_headword_over_katakana_and_rare_reading() {
    let (_file, db) = fixture_db();
    let config = Config::load_default().unwrap();
    let cancel = CancellationToken::new();

    let response = search::search(&db, "star", &config, &cancel).unwrap();
    assert_eq!(response.mode, SearchMode::Reverse);
    assert!(!response.groups.is_empty());
    assert_eq!(response.groups[0].display_entry.headword, "星");

    let headwords: Vec<&str> = response
        .groups
        .iter()
        .map(|g| g.display_entry.headword.as_str())
        .collect();
    let star_pos = headwords.iter().position(|h| *h == "星").unwrap();
    let katakana_pos = headwords.iter().position(|h| *h == "スター").unwrap();
    assert!(star_pos < katakana_pos, "katakana loanword must be demoted below 星");
}

#[test]
fn scenario_go_prefers_verb_lemma_over_noun_homophones() {
    let (_file, db) = fixture_db();
    let config = Config::load_default().unwrap();
    let cancel = CancellationToken::new();

    let response = search::search(&db, "go", &config, &cancel).unwrap();
    assert_eq!(response.groups[0].display_entry.headword, "行く");
}

#[test]
fn scenario_hito_demotes_archaic_homophone_below_jlpt_matches() {
    let (_file, db) = fixture_db();
    let config = Config::load_default().unwrap();
    let cancel = CancellationToken::new();

    let response = search::search(&db, "ひと", &config, &cancel).unwrap();
    let headwords: Vec<&str> = response
        .groups
        .iter()
        .map(|g| g.display_entry.headword.as_str())
        .collect();
    let hito_pos = headwords.iter().position(|h| *h == "人").unwrap();
    let bandit_pos = headwords.iter().position(|h| *h == "匪徒").unwrap();
    assert!(
        hito_pos < bandit_pos,
        "archaic rare homophone must rank below the common JLPT N5 word"
    );
}

#[test]
fn scenario_au_splits_disjoint_reading_into_its_own_group() {
    let (_file, db) = fixture_db();
    let config = Config::load_default().unwrap();
    let cancel = CancellationToken::new();

    let response = search::search(&db, "あう", &config, &cancel).unwrap();
    let base_group = response
        .groups
        .iter()
        .find(|g| g.reading_hiragana == "あう")
        .expect("base reading group present");
    assert_eq!(base_group.display_entry.headword, "会う");
    assert!(base_group.alternate_headwords.contains(&"逢う".to_string()));
    assert!(base_group.alternate_headwords.contains(&"遭う".to_string()));
    assert!(base_group.alternate_headwords.contains(&"合う".to_string()));

    let aun_group = response
        .groups
        .iter()
        .find(|g| g.display_entry.headword == "阿吽")
        .expect("阿吽 forms its own group");
    assert_ne!(aun_group.reading_hiragana, base_group.reading_hiragana);
}

#[test]
fn scenario_kitto_kana_first_for_pure_adverb() {
    let (_file, db) = fixture_db();
    let config = Config::load_default().unwrap();
    let cancel = CancellationToken::new();

    let response = search::search(&db, "きっと", &config, &cancel).unwrap();
    let group = &response.groups[0];
    assert_eq!(group.display_entry.headword, "きっと");
    assert!(group.alternate_headwords.contains(&"屹度".to_string()));
}

#[test]
fn scenario_kyou_keeps_kanji_display_for_mixed_pos_entry() {
    let (_file, db) = fixture_db();
    let config = Config::load_default().unwrap();
    let cancel = CancellationToken::new();

    let response = search::search(&db, "きょう", &config, &cancel).unwrap();
    assert_eq!(response.groups[0].display_entry.headword, "今日");
    assert_ne!(response.groups[0].kind, GroupKind::Other);
}

#[test]
fn reverse_mode_respects_english_word_boundary() {
    let (_file, db) = fixture_db();
    let config = Config::load_default().unwrap();
    let cancel = CancellationToken::new();

    let response = search::search(&db, "cat", &config, &cancel).unwrap();
    let headwords: Vec<&str> = response
        .groups
        .iter()
        .map(|g| g.display_entry.headword.as_str())
        .collect();
    assert!(headwords.contains(&"猫"));
    assert!(
        !headwords.contains(&"範疇"),
        "substring hit inside \"category\" must not surface for a whole-word \"cat\" query"
    );
}

#[test]
fn allowlisted_romaji_routes_directly_to_reverse_without_a_forward_attempt() {
    let (_file, db) = fixture_db();
    let config = Config::load_default().unwrap();
    let cancel = CancellationToken::new();

    // "eat" is in the curated English allowlist, so `should_use_reverse_search`
    // already routes it straight to reverse mode — this exercises the gate
    // used by the fallback path (allowlisted-or-core-headword Romaji), not the
    // fallback branch itself, since an allowlisted query never touches forward.
    let response = search::search(&db, "eat", &config, &cancel).unwrap();
    assert_eq!(response.mode, SearchMode::Reverse);
    assert!(!response.fell_back);
}

#[test]
fn forward_miss_on_non_allowlisted_romaji_does_not_spuriously_fall_back() {
    let (_file, db) = fixture_db();
    let config = Config::load_default().unwrap();
    let cancel = CancellationToken::new();

    // Not in the allowlist and not a core headword: forward mode is attempted
    // (converted to hiragana), finds nothing, and must stay in forward mode
    // rather than re-running in reverse against an implausible guess.
    let response = search::search(&db, "xyzzyplugh", &config, &cancel).unwrap();
    assert!(response.groups.is_empty());
    assert_eq!(response.mode, SearchMode::Forward);
    assert!(!response.fell_back);
}

#[test]
fn forward_miss_on_native_script_never_falls_back_to_reverse() {
    let (_file, db) = fixture_db();
    let config = Config::load_default().unwrap();
    let cancel = CancellationToken::new();

    // A made-up hiragana string has zero forward hits but is not remotely
    // plausible as an English/Chinese reverse-mode query; it must not trigger
    // the fallback just because the corpus happened to miss it.
    let response = search::search(&db, "ぬぽぴゐゑ", &config, &cancel).unwrap();
    assert!(response.groups.is_empty());
    assert_eq!(response.mode, SearchMode::Forward);
    assert!(!response.fell_back);
}

#[test]
fn empty_and_whitespace_queries_return_empty_without_touching_the_database() {
    let (_file, db) = fixture_db();
    let config = Config::load_default().unwrap();
    let cancel = CancellationToken::new();

    assert!(search::search(&db, "", &config, &cancel).unwrap().groups.is_empty());
    assert!(search::search(&db, "   ", &config, &cancel).unwrap().groups.is_empty());
}

#[test]
fn determinism_same_query_yields_identical_results() {
    let (_file, db) = fixture_db();
    let config = Config::load_default().unwrap();

    let a = search::search(&db, "ひと", &config, &CancellationToken::new()).unwrap();
    let b = search::search(&db, "ひと", &config, &CancellationToken::new()).unwrap();

    let headwords = |r: &types::SearchResponse| -> Vec<String> {
        r.groups.iter().map(|g| g.display_entry.headword.clone()).collect()
    };
    assert_eq!(headwords(&a), headwords(&b));
}

#[test]
fn cancelled_query_returns_no_partial_results() {
    let (_file, db) = fixture_db();
    let config = Config::load_default().unwrap();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = search::search(&db, "ひと", &config, &cancel);
    assert!(result.is_err());
}
