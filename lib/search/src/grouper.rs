use std::collections::HashSet;

use types::{Entry, Example, Group, GroupKind, MatchType, ScoringContext, ScoredEntry};

/// §4.5: collapse writing variants that share a reading into display groups,
/// deciding surface form and group kind. `query_reading` is the normalized
/// (hiragana) query key used to compute the kanji "anchor" set.
pub fn group(ranked: Vec<ScoredEntry>, query_reading: &str, ctx: &ScoringContext) -> Vec<Group> {
    let anchor: HashSet<char> = ranked
        .iter()
        .map(|s| &s.entry)
        .filter(|e| e.reading_hiragana == query_reading && e.headword.chars().count() <= 2)
        .flat_map(|e| e.kanji_chars())
        .collect();

    let mut groups: Vec<Group> = Vec::new();
    // Parallel to `groups`: the match type of the entry that created each
    // group, needed by `determine_kind` but not worth storing on `Group`
    // itself (it's a ranking-time concept, not part of the persisted shape).
    let mut primary_match_types: Vec<MatchType> = Vec::new();

    for scored in ranked {
        let entry = scored.entry;
        let kanji: HashSet<char> = entry.kanji_chars().into_iter().collect();

        let target = groups.iter_mut().position(|g| {
            if g.reading_hiragana != entry.reading_hiragana {
                return false;
            }
            if kanji.is_empty() {
                return true;
            }
            if !anchor.is_empty() && kanji.is_disjoint(&anchor) {
                let group_kanji: HashSet<char> = g.members.iter().flat_map(|m| m.kanji_chars()).collect();
                return !group_kanji.is_disjoint(&kanji);
            }
            true
        });

        match target {
            Some(idx) => groups[idx].absorb(entry),
            None => {
                groups.push(Group::new(entry, GroupKind::Other));
                primary_match_types.push(scored.match_type);
            }
        }
    }

    for (group, primary_match_type) in groups.iter_mut().zip(primary_match_types) {
        group.kind = determine_kind(group, primary_match_type, ctx, &anchor);
        apply_kana_first_display(group, ctx);
    }

    groups
}

fn determine_kind(
    group: &Group,
    primary_match_type: MatchType,
    ctx: &ScoringContext,
    anchor: &HashSet<char>,
) -> GroupKind {
    let primary = &group.display_entry;

    if ctx.is_exact_headword(primary) || ctx.is_lemma_match(primary) {
        return GroupKind::BaseWord;
    }
    if group.members.len() > 1 {
        return GroupKind::Variant;
    }

    let is_short_kana_query = matches!(
        ctx.script_type,
        types::ScriptType::Hiragana | types::ScriptType::Katakana
    );
    let shares_anchor_kanji = !anchor.is_empty() && primary.kanji_chars().iter().any(|c| anchor.contains(c));
    let is_common = primary.frequency_rank.map(|r| r <= 2000).unwrap_or(false);

    if is_short_kana_query && primary_match_type == MatchType::Prefix && shares_anchor_kanji && is_common {
        return GroupKind::RelatedCompound;
    }

    GroupKind::Other
}

/// Kana-first display policy (§4.5): for a rare-kanji pure-adverb headword
/// that isn't a very-common or JLPT N5 word, show the kana reading instead
/// of the kanji spelling, demoting the kanji form to `alternateHeadwords`.
/// The stored entry is never mutated — this only changes what `Group`
/// reports as its display headword.
fn apply_kana_first_display(group: &mut Group, ctx: &ScoringContext) {
    let primary = &group.display_entry;
    let is_all_kanji_short = primary.has_kanji() && primary.headword.chars().count() <= 3 && !primary.has_kanji_mixed_with_kana();
    let reading_is_pure_kana = primary.reading_hiragana.chars().all(japanese::is_hiragana);
    let is_pure_adverb = primary.is_pure_adverb();
    let not_n5 = !matches!(primary.jlpt_level, Some(types::JlptLevel::N5));
    let not_very_common = !primary.frequency_rank.map(|r| r <= 1000).unwrap_or(false);

    let _ = ctx; // kept for signature symmetry / future semantic-hint gating

    if is_all_kanji_short && reading_is_pure_kana && is_pure_adverb && not_n5 && not_very_common {
        let kanji_form = group.display_entry.headword.clone();
        let mut kana_display = group.display_entry.clone();
        kana_display.headword = kana_display.reading_hiragana.clone();
        if !group.alternate_headwords.contains(&kanji_form) {
            group.alternate_headwords.push(kanji_form);
        }
        group.display_entry = kana_display;
    }
}

/// "Example text in details" (§4.5): when `entry` is displayed under a group
/// whose kana form differs from its stored headword, replace occurrences of
/// the alternate kanji spellings in its examples with the display headword.
/// Pure string rewrite; never mutates the stored example, only the caller's
/// in-memory projection.
pub fn project_examples_for_display(group: &Group, entry: &Entry) -> Vec<Vec<Example>> {
    entry
        .senses
        .iter()
        .map(|sense| {
            sense
                .examples
                .iter()
                .map(|example| {
                    let mut projected = example.clone();
                    for alt in &group.alternate_headwords {
                        if alt != &group.display_entry.headword {
                            projected.japanese_text =
                                projected.japanese_text.replace(alt.as_str(), &group.display_entry.headword);
                        }
                    }
                    projected
                })
                .collect()
        })
        .collect()
}

impl Entry {
    /// `true` if the headword mixes kanji with kana (not pure-kanji).
    fn has_kanji_mixed_with_kana(&self) -> bool {
        self.has_kanji() && self.headword.chars().any(japanese::is_hiragana)
    }
}
