use pretty_assertions::assert_eq;

use super::*;
use crate::test_helpers::{the_cat, verb, word, words};
use crate::{Np, Tag};

#[test]
fn telicity_of_unannotated_pattern_is_none() {
    assert_eq!(telicity(&verb("know")), None);
    assert_eq!(
        telicity(&VerbPattern::phrase(words(&[("give", Tag::Verb)]))),
        None
    );
}

#[test]
fn telicity_reports_outermost_modifier() {
    assert_eq!(
        telicity(&VerbPattern::telic_event(verb("arrive"))),
        Some(Telicity::Telic)
    );
    assert_eq!(
        telicity(&VerbPattern::nontelic_event(verb("walk"))),
        Some(Telicity::Nontelic)
    );
    let nested = VerbPattern::dunnotelic_event(VerbPattern::telic_event(verb("arrive")));
    assert_eq!(telicity(&nested), Some(Telicity::Unknown));
}

#[test]
fn telicity_looks_through_fixed_object() {
    let pattern = VerbPattern::with_object(VerbPattern::telic_event(verb("take")), the_cat());
    assert_eq!(telicity(&pattern), Some(Telicity::Telic));
}

#[test]
fn telicity_names() {
    assert_eq!(Telicity::Unknown.to_string(), "dunnotelic");
    assert_eq!(Telicity::Telic.name(), "telic");
    assert_eq!(Telicity::Nontelic.name(), "nontelic");
}

#[test]
fn modifier_depth_counts_nested_modifiers() {
    assert_eq!(modifier_depth(&verb("go")), 0);
    let once = VerbPattern::telic_event(verb("go"));
    assert_eq!(modifier_depth(&once), 1);
    let stacked = VerbPattern::dunnotelic_event(VerbPattern::with_object(
        VerbPattern::nontelic_event(verb("take")),
        Np::lemma(word("care")),
    ));
    assert_eq!(modifier_depth(&stacked), 2);
}

#[test]
fn base_lemma_finds_innermost_head() {
    assert_eq!(base_lemma(&verb("know")), Some("know"));

    let phrase = VerbPattern::phrase(words(&[
        ("to", Tag::Particle),
        ("look", Tag::Verb),
        ("after", Tag::Preposition),
    ]));
    assert_eq!(base_lemma(&phrase), Some("look"));

    let wrapped = VerbPattern::telic_event(VerbPattern::with_object(verb("take"), the_cat()));
    assert_eq!(base_lemma(&wrapped), Some("take"));
}

#[test]
fn base_lemma_of_phrase_without_verb_is_none() {
    let phrase = VerbPattern::phrase(words(&[("up", Tag::Particle)]));
    assert_eq!(base_lemma(&phrase), None);
}

#[test]
fn tagged_words_in_traversal_order() {
    let pattern = VerbPattern::with_object(
        VerbPattern::phrase(words(&[("give", Tag::Verb), ("up", Tag::Particle)])),
        the_cat(),
    );
    let found: Vec<(&str, Tag)> = tagged_words(&pattern)
        .into_iter()
        .map(|w| (w.word().as_str(), w.tag()))
        .collect();
    assert_eq!(
        found,
        vec![
            ("give", Tag::Verb),
            ("up", Tag::Particle),
            ("the", Tag::Article),
            ("cat", Tag::Noun),
        ]
    );
}

#[test]
fn tagged_words_skips_bare_lemmas() {
    let pattern = VerbPattern::with_object(verb("take"), Np::lemma(word("place")));
    assert!(tagged_words(&pattern).is_empty());
}
