use std::collections::HashSet;

use super::*;

/// Records every dispatch it receives and answers with the keyword.
struct Recorder {
    hits: usize,
}

macro_rules! recording_methods {
    ($arg:ty; $($method:ident => $name:literal),+ $(,)?) => {
        $(
            fn $method(&mut self, calls: $arg) -> &'static str {
                self.hits += 1;
                calls.push($name);
                $name
            }
        )+
    };
}

impl<'c> TagVisitor<&'static str, &'c mut Vec<&'static str>> for Recorder {
    recording_methods! {
        &'c mut Vec<&'static str>;
        visit_adjective => "adjective",
        visit_adposition => "adposition",
        visit_adverb => "adverb",
        visit_article => "article",
        visit_bullet => "bullet",
        visit_circumposition => "circumposition",
        visit_colon => "colon",
        visit_comma => "comma",
        visit_conjunction => "conjunction",
        visit_copula => "copula",
        visit_determiner => "determiner",
        visit_interjection => "interjection",
        visit_noun => "noun",
        visit_numeral => "numeral",
        visit_particle => "particle",
        visit_point => "point",
        visit_postposition => "postposition",
        visit_preposition => "preposition",
        visit_pronoun => "pronoun",
        visit_punctuation => "punctuation",
        visit_semicolon => "semicolon",
        visit_slash => "slash",
        visit_verb => "verb",
        visit_any => "any",
    }
}

#[test]
fn all_contains_every_variant() {
    assert_eq!(Tag::COUNT, 24);
    assert_eq!(Tag::ALL.len(), Tag::COUNT);
    let unique: HashSet<Tag> = Tag::ALL.iter().copied().collect();
    assert_eq!(unique.len(), Tag::COUNT);
}

#[test]
fn accept_dispatches_exactly_once_to_matching_method() {
    let mut recorder = Recorder { hits: 0 };
    for &tag in Tag::ALL {
        let mut calls = Vec::new();
        let answer = tag.accept(&mut recorder, &mut calls);
        assert_eq!(answer, tag.name());
        assert_eq!(calls, vec![tag.name()]);
    }
    assert_eq!(recorder.hits, Tag::COUNT);
}

#[test]
fn name_roundtrips_with_from_name() {
    for &tag in Tag::ALL {
        assert_eq!(Tag::from_name(tag.name()), Some(tag));
    }
    assert_eq!(Tag::from_name("Noun"), None);
    assert_eq!(Tag::from_name("gerund"), None);
}

#[test]
fn wildcard_is_only_any() {
    let wildcards: Vec<Tag> = Tag::ALL.iter().copied().filter(|t| t.is_wildcard()).collect();
    assert_eq!(wildcards, vec![Tag::Any]);
}

#[test]
fn punctuation_sub_kinds() {
    assert!(Tag::Comma.is_punctuation());
    assert!(Tag::Point.is_punctuation());
    assert!(Tag::Slash.is_punctuation());
    assert!(Tag::Punctuation.is_punctuation());
    assert!(!Tag::Noun.is_punctuation());
    assert!(!Tag::Any.is_punctuation());
}

#[test]
fn equality_is_identity_by_variant() {
    assert_eq!(Tag::Noun, Tag::Noun);
    assert_ne!(Tag::Noun, Tag::Verb);
    assert_ne!(Tag::Any, Tag::Noun);
}

#[test]
fn display_uses_keyword() {
    assert_eq!(Tag::Circumposition.to_string(), "circumposition");
    assert_eq!(format!("{}", Tag::Semicolon), "semicolon");
}

#[test]
fn codes_are_distinct() {
    let codes: HashSet<u8> = Tag::ALL.iter().map(|t| t.code()).collect();
    assert_eq!(codes.len(), Tag::COUNT);
}
