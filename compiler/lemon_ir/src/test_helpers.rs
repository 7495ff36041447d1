//! Fixtures and proptest strategies shared by the unit tests.

#![expect(
    clippy::unwrap_used,
    reason = "fixtures are built from literals known to be valid"
)]

use proptest::prelude::*;

use crate::{Np, Tag, TaggedWord, TaggedWords, VerbPattern, Word};

pub(crate) fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

pub(crate) fn words(pairs: &[(&str, Tag)]) -> TaggedWords {
    TaggedWords::parse(pairs.iter().copied()).unwrap()
}

/// `the/article cat/noun`
pub(crate) fn the_cat() -> Np {
    Np::complex(words(&[("the", Tag::Article), ("cat", Tag::Noun)]))
}

pub(crate) fn verb(lemma: &str) -> VerbPattern {
    VerbPattern::lemma(word(lemma))
}

pub(crate) fn arb_word() -> impl Strategy<Value = Word> {
    "[a-z]{1,6}".prop_filter_map("valid token", |s| Word::new(&s).ok())
}

pub(crate) fn arb_tag() -> impl Strategy<Value = Tag> {
    proptest::sample::select(Tag::ALL)
}

pub(crate) fn arb_tagged_words() -> impl Strategy<Value = TaggedWords> {
    proptest::collection::vec(
        (arb_word(), arb_tag()).prop_map(|(w, t)| TaggedWord::new(w, t)),
        0..5,
    )
    .prop_map(TaggedWords::from)
}

pub(crate) fn arb_np() -> impl Strategy<Value = Np> {
    prop_oneof![
        arb_word().prop_map(Np::lemma),
        (arb_word(), arb_tag()).prop_map(|(w, t)| Np::tagged(TaggedWord::new(w, t))),
        arb_tagged_words().prop_map(Np::complex),
    ]
}

pub(crate) fn arb_verb() -> impl Strategy<Value = VerbPattern> {
    let leaf = prop_oneof![
        arb_word().prop_map(VerbPattern::lemma),
        arb_tagged_words().prop_map(VerbPattern::phrase),
    ];
    leaf.prop_recursive(4, 16, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(VerbPattern::telic_event),
            inner.clone().prop_map(VerbPattern::nontelic_event),
            inner.clone().prop_map(VerbPattern::dunnotelic_event),
            (inner, arb_np()).prop_map(|(v, np)| VerbPattern::with_object(v, np)),
        ]
    })
}
