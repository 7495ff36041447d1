//! Structural fingerprints for pattern trees.
//!
//! Produces `u64` fingerprints that are stable across runs: `FxHasher` has
//! no random seed, unlike the `RandomState` behind `HashMap`. Equal trees
//! always fingerprint equally; distinct trees differ up to hash collisions.
//!
//! # Strategy
//!
//! Depth-first traversal through the visitor protocol. For each node:
//! 1. Hash a fixed variant code, so different variants never share a prefix
//! 2. Hash token text and tag codes
//! 3. Hash sequence lengths before their elements
//! 4. Recurse into child patterns, verb before object

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use crate::{
    ComplexNp, DunnotelicEventVerb, LemmaNp, LemmaVerb, NontelicEventVerb, Np, NpVisitor,
    ObjectVerb, PhraseVerb, TaggedNp, TaggedWord, TaggedWords, TelicEventVerb, VerbPattern,
    VerbVisitor, Word,
};

// Variant codes. Never reuse or renumber: stored fingerprints depend on them.
const NP_LEMMA: u8 = 0x10;
const NP_TAGGED: u8 = 0x11;
const NP_COMPLEX: u8 = 0x12;
const VERB_LEMMA: u8 = 0x20;
const VERB_PHRASE: u8 = 0x21;
const VERB_OBJECT: u8 = 0x22;
const VERB_TELIC: u8 = 0x23;
const VERB_NONTELIC: u8 = 0x24;
const VERB_DUNNOTELIC: u8 = 0x25;

/// Types with a run-stable structural fingerprint.
pub trait Fingerprint {
    fn fingerprint(&self) -> u64;
}

impl Fingerprint for Np {
    fn fingerprint(&self) -> u64 {
        fingerprint_np(self)
    }
}

impl Fingerprint for VerbPattern {
    fn fingerprint(&self) -> u64 {
        fingerprint_verb(self)
    }
}

/// Fingerprint a noun-phrase pattern.
pub fn fingerprint_np(np: &Np) -> u64 {
    let mut fp = Fingerprinter::default();
    np.accept(&mut fp, ());
    fp.finish()
}

/// Fingerprint a verb pattern and everything it owns.
pub fn fingerprint_verb(verb: &VerbPattern) -> u64 {
    let mut fp = Fingerprinter::default();
    verb.accept(&mut fp, ());
    fp.finish()
}

#[derive(Default)]
struct Fingerprinter {
    state: FxHasher,
}

impl Fingerprinter {
    fn finish(&self) -> u64 {
        self.state.finish()
    }

    fn word(&mut self, word: &Word) {
        word.as_str().hash(&mut self.state);
    }

    fn tagged_word(&mut self, word: &TaggedWord) {
        self.word(word.word());
        self.state.write_u8(word.tag().code());
    }

    fn tagged_words(&mut self, words: &TaggedWords) {
        self.state.write_u64(words.len() as u64);
        for word in words {
            self.tagged_word(word);
        }
    }
}

impl<'ast> NpVisitor<'ast, (), ()> for Fingerprinter {
    fn visit_lemma_np(&mut self, np: &'ast LemmaNp, (): ()) {
        self.state.write_u8(NP_LEMMA);
        self.word(np.lemma());
    }

    fn visit_tagged_np(&mut self, np: &'ast TaggedNp, (): ()) {
        self.state.write_u8(NP_TAGGED);
        self.tagged_word(np.word());
    }

    fn visit_complex_np(&mut self, np: &'ast ComplexNp, (): ()) {
        self.state.write_u8(NP_COMPLEX);
        self.tagged_words(np.words());
    }
}

impl<'ast> VerbVisitor<'ast, (), ()> for Fingerprinter {
    fn visit_lemma_verb(&mut self, verb: &'ast LemmaVerb, (): ()) {
        self.state.write_u8(VERB_LEMMA);
        self.word(verb.lemma());
    }

    fn visit_phrase_verb(&mut self, verb: &'ast PhraseVerb, (): ()) {
        self.state.write_u8(VERB_PHRASE);
        self.tagged_words(verb.words());
    }

    fn visit_object_verb(&mut self, verb: &'ast ObjectVerb, (): ()) {
        self.state.write_u8(VERB_OBJECT);
        verb.verb().accept(self, ());
        verb.object().accept(self, ());
    }

    fn visit_telic_event(&mut self, verb: &'ast TelicEventVerb, (): ()) {
        self.state.write_u8(VERB_TELIC);
        verb.inner().accept(self, ());
    }

    fn visit_nontelic_event(&mut self, verb: &'ast NontelicEventVerb, (): ()) {
        self.state.write_u8(VERB_NONTELIC);
        verb.inner().accept(self, ());
    }

    fn visit_dunnotelic_event(&mut self, verb: &'ast DunnotelicEventVerb, (): ()) {
        self.state.write_u8(VERB_DUNNOTELIC);
        verb.inner().accept(self, ());
    }
}
