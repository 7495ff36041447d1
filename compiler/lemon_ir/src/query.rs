//! Read-only queries over verb patterns.
//!
//! Each query is a small visitor or walker; none of them inspect node
//! internals outside the dispatch protocol.

use std::fmt;

use crate::{
    DunnotelicEventVerb, LemmaVerb, NontelicEventVerb, ObjectVerb, PhraseVerb, TaggedWord,
    TelicEventVerb, VerbPattern, VerbVisitor, Walker,
};

/// Telicity annotation carried by a verb pattern.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Telicity {
    /// The event has an inherent endpoint.
    Telic,
    /// The event has no inherent endpoint.
    Nontelic,
    /// The pattern is an event, but its telicity is not known.
    Unknown,
}

impl Telicity {
    pub const fn name(self) -> &'static str {
        match self {
            Telicity::Telic => "telic",
            Telicity::Nontelic => "nontelic",
            Telicity::Unknown => "dunnotelic",
        }
    }
}

impl fmt::Display for Telicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outermost telicity annotation, looking through fixed objects.
///
/// `None` when the pattern carries no telicity modifier.
pub fn telicity(verb: &VerbPattern) -> Option<Telicity> {
    verb.accept(&mut TelicityProbe, ())
}

/// Number of telicity modifiers stacked on the verb, across fixed objects.
pub fn modifier_depth(verb: &VerbPattern) -> usize {
    verb.accept(&mut DepthCounter, 0)
}

/// Lemma of the innermost verb head.
///
/// For a phrase this is the leftmost word tagged as a verb; `None` if the
/// phrase has none.
pub fn base_lemma(verb: &VerbPattern) -> Option<&str> {
    verb.accept(&mut BaseLemma, ())
}

/// Every tagged word in the pattern, in traversal order.
pub fn tagged_words(verb: &VerbPattern) -> Vec<&TaggedWord> {
    let mut collector = TaggedWordCollector { words: Vec::new() };
    collector.visit_verb(verb);
    collector.words
}

struct TelicityProbe;

impl<'ast> VerbVisitor<'ast, Option<Telicity>, ()> for TelicityProbe {
    fn visit_lemma_verb(&mut self, _: &'ast LemmaVerb, (): ()) -> Option<Telicity> {
        None
    }

    fn visit_phrase_verb(&mut self, _: &'ast PhraseVerb, (): ()) -> Option<Telicity> {
        None
    }

    fn visit_object_verb(&mut self, verb: &'ast ObjectVerb, (): ()) -> Option<Telicity> {
        verb.verb().accept(self, ())
    }

    fn visit_telic_event(&mut self, _: &'ast TelicEventVerb, (): ()) -> Option<Telicity> {
        Some(Telicity::Telic)
    }

    fn visit_nontelic_event(&mut self, _: &'ast NontelicEventVerb, (): ()) -> Option<Telicity> {
        Some(Telicity::Nontelic)
    }

    fn visit_dunnotelic_event(
        &mut self,
        _: &'ast DunnotelicEventVerb,
        (): (),
    ) -> Option<Telicity> {
        Some(Telicity::Unknown)
    }
}

/// Threads the depth reached so far through the auxiliary argument.
struct DepthCounter;

impl<'ast> VerbVisitor<'ast, usize, usize> for DepthCounter {
    fn visit_lemma_verb(&mut self, _: &'ast LemmaVerb, depth: usize) -> usize {
        depth
    }

    fn visit_phrase_verb(&mut self, _: &'ast PhraseVerb, depth: usize) -> usize {
        depth
    }

    fn visit_object_verb(&mut self, verb: &'ast ObjectVerb, depth: usize) -> usize {
        verb.verb().accept(self, depth)
    }

    fn visit_telic_event(&mut self, verb: &'ast TelicEventVerb, depth: usize) -> usize {
        verb.inner().accept(self, depth + 1)
    }

    fn visit_nontelic_event(&mut self, verb: &'ast NontelicEventVerb, depth: usize) -> usize {
        verb.inner().accept(self, depth + 1)
    }

    fn visit_dunnotelic_event(&mut self, verb: &'ast DunnotelicEventVerb, depth: usize) -> usize {
        verb.inner().accept(self, depth + 1)
    }
}

struct BaseLemma;

impl<'ast> VerbVisitor<'ast, Option<&'ast str>, ()> for BaseLemma {
    fn visit_lemma_verb(&mut self, verb: &'ast LemmaVerb, (): ()) -> Option<&'ast str> {
        Some(verb.lemma().as_str())
    }

    fn visit_phrase_verb(&mut self, verb: &'ast PhraseVerb, (): ()) -> Option<&'ast str> {
        verb.words().head_verb().map(|w| w.word().as_str())
    }

    fn visit_object_verb(&mut self, verb: &'ast ObjectVerb, (): ()) -> Option<&'ast str> {
        verb.verb().accept(self, ())
    }

    fn visit_telic_event(&mut self, verb: &'ast TelicEventVerb, (): ()) -> Option<&'ast str> {
        verb.inner().accept(self, ())
    }

    fn visit_nontelic_event(
        &mut self,
        verb: &'ast NontelicEventVerb,
        (): (),
    ) -> Option<&'ast str> {
        verb.inner().accept(self, ())
    }

    fn visit_dunnotelic_event(
        &mut self,
        verb: &'ast DunnotelicEventVerb,
        (): (),
    ) -> Option<&'ast str> {
        verb.inner().accept(self, ())
    }
}

struct TaggedWordCollector<'ast> {
    words: Vec<&'ast TaggedWord>,
}

impl<'ast> Walker<'ast> for TaggedWordCollector<'ast> {
    fn visit_tagged_word(&mut self, word: &'ast TaggedWord) {
        self.words.push(word);
    }
}

#[cfg(test)]
mod tests;
