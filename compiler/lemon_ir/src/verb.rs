//! Verb-construction patterns.
//!
//! # Acyclicity
//!
//! The modifier variants (`TelicEvent`, `NontelicEvent`, `DunnotelicEvent`)
//! and `WithObject` own their child `VerbPattern` through a `Box`. Nodes are
//! immutable after construction and never shared, so a pattern cannot be its
//! own descendant. Equality, hashing and fingerprinting recurse without any
//! cycle check. Nesting depth is whatever the producer built from source.

use crate::{Np, TaggedWords, VerbVisitor, Word};

/// Verb-construction pattern.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum VerbPattern {
    /// A bare verb lemma, e.g. `know`.
    Lemma(LemmaVerb),
    /// A multi-word verb as tagged words, e.g. `give/verb up/particle`.
    Phrase(PhraseVerb),
    /// A verb with a fixed object, e.g. `take` + `place`.
    WithObject(ObjectVerb),
    /// The event has an inherent endpoint.
    TelicEvent(TelicEventVerb),
    /// The event has no inherent endpoint.
    NontelicEvent(NontelicEventVerb),
    /// Telicity of the event is not known.
    DunnotelicEvent(DunnotelicEventVerb),
}

impl VerbPattern {
    pub fn lemma(lemma: Word) -> Self {
        VerbPattern::Lemma(LemmaVerb::new(lemma))
    }

    pub fn phrase(words: TaggedWords) -> Self {
        VerbPattern::Phrase(PhraseVerb::new(words))
    }

    pub fn with_object(verb: VerbPattern, object: Np) -> Self {
        VerbPattern::WithObject(ObjectVerb::new(verb, object))
    }

    pub fn telic_event(inner: VerbPattern) -> Self {
        VerbPattern::TelicEvent(TelicEventVerb::new(inner))
    }

    pub fn nontelic_event(inner: VerbPattern) -> Self {
        VerbPattern::NontelicEvent(NontelicEventVerb::new(inner))
    }

    pub fn dunnotelic_event(inner: VerbPattern) -> Self {
        VerbPattern::DunnotelicEvent(DunnotelicEventVerb::new(inner))
    }

    /// Route to the visitor method for this variant.
    pub fn accept<'ast, R, A, V>(&'ast self, visitor: &mut V, arg: A) -> R
    where
        V: VerbVisitor<'ast, R, A> + ?Sized,
    {
        match self {
            VerbPattern::Lemma(verb) => verb.accept(visitor, arg),
            VerbPattern::Phrase(verb) => verb.accept(visitor, arg),
            VerbPattern::WithObject(verb) => verb.accept(visitor, arg),
            VerbPattern::TelicEvent(verb) => verb.accept(visitor, arg),
            VerbPattern::NontelicEvent(verb) => verb.accept(visitor, arg),
            VerbPattern::DunnotelicEvent(verb) => verb.accept(visitor, arg),
        }
    }

    /// Check if this node is one of the telicity modifiers.
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            VerbPattern::TelicEvent(_)
                | VerbPattern::NontelicEvent(_)
                | VerbPattern::DunnotelicEvent(_)
        )
    }
}

/// Verb given only as a lemma.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LemmaVerb {
    lemma: Word,
}

impl LemmaVerb {
    pub fn new(lemma: Word) -> Self {
        LemmaVerb { lemma }
    }

    pub fn lemma(&self) -> &Word {
        &self.lemma
    }

    #[inline]
    pub fn accept<'ast, R, A, V>(&'ast self, visitor: &mut V, arg: A) -> R
    where
        V: VerbVisitor<'ast, R, A> + ?Sized,
    {
        visitor.visit_lemma_verb(self, arg)
    }
}

/// Multi-word verb.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct PhraseVerb {
    words: TaggedWords,
}

impl PhraseVerb {
    pub fn new(words: TaggedWords) -> Self {
        PhraseVerb { words }
    }

    pub fn words(&self) -> &TaggedWords {
        &self.words
    }

    #[inline]
    pub fn accept<'ast, R, A, V>(&'ast self, visitor: &mut V, arg: A) -> R
    where
        V: VerbVisitor<'ast, R, A> + ?Sized,
    {
        visitor.visit_phrase_verb(self, arg)
    }
}

/// Verb plus a fixed noun-phrase object.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ObjectVerb {
    verb: Box<VerbPattern>,
    object: Np,
}

impl ObjectVerb {
    pub fn new(verb: VerbPattern, object: Np) -> Self {
        ObjectVerb {
            verb: Box::new(verb),
            object,
        }
    }

    pub fn verb(&self) -> &VerbPattern {
        &self.verb
    }

    pub fn object(&self) -> &Np {
        &self.object
    }

    #[inline]
    pub fn accept<'ast, R, A, V>(&'ast self, visitor: &mut V, arg: A) -> R
    where
        V: VerbVisitor<'ast, R, A> + ?Sized,
    {
        visitor.visit_object_verb(self, arg)
    }
}

/// Define a telicity modifier wrapping exactly one child `VerbPattern`.
///
/// Each generated type has `new()`, `inner()` and `accept()`.
macro_rules! define_modifier {
    ($( $(#[$doc:meta])* $name:ident => $method:ident ),+ $(,)?) => { $(
        $(#[$doc])*
        #[derive(Clone, Eq, PartialEq, Hash, Debug)]
        pub struct $name {
            inner: Box<VerbPattern>,
        }

        impl $name {
            pub fn new(inner: VerbPattern) -> Self {
                $name { inner: Box::new(inner) }
            }

            /// The modified pattern.
            pub fn inner(&self) -> &VerbPattern {
                &self.inner
            }

            #[inline]
            pub fn accept<'ast, R, A, V>(&'ast self, visitor: &mut V, arg: A) -> R
            where
                V: VerbVisitor<'ast, R, A> + ?Sized,
            {
                visitor.$method(self, arg)
            }
        }
    )+ };
}

define_modifier! {
    /// Marks the wrapped pattern as a telic event.
    TelicEventVerb => visit_telic_event,
    /// Marks the wrapped pattern as a non-telic event.
    NontelicEventVerb => visit_nontelic_event,
    /// Marks the wrapped pattern as an event whose telicity is unknown.
    DunnotelicEventVerb => visit_dunnotelic_event,
}
