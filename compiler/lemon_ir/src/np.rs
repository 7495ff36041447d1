//! Noun-phrase patterns.
//!
//! Variants range from loosely specified (a bare lemma) to fully specified
//! (a tagged-word sequence).

use crate::{NpVisitor, TaggedWord, TaggedWords, Word};

/// Noun-phrase pattern.
///
/// Exactly one variant is active. Values of different variants are never
/// equal, even when their payloads would be compatible.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Np {
    /// A bare lemma, part of speech left to the lexicon.
    Lemma(LemmaNp),
    /// A single tagged word.
    Tagged(TaggedNp),
    /// A tagged-word sequence, e.g. `the/article cat/noun`.
    Complex(ComplexNp),
}

impl Np {
    pub fn lemma(lemma: Word) -> Self {
        Np::Lemma(LemmaNp::new(lemma))
    }

    pub fn tagged(word: TaggedWord) -> Self {
        Np::Tagged(TaggedNp::new(word))
    }

    /// Build a complex NP. An empty sequence is a valid payload.
    pub fn complex(words: TaggedWords) -> Self {
        Np::Complex(ComplexNp::new(words))
    }

    /// Route to the visitor method for this variant.
    pub fn accept<'ast, R, A, V>(&'ast self, visitor: &mut V, arg: A) -> R
    where
        V: NpVisitor<'ast, R, A> + ?Sized,
    {
        match self {
            Np::Lemma(np) => np.accept(visitor, arg),
            Np::Tagged(np) => np.accept(visitor, arg),
            Np::Complex(np) => np.accept(visitor, arg),
        }
    }

    /// Head word used for lexicon lookup.
    ///
    /// The lemma, the single tagged word, or the rightmost noun of a
    /// complex NP. `None` for a complex NP without a noun.
    pub fn head(&self) -> Option<&Word> {
        match self {
            Np::Lemma(np) => Some(np.lemma()),
            Np::Tagged(np) => Some(np.word().word()),
            Np::Complex(np) => np.words().head_noun().map(TaggedWord::word),
        }
    }
}

/// Noun phrase given only as a lemma.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LemmaNp {
    lemma: Word,
}

impl LemmaNp {
    pub fn new(lemma: Word) -> Self {
        LemmaNp { lemma }
    }

    pub fn lemma(&self) -> &Word {
        &self.lemma
    }

    #[inline]
    pub fn accept<'ast, R, A, V>(&'ast self, visitor: &mut V, arg: A) -> R
    where
        V: NpVisitor<'ast, R, A> + ?Sized,
    {
        visitor.visit_lemma_np(self, arg)
    }
}

/// Noun phrase given as one tagged word.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TaggedNp {
    word: TaggedWord,
}

impl TaggedNp {
    pub fn new(word: TaggedWord) -> Self {
        TaggedNp { word }
    }

    pub fn word(&self) -> &TaggedWord {
        &self.word
    }

    #[inline]
    pub fn accept<'ast, R, A, V>(&'ast self, visitor: &mut V, arg: A) -> R
    where
        V: NpVisitor<'ast, R, A> + ?Sized,
    {
        visitor.visit_tagged_np(self, arg)
    }
}

/// Fully specified noun phrase.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ComplexNp {
    words: TaggedWords,
}

impl ComplexNp {
    pub fn new(words: TaggedWords) -> Self {
        ComplexNp { words }
    }

    /// The words in surface order.
    pub fn words(&self) -> &TaggedWords {
        &self.words
    }

    #[inline]
    pub fn accept<'ast, R, A, V>(&'ast self, visitor: &mut V, arg: A) -> R
    where
        V: NpVisitor<'ast, R, A> + ?Sized,
    {
        visitor.visit_complex_np(self, arg)
    }
}
