//! Deep traversal over pattern trees.
//!
//! Complements the dispatch traits in [`visitor`](crate::visitor): a
//! `Walker` only overrides the nodes it cares about, and default methods
//! call `walk_*` functions that continue into children. The walker may
//! mutate its own state; the tree stays immutable.
//!
//! # Example
//!
//! ```text
//! struct CountNouns {
//!     count: usize,
//! }
//!
//! impl<'ast> Walker<'ast> for CountNouns {
//!     fn visit_tag(&mut self, tag: Tag) {
//!         if tag == Tag::Noun {
//!             self.count += 1;
//!         }
//!     }
//! }
//! ```

use crate::{Np, Tag, TaggedWord, TaggedWords, VerbPattern, Word};

/// Pattern tree walker.
///
/// Override `visit_*` methods to add behavior at specific nodes. Call the
/// matching `walk_*` function from an override to keep descending.
pub trait Walker<'ast> {
    /// Visit a verb pattern.
    fn visit_verb(&mut self, verb: &'ast VerbPattern) {
        walk_verb(self, verb);
    }

    /// Visit a noun-phrase pattern.
    fn visit_np(&mut self, np: &'ast Np) {
        walk_np(self, np);
    }

    /// Visit a tagged-word sequence.
    fn visit_tagged_words(&mut self, words: &'ast TaggedWords) {
        walk_tagged_words(self, words);
    }

    /// Visit a tagged word.
    fn visit_tagged_word(&mut self, word: &'ast TaggedWord) {
        walk_tagged_word(self, word);
    }

    /// Visit a surface token, tagged or bare.
    fn visit_word(&mut self, word: &'ast Word) {
        let _ = word;
    }

    /// Visit a tag.
    fn visit_tag(&mut self, tag: Tag) {
        let _ = tag;
    }
}

// Walk Functions
//
// Depth-first, left-to-right. A modifier is visited before its child, and
// the verb of a `WithObject` before its object.

/// Walk a verb pattern's children.
pub fn walk_verb<'ast, W: Walker<'ast> + ?Sized>(walker: &mut W, verb: &'ast VerbPattern) {
    match verb {
        VerbPattern::Lemma(v) => walker.visit_word(v.lemma()),
        VerbPattern::Phrase(v) => walker.visit_tagged_words(v.words()),
        VerbPattern::WithObject(v) => {
            walker.visit_verb(v.verb());
            walker.visit_np(v.object());
        }
        VerbPattern::TelicEvent(v) => walker.visit_verb(v.inner()),
        VerbPattern::NontelicEvent(v) => walker.visit_verb(v.inner()),
        VerbPattern::DunnotelicEvent(v) => walker.visit_verb(v.inner()),
    }
}

/// Walk a noun phrase's children.
pub fn walk_np<'ast, W: Walker<'ast> + ?Sized>(walker: &mut W, np: &'ast Np) {
    match np {
        Np::Lemma(n) => walker.visit_word(n.lemma()),
        Np::Tagged(n) => walker.visit_tagged_word(n.word()),
        Np::Complex(n) => walker.visit_tagged_words(n.words()),
    }
}

/// Walk every word of a sequence in surface order.
pub fn walk_tagged_words<'ast, W: Walker<'ast> + ?Sized>(
    walker: &mut W,
    words: &'ast TaggedWords,
) {
    for word in words {
        walker.visit_tagged_word(word);
    }
}

/// Walk a tagged word: the token, then its tag.
pub fn walk_tagged_word<'ast, W: Walker<'ast> + ?Sized>(walker: &mut W, word: &'ast TaggedWord) {
    walker.visit_word(word.word());
    walker.visit_tag(word.tag());
}
