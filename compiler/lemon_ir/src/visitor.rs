//! Dispatch protocol for pattern nodes.
//!
//! Each closed hierarchy (`Tag`, `Np`, `VerbPattern`) has a visitor trait
//! parameterized by a result type `R` and an auxiliary argument type `A`,
//! with one required method per variant. `accept` on a node calls exactly
//! the method for its own variant, once, passing the variant payload and
//! `arg`, and returns the visitor's result unchanged.
//!
//! None of the methods have defaults. Adding a variant therefore fails to
//! compile until every visitor handles it. For a traversal that only cares
//! about a few node kinds, use [`Walker`](crate::Walker) instead.
//!
//! # Example
//!
//! ```text
//! struct Arity;
//!
//! impl<'ast> NpVisitor<'ast, usize, ()> for Arity {
//!     fn visit_lemma_np(&mut self, _: &'ast LemmaNp, (): ()) -> usize { 1 }
//!     fn visit_tagged_np(&mut self, _: &'ast TaggedNp, (): ()) -> usize { 1 }
//!     fn visit_complex_np(&mut self, np: &'ast ComplexNp, (): ()) -> usize {
//!         np.words().len()
//!     }
//! }
//!
//! let words = np.accept(&mut Arity, ());
//! ```

pub use crate::tag::TagVisitor;
use crate::{
    ComplexNp, DunnotelicEventVerb, LemmaNp, LemmaVerb, NontelicEventVerb, ObjectVerb, PhraseVerb,
    TaggedNp, TelicEventVerb,
};

/// Visitor over `Np` variants.
///
/// `'ast` is the lifetime of the visited tree, so results may borrow from it.
pub trait NpVisitor<'ast, R, A> {
    /// Visit a bare-lemma noun phrase.
    fn visit_lemma_np(&mut self, np: &'ast LemmaNp, arg: A) -> R;

    /// Visit a single tagged-word noun phrase.
    fn visit_tagged_np(&mut self, np: &'ast TaggedNp, arg: A) -> R;

    /// Visit a fully specified, tagged-word-sequence noun phrase.
    fn visit_complex_np(&mut self, np: &'ast ComplexNp, arg: A) -> R;
}

/// Visitor over `VerbPattern` variants.
///
/// Modifier variants are not descended into automatically; a visitor that
/// needs the child calls `accept` on it itself.
pub trait VerbVisitor<'ast, R, A> {
    /// Visit a bare verb lemma.
    fn visit_lemma_verb(&mut self, verb: &'ast LemmaVerb, arg: A) -> R;

    /// Visit a multi-word verb given as tagged words.
    fn visit_phrase_verb(&mut self, verb: &'ast PhraseVerb, arg: A) -> R;

    /// Visit a verb with a fixed noun-phrase object.
    fn visit_object_verb(&mut self, verb: &'ast ObjectVerb, arg: A) -> R;

    /// Visit a telic-event modifier.
    fn visit_telic_event(&mut self, verb: &'ast TelicEventVerb, arg: A) -> R;

    /// Visit a non-telic-event modifier.
    fn visit_nontelic_event(&mut self, verb: &'ast NontelicEventVerb, arg: A) -> R;

    /// Visit a dunno-telic-event modifier (telicity unknown).
    fn visit_dunnotelic_event(&mut self, verb: &'ast DunnotelicEventVerb, arg: A) -> R;
}
