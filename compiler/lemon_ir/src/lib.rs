//! Lemon IR - Pattern AST for lexicon surface patterns
//!
//! This crate contains the in-memory representation of lemon patterns:
//! - `Tag` for part-of-speech tags (closed, payload-free)
//! - `Word`, `TaggedWord` and `TaggedWords` for literal surface tokens
//! - `Np` for noun-phrase shapes
//! - `VerbPattern` for verb-construction shapes, including telicity modifiers
//! - Visitor traits (`TagVisitor`, `NpVisitor`, `VerbVisitor`) for dispatch
//! - A deep-traversal `Walker` and structural `Fingerprint`s
//!
//! # Value Semantics
//!
//! Every node is immutable once built and has the traits required to act as
//! a map or set key:
//! - Clone
//! - Eq + `PartialEq`: structural, variant-sensitive
//! - Hash: derived from the owned children
//! - Debug
//!
//! Nodes are `Send + Sync` and hold no interior mutability, so any number of
//! threads may traverse, compare and hash the same tree concurrently.
//!
//! # Ownership
//!
//! Trees, not DAGs: each child is owned by exactly one parent (`Box` for the
//! recursive verb payloads). A node can never be its own descendant.

mod error;
pub mod fingerprint;
mod np;
pub mod query;
mod tag;
mod verb;
pub mod visitor;
pub mod walk;
mod word;

#[cfg(test)]
mod test_helpers;

pub use error::PatternError;
pub use fingerprint::{fingerprint_np, fingerprint_verb, Fingerprint};
pub use np::{ComplexNp, LemmaNp, Np, TaggedNp};
pub use query::Telicity;
pub use tag::Tag;
pub use verb::{
    DunnotelicEventVerb, LemmaVerb, NontelicEventVerb, ObjectVerb, PhraseVerb, TelicEventVerb,
    VerbPattern,
};
pub use visitor::{NpVisitor, TagVisitor, VerbVisitor};
pub use walk::Walker;
pub use word::{TaggedWord, TaggedWords, Word};

/// Compile-time assertion that a type has a specific size.
///
/// Used to keep the tag and word types from growing by accident.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

static_assert_size!(Tag, 1);
static_assert_size!(Word, 16);
