//! Part-of-speech tags.
//!
//! `Tag` and its visitor trait `TagVisitor` are generated from one table so
//! the variant list, keyword names, `ALL`, and the visitor methods can never
//! drift apart. Adding a row adds a required visitor method, which breaks
//! every existing `TagVisitor` implementation until it handles the new tag.

use std::fmt;

/// Generate `Tag`, its metadata, its `accept`, and `TagVisitor`.
///
/// Each row is `Variant => visit_method, "keyword"`.
macro_rules! define_tags {
    ($( $(#[$doc:meta])* $variant:ident => $method:ident, $name:literal; )+) => {
        /// Part-of-speech tag attached to a surface token.
        ///
        /// `Any` is an explicit wildcard; it is distinct from having no tag,
        /// which a `TaggedWord` cannot express.
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
        #[repr(u8)]
        pub enum Tag {
            $( $(#[$doc])* $variant, )+
        }

        impl Tag {
            /// Every tag, in declaration order.
            pub const ALL: &'static [Tag] = &[$(Tag::$variant),+];

            /// Number of tags.
            pub const COUNT: usize = Tag::ALL.len();

            /// Keyword for this tag as written in pattern sources.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $( Tag::$variant => $name, )+
                }
            }

            /// Parse a keyword into a `Tag`.
            pub fn from_name(s: &str) -> Option<Tag> {
                match s {
                    $( $name => Some(Tag::$variant), )+
                    _ => None,
                }
            }

            /// Route to the visitor method for this tag.
            #[inline]
            pub fn accept<R, A, V>(self, visitor: &mut V, arg: A) -> R
            where
                V: TagVisitor<R, A> + ?Sized,
            {
                match self {
                    $( Tag::$variant => visitor.$method(arg), )+
                }
            }
        }

        /// Visitor over `Tag`, producing `R` from an auxiliary `A`.
        ///
        /// Tags carry no payload, so each method only receives `arg`.
        pub trait TagVisitor<R, A> {
            $(
                #[doc = concat!("Visit the `", $name, "` tag.")]
                fn $method(&mut self, arg: A) -> R;
            )+
        }
    };
}

define_tags! {
    Adjective => visit_adjective, "adjective";
    Adposition => visit_adposition, "adposition";
    Adverb => visit_adverb, "adverb";
    Article => visit_article, "article";
    Bullet => visit_bullet, "bullet";
    Circumposition => visit_circumposition, "circumposition";
    Colon => visit_colon, "colon";
    Comma => visit_comma, "comma";
    Conjunction => visit_conjunction, "conjunction";
    Copula => visit_copula, "copula";
    Determiner => visit_determiner, "determiner";
    Interjection => visit_interjection, "interjection";
    Noun => visit_noun, "noun";
    Numeral => visit_numeral, "numeral";
    Particle => visit_particle, "particle";
    /// Sentence-final full stop.
    Point => visit_point, "point";
    Postposition => visit_postposition, "postposition";
    Preposition => visit_preposition, "preposition";
    Pronoun => visit_pronoun, "pronoun";
    /// Punctuation not covered by a more specific tag.
    Punctuation => visit_punctuation, "punctuation";
    Semicolon => visit_semicolon, "semicolon";
    Slash => visit_slash, "slash";
    Verb => visit_verb, "verb";
    /// Wildcard: any part of speech.
    Any => visit_any, "any";
}

impl Tag {
    /// Check if this is the wildcard tag.
    #[inline]
    pub const fn is_wildcard(self) -> bool {
        matches!(self, Tag::Any)
    }

    /// Check if this tag marks a punctuation token.
    pub const fn is_punctuation(self) -> bool {
        matches!(
            self,
            Tag::Bullet
                | Tag::Colon
                | Tag::Comma
                | Tag::Point
                | Tag::Punctuation
                | Tag::Semicolon
                | Tag::Slash
        )
    }

    /// Compact code used by structural fingerprints.
    #[inline]
    pub(crate) const fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
