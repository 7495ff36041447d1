//! Surface tokens and tagged-word sequences.

use std::fmt;

use smallvec::SmallVec;

use crate::{PatternError, Tag};

/// A single literal surface token, e.g. `cat` or `took`.
///
/// Always non-empty and free of whitespace. The producer's text is kept
/// exactly as given; nothing is trimmed or case-folded.
#[derive(Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Word(Box<str>);

impl Word {
    /// Validate and build a token.
    pub fn new(text: &str) -> Result<Self, PatternError> {
        if text.trim().is_empty() {
            return Err(PatternError::EmptyToken);
        }
        if text.chars().any(char::is_whitespace) {
            return Err(PatternError::WhitespaceInToken {
                token: text.to_owned(),
            });
        }
        Ok(Word(text.into()))
    }

    /// The token text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Word {
    type Error = PatternError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Word::new(text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({:?})", self.as_str())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A surface token paired with its part-of-speech tag.
///
/// Equal iff both the token and the tag are equal.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TaggedWord {
    word: Word,
    tag: Tag,
}

impl TaggedWord {
    /// Pair a validated token with a tag.
    #[inline]
    pub const fn new(word: Word, tag: Tag) -> Self {
        TaggedWord { word, tag }
    }

    /// Validate `text` and pair it with `tag`.
    pub fn parse(text: &str, tag: Tag) -> Result<Self, PatternError> {
        Ok(TaggedWord::new(Word::new(text)?, tag))
    }

    #[inline]
    pub fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    pub fn tag(&self) -> Tag {
        self.tag
    }
}

/// Ordered sequence of tagged words, in left-to-right surface order.
///
/// May be empty. Two sequences are equal iff they have the same length and
/// pairwise-equal elements in the same order. Most phrases are short, so up
/// to four words are stored inline.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct TaggedWords(SmallVec<[TaggedWord; 4]>);

impl TaggedWords {
    /// The empty sequence.
    pub fn new() -> Self {
        TaggedWords(SmallVec::new())
    }

    /// Build from `(text, tag)` pairs, validating every token.
    ///
    /// Stops at the first invalid token.
    pub fn parse<'a, I>(pairs: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = (&'a str, Tag)>,
    {
        pairs
            .into_iter()
            .map(|(text, tag)| TaggedWord::parse(text, tag))
            .collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[TaggedWord] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaggedWord> {
        self.0.iter()
    }

    /// Head of a noun phrase: the rightmost word tagged as a noun.
    pub fn head_noun(&self) -> Option<&TaggedWord> {
        self.0.iter().rev().find(|w| w.tag == Tag::Noun)
    }

    /// Head of a verb phrase: the leftmost word tagged as a verb.
    pub fn head_verb(&self) -> Option<&TaggedWord> {
        self.0.iter().find(|w| w.tag == Tag::Verb)
    }
}

impl From<Vec<TaggedWord>> for TaggedWords {
    fn from(words: Vec<TaggedWord>) -> Self {
        TaggedWords(SmallVec::from_vec(words))
    }
}

impl FromIterator<TaggedWord> for TaggedWords {
    fn from_iter<I: IntoIterator<Item = TaggedWord>>(iter: I) -> Self {
        TaggedWords(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TaggedWords {
    type Item = &'a TaggedWord;
    type IntoIter = std::slice::Iter<'a, TaggedWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
