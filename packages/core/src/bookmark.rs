//! Bookmark keys
//!
//! A word is identified by (book id, lesson id, index in the lesson's source
//! order). The same pair appearing in two lessons gets two identities.
//! Keys are encoded as `<book>|<lesson>:<index>` only when persisted.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookmarkKey {
    pub book_id: String,
    pub lesson_id: String,
    pub word_index: usize,
}

impl BookmarkKey {
    pub fn new(book_id: impl Into<String>, lesson_id: impl Into<String>, word_index: usize) -> Self {
        Self {
            book_id: book_id.into(),
            lesson_id: lesson_id.into(),
            word_index,
        }
    }
}

impl fmt::Display for BookmarkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}:{}", self.book_id, self.lesson_id, self.word_index)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseBookmarkKeyError {
    #[error("bookmark key has no book separator: {0}")]
    MissingBook(String),

    #[error("bookmark key has no word index: {0}")]
    MissingIndex(String),

    #[error("bookmark key has an invalid word index: {0}")]
    InvalidIndex(String),
}

impl FromStr for BookmarkKey {
    type Err = ParseBookmarkKeyError;

    /// The book id ends at the first `|`, the word index starts after the last `:`,
    /// so lesson ids may themselves contain either character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (book_id, rest) = s
            .split_once('|')
            .ok_or_else(|| ParseBookmarkKeyError::MissingBook(s.to_string()))?;
        let (lesson_id, index) = rest
            .rsplit_once(':')
            .ok_or_else(|| ParseBookmarkKeyError::MissingIndex(s.to_string()))?;
        let word_index = index
            .parse::<usize>()
            .map_err(|_| ParseBookmarkKeyError::InvalidIndex(s.to_string()))?;

        Ok(Self::new(book_id, lesson_id, word_index))
    }
}
