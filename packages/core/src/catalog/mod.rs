//! Catalog loading
//!
//! Parses the `words.json` document:
//!
//! ```json
//! { "books": [ { "id": 1, "title": "...", "lessons": [
//!     { "id": "L1", "title": "...", "words": [["cat", "кот"], ["dog", "пёс"]] }
//! ] } ] }
//! ```
//!
//! Lenient where the data has an obvious default (missing titles, missing
//! lesson ids, a `words` value that is not a list), strict about word pairs.

mod raw;
mod source;

pub use source::{JsonFileSource, WordSource};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Book;

// ============================================================
// Errors
// ============================================================

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read word source {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("word source is not JSON (possibly an HTML or 404 page)")]
    NotJson,

    #[error("malformed word source: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("book not found: {0}")]
    BookNotFound(String),

    #[error("malformed word pair #{index} in book {book}, lesson {lesson}")]
    MalformedWord {
        book: String,
        lesson: String,
        index: usize,
    },
}

pub type LoadResult<T> = Result<T, LoadError>;

// ============================================================
// Catalog
// ============================================================

/// Book entry for the book picker
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: String,
    pub title: String,
}

/// Every book of one `words.json` document, fully validated
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn from_json_str(text: &str) -> LoadResult<Self> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let trimmed = text.trim_start();
        if !(trimmed.starts_with('{') || trimmed.starts_with('[')) {
            return Err(LoadError::NotJson);
        }

        let document: raw::RawCatalog = serde_json::from_str(text)?;
        let books = document
            .books
            .into_iter()
            .map(raw::RawBook::into_book)
            .collect::<LoadResult<Vec<_>>>()?;

        Ok(Self { books })
    }

    pub fn books(&self) -> Vec<BookSummary> {
        self.books
            .iter()
            .map(|book| BookSummary {
                id: book.id.clone(),
                title: book.title.clone(),
            })
            .collect()
    }

    pub fn book(&self, id: &str) -> LoadResult<Book> {
        self.books
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or_else(|| LoadError::BookNotFound(id.to_string()))
    }

    pub fn into_books(self) -> Vec<Book> {
        self.books
    }
}
