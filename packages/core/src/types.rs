//! Common Types and Constants
//!
//! Word store data shared by every module: pairs, lessons, books and the
//! study direction.

use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Storage key of the persisted hard-word set
pub const HARD_SET_STORAGE_KEY: &str = "vocabHardSetV1";

/// Collection id of the "all words" virtual collection
pub const ALL_COLLECTION_ID: &str = "all";

/// Collection id of the "hard words" virtual collection
pub const HARD_COLLECTION_ID: &str = "hard";

/// Title of the "all words" virtual collection
pub const ALL_COLLECTION_TITLE: &str = "All words";

/// Title of the "hard words" virtual collection
pub const HARD_COLLECTION_TITLE: &str = "Hard words";

/// Book selected when the catalog lists no books
pub const FALLBACK_BOOK_ID: &str = "1";

// ==================== Word Store ====================

/// A single front/back word pair
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordPair {
    /// Text shown first in front-to-back mode
    pub front: String,
    /// Translation
    pub back: String,
}

impl WordPair {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }
}

/// A named, ordered group of word pairs
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    /// Stable identifier, part of every bookmark key
    pub id: String,
    pub title: String,
    pub words: Vec<WordPair>,
}

impl Lesson {
    pub fn new(id: impl Into<String>, title: impl Into<String>, words: Vec<WordPair>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            words,
        }
    }

    /// Positional id used when the source omits one (`L1`, `L2`, ...)
    pub fn positional_id(index: usize) -> String {
        format!("L{}", index + 1)
    }
}

/// A book: the unit loaded from the word source
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub lessons: Vec<Lesson>,
}

impl Book {
    pub fn new(id: impl Into<String>, title: impl Into<String>, lessons: Vec<Lesson>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            lessons,
        }
    }

    /// A book with no lessons, used when loading fails
    pub fn empty(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            title: format!("Book {id}"),
            id,
            lessons: Vec::new(),
        }
    }

    /// Position of the first lesson with this id
    pub fn lesson_position(&self, id: &str) -> Option<usize> {
        self.lessons.iter().position(|lesson| lesson.id == id)
    }

    pub fn word_count(&self) -> usize {
        self.lessons.iter().map(|lesson| lesson.words.len()).sum()
    }
}

// ==================== Session Types ====================

/// Which side of a pair is shown first
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    FrontToBack,
    BackToFront,
}

impl Direction {
    pub fn toggled(self) -> Self {
        match self {
            Direction::FrontToBack => Direction::BackToFront,
            Direction::BackToFront => Direction::FrontToBack,
        }
    }

    /// Orders a pair's texts as (shown first, hidden)
    pub fn orient<'a>(&self, pair: &'a WordPair) -> (&'a str, &'a str) {
        match self {
            Direction::FrontToBack => (&pair.front, &pair.back),
            Direction::BackToFront => (&pair.back, &pair.front),
        }
    }
}
