//! # vocab-core - flashcard session and progress model
//!
//! Pure Rust core of the vocabulary trainer:
//!
//! - **Word store** - books, lessons and ordered word pairs loaded from a catalog
//! - **Collection builder** - single lesson, "all words" and "hard words" collections
//! - **Session model** - card cursor, reveal flag, study direction, shuffled order
//! - **Hard-word set** - persisted bookmarks keyed by book, lesson and word position
//!
//! ## Module layout
//!
//! - [`types`] - word pairs, lessons, books, direction, shared constants
//! - [`bookmark`] - structured bookmark key and its storage encoding
//! - [`collection`] - `WordCollection` and its builder
//! - [`session`] - the session state machine
//! - [`hard_set`] - hard-word bookmark set
//! - [`store`] - key-value persistence (memory and JSON file)
//! - [`catalog`] - `words.json` parsing and the word source trait
//! - [`game`] - tile-matching mini-game
//! - [`app`] - application context owning all of the above
//!
//! ## Example
//!
//! ```rust
//! use vocab_core::{Book, CollectionSource, CurrentCard, HardSet, Lesson, MemoryStore, SessionModel, WordCollection, WordPair};
//!
//! let book = Book::new("1", "Book 1", vec![Lesson::new(
//!     "L1",
//!     "Animals",
//!     vec![WordPair::new("cat", "кот"), WordPair::new("dog", "пёс")],
//! )]);
//! let mut hard = HardSet::load(MemoryStore::new());
//! let mut session = SessionModel::with_seed(7);
//!
//! session.open_collection(WordCollection::build(&CollectionSource::lesson(0), &book, &hard));
//! session.toggle_hard(&mut hard);
//! session.next();
//!
//! match session.current_card() {
//!     CurrentCard::Card(card) => assert_eq!(card.front, "dog"),
//!     CurrentCard::Empty => unreachable!(),
//! }
//! assert_eq!(hard.len(), 1);
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod bookmark;
pub mod catalog;
pub mod collection;
pub mod game;
pub mod hard_set;
pub mod session;
pub mod store;
pub mod types;

// ============================================================================
// Re-exports
// ============================================================================

pub use types::*;

pub use app::AppContext;
pub use bookmark::{BookmarkKey, ParseBookmarkKeyError};
pub use catalog::{BookSummary, Catalog, JsonFileSource, LoadError, LoadResult, WordSource};
pub use collection::{CollectionSource, Origin, WordCollection};
pub use game::{BrickMatch, PickOutcome, Side, Tile};
pub use hard_set::HardSet;
pub use session::{CardView, CurrentCard, SessionModel};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, StoreError, StoreResult};
