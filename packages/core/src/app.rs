//! Application context
//!
//! Owns the word source, the active book, the hard-word set and the session.
//! The presentation layer holds one `AppContext` and calls into it; nothing
//! in the core is global.

use crate::catalog::{BookSummary, LoadError, LoadResult, WordSource};
use crate::collection::{CollectionSource, WordCollection};
use crate::game::BrickMatch;
use crate::hard_set::HardSet;
use crate::session::SessionModel;
use crate::store::KeyValueStore;
use crate::types::{Book, Lesson, FALLBACK_BOOK_ID};

pub struct AppContext<W, S> {
    source: W,
    books: Vec<BookSummary>,
    book: Book,
    hard_set: HardSet<S>,
    session: SessionModel,
    game_seed: u64,
}

impl<W: WordSource, S: KeyValueStore> AppContext<W, S> {
    /// Loads the hard-word set and the first book of the source.
    ///
    /// Returns the context together with the load error, if any. On error the
    /// context is still usable, with an empty lesson list.
    pub fn new(source: W, store: S, seed: Option<u64>) -> (Self, Option<LoadError>) {
        let session = match seed {
            Some(seed) => SessionModel::with_seed(seed),
            None => SessionModel::new(),
        };
        let mut app = Self {
            source,
            books: Vec::new(),
            book: Book::empty(FALLBACK_BOOK_ID),
            hard_set: HardSet::load(store),
            session,
            game_seed: seed.unwrap_or_else(rand::random),
        };

        let error = match app.source.load() {
            Ok(catalog) => {
                app.books = catalog.books();
                let first = app
                    .books
                    .first()
                    .map(|book| book.id.clone())
                    .unwrap_or_else(|| FALLBACK_BOOK_ID.to_string());
                app.select_book(&first).err()
            }
            Err(err) => Some(err),
        };

        if let Some(err) = &error {
            tracing::error!(error = %err, "failed to load books");
        }
        (app, error)
    }

    // ---------- books ----------

    /// Reloads the source and makes `book_id` active.
    ///
    /// On failure the book stays selected with no lessons and the error is
    /// returned for display. Any open collection is closed either way.
    pub fn select_book(&mut self, book_id: &str) -> LoadResult<()> {
        self.session.close();

        let loaded = self.source.load().and_then(|catalog| {
            self.books = catalog.books();
            catalog.book(book_id)
        });

        match loaded {
            Ok(book) => {
                tracing::info!(book = %book.id, lessons = book.lessons.len(), "book selected");
                self.book = book;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(book = %book_id, error = %err, "failed to load selected book");
                self.book = Book::empty(book_id);
                Err(err)
            }
        }
    }

    pub fn books(&self) -> &[BookSummary] {
        &self.books
    }

    pub fn active_book(&self) -> &Book {
        &self.book
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.book.lessons
    }

    // ---------- collections ----------

    fn open(&mut self, source: CollectionSource) -> &WordCollection {
        let collection = WordCollection::build(&source, &self.book, &self.hard_set);
        self.session.open_collection(collection)
    }

    /// Opens the lesson at `index` (0-based) in the active book
    pub fn open_lesson(&mut self, index: usize) -> &WordCollection {
        self.open(CollectionSource::lesson(index))
    }

    pub fn play_all(&mut self) -> &WordCollection {
        self.open(CollectionSource::AllWords)
    }

    pub fn play_hard(&mut self) -> &WordCollection {
        self.open(CollectionSource::HardWords)
    }

    pub fn close_collection(&mut self) {
        self.session.close();
    }

    // ---------- hard words ----------

    pub fn toggle_hard(&mut self) -> Option<bool> {
        self.session.toggle_hard(&mut self.hard_set)
    }

    pub fn is_current_hard(&self) -> bool {
        self.session.is_current_hard(&self.hard_set)
    }

    /// Bookmarks across every book, as shown on the menu
    pub fn hard_count(&self) -> usize {
        self.hard_set.len()
    }

    pub fn hard_set(&self) -> &HardSet<S> {
        &self.hard_set
    }

    // ---------- session & game ----------

    pub fn session(&self) -> &SessionModel {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionModel {
        &mut self.session
    }

    /// A new game over the open collection, `None` if it has no words
    pub fn start_game(&mut self) -> Option<BrickMatch> {
        let words = self.session.game_words()?;
        self.game_seed = self.game_seed.wrapping_add(1);
        Some(BrickMatch::start(words, self.game_seed))
    }
}
