//! Word collections
//!
//! A collection is the flattened set of pairs a session plays over. Its
//! `origin` runs parallel to `words` and records where each pair came from,
//! which is what keeps bookmark keys stable after concatenation and shuffling.

use crate::bookmark::BookmarkKey;
use crate::hard_set::HardSet;
use crate::store::KeyValueStore;
use crate::types::{
    Book, Lesson, WordPair, ALL_COLLECTION_ID, ALL_COLLECTION_TITLE, HARD_COLLECTION_ID,
    HARD_COLLECTION_TITLE,
};

/// What a collection is built from
///
/// Lessons are addressed by position in the book. Ids may repeat when an
/// explicit id collides with a generated `L<n>` one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollectionSource {
    Lesson(usize),
    AllWords,
    HardWords,
}

impl CollectionSource {
    pub fn lesson(index: usize) -> Self {
        CollectionSource::Lesson(index)
    }
}

/// Source position of one word: lesson id and index in that lesson
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Origin {
    pub lesson_id: String,
    pub word_index: usize,
}

impl Origin {
    pub fn new(lesson_id: impl Into<String>, word_index: usize) -> Self {
        Self {
            lesson_id: lesson_id.into(),
            word_index,
        }
    }

    pub fn bookmark_key(&self, book_id: &str) -> BookmarkKey {
        BookmarkKey::new(book_id, self.lesson_id.clone(), self.word_index)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordCollection {
    source: CollectionSource,
    id: String,
    book_id: String,
    title: String,
    words: Vec<WordPair>,
    origin: Vec<Origin>,
}

impl WordCollection {
    /// Builds a collection over `book`. Never fails: a lesson position past the
    /// end or an empty hard set gives an empty collection.
    pub fn build<S: KeyValueStore>(
        source: &CollectionSource,
        book: &Book,
        hard_set: &HardSet<S>,
    ) -> Self {
        match source {
            CollectionSource::Lesson(index) => match book.lessons.get(*index) {
                Some(lesson) => Self::at_position(&book.id, *index, lesson),
                None => {
                    tracing::warn!(book = %book.id, lesson = index + 1, "lesson not found, empty collection");
                    Self::empty(*source, &book.id, *index)
                }
            },
            CollectionSource::AllWords => Self::all_words(book),
            CollectionSource::HardWords => Self::hard_words(book, hard_set),
        }
    }

    /// The lesson at `position` in its book, words verbatim
    pub fn at_position(book_id: &str, position: usize, lesson: &Lesson) -> Self {
        let origin = (0..lesson.words.len())
            .map(|index| Origin::new(lesson.id.clone(), index))
            .collect();

        Self {
            source: CollectionSource::Lesson(position),
            id: lesson.id.clone(),
            book_id: book_id.to_string(),
            title: lesson.title.clone(),
            words: lesson.words.clone(),
            origin,
        }
    }

    pub fn all_words(book: &Book) -> Self {
        Self::collect(
            book,
            CollectionSource::AllWords,
            ALL_COLLECTION_ID,
            ALL_COLLECTION_TITLE,
            |_| true,
        )
    }

    pub fn hard_words<S: KeyValueStore>(book: &Book, hard_set: &HardSet<S>) -> Self {
        Self::collect(
            book,
            CollectionSource::HardWords,
            HARD_COLLECTION_ID,
            HARD_COLLECTION_TITLE,
            |origin| hard_set.contains(&origin.bookmark_key(&book.id)),
        )
    }

    /// Walks lessons in book order, words in source order
    fn collect<F>(book: &Book, source: CollectionSource, id: &str, title: &str, mut keep: F) -> Self
    where
        F: FnMut(&Origin) -> bool,
    {
        let mut words = Vec::new();
        let mut origin = Vec::new();

        for lesson in &book.lessons {
            for (index, pair) in lesson.words.iter().enumerate() {
                let position = Origin::new(lesson.id.clone(), index);
                if keep(&position) {
                    words.push(pair.clone());
                    origin.push(position);
                }
            }
        }

        Self {
            source,
            id: id.to_string(),
            book_id: book.id.clone(),
            title: title.to_string(),
            words,
            origin,
        }
    }

    fn empty(source: CollectionSource, book_id: &str, position: usize) -> Self {
        Self {
            source,
            id: Lesson::positional_id(position),
            book_id: book_id.to_string(),
            title: format!("Lesson {}", position + 1),
            words: Vec::new(),
            origin: Vec::new(),
        }
    }

    pub fn source(&self) -> &CollectionSource {
        &self.source
    }

    /// The lesson id, `"all"` or `"hard"`
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn book_id(&self) -> &str {
        &self.book_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn words(&self) -> &[WordPair] {
        &self.words
    }

    pub fn origin(&self) -> &[Origin] {
        &self.origin
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Bookmark key of `words[index]` in source order
    pub fn bookmark_key(&self, index: usize) -> Option<BookmarkKey> {
        self.origin
            .get(index)
            .map(|origin| origin.bookmark_key(&self.book_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::types::HARD_SET_STORAGE_KEY;

    fn sample_book(id: &str) -> Book {
        Book::new(
            id,
            "Sample",
            vec![
                Lesson::new(
                    "L1",
                    "First",
                    vec![WordPair::new("cat", "кот"), WordPair::new("dog", "пёс")],
                ),
                Lesson::new("L2", "Second", vec![WordPair::new("fish", "рыба")]),
            ],
        )
    }

    #[test]
    fn test_lesson_collection() {
        let book = sample_book("1");
        let hard = HardSet::load(MemoryStore::new());
        let collection = WordCollection::build(&CollectionSource::lesson(0), &book, &hard);

        assert_eq!(collection.source(), &CollectionSource::Lesson(0));
        assert_eq!(collection.id(), "L1");
        assert_eq!(collection.title(), "First");
        assert_eq!(collection.words(), book.lessons[0].words.as_slice());
        assert_eq!(
            collection.origin(),
            &[Origin::new("L1", 0), Origin::new("L1", 1)]
        );
    }

    #[test]
    fn test_all_words_origin_order() {
        let book = sample_book("1");
        let hard = HardSet::load(MemoryStore::new());
        let collection = WordCollection::build(&CollectionSource::AllWords, &book, &hard);

        assert_eq!(collection.id(), ALL_COLLECTION_ID);
        assert_eq!(collection.len(), 3);
        assert_eq!(
            collection.origin(),
            &[Origin::new("L1", 0), Origin::new("L1", 1), Origin::new("L2", 0)]
        );
    }

    #[test]
    fn test_hard_words_uses_active_book() {
        let book = sample_book("bookX");
        let hard = HardSet::load(MemoryStore::with_entry(
            HARD_SET_STORAGE_KEY,
            r#"["bookX|L1:1","other|L2:0"]"#,
        ));
        let collection = WordCollection::build(&CollectionSource::HardWords, &book, &hard);

        assert_eq!(collection.id(), HARD_COLLECTION_ID);
        assert_eq!(collection.words(), &[WordPair::new("dog", "пёс")]);
        assert_eq!(collection.origin(), &[Origin::new("L1", 1)]);
        assert_eq!(
            collection.bookmark_key(0),
            Some(BookmarkKey::new("bookX", "L1", 1))
        );
    }

    #[test]
    fn test_empty_sources() {
        let book = sample_book("1");
        let hard = HardSet::load(MemoryStore::new());

        let hard_words = WordCollection::build(&CollectionSource::HardWords, &book, &hard);
        assert!(hard_words.is_empty());
        assert!(hard_words.origin().is_empty());

        let missing = WordCollection::build(&CollectionSource::lesson(5), &book, &hard);
        assert!(missing.is_empty());
        assert_eq!(missing.id(), "L6");
        assert_eq!(missing.title(), "Lesson 6");

        let no_lessons = WordCollection::all_words(&Book::empty("2"));
        assert!(no_lessons.is_empty());
        assert_eq!(no_lessons.book_id(), "2");
    }

    #[test]
    fn test_build_does_not_touch_inputs() {
        let book = sample_book("1");
        let before = book.clone();
        let hard = HardSet::load(MemoryStore::with_entry(HARD_SET_STORAGE_KEY, r#"["1|L2:0"]"#));
        let _ = WordCollection::build(&CollectionSource::HardWords, &book, &hard);
        assert_eq!(book, before);
        assert_eq!(hard.len(), 1);
    }

    #[test]
    fn test_colliding_lesson_ids_open_by_position() {
        let book = Book::new(
            "1",
            "Sample",
            vec![
                Lesson::new("L2", "First", vec![WordPair::new("cat", "кот")]),
                Lesson::new("L2", "Second", vec![WordPair::new("dog", "пёс")]),
            ],
        );
        let hard = HardSet::load(MemoryStore::new());

        let second = WordCollection::build(&CollectionSource::lesson(1), &book, &hard);
        assert_eq!(second.title(), "Second");
        assert_eq!(second.words(), &[WordPair::new("dog", "пёс")]);
        assert_eq!(second.id(), "L2");
    }
}
