//! End-to-end study scenarios against the public API
//!
//! Covers:
//! - lesson navigation with wraparound
//! - "all" and "hard" collection assembly
//! - bookmarking through the file store and reopening the hard collection

use vocab_core::{
    AppContext, Book, BookmarkKey, Catalog, CollectionSource, CurrentCard, HardSet, JsonFileSource,
    JsonFileStore, KeyValueStore, Lesson, MemoryStore, Origin, SessionModel, WordCollection,
    WordPair, HARD_SET_STORAGE_KEY,
};

// ============================================================================
// Fixtures
// ============================================================================

fn animals_book(id: &str) -> Book {
    Book::new(
        id,
        "Book",
        vec![Lesson::new(
            "L1",
            "Animals",
            vec![WordPair::new("cat", "кот"), WordPair::new("dog", "пёс")],
        )],
    )
}

fn faces(session: &SessionModel) -> (String, String, bool) {
    match session.current_card() {
        CurrentCard::Card(card) => (card.front.to_string(), card.back.to_string(), card.revealed),
        CurrentCard::Empty => panic!("expected a card"),
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn lesson_navigation_wraps_both_ways() {
    let book = animals_book("1");
    let hard = HardSet::load(MemoryStore::new());
    let mut session = SessionModel::with_seed(3);
    session.open_collection(WordCollection::build(&CollectionSource::lesson(0), &book, &hard));

    assert_eq!(faces(&session), ("cat".into(), "кот".into(), false));
    session.next();
    assert_eq!(faces(&session), ("dog".into(), "пёс".into(), false));
    session.previous();
    session.previous();
    assert_eq!(faces(&session), ("dog".into(), "пёс".into(), false));
    session.previous();
    assert_eq!(faces(&session), ("cat".into(), "кот".into(), false));
}

#[test]
fn all_words_concatenates_in_lesson_order() {
    let book = Book::new(
        "1",
        "Book",
        vec![
            Lesson::new("L1", "One", vec![WordPair::new("a", "1"), WordPair::new("b", "2")]),
            Lesson::new("L2", "Two", vec![WordPair::new("c", "3")]),
        ],
    );
    let hard = HardSet::load(MemoryStore::new());
    let all = WordCollection::build(&CollectionSource::AllWords, &book, &hard);

    assert_eq!(all.len(), 3);
    assert_eq!(
        all.origin(),
        &[Origin::new("L1", 0), Origin::new("L1", 1), Origin::new("L2", 0)]
    );
}

#[test]
fn hard_collection_picks_bookmarked_word() {
    let book = Book::new(
        "bookX",
        "Book",
        vec![Lesson::new(
            "L1",
            "One",
            vec![WordPair::new("a", "1"), WordPair::new("b", "2")],
        )],
    );
    let store = MemoryStore::with_entry(HARD_SET_STORAGE_KEY, r#"["bookX|L1:1"]"#);
    let hard = HardSet::load(store);
    let collection = WordCollection::build(&CollectionSource::HardWords, &book, &hard);

    assert_eq!(collection.words(), &[WordPair::new("b", "2")]);
    assert_eq!(collection.origin(), &[Origin::new("L1", 1)]);
}

#[test]
fn toggled_word_shows_up_in_hard_collection() {
    let book = animals_book("1");
    let mut hard = HardSet::load(MemoryStore::new());
    let mut session = SessionModel::with_seed(11);
    session.open_collection(WordCollection::build(&CollectionSource::lesson(0), &book, &hard));

    assert_eq!(session.toggle_hard(&mut hard), Some(true));
    assert!(hard.contains(&BookmarkKey::new("1", "L1", 0)));
    assert_eq!(
        hard.store().get(HARD_SET_STORAGE_KEY).unwrap().as_deref(),
        Some(r#"["1|L1:0"]"#)
    );

    session.open_collection(WordCollection::build(&CollectionSource::HardWords, &book, &hard));
    assert_eq!(faces(&session), ("cat".into(), "кот".into(), false));
    assert_eq!(session.len(), 1);
}

#[test]
fn bookmark_in_shuffled_all_collection_points_at_source_word() {
    let book = Book::new(
        "1",
        "Book",
        vec![
            Lesson::new("L1", "One", (0..5).map(|i| WordPair::new(format!("a{i}"), format!("x{i}"))).collect()),
            Lesson::new("L2", "Two", (0..5).map(|i| WordPair::new(format!("b{i}"), format!("y{i}"))).collect()),
        ],
    );
    let mut hard = HardSet::load(MemoryStore::new());
    let mut session = SessionModel::with_seed(99);
    session.open_collection(WordCollection::all_words(&book));
    session.shuffle();

    let (front, _, _) = faces(&session);
    session.toggle_hard(&mut hard);

    let hard_words = WordCollection::hard_words(&book, &hard);
    assert_eq!(hard_words.len(), 1);
    assert_eq!(hard_words.words()[0].front, front);
}

#[test]
fn hard_words_persist_through_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let words_path = dir.path().join("words.json");
    let store_path = dir.path().join("data").join("store.json");
    std::fs::write(
        &words_path,
        r#"{"books":[{"id":"1","title":"Starter","lessons":[
            {"id":"L1","title":"Animals","words":[["cat","кот"],["dog","пёс"]]}
        ]}]}"#,
    )
    .unwrap();

    {
        let store = JsonFileStore::open(&store_path).unwrap();
        let (mut app, error) = AppContext::new(JsonFileSource::new(&words_path), store, Some(5));
        assert!(error.is_none());
        app.open_lesson(0);
        app.session_mut().next();
        assert_eq!(app.toggle_hard(), Some(true));
    }

    let store = JsonFileStore::open(&store_path).unwrap();
    let (mut app, _) = AppContext::new(JsonFileSource::new(&words_path), store, Some(6));
    assert_eq!(app.hard_count(), 1);
    assert_eq!(app.play_hard().words(), &[WordPair::new("dog", "пёс")]);
}

#[test]
fn catalog_source_is_reusable() {
    let catalog = Catalog::new(vec![animals_book("1"), animals_book("2")]);
    let (mut app, _) = AppContext::new(catalog, MemoryStore::new(), Some(1));
    app.open_lesson(0);
    app.toggle_hard();

    app.select_book("2").unwrap();
    assert!(app.play_hard().is_empty());
    assert!(app.session().current_card().is_empty());
}
