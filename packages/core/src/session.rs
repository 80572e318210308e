//! Session Model
//!
//! State machine over one open [`WordCollection`]:
//! - `order` is always a permutation of `0..len`
//! - `cursor` indexes `order` and stays in range whenever the collection is non-empty
//! - `revealed` goes back to `false` on every cursor move and direction change
//! - shuffling permutes `order` only; `words` and `origin` never move
//!
//! Every operation is total. An empty or missing collection is a state, reported
//! through [`CurrentCard::Empty`], never an error.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::bookmark::BookmarkKey;
use crate::collection::WordCollection;
use crate::hard_set::HardSet;
use crate::store::KeyValueStore;
use crate::types::{Direction, WordPair};

// ==================== Card View ====================

/// The card under the cursor, oriented by direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardView<'a> {
    /// Side shown first
    pub front: &'a str,
    /// Side revealed on demand
    pub back: &'a str,
    pub revealed: bool,
    /// 1-based position in display order
    pub position: usize,
    pub total: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurrentCard<'a> {
    /// No collection open, or the open collection has no words
    Empty,
    Card(CardView<'a>),
}

impl<'a> CurrentCard<'a> {
    pub fn is_empty(&self) -> bool {
        matches!(self, CurrentCard::Empty)
    }

    pub fn card(self) -> Option<CardView<'a>> {
        match self {
            CurrentCard::Card(card) => Some(card),
            CurrentCard::Empty => None,
        }
    }
}

// ==================== Session Model ====================

pub struct SessionModel {
    collection: Option<WordCollection>,
    order: Vec<usize>,
    cursor: usize,
    revealed: bool,
    direction: Direction,
    rng: ChaCha8Rng,
}

impl SessionModel {
    /// Session whose shuffles are seeded from the clock
    pub fn new() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42);
        Self::with_seed(seed)
    }

    /// Session with reproducible shuffles
    pub fn with_seed(seed: u64) -> Self {
        Self {
            collection: None,
            order: Vec::new(),
            cursor: 0,
            revealed: false,
            direction: Direction::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    // ---------- transitions ----------

    /// Replaces the active collection. Direction carries over.
    pub fn open_collection(&mut self, collection: WordCollection) -> &WordCollection {
        tracing::debug!(
            collection = %collection.id(),
            book = %collection.book_id(),
            words = collection.len(),
            "collection opened"
        );
        self.order = (0..collection.len()).collect();
        self.cursor = 0;
        self.revealed = false;
        self.collection.insert(collection)
    }

    /// Drops the active collection
    pub fn close(&mut self) {
        self.collection = None;
        self.order.clear();
        self.cursor = 0;
        self.revealed = false;
    }

    pub fn next(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % len;
        self.revealed = false;
    }

    pub fn previous(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor + len - 1) % len;
        self.revealed = false;
    }

    pub fn reveal(&mut self) {
        if self.len() == 0 {
            return;
        }
        self.revealed = true;
    }

    /// Reveals a hidden card, otherwise moves on
    pub fn tap(&mut self) {
        if self.revealed {
            self.next();
        } else {
            self.reveal();
        }
    }

    pub fn toggle_direction(&mut self) {
        self.direction = self.direction.toggled();
        self.revealed = false;
    }

    /// New uniform permutation of the display order, back to the first card
    pub fn shuffle(&mut self) {
        if self.collection.is_none() {
            return;
        }
        self.order.shuffle(&mut self.rng);
        self.cursor = 0;
        self.revealed = false;
        tracing::debug!(words = self.order.len(), "display order shuffled");
    }

    /// Back to the first card, keeping the current order
    pub fn rewind(&mut self) {
        self.cursor = 0;
        self.revealed = false;
    }

    // ---------- queries ----------

    pub fn current_card(&self) -> CurrentCard<'_> {
        match self.current_index().zip(self.collection.as_ref()) {
            Some((index, collection)) => {
                let (front, back) = self.direction.orient(&collection.words()[index]);
                CurrentCard::Card(CardView {
                    front,
                    back,
                    revealed: self.revealed,
                    position: self.cursor + 1,
                    total: collection.len(),
                })
            }
            None => CurrentCard::Empty,
        }
    }

    pub fn current_bookmark_key(&self) -> Option<BookmarkKey> {
        let index = self.current_index()?;
        self.collection.as_ref()?.bookmark_key(index)
    }

    /// Flips the current card's hard-word membership.
    ///
    /// Returns the new membership, or `None` when there is no card.
    pub fn toggle_hard<S: KeyValueStore>(&self, hard_set: &mut HardSet<S>) -> Option<bool> {
        let key = self.current_bookmark_key()?;
        let now_hard = hard_set.toggle(key.clone());
        tracing::debug!(key = %key, hard = now_hard, "hard-word toggled");
        Some(now_hard)
    }

    pub fn is_current_hard<S: KeyValueStore>(&self, hard_set: &HardSet<S>) -> bool {
        self.current_bookmark_key()
            .map(|key| hard_set.contains(&key))
            .unwrap_or(false)
    }

    /// `(position, total)`, `(0, 0)` when there is no card
    pub fn progress(&self) -> (usize, usize) {
        match self.len() {
            0 => (0, 0),
            len => (self.cursor + 1, len),
        }
    }

    /// Word pairs of the open collection in source order, for the mini-game
    pub fn game_words(&self) -> Option<Vec<WordPair>> {
        self.collection
            .as_ref()
            .filter(|collection| !collection.is_empty())
            .map(|collection| collection.words().to_vec())
    }

    pub fn collection(&self) -> Option<&WordCollection> {
        self.collection.as_ref()
    }

    pub fn display_order(&self) -> &[usize] {
        &self.order
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.collection.as_ref().map_or(0, WordCollection::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index into `words` of the card under the cursor
    fn current_index(&self) -> Option<usize> {
        if self.len() == 0 {
            return None;
        }
        debug_assert!(self.cursor < self.order.len());
        self.order.get(self.cursor).copied()
    }
}

impl Default for SessionModel {
    fn default() -> Self {
        Self::new()
    }
}

// ==================== Unit Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::CollectionSource;
    use crate::store::MemoryStore;
    use crate::types::{Book, Lesson};

    fn book() -> Book {
        Book::new(
            "1",
            "Book 1",
            vec![
                Lesson::new(
                    "L1",
                    "Animals",
                    vec![WordPair::new("cat", "кот"), WordPair::new("dog", "пёс")],
                ),
                Lesson::new("L2", "Empty", vec![]),
            ],
        )
    }

    fn open(source: CollectionSource) -> (SessionModel, HardSet<MemoryStore>) {
        let hard = HardSet::load(MemoryStore::new());
        let mut session = SessionModel::with_seed(42);
        session.open_collection(WordCollection::build(&source, &book(), &hard));
        (session, hard)
    }

    fn faces(session: &SessionModel) -> (String, String) {
        let card = session.current_card().card().expect("card");
        (card.front.to_string(), card.back.to_string())
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = SessionModel::with_seed(1);
        assert!(session.current_card().is_empty());
        assert!(session.current_bookmark_key().is_none());
        assert_eq!(session.progress(), (0, 0));
        assert!(session.game_words().is_none());
    }

    #[test]
    fn test_open_resets_cursor_and_reveal() {
        let (mut session, hard) = open(CollectionSource::lesson(0));
        session.next();
        session.reveal();
        session.open_collection(WordCollection::build(&CollectionSource::AllWords, &book(), &hard));
        assert_eq!(session.cursor(), 0);
        assert!(!session.is_revealed());
        assert_eq!(session.display_order(), &[0, 1]);
    }

    #[test]
    fn test_navigation_wraps() {
        let (mut session, _) = open(CollectionSource::lesson(0));
        assert_eq!(faces(&session), ("cat".into(), "кот".into()));
        session.next();
        assert_eq!(faces(&session), ("dog".into(), "пёс".into()));
        session.next();
        assert_eq!(faces(&session), ("cat".into(), "кот".into()));
        session.previous();
        assert_eq!(faces(&session), ("dog".into(), "пёс".into()));
    }

    #[test]
    fn test_moves_hide_the_card() {
        let (mut session, _) = open(CollectionSource::lesson(0));
        session.reveal();
        session.reveal();
        assert!(session.is_revealed());
        session.next();
        assert!(!session.is_revealed());
        session.reveal();
        session.previous();
        assert!(!session.is_revealed());
    }

    #[test]
    fn test_direction_swaps_and_persists_across_collections() {
        let (mut session, hard) = open(CollectionSource::lesson(0));
        session.reveal();
        session.toggle_direction();
        assert!(!session.is_revealed());
        assert_eq!(faces(&session), ("кот".into(), "cat".into()));

        session.open_collection(WordCollection::build(&CollectionSource::AllWords, &book(), &hard));
        assert_eq!(session.direction(), Direction::BackToFront);

        session.toggle_direction();
        assert_eq!(faces(&session), ("cat".into(), "кот".into()));
    }

    #[test]
    fn test_empty_collection_is_inert() {
        let (mut session, mut hard) = open(CollectionSource::lesson(1));
        session.next();
        session.previous();
        session.reveal();
        session.shuffle();
        session.tap();
        assert!(!session.is_revealed());
        assert_eq!(session.cursor(), 0);
        assert!(session.current_card().is_empty());
        assert_eq!(session.toggle_hard(&mut hard), None);
        assert!(hard.is_empty());
        assert!(session.game_words().is_none());
    }

    #[test]
    fn test_tap_reveals_then_advances() {
        let (mut session, _) = open(CollectionSource::lesson(0));
        session.tap();
        assert!(session.is_revealed());
        assert_eq!(session.cursor(), 0);
        session.tap();
        assert!(!session.is_revealed());
        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn test_shuffle_keeps_words_and_origin() {
        let (mut session, _) = open(CollectionSource::AllWords);
        let before = session.collection().cloned();
        session.next();
        session.reveal();
        session.shuffle();

        assert_eq!(session.cursor(), 0);
        assert!(!session.is_revealed());
        assert_eq!(session.collection().cloned(), before);

        let mut order = session.display_order().to_vec();
        order.sort_unstable();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_bookmark_key_follows_display_order() {
        let (mut session, _) = open(CollectionSource::lesson(0));
        session.shuffle();
        for _ in 0..session.len() {
            let index = session.display_order()[session.cursor()];
            assert_eq!(
                session.current_bookmark_key(),
                Some(BookmarkKey::new("1", "L1", index))
            );
            session.next();
        }
    }

    #[test]
    fn test_toggle_hard_round_trip() {
        let (session, mut hard) = open(CollectionSource::lesson(0));
        assert_eq!(session.toggle_hard(&mut hard), Some(true));
        assert!(session.is_current_hard(&hard));
        assert!(hard.contains(&BookmarkKey::new("1", "L1", 0)));
        assert_eq!(session.toggle_hard(&mut hard), Some(false));
        assert!(!session.is_current_hard(&hard));
        assert!(hard.is_empty());
    }

    #[test]
    fn test_toggle_hard_keeps_reveal() {
        let (mut session, mut hard) = open(CollectionSource::lesson(0));
        session.reveal();
        session.toggle_hard(&mut hard);
        assert!(session.is_revealed());
    }

    #[test]
    fn test_rewind_keeps_order() {
        let (mut session, _) = open(CollectionSource::AllWords);
        session.shuffle();
        let order = session.display_order().to_vec();
        session.next();
        session.reveal();
        session.rewind();
        assert_eq!(session.cursor(), 0);
        assert!(!session.is_revealed());
        assert_eq!(session.display_order(), order.as_slice());
    }

    #[test]
    fn test_close_and_progress() {
        let (mut session, _) = open(CollectionSource::lesson(0));
        session.next();
        assert_eq!(session.progress(), (2, 2));
        assert_eq!(
            session.game_words(),
            Some(vec![WordPair::new("cat", "кот"), WordPair::new("dog", "пёс")])
        );
        session.close();
        assert!(session.collection().is_none());
        assert_eq!(session.progress(), (0, 0));
        assert!(session.current_card().is_empty());
    }
}
