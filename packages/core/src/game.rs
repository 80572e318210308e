//! Brick Match
//!
//! Tile-matching mini-game over a snapshot of word pairs. Each pair becomes two
//! tiles (front side and back side) in shuffled order; the player picks two
//! tiles at a time and clears them when they belong to the same pair.
//!
//! The game only reads its snapshot; it never touches the session or the
//! hard-word set.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::types::WordPair;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Front,
    Back,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    /// Index of the pair this tile belongs to
    pub pair_id: usize,
    pub side: Side,
    pub text: String,
    pub matched: bool,
}

/// Result of picking a tile
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickOutcome {
    /// Tile out of range, already matched, or already selected
    Ignored,
    /// First tile of a pick
    Selected,
    /// Two tiles of the same pair cleared
    Matched { pair_id: usize },
    /// Last pair cleared
    Won,
    /// Two tiles that do not belong together; selection cleared
    Mismatch,
}

pub struct BrickMatch {
    pairs: Vec<WordPair>,
    tiles: Vec<Tile>,
    picked: Option<usize>,
    rng: ChaCha8Rng,
}

impl BrickMatch {
    pub fn start(pairs: Vec<WordPair>, seed: u64) -> Self {
        let mut game = Self {
            pairs,
            tiles: Vec::new(),
            picked: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        game.deal();
        game
    }

    fn deal(&mut self) {
        let mut tiles: Vec<Tile> = self
            .pairs
            .iter()
            .enumerate()
            .flat_map(|(pair_id, pair)| {
                [
                    Tile {
                        pair_id,
                        side: Side::Front,
                        text: pair.front.clone(),
                        matched: false,
                    },
                    Tile {
                        pair_id,
                        side: Side::Back,
                        text: pair.back.clone(),
                        matched: false,
                    },
                ]
            })
            .collect();
        tiles.shuffle(&mut self.rng);

        self.tiles = tiles;
        self.picked = None;
        tracing::debug!(pairs = self.pairs.len(), "brick match dealt");
    }

    /// Same pairs, fresh shuffle, nothing matched
    pub fn restart(&mut self) {
        if self.pairs.is_empty() {
            return;
        }
        self.deal();
    }

    pub fn pick(&mut self, index: usize) -> PickOutcome {
        match self.tiles.get(index) {
            None => return PickOutcome::Ignored,
            Some(tile) if tile.matched => return PickOutcome::Ignored,
            Some(_) => {}
        }

        let Some(first) = self.picked else {
            self.picked = Some(index);
            return PickOutcome::Selected;
        };
        if first == index {
            return PickOutcome::Ignored;
        }

        self.picked = None;
        let (a, b) = (&self.tiles[first], &self.tiles[index]);
        if a.pair_id != b.pair_id || a.side == b.side {
            return PickOutcome::Mismatch;
        }

        let pair_id = a.pair_id;
        self.tiles[first].matched = true;
        self.tiles[index].matched = true;

        if self.remaining_pairs() == 0 {
            PickOutcome::Won
        } else {
            PickOutcome::Matched { pair_id }
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn pairs(&self) -> &[WordPair] {
        &self.pairs
    }

    pub fn selected(&self) -> Option<usize> {
        self.picked
    }

    pub fn remaining_pairs(&self) -> usize {
        self.tiles.iter().filter(|tile| !tile.matched).count() / 2
    }

    pub fn is_won(&self) -> bool {
        !self.tiles.is_empty() && self.remaining_pairs() == 0
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
