//! Screen state machine of the terminal trainer
//!
//! Screens:
//! - Menu: active book, entry points, hard-word count over all books
//! - Lessons: lesson titles with word counts
//! - List: words of the open collection
//! - Viewer: one card at a time
//! - Game: pair-matching tiles over the open collection

use std::io::Write;

use vocab_core::{
    AppContext, BrickMatch, CurrentCard, Direction, KeyValueStore, PickOutcome, WordSource,
};

use crate::commands::{Command, HELP};
use crate::error::CliResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Lessons,
    List,
    Viewer,
    Game,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Names of the two card sides, used in the direction badge
#[derive(Clone, Debug)]
pub struct Labels {
    pub front: String,
    pub back: String,
}

pub struct Shell<W, S> {
    app: AppContext<W, S>,
    screen: Screen,
    game: Option<BrickMatch>,
    labels: Labels,
    notice: Option<String>,
}

impl<W: WordSource, S: KeyValueStore> Shell<W, S> {
    pub fn new(app: AppContext<W, S>, labels: Labels) -> Self {
        Self {
            app,
            screen: Screen::Menu,
            game: None,
            labels,
            notice: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn app(&self) -> &AppContext<W, S> {
        &self.app
    }

    /// Message shown under the next render
    pub fn notify(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    // ====== Commands ======

    pub fn handle(&mut self, command: Command) -> Flow {
        self.notice = None;
        tracing::debug!(?command, screen = ?self.screen, "command");

        match command {
            Command::Quit => return Flow::Quit,
            Command::Help => self.notify(HELP),
            Command::Books => {
                let listing = self.book_listing();
                self.notify(listing);
            }
            Command::Book(id) => self.select_book(&id),
            Command::Menu => self.screen = Screen::Menu,
            Command::Lessons => self.screen = Screen::Lessons,
            Command::Lesson(arg) => self.open_lesson(&arg),
            Command::List => {
                if self.app.session().collection().is_some() {
                    self.screen = Screen::List;
                } else {
                    self.notify("No lesson is open. Use `lesson <n>`.");
                }
            }
            Command::Start => {
                if self.app.session().collection().is_some() {
                    self.app.session_mut().rewind();
                    self.screen = Screen::Viewer;
                } else {
                    self.notify("No lesson is open. Use `lesson <n>`.");
                }
            }
            Command::All => {
                self.app.play_all();
                self.screen = Screen::Viewer;
            }
            Command::HardWords => {
                if self.app.hard_count() == 0 {
                    self.notify("No hard words yet. Mark cards with `hard`.");
                } else {
                    self.app.play_hard();
                    self.screen = Screen::Viewer;
                }
            }
            Command::Next
            | Command::Previous
            | Command::Reveal
            | Command::Tap
            | Command::Direction
            | Command::Hard
            | Command::Shuffle => self.card_command(command),
            Command::Game => {
                self.game = self.app.start_game();
                self.screen = Screen::Game;
            }
            Command::Pick(n) => self.pick(n),
            Command::Restart => {
                let in_game = self.screen == Screen::Game;
                match self.game.as_mut().filter(|_| in_game) {
                    Some(game) => game.restart(),
                    None => self.notify("No game in progress. Use `game`."),
                }
            }
            Command::Back => self.back(),
            Command::Unknown(line) => {
                self.notify(format!("Unknown command `{line}`. Type `help`."));
            }
        }
        Flow::Continue
    }

    fn select_book(&mut self, id: &str) {
        self.game = None;
        self.screen = Screen::Menu;
        match self.app.select_book(id) {
            Ok(()) => {
                let title = self.app.active_book().title.clone();
                self.notify(format!("Switched to {title}."));
            }
            Err(err) => self.notify(format!("Failed to load book {id}: {err}")),
        }
    }

    /// Exact lesson id first, then 1-based position
    fn open_lesson(&mut self, arg: &str) {
        let book = self.app.active_book();
        let index = book.lesson_position(arg).or_else(|| {
            arg.parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .filter(|&index| index < book.lessons.len())
        });

        match index {
            Some(index) => {
                self.app.open_lesson(index);
                self.screen = Screen::List;
            }
            None => self.notify(format!("No lesson `{arg}` in this book.")),
        }
    }

    fn card_command(&mut self, command: Command) {
        if self.screen != Screen::Viewer {
            self.notify("Card commands work in the card viewer. Try `all` or `start`.");
            return;
        }

        if command == Command::Hard {
            match self.app.toggle_hard() {
                Some(true) => self.notify("★ Added to hard words."),
                Some(false) => self.notify("Removed from hard words."),
                None => {}
            }
            return;
        }

        let session = self.app.session_mut();
        match command {
            Command::Next => session.next(),
            Command::Previous => session.previous(),
            Command::Reveal => session.reveal(),
            Command::Tap => session.tap(),
            Command::Direction => session.toggle_direction(),
            Command::Shuffle => session.shuffle(),
            _ => {}
        }
    }

    fn pick(&mut self, n: usize) {
        let in_game = self.screen == Screen::Game;
        let Some(game) = self.game.as_mut().filter(|_| in_game) else {
            self.notify("No game in progress. Use `game`.");
            return;
        };

        match game.pick(n.checked_sub(1).unwrap_or(usize::MAX)) {
            PickOutcome::Matched { .. } => self.notify("Pair!"),
            PickOutcome::Won => self.notify("Done! All pairs found."),
            PickOutcome::Mismatch => self.notify("Not a pair."),
            PickOutcome::Selected | PickOutcome::Ignored => {}
        }
    }

    fn back(&mut self) {
        self.screen = match self.screen {
            Screen::Viewer => Screen::List,
            Screen::List => {
                self.app.close_collection();
                Screen::Lessons
            }
            Screen::Lessons | Screen::Menu => Screen::Menu,
            Screen::Game => {
                self.game = None;
                Screen::Menu
            }
        };
    }

    fn book_listing(&self) -> String {
        let active = &self.app.active_book().id;
        let mut lines = vec!["Books:".to_string()];
        lines.extend(self.app.books().iter().map(|book| {
            let marker = if &book.id == active { '*' } else { ' ' };
            format!(" {marker} {:<6} {}", book.id, book.title)
        }));
        if lines.len() == 1 {
            lines.push("  (none)".to_string());
        }
        lines.join("\n")
    }

    // ====== Rendering ======

    pub fn render<O: Write>(&self, out: &mut O) -> CliResult<()> {
        match self.screen {
            Screen::Menu => self.render_menu(out)?,
            Screen::Lessons => self.render_lessons(out)?,
            Screen::List => self.render_list(out)?,
            Screen::Viewer => self.render_viewer(out)?,
            Screen::Game => self.render_game(out)?,
        }
        if let Some(notice) = &self.notice {
            writeln!(out)?;
            writeln!(out, "{notice}")?;
        }
        Ok(())
    }

    fn render_menu<O: Write>(&self, out: &mut O) -> CliResult<()> {
        let book = self.app.active_book();
        writeln!(out, "== Vocab Trainer · menu ==")?;
        writeln!(out, "Book: {} [{}]", book.title, book.id)?;
        writeln!(out, "  lessons     choose a lesson ({})", book.lessons.len())?;
        writeln!(out, "  all         all words ({})", book.word_count())?;
        writeln!(out, "  hardwords   hard words ({})", self.app.hard_count())?;
        writeln!(out, "  books       other books")?;
        Ok(())
    }

    fn render_lessons<O: Write>(&self, out: &mut O) -> CliResult<()> {
        let lessons = self.app.lessons();
        writeln!(out, "== lessons ==")?;
        writeln!(out, "Lessons: {}", lessons.len())?;
        for (i, lesson) in lessons.iter().enumerate() {
            writeln!(out, "  {:>2}. {} ({} words)", i + 1, lesson.title, lesson.words.len())?;
        }
        Ok(())
    }

    fn render_list<O: Write>(&self, out: &mut O) -> CliResult<()> {
        writeln!(out, "== list ==")?;
        let Some(collection) = self.app.session().collection() else {
            writeln!(out, "No words.")?;
            return Ok(());
        };

        writeln!(out, "{} · {} words", collection.title(), collection.len())?;
        if collection.is_empty() {
            writeln!(out, "No words.")?;
        }
        for pair in collection.words() {
            writeln!(out, "  {} - {}", pair.front, pair.back)?;
        }
        writeln!(out, "`start` to check yourself")?;
        Ok(())
    }

    fn render_viewer<O: Write>(&self, out: &mut O) -> CliResult<()> {
        let session = self.app.session();
        let title = session.collection().map(|c| c.title()).unwrap_or_default();
        let hard = if self.app.is_current_hard() { " ★" } else { "" };

        writeln!(out, "== cards ==")?;
        writeln!(out, "{title}  [{}]{hard}", self.direction_badge(session.direction()))?;

        match session.current_card() {
            CurrentCard::Empty => {
                writeln!(out, "  No words")?;
                writeln!(out, "  0 / 0")?;
            }
            CurrentCard::Card(card) => {
                writeln!(out, "  {} / {}", card.position, card.total)?;
                writeln!(out, "  {}", card.front)?;
                if card.revealed {
                    writeln!(out, "  {}", card.back)?;
                } else {
                    writeln!(out, "  ? (reveal with `r`)")?;
                }
            }
        }
        Ok(())
    }

    fn render_game<O: Write>(&self, out: &mut O) -> CliResult<()> {
        writeln!(out, "== game ==")?;
        let game = match &self.game {
            Some(game) if !game.is_empty() => game,
            _ => {
                writeln!(out, "The list is empty. Pick a lesson first.")?;
                return Ok(());
            }
        };

        writeln!(
            out,
            "Pair wall · {} pairs · {}↔{}",
            game.pairs().len(),
            self.labels.front,
            self.labels.back
        )?;
        writeln!(out, "Left: {}", game.remaining_pairs())?;
        for (i, tile) in game.tiles().iter().enumerate() {
            if tile.matched {
                writeln!(out, "  {:>2}.", i + 1)?;
            } else if game.selected() == Some(i) {
                writeln!(out, "  {:>2}. [{}]", i + 1, tile.text)?;
            } else {
                writeln!(out, "  {:>2}. {}", i + 1, tile.text)?;
            }
        }
        if game.is_won() {
            writeln!(out, "Done! All pairs found.")?;
        }
        Ok(())
    }

    fn direction_badge(&self, direction: Direction) -> String {
        let Labels { front, back } = &self.labels;
        match direction {
            Direction::FrontToBack => format!("{front}→{back}"),
            Direction::BackToFront => format!("{back}→{front}"),
        }
    }
}
