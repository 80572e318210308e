//! Line commands accepted by the shell

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Books,
    Book(String),
    Menu,
    Lessons,
    /// Lesson number (1-based) or lesson id
    Lesson(String),
    List,
    Start,
    All,
    HardWords,
    Next,
    Previous,
    Reveal,
    Tap,
    Direction,
    Hard,
    Shuffle,
    Game,
    /// Tile number as printed on the game screen
    Pick(usize),
    Restart,
    Back,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, arg) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match (word.to_ascii_lowercase().as_str(), arg) {
            ("", _) | ("next" | "n", "") => Command::Next,
            ("books", "") => Command::Books,
            ("book", id) if !id.is_empty() => Command::Book(id.to_string()),
            ("menu", "") => Command::Menu,
            ("lessons", "") => Command::Lessons,
            ("lesson", id) if !id.is_empty() => Command::Lesson(id.to_string()),
            ("list", "") => Command::List,
            ("start", "") => Command::Start,
            ("all", "") => Command::All,
            ("hardwords", "") => Command::HardWords,
            ("prev" | "p", "") => Command::Previous,
            ("reveal" | "r", "") => Command::Reveal,
            ("tap" | "t", "") => Command::Tap,
            ("dir" | "d", "") => Command::Direction,
            ("hard" | "h", "") => Command::Hard,
            ("shuffle" | "s", "") => Command::Shuffle,
            ("game", "") => Command::Game,
            ("pick", n) => match n.parse::<usize>() {
                Ok(n) if n > 0 => Command::Pick(n),
                _ => Command::Unknown(line.to_string()),
            },
            ("restart", "") => Command::Restart,
            ("back", "") => Command::Back,
            ("help" | "?", "") => Command::Help,
            ("quit" | "q" | "exit", "") => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        }
    }
}

pub const HELP: &str = "\
books            list books          book <id>      switch book
menu             main menu           lessons        lesson list
lesson <n|id>    open a lesson       list           words of the open lesson
start            check from card 1   all            every word of the book
hardwords        bookmarked words    game           pair-matching game
next|n|<enter>   next card           prev|p         previous card
reveal|r         show answer         tap|t          reveal, then next
dir|d            flip direction      hard|h         toggle bookmark
shuffle|s        shuffle cards       pick <n>       pick a game tile
restart          new game deal       back           previous screen
help             this text           quit|q         exit";
