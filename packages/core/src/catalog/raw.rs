//! Wire shapes of `words.json` and their conversion into the word store

use serde::Deserialize;
use serde_json::Value;

use super::{LoadError, LoadResult};
use crate::types::{Book, Lesson, WordPair};

#[derive(Debug, Deserialize)]
pub(super) struct RawCatalog {
    pub books: Vec<RawBook>,
}

/// Ids and titles appear both as strings and as numbers
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum RawText {
    Text(String),
    Number(serde_json::Number),
}

impl RawText {
    fn into_string(self) -> String {
        match self {
            RawText::Text(text) => text,
            RawText::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct RawBook {
    id: RawText,
    #[serde(default)]
    title: Option<RawText>,
    #[serde(default)]
    lessons: Option<Vec<RawLesson>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawLesson {
    #[serde(default)]
    id: Option<RawText>,
    #[serde(default)]
    title: Option<RawText>,
    #[serde(default)]
    words: Value,
}

impl RawBook {
    pub fn into_book(self) -> LoadResult<Book> {
        let id = self.id.into_string();
        let title = non_blank(self.title).unwrap_or_else(|| format!("Book {id}"));
        let lessons = self
            .lessons
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, lesson)| lesson.into_lesson(&id, index))
            .collect::<LoadResult<Vec<_>>>()?;

        Ok(Book { id, title, lessons })
    }
}

impl RawLesson {
    fn into_lesson(self, book_id: &str, position: usize) -> LoadResult<Lesson> {
        let id = self
            .id
            .map(RawText::into_string)
            .unwrap_or_else(|| Lesson::positional_id(position));
        let title = non_blank(self.title).unwrap_or_else(|| format!("Lesson {}", position + 1));

        let words = match self.words {
            Value::Array(entries) => entries
                .into_iter()
                .enumerate()
                .map(|(index, entry)| {
                    parse_pair(entry).ok_or_else(|| LoadError::MalformedWord {
                        book: book_id.to_string(),
                        lesson: id.clone(),
                        index,
                    })
                })
                .collect::<LoadResult<Vec<_>>>()?,
            _ => Vec::new(),
        };

        Ok(Lesson { id, title, words })
    }
}

/// `[front, back]` with both sides non-blank
fn parse_pair(entry: Value) -> Option<WordPair> {
    let Value::Array(sides) = entry else {
        return None;
    };
    match sides.as_slice() {
        [Value::String(front), Value::String(back)]
            if !front.trim().is_empty() && !back.trim().is_empty() =>
        {
            Some(WordPair::new(front.as_str(), back.as_str()))
        }
        _ => None,
    }
}

fn non_blank(value: Option<RawText>) -> Option<String> {
    value
        .map(RawText::into_string)
        .filter(|text| !text.trim().is_empty())
}
