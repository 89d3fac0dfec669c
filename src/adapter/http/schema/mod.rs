pub mod education;
pub mod experience;
pub mod profile;

use serde::Deserialize;

/// Story text accepted either as one block or as an ordered paragraph list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StoryField {
    Text(String),
    Paragraphs(Vec<String>),
}

impl StoryField {
    pub fn into_paragraphs(self) -> Vec<String> {
        match self {
            StoryField::Text(text) => vec![text],
            StoryField::Paragraphs(paragraphs) => paragraphs,
        }
    }
}

/// Child-entry id as the client sends it: a number, or the stringified form
/// this API returns. Anything that does not parse to an integer counts as
/// "no id", which makes the entry a create.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EntryId {
    Number(i64),
    Text(String),
}

impl EntryId {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            EntryId::Number(n) => Some(*n),
            EntryId::Text(s) => s.parse().ok(),
        }
    }
}
