use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{BoggleError, Result};

/// A single symbol on a die face, board cell or trie edge. The digraph
/// "qu" is always one letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Letter {
    Single(char),
    Qu,
}

impl Letter {
    /// Builds a letter from a die face literal. Faces are either one ASCII
    /// letter or the two byte "qu".
    pub const fn from_face(face: &'static str) -> Letter {
        let bytes = face.as_bytes();
        if bytes.len() == 2 {
            Letter::Qu
        } else {
            Letter::Single(bytes[0] as char)
        }
    }

    /// Appends the letter's text to a word being built
    pub fn push_to(&self, word: &mut String) {
        match self {
            Self::Single(c) => word.push(*c),
            Self::Qu => word.push_str("qu"),
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(c) => write!(f, "{}", c),
            Self::Qu => write!(f, "qu"),
        }
    }
}

/// Lazy normalizer produced by [`normalize`]. Stops for good after the
/// first error.
#[derive(Debug, Clone)]
pub struct BoggleChars<I> {
    chars: I,
    position: usize,
    failed: bool,
}

impl<I: Iterator<Item = char>> Iterator for BoggleChars<I> {
    type Item = Result<Letter>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let c = self.chars.next()?;
        let position = self.position;
        self.position += 1;
        if c != 'q' {
            return Some(Ok(Letter::Single(c)));
        }

        // A 'q' always swallows the next character, even when it is not a 'u'
        let following = self.chars.next();
        self.position += 1;
        match following {
            Some('u') => Some(Ok(Letter::Qu)),
            _ => {
                self.failed = true;
                Some(Err(BoggleError::InvalidLetterSequence { position }))
            }
        }
    }
}

/// Turns lower-cased alphabetic text into boggle letters, fusing "qu".
pub fn normalize<I: IntoIterator<Item = char>>(chars: I) -> BoggleChars<I::IntoIter> {
    BoggleChars {
        chars: chars.into_iter(),
        position: 0,
        failed: false,
    }
}

/// Normalizes a whole word up front, so nothing is consumed on failure
pub fn normalize_word(word: &str) -> Result<Vec<Letter>> {
    normalize(word.chars()).collect()
}

/// Joins raw user input, lower-cases it and drops anything that is not a letter
pub fn clean_letters<S: AsRef<str>>(raw: &[S]) -> String {
    raw.iter()
        .flat_map(|part| part.as_ref().chars())
        .filter(|c| c.is_alphabetic())
        .flat_map(|c| c.to_lowercase())
        .collect()
}
