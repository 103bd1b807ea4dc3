pub mod board;
pub mod dice;
pub mod dice_search;
pub mod dictionary;
pub mod error;
pub mod letter;
pub mod trie;
pub mod word_search;

pub use self::error::{BoggleError, Result};

pub const DEFAULT_BOARD_SIZE: usize = 4;
pub const MIN_BOARD_SIZE: usize = 2;
/// Shortest reportable word, counted in boggle letters
pub const MIN_WORD_LENGTH: usize = 3;
