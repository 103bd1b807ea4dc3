//! Boggle solving: a trie keyed on boggle letters ("qu" is one letter), a
//! depth first board search driven by it, and a check of whether a word
//! can be spelled with the standard dice.

pub mod boggle;
pub mod utils;
