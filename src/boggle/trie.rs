use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::Result;
use super::letter::{normalize_word, Letter};
use crate::utils::serialization;

/// Prefix tree node
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieNode {
    next: HashMap<Letter, TrieNode>,
    terminal: bool,
}

impl TrieNode {
    pub fn next_node(&self, letter: Letter) -> Option<&TrieNode> {
        self.next.get(&letter)
    }

    /// True when a dictionary word ends at this node
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn children(&self) -> impl Iterator<Item = (Letter, &TrieNode)> {
        self.next.iter().map(|(&l, node)| (l, node))
    }

    fn add_letters(&mut self, letters: &[Letter]) {
        let mut node = self;
        for &letter in letters {
            node = node.next.entry(letter).or_default();
        }
        node.terminal = true;
    }
}

/// Dictionary of boggle words. Built once and then only read, so a single
/// instance can be shared by reference between any number of searches.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        trie.insert_all(words);
        trie
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Adds a word. Words with a 'q' that is not followed by a 'u' are
    /// skipped and leave the trie untouched. Returns whether the word was added.
    pub fn insert(&mut self, word: &str) -> bool {
        // Normalize the whole word before touching any node
        match normalize_word(word) {
            Ok(letters) => {
                self.root.add_letters(&letters);
                true
            }
            Err(e) => {
                log::trace!("skipping {:?}: {}", word, e);
                false
            }
        }
    }

    /// Inserts every word, returning how many were accepted
    pub fn insert_all<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .filter(|w| self.insert(w.as_ref()))
            .count()
    }

    /// Walks the trie along a raw word
    pub fn node(&self, word: &str) -> Option<&TrieNode> {
        let letters = normalize_word(word).ok()?;
        letters
            .iter()
            .try_fold(&self.root, |node, &letter| node.next_node(letter))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.node(word).map_or(false, TrieNode::is_terminal)
    }

    /// Checks whether any stored word begins with the prefix
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.node(prefix).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.root.next.is_empty()
    }

    /// Number of stored words
    pub fn len(&self) -> usize {
        self.words().count()
    }

    /// Lazily enumerates every stored word, depth first
    pub fn words(&self) -> Words<'_> {
        Words {
            stack: vec![(&self.root, String::new())],
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        serialization::serialize_bytes(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        serialization::deserialize_bytes(bytes)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        serialization::save_to_disk(self, path)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        serialization::load_from_disk(path)
    }
}

/// Iterator returned by [`Trie::words`]
pub struct Words<'a> {
    stack: Vec<(&'a TrieNode, String)>,
}

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, prefix)) = self.stack.pop() {
            for (letter, child) in node.children() {
                let mut word = prefix.clone();
                letter.push_to(&mut word);
                self.stack.push((child, word));
            }
            if node.terminal {
                return Some(prefix);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trie {
        Trie::from_words([
            "hello", "world", "hi", "her", "hero", "heros", "quiet", "disqualify",
        ])
    }

    #[test]
    fn test_contains() {
        let trie = sample();
        for w in ["hello", "her", "hero", "heros", "world", "quiet", "disqualify"] {
            assert!(trie.contains(w), "{} should be present", w);
        }
        // Prefixes that were never inserted
        assert!(!trie.contains("he"));
        assert!(!trie.contains("hell"));
        assert!(!trie.contains("qui"));
        assert!(!trie.contains("missing"));
        assert!(!trie.contains(""));
    }

    #[test]
    fn test_starts_with() {
        let trie = sample();
        assert!(trie.starts_with("he"));
        assert!(trie.starts_with("disqu"));
        assert!(trie.starts_with(""));
        assert!(!trie.starts_with("x"));
        assert!(!trie.starts_with("disq"));
    }

    #[test]
    fn test_qu_is_one_level() {
        let trie = sample();
        let qu = trie.root().next_node(Letter::Qu).unwrap();
        assert!(qu.next_node(Letter::Single('i')).is_some());
        assert!(trie.root().next_node(Letter::Single('q')).is_none());
    }

    #[test]
    fn test_lonely_q_leaves_trie_untouched() {
        let mut trie = Trie::new();
        assert!(!trie.insert("qi"));
        assert!(trie.is_empty());

        let mut trie = sample();
        let before = trie.clone();
        assert!(!trie.insert("hellqo"));
        assert!(!trie.insert("iraq"));
        assert_eq!(trie, before);
    }

    #[test]
    fn test_insert_all_counts_accepted() {
        let mut trie = Trie::new();
        let added = trie.insert_all(["cat", "qat", "dog", "quote"]);
        assert_eq!(added, 3);
        assert!(trie.contains("dog"));
        assert!(!trie.contains("qat"));
    }

    #[test]
    fn test_empty() {
        let mut trie = Trie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.words().count(), 0);
        trie.insert("a");
        assert!(!trie.is_empty());
    }

    #[test]
    fn test_words() {
        let trie = sample();
        let mut words = trie.words().collect::<Vec<_>>();
        words.sort();
        assert_eq!(
            words,
            vec!["disqualify", "hello", "her", "hero", "heros", "hi", "quiet", "world"]
        );
        // Enumeration can be repeated
        assert_eq!(trie.words().count(), 8);
        assert_eq!(trie.len(), 8);
    }

    #[test]
    fn test_duplicate_insert() {
        let mut trie = Trie::new();
        trie.insert("toes");
        trie.insert("toes");
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_round_trip_bytes() {
        let trie = sample();
        let bytes = trie.to_bytes().unwrap();
        let loaded = Trie::from_bytes(&bytes).unwrap();
        assert_eq!(loaded, trie);
        for w in trie.words() {
            assert!(loaded.contains(&w));
        }
        for w in ["he", "worlds", "quie", "zebra"] {
            assert!(!loaded.contains(w));
        }
    }

    #[test]
    fn test_round_trip_file() {
        let trie = sample();
        let path = std::env::temp_dir().join(format!("boggle-trie-{}.bin", std::process::id()));
        trie.save_to_file(&path).unwrap();
        let loaded = Trie::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, trie);
    }

    #[test]
    fn test_bad_bytes() {
        assert!(Trie::from_bytes(&[0xff, 0xff, 0xff]).is_err());
    }
}
