use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::error::Result;
use super::trie::Trie;

/// Extension of a trie saved by [`Trie::save_to_file`]
pub const TRIE_EXTENSION: &str = "bin";

/// Reads a word list with any number of words per line. Words are lower
/// cased, anything shorter than two characters is dropped.
pub fn read_word_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        for word in line.split_whitespace() {
            let word = word.to_lowercase();
            if word.chars().count() < 2 {
                continue;
            }
            words.push(word);
        }
    }
    Ok(words)
}

/// Builds a trie from a word list file
pub fn build_from_word_file<P: AsRef<Path>>(path: P) -> Result<Trie> {
    let words = read_word_file(path.as_ref())?;
    let mut trie = Trie::new();
    let added = trie.insert_all(&words);
    log::info!(
        "built dictionary from {}: {} words, {} skipped",
        path.as_ref().display(),
        added,
        words.len() - added
    );
    Ok(trie)
}

/// Loads a dictionary, either a saved trie (`.bin`) or a plain word list
pub fn load<P: AsRef<Path>>(path: P) -> Result<Trie> {
    let path = path.as_ref();
    let is_trie = path
        .extension()
        .map_or(false, |ext| ext == TRIE_EXTENSION);
    if is_trie {
        let trie = Trie::load_from_file(path)?;
        log::info!("loaded dictionary from {}", path.display());
        if trie.is_empty() {
            log::warn!("dictionary {} is empty", path.display());
        }
        Ok(trie)
    } else {
        build_from_word_file(path)
    }
}

/// Turns a word list into a saved trie, returning the trie that was written
pub fn make<P: AsRef<Path>, Q: AsRef<Path>>(words_file: P, out_file: Q) -> Result<Trie> {
    let trie = build_from_word_file(words_file)?;
    trie.save_to_file(out_file.as_ref())?;
    log::info!("saved dictionary to {}", out_file.as_ref().display());
    Ok(trie)
}
