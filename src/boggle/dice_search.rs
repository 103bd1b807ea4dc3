//! Checks whether a word could ever appear on a board rolled from a given
//! set of dice, ignoring adjacency. Each letter needs its own die with a
//! matching face, so this is a small assignment problem solved by
//! backtracking.

use super::dice::Die;
use super::letter::{normalize_word, Letter};

struct DiceAssigner<'a> {
    letters: &'a [Letter],
    dice: &'a [Die],
    used: Vec<bool>,
    /// Die chosen for each letter placed so far
    chosen: Vec<usize>,
}

impl<'a> DiceAssigner<'a> {
    fn assign(&mut self, pos: usize) -> bool {
        let letter = match self.letters.get(pos) {
            Some(&l) => l,
            None => return true,
        };

        for i in 0..self.dice.len() {
            if self.used[i] || !self.dice[i].contains(letter) {
                continue;
            }
            self.used[i] = true;
            self.chosen.push(i);
            if self.assign(pos + 1) {
                return true;
            }
            self.chosen.pop();
            self.used[i] = false;
        }
        false
    }
}

/// Finds a distinct die for every letter. Returns the index of the die used
/// for each letter, or None when no assignment exists.
pub fn assign_dice(letters: &[Letter], dice: &[Die]) -> Option<Vec<usize>> {
    if letters.len() > dice.len() {
        return None;
    }
    let mut assigner = DiceAssigner {
        letters,
        dice,
        used: vec![false; dice.len()],
        chosen: Vec::with_capacity(letters.len()),
    };
    if assigner.assign(0) {
        Some(assigner.chosen)
    } else {
        None
    }
}

/// Checks if the word can be spelled with the dice, one die per letter.
/// A word with a 'q' that is not followed by a 'u' is never formable.
pub fn is_formable(word: &str, dice: &[Die]) -> bool {
    let letters = match normalize_word(&word.to_lowercase()) {
        Ok(letters) => letters,
        Err(e) => {
            log::trace!("{:?} is not formable: {}", word, e);
            return false;
        }
    };
    let assignment = assign_dice(&letters, dice);
    log::trace!("dice for {:?}: {:?}", word, assignment);
    assignment.is_some()
}
