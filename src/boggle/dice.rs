use rand::prelude::SliceRandom;
use rand::Rng;

use super::letter::Letter;

/// One six sided cube. Faces hold single letters except for the "qu" face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Die {
    faces: [Letter; 6],
}

impl Die {
    pub const fn new(faces: [&'static str; 6]) -> Self {
        Self {
            faces: [
                Letter::from_face(faces[0]),
                Letter::from_face(faces[1]),
                Letter::from_face(faces[2]),
                Letter::from_face(faces[3]),
                Letter::from_face(faces[4]),
                Letter::from_face(faces[5]),
            ],
        }
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.faces.contains(&letter)
    }

    /// Rolls the die and returns the face showing
    pub fn roll<R: Rng>(&self, rng: &mut R) -> Letter {
        self.faces[rng.gen_range(0..self.faces.len())]
    }
}

/// The sixteen cubes of a standard Boggle set
pub const STANDARD_DICE: [Die; 16] = [
    Die::new(["a", "e", "a", "n", "e", "g"]),
    Die::new(["w", "n", "g", "e", "e", "h"]),
    Die::new(["a", "h", "s", "p", "c", "o"]),
    Die::new(["l", "n", "h", "n", "r", "z"]),
    Die::new(["a", "s", "p", "f", "f", "k"]),
    Die::new(["t", "s", "t", "i", "y", "d"]),
    Die::new(["o", "b", "j", "o", "a", "b"]),
    Die::new(["o", "w", "t", "o", "a", "t"]),
    Die::new(["i", "o", "t", "m", "u", "c"]),
    Die::new(["e", "r", "t", "t", "y", "l"]),
    Die::new(["r", "y", "v", "d", "e", "l"]),
    Die::new(["t", "o", "e", "s", "s", "i"]),
    Die::new(["l", "r", "e", "i", "x", "d"]),
    Die::new(["t", "e", "r", "w", "h", "v"]),
    Die::new(["e", "i", "u", "n", "e", "s"]),
    Die::new(["n", "u", "i", "h", "m", "qu"]),
];

/// Rolls `count` letters. The dice are shuffled once and then each position
/// takes the next die in that order, starting over when the dice run out.
pub fn roll_letters<R: Rng>(dice: &[Die], count: usize, rng: &mut R) -> Vec<Letter> {
    let mut order = dice.to_vec();
    order.shuffle(rng);
    order.iter().cycle().take(count).map(|d| d.roll(rng)).collect()
}
