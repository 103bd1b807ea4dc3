use std::fmt;

use ndarray::Array2;
use rand::Rng;

use super::dice::{roll_letters, Die};
use super::error::{BoggleError, Result};
use super::letter::{normalize, Letter};
use super::MIN_BOARD_SIZE;

/// Square grid of boggle letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Letters stored row major
    cells: Array2<Letter>,
}

impl Board {
    /// Builds a board from letters in row major order
    pub fn new(size: usize, letters: Vec<Letter>) -> Result<Self> {
        let actual = letters.len();
        if Self::cell_count(size)? != actual {
            return Err(BoggleError::SizeMismatch { size, actual });
        }
        let cells = Array2::from_shape_vec((size, size), letters)
            .map_err(|_| BoggleError::SizeMismatch { size, actual })?;
        Ok(Self { size, cells })
    }

    /// Parses already cleaned letters (lower case, alphabetic only). "qu"
    /// fills a single cell.
    pub fn from_letters(letters: &str, size: usize) -> Result<Self> {
        let letters = normalize(letters.chars()).collect::<Result<Vec<_>>>()?;
        let board = Self::new(size, letters)?;
        log::debug!("loaded {}x{} board", size, size);
        Ok(board)
    }

    /// Rolls a random board from the dice
    pub fn random<R: Rng>(size: usize, dice: &[Die], rng: &mut R) -> Result<Self> {
        let letters = roll_letters(dice, Self::cell_count(size)?, rng);
        let board = Self::new(size, letters)?;
        log::debug!("rolled {}x{} board", size, size);
        Ok(board)
    }

    /// Number of cells on a board of the given size
    fn cell_count(size: usize) -> Result<usize> {
        if size < MIN_BOARD_SIZE {
            return Err(BoggleError::InvalidBoardSize { size });
        }
        size.checked_mul(size).ok_or(BoggleError::InvalidBoardSize { size })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Letter> {
        self.cells.get((row, col)).copied()
    }

    /// Board rows as printable strings
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.iter().map(Letter::to_string).collect())
            .collect()
    }
}

impl std::ops::Index<(usize, usize)> for Board {
    type Output = Letter;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.cells[index]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            let line = row.iter().map(Letter::to_string).collect::<Vec<_>>();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
