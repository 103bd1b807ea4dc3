use std::collections::HashSet;

use ndarray::Array2;
use rayon::prelude::*;
use serde::Serialize;

use super::board::Board;
use super::trie::{Trie, TrieNode};
use super::MIN_WORD_LENGTH;

/// Offsets of the eight neighbouring cells
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Depth first search over one board. Owns the visited flags, so every
/// search in flight needs its own finder while the board and trie are shared.
pub struct WordFinder<'a> {
    board: &'a Board,
    trie: &'a Trie,
    visited: Array2<bool>,
    found: HashSet<String>,
}

impl<'a> WordFinder<'a> {
    pub fn new(board: &'a Board, trie: &'a Trie) -> Self {
        let size = board.size();
        Self {
            board,
            trie,
            visited: Array2::from_elem((size, size), false),
            found: HashSet::new(),
        }
    }

    /// Runs the search from every cell and returns the distinct words found
    pub fn find_all(mut self) -> HashSet<String> {
        let (board, trie) = (self.board, self.trie);
        let size = board.size();
        for row in 0..size {
            for col in 0..size {
                let first = board[(row, col)];
                // No dictionary word starts with this letter
                let node = match trie.root().next_node(first) {
                    Some(node) => node,
                    None => continue,
                };
                let mut path = String::new();
                first.push_to(&mut path);
                self.search(row as isize, col as isize, node, &mut path, 1);
            }
        }
        self.found
    }

    fn on_grid(&self, row: isize, col: isize) -> bool {
        let size = self.board.size() as isize;
        (0..size).contains(&row) && (0..size).contains(&col)
    }

    /// `node` is the trie node reached by `path`, which already includes the
    /// letter at (row, col). `depth` counts letters, so "qu" is one.
    fn search(&mut self, row: isize, col: isize, node: &TrieNode, path: &mut String, depth: usize) {
        if !self.on_grid(row, col) {
            return;
        }
        let cell = (row as usize, col as usize);
        if self.visited[cell] {
            return;
        }

        if node.is_terminal() && depth >= MIN_WORD_LENGTH {
            self.found.insert(path.clone());
        }

        self.visited[cell] = true;
        for (dr, dc) in DIRECTIONS {
            let (nr, nc) = (row + dr, col + dc);
            if !self.on_grid(nr, nc) {
                continue;
            }
            let next = (nr as usize, nc as usize);
            if self.visited[next] {
                continue;
            }
            let letter = self.board[next];
            if let Some(child) = node.next_node(letter) {
                let len = path.len();
                letter.push_to(path);
                self.search(nr, nc, child, path, depth + 1);
                path.truncate(len);
            }
        }
        self.visited[cell] = false;
    }
}

/// Every distinct dictionary word of at least three letters that can be
/// traced through adjacent cells without reusing a cell.
pub fn find_words(board: &Board, trie: &Trie) -> HashSet<String> {
    let words = WordFinder::new(board, trie).find_all();
    log::debug!("found {} words on {}x{} board", words.len(), board.size(), board.size());
    words
}

/// Solves many boards in parallel against one shared dictionary
pub fn find_words_batch(boards: &[Board], trie: &Trie) -> Vec<HashSet<String>> {
    boards.par_iter().map(|board| find_words(board, trie)).collect()
}

/// Board together with its words, ready to be rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub board: Vec<Vec<String>>,
    pub size: usize,
    pub words: Vec<String>,
    pub count: usize,
}

impl Solution {
    pub fn solve(board: &Board, trie: &Trie) -> Self {
        Self::new(board, find_words(board, trie))
    }

    /// Words are ordered by length, then alphabetically
    pub fn new(board: &Board, words: HashSet<String>) -> Self {
        let mut words = words.into_iter().collect::<Vec<_>>();
        words.sort_unstable_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        Self {
            board: board.rows(),
            size: board.size(),
            count: words.len(),
            words,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::boggle::dice::STANDARD_DICE;
    use crate::boggle::letter::{normalize_word, Letter};

    fn sorted(words: HashSet<String>) -> Vec<String> {
        let mut words = words.into_iter().collect::<Vec<_>>();
        words.sort();
        words
    }

    /// Brute force check that the word has a simple path on the board
    fn has_path(board: &Board, word: &str) -> bool {
        fn walk(
            board: &Board,
            letters: &[Letter],
            pos: (usize, usize),
            used: &mut Vec<(usize, usize)>,
        ) -> bool {
            if board[pos] != letters[0] || used.contains(&pos) {
                return false;
            }
            if letters.len() == 1 {
                return true;
            }
            used.push(pos);
            let n = board.size() as isize;
            let found = DIRECTIONS.iter().any(|(dr, dc)| {
                let (r, c) = (pos.0 as isize + dr, pos.1 as isize + dc);
                let on_grid = r >= 0 && c >= 0 && r < n && c < n;
                on_grid && walk(board, &letters[1..], (r as usize, c as usize), used)
            });
            used.pop();
            found
        }
        let letters = normalize_word(word).unwrap();
        let n = board.size();
        (0..n).any(|r| (0..n).any(|c| walk(board, &letters, (r, c), &mut Vec::new())))
    }

    #[test]
    fn test_known_board() {
        let board = Board::from_letters("toessinelreixdly", 4).unwrap();
        let trie = Trie::from_words(["toes", "sine", "rein", "zebra", "toe", "to", "toy"]);
        let words = find_words(&board, &trie);
        assert!(words.contains("toes"));
        assert!(words.contains("sine"));
        assert!(words.contains("rein"));
        assert!(words.contains("toe"));
        // Too short
        assert!(!words.contains("to"));
        // No path
        assert!(!words.contains("zebra"));
        assert!(!words.contains("toy"));
    }

    #[test]
    fn test_words_have_paths() {
        let board = Board::from_letters("toessinelreixdly", 4).unwrap();
        let trie = Trie::from_words([
            "toes", "tees", "sine", "nine", "rein", "reins", "lies", "line", "lines", "tin", "sir",
            "ire", "dirt", "lire", "noes",
        ]);
        let words = find_words(&board, &trie);
        assert!(!words.is_empty());
        for w in words.iter() {
            assert!(trie.contains(w));
            assert!(w.len() > 2);
            assert!(has_path(&board, w), "{} has no path", w);
        }
        // Every dictionary word with a path is reported
        for w in trie.words() {
            assert_eq!(words.contains(&w), has_path(&board, &w), "{}", w);
        }
    }

    #[test]
    fn test_no_cell_reuse() {
        let board = Board::from_letters("eses", 2).unwrap();
        let trie = Trie::from_words(["ese", "eses", "sese", "eseses", "esesese", "ss", "ees"]);
        let words = sorted(find_words(&board, &trie));
        assert_eq!(words, vec!["ees", "ese", "eses", "sese"]);
        assert!(words.iter().all(|w| w.len() <= 4));
    }

    #[test]
    fn test_missing_start_letter() {
        let board = Board::from_letters("xxxx", 2).unwrap();
        let trie = Trie::from_words(["hello"]);
        assert!(find_words(&board, &trie).is_empty());
        assert!(find_words(&board, &Trie::new()).is_empty());
    }

    #[test]
    fn test_qu_counts_as_one_letter() {
        // qu i
        // t z
        let board = Board::from_letters("quitz", 2).unwrap();
        let trie = Trie::from_words(["quit", "qui", "quiz"]);
        let words = sorted(find_words(&board, &trie));
        assert_eq!(words, vec!["quit", "quiz"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let board = Board::from_letters("atat", 2).unwrap();
        let trie = Trie::from_words(["tat", "ata"]);
        let words = find_words(&board, &trie);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn test_finder_resets_visited() {
        let board = Board::from_letters("toessinelreixdly", 4).unwrap();
        let trie = Trie::from_words(["toes", "sine", "rein"]);
        let first = find_words(&board, &trie);
        let second = find_words(&board, &trie);
        assert_eq!(first, second);
    }

    #[test]
    fn test_batch() {
        let mut rng = StdRng::seed_from_u64(5);
        let boards = (0..8)
            .map(|_| Board::random(4, &STANDARD_DICE, &mut rng).unwrap())
            .collect::<Vec<_>>();
        let trie = Trie::from_words([
            "tea", "eat", "ate", "sea", "tie", "toe", "net", "ten", "one",
        ]);
        let results = find_words_batch(&boards, &trie);
        assert_eq!(results.len(), boards.len());
        for (board, words) in boards.iter().zip(results) {
            assert_eq!(words, find_words(board, &trie));
        }
    }

    #[test]
    fn test_solution_order() {
        let board = Board::from_letters("toessinelreixdly", 4).unwrap();
        let trie = Trie::from_words(["toes", "sine", "rein", "toe", "reins"]);
        let solution = Solution::solve(&board, &trie);
        assert_eq!(solution.size, 4);
        assert_eq!(solution.count, solution.words.len());
        assert_eq!(solution.words[0], "toe");
        assert_eq!(solution.board[0], vec!["t", "o", "e", "s"]);
        let lengths = solution.words.iter().map(|w| w.len()).collect::<Vec<_>>();
        let mut expected = lengths.clone();
        expected.sort();
        assert_eq!(lengths, expected);
    }
}
