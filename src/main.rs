//! Boggle solver.
//!
//! Usage:
//!   boggle solve [--size N] [--json] [LETTERS]...
//!   boggle check [WORDS]...
//!   boggle build-dict <WORDS_FILE> <OUT>
//!   boggle batch [--size N] [--boards K]
//!
//! Enter "qu" as if it were a single letter. Without letters `solve` rolls a
//! random board from the standard dice.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use log::{debug, error};
#[macro_use]
extern crate text_io;

use boggle_solver::boggle::board::Board;
use boggle_solver::boggle::dice::STANDARD_DICE;
use boggle_solver::boggle::dice_search::is_formable;
use boggle_solver::boggle::letter::clean_letters;
use boggle_solver::boggle::trie::Trie;
use boggle_solver::boggle::word_search::{find_words_batch, Solution};
use boggle_solver::boggle::{dictionary, BoggleError, Result, DEFAULT_BOARD_SIZE};

#[derive(Debug, Parser)]
#[command(name = "boggle")]
#[command(about = "Solve Boggle boards and check words against the Boggle dice")]
#[command(version)]
struct Cli {
    /// Word list, or a saved trie when the file ends in .bin
    #[arg(short, long, env = "BOGGLE_DICT", default_value = "trie.bin", global = true)]
    dict: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Find every word on a board
    Solve {
        /// Board dimension
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,

        /// Print the board and words as JSON
        #[arg(long)]
        json: bool,

        /// Board letters in row major order, e.g. `lnto epro stie nesi`
        letters: Vec<String>,
    },
    /// Check whether words can be spelled with the sixteen Boggle dice
    Check {
        /// Words to check. Read from stdin, one per line, when omitted
        words: Vec<String>,
    },
    /// Build a saved trie from a word list
    BuildDict {
        /// Whitespace separated word list
        words_file: PathBuf,
        /// Where to write the trie
        out: PathBuf,
    },
    /// Solve many random boards in parallel
    Batch {
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,

        /// Number of boards to roll
        #[arg(long, default_value_t = 100)]
        boards: usize,
    },
}

fn solve(dict: &Trie, size: usize, json: bool, letters: &[String]) -> Result<()> {
    let board = if letters.is_empty() {
        Board::random(size, &STANDARD_DICE, &mut rand::thread_rng())?
    } else {
        Board::from_letters(&clean_letters(letters), size)?
    };

    let solution = Solution::solve(&board, dict);
    if json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
    } else {
        println!("{}", board);
        println!("{} words found:", solution.count);
        println!("{}", solution.words.join(" "));
    }
    Ok(())
}

fn print_check(word: &str) {
    if is_formable(word, &STANDARD_DICE) {
        println!("Word '{}' can be formed.", word);
    } else {
        println!("Word '{}' cannot be formed.", word);
    }
}

fn check(words: &[String]) {
    if !words.is_empty() {
        words.iter().for_each(|w| print_check(w));
        return;
    }
    loop {
        let word: std::result::Result<String, _> = try_read!("{}\n");
        match word {
            Ok(word) if !word.trim().is_empty() => print_check(word.trim()),
            _ => break,
        }
    }
}

fn batch(dict: &Trie, size: usize, count: usize) -> Result<()> {
    let mut rng = rand::thread_rng();
    let boards = (0..count)
        .map(|_| Board::random(size, &STANDARD_DICE, &mut rng))
        .collect::<Result<Vec<_>>>()?;
    let results = find_words_batch(&boards, dict);

    let mut total = 0;
    for (i, (board, words)) in boards.iter().zip(results).enumerate() {
        let solution = Solution::new(board, words);
        total += solution.count;
        let longest = solution.words.last().map(String::as_str).unwrap_or("-");
        println!(
            "{:>5}  {}  {:>4} words  longest: {}",
            i + 1,
            solution.board.concat().concat(),
            solution.count,
            longest
        );
    }
    if count > 0 {
        println!("average {:.1} words per board", total as f64 / count as f64);
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Solve { size, json, letters } => {
            let dict = dictionary::load(&cli.dict)?;
            solve(&dict, size, json, &letters)
        }
        Commands::Check { words } => {
            check(&words);
            Ok(())
        }
        Commands::BuildDict { words_file, out } => {
            let trie = dictionary::make(&words_file, &out)?;
            println!("{} words written to {}", trie.len(), out.display());
            Ok(())
        }
        Commands::Batch { size, boards } => {
            let dict = dictionary::load(&cli.dict)?;
            batch(&dict, size, boards)
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    debug!("Command line options: {:?}", cli);

    if let Err(e) = run(cli) {
        if let BoggleError::InvalidLetterSequence { .. } = e {
            error!("{} (enter Qu as a single letter)", e);
        } else {
            error!("{}", e);
        }
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
