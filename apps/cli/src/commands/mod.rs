//! One command per study mode.

pub mod flashcards;
pub mod learn;
pub mod matching;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Line reader over stdin. End of input ends the session like `q`.
fn stdin_lines() -> Lines<BufReader<Stdin>> {
    BufReader::new(tokio::io::stdin()).lines()
}
