//! Test fixtures and factory functions for creating study sets.

use study_core::{Card, StudySet};

/// Generate a set with `num_cards` cards named `c0`, `c1`, ...
pub fn sample_set(num_cards: usize) -> StudySet {
    let cards = (0..num_cards)
        .map(|i| {
            Card::new(
                format!("c{}", i),
                format!("Term {}", i),
                format!("Definition {}", i),
            )
        })
        .collect();
    StudySet::new("set-1", "Sample", "Generated fixture", cards).expect("fixture set is valid")
}

/// Three-card set used by the flashcard walkthrough.
pub fn abc_set() -> StudySet {
    StudySet::new(
        "abc",
        "Letters",
        "",
        vec![
            Card::new("A", "Alpha", "First letter"),
            Card::new("B", "Bravo", "Second letter"),
            Card::new("C", "Charlie", "Third letter"),
        ],
    )
    .expect("fixture set is valid")
}
