//! Shared helpers for study-core integration tests.

#![allow(dead_code)]

pub mod fixtures;

use study_core::{MatchGame, Side};

/// Grid index of one side of a card on the match board.
pub fn tile_index(game: &MatchGame, card_id: &str, side: Side) -> usize {
    game.items()
        .iter()
        .position(|item| item.parent_id == card_id && item.side == side)
        .unwrap_or_else(|| panic!("no {:?} tile for card {}", side, card_id))
}
