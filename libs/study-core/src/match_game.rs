//! Match mode: pair every term with its definition against the clock.
//!
//! # Rules
//! - The board holds one tile per card side, shuffled once per game.
//! - Selecting two tiles of the same card matches them; they stay in place but
//!   become invisible so the grid does not reflow.
//! - Selecting two tiles of different cards marks both wrong. They revert to
//!   unmatched once the cooldown ticket is resolved, and no tile can be selected
//!   until then.
//! - The game completes when every tile is matched; the clock freezes at that point.
//!
//! [`MatchGame`] is a pure state machine: the caller supplies `Instant`s and
//! resolves cooldown tickets itself. [`crate::timer::MatchDriver`] wires it to
//! tokio timers.

use crate::events::{MatchResult, SessionEvent};
use crate::settings::StudySettings;
use crate::shuffle::shuffle;
use crate::types::{Card, Side, StudyMode, StudySet};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use serde::Serialize;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// One displayable half of a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchItem {
    /// `<card id>-term` or `<card id>-def`.
    pub id: String,
    pub content: String,
    pub side: Side,
    pub parent_id: String,
}

impl MatchItem {
    fn from_card(card: &Card, side: Side) -> Self {
        let suffix = match side {
            Side::Term => "term",
            Side::Definition => "def",
        };
        Self {
            id: format!("{}-{}", card.id, suffix),
            content: card.side(side).to_string(),
            side,
            parent_id: card.id.clone(),
        }
    }

    /// Whether two distinct items belong to the same card.
    pub fn pairs_with(&self, other: &MatchItem) -> bool {
        self.id != other.id && self.parent_id == other.parent_id
    }
}

/// State of a single tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemState {
    Unmatched,
    Selected,
    Matched,
    Wrong,
}

impl Default for ItemState {
    fn default() -> Self {
        Self::Unmatched
    }
}

/// Handle for resolving one mismatch. Only the ticket issued for the
/// currently pending pair of the current game has any effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MismatchTicket {
    session: Uuid,
    seq: u64,
}

impl MismatchTicket {
    pub fn session(&self) -> Uuid {
        self.session
    }
}

/// Result of selecting a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Selection not accepted (game over, tile resolved or already selected,
    /// mismatch cooldown pending, or no such tile).
    Ignored,
    /// First tile of a pair selected.
    Selected,
    /// Pair matched. `complete` is set when it was the last pair.
    Matched { complete: bool },
    /// Pair did not match; resolve the ticket after the cooldown.
    Mismatch(MismatchTicket),
}

/// A tile as it should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile<'a> {
    pub item: &'a MatchItem,
    pub state: ItemState,
    /// Matched tiles keep their slot but are not drawn.
    pub visible: bool,
}

/// Match game state.
#[derive(Debug, Clone)]
pub struct MatchGame {
    id: Uuid,
    cards: Vec<Card>,
    items: Vec<MatchItem>,
    states: Vec<ItemState>,
    selection: Vec<usize>,
    pending: Option<MismatchTicket>,
    mismatches: u64,
    started_at: Instant,
    elapsed: Duration,
    completed_at: Option<DateTime<Utc>>,
    rng: StdRng,
}

impl MatchGame {
    /// Deal a new board and start the clock at `now`.
    pub fn new(set: &StudySet, settings: &StudySettings, now: Instant) -> Self {
        let cards = set.cards().to_vec();
        let mut rng = settings.rng();
        let items = deal(&cards, &mut rng);
        let id = Uuid::new_v4();
        tracing::debug!(session = %id, tiles = items.len(), "match game started");

        Self {
            id,
            states: vec![ItemState::Unmatched; items.len()],
            cards,
            items,
            selection: Vec::with_capacity(2),
            pending: None,
            mismatches: 0,
            started_at: now,
            elapsed: Duration::ZERO,
            completed_at: None,
            rng,
        }
    }

    /// Play again: new shuffle, new clock, new session id.
    ///
    /// Tickets issued before the restart no longer resolve anything.
    pub fn restart(&mut self, now: Instant) {
        self.id = Uuid::new_v4();
        self.items = deal(&self.cards, &mut self.rng);
        self.states = vec![ItemState::Unmatched; self.items.len()];
        self.selection.clear();
        self.pending = None;
        self.mismatches = 0;
        self.started_at = now;
        self.elapsed = Duration::ZERO;
        self.completed_at = None;
        tracing::debug!(session = %self.id, "match game restarted");
    }

    /// Select the tile at `index` in grid order.
    pub fn select(&mut self, index: usize, now: Instant) -> SelectOutcome {
        if self.is_complete() || self.pending.is_some() {
            tracing::trace!(index, "selection ignored: game over or cooldown pending");
            return SelectOutcome::Ignored;
        }
        match self.states.get(index) {
            Some(ItemState::Unmatched) => {}
            _ => {
                tracing::trace!(index, "selection ignored");
                return SelectOutcome::Ignored;
            }
        }

        self.states[index] = ItemState::Selected;
        self.selection.push(index);
        if self.selection.len() < 2 {
            return SelectOutcome::Selected;
        }

        let (a, b) = (self.selection[0], self.selection[1]);
        if self.items[a].pairs_with(&self.items[b]) {
            self.states[a] = ItemState::Matched;
            self.states[b] = ItemState::Matched;
            self.selection.clear();
            tracing::debug!(card = %self.items[a].parent_id, "pair matched");

            let complete = self.matched_count() == self.items.len();
            if complete {
                self.elapsed = now.saturating_duration_since(self.started_at);
                self.completed_at = Some(Utc::now());
                tracing::debug!(
                    session = %self.id,
                    elapsed = self.elapsed_seconds(),
                    "match game complete"
                );
            }
            SelectOutcome::Matched { complete }
        } else {
            self.states[a] = ItemState::Wrong;
            self.states[b] = ItemState::Wrong;
            self.mismatches += 1;
            let ticket = MismatchTicket {
                session: self.id,
                seq: self.mismatches,
            };
            self.pending = Some(ticket);
            tracing::debug!(
                first = %self.items[a].id,
                second = %self.items[b].id,
                "pair mismatched"
            );
            SelectOutcome::Mismatch(ticket)
        }
    }

    /// Revert a wrong pair to unmatched and clear the selection.
    ///
    /// Returns false (and changes nothing) for a ticket that is not the pending one.
    pub fn resolve_mismatch(&mut self, ticket: MismatchTicket) -> bool {
        if self.pending != Some(ticket) {
            tracing::trace!(?ticket, "stale mismatch ticket");
            return false;
        }
        for index in self.selection.drain(..) {
            self.states[index] = ItemState::Unmatched;
        }
        self.pending = None;
        tracing::debug!("mismatch cleared");
        true
    }

    /// Sample the clock. Has no effect once the game is complete.
    pub fn tick(&mut self, now: Instant) {
        if !self.is_complete() {
            self.elapsed = now.saturating_duration_since(self.started_at);
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn items(&self) -> &[MatchItem] {
        &self.items
    }

    pub fn state(&self, index: usize) -> Option<ItemState> {
        self.states.get(index).copied()
    }

    /// Tiles in stable grid order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile<'_>> + '_ {
        self.items.iter().zip(&self.states).map(|(item, &state)| Tile {
            item,
            state,
            visible: state != ItemState::Matched,
        })
    }

    /// Indices of the currently selected (or wrong) tiles.
    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    /// Whether a wrong pair is waiting for its cooldown.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn matched_count(&self) -> usize {
        self.states
            .iter()
            .filter(|&&s| s == ItemState::Matched)
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Elapsed seconds truncated to tenths.
    pub fn elapsed_seconds(&self) -> f64 {
        (self.elapsed.as_millis() / 100) as f64 / 10.0
    }

    /// Elapsed time formatted with one decimal, e.g. `"12.3"`.
    pub fn elapsed_display(&self) -> String {
        format!("{:.1}", self.elapsed_seconds())
    }

    /// Final result, once the game is complete.
    pub fn result(&self) -> Option<MatchResult> {
        self.completed_at.map(|completed_at| MatchResult {
            session: self.id,
            elapsed_seconds: self.elapsed_seconds(),
            completed_at,
        })
    }

    /// Leave the mode. The game is consumed.
    pub fn exit(self) -> SessionEvent {
        SessionEvent::exit(StudyMode::Match, self.id)
    }
}

/// Build the shuffled pool of term and definition tiles.
fn deal(cards: &[Card], rng: &mut StdRng) -> Vec<MatchItem> {
    let items: Vec<MatchItem> = cards
        .iter()
        .flat_map(|card| {
            [
                MatchItem::from_card(card, Side::Term),
                MatchItem::from_card(card, Side::Definition),
            ]
        })
        .collect();
    shuffle(&items, rng)
}
