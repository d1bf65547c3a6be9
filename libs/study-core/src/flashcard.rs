//! Flashcard mode: a circular cursor over the set with a flip toggle.

use crate::events::SessionEvent;
use crate::input::{FlashcardAction, Key};
use crate::types::{Card, Side, StudyMode, StudySet};
use uuid::Uuid;

/// Flashcard session state.
#[derive(Debug, Clone)]
pub struct FlashcardSession {
    id: Uuid,
    cards: Vec<Card>,
    index: usize,
    shown: Side,
}

impl FlashcardSession {
    /// Start at the first card with its term showing.
    pub fn new(set: &StudySet) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(session = %id, cards = set.len(), "flashcard session started");
        Self {
            id,
            cards: set.cards().to_vec(),
            index: 0,
            shown: Side::Term,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Move to the next card, wrapping from last to first.
    ///
    /// The visible side is reset to the term before moving.
    pub fn next(&mut self) {
        self.shown = Side::Term;
        self.index = (self.index + 1) % self.cards.len();
    }

    /// Move to the previous card, wrapping from first to last.
    pub fn prev(&mut self) {
        self.shown = Side::Term;
        let n = self.cards.len();
        self.index = (self.index + n - 1) % n;
    }

    pub fn flip(&mut self) {
        self.shown = self.shown.flipped();
    }

    pub fn apply(&mut self, action: FlashcardAction) {
        match action {
            FlashcardAction::Prev => self.prev(),
            FlashcardAction::Next => self.next(),
            FlashcardAction::Flip => self.flip(),
        }
    }

    /// Handle a key press. Returns true if the key was bound.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match FlashcardAction::from_key(key) {
            Some(action) => {
                self.apply(action);
                true
            }
            None => false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn shown(&self) -> Side {
        self.shown
    }

    pub fn current(&self) -> &Card {
        &self.cards[self.index]
    }

    /// Text on the visible side of the current card.
    pub fn shown_text(&self) -> &str {
        self.current().side(self.shown)
    }

    /// Fraction of the set reached, in (0, 1].
    pub fn progress(&self) -> f64 {
        (self.index + 1) as f64 / self.cards.len() as f64
    }

    /// Leave the mode. The session is consumed.
    pub fn exit(self) -> SessionEvent {
        SessionEvent::exit(StudyMode::Flashcards, self.id)
    }
}
