//! Core types shared by every study mode.

use crate::error::{Result, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Smallest number of cards a study set may hold.
pub const MIN_CARDS: usize = 2;

/// One term/definition pair within a study set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub term: String,
    #[serde(rename = "def", alias = "definition")]
    pub definition: String,
}

impl Card {
    pub fn new(id: impl Into<String>, term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            term: term.into(),
            definition: definition.into(),
        }
    }

    /// Text shown for the given side of the card.
    pub fn side(&self, side: Side) -> &str {
        match side {
            Side::Term => &self.term,
            Side::Definition => &self.definition,
        }
    }
}

/// Which half of a card is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Term,
    Definition,
}

impl Default for Side {
    fn default() -> Self {
        Self::Term
    }
}

impl Side {
    /// The other side of the card.
    pub fn flipped(self) -> Self {
        match self {
            Self::Term => Self::Definition,
            Self::Definition => Self::Term,
        }
    }
}

/// Study set as it arrives from storage or the generator (not yet validated).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawStudySet {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub cards: Vec<Card>,
}

/// A validated, read-only collection of cards.
///
/// Only constructible through [`StudySet::new`] or deserialization, both of which
/// enforce the minimum card count and unique card IDs. Sessions never mutate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStudySet", into = "RawStudySet")]
pub struct StudySet {
    id: String,
    title: String,
    description: String,
    cards: Vec<Card>,
}

impl StudySet {
    /// Validate and build a study set.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        cards: Vec<Card>,
    ) -> Result<Self> {
        Self::try_from(RawStudySet {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            cards,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards (always at least [`MIN_CARDS`]).
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Never true for a validated set.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl TryFrom<RawStudySet> for StudySet {
    type Error = ValidationError;

    fn try_from(raw: RawStudySet) -> Result<Self> {
        if raw.cards.len() < MIN_CARDS {
            return Err(ValidationError::TooFewCards {
                found: raw.cards.len(),
            });
        }

        let mut seen_ids = HashSet::new();
        for card in &raw.cards {
            if !seen_ids.insert(card.id.as_str()) {
                return Err(ValidationError::DuplicateCardId {
                    id: card.id.clone(),
                });
            }
        }

        Ok(Self {
            id: raw.id,
            title: raw.title,
            description: raw.description,
            cards: raw.cards,
        })
    }
}

impl From<StudySet> for RawStudySet {
    fn from(set: StudySet) -> Self {
        Self {
            id: set.id,
            title: set.title,
            description: set.description,
            cards: set.cards,
        }
    }
}

/// The three study modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyMode {
    Flashcards,
    Match,
    Learn,
}

impl StudyMode {
    /// Get the mode name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flashcards => "flashcards",
            Self::Match => "match",
            Self::Learn => "learn",
        }
    }
}
