//! Study session engines shared by every host application.
//!
//! Provides:
//! - Flashcard navigation (circular cursor with a flip toggle)
//! - Match game (pair terms with definitions against the clock)
//! - Learn mode (multiple choice with distractors from the same set)
//! - Shuffle and sampling helpers used by all three
//! - Tokio timers driving the match game clock and mismatch cooldown
//! - Shared types (Card, StudySet, StudySettings, SessionEvent, etc.)

pub mod error;
pub mod events;
pub mod flashcard;
pub mod input;
pub mod learn;
pub mod match_game;
pub mod settings;
pub mod shuffle;
pub mod timer;
pub mod types;

pub use error::{Result, ValidationError};
pub use events::{LearnResult, MatchResult, SessionEvent};
pub use flashcard::FlashcardSession;
pub use input::{FlashcardAction, Key};
pub use learn::{Advance, AnswerOutcome, LearnSession, OptionMark, Question};
pub use match_game::{ItemState, MatchGame, MatchItem, MismatchTicket, SelectOutcome, Tile};
pub use settings::{SettingsOverrides, StudySettings, MAX_DISTRACTORS};
pub use shuffle::{sample, shuffle};
pub use timer::{MatchDriver, MatchSnapshot, TileSnapshot};
pub use types::{Card, RawStudySet, Side, StudyMode, StudySet, MIN_CARDS};
