//! Learn mode: multiple-choice questions drawn from the set.
//!
//! Each card is asked once, in a shuffled order fixed at session start. The
//! definition is the prompt and the options are terms: the card's own term plus
//! up to `StudySettings::distractors()` terms from other cards.

use crate::events::{LearnResult, SessionEvent};
use crate::settings::StudySettings;
use crate::shuffle::{sample, shuffle};
use crate::types::{Card, StudyMode, StudySet};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use serde::Serialize;
use std::collections::VecDeque;
use uuid::Uuid;

/// How an option should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionMark {
    /// Question not answered yet.
    Unanswered,
    /// The right answer, revealed whether or not it was picked.
    Correct,
    /// The picked option, when it was wrong.
    Incorrect,
    /// Any other option after answering.
    Dimmed,
}

/// One multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    card: Card,
    options: Vec<Card>,
    selected: Option<usize>,
}

impl Question {
    /// The definition being asked about.
    pub fn prompt(&self) -> &str {
        &self.card.definition
    }

    pub fn card(&self) -> &Card {
        &self.card
    }

    pub fn options(&self) -> &[Card] {
        &self.options
    }

    /// Terms shown as choices, in display order.
    pub fn option_terms(&self) -> impl Iterator<Item = &str> + '_ {
        self.options.iter().map(|c| c.term.as_str())
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }

    /// Correctness of the recorded answer, if any.
    pub fn is_correct(&self) -> Option<bool> {
        self.selected.map(|i| self.options[i].id == self.card.id)
    }

    /// Position of the right answer among the options.
    pub fn correct_index(&self) -> usize {
        self.options
            .iter()
            .position(|c| c.id == self.card.id)
            .unwrap_or_default()
    }

    /// Per-option display marks.
    pub fn marks(&self) -> Vec<OptionMark> {
        let Some(selected) = self.selected else {
            return vec![OptionMark::Unanswered; self.options.len()];
        };
        self.options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                if option.id == self.card.id {
                    OptionMark::Correct
                } else if i == selected {
                    OptionMark::Incorrect
                } else {
                    OptionMark::Dimmed
                }
            })
            .collect()
    }
}

/// Result of picking an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Already answered, session complete, or no such option.
    Ignored,
    Correct,
    Incorrect,
}

/// Result of asking to move on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Current question not answered yet, or session already complete.
    Ignored,
    /// The next question is ready.
    Next,
    /// That was the last card.
    Complete(LearnResult),
}

/// Learn session state.
#[derive(Debug, Clone)]
pub struct LearnSession {
    id: Uuid,
    cards: Vec<Card>,
    queue: VecDeque<Card>,
    current: Option<Question>,
    score: usize,
    distractor_count: usize,
    completed_at: Option<DateTime<Utc>>,
    rng: StdRng,
}

impl LearnSession {
    /// Shuffle the set into a question queue and prepare the first question.
    pub fn new(set: &StudySet, settings: &StudySettings) -> Self {
        let cards = set.cards().to_vec();
        let mut rng = settings.rng();
        let queue = shuffle(&cards, &mut rng).into();
        let id = Uuid::new_v4();
        tracing::debug!(session = %id, cards = cards.len(), "learn session started");

        let mut session = Self {
            id,
            cards,
            queue,
            current: None,
            score: 0,
            distractor_count: settings.distractors(),
            completed_at: None,
            rng,
        };
        session.prepare_question();
        session
    }

    /// Build the question for the card at the front of the queue, if none is set.
    fn prepare_question(&mut self) {
        if self.current.is_some() {
            return;
        }
        let Some(card) = self.queue.front().cloned() else {
            return;
        };

        let others: Vec<Card> = self
            .cards
            .iter()
            .filter(|c| c.id != card.id)
            .cloned()
            .collect();
        let mut options = sample(&others, self.distractor_count, &mut self.rng);
        options.push(card.clone());
        let options = shuffle(&options, &mut self.rng);

        self.current = Some(Question {
            card,
            options,
            selected: None,
        });
    }

    /// Record an answer. Only the first answer to a question counts.
    pub fn select(&mut self, option: usize) -> AnswerOutcome {
        if self.is_complete() {
            return AnswerOutcome::Ignored;
        }
        let Some(question) = self.current.as_mut() else {
            return AnswerOutcome::Ignored;
        };
        if question.selected.is_some() || option >= question.options.len() {
            tracing::trace!(option, "answer ignored");
            return AnswerOutcome::Ignored;
        }

        question.selected = Some(option);
        if question.options[option].id == question.card.id {
            self.score += 1;
            tracing::debug!(card = %question.card.id, score = self.score, "answered correctly");
            AnswerOutcome::Correct
        } else {
            tracing::debug!(card = %question.card.id, score = self.score, "answered incorrectly");
            AnswerOutcome::Incorrect
        }
    }

    /// Move past an answered question.
    pub fn advance(&mut self) -> Advance {
        if self.is_complete() {
            return Advance::Ignored;
        }
        if !self.current.as_ref().is_some_and(Question::is_answered) {
            tracing::trace!("advance ignored: question not answered");
            return Advance::Ignored;
        }

        if self.queue.len() > 1 {
            self.queue.pop_front();
            self.current = None;
            self.prepare_question();
            tracing::debug!(question = self.question_number(), "next question");
            Advance::Next
        } else {
            self.completed_at = Some(Utc::now());
            tracing::debug!(session = %self.id, score = self.score, total = self.total(), "learn session complete");
            match self.result() {
                Some(result) => Advance::Complete(result),
                None => Advance::Ignored,
            }
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The question on screen. Stays available after completion.
    pub fn question(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.cards.len()
    }

    /// 1-based number of the current question.
    pub fn question_number(&self) -> usize {
        self.total() - self.queue.len() + 1
    }

    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Final score, once complete.
    pub fn result(&self) -> Option<LearnResult> {
        self.completed_at.map(|completed_at| LearnResult {
            session: self.id,
            score: self.score,
            total: self.total(),
            completed_at,
        })
    }

    /// Leave the mode. The session is consumed.
    pub fn exit(self) -> SessionEvent {
        SessionEvent::exit(StudyMode::Learn, self.id)
    }
}
