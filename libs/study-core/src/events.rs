//! Events and results handed back to the host application.

use crate::types::StudyMode;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Final result of a completed match game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub session: Uuid,
    pub elapsed_seconds: f64,
    pub completed_at: DateTime<Utc>,
}

/// Final result of a completed learn session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearnResult {
    pub session: Uuid,
    pub score: usize,
    pub total: usize,
    pub completed_at: DateTime<Utc>,
}

/// Event emitted by a session for the host to act on.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SessionEvent {
    /// The user asked to leave the mode. Navigation is up to the host.
    ExitRequested { mode: StudyMode, session: Uuid },
    /// A wrong pair in the match game was cleared after its cooldown.
    MismatchCleared { session: Uuid },
    MatchCompleted(MatchResult),
    LearnCompleted(LearnResult),
}

impl SessionEvent {
    pub fn exit(mode: StudyMode, session: Uuid) -> Self {
        tracing::debug!(mode = mode.as_str(), %session, "exit requested");
        Self::ExitRequested { mode, session }
    }
}
