//! Tokio timers for the match game.
//!
//! [`MatchDriver`] owns a [`MatchGame`] and the two kinds of scheduled work it
//! needs: a repeating clock tick and a one-shot cooldown per wrong pair. Every
//! task is aborted when the game is restarted, exited, or dropped, and each task
//! checks the session it was spawned for before touching state.

use crate::events::SessionEvent;
use crate::match_game::{ItemState, MatchGame, MatchItem, SelectOutcome};
use crate::settings::StudySettings;
use crate::types::{StudyMode, StudySet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use uuid::Uuid;

type SharedGame = Arc<Mutex<MatchGame>>;

fn lock(game: &SharedGame) -> MutexGuard<'_, MatchGame> {
    game.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Owned copy of the board for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSnapshot {
    pub session: Uuid,
    pub tiles: Vec<TileSnapshot>,
    pub matched: usize,
    pub pending: bool,
    pub complete: bool,
    pub elapsed_seconds: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSnapshot {
    pub item: MatchItem,
    pub state: ItemState,
    pub visible: bool,
}

impl From<&MatchGame> for MatchSnapshot {
    fn from(game: &MatchGame) -> Self {
        Self {
            session: game.id(),
            tiles: game
                .tiles()
                .map(|t| TileSnapshot {
                    item: t.item.clone(),
                    state: t.state,
                    visible: t.visible,
                })
                .collect(),
            matched: game.matched_count(),
            pending: game.is_pending(),
            complete: game.is_complete(),
            elapsed_seconds: game.elapsed_seconds(),
        }
    }
}

/// Match game wired to tokio timers. Must be created inside a tokio runtime.
pub struct MatchDriver {
    game: SharedGame,
    events: UnboundedSender<SessionEvent>,
    cooldown: Duration,
    tick: Duration,
    ticker: Option<JoinHandle<()>>,
    cooldowns: Vec<JoinHandle<()>>,
}

impl MatchDriver {
    /// Deal a board, start the clock, and report events on `events`.
    pub fn start(
        set: &StudySet,
        settings: &StudySettings,
        events: UnboundedSender<SessionEvent>,
    ) -> Self {
        let game = MatchGame::new(set, settings, Instant::now().into_std());
        let mut driver = Self {
            game: Arc::new(Mutex::new(game)),
            events,
            cooldown: settings.match_cooldown(),
            tick: settings.clock_tick(),
            ticker: None,
            cooldowns: Vec::new(),
        };
        driver.spawn_ticker();
        driver
    }

    fn spawn_ticker(&mut self) {
        let game = Arc::clone(&self.game);
        let session = lock(&game).id();
        let period = self.tick;

        self.ticker = Some(tokio::spawn(async move {
            let mut interval = time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                let mut game = lock(&game);
                if game.id() != session || game.is_complete() {
                    break;
                }
                game.tick(Instant::now().into_std());
            }
        }));
    }

    fn abort_tasks(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
        for task in self.cooldowns.drain(..) {
            task.abort();
        }
    }

    /// Select the tile at `index`, scheduling a cooldown on a mismatch.
    pub fn select(&mut self, index: usize) -> SelectOutcome {
        let outcome = lock(&self.game).select(index, Instant::now().into_std());

        match outcome {
            SelectOutcome::Mismatch(ticket) => {
                self.cooldowns.retain(|task| !task.is_finished());
                let game = Arc::clone(&self.game);
                let events = self.events.clone();
                let delay = self.cooldown;
                self.cooldowns.push(tokio::spawn(async move {
                    time::sleep(delay).await;
                    let cleared = lock(&game).resolve_mismatch(ticket);
                    if cleared {
                        let _ = events.send(SessionEvent::MismatchCleared {
                            session: ticket.session(),
                        });
                    }
                }));
            }
            SelectOutcome::Matched { complete: true } => {
                if let Some(ticker) = self.ticker.take() {
                    ticker.abort();
                }
                if let Some(result) = lock(&self.game).result() {
                    let _ = self.events.send(SessionEvent::MatchCompleted(result));
                }
            }
            SelectOutcome::Ignored | SelectOutcome::Selected | SelectOutcome::Matched { .. } => {}
        }
        outcome
    }

    /// Play again with a fresh board and clock.
    pub fn restart(&mut self) {
        self.abort_tasks();
        lock(&self.game).restart(Instant::now().into_std());
        self.spawn_ticker();
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot::from(&*lock(&self.game))
    }

    pub fn session(&self) -> Uuid {
        lock(&self.game).id()
    }

    pub fn is_complete(&self) -> bool {
        lock(&self.game).is_complete()
    }

    /// Leave the mode, cancelling all outstanding timers.
    pub fn exit(mut self) -> SessionEvent {
        self.abort_tasks();
        SessionEvent::exit(StudyMode::Match, self.session())
    }
}

impl Drop for MatchDriver {
    fn drop(&mut self) {
        self.abort_tasks();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Card, Side};
    use tokio::sync::mpsc;

    fn set() -> StudySet {
        let cards = (0..2)
            .map(|i| Card::new(format!("c{}", i), format!("term {}", i), format!("def {}", i)))
            .collect();
        StudySet::new("s", "Set", "", cards).unwrap()
    }

    fn index_of(snapshot: &MatchSnapshot, card: &str, side: Side) -> usize {
        snapshot
            .tiles
            .iter()
            .position(|t| t.item.parent_id == card && t.item.side == side)
            .unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_clock_advances_while_playing() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let driver = MatchDriver::start(&set(), &StudySettings::seeded(1), tx);
        time::sleep(Duration::from_millis(1_050)).await;
        let elapsed = driver.snapshot().elapsed_seconds;
        assert!(elapsed >= 0.9 && elapsed <= 1.1, "elapsed {}", elapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mismatch_clears_after_cooldown() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut driver = MatchDriver::start(&set(), &StudySettings::seeded(2), tx);
        let snap = driver.snapshot();
        let a = index_of(&snap, "c0", Side::Term);
        let b = index_of(&snap, "c1", Side::Term);

        driver.select(a);
        assert!(matches!(driver.select(b), SelectOutcome::Mismatch(_)));
        assert!(driver.snapshot().pending);

        time::sleep(Duration::from_millis(400)).await;
        assert!(driver.snapshot().pending);
        assert_eq!(driver.select(index_of(&snap, "c0", Side::Definition)), SelectOutcome::Ignored);

        let event = rx.recv().await.unwrap();
        assert_eq!(event, SessionEvent::MismatchCleared { session: snap.session });
        let after = driver.snapshot();
        assert!(!after.pending);
        assert!(after.tiles.iter().all(|t| t.state == ItemState::Unmatched));
    }

    #[tokio::test(start_paused = true)]
    async fn test_completion_emits_result_and_stops_clock() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut driver = MatchDriver::start(&set(), &StudySettings::seeded(3), tx);
        let snap = driver.snapshot();

        time::sleep(Duration::from_millis(1_500)).await;
        for card in ["c0", "c1"] {
            driver.select(index_of(&snap, card, Side::Term));
            driver.select(index_of(&snap, card, Side::Definition));
        }
        assert!(driver.is_complete());

        match rx.recv().await.unwrap() {
            SessionEvent::MatchCompleted(result) => assert_eq!(result.elapsed_seconds, 1.5),
            other => panic!("unexpected event {:?}", other),
        }

        time::sleep(Duration::from_secs(5)).await;
        assert_eq!(driver.snapshot().elapsed_seconds, 1.5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exit_cancels_pending_cooldown() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut driver = MatchDriver::start(&set(), &StudySettings::seeded(4), tx);
        let snap = driver.snapshot();
        driver.select(index_of(&snap, "c0", Side::Term));
        driver.select(index_of(&snap, "c1", Side::Definition));

        let event = driver.exit();
        assert!(matches!(event, SessionEvent::ExitRequested { .. }));

        time::sleep(Duration::from_secs(2)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_drops_stale_cooldown() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut driver = MatchDriver::start(&set(), &StudySettings::seeded(5), tx);
        let first = driver.session();
        let snap = driver.snapshot();
        driver.select(index_of(&snap, "c0", Side::Term));
        driver.select(index_of(&snap, "c1", Side::Term));

        driver.restart();
        assert_ne!(driver.session(), first);

        time::sleep(Duration::from_secs(2)).await;
        assert!(rx.try_recv().is_err());
        let after = driver.snapshot();
        assert!(!after.pending);
        assert_eq!(after.matched, 0);
        assert!(after.elapsed_seconds >= 1.9);
    }
}
