//! Match game over stdin/stdout, with the clock and cooldowns on tokio timers.

use study_core::{MatchDriver, SelectOutcome, SessionEvent, StudySet, StudySettings};
use tokio::sync::mpsc;

use crate::input::Input;
use crate::render;

pub async fn execute(set: &StudySet, settings: &StudySettings) -> anyhow::Result<SessionEvent> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut driver = MatchDriver::start(set, settings, tx);
    let mut lines = super::stdin_lines();

    println!("{}", render::header(set, "match"));
    println!("{}", render::match_board(&driver.snapshot()));

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match Input::parse(&line) {
                    Input::Choice(index) => {
                        if driver.select(index) == SelectOutcome::Ignored {
                            println!("That tile can't be picked right now.");
                        }
                    }
                    Input::Restart if driver.is_complete() => driver.restart(),
                    Input::Quit => break,
                    Input::Restart | Input::Key(_) | Input::Unknown => {
                        println!("Pick a tile by number or q to leave.");
                    }
                }
                println!("{}", render::match_board(&driver.snapshot()));
            }
            Some(event) = rx.recv() => match event {
                SessionEvent::MismatchCleared { .. } => {
                    println!("{}", render::match_board(&driver.snapshot()));
                }
                event @ SessionEvent::MatchCompleted(_) => {
                    tracing::info!(event = %serde_json::to_string(&event)?, "match game complete");
                }
                SessionEvent::ExitRequested { .. } | SessionEvent::LearnCompleted(_) => {}
            },
        }
    }

    Ok(driver.exit())
}
