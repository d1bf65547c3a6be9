//! Learn mode over stdin/stdout.

use study_core::{Advance, AnswerOutcome, Key, LearnSession, SessionEvent, StudySet, StudySettings};

use crate::input::Input;
use crate::render;

pub async fn execute(set: &StudySet, settings: &StudySettings) -> anyhow::Result<SessionEvent> {
    let mut session = LearnSession::new(set, settings);
    let mut lines = super::stdin_lines();

    println!("{}", render::header(set, "learn"));
    loop {
        match session.result() {
            Some(result) => println!("{}", render::learn_summary(result.score, result.total)),
            None => println!("{}", render::learn(&session)),
        }
        let Some(line) = lines.next_line().await? else {
            break;
        };
        match Input::parse(&line) {
            Input::Choice(index) => {
                if session.select(index) == AnswerOutcome::Ignored && !session.is_complete() {
                    println!("Already answered. Press enter to continue.");
                }
            }
            Input::Key(Key::Enter | Key::Right) => match session.advance() {
                Advance::Complete(result) => {
                    let event = SessionEvent::LearnCompleted(result);
                    tracing::info!(event = %serde_json::to_string(&event)?, "learn session complete");
                }
                Advance::Ignored if !session.is_complete() => println!("Pick an answer first."),
                Advance::Next | Advance::Ignored => {}
            },
            Input::Quit => break,
            Input::Key(_) | Input::Restart | Input::Unknown => {
                println!("Pick a number, press enter to continue, or q to quit.");
            }
        }
    }

    Ok(session.exit())
}
