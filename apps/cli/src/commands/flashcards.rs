//! Flashcard mode over stdin/stdout.

use study_core::{FlashcardSession, SessionEvent, StudySet};

use crate::input::Input;
use crate::render;

pub async fn execute(set: &StudySet) -> anyhow::Result<SessionEvent> {
    let mut session = FlashcardSession::new(set);
    let mut lines = super::stdin_lines();

    println!("{}", render::header(set, "flashcards"));
    loop {
        println!("{}", render::flashcard(&session));
        let Some(line) = lines.next_line().await? else {
            break;
        };
        match Input::parse(&line) {
            Input::Key(key) => {
                session.handle_key(key);
            }
            Input::Quit => break,
            Input::Choice(_) | Input::Restart | Input::Unknown => {
                println!("Use n, p, f or q.");
            }
        }
    }

    Ok(session.exit())
}
