//! Plain-text rendering of session snapshots.

use std::fmt::Write;

use study_core::{
    FlashcardSession, ItemState, LearnSession, MatchSnapshot, OptionMark, Side, StudySet,
};

const BAR_WIDTH: usize = 20;

pub fn header(set: &StudySet, mode: &str) -> String {
    format!("== {} ({}) · {} cards ==", set.title(), mode, set.len())
}

pub fn flashcard(session: &FlashcardSession) -> String {
    let filled = (session.progress() * BAR_WIDTH as f64).round() as usize;
    let label = match session.shown() {
        Side::Term => "Term",
        Side::Definition => "Definition",
    };
    format!(
        "[{}{}] {}/{}\n{}: {}\n(n)ext (p)rev (f)lip/enter (q)uit",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        session.index() + 1,
        session.len(),
        label,
        session.shown_text(),
    )
}

pub fn match_board(snapshot: &MatchSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Time: {:.1}s  Matched: {}/{}",
        snapshot.elapsed_seconds,
        snapshot.matched,
        snapshot.tiles.len()
    );
    for (i, tile) in snapshot.tiles.iter().enumerate() {
        if !tile.visible {
            let _ = writeln!(out, "{:>3}.", i + 1);
            continue;
        }
        let marker = match tile.state {
            ItemState::Unmatched => ' ',
            ItemState::Selected => '*',
            ItemState::Wrong => '!',
            ItemState::Matched => ' ',
        };
        let _ = writeln!(out, "{:>3}.{} {}", i + 1, marker, tile.item.content);
    }
    if snapshot.complete {
        out.push_str(&format!(
            "All matched in {:.1}s! (r) play again (q) back",
            snapshot.elapsed_seconds
        ));
    } else {
        out.push_str("Pick a tile by number, (q) end game");
    }
    out
}

pub fn learn(session: &LearnSession) -> String {
    let mut out = String::new();
    let Some(question) = session.question() else {
        return out;
    };
    let _ = writeln!(
        out,
        "Question {} of {}  Score: {}",
        session.question_number(),
        session.total(),
        session.score()
    );
    let _ = writeln!(out, "Definition: {}", question.prompt());
    for (i, (term, mark)) in question.option_terms().zip(question.marks()).enumerate() {
        let marker = match mark {
            OptionMark::Unanswered | OptionMark::Dimmed => ' ',
            OptionMark::Correct => '+',
            OptionMark::Incorrect => 'x',
        };
        let _ = writeln!(out, "{:>3}.{} {}", i + 1, marker, term);
    }
    match question.is_correct() {
        None => out.push_str("Pick an answer by number, (q) quit"),
        Some(true) => out.push_str("Correct! Press enter to continue"),
        Some(false) => out.push_str("Not quite. Press enter to continue"),
    }
    out
}

pub fn learn_summary(score: usize, total: usize) -> String {
    format!("Done! You scored {}/{}. (q) back", score, total)
}
