//! End-to-end walkthroughs of each study mode.

mod common;

use common::fixtures::{abc_set, sample_set};
use common::tile_index;
use pretty_assertions::assert_eq;
use std::time::{Duration, Instant};
use study_core::{
    Advance, AnswerOutcome, FlashcardSession, ItemState, LearnSession, MatchGame, OptionMark,
    SelectOutcome, SessionEvent, Side, StudyMode, StudySettings,
};

#[test]
fn flashcard_walkthrough_wraps_and_resets_side() {
    let mut session = FlashcardSession::new(&abc_set());
    assert_eq!((session.index(), session.shown()), (0, Side::Term));

    session.next();
    assert_eq!((session.index(), session.shown()), (1, Side::Term));
    assert_eq!(session.shown_text(), "Bravo");

    session.flip();
    assert_eq!(session.shown(), Side::Definition);
    assert_eq!(session.shown_text(), "Second letter");

    session.next();
    assert_eq!((session.index(), session.shown()), (2, Side::Term));

    session.next();
    assert_eq!((session.index(), session.shown()), (0, Side::Term));
}

#[test]
fn match_two_cards_completes_after_both_pairs() {
    let start = Instant::now();
    let mut game = MatchGame::new(&sample_set(2), &StudySettings::seeded(21), start);
    assert_eq!(game.items().len(), 4);

    game.select(tile_index(&game, "c0", Side::Term), start);
    let outcome = game.select(tile_index(&game, "c0", Side::Definition), start);
    assert_eq!(outcome, SelectOutcome::Matched { complete: false });
    assert_eq!(game.matched_count(), 2);
    assert!(!game.is_complete());

    let later = start + Duration::from_millis(3_700);
    game.select(tile_index(&game, "c1", Side::Definition), later);
    let outcome = game.select(tile_index(&game, "c1", Side::Term), later);
    assert_eq!(outcome, SelectOutcome::Matched { complete: true });
    assert_eq!(game.matched_count(), 4);
    assert!(game.is_complete());
    assert_eq!(game.result().unwrap().elapsed_seconds, 3.7);
}

#[test]
fn match_mismatch_reverts_after_cooldown() {
    let now = Instant::now();
    let mut game = MatchGame::new(&sample_set(2), &StudySettings::seeded(22), now);
    let a = tile_index(&game, "c0", Side::Term);
    let b = tile_index(&game, "c1", Side::Term);

    game.select(a, now);
    let SelectOutcome::Mismatch(ticket) = game.select(b, now) else {
        panic!("expected a mismatch");
    };
    assert_eq!(game.state(a), Some(ItemState::Wrong));
    assert_eq!(game.state(b), Some(ItemState::Wrong));

    assert!(game.resolve_mismatch(ticket));
    assert_eq!(game.state(a), Some(ItemState::Unmatched));
    assert_eq!(game.state(b), Some(ItemState::Unmatched));
    assert!(game.selection().is_empty());
    assert_eq!(game.matched_count(), 0);
}

#[test]
fn learn_four_cards_with_wrong_first_answer() {
    let mut session = LearnSession::new(&sample_set(4), &StudySettings::seeded(23));
    assert_eq!(session.question_number(), 1);
    assert_eq!(session.total(), 4);

    let question = session.question().unwrap().clone();
    let wrong = (question.correct_index() + 1) % question.options().len();
    assert_eq!(session.select(wrong), AnswerOutcome::Incorrect);
    assert_eq!(session.score(), 0);
    let marks = session.question().unwrap().marks();
    assert_eq!(marks[question.correct_index()], OptionMark::Correct);
    assert_eq!(marks[wrong], OptionMark::Incorrect);

    assert_eq!(session.advance(), Advance::Next);
    assert_eq!(session.question_number(), 2);

    let result = loop {
        let correct = session.question().unwrap().correct_index();
        session.select(correct);
        assert!(!session.is_complete());
        match session.advance() {
            Advance::Next => {}
            Advance::Complete(result) => break result,
            Advance::Ignored => panic!("answered question must advance"),
        }
    };
    assert!(session.is_complete());
    assert_eq!(result.total, 4);
    assert_eq!(result.score, 3);

    let session_id = session.id();
    assert_eq!(
        session.exit(),
        SessionEvent::ExitRequested {
            mode: StudyMode::Learn,
            session: session_id
        }
    );
}
