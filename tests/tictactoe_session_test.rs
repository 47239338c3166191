//! Tests for the game session: play, jump, history truncation and events.

use std::cell::RefCell;
use std::rc::Rc;

use tictactoe_timeline::{
    Board, GameEvent, GameSession, HistoryError, HistoryInvariants, InvariantSet, Move, MoveError,
    PlayOutcome, Player, Position, Square, Status,
};

fn play_all(session: &mut GameSession, cells: &[usize]) {
    for &cell in cells {
        let pos = Position::from_index(cell).expect("cell index 0-8");
        assert!(session.play(pos).is_played(), "move {cell} should be accepted");
    }
}

fn recorder(session: &mut GameSession) -> Rc<RefCell<Vec<GameEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    session.subscribe(Box::new(move |event: &GameEvent| sink.borrow_mut().push(*event)));
    events
}

#[test]
fn test_new_session() {
    let session = GameSession::new();
    assert_eq!(session.current_move(), 0);
    assert_eq!(session.history().len(), 1);
    assert_eq!(*session.current_board(), Board::new());
    assert_eq!(session.to_move(), Player::X);
    assert_eq!(session.snapshot().status_text(), "next player: X");
}

#[test]
fn test_three_move_scenario() {
    let mut session = GameSession::new();
    play_all(&mut session, &[4, 0, 8]);

    let x = Square::Occupied(Player::X);
    let o = Square::Occupied(Player::O);
    let e = Square::Empty;
    let snapshot = session.snapshot();
    assert_eq!(*snapshot.squares(), [o, e, e, e, x, e, e, e, x]);
    assert_eq!(snapshot.status_text(), "next player: O");
    assert_eq!(*snapshot.status(), Status::NextPlayer(Player::O));
    assert_eq!(*snapshot.winning_line(), None);
}

#[test]
fn test_win_scenario_blocks_further_play() {
    let mut session = GameSession::new();
    play_all(&mut session, &[0, 3, 1, 4, 2]);

    let snapshot = session.snapshot();
    assert_eq!(*snapshot.status(), Status::Winner(Player::X));
    assert_eq!(snapshot.status_text(), "winner: X!");
    assert_eq!(
        *snapshot.winning_line(),
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );

    let board = *session.current_board();
    let len = session.history().len();
    let outcome = session.play(Position::BottomRight);
    assert_eq!(outcome, PlayOutcome::Ignored(MoveError::GameOver(Player::X)));
    assert_eq!(*session.current_board(), board);
    assert_eq!(session.history().len(), len);
}

#[test]
fn test_winning_move_is_accepted_with_invariants_intact() {
    let mut session = GameSession::new();
    play_all(&mut session, &[0, 3, 1, 4]);

    let outcome = session.play(Position::TopRight);
    let PlayOutcome::Played(mv) = outcome else {
        panic!("winning move should be accepted, got {outcome:?}");
    };
    assert_eq!(mv.player(), Player::X);
    assert_eq!(mv.position(), Position::TopRight);
    assert_eq!(session.history().len(), 6);
    assert!(HistoryInvariants::check_all(session.history()).is_ok());
    assert_eq!(session.snapshot().status_text(), "winner: X!");
}

#[test]
fn test_occupied_square_is_ignored() {
    let mut session = GameSession::new();
    play_all(&mut session, &[4]);
    let before = session.history().clone();

    let outcome = session.play(Position::Center);
    assert_eq!(
        outcome,
        PlayOutcome::Ignored(MoveError::SquareOccupied(Position::Center))
    );
    assert_eq!(*session.history(), before);
    assert_eq!(session.to_move(), Player::O);
}

#[test]
fn test_jump_then_play_truncates_history() {
    let mut session = GameSession::new();
    play_all(&mut session, &[4, 0, 8]);

    session.jump_to(1).unwrap();
    assert_eq!(session.current_move(), 1);
    assert_eq!(session.history().len(), 4);
    assert_eq!(
        *session.current_board(),
        Board::new().with_square(Position::Center, Square::Occupied(Player::X))
    );
    assert_eq!(session.to_move(), Player::O);

    session.play(Position::TopRight);
    assert_eq!(session.history().len(), 3);
    assert_eq!(session.current_move(), 2);
    assert!(session.current_board().is_empty(Position::TopLeft));
    assert!(session.current_board().is_empty(Position::BottomRight));
    assert_eq!(
        session.current_board().get(Position::TopRight),
        Square::Occupied(Player::O)
    );
}

#[test]
fn test_jump_keeps_future_until_next_play() {
    let mut session = GameSession::new();
    play_all(&mut session, &[4, 0, 8]);

    session.jump_to(0).unwrap();
    session.jump_to(3).unwrap();
    assert_eq!(session.history().len(), 4);
    assert_eq!(session.snapshot().status_text(), "next player: O");
}

#[test]
fn test_jump_out_of_range_fails_loudly() {
    let mut session = GameSession::new();
    play_all(&mut session, &[4]);

    let err = session.jump_to(2).unwrap_err();
    assert_eq!(err, HistoryError::OutOfRange { target: 2, len: 2 });
    assert_eq!(session.current_move(), 1);
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn test_history_entry_labels() {
    let mut session = GameSession::new();
    play_all(&mut session, &[4, 0]);
    session.jump_to(1).unwrap();

    let snapshot = session.snapshot();
    let labels: Vec<&str> = snapshot.entries().iter().map(|e| e.label().as_str()).collect();
    assert_eq!(labels, ["go to game start", "show move #1", "show move #2"]);

    let current: Vec<bool> = snapshot.entries().iter().map(|e| *e.is_current()).collect();
    assert_eq!(current, [false, true, false]);
}

#[test]
fn test_draw_keeps_next_player_status() {
    let mut session = GameSession::new();
    play_all(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    let snapshot = session.snapshot();
    assert!(*snapshot.is_draw());
    assert_eq!(snapshot.status_text(), "next player: O");
    assert!(!session.play(Position::Center).is_played());
}

#[test]
fn test_listeners_receive_events() {
    let mut session = GameSession::new();
    let events = recorder(&mut session);

    session.play(Position::Center);
    session.play(Position::Center);
    session.jump_to(0).unwrap();
    let _ = session.jump_to(5);

    assert_eq!(
        *events.borrow(),
        vec![
            GameEvent::MovePlayed {
                mv: Move::new(Player::X, Position::Center),
                move_number: 1,
            },
            GameEvent::HistoryEntryClicked { index: 0 },
        ]
    );
}

#[test]
fn test_reset_keeps_listeners() {
    let mut session = GameSession::new();
    let events = recorder(&mut session);
    play_all(&mut session, &[4, 0]);

    session.reset();
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.to_move(), Player::X);

    session.play(Position::TopLeft);
    assert_eq!(events.borrow().len(), 3);
}

#[test]
fn test_invariants_hold_across_navigation() {
    let mut session = GameSession::new();
    let script: &[(Option<usize>, usize)] = &[
        (None, 4),
        (None, 0),
        (None, 8),
        (Some(1), 2),
        (None, 6),
        (Some(0), 0),
        (None, 1),
        (Some(2), 5),
    ];

    for &(jump, cell) in script {
        if let Some(index) = jump {
            session.jump_to(index).unwrap();
        }
        let pos = Position::from_index(cell).unwrap();
        session.play(pos);
        assert!(HistoryInvariants::check_all(session.history()).is_ok());
    }
}
