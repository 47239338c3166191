//! One-mark-per-move invariant: each entry adds one mark for the player to move.

use super::super::rules::active_player;
use super::super::{History, Square};
use super::Invariant;

/// Invariant: every entry adds exactly one mark.
///
/// Entry `i` equals entry `i - 1` plus one square that was empty and now
/// holds `active_player(i - 1)`. Occupied squares are never overwritten
/// or cleared, and the first mark is always X.
pub struct OneMarkPerMoveInvariant;

impl Invariant<History> for OneMarkPerMoveInvariant {
    fn holds(history: &History) -> bool {
        history
            .boards()
            .windows(2)
            .enumerate()
            .all(|(index, pair)| {
                let expected = Square::Occupied(active_player(index));
                let mut added = 0;
                for (before, after) in pair[0].squares().iter().zip(pair[1].squares()) {
                    match (before, after) {
                        (b, a) if b == a => {}
                        (Square::Empty, a) if *a == expected => added += 1,
                        _ => return false,
                    }
                }
                added == 1
            })
    }

    fn description() -> &'static str {
        "Each entry adds one mark for the player to move (X, O, X, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Player, Position};

    #[test]
    fn test_played_history_holds() {
        let mut history = History::new();
        for pos in [Position::TopLeft, Position::Center, Position::TopRight] {
            history.play(pos).unwrap();
        }
        assert!(OneMarkPerMoveInvariant::holds(&history));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let first = Board::new().with_square(Position::Center, Square::Occupied(Player::X));
        let second = first.with_square(Position::Center, Square::Occupied(Player::O));
        let history = History::from_parts(vec![Board::new(), first, second], 2);
        assert!(!OneMarkPerMoveInvariant::holds(&history));
    }

    #[test]
    fn test_unchanged_entry_violates() {
        let history = History::from_parts(vec![Board::new(), Board::new()], 1);
        assert!(!OneMarkPerMoveInvariant::holds(&history));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let first = Board::new().with_square(Position::TopLeft, Square::Occupied(Player::X));
        let second = first.with_square(Position::Center, Square::Occupied(Player::X));
        let history = History::from_parts(vec![Board::new(), first, second], 2);
        assert!(!OneMarkPerMoveInvariant::holds(&history));
    }

    #[test]
    fn test_o_moving_first_violates() {
        let first = Board::new().with_square(Position::Center, Square::Occupied(Player::O));
        let history = History::from_parts(vec![Board::new(), first], 1);
        assert!(!OneMarkPerMoveInvariant::holds(&history));
    }
}
