//! No-move-after-win invariant: a won board is always the last entry.

use super::super::History;
use super::super::rules::check_winner;
use super::Invariant;

/// Invariant: no entry follows a board that already has a winner.
///
/// Only the newest entry may hold a winning line.
pub struct NoMoveAfterWinInvariant;

impl Invariant<History> for NoMoveAfterWinInvariant {
    fn holds(history: &History) -> bool {
        let Some((_, earlier)) = history.boards().split_last() else {
            return true;
        };
        earlier.iter().all(|board| check_winner(board).is_none())
    }

    fn description() -> &'static str {
        "No move follows a win"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Player, Position, Square};

    fn x_top_row() -> Board {
        Board::new()
            .with_square(Position::TopLeft, Square::Occupied(Player::X))
            .with_square(Position::TopCenter, Square::Occupied(Player::X))
            .with_square(Position::TopRight, Square::Occupied(Player::X))
    }

    #[test]
    fn test_win_as_last_entry_holds() {
        let mut history = History::new();
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            history.play(pos).unwrap();
        }
        assert_eq!(history.len(), 6);
        assert!(check_winner(history.current_board()).is_some());
        assert!(NoMoveAfterWinInvariant::holds(&history));
    }

    #[test]
    fn test_single_winning_board_holds() {
        let history = History::from_parts(vec![Board::new(), x_top_row()], 1);
        assert!(NoMoveAfterWinInvariant::holds(&history));
    }

    #[test]
    fn test_move_after_win_violates() {
        let won = x_top_row();
        let after = won.with_square(Position::BottomLeft, Square::Occupied(Player::O));
        let history = History::from_parts(vec![Board::new(), won, after], 2);
        assert!(!NoMoveAfterWinInvariant::holds(&history));
    }

    #[test]
    fn test_empty_history_holds() {
        let history = History::from_parts(Vec::new(), 0);
        assert!(NoMoveAfterWinInvariant::holds(&history));
    }
}
