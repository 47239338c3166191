//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use super::rules::check_winner;
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    player: Player,
    position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Reason a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The board already has three in a row.
    #[display("Game is already over ({} won)", _0)]
    GameOver(#[error(not(source))] Player),
}

/// Applies a move to a board, producing the next board.
///
/// The input board is never modified. A move is rejected when the board
/// already has a winner or the target square is taken; the winner check
/// runs first.
///
/// # Errors
///
/// Returns [`MoveError::GameOver`] or [`MoveError::SquareOccupied`].
#[instrument(skip(board), fields(position = %action.position(), player = %action.player()))]
pub fn apply_move(board: &Board, action: Move) -> Result<Board, MoveError> {
    if let Some(winner) = check_winner(board) {
        return Err(MoveError::GameOver(winner));
    }
    if !board.is_empty(action.position()) {
        return Err(MoveError::SquareOccupied(action.position()));
    }

    let next = board.with_square(action.position(), Square::Occupied(action.player()));
    trace!(occupied = next.occupied(), "Move applied");
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_move_sets_square() {
        let board = Board::new();
        let next = apply_move(&board, Move::new(Player::X, Position::Center)).unwrap();
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::X));
        assert!(board.is_empty(Position::Center));
    }

    #[test]
    fn test_apply_move_rejects_occupied() {
        let board = Board::new().with_square(Position::Center, Square::Occupied(Player::X));
        let result = apply_move(&board, Move::new(Player::O, Position::Center));
        assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));
    }

    #[test]
    fn test_game_over_checked_before_occupancy() {
        let board = Board::new()
            .with_square(Position::TopLeft, Square::Occupied(Player::X))
            .with_square(Position::TopCenter, Square::Occupied(Player::X))
            .with_square(Position::TopRight, Square::Occupied(Player::X));
        let result = apply_move(&board, Move::new(Player::O, Position::TopLeft));
        assert_eq!(result, Err(MoveError::GameOver(Player::X)));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::SquareOccupied(Position::Center).to_string(),
            "Square Center is already occupied"
        );
        assert_eq!(
            MoveError::GameOver(Player::O).to_string(),
            "Game is already over (O won)"
        );
    }
}
