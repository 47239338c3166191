//! Turn order derived from the move index.

use super::super::Player;

/// Returns the player to move after `move_index` moves have been made.
///
/// X moves on even indices, O on odd ones.
pub fn active_player(move_index: usize) -> Player {
    if move_index % 2 == 0 {
        Player::X
    } else {
        Player::O
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_moves_first() {
        assert_eq!(active_player(0), Player::X);
    }

    #[test]
    fn test_players_alternate() {
        for index in 0..20 {
            assert_eq!(active_player(index + 1), active_player(index).opponent());
        }
    }
}
