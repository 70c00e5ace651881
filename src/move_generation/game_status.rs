//! Check, checkmate, and stalemate detection.
//!
//! Nothing here is stored on the state; every answer is recomputed from the
//! position. Expected to run once per ply, not once per candidate move.

use std::fmt;

use log::debug;

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::is_legal;
use crate::move_generation::move_generator::pseudo_legal_moves;

/// Outcome of the position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// At least one legal move and the king is safe.
    Ongoing,
    /// At least one legal move, but the king is attacked.
    Check,
    /// No legal move and the king is attacked.
    Checkmate,
    /// No legal move and the king is safe.
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(label)
    }
}

/// Whether any piece of the side to move has a legal move. Stops at the first one.
pub fn has_any_legal_move(game_state: &GameState) -> bool {
    game_state
        .board
        .pieces(game_state.side_to_move)
        .any(|(from, _)| {
            pseudo_legal_moves(game_state, from)
                .into_iter()
                .any(|mv| is_legal(game_state, mv))
        })
}

pub fn game_status(game_state: &GameState) -> GameStatus {
    let in_check = is_in_check(game_state);
    let can_move = has_any_legal_move(game_state);

    let status = match (in_check, can_move) {
        (false, true) => GameStatus::Ongoing,
        (true, true) => GameStatus::Check,
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
    };
    debug!(
        "{} to move, move {}: {status}",
        game_state.side_to_move, game_state.fullmove_number
    );
    status
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;
    use crate::move_generation::legal_move_apply::apply_move;
    use crate::move_generation::legal_move_generator::all_legal_moves;
    use crate::moves::move_descriptions::Move;
    use crate::utils::test_positions::{init_logging, sq, state_from_placement};

    #[test]
    fn starting_position_is_ongoing() {
        init_logging();
        let state = GameState::initial();
        assert!(has_any_legal_move(&state));
        assert_eq!(game_status(&state), GameStatus::Ongoing);
    }

    #[test]
    fn back_rank_mate_is_checkmate() {
        let state = state_from_placement("R5k1/5ppp/8/8/8/8/8/6K1", Color::Black);
        assert!(is_in_check(&state));
        assert!(!has_any_legal_move(&state));
        assert!(all_legal_moves(&state).is_empty());
        assert_eq!(game_status(&state), GameStatus::Checkmate);
        assert!(game_status(&state).is_terminal());
    }

    #[test]
    fn removing_the_checker_turns_mate_into_stalemate() {
        // Queen and king cover a7, b7 and b8; the rook on h8 gives check.
        let mate = state_from_placement("k6R/2Q5/1K6/8/8/8/8/8", Color::Black);
        assert_eq!(game_status(&mate), GameStatus::Checkmate);

        let stalemate = state_from_placement("k7/2Q5/1K6/8/8/8/8/8", Color::Black);
        assert!(!is_in_check(&stalemate));
        assert!(!has_any_legal_move(&stalemate));
        assert_eq!(game_status(&stalemate), GameStatus::Stalemate);
        assert!(game_status(&stalemate).is_terminal());
    }

    #[test]
    fn fools_mate_ends_the_game() {
        let mut state = GameState::initial();
        for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
            state = apply_move(&state, Move::quiet(sq(from), sq(to)));
        }
        assert_eq!(game_status(&state), GameStatus::Checkmate);
        assert_eq!(state.side_to_move, Color::White);
    }

    #[test]
    fn check_with_an_escape_is_only_check() {
        let state = state_from_placement("4k3/8/8/8/8/8/8/r3K3", Color::White);
        assert_eq!(game_status(&state), GameStatus::Check);
        assert!(!game_status(&state).is_terminal());
    }
}
