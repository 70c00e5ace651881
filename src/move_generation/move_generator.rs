//! Pseudo-legal move dispatch and the generator seam used by callers.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::Move;

/// Moves that follow the movement pattern of the piece on `from`, without
/// checking whether they leave the mover's own king attacked.
///
/// Empty when `from` is empty or holds a piece of the side not to move.
/// This is a building block for the legality filter; callers deciding what a
/// player may do should use
/// [`legal_moves`](crate::move_generation::legal_move_generator::legal_moves).
pub fn pseudo_legal_moves(game_state: &GameState, from: Position) -> Vec<Move> {
    let mut out = Vec::new();
    let Some(piece) = game_state.movable_piece_at(from) else {
        return out;
    };

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, from, &mut out),
        PieceKind::Knight => generate_knight_moves(game_state, from, &mut out),
        PieceKind::Bishop => generate_bishop_moves(game_state, from, &mut out),
        PieceKind::Rook => generate_rook_moves(game_state, from, &mut out),
        PieceKind::Queen => generate_queen_moves(game_state, from, &mut out),
        PieceKind::King => generate_king_moves(game_state, from, &mut out),
    }

    out
}

/// Source of legal moves.
///
/// The engine ships the two-phase [`LegalMoveGenerator`]; a pin-aware
/// generator can implement this trait and be dropped in wherever moves are
/// consumed (perft, status evaluation) as long as it returns the same sets.
///
/// [`LegalMoveGenerator`]: crate::move_generation::legal_move_generator::LegalMoveGenerator
pub trait MoveGenerator: Send + Sync {
    fn legal_moves_from(&self, game_state: &GameState, from: Position) -> Vec<Move>;

    /// Legal moves of every piece belonging to the side to move.
    fn all_legal_moves(&self, game_state: &GameState) -> Vec<Move> {
        game_state
            .board
            .pieces(game_state.side_to_move)
            .flat_map(|(from, _)| self.legal_moves_from(game_state, from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_positions::sq;

    #[test]
    fn only_the_side_to_move_generates() {
        let state = GameState::initial();
        assert!(pseudo_legal_moves(&state, sq("e7")).is_empty());
        assert!(pseudo_legal_moves(&state, sq("e4")).is_empty());
        assert_eq!(pseudo_legal_moves(&state, sq("b1")).len(), 2);
    }

    #[test]
    fn starting_position_has_twenty_pseudo_legal_moves() {
        let state = GameState::initial();
        let total: usize = Position::all()
            .map(|from| pseudo_legal_moves(&state, from).len())
            .sum();
        assert_eq!(total, 20);
    }
}
