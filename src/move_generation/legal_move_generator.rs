//! Full legal move generation pipeline.
//!
//! Generates pseudo-legal candidates per square, rejects castles that start
//! in, pass through, or land on an attacked square, then applies each
//! survivor and drops it if the mover's king is attacked afterwards.

use log::trace;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{is_king_attacked, is_square_attacked};
use crate::move_generation::move_generator::{pseudo_legal_moves, MoveGenerator};
use crate::moves::move_descriptions::Move;

/// Two-phase generator: generate broadly, then simulate and reject.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn legal_moves_from(&self, game_state: &GameState, from: Position) -> Vec<Move> {
        legal_moves(game_state, from)
    }
}

/// Moves the piece on `from` may legally make. This is the only list a
/// player's choice should be drawn from before calling `apply_move`.
pub fn legal_moves(game_state: &GameState, from: Position) -> Vec<Move> {
    let mut pseudo = pseudo_legal_moves(game_state, from);
    pseudo.retain(|&mv| is_legal(game_state, mv));
    pseudo
}

/// Legal moves of every piece belonging to the side to move.
pub fn all_legal_moves(game_state: &GameState) -> Vec<Move> {
    LegalMoveGenerator.all_legal_moves(game_state)
}

/// Whether a pseudo-legal candidate keeps the mover's king safe.
pub(crate) fn is_legal(game_state: &GameState, mv: Move) -> bool {
    let mover = game_state.side_to_move;

    if let Some(side) = mv.castling_side {
        let row = mv.from.row;
        let attacked = side
            .king_path_cols()
            .iter()
            .any(|&col| is_square_attacked(&game_state.board, Position::new(row, col), mover.opposite()));
        if attacked {
            trace!("discarding {mv}: castling path attacked");
            return false;
        }
    }

    let next = apply_move(game_state, mv);
    if is_king_attacked(&next.board, mover) {
        trace!("discarding {mv}: leaves {mover} king attacked");
        return false;
    }

    true
}
