//! Rook move generation.
//!
//! Rays along ranks and files. Castling is generated from the king's side, so
//! a rook never emits a castle itself.

use crate::game_state::game_state::GameState;
use crate::game_state::chess_types::Position;
use crate::move_generation::legal_move_shared::push_rays;
use crate::moves::move_descriptions::Move;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

pub fn generate_rook_moves(game_state: &GameState, from: Position, out: &mut Vec<Move>) {
    push_rays(
        &game_state.board,
        game_state.side_to_move,
        from,
        &ROOK_DIRECTIONS,
        out,
    );
}
