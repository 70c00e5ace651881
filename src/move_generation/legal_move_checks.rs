//! Attack detection and king safety.
//!
//! `is_square_attacked` answers a purely geometric question about a board: it
//! ignores whose turn it is and whether the attacker is pinned. The same
//! primitive serves both post-move king safety and castling-path checks.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::rays::ray;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

/// Whether any piece of `by_color` attacks `target` on `board`.
pub fn is_square_attacked(board: &Board, target: Position, by_color: Color) -> bool {
    let holds = |pos: Position, kind: PieceKind| board.piece_at(pos) == Some(Piece::new(by_color, kind));

    // An attacking pawn stands one row behind the target, seen from its own
    // direction of travel.
    let dir = by_color.pawn_direction();
    for d_col in [-1i8, 1] {
        if let Some(pos) = target.offset(-dir, d_col) {
            if holds(pos, PieceKind::Pawn) {
                return true;
            }
        }
    }

    if knight_targets(target).any(|pos| holds(pos, PieceKind::Knight)) {
        return true;
    }

    if slider_on_rays(board, target, by_color, &BISHOP_DIRECTIONS, PieceKind::Bishop) {
        return true;
    }
    if slider_on_rays(board, target, by_color, &ROOK_DIRECTIONS, PieceKind::Rook) {
        return true;
    }

    king_targets(target).any(|pos| holds(pos, PieceKind::King))
}

/// First piece met on each ray decides: `slider` or queen of `by_color` attacks.
fn slider_on_rays(
    board: &Board,
    target: Position,
    by_color: Color,
    directions: &[(i8, i8)],
    slider: PieceKind,
) -> bool {
    directions.iter().any(|&direction| {
        ray(target, direction)
            .find_map(|pos| board.piece_at(pos))
            .is_some_and(|piece| {
                piece.color == by_color && (piece.kind == slider || piece.kind == PieceKind::Queen)
            })
    })
}

/// Whether `color`'s king is attacked. A board without that king is never in check.
#[inline]
pub fn is_king_attacked(board: &Board, color: Color) -> bool {
    let Some(king_pos) = board.king_position(color) else {
        return false;
    };
    is_square_attacked(board, king_pos, color.opposite())
}

/// Whether the side to move is in check.
#[inline]
pub fn is_in_check(state: &GameState) -> bool {
    is_king_attacked(&state.board, state.side_to_move)
}
