use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;
use crate::moves::rays::ray;

/// Emits a move to `to` unless a friendly piece stands there.
#[inline]
pub fn push_step(board: &Board, color: Color, from: Position, to: Position, out: &mut Vec<Move>) {
    match board.piece_at(to) {
        None => out.push(Move::quiet(from, to)),
        Some(piece) if piece.color != color => out.push(Move::capture(from, to)),
        Some(_) => {}
    }
}

/// Walks each direction: empty squares continue the ray, an enemy piece is a
/// capture that ends it, a friendly piece ends it without a move.
pub fn push_rays(
    board: &Board,
    color: Color,
    from: Position,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &direction in directions {
        for to in ray(from, direction) {
            match board.piece_at(to) {
                None => out.push(Move::quiet(from, to)),
                Some(piece) => {
                    if piece.color != color {
                        out.push(Move::capture(from, to));
                    }
                    break;
                }
            }
        }
    }
}
