//! Sliding-piece ray walking.

use crate::game_state::chess_types::Position;

/// Squares from `from` outward along `direction`, excluding `from`, stopping
/// at the board edge. Blockers are the caller's concern.
#[inline]
pub fn ray(from: Position, direction: (i8, i8)) -> impl Iterator<Item = Position> {
    let (d_row, d_col) = direction;
    std::iter::successors(from.offset(d_row, d_col), move |pos| {
        pos.offset(d_row, d_col)
    })
}
