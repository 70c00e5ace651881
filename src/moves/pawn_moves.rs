//! Pawn geometry. Pawns are the only piece whose movement depends on colour.

use crate::game_state::chess_types::{Color, Position};

/// Square one step ahead of `from` for a pawn of `color`.
#[inline]
pub fn pawn_push_target(color: Color, from: Position) -> Option<Position> {
    from.offset(color.pawn_direction(), 0)
}

/// The (up to) two squares a pawn of `color` on `from` attacks.
#[inline]
pub fn pawn_attack_targets(color: Color, from: Position) -> impl Iterator<Item = Position> {
    let dir = color.pawn_direction();
    [-1i8, 1]
        .into_iter()
        .filter_map(move |d_col| from.offset(dir, d_col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pawns_push_toward_the_opponent() {
        let e2 = Position::new(1, 4);
        assert_eq!(pawn_push_target(Color::White, e2), Some(Position::new(2, 4)));
        assert_eq!(pawn_push_target(Color::Black, e2), Some(Position::new(0, 4)));
        assert_eq!(pawn_push_target(Color::White, Position::new(7, 0)), None);
    }

    #[test]
    fn edge_pawns_attack_one_square() {
        let a2 = Position::new(1, 0);
        let attacks: Vec<_> = pawn_attack_targets(Color::White, a2).collect();
        assert_eq!(attacks, vec![Position::new(2, 1)]);
        assert_eq!(pawn_attack_targets(Color::Black, Position::new(6, 4)).count(), 2);
    }
}
