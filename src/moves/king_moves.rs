use crate::game_state::chess_types::Position;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// On-board squares adjacent to `from`.
#[inline]
pub fn king_targets(from: Position) -> impl Iterator<Item = Position> {
    KING_OFFSETS
        .into_iter()
        .filter_map(move |(d_row, d_col)| from.offset(d_row, d_col))
}

#[cfg(test)]
mod tests {
    use super::king_targets;
    use crate::game_state::chess_types::Position;

    #[test]
    fn king_targets_shrink_at_edges() {
        assert_eq!(king_targets(Position::new(3, 3)).count(), 8);
        assert_eq!(king_targets(Position::new(0, 4)).count(), 5);
        assert_eq!(king_targets(Position::new(7, 7)).count(), 3);
    }
}
