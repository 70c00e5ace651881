//! Square-centric board storage.
//!
//! `Board` is a plain 8x8 grid of optional pieces indexed `[row][col]`. It is
//! `Copy`, so every successor position owns its own grid and nothing aliases
//! a previous one.

use crate::game_state::chess_rules::{BOARD_SIZE, STARTING_BACK_RANK};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// The standard starting arrangement.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            for (col, kind) in STARTING_BACK_RANK.iter().enumerate() {
                board.set(
                    Position::new(color.home_row(), col as u8),
                    Some(Piece::new(color, *kind)),
                );
                board.set(
                    Position::new(color.pawn_start_row(), col as u8),
                    Some(Piece::new(color, PieceKind::Pawn)),
                );
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.squares[pos.row as usize][pos.col as usize]
    }

    #[inline]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.piece_at(pos).is_none()
    }

    #[inline]
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        self.squares[pos.row as usize][pos.col as usize] = piece;
    }

    /// Removes and returns whatever stands on `pos`.
    #[inline]
    pub fn take(&mut self, pos: Position) -> Option<Piece> {
        self.squares[pos.row as usize][pos.col as usize].take()
    }

    /// Builder form of [`Board::set`], handy for fixtures.
    #[inline]
    pub fn with_piece(mut self, pos: Position, piece: Piece) -> Self {
        self.set(pos, Some(piece));
        self
    }

    /// First square holding `color`'s king, scanning from a1.
    pub fn king_position(&self, color: Color) -> Option<Position> {
        let king = Piece::new(color, PieceKind::King);
        Position::all().find(|&pos| self.piece_at(pos) == Some(king))
    }

    /// Every piece of `color` with its square.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| match self.piece_at(pos) {
            Some(piece) if piece.color == color => Some((pos, piece)),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_board_has_thirty_two_pieces() {
        let board = Board::standard();
        assert_eq!(board.pieces(Color::White).count(), 16);
        assert_eq!(board.pieces(Color::Black).count(), 16);
        assert_eq!(
            board.piece_at(Position::new(0, 3)),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
        assert_eq!(
            board.piece_at(Position::new(6, 0)),
            Some(Piece::new(Color::Black, PieceKind::Pawn))
        );
        assert!(board.is_empty_at(Position::new(3, 4)));
    }

    #[test]
    fn king_lookup_finds_each_colour() {
        let board = Board::standard();
        assert_eq!(board.king_position(Color::White), Some(Position::new(0, 4)));
        assert_eq!(board.king_position(Color::Black), Some(Position::new(7, 4)));
        assert_eq!(Board::empty().king_position(Color::White), None);
    }

    #[test]
    fn take_vacates_the_square() {
        let mut board = Board::standard();
        let taken = board.take(Position::new(1, 4));
        assert_eq!(taken, Some(Piece::new(Color::White, PieceKind::Pawn)));
        assert!(board.is_empty_at(Position::new(1, 4)));
    }
}
