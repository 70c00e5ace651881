//! Complete game snapshot.
//!
//! `GameState` is the unit the engine works on: board, side to move,
//! castling rights, en-passant window, and clocks. It holds no history and no
//! reference to the state it came from; successors are produced by
//! [`apply_move`](crate::move_generation::legal_move_apply::apply_move), which
//! returns a fresh value and leaves its input untouched.

use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    /// Square skipped by a pawn that just advanced two ranks. Only ever set
    /// for the ply directly after that advance.
    pub en_passant_target: Option<Position>,
    /// Plies since the last pawn move or capture. Tracked, never enforced.
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

impl GameState {
    /// Standard starting position with White to move.
    pub fn initial() -> Self {
        Self {
            board: Board::standard(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::full(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Arbitrary arrangement with no castling rights and no en-passant window.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline]
    pub fn with_castling_rights(mut self, castling_rights: CastlingRights) -> Self {
        self.castling_rights = castling_rights;
        self
    }

    #[inline]
    pub fn with_en_passant_target(mut self, target: Option<Position>) -> Self {
        self.en_passant_target = target;
        self
    }

    /// Piece on `from` if it belongs to the side to move.
    #[inline]
    pub fn movable_piece_at(&self, from: Position) -> Option<Piece> {
        self.board
            .piece_at(from)
            .filter(|piece| piece.color == self.side_to_move)
    }
}

/// Standard chess starting position, White to move.
#[inline]
pub fn initial_state() -> GameState {
    GameState::initial()
}
