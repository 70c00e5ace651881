//! Errors returned at the crate's text and selection boundaries.
//!
//! The rules core (generation, application, status) never fails: an illegal
//! request is answered by absence from the legal-move list. `ChessErrors`
//! covers the edges where outside input enters the engine, such as parsing
//! coordinates or picking a move by its squares.

use thiserror::Error;

use crate::game_state::chess_types::{PieceKind, Position};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// A square name was not two characters long.
    #[error("invalid algebraic square: {0:?}")]
    InvalidAlgebraicSquare(String),

    /// A file or rank character was out of range (files `a..=h`, ranks `1..=8`).
    #[error("invalid algebraic character: {0:?}")]
    InvalidAlgebraicChar(char),

    /// Move text was not of the form `e2e4` or `e7e8q`.
    #[error("invalid long algebraic move: {0:?}")]
    InvalidLongAlgebraic(String),

    /// A promotion to something other than queen, rook, bishop or knight.
    #[error("cannot promote to {0:?}")]
    InvalidPromotion(PieceKind),

    /// No legal move from `from` to `to` in the current position.
    #[error("illegal move {from}{to}")]
    IllegalMove { from: Position, to: Position },
}
