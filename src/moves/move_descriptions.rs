//! Move value produced by the generator and consumed by the applier.
//!
//! A `Move` only makes sense against the `GameState` it was generated from;
//! it carries no board reference of its own.

use std::fmt;

use crate::game_state::chess_types::{CastleSide, PieceKind, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    /// Chosen promotion piece. `None` on a promoting pawn move means queen.
    pub promotion: Option<PieceKind>,
    pub is_capture: bool,
    pub is_en_passant: bool,
    pub castling_side: Option<CastleSide>,
}

impl Move {
    #[inline]
    pub const fn quiet(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            promotion: None,
            is_capture: false,
            is_en_passant: false,
            castling_side: None,
        }
    }

    #[inline]
    pub const fn capture(from: Position, to: Position) -> Self {
        Self {
            is_capture: true,
            ..Self::quiet(from, to)
        }
    }

    /// Pawn capture onto the en-passant target; the captured pawn sits
    /// beside `from`, not on `to`.
    #[inline]
    pub const fn en_passant(from: Position, to: Position) -> Self {
        Self {
            is_capture: true,
            is_en_passant: true,
            ..Self::quiet(from, to)
        }
    }

    /// King move of a castle; `to` is the king's landing square.
    #[inline]
    pub const fn castle(from: Position, to: Position, side: CastleSide) -> Self {
        Self {
            castling_side: Some(side),
            ..Self::quiet(from, to)
        }
    }

    /// Same move with an explicit promotion piece.
    #[inline]
    pub const fn with_promotion(self, kind: PieceKind) -> Self {
        Self {
            promotion: Some(kind),
            ..self
        }
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        self.castling_side.is_some()
    }

    /// Two-rank move along a file. Only meaningful for pawns.
    #[inline]
    pub const fn is_double_step(&self) -> bool {
        self.from.col == self.to.col && self.from.row.abs_diff(self.to.row) == 2
    }
}

/// Long algebraic form: `e2e4`, `e7e8n`, `e1g1`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}
